use crate::{config::Config, decode::decode_text, error::FilterError};
use std::{collections::HashSet, path::Path};

/// Characters to drop. Membership only; order and repetition in the source string don't matter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ForbiddenSet {
    chars: HashSet<char>,
}

impl ForbiddenSet {
    pub fn new(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    pub fn extend(&mut self, chars: &str) {
        self.chars.extend(chars.chars());
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<Option<&str>> for ForbiddenSet {
    fn from(chars: Option<&str>) -> Self {
        chars.map(Self::new).unwrap_or_default()
    }
}

pub fn filter_text(text: &str, forbidden: &ForbiddenSet) -> String {
    if forbidden.is_empty() {
        return text.to_string();
    }
    text.chars().filter(|ch| !forbidden.contains(*ch)).collect()
}

/// Checks the path without touching the file: it must be non-blank and name an existing file.
pub fn validate_path(path: Option<&str>) -> Result<&Path, FilterError> {
    let path = match path {
        Some(path) if !path.trim().is_empty() => Path::new(path),
        _ => return Err(FilterError::InvalidPath),
    };
    if !path.is_file() {
        return Err(FilterError::InvalidPath);
    }
    Ok(path)
}

/// Rewrites `path` with every forbidden character removed.
///
/// The file is read fully and closed before it is reopened for writing. A failed write may
/// leave it truncated; nothing is backed up. Output is always UTF-8 without a BOM.
pub fn filter_file(path: &Path, forbidden: &ForbiddenSet) -> Result<(), FilterError> {
    let source = std::fs::read(path)?;
    log::debug!("read {} bytes from {:?}", source.len(), path);
    let text = decode_text(&source)?;

    let filtered = filter_text(&text, forbidden);
    log::debug!(
        "removed {} characters",
        text.chars().count() - filtered.chars().count()
    );

    std::fs::write(path, &filtered)?;
    log::debug!("wrote {} bytes to {:?}", filtered.len(), path);
    Ok(())
}

#[derive(Debug)]
pub struct FilterRequest<'a> {
    pub path: Option<&'a str>,
    pub forbidden: Option<&'a str>,
    pub use_config: bool,
}

/// Validates the request, merges in configured characters, then filters the file.
pub fn process(request: &FilterRequest<'_>) -> Result<(), FilterError> {
    let path = validate_path(request.path).map_err(|err| {
        log::warn!("invalid path: {:?}", request.path);
        err
    })?;

    let mut forbidden = ForbiddenSet::from(request.forbidden);
    if request.use_config {
        let config: Config = crate::config::config_of_path(path)?;
        forbidden.extend(&config.filter.always_remove);
    }

    filter_file(path, &forbidden).map_err(|err| {
        if let FilterError::Io(io) = &err {
            log::error!("failed to filter {:?}: {}", path, io);
        }
        err
    })
}
