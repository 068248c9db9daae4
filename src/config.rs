use anyhow::Context;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".charstrip.yml";

#[derive(Debug, Default, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterConfig,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct FilterConfig {
    /// Characters removed on every run, on top of the ones given by the user.
    #[serde(default)]
    pub always_remove: String,
}

pub fn config_of_path(file_path: &Path) -> anyhow::Result<Config> {
    let dir_path = search_root(file_path)?;
    config_of_dir(&dir_path)
}

/// Absolute directory of `file_path`. Relative targets walk up past the working directory too.
fn search_root(file_path: &Path) -> anyhow::Result<PathBuf> {
    let dir_path = match file_path.parent() {
        Some(dir_path) if !dir_path.as_os_str().is_empty() => dir_path,
        _ => Path::new("."),
    };
    std::fs::canonicalize(dir_path)
        .with_context(|| format!("failed to resolve {}", dir_path.display()))
}

pub fn config_of_dir(dir_path: &Path) -> anyhow::Result<Config> {
    let config_path = find_config_file_path(dir_path);
    let config = match config_path {
        Some(config_path) => {
            log::debug!("using config {:?}", config_path);
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            if content.trim().is_empty() {
                Config::default()
            } else {
                serde_yaml::from_str(&content)
                    .with_context(|| format!("failed to parse {}", config_path.display()))?
            }
        }
        None => Config::default(),
    };
    Ok(config)
}

fn find_config_file_path(base: &Path) -> Option<PathBuf> {
    base.ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}
