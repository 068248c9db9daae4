#[derive(Debug)]
pub enum FilterError {
    InvalidPath,
    Io(std::io::Error),
    Unexpected(String),
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidPath => write!(f, "invalid file path")?,
            Self::Io(err) => write!(f, "file I/O failed: {err}")?,
            Self::Unexpected(message) => write!(f, "{message}")?,
        };
        Ok(())
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FilterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for FilterError {
    fn from(err: anyhow::Error) -> Self {
        Self::Unexpected(format!("{err:#}"))
    }
}

/// What a single run ended with. Rendered as one status line on stdout.
#[derive(Debug)]
pub enum Outcome {
    Success,
    Failed(FilterError),
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Self::Success => "Обработка завершена успешно.".to_string(),
            Self::Failed(FilterError::InvalidPath) => "Некорректный путь к файлу.".to_string(),
            Self::Failed(FilterError::Io(_)) => "Ошибка при работе с файлом.".to_string(),
            Self::Failed(FilterError::Unexpected(message)) => {
                format!("Неожиданная ошибка: {message}")
            }
        }
    }
}

impl From<Result<(), FilterError>> for Outcome {
    fn from(result: Result<(), FilterError>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(err) => Self::Failed(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{FilterError, Outcome};
    use anyhow::Context;

    #[test]
    fn render_each_outcome() {
        assert_eq!(Outcome::Success.message(), "Обработка завершена успешно.");
        assert_eq!(
            Outcome::Failed(FilterError::InvalidPath).message(),
            "Некорректный путь к файлу."
        );
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(
            Outcome::Failed(FilterError::Io(io)).message(),
            "Ошибка при работе с файлом."
        );
        assert_eq!(
            Outcome::Failed(FilterError::Unexpected("boom".to_string())).message(),
            "Неожиданная ошибка: boom"
        );
    }

    #[test]
    fn anyhow_errors_keep_their_context() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("bad yaml")).context("load config");
        let err = FilterError::from(result.unwrap_err());
        match err {
            FilterError::Unexpected(message) => assert_eq!(message, "load config: bad yaml"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
