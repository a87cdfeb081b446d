use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Translation service error ({status}): {message}")]
    ServiceError { status: u16, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Output writer not initialized")]
    WriterNotInitialized,
}

pub type Result<T> = std::result::Result<T, TranslatorError>;

/// Coarse classification used for rendering failures and picking the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Service,
    Io,
    Config,
    Input,
}

impl ErrorKind {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::Service => 1,
            ErrorKind::Io => 2,
            ErrorKind::Config => 3,
            ErrorKind::Input => 4,
        }
    }
}

impl TranslatorError {
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        TranslatorError::ServiceError {
            status,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslatorError::HttpError(_)
            | TranslatorError::JsonError(_)
            | TranslatorError::ServiceError { .. } => ErrorKind::Service,
            TranslatorError::IoError(_)
            | TranslatorError::CsvError(_)
            | TranslatorError::WriterNotInitialized => ErrorKind::Io,
            TranslatorError::ConfigError(_) => ErrorKind::Config,
            TranslatorError::InputError(_) => ErrorKind::Input,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}

/// Process exit status for a run: the first failure decides, none means success.
pub fn exit_code_for(errors: &[TranslatorError]) -> i32 {
    errors.first().map_or(0, TranslatorError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_exit_code_one() {
        let err = TranslatorError::service(403, "Daily Limit Exceeded");
        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "Translation service error (403): Daily Limit Exceeded"
        );
    }

    #[test]
    fn io_errors_map_to_exit_code_two() {
        let err: TranslatorError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(TranslatorError::WriterNotInitialized.exit_code(), 2);
    }

    #[test]
    fn config_and_input_errors_have_distinct_codes() {
        assert_eq!(TranslatorError::ConfigError("no key".into()).exit_code(), 3);
        assert_eq!(TranslatorError::InputError("missing".into()).exit_code(), 4);
    }

    #[test]
    fn exit_code_follows_first_error() {
        assert_eq!(exit_code_for(&[]), 0);
        let errors = vec![
            TranslatorError::InputError("missing".into()),
            TranslatorError::service(500, "backend"),
        ];
        assert_eq!(exit_code_for(&errors), 4);
    }
}
