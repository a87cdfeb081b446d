pub mod config;
pub mod errors;

pub use config::{
    AppConfig, ApiConfig, ConfigOverrides, FailurePolicy, LoggingConfig, OutputConfig,
    OutputQuoting, TranslationDefaults,
};
pub use errors::{exit_code_for, ErrorKind, Result, TranslatorError};

pub fn sanitize_cell(value: &str) -> String {
    if value.starts_with('=')
        || value.starts_with('+')
        || value.starts_with('-')
        || value.starts_with('@')
    {
        format!("'{}", value)
    } else {
        value.to_string()
    }
}
