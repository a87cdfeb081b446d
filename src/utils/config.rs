use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_TRANSLATE_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub translation: TranslationDefaults,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub api_key_env: String,
    pub application_name: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationDefaults {
    pub target_lang: String,
    pub source_lang: Option<String>,
    pub failure_policy: FailurePolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub quoting: OutputQuoting,
    pub sanitize_cells: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// What the exporter does when a single item fails to translate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failed item, keeping the lines written so far.
    #[default]
    Abort,
    /// Record the failure and carry on with the next item.
    Skip,
}

impl std::str::FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "skip" => Ok(FailurePolicy::Skip),
            other => Err(format!("unknown failure policy '{}', expected abort or skip", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputQuoting {
    /// Fields are joined with a comma as-is, embedded commas and newlines included.
    #[default]
    Raw,
    /// Fields are quoted when they contain a delimiter, quote or line break.
    Quoted,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub output: Option<PathBuf>,
    pub target_lang: Option<String>,
    pub source_lang: Option<String>,
    pub failure_policy: Option<FailurePolicy>,
    pub quoted: bool,
    pub sanitize_cells: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://translation.googleapis.com/language/translate/v2".to_string(),
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            application_name: "Translate API Sample".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for TranslationDefaults {
    fn default() -> Self {
        Self {
            target_lang: "pt".to_string(),
            source_lang: None,
            failure_policy: FailurePolicy::Abort,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("GoogleTranslate.csv"),
            quoting: OutputQuoting::Raw,
            sanitize_cells: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &str) -> crate::utils::errors::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::utils::errors::TranslatorError::ConfigError(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> crate::utils::errors::Result<Self> {
        toml::from_str(content)
            .map_err(|e| crate::utils::errors::TranslatorError::ConfigError(e.to_string()))
    }

    /// Loads `path`, or returns `None` when there is no such file.
    pub fn load(path: &str) -> crate::utils::errors::Result<Option<Self>> {
        if !Path::new(path).exists() {
            return Ok(None);
        }
        Self::load_from_file(path).map(Some)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(output) = overrides.output {
            self.output.path = output;
        }
        if let Some(target) = overrides.target_lang {
            self.translation.target_lang = target;
        }
        if let Some(source) = overrides.source_lang {
            self.translation.source_lang = Some(source);
        }
        if let Some(policy) = overrides.failure_policy {
            self.translation.failure_policy = policy;
        }
        if overrides.quoted {
            self.output.quoting = OutputQuoting::Quoted;
        }
        if overrides.sanitize_cells {
            self.output.sanitize_cells = true;
        }
    }

    /// The API key comes from the environment first, then from the config file.
    pub fn resolve_api_key(&self) -> crate::utils::errors::Result<String> {
        let from_env = std::env::var(&self.api.api_key_env).ok();
        from_env
            .or_else(|| self.api.api_key.clone())
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                crate::utils::errors::TranslatorError::ConfigError(format!(
                    "no API key: set {} or api.api_key in the config file",
                    self.api.api_key_env
                ))
            })
    }
}
