use std::{env, fmt, path::PathBuf, str::FromStr};

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

/// When the knowledge-base folder is scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Load once at start; only an explicit reload refreshes it.
    Static,
    /// Rescan the folder on every request.
    Dynamic,
}

/// How PDF content is handed to the model when documents are loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroundingMode {
    /// Raw PDF bytes sent as inline attachments ahead of the instructions.
    Attachments,
    /// Extracted text placed inline in a single text prompt.
    ExtractedText,
}

/// How strictly a text-grounded answer must stick to the supplied context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextPolicy {
    Strict,
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl FromStr for RefreshPolicy {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(RefreshPolicy::Static),
            "dynamic" => Ok(RefreshPolicy::Dynamic),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl FromStr for GroundingMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attachments" | "attachment" | "binary" => Ok(GroundingMode::Attachments),
            "text" | "extracted" | "extracted_text" => Ok(GroundingMode::ExtractedText),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl FromStr for ContextPolicy {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ContextPolicy::Strict),
            "lenient" => Ok(ContextPolicy::Lenient),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: Option<SecretString>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub model_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub knowledge_base_dir: PathBuf,
    pub corpus_refresh: RefreshPolicy,
    pub grounding: GroundingMode,
    pub context_policy: ContextPolicy,
    pub require_api_key: bool,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: "gemini-2.0-flash".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            model_timeout_secs: 60,
            web_server_host: "0.0.0.0".to_string(),
            web_server_port: 3000,
            knowledge_base_dir: PathBuf::from("knowledge_base"),
            corpus_refresh: RefreshPolicy::Dynamic,
            grounding: GroundingMode::Attachments,
            context_policy: ContextPolicy::Lenient,
            require_api_key: false,
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            gemini_api_key: env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: env::var("GEMINI_API_BASE_URL").unwrap_or(defaults.gemini_base_url),
            model_timeout_secs: parse_env("MODEL_TIMEOUT_SECS", defaults.model_timeout_secs),
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or(defaults.web_server_host),
            web_server_port: parse_env("PORT", defaults.web_server_port),
            knowledge_base_dir: env::var("KNOWLEDGE_BASE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.knowledge_base_dir),
            corpus_refresh: parse_env("CORPUS_REFRESH", defaults.corpus_refresh),
            grounding: parse_env("PDF_GROUNDING", defaults.grounding),
            context_policy: parse_env("CONTEXT_POLICY", defaults.context_policy),
            require_api_key: parse_env("REQUIRE_API_KEY", defaults.require_api_key),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes),
        }
    }

    pub fn api_key_configured(&self) -> bool {
        self.gemini_api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
    }

    /// Fails when the server is set to refuse starting without a credential.
    pub fn validate(&self) -> AppResult<()> {
        if self.require_api_key && !self.api_key_configured() {
            return Err(AppError::ConfigurationError(
                "GEMINI_API_KEY is not set and REQUIRE_API_KEY is enabled".to_string(),
            ));
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: Some(SecretString::from("test-api-key".to_string())),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            ..Self::default()
        }
    }
}

fn parse_env<T>(name: &str, default: T) -> T
where
    T: FromStr + fmt::Debug,
    T::Err: fmt::Display,
{
    match env::var(name) {
        Ok(raw) => parse_or_default(name, &raw, default),
        Err(_) => default,
    }
}

fn parse_or_default<T>(name: &str, raw: &str, default: T) -> T
where
    T: FromStr + fmt::Debug,
    T::Err: fmt::Display,
{
    match raw.trim().parse() {
        Ok(value) => value,
        Err(err) => {
            log::warn!("Ignoring {}={:?} ({}); using {:?}", name, raw, err, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.web_server_port, 3000);
        assert_eq!(config.knowledge_base_dir, PathBuf::from("knowledge_base"));
        assert_eq!(config.corpus_refresh, RefreshPolicy::Dynamic);
        assert_eq!(config.grounding, GroundingMode::Attachments);
        assert_eq!(config.context_policy, ContextPolicy::Lenient);
        assert!(!config.require_api_key);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert!(config.api_key_configured());
        assert_eq!(config.web_server_host, "127.0.0.1");
    }

    #[test]
    fn test_switches_parse() {
        assert_eq!("static".parse::<RefreshPolicy>(), Ok(RefreshPolicy::Static));
        assert_eq!(" Dynamic ".parse::<RefreshPolicy>(), Ok(RefreshPolicy::Dynamic));
        assert_eq!("text".parse::<GroundingMode>(), Ok(GroundingMode::ExtractedText));
        assert_eq!("attachments".parse::<GroundingMode>(), Ok(GroundingMode::Attachments));
        assert_eq!("STRICT".parse::<ContextPolicy>(), Ok(ContextPolicy::Strict));
        assert!("sometimes".parse::<RefreshPolicy>().is_err());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        assert_eq!(parse_or_default("PORT", "not-a-port", 3000u16), 3000);
        assert_eq!(parse_or_default("PORT", "8081", 3000u16), 8081);
        assert_eq!(
            parse_or_default("CONTEXT_POLICY", "whatever", ContextPolicy::Lenient),
            ContextPolicy::Lenient
        );
    }

    #[test]
    fn test_validate_strict_without_key() {
        let config = Config {
            require_api_key: true,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AppError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_validate_lenient_without_key() {
        assert!(Config::default().validate().is_ok());
        let strict_with_key = Config {
            require_api_key: true,
            ..Config::test_config()
        };
        assert!(strict_with_key.validate().is_ok());
    }
}
