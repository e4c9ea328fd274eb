use std::path::PathBuf;

use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|--------|------|
/// | WORK_DIR | ./data | work directory (database) |
/// | HTTP_PORT | 3000 | HTTP port |
/// | ENVIRONMENT | development | runtime environment |
/// | LOG_LEVEL | info | default log level |
/// | LOG_DIR | - | log directory (daily rolling files when set) |
/// | ADMIN_PHONE | 9999999999 | admin phone number |
/// | MOCK_OTP_CODE | 1234 | simulated one-time code |
/// | GEMINI_API_KEY / API_KEY | - | text generation key (fallback copy when unset) |
/// | GEMINI_MODEL | gemini-2.5-flash | text generation model |
/// | GEMINI_BASE_URL | - | text generation endpoint |
/// | TEXT_GEN_TIMEOUT_MS | 8000 | text generation timeout (ms) |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/srv/shop HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding the database file
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// Admin phone number
    pub admin_phone: String,
    /// Simulated one-time code
    pub otp_code: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: Option<String>,
    /// Text generation timeout (ms)
    pub text_gen_timeout_ms: u64,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset variables fall back to their defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            admin_phone: std::env::var("ADMIN_PHONE").unwrap_or_else(|_| "9999999999".into()),
            otp_code: std::env::var("MOCK_OTP_CODE").unwrap_or_else(|_| "1234".into()),
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .ok()
                .filter(|k| !k.is_empty()),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".into()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL").ok().filter(|u| !u.is_empty()),
            text_gen_timeout_ms: std::env::var("TEXT_GEN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
        }
    }

    /// Override selected values
    ///
    /// Mostly used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Database file path
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database").join("shop.redb")
    }

    /// Whether running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
