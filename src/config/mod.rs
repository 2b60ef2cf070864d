use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub groq: GroqConfig,
    pub generation: GenerationConfig,
    pub logging: LoggingConfig,
    pub request: RequestConfig,
    pub voice: VoiceConfig,
    pub export: ExportConfig,
}

/// Hosted completion endpoint configuration
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub base_url: String,
}

/// Fixed sampling parameters sent with every completion
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub enhance_max_tokens: u32,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// HTTP request configuration
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// `None` leaves the transport default in place.
    pub timeout_ms: Option<u64>,
}

/// Voice playback configuration
#[derive(Debug, Clone, Default)]
pub struct VoiceConfig {
    /// External text-to-speech program fed the spoken text on stdin.
    pub command: Option<String>,
}

/// Export file configuration
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub dir: PathBuf,
}

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let groq = GroqConfig {
            api_key: env::var("GROQ_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| AppError::Config {
                    message: "GROQ_API_KEY is required".to_string(),
                })?,
            base_url: env::var("GROQ_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        };

        let defaults = GenerationConfig::default();
        let generation = GenerationConfig {
            model: env::var("GROQ_MODEL").unwrap_or(defaults.model),
            temperature: parse_env("GENERATION_TEMPERATURE").unwrap_or(defaults.temperature),
            max_tokens: parse_env("GENERATION_MAX_TOKENS").unwrap_or(defaults.max_tokens),
            top_p: parse_env("GENERATION_TOP_P").unwrap_or(defaults.top_p),
            enhance_max_tokens: parse_env("ENHANCE_MAX_TOKENS")
                .unwrap_or(defaults.enhance_max_tokens),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let request = RequestConfig {
            timeout_ms: parse_env("REQUEST_TIMEOUT_MS"),
        };

        let voice = VoiceConfig {
            command: env::var("TTS_COMMAND")
                .ok()
                .filter(|c| !c.trim().is_empty()),
        };

        let export = ExportConfig {
            dir: PathBuf::from(env::var("EXPORT_DIR").unwrap_or_else(|_| ".".to_string())),
        };

        Ok(Config {
            groq,
            generation,
            logging,
            request,
            voice,
            export,
        })
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 8192,
            top_p: 0.95,
            enhance_max_tokens: 4096,
        }
    }
}
