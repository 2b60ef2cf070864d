//! Config environment variable tests
//!
//! These tests verify that Config::from_env() reads the environment and
//! applies defaults. Tests use #[serial] to prevent races on shared env vars.

use account_plan_assistant::config::{Config, LogFormat};
use account_plan_assistant::AppError;
use serial_test::serial;
use std::env;

fn with_key() {
    env::set_var("GROQ_API_KEY", "gsk_test");
}

#[test]
#[serial]
fn test_missing_api_key_is_fatal() {
    env::remove_var("GROQ_API_KEY");

    let result = Config::from_env();
    match result {
        Err(AppError::Config { message }) => assert!(message.contains("GROQ_API_KEY")),
        other => panic!("expected config error, got {:?}", other.map(|_| ())),
    }
}

#[test]
#[serial]
fn test_blank_api_key_is_fatal() {
    env::set_var("GROQ_API_KEY", "   ");
    assert!(Config::from_env().is_err());
    env::remove_var("GROQ_API_KEY");
}

#[test]
#[serial]
fn test_defaults() {
    with_key();
    env::remove_var("GROQ_BASE_URL");
    env::remove_var("GROQ_MODEL");
    env::remove_var("REQUEST_TIMEOUT_MS");
    env::remove_var("TTS_COMMAND");

    let config = Config::from_env().unwrap();
    assert_eq!(config.groq.api_key, "gsk_test");
    assert_eq!(config.groq.base_url, "https://api.groq.com/openai");
    assert_eq!(config.generation.model, "llama-3.3-70b-versatile");
    assert!(config.request.timeout_ms.is_none());
    assert!(config.voice.command.is_none());
}

#[test]
#[serial]
fn test_custom_base_url_trims_slash() {
    with_key();
    env::set_var("GROQ_BASE_URL", "http://localhost:8080/");

    let config = Config::from_env().unwrap();
    assert_eq!(config.groq.base_url, "http://localhost:8080");

    env::remove_var("GROQ_BASE_URL");
}

#[test]
#[serial]
fn test_custom_generation_parameters() {
    with_key();
    env::set_var("GROQ_MODEL", "llama-3.1-8b-instant");
    env::set_var("GENERATION_TEMPERATURE", "0.2");
    env::set_var("GENERATION_MAX_TOKENS", "2048");
    env::set_var("ENHANCE_MAX_TOKENS", "1024");

    let config = Config::from_env().unwrap();
    assert_eq!(config.generation.model, "llama-3.1-8b-instant");
    assert_eq!(config.generation.temperature, 0.2);
    assert_eq!(config.generation.max_tokens, 2048);
    assert_eq!(config.generation.enhance_max_tokens, 1024);

    env::remove_var("GROQ_MODEL");
    env::remove_var("GENERATION_TEMPERATURE");
    env::remove_var("GENERATION_MAX_TOKENS");
    env::remove_var("ENHANCE_MAX_TOKENS");
}

#[test]
#[serial]
fn test_invalid_number_uses_default() {
    with_key();
    env::set_var("GENERATION_TOP_P", "not-a-number");

    let config = Config::from_env().unwrap();
    assert_eq!(config.generation.top_p, 0.95);

    env::remove_var("GENERATION_TOP_P");
}

#[test]
#[serial]
fn test_request_timeout() {
    with_key();
    env::set_var("REQUEST_TIMEOUT_MS", "60000");

    let config = Config::from_env().unwrap();
    assert_eq!(config.request.timeout_ms, Some(60000));

    env::remove_var("REQUEST_TIMEOUT_MS");
}

#[test]
#[serial]
fn test_json_log_format() {
    with_key();
    env::set_var("LOG_FORMAT", "JSON");

    let config = Config::from_env().unwrap();
    assert_eq!(config.logging.format, LogFormat::Json);

    env::remove_var("LOG_FORMAT");
}

#[test]
#[serial]
fn test_voice_and_export_settings() {
    with_key();
    env::set_var("TTS_COMMAND", "espeak -s 160");
    env::set_var("EXPORT_DIR", "/tmp/plans");

    let config = Config::from_env().unwrap();
    assert_eq!(config.voice.command.as_deref(), Some("espeak -s 160"));
    assert_eq!(config.export.dir.to_str().unwrap(), "/tmp/plans");

    env::remove_var("TTS_COMMAND");
    env::remove_var("EXPORT_DIR");
}
