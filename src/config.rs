use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};
use crate::services::response_parser::ParsePolicy;

pub const DEFAULT_COMPLETION_API_BASE: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_COMPLETION_MODEL: &str = "gemini-2.0-flash";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub completion_api_key: Option<SecretString>,
    pub completion_api_base: String,
    pub completion_model: String,
    pub completion_temperature: f32,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub parse_policy: ParsePolicy,
    pub max_upload_bytes: usize,
    pub default_question_count: u32,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    /// Reads settings from the environment. Unset or unparsable numeric values
    /// fall back to defaults; an unknown `PARSE_POLICY` is an error.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: parse_or("WEB_SERVER_PORT", 8080),
            completion_api_key: non_blank_var("COMPLETION_API_KEY")
                .or_else(|| non_blank_var("GOOGLE_API_KEY"))
                .map(SecretString::from),
            completion_api_base: env::var("COMPLETION_API_BASE")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_API_BASE.to_string()),
            completion_model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_MODEL.to_string()),
            completion_temperature: parse_or("COMPLETION_TEMPERATURE", 0.0),
            chunk_size: parse_or("CHUNK_SIZE", 2048),
            chunk_overlap: parse_or("CHUNK_OVERLAP", 20),
            parse_policy: parse_policy(non_blank_var("PARSE_POLICY").as_deref())?,
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", 20 * 1024 * 1024),
            default_question_count: parse_or("DEFAULT_QUESTION_COUNT", 10),
            cors_allowed_origin: non_blank_var("CORS_ALLOWED_ORIGIN"),
        })
    }

    /// Rejects settings the text splitter or completion client cannot work with.
    /// A missing server key is allowed: users can supply their own per request.
    pub fn validate(&self) -> AppResult<()> {
        if self.chunk_size == 0 {
            return Err(AppError::ValidationError(
                "CHUNK_SIZE must be greater than zero".to_string(),
            ));
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(AppError::ValidationError(format!(
                "CHUNK_OVERLAP ({}) must be smaller than CHUNK_SIZE ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }

        if !(0.0..=2.0).contains(&self.completion_temperature) {
            return Err(AppError::ValidationError(format!(
                "COMPLETION_TEMPERATURE ({}) must be between 0.0 and 2.0",
                self.completion_temperature
            )));
        }

        if self.default_question_count == 0 {
            return Err(AppError::ValidationError(
                "DEFAULT_QUESTION_COUNT must be at least 1".to_string(),
            ));
        }

        if self.completion_api_key.is_none() {
            log::warn!(
                "No COMPLETION_API_KEY or GOOGLE_API_KEY set; users must supply a key per request"
            );
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            completion_api_key: Some(SecretString::from("test-api-key".to_string())),
            completion_api_base: "http://localhost:9999/v1".to_string(),
            completion_model: "test-model".to_string(),
            completion_temperature: 0.0,
            chunk_size: 2048,
            chunk_overlap: 20,
            parse_policy: ParsePolicy::Lenient,
            max_upload_bytes: 1024 * 1024,
            default_question_count: 10,
            cors_allowed_origin: None,
        }
    }
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_policy(value: Option<&str>) -> AppResult<ParsePolicy> {
    match value {
        None => Ok(ParsePolicy::default()),
        Some(value) => value
            .parse()
            .map_err(|err| AppError::ValidationError(format!("PARSE_POLICY: {}", err))),
    }
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
