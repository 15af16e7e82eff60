use std::sync::Arc;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// One prompt in, one free-form completion out. No retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

/// Builds a completion client for a given credential.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionConnector: Send + Sync {
    fn connect(&self, api_key: SecretString) -> Arc<dyn CompletionService>;
}

#[derive(Clone, Debug)]
pub struct CompletionSettings {
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
}

impl From<&Config> for CompletionSettings {
    fn from(config: &Config) -> Self {
        Self {
            api_base: config.completion_api_base.clone(),
            model: config.completion_model.clone(),
            temperature: config.completion_temperature,
        }
    }
}

/// Chat-completions client for any OpenAI-compatible endpoint.
pub struct OpenAiCompletionService {
    client: Client<OpenAIConfig>,
    settings: CompletionSettings,
}

impl OpenAiCompletionService {
    pub fn new(api_key: SecretString, settings: CompletionSettings) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(&settings.api_base);

        Self {
            client: Client::with_config(openai_config),
            settings,
        }
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.settings.model,
            "temperature": self.settings.temperature,
            "messages": [
                { "role": "user", "content": prompt }
            ]
        })
    }
}

#[async_trait]
impl CompletionService for OpenAiCompletionService {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        log::info!(
            "Requesting completion from model {} ({} prompt characters)",
            self.settings.model,
            prompt.chars().count()
        );

        let response: Value = self
            .client
            .chat()
            .create_byot(self.request_body(prompt))
            .await?;

        first_message_content(&response).ok_or_else(|| {
            AppError::CompletionServiceError("Completion response contained no message content".to_string())
        })
    }
}

fn first_message_content(response: &Value) -> Option<String> {
    response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(str::to_string)
}

pub struct OpenAiConnector {
    settings: CompletionSettings,
}

impl OpenAiConnector {
    pub fn new(settings: CompletionSettings) -> Self {
        Self { settings }
    }
}

impl CompletionConnector for OpenAiConnector {
    fn connect(&self, api_key: SecretString) -> Arc<dyn CompletionService> {
        Arc::new(OpenAiCompletionService::new(api_key, self.settings.clone()))
    }
}
