use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{McqRecord, PromptContext},
    services::{
        completion_service::CompletionConnector,
        document_service::DocumentLoader,
        prompt_service::build_prompt,
        response_parser::{parse_completion, ParsePolicy, RejectedBlock},
        scoped_upload::ScopedUpload,
    },
};

pub struct GenerateMcqCommand {
    pub document: Vec<u8>,
    pub question_count: u32,
    /// Key typed into the form; takes precedence over the server key.
    pub api_key: Option<SecretString>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McqBatch {
    pub records: Vec<McqRecord>,
    pub rejected: Vec<RejectedBlock>,
    pub requested_count: u32,
}

pub struct McqService {
    loader: Arc<dyn DocumentLoader>,
    connector: Arc<dyn CompletionConnector>,
    server_key: Option<SecretString>,
    parse_policy: ParsePolicy,
}

impl McqService {
    pub fn new(
        loader: Arc<dyn DocumentLoader>,
        connector: Arc<dyn CompletionConnector>,
        config: &Config,
    ) -> Self {
        Self {
            loader,
            connector,
            server_key: config.completion_api_key.clone(),
            parse_policy: config.parse_policy,
        }
    }

    pub fn server_key_configured(&self) -> bool {
        self.server_key.is_some()
    }

    pub async fn generate(&self, command: GenerateMcqCommand) -> AppResult<McqBatch> {
        let api_key = self.resolve_api_key(command.api_key)?;

        // removed on drop, whether or not a later stage fails
        let upload = ScopedUpload::write(&command.document)?;

        let chunks = self.loader.load(upload.path()).await?;

        let prompt = build_prompt(&PromptContext::new(command.question_count, chunks));

        let completion = self.connector.connect(api_key).complete(&prompt).await?;

        let outcome = parse_completion(&completion, self.parse_policy)?;

        if outcome.records.len() != command.question_count as usize {
            log::info!(
                "Requested {} question(s), received {}",
                command.question_count,
                outcome.records.len()
            );
        }

        Ok(McqBatch {
            records: outcome.records,
            rejected: outcome.rejected,
            requested_count: command.question_count,
        })
    }

    fn resolve_api_key(&self, supplied: Option<SecretString>) -> AppResult<SecretString> {
        supplied
            .filter(|key| !key.expose_secret().trim().is_empty())
            .or_else(|| self.server_key.clone())
            .ok_or_else(|| {
                AppError::CredentialMissing(
                    "No API key configured on the server; enter your API key to generate questions"
                        .to_string(),
                )
            })
    }
}
