use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        completion_service::{CompletionSettings, OpenAiConnector},
        document_service::PdfDocumentLoader,
        mcq_service::McqService,
        text_splitter::TextSplitter,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub mcq_service: Arc<McqService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let splitter = TextSplitter::new(config.chunk_size, config.chunk_overlap);
        let loader = Arc::new(PdfDocumentLoader::new(splitter));
        let connector = Arc::new(OpenAiConnector::new(CompletionSettings::from(&config)));
        let mcq_service = Arc::new(McqService::new(loader, connector, &config));

        Self {
            mcq_service,
            config: Arc::new(config),
        }
    }

    pub fn with_service(mcq_service: McqService, config: Config) -> Self {
        Self {
            mcq_service: Arc::new(mcq_service),
            config: Arc::new(config),
        }
    }
}
