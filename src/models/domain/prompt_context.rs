use crate::constants::mcq_prompt::OUTPUT_FORMAT;

/// Inputs for a single prompt. Built per request and dropped once the prompt string exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptContext {
    pub schema_description: String,
    pub requested_count: u32,
    pub document_chunks: Vec<String>,
}

impl PromptContext {
    pub fn new(requested_count: u32, document_chunks: Vec<String>) -> Self {
        Self {
            schema_description: OUTPUT_FORMAT.to_string(),
            requested_count,
            document_chunks,
        }
    }

    pub fn with_schema_description(mut self, schema_description: impl Into<String>) -> Self {
        self.schema_description = schema_description.into();
        self
    }
}
