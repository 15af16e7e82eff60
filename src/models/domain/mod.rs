pub mod mcq_record;
pub mod prompt_context;
pub use mcq_record::{BlockError, McqRecord, OPTION_COUNT};
pub use prompt_context::PromptContext;
