pub mod completion_service;
pub mod document_service;
pub mod mcq_service;
pub mod prompt_service;
pub mod response_parser;
pub mod scoped_upload;
pub mod text_splitter;
