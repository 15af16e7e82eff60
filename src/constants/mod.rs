pub mod mcq_prompt;
pub mod ui_page;
