use crate::constants::mcq_prompt::{EXAMPLE_DELIMITER, ONE_SHOT_EXAMPLE};
use crate::models::domain::PromptContext;

/// Fills the fixed MCQ template. Pure text substitution: empty chunks or a zero
/// count still produce a prompt and the completion service decides what to do.
pub fn build_prompt(ctx: &PromptContext) -> String {
    let docs = ctx.document_chunks.join("\n\n");

    format!(
        "Generate exactly {count} Multiple Choices Single Correct Questions from the given document\n\
         {schema}\n\n\
         Use the below example delimited by {delim} as a reference\n\
         Example:\n\
         {delim}\n\
         {example}\n\
         {delim}\n\n\
         Use the following document information to work upon\n\
         {docs}\n",
        count = ctx.requested_count,
        schema = ctx.schema_description,
        delim = EXAMPLE_DELIMITER,
        example = ONE_SHOT_EXAMPLE,
        docs = docs,
    )
}
