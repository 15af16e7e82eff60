use serde::Deserialize;
use validator::Validate;

pub const MAX_QUESTION_COUNT: u32 = 100;

/// Query string of `POST /api/mcqs`. The PDF itself is the request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateMcqQuery {
    #[validate(range(min = 1, max = MAX_QUESTION_COUNT, message = "count must be between 1 and 100"))]
    pub count: u32,
}
