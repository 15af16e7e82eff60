use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppResult;
use crate::models::dto::mcq_view::McqView;
use crate::services::mcq_service::McqBatch;
use crate::services::response_parser::RejectedBlock;

#[derive(Debug, Serialize)]
pub struct RejectedBlockDto {
    pub index: usize,
    pub reason: String,
}

impl From<&RejectedBlock> for RejectedBlockDto {
    fn from(rejected: &RejectedBlock) -> Self {
        Self {
            index: rejected.index,
            reason: rejected.error.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateMcqResponse {
    pub questions: Vec<McqView>,
    pub rejected_blocks: Vec<RejectedBlockDto>,
    pub requested_count: u32,
    pub generated_at: DateTime<Utc>,
}

impl GenerateMcqResponse {
    pub fn from_batch(batch: &McqBatch) -> AppResult<Self> {
        Ok(Self {
            questions: McqView::from_records(&batch.records)?,
            rejected_blocks: batch.rejected.iter().map(RejectedBlockDto::from).collect(),
            requested_count: batch.requested_count,
            generated_at: Utc::now(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub server_key_configured: bool,
    pub default_question_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::BlockError;

    #[test]
    fn rejected_block_reason_is_human_readable() {
        let dto = RejectedBlockDto::from(&RejectedBlock {
            index: 4,
            error: BlockError::AnswerNotInOptions("42".into()),
        });

        assert_eq!(dto.index, 4);
        assert_eq!(dto.reason, "answer \"42\" is not one of the options");
    }
}
