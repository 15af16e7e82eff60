//! Turns a raw completion into validated [`McqRecord`]s.
//!
//! The completion is first read as JSON (every fenced ```json block in order if
//! there are any, otherwise the whole text). When that fails the text is scanned with
//! shallow patterns: a block runs from a `{` to the first `}` after it, so a
//! brace inside an option string ends the block early and the block is
//! rejected instead of repaired.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{BlockError, McqRecord};

static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```[A-Za-z]*\s*(.*?)```").expect("FENCED_BLOCK is a valid regex pattern")
});

static BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^}]*\}").expect("BLOCK is a valid regex pattern"));

static QUESTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""Question"\s*:\s*"([^"]*)""#).expect("QUESTION is a valid regex pattern")
});

static OPTIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""Options"\s*:\s*\[([^\]]*)\]"#).expect("OPTIONS is a valid regex pattern")
});

static ANSWER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""Answer"\s*:\s*"([^"]*)""#).expect("ANSWER is a valid regex pattern")
});

static QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)""#).expect("QUOTED is a valid regex pattern"));

/// What to do with a block that fails extraction or validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Skip the block, report it, keep going.
    #[default]
    Lenient,
    /// Fail the whole batch on the first bad block.
    Strict,
}

impl FromStr for ParsePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(ParsePolicy::Lenient),
            "strict" => Ok(ParsePolicy::Strict),
            other => Err(format!("unknown parse policy '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedBlock {
    /// 1-based position of the block in the completion.
    pub index: usize,
    pub error: BlockError,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseOutcome {
    pub records: Vec<McqRecord>,
    pub rejected: Vec<RejectedBlock>,
}

#[derive(Debug, Deserialize)]
struct StructuredMcq {
    #[serde(rename = "Question")]
    question: Option<String>,
    #[serde(rename = "Options")]
    options: Option<Vec<String>>,
    #[serde(rename = "Answer")]
    answer: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StructuredPayload {
    Many(Vec<StructuredMcq>),
    One(StructuredMcq),
}

impl StructuredMcq {
    fn has_any_key(&self) -> bool {
        self.question.is_some() || self.options.is_some() || self.answer.is_some()
    }

    fn into_record(self) -> Result<McqRecord, BlockError> {
        let question = self.question.ok_or(BlockError::MissingQuestion)?;
        let options = self.options.ok_or(BlockError::MissingOptions)?;
        let answer = self.answer.ok_or(BlockError::MissingAnswer)?;
        McqRecord::new(question, options, answer)
    }
}

pub fn parse_completion(raw: &str, policy: ParsePolicy) -> AppResult<ParseOutcome> {
    let candidates = match parse_structured(raw) {
        Some(candidates) => candidates,
        None => {
            log::warn!("Completion is not well-formed JSON, falling back to pattern extraction");
            segment_blocks(raw).into_iter().map(extract_block).collect()
        }
    };

    let mut outcome = ParseOutcome::default();
    for (i, candidate) in candidates.into_iter().enumerate() {
        let index = i + 1;
        match candidate {
            Ok(record) => outcome.records.push(record),
            Err(error) => match policy {
                ParsePolicy::Strict => {
                    return Err(AppError::ParseError(format!("block {}: {}", index, error)));
                }
                ParsePolicy::Lenient => {
                    log::warn!("Skipping block {}: {}", index, error);
                    outcome.rejected.push(RejectedBlock { index, error });
                }
            },
        }
    }

    log::info!(
        "Parsed {} question(s), rejected {} block(s)",
        outcome.records.len(),
        outcome.rejected.len()
    );
    Ok(outcome)
}

/// Strict path. `None` means the text is not JSON in a shape we understand:
/// a fence that does not parse, or an object carrying none of the question keys.
fn parse_structured(raw: &str) -> Option<Vec<Result<McqRecord, BlockError>>> {
    let fenced: Vec<&str> = FENCED_BLOCK
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();
    let candidates = if fenced.is_empty() { vec![raw] } else { fenced };

    let mut items = Vec::new();
    for candidate in candidates {
        match serde_json::from_str::<StructuredPayload>(candidate.trim()).ok()? {
            StructuredPayload::Many(many) => items.extend(many),
            StructuredPayload::One(one) => items.push(one),
        }
    }

    if !items.iter().all(StructuredMcq::has_any_key) {
        return None;
    }

    Some(items.into_iter().map(StructuredMcq::into_record).collect())
}

/// Splits text into shallow `{...}` blocks, left to right, non-overlapping.
pub fn segment_blocks(raw: &str) -> Vec<&str> {
    BLOCK.find_iter(raw).map(|m| m.as_str()).collect()
}

/// Pattern extraction for a single block.
pub fn extract_block(block: &str) -> Result<McqRecord, BlockError> {
    let question = QUESTION
        .captures(block)
        .map(|caps| caps[1].to_string())
        .ok_or(BlockError::MissingQuestion)?;

    let options_span = OPTIONS
        .captures(block)
        .and_then(|caps| caps.get(1))
        .ok_or(BlockError::MissingOptions)?;

    let options: Vec<String> = QUOTED
        .captures_iter(options_span.as_str())
        .map(|caps| caps[1].to_string())
        .collect();

    let answer = ANSWER
        .captures(block)
        .map(|caps| caps[1].to_string())
        .ok_or(BlockError::MissingAnswer)?;

    McqRecord::new(question, options, answer)
}
