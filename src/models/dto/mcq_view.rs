use serde::Serialize;

use crate::errors::{AppError, AppResult};
use crate::models::domain::McqRecord;

pub const OPTION_LABELS: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub label: &'static str,
    pub text: String,
    pub correct: bool,
}

/// Display form of one record: lettered options, with the correct one flagged
/// as data so the page decides how to style it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct McqView {
    pub number: usize,
    pub question: String,
    pub options: Vec<OptionView>,
    pub answer_label: &'static str,
    pub answer: String,
}

impl McqView {
    /// `number` is the 1-based display position.
    pub fn from_record(number: usize, record: &McqRecord) -> AppResult<Self> {
        if record.options().len() > OPTION_LABELS.len() {
            return Err(AppError::ValidationError(format!(
                "Question {} has {} options; only {} can be labelled",
                number,
                record.options().len(),
                OPTION_LABELS.len()
            )));
        }

        let answer_index = record.answer_index();
        let options = record
            .options()
            .iter()
            .zip(OPTION_LABELS)
            .enumerate()
            .map(|(i, (text, label))| OptionView {
                label,
                text: text.clone(),
                correct: i == answer_index,
            })
            .collect();

        Ok(Self {
            number,
            question: record.question().to_string(),
            options,
            answer_label: OPTION_LABELS[answer_index],
            answer: record.answer().to_string(),
        })
    }

    pub fn from_records(records: &[McqRecord]) -> AppResult<Vec<Self>> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| Self::from_record(i + 1, record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(answer: &str) -> McqRecord {
        McqRecord::new(
            "What is the capital of France?",
            vec![
                "Paris".to_string(),
                "London".to_string(),
                "Rome".to_string(),
                "Berlin".to_string(),
            ],
            answer,
        )
        .unwrap()
    }

    #[test]
    fn paris_is_option_a_and_flagged_correct() {
        let view = McqView::from_record(1, &record("Paris")).unwrap();

        assert_eq!(view.number, 1);
        assert_eq!(view.answer_label, "A");
        assert_eq!(view.answer, "Paris");
        assert_eq!(
            view.options
                .iter()
                .map(|o| (o.label, o.text.as_str(), o.correct))
                .collect::<Vec<_>>(),
            vec![
                ("A", "Paris", true),
                ("B", "London", false),
                ("C", "Rome", false),
                ("D", "Berlin", false),
            ]
        );
    }

    #[test]
    fn exactly_one_option_is_correct() {
        let view = McqView::from_record(3, &record("Rome")).unwrap();

        assert_eq!(view.options.iter().filter(|o| o.correct).count(), 1);
        assert_eq!(view.answer_label, "C");
    }

    #[test]
    fn from_records_numbers_from_one_in_order() {
        let views = McqView::from_records(&[record("Paris"), record("Berlin")]).unwrap();

        assert_eq!(views.iter().map(|v| v.number).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(views[1].answer_label, "D");
    }

    #[test]
    fn serializes_correct_flag_without_markup() {
        let json = serde_json::to_value(McqView::from_record(1, &record("London")).unwrap()).unwrap();

        assert_eq!(json["options"][1]["correct"], true);
        assert_eq!(json["options"][1]["label"], "B");
        assert!(!json.to_string().contains('<'));
    }
}
