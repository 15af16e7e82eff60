use thiserror::Error;

/// Every question carries exactly this many options, labelled A to D.
pub const OPTION_COUNT: usize = 4;

/// Why a single block of completion text could not become an [`McqRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("no \"Question\" value found")]
    MissingQuestion,

    #[error("no \"Options\" list found")]
    MissingOptions,

    #[error("no \"Answer\" value found")]
    MissingAnswer,

    #[error("question text is empty")]
    EmptyQuestion,

    #[error("expected 4 options, found {0}")]
    WrongOptionCount(usize),

    #[error("option \"{0}\" appears more than once")]
    DuplicateOption(String),

    #[error("answer \"{0}\" is not one of the options")]
    AnswerNotInOptions(String),
}

/// One generated multiple-choice question. Built only through [`McqRecord::new`],
/// so the answer is always one of the four distinct options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct McqRecord {
    question: String,
    options: Vec<String>,
    answer: String,
}

impl McqRecord {
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Result<Self, BlockError> {
        let question = question.into();
        let answer = answer.into();

        if question.trim().is_empty() {
            return Err(BlockError::EmptyQuestion);
        }

        if options.len() != OPTION_COUNT {
            return Err(BlockError::WrongOptionCount(options.len()));
        }

        for (i, option) in options.iter().enumerate() {
            if options[..i].contains(option) {
                return Err(BlockError::DuplicateOption(option.clone()));
            }
        }

        // exact match, no trimming or case folding
        if !options.contains(&answer) {
            return Err(BlockError::AnswerNotInOptions(answer));
        }

        Ok(Self {
            question,
            options,
            answer,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn answer_index(&self) -> usize {
        self.options
            .iter()
            .position(|option| *option == self.answer)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capitals() -> Vec<String> {
        ["Paris", "London", "Rome", "Berlin"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn new_accepts_answer_among_options() {
        let record = McqRecord::new("What is the capital of France?", capitals(), "Paris")
            .expect("record should be valid");

        assert_eq!(record.question(), "What is the capital of France?");
        assert_eq!(record.options(), capitals().as_slice());
        assert_eq!(record.answer(), "Paris");
        assert_eq!(record.answer_index(), 0);
    }

    #[test]
    fn answer_index_follows_option_order() {
        let record = McqRecord::new("Capital of Germany?", capitals(), "Berlin").unwrap();
        assert_eq!(record.answer_index(), 3);
    }

    #[test]
    fn new_rejects_answer_differing_only_by_case_or_whitespace() {
        let by_case = McqRecord::new("Q?", capitals(), "paris");
        let by_space = McqRecord::new("Q?", capitals(), "Paris ");

        assert_eq!(by_case, Err(BlockError::AnswerNotInOptions("paris".into())));
        assert_eq!(
            by_space,
            Err(BlockError::AnswerNotInOptions("Paris ".into()))
        );
    }

    #[test]
    fn new_rejects_wrong_option_count() {
        let mut options = capitals();
        options.push("Madrid".to_string());

        assert_eq!(
            McqRecord::new("Q?", options, "Paris"),
            Err(BlockError::WrongOptionCount(5))
        );
        assert_eq!(
            McqRecord::new("Q?", capitals()[..3].to_vec(), "Paris"),
            Err(BlockError::WrongOptionCount(3))
        );
    }

    #[test]
    fn new_rejects_duplicate_options() {
        let options = vec![
            "Paris".to_string(),
            "Rome".to_string(),
            "Paris".to_string(),
            "Berlin".to_string(),
        ];

        assert_eq!(
            McqRecord::new("Q?", options, "Rome"),
            Err(BlockError::DuplicateOption("Paris".into()))
        );
    }

    #[test]
    fn new_rejects_blank_question() {
        assert_eq!(
            McqRecord::new("   ", capitals(), "Paris"),
            Err(BlockError::EmptyQuestion)
        );
    }

    #[test]
    fn block_error_messages_name_the_problem() {
        assert_eq!(
            BlockError::WrongOptionCount(2).to_string(),
            "expected 4 options, found 2"
        );
        assert_eq!(
            BlockError::MissingAnswer.to_string(),
            "no \"Answer\" value found"
        );
    }
}
