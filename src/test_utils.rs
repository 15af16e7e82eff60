#[cfg(test)]
pub mod fixtures {
    /// Fenced JSON completion with two valid questions.
    pub fn two_question_completion() -> String {
        r#"Sure! Here are the questions:
```json
[
  {
    "Question": "What is the capital of France?",
    "Options": ["Paris", "London", "Rome", "Berlin"],
    "Answer": "Paris"
  },
  {
    "Question": "What is the capital of Spain?",
    "Options": ["Lisbon", "Madrid", "Rome", "Porto"],
    "Answer": "Madrid"
  }
]
```"#
        .to_string()
    }

    /// Second block's answer is not among its options.
    pub fn completion_with_bad_answer() -> String {
        r#"```json
[
  {
    "Question": "What is the capital of France?",
    "Options": ["Paris", "London", "Rome", "Berlin"],
    "Answer": "Paris"
  },
  {
    "Question": "What is 2 + 2?",
    "Options": ["3", "4", "5", "6"],
    "Answer": "four"
  }
]
```"#
        .to_string()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::response_parser::{parse_completion, ParsePolicy};

    #[test]
    fn test_fixtures_two_question_completion_parses() {
        let outcome = parse_completion(&two_question_completion(), ParsePolicy::Strict).unwrap();
        assert_eq!(outcome.records.len(), 2);
    }

    #[test]
    fn test_fixtures_bad_answer_completion_has_one_rejected_block() {
        let outcome =
            parse_completion(&completion_with_bad_answer(), ParsePolicy::Lenient).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.rejected.len(), 1);
    }
}
