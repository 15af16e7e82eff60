pub const OUTPUT_FORMAT: &str = r#"The output should be a markdown code snippet formatted in the following schema, including the leading and trailing "```json" and "```".
The snippet must contain a JSON array with one object per question.
Do not add a trailing "\" anywhere in the output.

```json
[
  {
    "Question": string  // The question text.
    "Options": [string, string, string, string]  // Exactly 4 distinct possible answers, as a list.
    "Answer": string  // The correct answer, copied exactly from one of the Options.
  }
]
```"#;

pub const ONE_SHOT_EXAMPLE: &str = r#"```json
[
  {
    "Question": "What is the capital of India?",
    "Options": ["New Delhi", "Mumbai", "Kolkata", "Chennai"],
    "Answer": "New Delhi"
  },
  {
    "Question": "What is the capital of USA?",
    "Options": ["New York", "Washington DC", "Chicago", "Los Angeles"],
    "Answer": "Washington DC"
  }
]
```"#;

/// Delimits the one-shot example inside the prompt.
pub const EXAMPLE_DELIMITER: &str = "&&&&";
