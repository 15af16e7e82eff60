use pdf2mcq::{
    models::{
        domain::{McqRecord, PromptContext},
        dto::mcq_view::McqView,
    },
    services::{
        prompt_service::build_prompt,
        response_parser::{parse_completion, ParsePolicy},
        text_splitter::TextSplitter,
    },
};

#[test]
fn test_capital_of_france_end_to_end() {
    let raw = r#"{"Question":"What is the capital of France?","Options":["Paris","London","Rome","Berlin"],"Answer":"Paris"}"#;

    let outcome = parse_completion(raw, ParsePolicy::Strict).unwrap();
    assert_eq!(outcome.records.len(), 1);

    let expected = McqRecord::new(
        "What is the capital of France?",
        vec![
            "Paris".to_string(),
            "London".to_string(),
            "Rome".to_string(),
            "Berlin".to_string(),
        ],
        "Paris",
    )
    .unwrap();
    assert_eq!(outcome.records[0], expected);

    let view = McqView::from_record(1, &outcome.records[0]).unwrap();
    assert_eq!(view.answer_label, "A");
    assert!(view.options[0].correct);
    assert!(view.options[1..].iter().all(|o| !o.correct));
}

#[test]
fn test_every_parsed_answer_is_one_of_its_options() {
    let raw = r#"
    {"Question": "Largest planet?", "Options": ["Mars", "Jupiter", "Venus", "Earth"], "Answer": "Jupiter"},
    {"Question": "Smallest prime?", "Options": ["0", "1", "2", "3"], "Answer": "2"},
    {"Question": "H2O is?", "Options": ["Salt", "Water", "Air", "Fire"], "Answer": "water"},
    "#;

    let outcome = parse_completion(raw, ParsePolicy::Lenient).unwrap();

    assert_eq!(outcome.records.len(), 2);
    assert!(outcome
        .records
        .iter()
        .all(|r| r.options().iter().any(|o| o == r.answer())));
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].index, 3);
}

#[test]
fn test_splitter_output_feeds_prompt_in_order() {
    let text = "Alpha paragraph about cells.\n\nBeta paragraph about tissues.\n\nGamma paragraph about organs.";
    let chunks = TextSplitter::new(40, 0).split(text);
    assert_eq!(chunks.len(), 3);

    let prompt = build_prompt(&PromptContext::new(5, chunks));
    let alpha = prompt.find("Alpha").unwrap();
    let beta = prompt.find("Beta").unwrap();
    let gamma = prompt.find("Gamma").unwrap();

    assert!(alpha < beta && beta < gamma);
    assert!(prompt.contains("Generate exactly 5 Multiple Choices Single Correct Questions"));
}
