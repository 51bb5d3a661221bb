//! End-to-end scoring of the reference batch

use moodlex::sentiment::batch::score_items;
use moodlex::sentiment::{score, Scorer};
use serde_json::json;

const REFERENCE_BATCH: [&str; 6] = [
    "I love this!",
    "I do not love this",
    "😊",
    "no",
    "",
    "123",
];

#[test]
fn test_reference_batch_labels() {
    let labels: Vec<_> = REFERENCE_BATCH.iter().map(|text| score(text)).collect();
    insta::assert_debug_snapshot!(labels, @r###"
    [
        Happy,
        Sad,
        Happy,
        Sad,
        Neutral,
        Neutral,
    ]
    "###);
}

#[test]
fn test_reference_batch_response() {
    let items: Vec<_> = REFERENCE_BATCH.iter().map(|text| json!(text)).collect();
    let response = score_items(&Scorer::standard(), &items);
    let rendered = serde_json::to_string(&response).unwrap();
    insta::assert_snapshot!(rendered, @r###"{"results":[{"sentence":"I love this!","sentiment":"happy"},{"sentence":"I do not love this","sentiment":"sad"},{"sentence":"😊","sentiment":"happy"},{"sentence":"no","sentiment":"sad"},{"sentence":"","sentiment":"neutral"},{"sentence":"123","sentiment":"neutral"}]}"###);
}

#[test]
fn test_explanations_of_reference_batch() {
    let scorer = Scorer::standard();
    let stages: Vec<String> = REFERENCE_BATCH
        .iter()
        .map(|text| scorer.explain(text).stage.to_string())
        .collect();
    assert_eq!(
        stages,
        vec![
            "threshold",
            "threshold",
            "emoji",
            "short-utterance",
            "threshold",
            "threshold"
        ]
    );
}
