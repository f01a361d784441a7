use crate::image_classifier::interface::{ClassifyError, ImageClassifier};
use crate::image_classifier::test::fixture::Fixture;

#[test]
fn test_top_three_for_known_scores() {
    let f = Fixture::new();

    let mut scores = vec![0.0f32; 90];
    scores[9] = 0.7; // cat
    scores[18] = 0.1; // dog
    scores[3] = 0.1; // bear
    let classifier = f.classifier_with_scores(scores);

    let image = Fixture::rgb_png(500, 500, [120, 80, 40]);
    let result = classifier.classify(&image).unwrap();

    assert_eq!(result.entries.len(), 3);

    let top = result.top().unwrap();
    assert_eq!(top.label, "cat");
    assert!((top.percent() - 70.0).abs() < 1e-3);

    // Equal scores keep ascending index order
    assert_eq!(result.entries[1].label, "bear");
    assert_eq!(result.entries[2].label, "dog");
}

#[test]
fn test_unparseable_bytes_are_a_decode_error() {
    let f = Fixture::new();
    let classifier = f.random_classifier();

    let error = classifier
        .classify(b"this is a text file renamed to .jpg")
        .unwrap_err();

    assert!(matches!(error, ClassifyError::Decode(_)));
}

#[test]
fn test_grayscale_image_is_accepted() {
    let f = Fixture::new();
    let classifier = f.random_classifier();

    let image = Fixture::gray_png(320, 240, 170);
    let result = classifier.classify(&image).unwrap();

    assert_eq!(result.entries.len(), 3);
}

#[test]
fn test_classify_is_idempotent_for_identical_input() {
    let f = Fixture::new();

    let mut scores = vec![0.0f32; 90];
    scores[54] = 0.6; // orangutan
    scores[31] = 0.3; // gorilla
    let classifier = f.classifier_with_scores(scores);

    let image = Fixture::rgb_png(64, 48, [10, 200, 90]);
    let first = classifier.classify(&image).unwrap();
    let second = classifier.classify(&image).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.top().unwrap().label, "orangutan");
}

#[test]
fn test_random_scores_still_rank_correctly() {
    let f = Fixture::new();
    let classifier = f.random_classifier();

    let image = Fixture::rgb_png(100, 100, [255, 255, 255]);
    let result = classifier.classify(&image).unwrap();

    assert_eq!(result.entries.len(), f.config.top_k);
    for pair in result.entries.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
    for entry in &result.entries {
        assert!((0.0..=100.0).contains(&entry.percent()));
    }
}
