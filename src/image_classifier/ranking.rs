use crate::image_classifier::interface::{Classification, ClassifyError, RankedResult};

/// Index of the maximum score. Ties resolve to the lowest index.
#[allow(dead_code)]
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, score) in scores.iter().enumerate() {
        match best {
            Some(current) if scores[current].total_cmp(score).is_ge() => {}
            _ => best = Some(index),
        }
    }
    best
}

/// Rank a prediction vector against its label set and keep the top k.
/// Stable sort: equal scores keep ascending index order.
pub fn rank(scores: &[f32], labels: &[String], top_k: usize) -> Result<RankedResult, ClassifyError> {
    if scores.len() != labels.len() {
        return Err(ClassifyError::ShapeMismatch {
            expected: vec![labels.len()],
            actual: vec![scores.len()],
        });
    }

    let mut indexed: Vec<(usize, f32)> = scores.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
    indexed.truncate(top_k);

    let entries = indexed
        .into_iter()
        .map(|(index, confidence)| Classification {
            label: labels[index].clone(),
            confidence,
        })
        .collect();

    Ok(RankedResult { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::ANIMAL_LABELS;

    fn animal_labels() -> Vec<String> {
        ANIMAL_LABELS.iter().map(|label| label.to_string()).collect()
    }

    #[test]
    fn test_top_three_from_known_vector() {
        let mut scores = vec![0.0f32; 90];
        scores[9] = 0.7; // cat
        scores[18] = 0.1; // dog
        scores[3] = 0.1; // bear

        let result = rank(&scores, &animal_labels(), 3).unwrap();

        assert_eq!(result.entries.len(), 3);
        let top = result.top().unwrap();
        assert_eq!(top.label, "cat");
        assert!((top.percent() - 70.0).abs() < 1e-3);

        // 0.1 tie resolves by ascending index: bear (3) before dog (18)
        assert_eq!(result.entries[1].label, "bear");
        assert_eq!(result.entries[2].label, "dog");
    }

    #[test]
    fn test_top_entry_matches_argmax() {
        let scores: Vec<f32> = (0..90).map(|i| ((i * 37) % 91) as f32 / 100.0).collect();
        let labels = animal_labels();

        let result = rank(&scores, &labels, 3).unwrap();
        let best = argmax(&scores).unwrap();

        assert_eq!(result.top().unwrap().label, labels[best]);
        assert_eq!(result.top().unwrap().confidence, scores[best]);
    }

    #[test]
    fn test_ordering_is_non_increasing() {
        let scores: Vec<f32> = (0..90).map(|i| ((i * 53) % 97) as f32 / 97.0).collect();

        let result = rank(&scores, &animal_labels(), 3).unwrap();

        for pair in result.entries.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn test_all_zero_vector_still_ranks() {
        let scores = vec![0.0f32; 90];

        let result = rank(&scores, &animal_labels(), 3).unwrap();

        assert_eq!(result.entries.len(), 3);
        for entry in &result.entries {
            assert_eq!(entry.percent(), 0.0);
        }
        // Stable: the first three labels in index order
        assert_eq!(result.entries[0].label, "antelope");
        assert_eq!(result.entries[1].label, "badger");
        assert_eq!(result.entries[2].label, "bat");
    }

    #[test]
    fn test_probability_vector_percentages_sum_to_hundred() {
        let mut scores = vec![0.0f32; 90];
        scores[9] = 0.5;
        scores[18] = 0.25;
        scores[3] = 0.15;
        scores[42] = 0.1;

        let result = rank(&scores, &animal_labels(), 90).unwrap();

        let total: f32 = result.entries.iter().map(|e| e.percent()).sum();
        assert!((total - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_mismatched_lengths_are_rejected() {
        let scores = vec![0.5f32; 42];

        let error = rank(&scores, &animal_labels(), 3).unwrap_err();

        assert!(matches!(error, ClassifyError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_argmax_prefers_lowest_index_on_tie() {
        let scores = vec![0.2f32, 0.9, 0.9, 0.1];
        assert_eq!(argmax(&scores), Some(1));
    }

    #[test]
    fn test_argmax_of_empty_vector_is_none() {
        assert_eq!(argmax(&[]), None);
    }
}
