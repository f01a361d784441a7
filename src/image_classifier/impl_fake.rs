use crate::image_classifier::interface::{ClassifyError, ImageClassifier, RankedResult};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::ranking::rank;
use crate::image_classifier::tract::image::resize_image_to_tensor;
use rand::Rng;

/// Classifier that needs no model artifact. Decode and preprocessing run
/// exactly as in the tract implementation, so malformed input fails the same
/// way; only the forward pass is replaced by fixed or random scores.
pub struct FakeImageClassifier {
    config: ModelConfig,
    fixed_scores: Option<Vec<f32>>,
}

impl FakeImageClassifier {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            fixed_scores: None,
        }
    }

    /// Always answer with the given prediction vector.
    pub fn with_scores(config: ModelConfig, scores: Vec<f32>) -> Self {
        Self {
            config,
            fixed_scores: Some(scores),
        }
    }
}

impl ImageClassifier for FakeImageClassifier {
    fn classify(&self, image: &[u8]) -> Result<RankedResult, ClassifyError> {
        let decoded = image::load_from_memory(image)?;

        let (height, width) = self.config.input_shape;
        let _tensor = resize_image_to_tensor(&decoded, width, height)?;

        let scores = match &self.fixed_scores {
            Some(scores) => scores.clone(),
            None => {
                let mut rng = rand::rng();
                (0..self.config.labels.len())
                    .map(|_| rng.random_range(0.0..1.0))
                    .collect()
            }
        };

        rank(&scores, &self.config.labels, self.config.top_k)
    }
}
