use crate::image_classifier::models::model_config::ModelConfig;
use crate::labels::ANIMAL_LABELS;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    /// (height, width) the model expects.
    pub input_shape: (u32, u32),
    pub top_k: usize,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/animal_classifier.onnx"),
            input_shape: (224, 224),
            top_k: 3,
            logger_timezone: utc(),
        }
    }
}

impl Config {
    pub fn model_config(&self) -> ModelConfig {
        ModelConfig {
            onnx_model_path: self.model_path.clone(),
            input_shape: self.input_shape,
            labels: ANIMAL_LABELS.iter().map(|label| label.to_string()).collect(),
            top_k: self.top_k,
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(0).unwrap()
}
