use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    /// Raw model score in [0, 1].
    pub confidence: f32,
}

impl Classification {
    pub fn percent(&self) -> f32 {
        self.confidence * 100.0
    }
}

/// Top-k classifications, sorted non-increasing by confidence. The first
/// entry is always the argmax of the underlying prediction vector.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub entries: Vec<Classification>,
}

impl RankedResult {
    pub fn top(&self) -> Option<&Classification> {
        self.entries.first()
    }
}

/// Per-request failures. Surfaced to the user, never fatal to the process.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("tensor shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    #[error("inference failed: {0}")]
    Inference(String),
}

/// Startup failures. The process cannot serve without a model, so these are
/// reported once and abort before the UI starts.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("could not load model: {0}")]
    Load(String),
}

pub trait ImageClassifier: Send + Sync {
    fn classify(&self, image: &[u8]) -> Result<RankedResult, ClassifyError>;
}
