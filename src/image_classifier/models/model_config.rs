use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    /// (height, width) of the model input.
    pub input_shape: (u32, u32),
    /// Class names aligned index-for-index with the model output.
    pub labels: Vec<String>,
    pub top_k: usize,
}
