use crate::image_classifier::interface::{
    ClassifyError, ImageClassifier, ModelError, RankedResult,
};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::ranking::rank;
use crate::image_classifier::tract::image::resize_image_to_tensor;
use tract_onnx::prelude::*;

#[derive(Debug)]
pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
}

impl ImageClassifierTractOnnx {
    pub fn new(config: ModelConfig) -> Result<Self, ModelError> {
        if !config.onnx_model_path.is_file() {
            return Err(ModelError::NotFound(config.onnx_model_path.clone()));
        }

        let (height, width) = config.input_shape;

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .map_err(|e| ModelError::Load(e.to_string()))?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(
                    f32::datum_type(),
                    tvec!(1, height as usize, width as usize, 3),
                ),
            )
            .map_err(|e| ModelError::Load(e.to_string()))?
            .into_optimized()
            .map_err(|e| ModelError::Load(e.to_string()))?
            .into_runnable()
            .map_err(|e| ModelError::Load(e.to_string()))?;

        Ok(Self { model, config })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(&self, image: &[u8]) -> Result<RankedResult, ClassifyError> {
        let decoded = image::load_from_memory(image)?;

        let (height, width) = self.config.input_shape;
        let input = resize_image_to_tensor(&decoded, width, height)?;

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;

        let scores: Vec<f32> = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| ClassifyError::Inference(e.to_string()))?
            .iter()
            .copied()
            .collect();

        rank(&scores, &self.config.labels, self.config.top_k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_missing_model_file_is_reported_as_not_found() {
        let mut model_config = Config::default().model_config();
        model_config.onnx_model_path = "does/not/exist.onnx".into();

        let error = ImageClassifierTractOnnx::new(model_config).unwrap_err();

        assert!(matches!(error, ModelError::NotFound(_)));
    }
}
