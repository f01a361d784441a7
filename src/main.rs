use crate::config::Config;
use crate::image_classifier::impl_fake::FakeImageClassifier;
use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_classifier::interface::ImageClassifier;
use crate::logger::impl_console::LoggerConsole;
use crate::logger::interface::Logger;
use std::sync::Arc;

mod app;
mod config;
mod image_classifier;
mod labels;
mod logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let use_fake = std::env::args().any(|arg| arg == "--fake");

    let classifier: Arc<dyn ImageClassifier> = if use_fake {
        let _ = logger.info("Running with the fake classifier, no model file needed");
        Arc::new(FakeImageClassifier::new(config.model_config()))
    } else {
        match ImageClassifierTractOnnx::new(config.model_config()) {
            Ok(classifier) => {
                let _ = logger.info(&format!(
                    "Model loaded from {}",
                    config.model_path.display()
                ));
                Arc::new(classifier)
            }
            Err(error) => {
                let _ = logger.error(&format!("Cannot start without a model: {}", error));
                return Err(error.into());
            }
        }
    };

    app::run::run(logger, classifier)?;

    Ok(())
}
