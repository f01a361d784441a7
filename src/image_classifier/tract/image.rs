use crate::image_classifier::interface::ClassifyError;
use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

/// Stretch to the target size, matching the plain bilinear resize the model
/// was trained against. No letterboxing.
pub fn resize_image(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    image.resize_exact(width, height, imageops::FilterType::Triangle)
}

/// NHWC float tensor with a leading batch dimension, pixels scaled to [0, 1].
/// Grayscale and alpha inputs are normalized to 3-channel RGB first.
fn image_to_tensor(image: &DynamicImage) -> Result<Tensor, ClassifyError> {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    let pixels: Vec<f32> = rgb.as_raw().iter().map(|&v| v as f32 / 255.0).collect();
    let len = pixels.len();

    let array = tract_ndarray::Array4::from_shape_vec((1, height, width, 3), pixels).map_err(
        |_| ClassifyError::ShapeMismatch {
            expected: vec![1, height, width, 3],
            actual: vec![len],
        },
    )?;

    Ok(array.into_tensor())
}

pub fn resize_image_to_tensor(
    image: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<Tensor, ClassifyError> {
    let resized = resize_image(image, width, height);
    let tensor = image_to_tensor(&resized)?;

    let expected = [1, height as usize, width as usize, 3];
    if tensor.shape() != expected {
        return Err(ClassifyError::ShapeMismatch {
            expected: expected.to_vec(),
            actual: tensor.shape().to_vec(),
        });
    }

    Ok(tensor)
}
