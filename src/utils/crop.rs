//! Rectangular image cropping clamped to the frame.
//!
//! Recognizer implementations that read regions crop-by-crop (as the
//! reference recognition model does) need a crop that tolerates expanded
//! boxes reaching past the image edges.

use crate::core::errors::{ExtractionError, Stage};
use crate::processors::BoundingBox;
use image::{imageops, RgbImage};

/// Crops the rectangle covered by `bbox` out of `image`, clamping the
/// rectangle to the image bounds first.
///
/// Fails when the clamped rectangle is empty (the box lies entirely outside
/// the frame or has no extent).
pub fn crop_region(image: &RgbImage, bbox: &BoundingBox) -> Result<RgbImage, ExtractionError> {
    let x1 = bbox.x1.max(0.0) as u32;
    let y1 = bbox.y1.max(0.0) as u32;
    let x2 = (bbox.x2.max(0.0) as u32).min(image.width());
    let y2 = (bbox.y2.max(0.0) as u32).min(image.height());

    if x2 <= x1 || y2 <= y1 {
        return Err(ExtractionError::structural(
            Stage::Reading,
            format!("degenerate crop region ({x1}, {y1}) to ({x2}, {y2})"),
        ));
    }

    Ok(imageops::crop_imm(image, x1, y1, x2 - x1, y2 - y1).to_image())
}
