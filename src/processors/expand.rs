//! Post-merge padding of consolidated regions.
//!
//! Consolidated boxes hug the detected glyph extents; recognition works
//! better with a small margin around the text. Expansion grows each box
//! outward, clamped at the image origin and optionally at the image height.

use crate::core::config::ExpansionConfig;
use crate::processors::geometry::BoundingBox;

/// Grows every box outward by the configured horizontal and vertical amounts.
///
/// `x1` and `y1` are floor-clamped at 0. When `image_height` is supplied,
/// `y2` is ceiling-clamped to it. `x2` is never clamped: callers that care
/// about the right image edge must bound it themselves (the crop utilities
/// clamp to the frame anyway).
pub fn expand_regions(
    boxes: &[BoundingBox],
    config: &ExpansionConfig,
    image_height: Option<f32>,
) -> Vec<BoundingBox> {
    boxes
        .iter()
        .map(|b| {
            let mut y2 = b.y2 + config.y_expand;
            if let Some(height) = image_height {
                y2 = y2.min(height);
            }
            BoundingBox {
                x1: (b.x1 - config.x_expand).max(0.0),
                y1: (b.y1 - config.y_expand).max(0.0),
                x2: b.x2 + config.x_expand,
                y2,
            }
        })
        .collect()
}
