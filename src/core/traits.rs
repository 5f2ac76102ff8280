//! Collaborator seams for the detection and recognition models.
//!
//! The pipeline treats both models as opaque synchronous calls: they block,
//! they impose no timeout, and pooling or serializing concurrent access to a
//! non-reentrant model is the embedding service's responsibility.

use crate::core::errors::ExtractionError;
use crate::processors::BoundingBox;
use image::RgbImage;
use serde::{Deserialize, Serialize};

/// A region proposed by the layout detector, tagged with its class label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedRegion {
    /// The region's bounding box in image pixel space.
    pub bbox: BoundingBox,
    /// Detector-assigned class label ("Text", "Picture", "Table", ...).
    pub label: String,
}

impl DetectedRegion {
    /// Creates a labeled region.
    pub fn new(bbox: BoundingBox, label: impl Into<String>) -> Self {
        Self {
            bbox,
            label: label.into(),
        }
    }
}

/// A layout/detection model: proposes labeled regions for one image.
pub trait LayoutDetector {
    /// Detects layout regions in the image, in the model's native order.
    fn detect_regions(&self, image: &RgbImage) -> Result<Vec<DetectedRegion>, ExtractionError>;
}

/// A text recognition model: reads the text inside each given region.
///
/// Implementations must return exactly one string per input region, in input
/// order; the parser downstream binds lines to fields positionally. Each
/// string is the space-joined concatenation of any sub-line recognitions
/// within the region's crop. Markup tags surviving in the output are
/// stripped by the pipeline, so implementations need not scrub them.
pub trait TextRecognizer {
    /// Recognizes the text inside each region of the image.
    fn recognize(
        &self,
        image: &RgbImage,
        regions: &[BoundingBox],
    ) -> Result<Vec<String>, ExtractionError>;
}
