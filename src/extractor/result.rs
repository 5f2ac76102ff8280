//! Intermediate result types of the extraction pipeline.

use crate::processors::BoundingBox;
use serde::{Deserialize, Serialize};

/// One recognized line of text, tied to the region it was read from.
///
/// Produced by the reading stage, one per expanded region and in region
/// order; the parser binds these to template fields by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedLine {
    /// Index of the originating region in the expanded region set.
    pub region_index: usize,
    /// The region the text was recognized in.
    pub bbox: BoundingBox,
    /// The recognized text; may be empty.
    pub text: String,
}

impl RecognizedLine {
    /// Creates a recognized line.
    pub fn new(region_index: usize, bbox: BoundingBox, text: impl Into<String>) -> Self {
        Self {
            region_index,
            bbox,
            text: text.into(),
        }
    }
}
