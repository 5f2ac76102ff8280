//! Configuration for the extraction pipeline.
//!
//! All defaults come from the receipt template the pipeline was tuned on;
//! they are plain data so a different document layout is a configuration
//! change, not a code change.

use serde::{Deserialize, Serialize};

/// Thresholds controlling when two boxes merge during consolidation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationConfig {
    /// Minimum IoU (exclusive) for an overlap-triggered merge.
    #[serde(default = "default_iou_threshold")]
    pub iou_threshold: f32,
    /// Maximum vertical gap in pixels (exclusive) for a proximity-triggered
    /// merge between stacked boxes.
    #[serde(default = "default_proximity_threshold")]
    pub proximity_threshold: f32,
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            iou_threshold: default_iou_threshold(),
            proximity_threshold: default_proximity_threshold(),
        }
    }
}

fn default_iou_threshold() -> f32 {
    0.5
}

fn default_proximity_threshold() -> f32 {
    20.0
}

/// Outward padding applied to consolidated regions before recognition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpansionConfig {
    /// Pixels added to the left and right edges.
    #[serde(default = "default_x_expand")]
    pub x_expand: f32,
    /// Pixels added to the top and bottom edges.
    #[serde(default = "default_y_expand")]
    pub y_expand: f32,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            x_expand: default_x_expand(),
            y_expand: default_y_expand(),
        }
    }
}

fn default_x_expand() -> f32 {
    10.0
}

fn default_y_expand() -> f32 {
    6.0
}

/// Top-level pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Merge thresholds for region consolidation.
    #[serde(default)]
    pub consolidation: ConsolidationConfig,
    /// Padding applied after consolidation.
    #[serde(default)]
    pub expansion: ExpansionConfig,
    /// Detector label identifying text-bearing regions; everything else
    /// (images, tables, ...) is discarded before consolidation.
    #[serde(default = "default_text_label")]
    pub text_label: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            consolidation: ConsolidationConfig::default(),
            expansion: ExpansionConfig::default(),
            text_label: default_text_label(),
        }
    }
}

fn default_text_label() -> String {
    "Text".to_string()
}
