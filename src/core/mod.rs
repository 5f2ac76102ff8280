//! Core types: errors, configuration, and collaborator seams.

pub mod config;
pub mod errors;
pub mod traits;

pub use config::{ConsolidationConfig, ExpansionConfig, ExtractorConfig};
pub use errors::{ExtractionError, Stage};
pub use traits::{DetectedRegion, LayoutDetector, TextRecognizer};
