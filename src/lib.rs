//! Layout-aware region consolidation and structured key-value extraction
//! for receipt images.
//!
//! The crate turns a photographed or scanned receipt into a typed
//! [`KvpRecord`] in six sequential stages: a layout model proposes labeled
//! regions, non-text regions are discarded, fragmented text boxes are merged
//! into line regions by a fixed-point consolidation, the regions are padded
//! to recapture clipped glyph margins, a recognition model reads each
//! region, and the recognized lines are bound positionally to the receipt
//! template.
//!
//! Detection and recognition are external collaborators behind the
//! [`LayoutDetector`] and [`TextRecognizer`] traits; this crate owns the
//! geometry, the consolidation algorithm, and the parsing contract.
//!
//! # Example
//!
//! ```no_run
//! use receipt_ocr::{ReceiptExtractor, LayoutDetector, TextRecognizer};
//! use std::sync::Arc;
//!
//! # fn collaborators() -> (Arc<dyn LayoutDetector + Send + Sync>, Arc<dyn TextRecognizer + Send + Sync>) { unimplemented!() }
//! let (detector, recognizer) = collaborators();
//! let extractor = ReceiptExtractor::builder(detector, recognizer)
//!     .proximity_threshold(20.0)
//!     .build();
//! let record = extractor.extract("receipt.jpg")?;
//! println!("amount: {}", record.amount);
//! # Ok::<(), receipt_ocr::ExtractionError>(())
//! ```

pub mod core;
pub mod extractor;
pub mod parser;
pub mod processors;
pub mod utils;

pub use crate::core::config::{ConsolidationConfig, ExpansionConfig, ExtractorConfig};
pub use crate::core::errors::{ExtractionError, Stage};
pub use crate::core::traits::{DetectedRegion, LayoutDetector, TextRecognizer};
pub use crate::extractor::{ReceiptExtractor, ReceiptExtractorBuilder, RecognizedLine};
pub use crate::parser::{parse_fields, KvpRecord};
pub use crate::processors::BoundingBox;
