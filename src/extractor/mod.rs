//! The end-to-end receipt extraction pipeline.
//!
//! One image in, one typed record out, through strictly sequential stages:
//! detect layout regions, keep the text-labeled ones, consolidate fragments
//! into line regions, re-sort top-to-bottom, pad the regions, read them, and
//! bind the lines to the receipt template. A failure at any stage aborts the
//! request with the originating error; there is no partial-result mode.
//!
//! The pipeline holds no per-request state: each [`ReceiptExtractor::extract`]
//! call is independent, synchronous, and single-threaded. Request timeouts
//! and pooling of a non-reentrant recognition model belong to the service
//! wrapping this crate.

pub mod result;

pub use result::RecognizedLine;

use crate::core::config::ExtractorConfig;
use crate::core::errors::{ExtractionError, Stage};
use crate::core::traits::{DetectedRegion, LayoutDetector, TextRecognizer};
use crate::parser::{parse_fields, KvpRecord};
use crate::processors::{consolidate_regions, expand_regions, BoundingBox};
use image::RgbImage;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Matches `<...>`-style markup tags left in recognizer output.
static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").expect("valid tag pattern"));

/// Builder for [`ReceiptExtractor`].
///
/// The detector and recognizer are required up front; thresholds and the
/// text label default to the tuned receipt template and can be overridden
/// per call site or replaced wholesale with [`config`](Self::config).
pub struct ReceiptExtractorBuilder {
    detector: Arc<dyn LayoutDetector + Send + Sync>,
    recognizer: Arc<dyn TextRecognizer + Send + Sync>,
    config: ExtractorConfig,
}

impl ReceiptExtractorBuilder {
    /// Creates a builder around the two collaborator models.
    pub fn new(
        detector: Arc<dyn LayoutDetector + Send + Sync>,
        recognizer: Arc<dyn TextRecognizer + Send + Sync>,
    ) -> Self {
        Self {
            detector,
            recognizer,
            config: ExtractorConfig::default(),
        }
    }

    /// Replaces the whole pipeline configuration.
    pub fn config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the IoU threshold for overlap-triggered merges.
    pub fn iou_threshold(mut self, threshold: f32) -> Self {
        self.config.consolidation.iou_threshold = threshold;
        self
    }

    /// Sets the vertical proximity threshold (pixels) for merges between
    /// stacked boxes.
    pub fn proximity_threshold(mut self, threshold: f32) -> Self {
        self.config.consolidation.proximity_threshold = threshold;
        self
    }

    /// Sets the horizontal and vertical region padding (pixels).
    pub fn expansion(mut self, x_expand: f32, y_expand: f32) -> Self {
        self.config.expansion.x_expand = x_expand;
        self.config.expansion.y_expand = y_expand;
        self
    }

    /// Sets the detector label that marks text-bearing regions.
    pub fn text_label(mut self, label: impl Into<String>) -> Self {
        self.config.text_label = label.into();
        self
    }

    /// Builds the extractor.
    pub fn build(self) -> ReceiptExtractor {
        ReceiptExtractor {
            detector: self.detector,
            recognizer: self.recognizer,
            config: self.config,
        }
    }
}

/// The configured extraction pipeline.
pub struct ReceiptExtractor {
    detector: Arc<dyn LayoutDetector + Send + Sync>,
    recognizer: Arc<dyn TextRecognizer + Send + Sync>,
    config: ExtractorConfig,
}

impl ReceiptExtractor {
    /// Starts a builder around the two collaborator models.
    pub fn builder(
        detector: Arc<dyn LayoutDetector + Send + Sync>,
        recognizer: Arc<dyn TextRecognizer + Send + Sync>,
    ) -> ReceiptExtractorBuilder {
        ReceiptExtractorBuilder::new(detector, recognizer)
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extracts the typed key-value record from the image at `path`.
    pub fn extract(&self, path: impl AsRef<Path>) -> Result<KvpRecord, ExtractionError> {
        let path = path.as_ref();
        let image = load_rgb_image(path)?;
        debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "input image loaded"
        );
        self.extract_from_image(&image)
    }

    /// Extracts the typed key-value record from an already-loaded image.
    pub fn extract_from_image(&self, image: &RgbImage) -> Result<KvpRecord, ExtractionError> {
        // Detecting
        debug!(stage = %Stage::Detecting, "running layout detector");
        let detected = self.detector.detect_regions(image)?;
        debug!(stage = %Stage::Detecting, regions = detected.len(), "layout detected");

        // Filtering
        let text_boxes = self.filter_text_regions(&detected)?;

        // Consolidating
        let consolidated = consolidate_regions(&text_boxes, &self.config.consolidation);
        if consolidated.is_empty() {
            return Err(ExtractionError::structural(
                Stage::Consolidating,
                "consolidation produced zero regions",
            ));
        }
        let consolidated = sort_reading_order(consolidated);
        debug!(
            stage = %Stage::Consolidating,
            regions = consolidated.len(),
            "regions consolidated and sorted"
        );

        // Expanding
        let expanded = expand_regions(
            &consolidated,
            &self.config.expansion,
            Some(image.height() as f32),
        );

        // Reading
        let lines = self.read_regions(image, &expanded)?;

        // Parsing
        debug!(stage = %Stage::Parsing, lines = lines.len(), "binding lines to template");
        parse_fields(&lines)
    }

    /// Keeps only regions carrying the configured text label.
    fn filter_text_regions(
        &self,
        detected: &[DetectedRegion],
    ) -> Result<Vec<BoundingBox>, ExtractionError> {
        let text_boxes: Vec<BoundingBox> = detected
            .iter()
            .filter(|r| r.label == self.config.text_label)
            .map(|r| r.bbox)
            .collect();
        debug!(
            stage = %Stage::Filtering,
            kept = text_boxes.len(),
            dropped = detected.len() - text_boxes.len(),
            "non-text regions discarded"
        );
        if text_boxes.is_empty() {
            return Err(ExtractionError::structural(
                Stage::Filtering,
                format!("no regions labeled '{}'", self.config.text_label),
            ));
        }
        Ok(text_boxes)
    }

    /// Runs the recognizer and pairs each region with its cleaned text.
    fn read_regions(
        &self,
        image: &RgbImage,
        regions: &[BoundingBox],
    ) -> Result<Vec<RecognizedLine>, ExtractionError> {
        debug!(stage = %Stage::Reading, regions = regions.len(), "running text recognizer");
        let texts = self.recognizer.recognize(image, regions)?;
        if texts.len() != regions.len() {
            return Err(ExtractionError::structural(
                Stage::Reading,
                format!(
                    "recognizer returned {} strings for {} regions",
                    texts.len(),
                    regions.len()
                ),
            ));
        }
        Ok(regions
            .iter()
            .zip(texts)
            .enumerate()
            .map(|(i, (bbox, text))| RecognizedLine::new(i, *bbox, strip_markup(&text)))
            .collect())
    }
}

/// Re-sorts consolidated regions into top-to-bottom, left-to-right order.
///
/// The consolidator emits seed-encounter order; positional parsing needs
/// spatial order, so this re-sort is a mandatory pipeline step.
fn sort_reading_order(mut boxes: Vec<BoundingBox>) -> Vec<BoundingBox> {
    boxes.sort_by(|a, b| a.y1.total_cmp(&b.y1).then(a.x1.total_cmp(&b.x1)));
    boxes
}

/// Removes `<...>`-style markup tags from recognizer output.
fn strip_markup(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").into_owned()
}

fn load_rgb_image(path: &Path) -> Result<RgbImage, ExtractionError> {
    let input_error = |source| ExtractionError::Input {
        path: path.display().to_string(),
        source,
    };
    let reader = image::ImageReader::open(path)
        .map_err(|e| input_error(image::ImageError::IoError(e)))?;
    let decoded = reader.decode().map_err(input_error)?;
    Ok(decoded.to_rgb8())
}
