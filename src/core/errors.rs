//! Error types for the extraction pipeline.
//!
//! Every failure surfaces to the caller as a typed [`ExtractionError`];
//! there is no partial or best-effort output. Degenerate geometry (zero-area
//! boxes in IoU computations) is handled locally in the geometry module and
//! never reaches this taxonomy.

use thiserror::Error;

/// The sequential stages of the extraction pipeline.
///
/// Used to attach context to structural and collaborator errors, so a
/// failure report names the stage it originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Running the layout detector on the input image.
    Detecting,
    /// Keeping only text-labeled regions.
    Filtering,
    /// Merging fragmented boxes into line regions.
    Consolidating,
    /// Padding regions to recapture clipped glyph margins.
    Expanding,
    /// Recognizing text inside each region.
    Reading,
    /// Binding recognized lines to the typed record.
    Parsing,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Detecting => write!(f, "layout detection"),
            Stage::Filtering => write!(f, "region filtering"),
            Stage::Consolidating => write!(f, "region consolidation"),
            Stage::Expanding => write!(f, "region expansion"),
            Stage::Reading => write!(f, "text recognition"),
            Stage::Parsing => write!(f, "field parsing"),
        }
    }
}

/// Errors produced by the extraction pipeline and its collaborators.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The input image is missing, unreadable, or undecodable.
    #[error("failed to load input image '{path}'")]
    Input {
        /// Path that was given to the pipeline.
        path: String,
        /// The underlying image error.
        #[source]
        source: image::ImageError,
    },

    /// The document structure does not match what the pipeline requires:
    /// zero surviving regions, or a recognized-line count that does not fit
    /// the template. Extraction aborts rather than degrade gracefully.
    #[error("{stage} produced an invalid structure: {message}")]
    Structural {
        /// Stage the mismatch was detected in.
        stage: Stage,
        /// What was expected versus what was found.
        message: String,
    },

    /// A field's raw text failed its required coercion. Carries the field
    /// name and offending value for diagnosability.
    #[error("field '{field}' rejected value '{value}': {reason}")]
    Parse {
        /// Canonical name of the field being coerced.
        field: &'static str,
        /// The raw text after prefix stripping.
        value: String,
        /// Why the coercion failed.
        reason: String,
    },

    /// A detection or recognition collaborator failed.
    #[error("model '{model}' failed during {stage}: {context}")]
    Inference {
        /// Name of the collaborator model.
        model: String,
        /// Stage the collaborator was serving.
        stage: Stage,
        /// Additional context about the failure.
        context: String,
        /// The underlying error, when the collaborator supplied one.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ExtractionError {
    /// Builds a structural error for a region or line count mismatch.
    pub fn structural(stage: Stage, message: impl Into<String>) -> Self {
        Self::Structural {
            stage,
            message: message.into(),
        }
    }

    /// Builds an inference error for a failing collaborator.
    pub fn inference(
        model: impl Into<String>,
        stage: Stage,
        context: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Inference {
            model: model.into(),
            stage,
            context: context.into(),
            source,
        }
    }
}
