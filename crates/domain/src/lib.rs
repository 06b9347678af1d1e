// Rust guideline compliant 2026-10-17

//! Shared domain types for the churn dashboard.
//!
//! Defines `CustomerRecord`, `ManualInput`, the scoring result types, the error
//! taxonomy, and the hexagonal port traits: `CustomerDirectory`, `Scaler`,
//! `Classifier`, `DocumentRenderer`, and `DownloadSink`.
//! All dashboard components depend on this crate; no other workspace crate is
//! imported here.

mod document;
mod features;
mod risk;

pub use document::{
    REPORT_MIME_TYPE, ReportDocument, ReportField, ReportSection, ReportTrailer,
    format_currency, format_probability,
};
pub use features::{FEATURE_COUNT, FEATURE_ORDER, FeatureSource, FeatureVector, gender_code, prepare};
pub use risk::{HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD, classify};

use std::fmt;

/// Unique key of a customer in the dataset.
pub type CustomerId = u32;

// ---------------------------------------------------------------------------
// Input records
// ---------------------------------------------------------------------------

/// One row of the customer dataset.
///
/// Read-only once loaded. `gender` is kept as the raw dataset string; the
/// encoding into a model feature happens in [`prepare`].
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    /// Unique key; one record per id.
    pub customer_id: CustomerId,
    pub age: u32,
    /// Expected to be `"Male"` or `"Female"`.
    pub gender: String,
    /// Months with the company.
    pub tenure: u32,
    pub monthly_charges: f64,
    pub total_charges: f64,
    pub contract_type: String,
    pub internet_service: String,
    pub tech_support: String,
    /// Historical churn observation (`"Yes"`/`"No"`), if recorded.
    pub churn: Option<String>,
}

/// Gender values accepted by the manual entry screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Dataset spelling of this value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feature values typed in by an operator for a hypothetical customer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualInput {
    pub age: u32,
    pub gender: Gender,
    pub tenure: u32,
    pub monthly_charges: f64,
}

// ---------------------------------------------------------------------------
// Scoring results
// ---------------------------------------------------------------------------

/// Binary label produced by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictedLabel {
    /// Class `0`.
    NotChurn,
    /// Class `1`.
    Churn,
}

impl PredictedLabel {
    /// Map a model class index to a label: `1` is churn, anything else is not.
    #[must_use]
    pub fn from_class(class: u8) -> Self {
        if class == 1 { Self::Churn } else { Self::NotChurn }
    }

    /// Human-readable form used on screen and in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Churn => "Churn",
            Self::NotChurn => "Not Churn",
        }
    }
}

impl fmt::Display for PredictedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discretized churn-probability bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring one feature vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    pub label: PredictedLabel,
    /// Probability of the churn class in `[0, 1]`; `None` when the model has
    /// no probability estimator.
    pub probability: Option<f64>,
}

/// A score together with its risk category.
///
/// `risk` is `Some` exactly when `score.probability` is `Some`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub score: ScoreResult,
    pub risk: Option<RiskCategory>,
}

impl Assessment {
    /// Derive the risk category from the score's probability, if any.
    #[must_use]
    pub fn from_score(score: ScoreResult) -> Self {
        Self { risk: score.probability.map(classify), score }
    }
}

/// Whether a model can estimate class probabilities.
///
/// Resolved once when the model artifact is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelCapability {
    /// Only `predict` is available.
    LabelOnly,
    /// Both `predict` and `predict_probability` are available.
    LabelWithProbability,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from the `CustomerDirectory` port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No record carries the requested id.
    #[error("customer {id} not found")]
    RecordNotFound {
        /// The id that was looked up.
        id: CustomerId,
    },
}

/// Errors from the `Scaler` port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScalingError {
    /// The scaler was fit on a different number of features.
    #[error("scaler expects {expected} features, got {actual}")]
    ShapeMismatch {
        /// Feature count the scaler was fit with.
        expected: usize,
        /// Feature count that was supplied.
        actual: usize,
    },
}

/// Errors from the `Classifier` port.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    /// The model was fit on a different number of features.
    #[error("model expects {expected} features, got {actual}")]
    ShapeMismatch {
        /// Feature count the model was fit with.
        expected: usize,
        /// Feature count that was supplied.
        actual: usize,
    },
    /// `predict_probability` was called on a label-only model.
    #[error("model does not support probability predictions")]
    ProbabilityUnsupported,
    /// The model produced a probability outside `[0, 1]`.
    #[error("model returned invalid probability {value}")]
    InvalidProbability {
        /// The offending value.
        value: f64,
    },
}

/// Errors from scoring a feature vector.
///
/// Scaling and prediction failures stay distinct so callers can tell a
/// scaler/preparer mismatch from a model failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    /// The scaler rejected the feature vector.
    #[error("scaling failed: {0}")]
    Scaling(#[from] ScalingError),
    /// The model rejected the scaled vector.
    #[error("prediction failed: {0}")]
    Prediction(#[from] PredictionError),
}

/// Errors from the `DocumentRenderer` port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A font required by the document could not be loaded.
    #[error("font unavailable: {reason}")]
    FontUnavailable {
        /// Human-readable description.
        reason: String,
    },
    /// The page layout could not be produced.
    #[error("page layout failed: {reason}")]
    Layout {
        /// Human-readable description.
        reason: String,
    },
}

/// Errors from the `DownloadSink` port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    /// The bytes could not be handed over.
    #[error("delivery failed: {reason}")]
    Failed {
        /// Human-readable description.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Hexagonal port: read access to the customer dataset.
///
/// Implementations are immutable after loading and safe to share between
/// sessions.
pub trait CustomerDirectory {
    /// Fetch the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::RecordNotFound` when no record carries `id`.
    fn get_record_by_id(&self, id: CustomerId) -> Result<CustomerRecord, LookupError>;

    /// All customer ids in dataset iteration order (not necessarily sorted).
    fn list_all_ids(&self) -> Vec<CustomerId>;
}

/// Hexagonal port: the fitted feature scaler.
///
/// `transform` must be deterministic and side-effect free.
pub trait Scaler {
    /// Scale `features`, returning a vector in the same order.
    ///
    /// # Errors
    ///
    /// Returns `ScalingError::ShapeMismatch` when the feature count differs
    /// from the one the scaler was fit with.
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ScalingError>;
}

/// Hexagonal port: the trained churn classifier.
///
/// The capability is fixed for the lifetime of the instance; callers read it
/// once and never call `predict_probability` on a `LabelOnly` model.
pub trait Classifier {
    /// Whether `predict_probability` is supported.
    fn capability(&self) -> ModelCapability;

    /// Predict the binary label for a scaled vector.
    ///
    /// # Errors
    ///
    /// Returns `PredictionError::ShapeMismatch` when the vector has the wrong
    /// number of features.
    fn predict(&self, scaled: &[f64]) -> Result<PredictedLabel, PredictionError>;

    /// Probability of the churn class for a scaled vector.
    ///
    /// # Errors
    ///
    /// Returns `PredictionError::ProbabilityUnsupported` for label-only models
    /// and `PredictionError::ShapeMismatch` for wrongly shaped input.
    fn predict_probability(&self, scaled: &[f64]) -> Result<f64, PredictionError>;
}

/// Hexagonal port: turns a report document into downloadable bytes.
pub trait DocumentRenderer {
    /// Render `document` to a complete byte sequence.
    ///
    /// Either the whole document is produced or an error is returned; partial
    /// output is never handed back.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` when fonts or page layout are unavailable.
    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderError>;
}

/// Hexagonal port: offers rendered bytes to the user.
pub trait DownloadSink {
    /// Deliver `bytes` under `file_name`; returns where the download can be
    /// found.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError::Failed` when the bytes cannot be stored.
    fn offer_download(
        &self,
        bytes: &[u8],
        file_name: &str,
        mime_type: &str,
    ) -> Result<String, DeliveryError>;
}
