// Rust guideline compliant 2026-10-17

//! JSON model and scaler artifacts for the `Scaler` and `Classifier` ports.
//!
//! Artifacts are exported from the training environment as plain JSON:
//!
//! ```text
//! scaler.json  {"feature_names": ["Age","Gender","Tenure","MonthlyCharges"],
//!               "mean": [...], "scale": [...]}
//! model.json   {"kind": "logistic_regression", "coefficients": [...], "intercept": 0.1}
//!              {"kind": "linear_svm", "coefficients": [...], "intercept": 0.1}
//! ```
//!
//! The model capability follows from `kind` and is fixed at load time.

use std::path::Path;

use domain::{
    Classifier, FEATURE_ORDER, ModelCapability, PredictedLabel, PredictionError, ScalingError,
    Scaler,
};
use serde::Deserialize;

/// Errors from loading an artifact.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// The artifact file could not be read.
    #[error("cannot read artifact {origin}: {source}")]
    Read {
        /// Where the artifact came from.
        origin: String,
        #[source]
        source: std::io::Error,
    },
    /// The artifact is not valid JSON for its type.
    #[error("cannot parse artifact {origin}: {source}")]
    Parse {
        /// Where the artifact came from.
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    /// The artifact parsed but is inconsistent.
    #[error("invalid artifact {origin}: {reason}")]
    Invalid {
        /// Where the artifact came from.
        origin: String,
        /// Human-readable description.
        reason: String,
    },
}

fn read_artifact(path: &Path) -> Result<String, ArtifactError> {
    std::fs::read_to_string(path).map_err(|source| ArtifactError::Read {
        origin: path.display().to_string(),
        source,
    })
}

fn parse_artifact<T: for<'de> Deserialize<'de>>(json: &str, origin: &str) -> Result<T, ArtifactError> {
    serde_json::from_str(json).map_err(|source| ArtifactError::Parse {
        origin: origin.to_owned(),
        source,
    })
}

fn invalid(origin: &str, reason: impl Into<String>) -> ArtifactError {
    ArtifactError::Invalid { origin: origin.to_owned(), reason: reason.into() }
}

// ---------------------------------------------------------------------------
// StandardScaler
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ScalerArtifact {
    #[serde(default)]
    feature_names: Option<Vec<String>>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

/// Standard scaler: `(x - mean) / scale` per feature.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Load a scaler artifact from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError`] when the file is unreadable, not valid JSON,
    /// or inconsistent.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let scaler = Self::from_json(&read_artifact(path)?, &path.display().to_string())?;
        tracing::info!(path = %path.display(), features = scaler.feature_count(), "artifacts.scaler.load");
        Ok(scaler)
    }

    /// Parse a scaler artifact; `origin` names it in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::Invalid`] when `mean` and `scale` differ in
    /// length, are empty, contain a zero or non-finite scale, or when
    /// `feature_names` does not match the model's feature order.
    pub fn from_json(json: &str, origin: &str) -> Result<Self, ArtifactError> {
        let artifact: ScalerArtifact = parse_artifact(json, origin)?;
        if artifact.mean.is_empty() {
            return Err(invalid(origin, "scaler has no features"));
        }
        if artifact.mean.len() != artifact.scale.len() {
            return Err(invalid(
                origin,
                format!(
                    "mean has {} entries but scale has {}",
                    artifact.mean.len(),
                    artifact.scale.len()
                ),
            ));
        }
        if artifact.scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
            return Err(invalid(origin, "scale entries must be finite and non-zero"));
        }
        if let Some(names) = &artifact.feature_names
            && names.iter().map(String::as_str).ne(FEATURE_ORDER)
        {
            return Err(invalid(
                origin,
                format!("feature_names {names:?} do not match expected order {FEATURE_ORDER:?}"),
            ));
        }
        Ok(Self { mean: artifact.mean, scale: artifact.scale })
    }

    /// Number of features the scaler was fit with.
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.mean.len()
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ScalingError> {
        if features.len() != self.mean.len() {
            return Err(ScalingError::ShapeMismatch {
                expected: self.mean.len(),
                actual: features.len(),
            });
        }
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}

// ---------------------------------------------------------------------------
// LinearModel
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ModelArtifact {
    LogisticRegression { coefficients: Vec<f64>, intercept: f64 },
    LinearSvm { coefficients: Vec<f64>, intercept: f64 },
}

/// Linear classifier: label is `1` iff `w·x + b > 0`.
///
/// Logistic regression artifacts also estimate probabilities via the
/// logistic function; linear SVM artifacts are label-only.
#[derive(Debug, Clone)]
pub struct LinearModel {
    capability: ModelCapability,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Load a model artifact from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError`] when the file is unreadable, not valid JSON,
    /// of an unknown `kind`, or inconsistent.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let model = Self::from_json(&read_artifact(path)?, &path.display().to_string())?;
        tracing::info!(
            path = %path.display(),
            capability = ?model.capability,
            "artifacts.model.load"
        );
        Ok(model)
    }

    /// Parse a model artifact; `origin` names it in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::Invalid`] when there are no coefficients or a
    /// parameter is not finite.
    pub fn from_json(json: &str, origin: &str) -> Result<Self, ArtifactError> {
        let (capability, coefficients, intercept) = match parse_artifact(json, origin)? {
            ModelArtifact::LogisticRegression { coefficients, intercept } => {
                (ModelCapability::LabelWithProbability, coefficients, intercept)
            }
            ModelArtifact::LinearSvm { coefficients, intercept } => {
                (ModelCapability::LabelOnly, coefficients, intercept)
            }
        };
        if coefficients.is_empty() {
            return Err(invalid(origin, "model has no coefficients"));
        }
        if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(invalid(origin, "model parameters must be finite"));
        }
        Ok(Self { capability, coefficients, intercept })
    }

    /// Number of features the model was trained on.
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.coefficients.len()
    }

    fn decision(&self, scaled: &[f64]) -> Result<f64, PredictionError> {
        if scaled.len() != self.coefficients.len() {
            return Err(PredictionError::ShapeMismatch {
                expected: self.coefficients.len(),
                actual: scaled.len(),
            });
        }
        Ok(self.intercept + self.coefficients.iter().zip(scaled).map(|(w, x)| w * x).sum::<f64>())
    }
}

impl Classifier for LinearModel {
    fn capability(&self) -> ModelCapability {
        self.capability
    }

    fn predict(&self, scaled: &[f64]) -> Result<PredictedLabel, PredictionError> {
        let z = self.decision(scaled)?;
        Ok(PredictedLabel::from_class(u8::from(z > 0.0)))
    }

    fn predict_probability(&self, scaled: &[f64]) -> Result<f64, PredictionError> {
        if self.capability == ModelCapability::LabelOnly {
            return Err(PredictionError::ProbabilityUnsupported);
        }
        let z = self.decision(scaled)?;
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
