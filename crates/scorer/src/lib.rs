// Rust guideline compliant 2026-10-17

//! Churn scoring component.
//!
//! [`ChurnScorer`] wraps an injected `domain::Scaler` and `domain::Classifier`
//! behind a single [`ChurnScorer::score`] operation. [`ChurnPipeline`] chains
//! feature preparation, scoring and risk classification; both the dataset
//! lookup and the manual entry screen go through it.

mod pipeline;

pub use pipeline::ChurnPipeline;

use domain::{
    Classifier, FeatureVector, ModelCapability, PredictionError, ScoreResult, Scaler,
    ScoringError,
};

// ---------------------------------------------------------------------------
// ChurnScorer
// ---------------------------------------------------------------------------

/// Scales a feature vector and runs the model on it.
///
/// Generic over the scaler and model adapters; holds them read-only, so a
/// scorer can be shared between concurrent sessions whenever both adapters
/// are `Sync`. The model capability is read once at construction.
#[derive(Debug)]
pub struct ChurnScorer<S: Scaler, C: Classifier> {
    scaler: S,
    model: C,
    capability: ModelCapability,
}

impl<S: Scaler, C: Classifier> ChurnScorer<S, C> {
    /// Create a scorer from a loaded scaler and model.
    #[must_use]
    pub fn new(scaler: S, model: C) -> Self {
        let capability = model.capability();
        tracing::info!(?capability, "scorer.new");
        Self { scaler, model, capability }
    }

    /// Capability of the wrapped model, resolved at construction.
    #[must_use]
    pub fn capability(&self) -> ModelCapability {
        self.capability
    }

    /// Score one feature vector.
    ///
    /// Scales the vector, predicts the label, and, for probabilistic models,
    /// the churn probability. Label-only models yield `probability: None`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::Scaling`] when the scaler rejects the vector
    /// and [`ScoringError::Prediction`] when the model fails or returns a
    /// probability outside `[0, 1]`.
    pub fn score(&self, vector: &FeatureVector) -> Result<ScoreResult, ScoringError> {
        let scaled = self.scaler.transform(&vector.to_array()).map_err(|e| {
            tracing::error!(error = %e, "scorer.score: scaler rejected feature vector");
            ScoringError::Scaling(e)
        })?;

        let label = self.model.predict(&scaled)?;

        let probability = match self.capability {
            ModelCapability::LabelWithProbability => {
                let p = self.model.predict_probability(&scaled)?;
                if !(0.0..=1.0).contains(&p) {
                    return Err(PredictionError::InvalidProbability { value: p }.into());
                }
                Some(p)
            }
            ModelCapability::LabelOnly => None,
        };

        tracing::debug!(%label, ?probability, "scorer.score");
        Ok(ScoreResult { label, probability })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::ChurnScorer;
    use domain::{
        Classifier, FeatureVector, ModelCapability, PredictedLabel, PredictionError,
        ScalingError, Scaler, ScoringError, prepare,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ------------------------------------------------------------------
    // Mock adapters
    // ------------------------------------------------------------------

    /// Subtracts a constant from every feature; rejects the wrong arity.
    pub(crate) struct MockScaler {
        pub(crate) arity: usize,
    }

    impl MockScaler {
        pub(crate) fn new() -> Self {
            Self { arity: 4 }
        }
    }

    impl Scaler for MockScaler {
        fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ScalingError> {
            if features.len() != self.arity {
                return Err(ScalingError::ShapeMismatch {
                    expected: self.arity,
                    actual: features.len(),
                });
            }
            Ok(features.iter().map(|x| x - 1.0).collect())
        }
    }

    /// Returns a fixed label and probability and counts probability calls.
    pub(crate) struct MockModel {
        pub(crate) capability: ModelCapability,
        pub(crate) label: PredictedLabel,
        pub(crate) probability: f64,
        pub(crate) probability_calls: AtomicUsize,
        pub(crate) fail_predict: bool,
    }

    impl MockModel {
        pub(crate) fn with_probability(label: PredictedLabel, probability: f64) -> Self {
            Self {
                capability: ModelCapability::LabelWithProbability,
                label,
                probability,
                probability_calls: AtomicUsize::new(0),
                fail_predict: false,
            }
        }

        pub(crate) fn label_only(label: PredictedLabel) -> Self {
            Self {
                capability: ModelCapability::LabelOnly,
                ..Self::with_probability(label, 0.0)
            }
        }
    }

    impl Classifier for MockModel {
        fn capability(&self) -> ModelCapability {
            self.capability
        }

        fn predict(&self, scaled: &[f64]) -> Result<PredictedLabel, PredictionError> {
            if self.fail_predict {
                return Err(PredictionError::ShapeMismatch { expected: 5, actual: scaled.len() });
            }
            Ok(self.label)
        }

        fn predict_probability(&self, _scaled: &[f64]) -> Result<f64, PredictionError> {
            self.probability_calls.fetch_add(1, Ordering::SeqCst);
            match self.capability {
                ModelCapability::LabelWithProbability => Ok(self.probability),
                ModelCapability::LabelOnly => Err(PredictionError::ProbabilityUnsupported),
            }
        }
    }

    /// Deterministic model whose output depends on the scaled input.
    ///
    /// The label follows the gender slot, so with `MockScaler` a `Female`
    /// encoding predicts churn and a `Male` one does not.
    pub(crate) struct InputSensitiveModel;

    impl Classifier for InputSensitiveModel {
        fn capability(&self) -> ModelCapability {
            ModelCapability::LabelWithProbability
        }

        fn predict(&self, scaled: &[f64]) -> Result<PredictedLabel, PredictionError> {
            Ok(PredictedLabel::from_class(u8::from(scaled[1] >= 0.0)))
        }

        fn predict_probability(&self, scaled: &[f64]) -> Result<f64, PredictionError> {
            Ok((scaled.iter().sum::<f64>() / 1_000.0).clamp(0.0, 1.0))
        }
    }

    fn vector() -> FeatureVector {
        prepare(34, "Female", 12, 70.0)
    }

    // ------------------------------------------------------------------
    // Scoring
    // ------------------------------------------------------------------

    #[test]
    fn probabilistic_model_yields_label_and_probability() {
        let scorer = ChurnScorer::new(
            MockScaler::new(),
            MockModel::with_probability(PredictedLabel::Churn, 0.82),
        );
        let result = scorer.score(&vector()).unwrap();
        assert_eq!(result.label, PredictedLabel::Churn);
        assert_eq!(result.probability, Some(0.82));
    }

    #[test]
    fn label_only_model_yields_no_probability_and_is_never_probed() {
        let scorer = ChurnScorer::new(MockScaler::new(), MockModel::label_only(PredictedLabel::Churn));
        assert_eq!(scorer.capability(), ModelCapability::LabelOnly);

        let result = scorer.score(&vector()).unwrap();
        assert_eq!(result.label, PredictedLabel::Churn);
        assert!(result.probability.is_none());
        assert_eq!(scorer.model.probability_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn scaler_shape_mismatch_surfaces_as_scaling_error() {
        let scorer = ChurnScorer::new(
            MockScaler { arity: 3 },
            MockModel::with_probability(PredictedLabel::Churn, 0.5),
        );
        let result = scorer.score(&vector());
        assert_eq!(
            result,
            Err(ScoringError::Scaling(ScalingError::ShapeMismatch { expected: 3, actual: 4 }))
        );
    }

    #[test]
    fn model_failure_surfaces_as_prediction_error() {
        let model = MockModel {
            fail_predict: true,
            ..MockModel::with_probability(PredictedLabel::Churn, 0.5)
        };
        let scorer = ChurnScorer::new(MockScaler::new(), model);
        let result = scorer.score(&vector());
        assert!(
            matches!(result, Err(ScoringError::Prediction(PredictionError::ShapeMismatch { .. }))),
            "got {result:?}"
        );
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        for bad in [1.5, -0.1, f64::NAN] {
            let scorer = ChurnScorer::new(
                MockScaler::new(),
                MockModel::with_probability(PredictedLabel::Churn, bad),
            );
            let result = scorer.score(&vector());
            assert!(
                matches!(
                    result,
                    Err(ScoringError::Prediction(PredictionError::InvalidProbability { .. }))
                ),
                "probability {bad} must be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let scorer = ChurnScorer::new(MockScaler::new(), InputSensitiveModel);
        let first = scorer.score(&vector()).unwrap();
        let second = scorer.score(&vector()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_sessions_share_one_scorer() {
        let scorer = ChurnScorer::new(MockScaler::new(), InputSensitiveModel);
        let expected = scorer.score(&vector()).unwrap();

        let results: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(|| scorer.score(&vector()))).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for result in results {
            assert_eq!(result.unwrap(), expected);
        }
    }
}
