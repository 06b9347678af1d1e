// Rust guideline compliant 2026-10-17

//! Shared prepare -> score -> classify pipeline.

use domain::{Assessment, Classifier, FeatureSource, Scaler, ScoringError};

use crate::ChurnScorer;

/// The single path from raw input to an [`Assessment`].
///
/// Dataset records and manual entries both implement `FeatureSource`, so
/// equal values produce equal assessments whichever screen they come from.
#[derive(Debug)]
pub struct ChurnPipeline<S: Scaler, C: Classifier> {
    scorer: ChurnScorer<S, C>,
}

impl<S: Scaler, C: Classifier> ChurnPipeline<S, C> {
    #[must_use]
    pub fn new(scorer: ChurnScorer<S, C>) -> Self {
        Self { scorer }
    }

    /// Prepare, score and classify one input.
    ///
    /// The risk category is only computed when the model produced a
    /// probability.
    ///
    /// # Errors
    ///
    /// Propagates [`ScoringError`] from the scorer.
    pub fn assess<F: FeatureSource + ?Sized>(&self, source: &F) -> Result<Assessment, ScoringError> {
        let vector = source.feature_vector();
        let score = self.scorer.score(&vector)?;
        let assessment = Assessment::from_score(score);
        tracing::debug!(
            label = %assessment.score.label,
            risk = ?assessment.risk,
            "pipeline.assess"
        );
        Ok(assessment)
    }
}
