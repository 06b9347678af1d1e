// Rust guideline compliant 2026-10-17

//! Churn probability to risk category.

use crate::RiskCategory;

/// Lowest probability classified as [`RiskCategory::High`].
pub const HIGH_RISK_THRESHOLD: f64 = 0.7;

/// Lowest probability classified as [`RiskCategory::Medium`].
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.4;

/// Map a churn probability to its risk category.
///
/// `p >= 0.7` is High, `0.4 <= p < 0.7` is Medium, everything below is Low.
/// Both thresholds belong to the more severe bucket.
#[must_use]
pub fn classify(probability: f64) -> RiskCategory {
    if probability >= HIGH_RISK_THRESHOLD {
        RiskCategory::High
    } else if probability >= MEDIUM_RISK_THRESHOLD {
        RiskCategory::Medium
    } else {
        RiskCategory::Low
    }
}
