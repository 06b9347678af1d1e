// Rust guideline compliant 2026-10-17

//! Feature preparation: raw customer values to the model's input vector.

use crate::{CustomerRecord, ManualInput};

/// Number of features the scaler and model were fit with.
pub const FEATURE_COUNT: usize = 4;

/// Column order the scaler and model were fit with.
///
/// Reordering these silently corrupts predictions.
pub const FEATURE_ORDER: [&str; FEATURE_COUNT] = ["Age", "Gender", "Tenure", "MonthlyCharges"];

/// Fixed-order numeric input of the model: (Age, `GenderCode`, Tenure, `MonthlyCharges`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub age: f64,
    /// `1` for `"Female"`, `0` otherwise.
    pub gender_code: u8,
    pub tenure: f64,
    pub monthly_charges: f64,
}

impl FeatureVector {
    /// Values in [`FEATURE_ORDER`].
    #[must_use]
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age,
            f64::from(self.gender_code),
            self.tenure,
            self.monthly_charges,
        ]
    }
}

/// Encode a gender string: exactly `"Female"` is `1`, anything else is `0`.
///
/// Total over all strings. Values other than `"Male"`/`"Female"` are encoded as
/// `0` and logged, keeping the encoding the model was trained with.
#[must_use]
pub fn gender_code(gender: &str) -> u8 {
    match gender {
        "Female" => 1,
        "Male" => 0,
        other => {
            tracing::warn!(gender = other, "features.gender_code: unrecognized value encoded as 0");
            0
        }
    }
}

/// Build the model input vector from raw values.
///
/// Every consumption path goes through this function so that a dataset record
/// and a manual entry with equal values yield equal vectors.
#[must_use]
pub fn prepare(age: u32, gender: &str, tenure: u32, monthly_charges: f64) -> FeatureVector {
    FeatureVector {
        age: f64::from(age),
        gender_code: gender_code(gender),
        tenure: f64::from(tenure),
        monthly_charges,
    }
}

/// Anything that can be turned into a model input vector.
pub trait FeatureSource {
    /// Prepare the feature vector for this input.
    fn feature_vector(&self) -> FeatureVector;
}

impl FeatureSource for CustomerRecord {
    fn feature_vector(&self) -> FeatureVector {
        prepare(self.age, &self.gender, self.tenure, self.monthly_charges)
    }
}

impl FeatureSource for ManualInput {
    fn feature_vector(&self) -> FeatureVector {
        prepare(self.age, self.gender.as_str(), self.tenure, self.monthly_charges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Gender;

    fn record(gender: &str) -> CustomerRecord {
        CustomerRecord {
            customer_id: 1,
            age: 34,
            gender: gender.to_owned(),
            tenure: 12,
            monthly_charges: 70.0,
            total_charges: 840.0,
            contract_type: "Month-to-Month".to_owned(),
            internet_service: "Fiber Optic".to_owned(),
            tech_support: "No".to_owned(),
            churn: Some("Yes".to_owned()),
        }
    }

    #[test]
    fn gender_code_is_one_only_for_female() {
        assert_eq!(gender_code("Female"), 1);
        assert_eq!(gender_code("Male"), 0);
        assert_eq!(gender_code("female"), 0);
        assert_eq!(gender_code(""), 0);
        assert_eq!(gender_code("Other"), 0);
    }

    #[test]
    fn prepare_keeps_fixed_order() {
        let v = prepare(34, "Female", 12, 70.0);
        assert_eq!(v.to_array(), [34.0, 1.0, 12.0, 70.0]);
    }

    #[test]
    fn record_vector_second_component_tracks_gender() {
        for (gender, expected) in [("Female", 1.0), ("Male", 0.0), ("Unknown", 0.0)] {
            let v = record(gender).feature_vector();
            assert_eq!(v.to_array()[1], expected, "gender {gender}");
        }
    }

    #[test]
    fn manual_and_record_paths_prepare_identically() {
        let manual = ManualInput {
            age: 34,
            gender: Gender::Female,
            tenure: 12,
            monthly_charges: 70.0,
        };
        assert_eq!(manual.feature_vector(), record("Female").feature_vector());
    }

    #[test]
    fn feature_order_names() {
        assert_eq!(FEATURE_ORDER, ["Age", "Gender", "Tenure", "MonthlyCharges"]);
    }
}
