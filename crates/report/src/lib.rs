// Rust guideline compliant 2026-10-17

//! Report assembly for the churn dashboard.
//!
//! [`ReportBuilder`] turns a dataset record or a manual entry plus its
//! [`Assessment`] into an immutable `domain::ReportDocument`. Rendering to
//! bytes is left to a `domain::DocumentRenderer` adapter. [`Gauge`] models the
//! probability gauge shown next to the prediction.

mod gauge;

pub use gauge::{GAUGE_BANDS, Gauge, GaugeBand};

use domain::{
    Assessment, CustomerRecord, ManualInput, ReportDocument, ReportField, ReportSection,
    ReportTrailer, format_currency,
};

/// Title printed at the top of every report.
pub const REPORT_TITLE: &str = "Customer Churn Prediction Report";

/// Currency symbol used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// File name of reports produced from the manual entry screen.
pub const MANUAL_REPORT_FILE_NAME: &str = "manual_churn_report.pdf";

// ---------------------------------------------------------------------------
// ReportSubject
// ---------------------------------------------------------------------------

/// What a report describes.
#[derive(Debug, Clone, Copy)]
pub enum ReportSubject<'a> {
    /// A customer looked up in the dataset.
    Record(&'a CustomerRecord),
    /// A hypothetical customer entered by hand.
    Manual(&'a ManualInput),
}

impl ReportSubject<'_> {
    /// Download file name for this subject.
    #[must_use]
    pub fn file_name(&self) -> String {
        match self {
            Self::Record(record) => format!("customer_{}_churn_report.pdf", record.customer_id),
            Self::Manual(_) => MANUAL_REPORT_FILE_NAME.to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// ReportBuilder
// ---------------------------------------------------------------------------

/// Assembles report documents.
///
/// Field order matches the dashboard screens. Dataset reports carry every
/// customer attribute; manual reports carry only the four entered values,
/// since the other attributes do not exist for a hypothetical customer.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    currency_symbol: String,
}

impl ReportBuilder {
    /// Create a builder that prints amounts with `currency_symbol`.
    #[must_use]
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self { currency_symbol: currency_symbol.into() }
    }

    /// Build the document for `subject` and its assessment.
    ///
    /// Probability and risk level are appended only when the assessment
    /// carries both.
    #[must_use]
    pub fn build(&self, subject: ReportSubject<'_>, assessment: &Assessment) -> ReportDocument {
        let mut fields = match subject {
            ReportSubject::Record(record) => self.record_fields(record),
            ReportSubject::Manual(input) => self.manual_fields(input),
        };
        fields.push(ReportField::new(
            ReportSection::Outcome,
            "Prediction",
            assessment.score.label.as_str(),
        ));

        let trailer = assessment
            .score
            .probability
            .zip(assessment.risk)
            .map(|(probability, category)| ReportTrailer { probability, category });

        tracing::debug!(
            fields = fields.len(),
            has_trailer = trailer.is_some(),
            "report.build"
        );
        ReportDocument::new(REPORT_TITLE, subject.file_name(), fields, trailer)
    }

    fn record_fields(&self, record: &CustomerRecord) -> Vec<ReportField> {
        let customer = ReportSection::Customer;
        vec![
            ReportField::new(customer, "Customer ID", record.customer_id.to_string()),
            ReportField::new(customer, "Age", record.age.to_string()),
            ReportField::new(customer, "Gender", record.gender.clone()),
            ReportField::new(customer, "Tenure", record.tenure.to_string()),
            ReportField::new(
                customer,
                "Monthly Charges",
                format_currency(&self.currency_symbol, record.monthly_charges),
            ),
            ReportField::new(customer, "Contract Type", record.contract_type.clone()),
            ReportField::new(customer, "Internet Service", record.internet_service.clone()),
            ReportField::new(
                customer,
                "Total Charges",
                format_currency(&self.currency_symbol, record.total_charges),
            ),
            ReportField::new(customer, "Technical Support", record.tech_support.clone()),
        ]
    }

    fn manual_fields(&self, input: &ManualInput) -> Vec<ReportField> {
        let customer = ReportSection::Customer;
        vec![
            ReportField::new(customer, "Age", input.age.to_string()),
            ReportField::new(customer, "Gender", input.gender.as_str()),
            ReportField::new(customer, "Tenure", input.tenure.to_string()),
            ReportField::new(
                customer,
                "Monthly Charges",
                format_currency(&self.currency_symbol, input.monthly_charges),
            ),
        ]
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Gender, PredictedLabel, RiskCategory, ScoreResult};
    use pretty_assertions::assert_eq;

    fn record(monthly_charges: f64, total_charges: f64) -> CustomerRecord {
        CustomerRecord {
            customer_id: 17,
            age: 34,
            gender: "Female".to_owned(),
            tenure: 12,
            monthly_charges,
            total_charges,
            contract_type: "Month-to-Month".to_owned(),
            internet_service: "Fiber Optic".to_owned(),
            tech_support: "No".to_owned(),
            churn: Some("Yes".to_owned()),
        }
    }

    fn assessment(label: PredictedLabel, probability: Option<f64>) -> Assessment {
        Assessment::from_score(ScoreResult { label, probability })
    }

    fn rows(doc: &ReportDocument) -> Vec<(String, String)> {
        doc.rows().into_iter().map(|f| (f.label, f.value)).collect()
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected.iter().map(|(l, v)| ((*l).to_owned(), (*v).to_owned())).collect()
    }

    // ------------------------------------------------------------------
    // Dataset path
    // ------------------------------------------------------------------

    #[test]
    fn record_report_has_screen_order_and_trailer() {
        let builder = ReportBuilder::default();
        let r = record(70.0, 840.0);
        let doc = builder.build(
            ReportSubject::Record(&r),
            &assessment(PredictedLabel::Churn, Some(0.82)),
        );

        assert_eq!(doc.title(), REPORT_TITLE);
        assert_eq!(doc.file_name(), "customer_17_churn_report.pdf");
        assert_eq!(
            rows(&doc),
            pairs(&[
                ("Customer ID", "17"),
                ("Age", "34"),
                ("Gender", "Female"),
                ("Tenure", "12"),
                ("Monthly Charges", "€ 70.00"),
                ("Contract Type", "Month-to-Month"),
                ("Internet Service", "Fiber Optic"),
                ("Total Charges", "€ 840.00"),
                ("Technical Support", "No"),
                ("Prediction", "Churn"),
                ("Churn Probability", "82.0%"),
                ("Risk Level", "High"),
            ])
        );
    }

    #[test]
    fn currency_values_use_two_decimals() {
        let builder = ReportBuilder::default();
        let a = assessment(PredictedLabel::NotChurn, Some(0.1));
        let r1 = record(49.5, 1_000.0);
        let r2 = record(49.499, 999.999);
        let d1 = builder.build(ReportSubject::Record(&r1), &a);
        let d2 = builder.build(ReportSubject::Record(&r2), &a);

        let value = |doc: &ReportDocument, label: &str| {
            doc.fields().iter().find(|f| f.label == label).map(|f| f.value.clone())
        };
        assert_eq!(value(&d1, "Monthly Charges").as_deref(), Some("€ 49.50"));
        assert_eq!(value(&d1, "Total Charges").as_deref(), Some("€ 1000.00"));
        assert_eq!(value(&d2, "Monthly Charges").as_deref(), Some("€ 49.50"));
        assert_eq!(value(&d2, "Total Charges").as_deref(), Some("€ 1000.00"));
    }

    #[test]
    fn custom_currency_symbol() {
        let builder = ReportBuilder::new("$");
        let r = record(55.0, 550.0);
        let doc = builder.build(
            ReportSubject::Record(&r),
            &assessment(PredictedLabel::NotChurn, None),
        );
        assert!(doc.fields().iter().any(|f| f.value == "$ 55.00"));
    }

    #[test]
    fn probability_renders_as_percentage() {
        let builder = ReportBuilder::default();
        let r = record(70.0, 840.0);
        let doc = builder.build(
            ReportSubject::Record(&r),
            &assessment(PredictedLabel::Churn, Some(0.457)),
        );
        let rows = rows(&doc);
        assert!(rows.contains(&("Churn Probability".to_owned(), "45.7%".to_owned())));
        assert!(rows.contains(&("Risk Level".to_owned(), "Medium".to_owned())));
    }

    #[test]
    fn label_only_assessment_has_no_trailer() {
        let builder = ReportBuilder::default();
        let r = record(70.0, 840.0);
        let doc = builder.build(ReportSubject::Record(&r), &assessment(PredictedLabel::Churn, None));
        assert!(doc.trailer().is_none());
        let last = doc.rows().last().cloned().unwrap();
        assert_eq!((last.label.as_str(), last.value.as_str()), ("Prediction", "Churn"));
    }

    // ------------------------------------------------------------------
    // Manual path
    // ------------------------------------------------------------------

    #[test]
    fn manual_report_omits_dataset_only_fields() {
        let builder = ReportBuilder::default();
        let input = ManualInput {
            age: 45,
            gender: Gender::Male,
            tenure: 60,
            monthly_charges: 55.0,
        };
        let doc = builder.build(
            ReportSubject::Manual(&input),
            &assessment(PredictedLabel::NotChurn, Some(0.25)),
        );

        assert_eq!(doc.file_name(), MANUAL_REPORT_FILE_NAME);
        assert_eq!(
            rows(&doc),
            pairs(&[
                ("Age", "45"),
                ("Gender", "Male"),
                ("Tenure", "60"),
                ("Monthly Charges", "€ 55.00"),
                ("Prediction", "Not Churn"),
                ("Churn Probability", "25.0%"),
                ("Risk Level", "Low"),
            ])
        );
        assert_eq!(doc.trailer().map(|t| t.category), Some(RiskCategory::Low));
    }

    #[test]
    fn sections_split_customer_and_outcome() {
        let builder = ReportBuilder::default();
        let r = record(70.0, 840.0);
        let doc = builder.build(
            ReportSubject::Record(&r),
            &assessment(PredictedLabel::Churn, Some(0.9)),
        );
        let first_outcome = doc
            .rows()
            .iter()
            .position(|f| f.section == ReportSection::Outcome)
            .unwrap();
        assert_eq!(doc.rows()[first_outcome].label, "Prediction");
        assert!(doc.rows()[..first_outcome].iter().all(|f| f.section == ReportSection::Customer));
    }
}
