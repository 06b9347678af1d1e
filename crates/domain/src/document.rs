// Rust guideline compliant 2026-10-17

//! Report document model shared by the report builder and the renderers.

use crate::RiskCategory;

/// MIME type of rendered reports.
pub const REPORT_MIME_TYPE: &str = "application/pdf";

/// Visual grouping of report rows; renderers leave a gap between sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSection {
    /// Customer attributes.
    Customer,
    /// Prediction, probability and risk.
    Outcome,
}

/// One labeled value of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportField {
    pub section: ReportSection,
    pub label: String,
    pub value: String,
}

impl ReportField {
    #[must_use]
    pub fn new(section: ReportSection, label: &str, value: impl Into<String>) -> Self {
        Self { section, label: label.to_owned(), value: value.into() }
    }
}

/// Probability and risk category appended when the model supports them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportTrailer {
    pub probability: f64,
    pub category: RiskCategory,
}

/// Immutable document assembled for one report request.
///
/// Built once, rendered, then dropped; nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    title: String,
    file_name: String,
    fields: Vec<ReportField>,
    trailer: Option<ReportTrailer>,
}

impl ReportDocument {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        file_name: impl Into<String>,
        fields: Vec<ReportField>,
        trailer: Option<ReportTrailer>,
    ) -> Self {
        Self {
            title: title.into(),
            file_name: file_name.into(),
            fields,
            trailer,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Suggested download file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Labeled fields in display order, without the trailer.
    #[must_use]
    pub fn fields(&self) -> &[ReportField] {
        &self.fields
    }

    #[must_use]
    pub fn trailer(&self) -> Option<&ReportTrailer> {
        self.trailer.as_ref()
    }

    /// Every row to display: the fields followed by the formatted trailer.
    #[must_use]
    pub fn rows(&self) -> Vec<ReportField> {
        let mut rows = self.fields.clone();
        if let Some(trailer) = &self.trailer {
            rows.push(ReportField::new(
                ReportSection::Outcome,
                "Churn Probability",
                format_probability(trailer.probability),
            ));
            rows.push(ReportField::new(
                ReportSection::Outcome,
                "Risk Level",
                trailer.category.as_str(),
            ));
        }
        rows
    }
}

/// Format a currency amount as `"<symbol> <amount>"` with two decimals.
#[must_use]
pub fn format_currency(symbol: &str, amount: f64) -> String {
    format!("{symbol} {amount:.2}")
}

/// Format a probability in `[0, 1]` as a percentage with one decimal.
#[must_use]
pub fn format_probability(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}
