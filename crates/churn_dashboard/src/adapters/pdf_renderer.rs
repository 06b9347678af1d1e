// Rust guideline compliant 2026-10-17

//! PDF adapter for the `DocumentRenderer` port.
//!
//! Lays the report out on A4 pages: the title, then one `label: value` line per
//! row, with a gap between the customer and outcome sections. Uses the
//! built-in Helvetica font unless a TrueType font file is configured.

use std::path::PathBuf;

use domain::{DocumentRenderer, RenderError, ReportDocument, ReportSection};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const TITLE_GAP_MM: f32 = 10.0;
const SECTION_GAP_MM: f32 = 5.0;
const TITLE_FONT_SIZE: f32 = 16.0;
const BODY_FONT_SIZE: f32 = 12.0;
const LAYER_NAME: &str = "Report";

/// `DocumentRenderer` adapter producing PDF bytes with `printpdf`.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    /// TrueType font to embed; `None` uses built-in Helvetica.
    font_path: Option<PathBuf>,
}

impl PdfRenderer {
    #[must_use]
    pub fn new(font_path: Option<PathBuf>) -> Self {
        Self { font_path }
    }

    fn load_font(&self, doc: &PdfDocumentReference) -> Result<IndirectFontRef, RenderError> {
        match &self.font_path {
            Some(path) => {
                let bytes = std::fs::read(path).map_err(|e| RenderError::FontUnavailable {
                    reason: format!("{}: {e}", path.display()),
                })?;
                doc.add_external_font(bytes.as_slice())
                    .map_err(|e| RenderError::FontUnavailable {
                        reason: format!("{}: {e:?}", path.display()),
                    })
            }
            None => doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| RenderError::FontUnavailable { reason: format!("Helvetica: {e:?}") }),
        }
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderError> {
        let (doc, page, layer) = PdfDocument::new(
            document.title(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            LAYER_NAME,
        );
        let font = self.load_font(&doc)?;

        let mut layer = doc.get_page(page).get_layer(layer);
        let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
        layer.use_text(document.title(), TITLE_FONT_SIZE, Mm(MARGIN_MM), Mm(y), &font);
        y -= LINE_HEIGHT_MM + TITLE_GAP_MM;

        let mut previous: Option<ReportSection> = None;
        let mut pages = 1_usize;
        for row in document.rows() {
            if previous.is_some_and(|section| section != row.section) {
                y -= SECTION_GAP_MM;
            }
            if y < MARGIN_MM {
                let (next_page, next_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
                layer = doc.get_page(next_page).get_layer(next_layer);
                y = PAGE_HEIGHT_MM - MARGIN_MM;
                pages += 1;
            }
            layer.use_text(
                format!("{}: {}", row.label, row.value),
                BODY_FONT_SIZE,
                Mm(MARGIN_MM),
                Mm(y),
                &font,
            );
            y -= LINE_HEIGHT_MM;
            previous = Some(row.section);
        }

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| RenderError::Layout { reason: format!("{e:?}") })?;
        tracing::debug!(pages, bytes = bytes.len(), "pdf_renderer.render");
        Ok(bytes)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::PdfRenderer;
    use domain::{
        DocumentRenderer as _, RenderError, ReportDocument, ReportField, ReportSection,
        ReportTrailer, RiskCategory,
    };

    fn document(rows: usize) -> ReportDocument {
        let mut fields: Vec<_> = (0..rows)
            .map(|i| ReportField::new(ReportSection::Customer, "Field", format!("value {i}")))
            .collect();
        fields.push(ReportField::new(ReportSection::Customer, "Monthly Charges", "€ 49.50"));
        fields.push(ReportField::new(ReportSection::Outcome, "Prediction", "Churn"));
        ReportDocument::new(
            "Customer Churn Prediction Report",
            "customer_1_churn_report.pdf",
            fields,
            Some(ReportTrailer { probability: 0.82, category: RiskCategory::High }),
        )
    }

    #[test]
    fn renders_a_pdf() {
        let bytes = PdfRenderer::default().render(&document(3)).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "output is not a PDF");
    }

    #[test]
    fn long_documents_spill_onto_more_pages() {
        let short = PdfRenderer::default().render(&document(3)).unwrap();
        let long = PdfRenderer::default().render(&document(80)).unwrap();
        assert!(long.starts_with(b"%PDF"));
        assert!(long.len() > short.len());
    }

    #[test]
    fn missing_font_file_is_a_render_error() {
        let renderer = PdfRenderer::new(Some("/nonexistent/font.ttf".into()));
        let result = renderer.render(&document(1));
        assert!(
            matches!(result, Err(RenderError::FontUnavailable { .. })),
            "got {result:?}"
        );
    }
}
