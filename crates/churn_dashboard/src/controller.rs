// Rust guideline compliant 2026-10-17

//! Dashboard controller: one request-scoped handler per screen action.
//!
//! Holds borrowed, read-only references to the loaded adapters and the
//! scoring pipeline, so one controller serves any number of actions. Each
//! action writes its screen to the supplied writer; failures are returned as
//! [`ActionError`] and never leave shared state behind.

use std::io::{self, BufRead, Write};

use domain::{
    Assessment, Classifier, CustomerDirectory, CustomerId, DeliveryError, DocumentRenderer,
    DownloadSink, LookupError, ManualInput, REPORT_MIME_TYPE, RenderError, ReportDocument,
    Scaler, ScoringError,
};
use report::{Gauge, ReportBuilder, ReportSubject};
use scorer::ChurnPipeline;

use crate::cli::{Action, ShellCommand, ShellLine};

/// Warning shown instead of the probability for label-only models.
pub const PROBABILITY_UNSUPPORTED: &str = "This model does not support probability predictions.";

const SHELL_PROMPT: &str = "churn> ";

// ---------------------------------------------------------------------------
// ActionError
// ---------------------------------------------------------------------------

/// Why a single dashboard action failed.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// Details are logged; the screen only says the prediction is missing.
    #[error("prediction unavailable")]
    Scoring(#[from] ScoringError),
    #[error("report generation failed: {0}")]
    Render(#[from] RenderError),
    #[error("report download failed: {0}")]
    Delivery(#[from] DeliveryError),
    /// The screen itself could not be written.
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

// ---------------------------------------------------------------------------
// DashboardController
// ---------------------------------------------------------------------------

/// Serves dashboard actions against loaded adapters.
#[derive(Debug)]
pub struct DashboardController<'a, D, S, C, R, K>
where
    S: Scaler,
    C: Classifier,
{
    directory: &'a D,
    pipeline: &'a ChurnPipeline<S, C>,
    builder: &'a ReportBuilder,
    renderer: &'a R,
    downloads: &'a K,
    gauge_width: usize,
}

impl<'a, D, S, C, R, K> DashboardController<'a, D, S, C, R, K>
where
    D: CustomerDirectory,
    S: Scaler,
    C: Classifier,
    R: DocumentRenderer,
    K: DownloadSink,
{
    #[must_use]
    pub fn new(
        directory: &'a D,
        pipeline: &'a ChurnPipeline<S, C>,
        builder: &'a ReportBuilder,
        renderer: &'a R,
        downloads: &'a K,
        gauge_width: usize,
    ) -> Self {
        Self { directory, pipeline, builder, renderer, downloads, gauge_width }
    }

    /// Run one action, writing its screen to `out`.
    ///
    /// # Errors
    ///
    /// Returns the [`ActionError`] of the failed step.
    pub fn run_action<W: Write>(&self, out: &mut W, action: &Action) -> Result<(), ActionError> {
        match action {
            Action::Ids => self.list_ids(out),
            Action::Lookup { id, report } => self.lookup(out, *id, *report),
            Action::Manual(args) => self.manual(out, &args.input(), args.report),
        }
    }

    /// Print every customer ID in dataset order.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Output`] when `out` cannot be written.
    pub fn list_ids<W: Write>(&self, out: &mut W) -> Result<(), ActionError> {
        let ids = self.directory.list_all_ids();
        writeln!(out, "Customer IDs ({}):", ids.len())?;
        for id in ids {
            writeln!(out, "{id}")?;
        }
        Ok(())
    }

    /// Show a dataset customer with its prediction, and optionally offer the
    /// PDF report.
    ///
    /// An unknown id fails before anything is scored.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Lookup`] for an unknown id,
    /// [`ActionError::Scoring`] when the prediction fails, and
    /// [`ActionError::Render`] or [`ActionError::Delivery`] when the report
    /// cannot be produced. In the last two cases the prediction has already
    /// been shown.
    pub fn lookup<W: Write>(
        &self,
        out: &mut W,
        id: CustomerId,
        with_report: bool,
    ) -> Result<(), ActionError> {
        let record = self.directory.get_record_by_id(id)?;
        let assessment = self.pipeline.assess(&record).map_err(|e| log_scoring(e, "lookup"))?;
        tracing::info!(
            customer_id = id,
            label = %assessment.score.label,
            probability = ?assessment.score.probability,
            "dashboard.lookup"
        );

        let document = self.builder.build(ReportSubject::Record(&record), &assessment);
        self.show(out, &document, &assessment, Some(record.churn.as_deref().unwrap_or("Unknown")))?;
        if with_report {
            self.deliver(out, &document)?;
        }
        Ok(())
    }

    /// Show the prediction for values entered by hand, and optionally offer
    /// the PDF report.
    ///
    /// # Errors
    ///
    /// Same as [`lookup`](Self::lookup), minus the unknown-id case.
    pub fn manual<W: Write>(
        &self,
        out: &mut W,
        input: &ManualInput,
        with_report: bool,
    ) -> Result<(), ActionError> {
        let assessment = self.pipeline.assess(input).map_err(|e| log_scoring(e, "manual"))?;
        tracing::info!(
            label = %assessment.score.label,
            probability = ?assessment.score.probability,
            "dashboard.manual"
        );

        let document = self.builder.build(ReportSubject::Manual(input), &assessment);
        self.show(out, &document, &assessment, None)?;
        if with_report {
            self.deliver(out, &document)?;
        }
        Ok(())
    }

    /// Read actions from `input` line by line until end of input or `quit`.
    ///
    /// A failed action is reported inline and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns an I/O error only when `input` or `out` fails.
    pub fn run_shell<I: BufRead, W: Write>(&self, input: &mut I, out: &mut W) -> io::Result<()> {
        writeln!(out, "Customer churn dashboard. Type `help` for actions, `quit` to leave.")?;
        let mut line = String::new();
        loop {
            write!(out, "{SHELL_PROMPT}")?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }
            if line.trim().is_empty() {
                continue;
            }

            let action = match ShellLine::parse_line(&line) {
                Ok(ShellLine { command: ShellCommand::Quit }) => return Ok(()),
                Ok(ShellLine { command: ShellCommand::Action(action) }) => action,
                Err(e) => {
                    write!(out, "{}", e.render())?;
                    continue;
                }
            };
            match self.run_action(out, &action) {
                Ok(()) => {}
                Err(ActionError::Output(e)) => return Err(e),
                Err(e) => {
                    tracing::warn!(error = %e, "dashboard.shell: action failed");
                    writeln!(out, "error: {e}")?;
                }
            }
        }
    }

    // -- screen helpers --

    fn show<W: Write>(
        &self,
        out: &mut W,
        document: &ReportDocument,
        assessment: &Assessment,
        observed_churn: Option<&str>,
    ) -> io::Result<()> {
        let mut previous = None;
        for row in document.rows() {
            if previous.is_some_and(|section| section != row.section) {
                writeln!(out)?;
            }
            writeln!(out, "{}: {}", row.label, row.value)?;
            previous = Some(row.section);
        }
        // Observed churn sits with the probability; label-only screens omit it.
        match assessment.score.probability {
            Some(probability) => {
                if let Some(churn) = observed_churn {
                    writeln!(out, "Churned: {churn}")?;
                }
                writeln!(out, "{}", Gauge::from_probability(probability).render_text(self.gauge_width))?;
            }
            None => writeln!(out, "warning: {PROBABILITY_UNSUPPORTED}")?,
        }
        Ok(())
    }

    fn deliver<W: Write>(&self, out: &mut W, document: &ReportDocument) -> Result<(), ActionError> {
        let bytes = self.renderer.render(document).inspect_err(|e| {
            tracing::error!(error = %e, file_name = document.file_name(), "dashboard.report: render failed");
        })?;
        let location = self.downloads.offer_download(&bytes, document.file_name(), REPORT_MIME_TYPE)?;
        writeln!(out, "Report saved to {location}")?;
        Ok(())
    }
}

fn log_scoring(error: ScoringError, action: &str) -> ActionError {
    tracing::error!(error = %error, action, "dashboard: scoring failed");
    ActionError::Scoring(error)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
