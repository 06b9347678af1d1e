// Rust guideline compliant 2026-10-17

//! Customer churn dashboard entry point.
//!
//! Loads the model, scaler and customer dataset once, wires them to the
//! scoring pipeline and the report adapters, then serves one action from the
//! command line or an interactive shell.
//!
//! # Usage
//!
//! ```text
//! # Write a synthetic dataset to play with
//! cargo run -- generate-data --rows 500 --seed 42
//!
//! # Look up a customer and save the PDF report under ./reports
//! cargo run -- lookup 17 --report
//!
//! # Score a hypothetical customer
//! cargo run -- manual --age 45 --gender male --tenure 60 --monthly-charges 55
//!
//! # Interactive session with debug output
//! RUST_LOG=debug cargo run -- shell
//! ```
//!
//! Paths default to `model.json`, `scaler.json` and `customer_churn_data.csv`
//! and can be overridden by flags, environment variables, or a `.env` file.

mod adapters;
mod cli;
mod config;
mod controller;

use std::io;
use std::process::ExitCode;

use adapters::artifacts::{LinearModel, StandardScaler};
use adapters::csv_directory::{CsvCustomerDirectory, write_dataset};
use adapters::download_dir::DownloadDirectory;
use adapters::pdf_renderer::PdfRenderer;
use anyhow::Context as _;
use clap::Parser as _;
use cli::{Cli, Command};
use config::DashboardConfig;
use controller::DashboardController;
use domain::FEATURE_COUNT;
use generator::{Generator, GeneratorConfig};
use report::ReportBuilder;
use scorer::{ChurnPipeline, ChurnScorer};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    // A missing .env file is fine; a malformed one is not.
    match dotenvy::dotenv() {
        Err(e) if !e.not_found() => return Err(e).context("failed to load .env file"),
        _ => {}
    }

    // Logs go to stderr so they never mix with the screen output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let action = match cli.command {
        Command::GenerateData { rows, seed, output } => {
            let mut builder = GeneratorConfig::builder(rows);
            if let Some(seed) = seed {
                builder = builder.seed(seed);
            }
            let config = builder.build().context("failed to build generator config")?;
            let records = Generator::new(config).generate();
            let path = output.unwrap_or(cli.data);
            write_dataset(&path, &records)
                .with_context(|| format!("failed to write dataset {}", path.display()))?;
            println!("Wrote {} customers to {}", records.len(), path.display());
            return Ok(ExitCode::SUCCESS);
        }
        Command::Action(action) => Some(action),
        Command::Shell => None,
    };

    let config = DashboardConfig::builder(cli.model, cli.scaler, cli.data)
        .report_dir(cli.report_dir)
        .font_path(cli.font)
        .currency_symbol(cli.currency)
        .gauge_width(cli.gauge_width)
        .build()
        .context("failed to build dashboard config")?;

    // -- Artifacts and dataset: loaded once, read-only afterwards --
    let scaler = StandardScaler::load(&config.scaler_path).context("failed to load scaler")?;
    let model = LinearModel::load(&config.model_path).context("failed to load model")?;
    for (artifact, count) in [("scaler", scaler.feature_count()), ("model", model.feature_count())] {
        if count != FEATURE_COUNT {
            tracing::warn!(
                artifact,
                features = count,
                expected = FEATURE_COUNT,
                "main.startup: artifact feature count mismatch, predictions will fail"
            );
        }
    }
    let directory = CsvCustomerDirectory::load(&config.data_path)
        .with_context(|| format!("failed to load dataset {}", config.data_path.display()))?;
    if directory.is_empty() {
        tracing::warn!(path = %config.data_path.display(), "main.startup: dataset has no customers");
    }

    let pipeline = ChurnPipeline::new(ChurnScorer::new(scaler, model));
    let builder = ReportBuilder::new(config.currency_symbol.clone());
    let renderer = PdfRenderer::new(config.font_path.clone());
    let downloads = DownloadDirectory::new(config.report_dir.clone());
    let controller = DashboardController::new(
        &directory,
        &pipeline,
        &builder,
        &renderer,
        &downloads,
        config.gauge_width,
    );

    let mut stdout = io::stdout().lock();
    match action {
        Some(action) => {
            if let Err(e) = controller.run_action(&mut stdout, &action) {
                eprintln!("error: {e}");
                return Ok(ExitCode::FAILURE);
            }
        }
        None => {
            let mut stdin = io::stdin().lock();
            controller.run_shell(&mut stdin, &mut stdout).context("shell I/O failed")?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
