// Rust guideline compliant 2026-10-17

//! Command-line surface of the dashboard.
//!
//! The same [`Action`] set is reachable as a one-shot subcommand and as a line
//! typed into the interactive shell ([`ShellLine`]).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use domain::{CustomerId, Gender, ManualInput};

/// Lowest monthly charge accepted on the manual screen.
pub const MIN_MONTHLY_CHARGES: f64 = 30.0;

/// Highest monthly charge accepted on the manual screen.
pub const MAX_MONTHLY_CHARGES: f64 = 150.0;

#[derive(Parser, Debug)]
#[command(
    name = "churn_dashboard",
    about = "Predict customer churn from a dataset lookup or a manual entry",
    version
)]
pub struct Cli {
    /// Model artifact (JSON)
    #[arg(long, global = true, env = "CHURN_MODEL", default_value = "model.json")]
    pub model: PathBuf,
    /// Scaler artifact (JSON)
    #[arg(long, global = true, env = "CHURN_SCALER", default_value = "scaler.json")]
    pub scaler: PathBuf,
    /// Customer dataset (CSV)
    #[arg(long, global = true, env = "CHURN_DATA", default_value = "customer_churn_data.csv")]
    pub data: PathBuf,
    /// Directory receiving PDF reports
    #[arg(long, global = true, env = "CHURN_REPORT_DIR", default_value = "reports")]
    pub report_dir: PathBuf,
    /// TrueType font embedded in reports (built-in Helvetica when unset)
    #[arg(long, global = true, env = "CHURN_FONT")]
    pub font: Option<PathBuf>,
    /// Currency symbol prefixed to monetary values
    #[arg(long, global = true, env = "CHURN_CURRENCY", default_value = "€")]
    pub currency: String,
    /// Width of the probability gauge, in characters
    #[arg(long, global = true, default_value_t = 40)]
    pub gauge_width: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(flatten)]
    Action(Action),
    /// Write a synthetic customer dataset CSV
    GenerateData {
        /// Number of customers to generate
        #[arg(long, default_value_t = 1000)]
        rows: usize,
        /// RNG seed for a reproducible dataset
        #[arg(long)]
        seed: Option<u64>,
        /// Output file (defaults to the --data path)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Run actions interactively, one per line
    Shell,
}

/// Dashboard actions shared by the command line and the shell.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Action {
    /// List every customer ID in the dataset
    Ids,
    /// Show a dataset customer's details and churn prediction
    Lookup {
        /// Customer ID to look up
        id: CustomerId,
        /// Also produce the PDF report
        #[arg(long)]
        report: bool,
    },
    /// Predict churn for values entered by hand
    Manual(ManualArgs),
}

/// Values of the manual entry screen.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ManualArgs {
    #[arg(long, value_parser = clap::value_parser!(u32).range(10..=100), default_value_t = 30)]
    pub age: u32,
    #[arg(long, value_enum, ignore_case = true, default_value_t = GenderArg::Male)]
    pub gender: GenderArg,
    /// Months with the company
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=130), default_value_t = 10)]
    pub tenure: u32,
    #[arg(long, value_parser = parse_monthly_charges, default_value_t = MIN_MONTHLY_CHARGES)]
    pub monthly_charges: f64,
    /// Also produce the PDF report
    #[arg(long)]
    pub report: bool,
}

impl ManualArgs {
    #[must_use]
    pub fn input(&self) -> ManualInput {
        ManualInput {
            age: self.age,
            gender: self.gender.into(),
            tenure: self.tenure,
            monthly_charges: self.monthly_charges,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Self::Male,
            GenderArg::Female => Self::Female,
        }
    }
}

fn parse_monthly_charges(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.trim().parse().map_err(|e| format!("{raw:?} is not a number: {e}"))?;
    if !(MIN_MONTHLY_CHARGES..=MAX_MONTHLY_CHARGES).contains(&value) {
        return Err(format!(
            "{value} is not in {MIN_MONTHLY_CHARGES}..={MAX_MONTHLY_CHARGES}"
        ));
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// Shell
// ---------------------------------------------------------------------------

/// One line typed into the interactive shell.
#[derive(Parser, Debug)]
#[command(name = "churn", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    #[command(flatten)]
    Action(Action),
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

impl ShellLine {
    /// Parse a whitespace-separated shell line.
    ///
    /// # Errors
    ///
    /// Returns the clap error (including help output) for anything that is
    /// not a valid command.
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(line.split_whitespace())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::{Action, Cli, Command, GenderArg, ManualArgs, ShellCommand, ShellLine};
    use clap::{CommandFactory as _, Parser as _};
    use domain::{Gender, ManualInput};

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
        ShellLine::command().debug_assert();
    }

    #[test]
    fn lookup_with_report() {
        let cli = Cli::try_parse_from(["churn_dashboard", "lookup", "42", "--report"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Action(Action::Lookup { id: 42, report: true })
        ));
    }

    #[test]
    fn manual_defaults() {
        let cli = Cli::try_parse_from(["churn_dashboard", "manual"]).unwrap();
        let Command::Action(Action::Manual(args)) = cli.command else {
            panic!("expected a manual action");
        };
        assert!(!args.report);
        assert_eq!(
            args.input(),
            ManualInput { age: 30, gender: Gender::Male, tenure: 10, monthly_charges: 30.0 }
        );
    }

    #[test]
    fn manual_values() {
        let cli = Cli::try_parse_from([
            "churn_dashboard",
            "manual",
            "--age",
            "45",
            "--gender",
            "Female",
            "--tenure",
            "60",
            "--monthly-charges",
            "55.5",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Action(Action::Manual(ManualArgs {
                age: 45,
                gender: GenderArg::Female,
                tenure: 60,
                report: false,
                ..
            }))
        ));
    }

    #[test]
    fn manual_rejects_out_of_range_values() {
        for args in [
            ["--age", "9"],
            ["--age", "101"],
            ["--tenure", "131"],
            ["--monthly-charges", "29.99"],
            ["--monthly-charges", "150.5"],
            ["--monthly-charges", "abc"],
            ["--gender", "other"],
        ] {
            let result = Cli::try_parse_from(["churn_dashboard", "manual", args[0], args[1]]);
            assert!(result.is_err(), "{args:?} accepted");
        }
    }

    #[test]
    fn global_options_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "churn_dashboard",
            "ids",
            "--data",
            "other.csv",
            "--currency",
            "$",
        ])
        .unwrap();
        assert_eq!(cli.data, std::path::Path::new("other.csv"));
        assert_eq!(cli.currency, "$");
    }

    #[test]
    fn generate_data_options() {
        let cli =
            Cli::try_parse_from(["churn_dashboard", "generate-data", "--rows", "5", "--seed", "7"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Command::GenerateData { rows: 5, seed: Some(7), output: None }
        ));
    }

    #[test]
    fn shell_lines() {
        assert_eq!(ShellLine::parse_line("ids").unwrap().command, ShellCommand::Action(Action::Ids));
        assert_eq!(
            ShellLine::parse_line("  lookup 7  ").unwrap().command,
            ShellCommand::Action(Action::Lookup { id: 7, report: false })
        );
        assert_eq!(ShellLine::parse_line("exit").unwrap().command, ShellCommand::Quit);
        assert!(ShellLine::parse_line("lookup seven").is_err());
        assert!(ShellLine::parse_line("frobnicate").is_err());
    }
}
