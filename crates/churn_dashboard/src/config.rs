// Rust guideline compliant 2026-10-17

//! Runtime configuration for the dashboard binary.
//!
//! Built from command-line arguments (with environment fallbacks) via
//! [`DashboardConfig::builder`].

use std::path::PathBuf;

use report::DEFAULT_CURRENCY_SYMBOL;

/// Narrowest gauge bar accepted, in characters.
pub const MIN_GAUGE_WIDTH: usize = 10;

/// Widest gauge bar accepted, in characters.
pub const MAX_GAUGE_WIDTH: usize = 200;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors from building a [`DashboardConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The supplied configuration is invalid.
    #[error("invalid dashboard configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// DashboardConfig + builder
// ---------------------------------------------------------------------------

/// Where the dashboard finds its artifacts and puts its reports.
///
/// Construct via [`DashboardConfig::builder`].
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Model artifact (JSON).
    pub model_path: PathBuf,
    /// Scaler artifact (JSON).
    pub scaler_path: PathBuf,
    /// Customer dataset (CSV).
    pub data_path: PathBuf,
    /// Directory receiving PDF reports.
    pub report_dir: PathBuf,
    /// TrueType font for reports. `None` uses the built-in Helvetica.
    pub font_path: Option<PathBuf>,
    /// Symbol prefixed to monetary values.
    pub currency_symbol: String,
    /// Width of the text gauge bar.
    pub gauge_width: usize,
}

/// Builder for [`DashboardConfig`].
#[derive(Debug)]
pub struct DashboardConfigBuilder {
    model_path: PathBuf,
    scaler_path: PathBuf,
    data_path: PathBuf,
    report_dir: PathBuf,
    font_path: Option<PathBuf>,
    currency_symbol: String,
    gauge_width: usize,
}

impl DashboardConfig {
    /// Create a builder. The three artifact paths are required.
    ///
    /// Default values: `report_dir = "reports"`, `font_path = None`,
    /// `currency_symbol = "€"`, `gauge_width = 40`.
    #[must_use]
    pub fn builder(
        model_path: impl Into<PathBuf>,
        scaler_path: impl Into<PathBuf>,
        data_path: impl Into<PathBuf>,
    ) -> DashboardConfigBuilder {
        DashboardConfigBuilder {
            model_path: model_path.into(),
            scaler_path: scaler_path.into(),
            data_path: data_path.into(),
            report_dir: PathBuf::from("reports"),
            font_path: None,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            gauge_width: 40,
        }
    }
}

impl DashboardConfigBuilder {
    #[must_use]
    pub fn report_dir(mut self, report_dir: impl Into<PathBuf>) -> Self {
        self.report_dir = report_dir.into();
        self
    }

    /// Embed this TrueType font in reports.
    #[must_use]
    pub fn font_path(mut self, font_path: Option<PathBuf>) -> Self {
        self.font_path = font_path;
        self
    }

    #[must_use]
    pub fn currency_symbol(mut self, currency_symbol: impl Into<String>) -> Self {
        self.currency_symbol = currency_symbol.into();
        self
    }

    #[must_use]
    pub fn gauge_width(mut self, gauge_width: usize) -> Self {
        self.gauge_width = gauge_width;
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] when a path is empty, the
    /// currency symbol is blank, or the gauge width is outside
    /// `[MIN_GAUGE_WIDTH, MAX_GAUGE_WIDTH]`.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<DashboardConfig, ConfigError> {
        for (name, path) in [
            ("model path", &self.model_path),
            ("scaler path", &self.scaler_path),
            ("data path", &self.data_path),
            ("report directory", &self.report_dir),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfig {
                    reason: format!("{name} must not be empty"),
                });
            }
        }
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::InvalidConfig {
                reason: "currency symbol must not be blank".to_owned(),
            });
        }
        if !(MIN_GAUGE_WIDTH..=MAX_GAUGE_WIDTH).contains(&self.gauge_width) {
            return Err(ConfigError::InvalidConfig {
                reason: format!(
                    "gauge width must be in [{MIN_GAUGE_WIDTH}, {MAX_GAUGE_WIDTH}], got {}",
                    self.gauge_width
                ),
            });
        }
        Ok(DashboardConfig {
            model_path: self.model_path,
            scaler_path: self.scaler_path,
            data_path: self.data_path,
            report_dir: self.report_dir,
            font_path: self.font_path,
            currency_symbol: self.currency_symbol,
            gauge_width: self.gauge_width,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
