// Rust guideline compliant 2026-10-17

//! Churn probability gauge: a 0-100 axis split into five colored bands.

/// One colored range of the gauge axis, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeBand {
    pub start: f64,
    pub end: f64,
    /// Hex color, e.g. `"#d65f5f"`.
    pub color: &'static str,
}

/// Bands of the gauge axis, in ascending order.
pub const GAUGE_BANDS: [GaugeBand; 5] = [
    GaugeBand { start: 0.0, end: 20.0, color: "#999999" },
    GaugeBand { start: 20.0, end: 40.0, color: "#d65f5f" },
    GaugeBand { start: 40.0, end: 60.0, color: "#f4e04d" },
    GaugeBand { start: 60.0, end: 80.0, color: "#b7d26b" },
    GaugeBand { start: 80.0, end: 100.0, color: "#60c271" },
];

/// Gauge needle position for one probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    value: f64,
}

impl Gauge {
    /// Gauge for a probability in `[0, 1]`; out-of-range values are clamped.
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        Self { value: (probability * 100.0).clamp(0.0, 100.0) }
    }

    /// Needle position in percent.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Band containing the needle; bands are half-open except the last.
    #[must_use]
    pub fn band(&self) -> &'static GaugeBand {
        Self::band_for(self.value)
    }

    /// Band containing `value` percent.
    #[must_use]
    pub fn band_for(value: f64) -> &'static GaugeBand {
        GAUGE_BANDS
            .iter()
            .find(|band| value >= band.start && value < band.end)
            .unwrap_or(&GAUGE_BANDS[GAUGE_BANDS.len() - 1])
    }

    /// One-line terminal rendering, `width` cells wide.
    ///
    /// ```text
    /// [#########-----------] 45.7% (#f4e04d)
    /// ```
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "value is clamped to [0, 100] and widths are small"
    )]
    pub fn render_text(&self, width: usize) -> String {
        let filled = ((self.value / 100.0) * width as f64).round() as usize;
        let filled = filled.min(width);
        format!(
            "[{}{}] {:.1}% ({})",
            "#".repeat(filled),
            "-".repeat(width - filled),
            self.value,
            self.band().color
        )
    }
}
