// Rust guideline compliant 2026-10-17

//! Synthetic customer dataset generator.
//!
//! Produces reproducible demo datasets for the dashboard when no real
//! customer export is at hand.
//!
//! Entry points: [`Generator::generate`], [`Generator::generate_record`].
//! Configuration via [`GeneratorConfig::builder`].

use domain::{CustomerId, CustomerRecord};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::cell::RefCell;

// ---------------------------------------------------------------------------
// GeneratorError
// ---------------------------------------------------------------------------

/// Errors that can occur while configuring the generator.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The supplied configuration is invalid.
    #[error("invalid generator configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// GeneratorConfig + builder
// ---------------------------------------------------------------------------

/// Runtime configuration for a [`Generator`].
///
/// Construct via [`GeneratorConfig::builder`].
#[derive(Debug)]
pub struct GeneratorConfig {
    /// Number of records to generate (at least 1).
    pub rows: usize,
    /// First customer id; ids are sequential from here.
    pub first_id: CustomerId,
    /// Optional RNG seed for reproducible datasets. `None` seeds from the OS.
    pub seed: Option<u64>,
}

/// Builder for [`GeneratorConfig`].
///
/// Obtain via [`GeneratorConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct GeneratorConfigBuilder {
    rows: usize,
    first_id: CustomerId,
    seed: Option<u64>,
}

impl GeneratorConfig {
    /// Create a builder. `rows` is the only required parameter.
    ///
    /// Default values: `first_id = 1`, `seed = None`.
    #[must_use]
    pub fn builder(rows: usize) -> GeneratorConfigBuilder {
        GeneratorConfigBuilder { rows, first_id: 1, seed: None }
    }
}

impl GeneratorConfigBuilder {
    /// Override the first customer id.
    #[must_use]
    pub fn first_id(mut self, first_id: CustomerId) -> Self {
        self.first_id = first_id;
        self
    }

    /// Fix the RNG seed for deterministic output (useful in tests).
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] when `rows` is zero or the
    /// id range would overflow.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<GeneratorConfig, GeneratorError> {
        if self.rows == 0 {
            return Err(GeneratorError::InvalidConfig {
                reason: "rows must be >= 1".to_owned(),
            });
        }
        let fits = CustomerId::try_from(self.rows - 1)
            .ok()
            .and_then(|span| self.first_id.checked_add(span))
            .is_some();
        if !fits {
            return Err(GeneratorError::InvalidConfig {
                reason: format!("{} rows starting at id {} overflow the id range", self.rows, self.first_id),
            });
        }
        Ok(GeneratorConfig {
            rows: self.rows,
            first_id: self.first_id,
            seed: self.seed,
        })
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

const GENDERS: &[&str] = &["Male", "Female"];
const CONTRACT_TYPES: &[&str] = &["Month-to-Month", "One-Year", "Two-Year"];
/// Empty string stands for "no internet service".
const INTERNET_SERVICES: &[&str] = &["Fiber Optic", "DSL", ""];
const YES_NO: &[&str] = &["Yes", "No"];

/// Generates random but plausible customer records.
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    /// Interior mutability required because all public methods take `&self`.
    rng: RefCell<StdRng>,
}

impl Generator {
    /// Create a new generator from `config`.
    ///
    /// Seeds the RNG from `config.seed` if set, otherwise from the OS.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng: RefCell::new(rng) }
    }

    /// Generate the configured number of records with sequential ids.
    #[must_use]
    pub fn generate(&self) -> Vec<CustomerRecord> {
        // Inclusive range: stepping past `CustomerId::MAX` would overflow.
        let records: Vec<_> = (self.config.first_id..=CustomerId::MAX)
            .take(self.config.rows)
            .map(|id| self.generate_record(id))
            .collect();
        tracing::info!(rows = records.len(), "generator.generate");
        records
    }

    /// Generate one record with the given id.
    ///
    /// Monthly charges are drawn in integer cents from `[30.00, 150.00]`;
    /// total charges are `monthly * max(tenure, 1)`. Churn is more likely for
    /// short tenures and month-to-month contracts.
    #[must_use]
    pub fn generate_record(&self, customer_id: CustomerId) -> CustomerRecord {
        let mut rng = self.rng.borrow_mut();
        let age: u32 = rng.random_range(18..=70);
        let gender = pick(&mut rng, GENDERS);
        let tenure: u32 = rng.random_range(0..=120);
        // Integer cents avoids float-rounding during generation.
        let monthly_charges = f64::from(rng.random_range(3_000u32..=15_000u32)) / 100.0;
        let total_charges = (monthly_charges * f64::from(tenure.max(1)) * 100.0).round() / 100.0;
        let contract_type = pick(&mut rng, CONTRACT_TYPES);
        let internet_service = pick(&mut rng, INTERNET_SERVICES);
        let tech_support = pick(&mut rng, YES_NO);

        let mut churn_rate = 0.1;
        if contract_type == "Month-to-Month" {
            churn_rate += 0.3;
        }
        if tenure < 12 {
            churn_rate += 0.25;
        }
        if tech_support == "No" {
            churn_rate += 0.1;
        }
        let churn = if rng.random_bool(churn_rate) { "Yes" } else { "No" };

        CustomerRecord {
            customer_id,
            age,
            gender: gender.to_owned(),
            tenure,
            monthly_charges,
            total_charges,
            contract_type: contract_type.to_owned(),
            internet_service: internet_service.to_owned(),
            tech_support: tech_support.to_owned(),
            churn: Some(churn.to_owned()),
        }
    }
}

/// Pick one entry; index is always in bounds because it is derived from `len()`.
fn pick(rng: &mut StdRng, pool: &'static [&'static str]) -> &'static str {
    pool[rng.random_range(0..pool.len())]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(rows: usize, seed: u64) -> Generator {
        Generator::new(GeneratorConfig::builder(rows).seed(seed).build().unwrap())
    }

    #[test]
    fn config_rejects_zero_rows() {
        let result = GeneratorConfig::builder(0).build();
        assert!(matches!(result, Err(GeneratorError::InvalidConfig { .. })));
    }

    #[test]
    fn config_rejects_id_overflow() {
        let result = GeneratorConfig::builder(2).first_id(CustomerId::MAX).build();
        assert!(matches!(result, Err(GeneratorError::InvalidConfig { .. })));
    }

    #[test]
    fn last_id_at_id_range_end_is_generated() {
        let config = GeneratorConfig::builder(1).first_id(CustomerId::MAX).seed(1).build().unwrap();
        let records = Generator::new(config).generate();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].customer_id, CustomerId::MAX);

        let config = GeneratorConfig::builder(3).first_id(CustomerId::MAX - 2).seed(1).build().unwrap();
        let ids: Vec<_> = Generator::new(config).generate().iter().map(|r| r.customer_id).collect();
        assert_eq!(ids, vec![CustomerId::MAX - 2, CustomerId::MAX - 1, CustomerId::MAX]);
    }

    #[test]
    fn builder_defaults() {
        let config = GeneratorConfig::builder(5).build().unwrap();
        assert_eq!(config.first_id, 1);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn generates_requested_rows_with_sequential_ids() {
        let records = generator(25, 3).generate();
        let ids: Vec<_> = records.iter().map(|r| r.customer_id).collect();
        assert_eq!(ids, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn values_stay_in_range() {
        for r in generator(500, 11).generate() {
            assert!((18..=70).contains(&r.age), "age {}", r.age);
            assert!(r.tenure <= 120, "tenure {}", r.tenure);
            assert!((30.0..=150.0).contains(&r.monthly_charges), "monthly {}", r.monthly_charges);
            assert!(r.total_charges >= r.monthly_charges - 0.005);
            assert!(GENDERS.contains(&r.gender.as_str()));
            assert!(CONTRACT_TYPES.contains(&r.contract_type.as_str()));
            assert!(matches!(r.churn.as_deref(), Some("Yes" | "No")));
        }
    }

    #[test]
    fn seeded_output_is_deterministic() {
        assert_eq!(generator(50, 99).generate(), generator(50, 99).generate());
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(generator(50, 1).generate(), generator(50, 2).generate());
    }
}
