// Rust guideline compliant 2026-10-17

//! CSV adapter for the `CustomerDirectory` port.
//!
//! Loads the whole customer export into memory at startup. Columns are matched
//! by header name, so their order in the file does not matter. The first row
//! for a given `CustomerID` wins; later duplicates are skipped with a warning.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use domain::{CustomerDirectory, CustomerId, CustomerRecord, LookupError};
use serde::{Deserialize, Serialize};

/// Errors from loading or writing a customer dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file could not be opened.
    #[error("cannot open dataset {path}: {source}")]
    Open {
        /// Path of the dataset file.
        path: String,
        /// Underlying CSV/IO error.
        #[source]
        source: csv::Error,
    },
    /// A row is missing a field or a field is not numeric where it must be.
    #[error("malformed dataset row at line {line}: {reason}")]
    Malformed {
        /// 1-based line number, `0` when unknown.
        line: u64,
        /// Human-readable description.
        reason: String,
    },
    /// The dataset file could not be written.
    #[error("cannot write dataset {path}: {source}")]
    Write {
        /// Path of the dataset file.
        path: String,
        /// Underlying CSV/IO error.
        #[source]
        source: csv::Error,
    },
}

/// On-disk row layout. Field order is the column order used when writing.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CustomerRow {
    #[serde(rename = "CustomerID")]
    customer_id: CustomerId,
    age: u32,
    gender: String,
    tenure: u32,
    monthly_charges: f64,
    contract_type: String,
    internet_service: String,
    total_charges: f64,
    tech_support: String,
    #[serde(default)]
    churn: Option<String>,
}

impl From<CustomerRow> for CustomerRecord {
    fn from(row: CustomerRow) -> Self {
        Self {
            customer_id: row.customer_id,
            age: row.age,
            gender: row.gender,
            tenure: row.tenure,
            monthly_charges: row.monthly_charges,
            total_charges: row.total_charges,
            contract_type: row.contract_type,
            internet_service: row.internet_service,
            tech_support: row.tech_support,
            churn: row.churn,
        }
    }
}

impl From<&CustomerRecord> for CustomerRow {
    fn from(record: &CustomerRecord) -> Self {
        Self {
            customer_id: record.customer_id,
            age: record.age,
            gender: record.gender.clone(),
            tenure: record.tenure,
            monthly_charges: record.monthly_charges,
            contract_type: record.contract_type.clone(),
            internet_service: record.internet_service.clone(),
            total_charges: record.total_charges,
            tech_support: record.tech_support.clone(),
            churn: record.churn.clone(),
        }
    }
}

/// `CustomerDirectory` adapter backed by an in-memory copy of a CSV file.
///
/// Immutable after loading; safe to share between sessions.
#[derive(Debug, Default)]
pub struct CsvCustomerDirectory {
    /// Unique records in file order.
    records: Vec<CustomerRecord>,
    /// Customer id to position in `records`.
    index: HashMap<CustomerId, usize>,
}

impl CsvCustomerDirectory {
    /// Load the dataset at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Open`] when the file cannot be opened and
    /// [`DatasetError::Malformed`] when a row cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|source| DatasetError::Open {
                path: path.display().to_string(),
                source,
            })?;
        let directory = Self::from_csv(reader)?;
        tracing::info!(
            path = %path.display(),
            customers = directory.len(),
            "csv_directory.load"
        );
        Ok(directory)
    }

    /// Load a dataset from any reader (header row required).
    #[cfg(test)]
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        Self::from_csv(csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader))
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, DatasetError> {
        let mut records = Vec::new();
        for row in reader.deserialize::<CustomerRow>() {
            let row = row.map_err(|e| DatasetError::Malformed {
                line: e.position().map_or(0, csv::Position::line),
                reason: e.to_string(),
            })?;
            records.push(CustomerRecord::from(row));
        }
        Ok(Self::from_records(records))
    }

    /// Build a directory from already parsed records, keeping the first
    /// record of each id.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = CustomerRecord>) -> Self {
        let mut directory = Self::default();
        for record in records {
            if directory.index.contains_key(&record.customer_id) {
                tracing::warn!(
                    customer_id = record.customer_id,
                    "csv_directory: duplicate customer id skipped"
                );
                continue;
            }
            directory.index.insert(record.customer_id, directory.records.len());
            directory.records.push(record);
        }
        directory
    }

    /// Number of unique customers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CustomerDirectory for CsvCustomerDirectory {
    fn get_record_by_id(&self, id: CustomerId) -> Result<CustomerRecord, LookupError> {
        self.index
            .get(&id)
            .map(|&position| self.records[position].clone())
            .ok_or(LookupError::RecordNotFound { id })
    }

    fn list_all_ids(&self) -> Vec<CustomerId> {
        self.records.iter().map(|r| r.customer_id).collect()
    }
}

/// Write `records` to `path` as a dataset CSV with a header row.
///
/// # Errors
///
/// Returns [`DatasetError::Write`] when the file cannot be created or written.
pub fn write_dataset(path: &Path, records: &[CustomerRecord]) -> Result<(), DatasetError> {
    let to_error = |source: csv::Error| DatasetError::Write {
        path: path.display().to_string(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(to_error)?;
    for record in records {
        writer.serialize(CustomerRow::from(record)).map_err(to_error)?;
    }
    writer.flush().map_err(|e| to_error(csv::Error::from(e)))?;
    tracing::info!(path = %path.display(), rows = records.len(), "csv_directory.write_dataset");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
