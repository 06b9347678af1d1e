// Rust guideline compliant 2026-10-17

//! Adapters (secondary ports) for the churn dashboard binary.
//!
//! Each sub-module implements one or more hexagonal port traits defined in the
//! `domain` crate. Adapters are isolated from the scoring and report logic.

pub mod artifacts;
pub mod csv_directory;
pub mod download_dir;
pub mod pdf_renderer;
