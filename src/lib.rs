#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! gas-report library
//!
//! Core functionality for the gas snapshot reporting tools. The binaries in
//! `src/bin/` are thin wrappers: all comparison, classification, rendering
//! and validation logic lives here so it can be tested without spawning
//! processes.
//!
//! # Basic Example
//!
//! Classifying a gas delta:
//!
//! ```
//! use gas_report::report::severity::{classify, Severity};
//!
//! assert_eq!(classify(25.0), Severity::Regression);
//! assert_eq!(classify(-25.0), Severity::StrongImprovement);
//! ```
//!
//! # Advanced Example: Regression Gating
//!
//! Folding deltas into extremes and evaluating the build gate:
//!
//! ```
//! use gas_report::report::delta::{delta_extremes, evaluate_gate};
//!
//! let extremes = delta_extremes([0.0, 25.0, -3.0]);
//! let outcome = evaluate_gate(extremes.as_ref());
//! assert!(outcome.regression);
//! assert!(!outcome.improvement);
//! ```

/// ABI shape validation for `*_VIP` interface entries
pub mod abi;
/// Marker-delimited documentation file splicing
pub mod docs;
/// Shared formatting utilities
pub mod fmt;
/// Git lookups for prior-commit snapshot content
pub mod git;
/// Infrastructure traits for filesystem and command execution
pub mod infra;
/// Gas comparison, severity classification and report assembly
pub mod report;
/// Snapshot file reading
pub mod snapshot;
/// Typed table building and markdown rendering
pub mod table;
