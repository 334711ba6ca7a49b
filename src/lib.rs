//! # go-test-inputs
//!
//! Turns the raw, string-valued inputs of a Go test GitHub Action into a
//! single typed [`Inputs`](config::Inputs) value.
//!
//! This library resolves defaults, filters enumerated option lists, and folds
//! the deprecated `omit*` boolean inputs into the `omit` set. Running the
//! tests and rendering the report are left to the consumers of the result.

pub mod cli;
pub mod config;
pub mod output;
pub mod provider;
