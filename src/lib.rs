//! Lintrep core library.
//!
//! This crate exposes programmatic APIs for running a lint pass over a
//! repository and reporting on it: rule evaluation, fixable-only filtering,
//! multi-format report writing, and the critical-violation gate.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `lint`: The `LintService` seam and the TOML rule-set scanner.
//! - `patch`: Fix computation/annotation after lint (`PatchAction`).
//! - `report`: Report writers (xml/html/text) and location resolution.
//! - `task`: The report task orchestrating one run end to end.
//! - `models`: Violations, fixes, results, and the rule set schema.
//! - `output`: Human/JSON console printers.
//! - `utils`: Supporting helpers.
//!
//! Note: All documentation comments are written in English by convention.
pub mod cli;
pub mod config;
pub mod lint;
pub mod models;
pub mod output;
pub mod patch;
pub mod report;
pub mod task;
pub mod utils;
