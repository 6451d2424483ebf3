//! OPI Storage CLI
//!
//! Command-line exerciser for the OPI storage services: per-resource
//! operations and the full backend lifecycle run.

pub mod commands;
pub mod config;
pub mod output;
