//! # bgts-cli — CLI Tool for the Gift Transparency Service
//!
//! Provides the `bgts` command-line interface.
//!
//! ## Subcommands
//!
//! - `bgts serve` — Run the HTTP service over an in-memory or
//!   file-backed register.
//! - `bgts penalty` — Evaluate the fine multiplier table offline.
//! - `bgts source` — Classify a relationship against the rule table.
//! - `bgts seed` — Write demo data files into a data directory.
//! - `bgts list` — Print the declarations held in a data directory.

pub mod data;
pub mod rules;
pub mod serve;
