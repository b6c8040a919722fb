//! # Rule Table Subcommands
//!
//! Offline evaluation of the two fixed rule tables: the penalty
//! multiplier table and the prohibited-source classification table.
//! Useful for administrators answering questions without a running
//! service.

use anyhow::Result;
use clap::Args;

use bgts_core::{penalty, source};

/// Arguments for `bgts penalty`.
#[derive(Args, Debug)]
pub struct PenaltyArgs {
    /// Declared gift value in ngultrum.
    #[arg(long)]
    pub value: f64,

    /// Breach occurrence count (1 = first breach).
    #[arg(long, default_value_t = 1)]
    pub breach: i64,

    /// Output machine-readable JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Compute and print a penalty assessment.
pub fn run_penalty(args: &PenaltyArgs) -> Result<u8> {
    let assessment = penalty::assess(args.value, args.breach);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        println!("Gift value:   {}", penalty::format_ngultrum(assessment.value));
        println!("Breach:       #{}", assessment.breach_number);
        println!("Multiplier:   x{}", assessment.multiplier);
        println!("Fine:         {}", assessment.formatted);
    }
    Ok(0)
}

/// Arguments for `bgts source`.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Relationship category (e.g. "seeks-action", "immediate-relative").
    #[arg(long)]
    pub relationship: String,

    /// Output machine-readable JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Classify a relationship and print the verdict with its citation.
pub fn run_source(args: &SourceArgs) -> Result<u8> {
    let classification = source::classify(&args.relationship);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
    } else {
        println!("{}", classification.title);
        println!("{}", classification.description);
        println!("{}", classification.rule_citation);
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penalty_command_runs() {
        let args = PenaltyArgs {
            value: 1000.0,
            breach: 1,
            json: false,
        };
        assert_eq!(run_penalty(&args).unwrap(), 0);
    }

    #[test]
    fn penalty_command_emits_json() {
        let args = PenaltyArgs {
            value: 7000.0,
            breach: 1,
            json: true,
        };
        assert_eq!(run_penalty(&args).unwrap(), 0);
    }

    #[test]
    fn source_command_runs_for_unknown_categories() {
        let args = SourceArgs {
            relationship: "unknown-category-xyz".into(),
            json: true,
        };
        assert_eq!(run_source(&args).unwrap(), 0);
    }
}
