//! # bgts-core — Foundational Types for the Gift Transparency Service
//!
//! This crate is the bedrock of the Gift Transparency Service. It defines
//! the domain types for gift declarations and the two fixed rule tables
//! the compliance process is built on: the penalty multiplier table and
//! the prohibited-source classification table.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`GiftId`] and
//!    [`Reference`] are newtypes with validated constructors. No bare
//!    strings for identifiers.
//!
//! 2. **Total rule functions.** [`penalty::assess`] and
//!    [`source::classify`] are pure and total: every input, however
//!    malformed, resolves deterministically. Unknown relationship
//!    categories always resolve to *review required* — never silently to
//!    allowed or prohibited.
//!
//! 3. **Validation reports field names.** [`GiftDeclarationInput::validate`]
//!    names every offending field so callers can correct their input.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `bgts-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and implement
//!   `Serialize`/`Deserialize` where they cross a wire or a file.

pub mod declaration;
pub mod error;
pub mod penalty;
pub mod reference;
pub mod source;

// Re-export primary types for ergonomic imports.
pub use declaration::{
    GiftDeclaration, GiftDeclarationInput, GiftId, GiftStatus, Giver, ReviewDecision,
};
pub use error::ValidationError;
pub use penalty::{assess, PenaltyAssessment};
pub use reference::{Reference, ReferenceError, REFERENCE_PREFIX};
pub use source::{classify, SourceClassification, SourceVerdict};
