//! # Route Modules
//!
//! One module per API surface:
//!
//! - [`penalty`] — `POST /v1/penalty`, the fine calculator.
//! - [`source`] — `POST /v1/source-check`, the prohibited-source checker.
//! - [`gifts`] — `/v1/gifts/*`, declaration submission, listing, review.
//! - [`penalties`] — `GET /v1/penalties`, the register of levied fines.

pub mod gifts;
pub mod penalties;
pub mod penalty;
pub mod source;
