//! # bgts-store — Gift Declaration Record Store
//!
//! Append-only storage for gift declarations behind the [`GiftStore`]
//! trait, so the HTTP layer and tests can swap backends without touching
//! callers:
//!
//! - [`MemoryStore`] — process-lifetime storage in a `parking_lot` lock.
//! - [`FileStore`] — one pretty-printed JSON array per entity type under
//!   a data directory, rewritten wholesale on each mutation.
//!
//! Also home to the [`Directory`] of users and agencies (the other two
//! persisted entity types), the [`PenaltyRegister`], and the
//! [`CallerScope`] visibility rules.
//!
//! ## Concurrency
//!
//! Every store serializes its operations behind a process-local lock, so
//! two concurrent submissions never observe the same set of issued
//! references. The file backend offers no cross-process coordination:
//! concurrent writers from separate processes can race on the JSON files.
//! Known, accepted limitation.

pub mod demo;
pub mod directory;
pub mod error;
pub mod file;
pub mod memory;
pub mod penalties;
pub mod scope;

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;

use bgts_core::reference::SUFFIX_RANGE;
use bgts_core::{GiftDeclaration, GiftDeclarationInput, GiftId, Reference, ReviewDecision};

pub use directory::{Agency, Directory, User, UserRole};
pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use penalties::{PenaltyRecord, PenaltyRegister, PenaltyStatus};
pub use scope::CallerScope;

/// Identity of the public servant submitting a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitter {
    pub user_id: String,
    pub agency: Option<String>,
}

/// Abstraction over gift declaration storage.
///
/// Implementations validate input, allocate a unique reference, and
/// persist records in insertion order. All methods are synchronous; the
/// file backend performs blocking I/O bounded by the size of the register.
pub trait GiftStore: Send + Sync {
    /// Validate and store a new declaration. Returns the stored record
    /// with its generated id, reference, and timestamps. Nothing is
    /// stored when validation fails.
    fn submit(
        &self,
        input: GiftDeclarationInput,
        submitter: &Submitter,
    ) -> Result<GiftDeclaration, StoreError>;

    /// All declarations visible to `scope`, oldest first.
    fn list(&self, scope: &CallerScope) -> Result<Vec<GiftDeclaration>, StoreError>;

    /// Look up a declaration by id.
    fn get_by_id(&self, id: &GiftId) -> Result<GiftDeclaration, StoreError>;

    /// Apply a review decision to a pending declaration.
    fn review(
        &self,
        id: &GiftId,
        decision: ReviewDecision,
        comments: Option<String>,
        reviewed_at: DateTime<Utc>,
    ) -> Result<GiftDeclaration, StoreError>;
}

/// Upper bound on random suffix draws before reference allocation gives
/// up. The suffix space holds 9000 codes per year; hitting this bound
/// means the year's space is effectively exhausted.
const MAX_REFERENCE_ATTEMPTS: usize = 20_000;

/// Allocate a reference unique among `existing` for the year of `now`.
///
/// Draws random four-digit suffixes and re-draws on collision, matching
/// the reference format of the original register. Callers hold their
/// store lock across allocation and insertion, which is what makes the
/// uniqueness guarantee hold under concurrent submissions.
pub(crate) fn allocate_reference(
    existing: &[GiftDeclaration],
    now: DateTime<Utc>,
) -> Result<Reference, StoreError> {
    let year = now.year();
    let taken: HashSet<&str> = existing.iter().map(|g| g.reference.as_str()).collect();

    let mut rng = rand::thread_rng();
    for _ in 0..MAX_REFERENCE_ATTEMPTS {
        let suffix = rng.gen_range(SUFFIX_RANGE);
        if let Ok(candidate) = Reference::compose(year, suffix) {
            if !taken.contains(candidate.as_str()) {
                return Ok(candidate);
            }
        }
    }
    Err(StoreError::ReferencesExhausted { year })
}

/// Shared submit path: validate, allocate a reference against the current
/// register contents, and build the pending record. The caller appends
/// the returned record while still holding its lock.
pub(crate) fn build_submission(
    existing: &[GiftDeclaration],
    input: GiftDeclarationInput,
    submitter: &Submitter,
    now: DateTime<Utc>,
) -> Result<GiftDeclaration, StoreError> {
    input.validate()?;
    let reference = allocate_reference(existing, now)?;
    Ok(GiftDeclaration::from_input(
        input,
        reference,
        submitter.user_id.clone(),
        submitter.agency.clone(),
        now,
    ))
}

/// Shared review path: locate the record, check it is still pending, and
/// apply the decision in place.
pub(crate) fn apply_review(
    gifts: &mut [GiftDeclaration],
    id: &GiftId,
    decision: ReviewDecision,
    comments: Option<String>,
    reviewed_at: DateTime<Utc>,
) -> Result<GiftDeclaration, StoreError> {
    let record = gifts
        .iter_mut()
        .find(|g| g.id == *id)
        .ok_or(StoreError::NotFound(*id))?;

    if !record.status.reviewable() {
        return Err(StoreError::AlreadyReviewed {
            id: *id,
            status: record.status,
        });
    }

    record.status = decision.target_status();
    record.reviewed_at = Some(reviewed_at);
    record.review_comments = comments;
    Ok(record.clone())
}
