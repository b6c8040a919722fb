//! # In-Memory Store
//!
//! Process-lifetime declaration storage. The default backend for tests
//! and development serving.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use bgts_core::{GiftDeclaration, GiftDeclarationInput, GiftId, ReviewDecision};

use crate::error::StoreError;
use crate::scope::CallerScope;
use crate::{apply_review, build_submission, GiftStore, Submitter};

/// Declaration storage backed by a `RwLock<Vec<_>>` in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    gifts: RwLock<Vec<GiftDeclaration>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with existing declarations.
    pub fn with_declarations(gifts: Vec<GiftDeclaration>) -> Self {
        Self {
            gifts: RwLock::new(gifts),
        }
    }

    /// Number of stored declarations.
    pub fn len(&self) -> usize {
        self.gifts.read().len()
    }

    /// Whether the register is empty.
    pub fn is_empty(&self) -> bool {
        self.gifts.read().is_empty()
    }
}

impl GiftStore for MemoryStore {
    fn submit(
        &self,
        input: GiftDeclarationInput,
        submitter: &Submitter,
    ) -> Result<GiftDeclaration, StoreError> {
        // The write lock is held across allocation and insertion so two
        // concurrent submissions cannot draw the same reference.
        let mut gifts = self.gifts.write();
        let record = build_submission(&gifts, input, submitter, Utc::now())?;
        gifts.push(record.clone());
        tracing::info!(reference = %record.reference, declared_by = %record.declared_by,
            "gift declaration stored");
        Ok(record)
    }

    fn list(&self, scope: &CallerScope) -> Result<Vec<GiftDeclaration>, StoreError> {
        Ok(self
            .gifts
            .read()
            .iter()
            .filter(|g| scope.permits(g))
            .cloned()
            .collect())
    }

    fn get_by_id(&self, id: &GiftId) -> Result<GiftDeclaration, StoreError> {
        self.gifts
            .read()
            .iter()
            .find(|g| g.id == *id)
            .cloned()
            .ok_or(StoreError::NotFound(*id))
    }

    fn review(
        &self,
        id: &GiftId,
        decision: ReviewDecision,
        comments: Option<String>,
        reviewed_at: DateTime<Utc>,
    ) -> Result<GiftDeclaration, StoreError> {
        let mut gifts = self.gifts.write();
        apply_review(&mut gifts, id, decision, comments, reviewed_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bgts_core::{GiftStatus, Giver};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn input(description: &str) -> GiftDeclarationInput {
        GiftDeclarationInput {
            description: description.into(),
            value: Some(5000.0),
            receipt_date: None,
            gift_type: None,
            giver: Some(Giver {
                name: "Local Artist".into(),
                designation: None,
                agency: None,
                address: None,
            }),
            relationship: "personal-friend".into(),
            circumstances: None,
            disposition: None,
            is_prohibited_source: false,
        }
    }

    fn servant() -> Submitter {
        Submitter {
            user_id: "tashi.sherpa".into(),
            agency: Some("ministry-of-finance".into()),
        }
    }

    #[test]
    fn submit_stores_and_returns_pending_record() {
        let store = MemoryStore::new();
        let record = store.submit(input("Thanka painting"), &servant()).unwrap();
        assert_eq!(record.status, GiftStatus::Pending);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_by_id(&record.id).unwrap(), record);
    }

    #[test]
    fn failed_validation_stores_nothing() {
        let store = MemoryStore::new();
        let mut bad = input("x");
        bad.relationship = String::new();
        assert!(store.submit(bad, &servant()).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = MemoryStore::new();
        for name in ["first", "second", "third"] {
            store.submit(input(name), &servant()).unwrap();
        }
        let all = store.list(&CallerScope::Unrestricted).unwrap();
        let names: Vec<&str> = all.iter().map(|g| g.description.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn scoped_list_filters_foreign_records() {
        let store = MemoryStore::new();
        store.submit(input("mine"), &servant()).unwrap();
        store
            .submit(
                input("theirs"),
                &Submitter {
                    user_id: "karma.wangdi".into(),
                    agency: Some("ministry-of-health".into()),
                },
            )
            .unwrap();

        let own = store
            .list(&CallerScope::Owner("tashi.sherpa".into()))
            .unwrap();
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].description, "mine");

        let agency = store
            .list(&CallerScope::Agency("ministry-of-health".into()))
            .unwrap();
        assert_eq!(agency.len(), 1);
        assert_eq!(agency[0].description, "theirs");
    }

    #[test]
    fn get_by_id_reports_missing_records() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get_by_id(&GiftId::new()),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn review_transitions_pending_to_decision() {
        let store = MemoryStore::new();
        let record = store.submit(input("painting"), &servant()).unwrap();
        let reviewed = store
            .review(
                &record.id,
                ReviewDecision::Returned,
                Some("prohibited source".into()),
                Utc::now(),
            )
            .unwrap();
        assert_eq!(reviewed.status, GiftStatus::Returned);
        assert_eq!(reviewed.review_comments.as_deref(), Some("prohibited source"));
        // The stored record was updated, not a copy.
        assert_eq!(
            store.get_by_id(&record.id).unwrap().status,
            GiftStatus::Returned
        );
    }

    #[test]
    fn concurrent_submissions_get_unique_references() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                let who = Submitter {
                    user_id: format!("servant-{i}"),
                    agency: None,
                };
                (0..25)
                    .map(|n| {
                        store
                            .submit(input(&format!("gift-{i}-{n}")), &who)
                            .unwrap()
                            .reference
                    })
                    .collect::<Vec<_>>()
            }));
        }
        let mut seen = HashSet::new();
        for handle in handles {
            for reference in handle.join().unwrap() {
                assert!(seen.insert(reference.as_str().to_string()), "duplicate reference");
            }
        }
        assert_eq!(seen.len(), 200);
    }
}
