//! # File-Backed Store
//!
//! Durable declaration storage as a pretty-printed JSON array in
//! `gifts.json` under a data directory, alongside the directory files
//! (`users.json`, `agencies.json`). Every operation reads, modifies, and
//! rewrites the whole file.
//!
//! A per-store mutex serializes read-modify-write cycles within the
//! process. Writers in other processes can still race on the same files;
//! this backend makes no cross-process guarantee.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use bgts_core::{GiftDeclaration, GiftDeclarationInput, GiftId, ReviewDecision};

use crate::error::StoreError;
use crate::scope::CallerScope;
use crate::{apply_review, build_submission, GiftStore, Submitter};

/// Name of the declaration register file inside the data directory.
pub const GIFTS_FILE: &str = "gifts.json";

/// Declaration storage backed by a JSON file.
#[derive(Debug)]
pub struct FileStore {
    data_dir: PathBuf,
    /// Serializes read-modify-write cycles; uniqueness of allocated
    /// references depends on holding this across a full cycle.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open a store rooted at `data_dir`. The directory and register
    /// file are created lazily on first write; a missing file reads as
    /// an empty register.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the register file.
    pub fn gifts_path(&self) -> PathBuf {
        self.data_dir.join(GIFTS_FILE)
    }

    fn load(&self) -> Result<Vec<GiftDeclaration>, StoreError> {
        load_array(&self.gifts_path())
    }

    fn save(&self, gifts: &[GiftDeclaration]) -> Result<(), StoreError> {
        save_array(&self.data_dir, &self.gifts_path(), gifts)
    }
}

/// Read a JSON array file, treating a missing file as empty.
pub(crate) fn load_array<T: serde::de::DeserializeOwned>(
    path: &Path,
) -> Result<Vec<T>, StoreError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

/// Rewrite a JSON array file wholesale, pretty-printed. `std::fs::write`
/// opens, writes, and closes the handle on every exit path, so a failed
/// serialization never leaves a truncated file behind.
pub(crate) fn save_array<T: serde::Serialize>(
    dir: &Path,
    path: &Path,
    items: &[T],
) -> Result<(), StoreError> {
    std::fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(items)?;
    std::fs::write(path, json)?;
    Ok(())
}

impl GiftStore for FileStore {
    fn submit(
        &self,
        input: GiftDeclarationInput,
        submitter: &Submitter,
    ) -> Result<GiftDeclaration, StoreError> {
        let _guard = self.write_lock.lock();
        let mut gifts = self.load()?;
        let record = build_submission(&gifts, input, submitter, Utc::now())?;
        gifts.push(record.clone());
        self.save(&gifts)?;
        tracing::info!(reference = %record.reference, path = %self.gifts_path().display(),
            "gift declaration persisted");
        Ok(record)
    }

    fn list(&self, scope: &CallerScope) -> Result<Vec<GiftDeclaration>, StoreError> {
        let _guard = self.write_lock.lock();
        Ok(self
            .load()?
            .into_iter()
            .filter(|g| scope.permits(g))
            .collect())
    }

    fn get_by_id(&self, id: &GiftId) -> Result<GiftDeclaration, StoreError> {
        let _guard = self.write_lock.lock();
        self.load()?
            .into_iter()
            .find(|g| g.id == *id)
            .ok_or(StoreError::NotFound(*id))
    }

    fn review(
        &self,
        id: &GiftId,
        decision: ReviewDecision,
        comments: Option<String>,
        reviewed_at: DateTime<Utc>,
    ) -> Result<GiftDeclaration, StoreError> {
        let _guard = self.write_lock.lock();
        let mut gifts = self.load()?;
        let record = apply_review(&mut gifts, id, decision, comments, reviewed_at)?;
        self.save(&gifts)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bgts_core::{GiftStatus, Giver};

    fn input() -> GiftDeclarationInput {
        GiftDeclarationInput {
            description: "Traditional Thanka painting".into(),
            value: Some(5000.0),
            receipt_date: None,
            gift_type: Some("artwork".into()),
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
    fn missing_file_reads_as_empty_register() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path());
        assert!(store.list(&CallerScope::Unrestricted).unwrap().is_empty());
    }

    #[test]
    fn submit_creates_pretty_printed_register() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("data"));
        let record = store.submit(input(), &servant()).unwrap();

        let content = std::fs::read_to_string(store.gifts_path()).unwrap();
        assert!(content.contains('\n'), "register should be pretty-printed");
        assert!(content.contains(record.reference.as_str()));

        let listed = store.list(&CallerScope::Unrestricted).unwrap();
        assert_eq!(listed, vec![record]);
    }

    #[test]
    fn register_survives_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let record = {
            let store = FileStore::open(dir.path());
            store.submit(input(), &servant()).unwrap()
        };
        let reopened = FileStore::open(dir.path());
        assert_eq!(reopened.get_by_id(&record.id).unwrap(), record);
    }

    #[test]
    fn review_rewrites_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path());
        let record = store.submit(input(), &servant()).unwrap();
        store
            .review(&record.id, ReviewDecision::Approved, None, Utc::now())
            .unwrap();

        let reopened = FileStore::open(dir.path());
        assert_eq!(
            reopened.get_by_id(&record.id).unwrap().status,
            GiftStatus::Approved
        );
    }

    #[test]
    fn corrupt_register_surfaces_as_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(GIFTS_FILE), b"not valid json").unwrap();
        let store = FileStore::open(dir.path());
        let err = store.list(&CallerScope::Unrestricted).unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn failed_validation_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path());
        let mut bad = input();
        bad.value = None;
        assert!(store.submit(bad, &servant()).is_err());
        assert!(!store.gifts_path().exists());
    }

    #[test]
    fn scoped_list_filters_on_disk_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path());
        store.submit(input(), &servant()).unwrap();
        store
            .submit(
                input(),
                &Submitter {
                    user_id: "karma.wangdi".into(),
                    agency: Some("ministry-of-health".into()),
                },
            )
            .unwrap();

        let own = store
            .list(&CallerScope::Owner("karma.wangdi".into()))
            .unwrap();
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].declared_by, "karma.wangdi");
    }
}
