//! # Users & Agencies Directory
//!
//! The other two persisted entity types: public servants and their
//! agencies, each one JSON array file under the data directory. The
//! directory backs identity resolution and listing scopes; it is read
//! wholesale at startup and rewritten wholesale on save.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::file::{load_array, save_array};

/// Name of the users file inside the data directory.
pub const USERS_FILE: &str = "users.json";
/// Name of the agencies file inside the data directory.
pub const AGENCIES_FILE: &str = "agencies.json";

/// Role a user holds in the compliance process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Gift Disclosure Administrator: reviews declarations, sees the
    /// whole register.
    Administrator,
    /// Declares gifts; sees own records only.
    PublicServant,
}

/// A registered public servant or administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
    pub role: UserRole,
}

/// A government agency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency {
    pub id: String,
    pub name: String,
}

/// In-memory view of the users and agencies files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    pub users: Vec<User>,
    pub agencies: Vec<Agency>,
}

impl Directory {
    /// Load both files from `data_dir`; missing files read as empty.
    pub fn load(data_dir: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            users: load_array(&data_dir.join(USERS_FILE))?,
            agencies: load_array(&data_dir.join(AGENCIES_FILE))?,
        })
    }

    /// Rewrite both files under `data_dir`, pretty-printed.
    pub fn save(&self, data_dir: &Path) -> Result<(), StoreError> {
        save_array(data_dir, &data_dir.join(USERS_FILE), &self.users)?;
        save_array(data_dir, &data_dir.join(AGENCIES_FILE), &self.agencies)?;
        Ok(())
    }

    /// Look up a user by id.
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Look up an agency by id.
    pub fn agency(&self, id: &str) -> Option<&Agency> {
        self.agencies.iter().find(|a| a.id == id)
    }
}
