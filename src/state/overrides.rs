//! Locally persisted profile edits layered over fetched users.
//!
//! DESIGN
//! ======
//! An `OverrideRecord` is a partial user: only fields that are present
//! replace the fetched value. Records are stored per user under
//! `user-{id}-edits` and replaced wholesale on every save.
//!
//! ERROR HANDLING
//! ==============
//! Unreadable or malformed records read as "no override". Write failures are
//! returned so the caller can log them; the edit stays session-only.

#[cfg(test)]
#[path = "overrides_test.rs"]
mod overrides_test;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::net::types::User;
use crate::util::storage::{self, SharedStore};

/// Partial set of user fields that take precedence over fetched data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyOverride>,
}

/// Nested company override.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl OverrideRecord {
    /// Snapshot every editable field of `user`.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: Some(user.name.clone()),
            email: Some(user.email.clone()),
            phone: Some(user.phone.clone()),
            website: Some(user.website.clone()),
            company: Some(CompanyOverride { name: Some(user.company.name.clone()) }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.website.is_none()
            && self.company.as_ref().is_none_or(|c| c.name.is_none())
    }
}

/// Overlay `record` onto `user`. Absent fields keep the fetched value.
pub fn merge_override(user: &User, record: Option<&OverrideRecord>) -> User {
    let mut merged = user.clone();
    let Some(record) = record else {
        return merged;
    };
    if let Some(name) = &record.name {
        merged.name.clone_from(name);
    }
    if let Some(email) = &record.email {
        merged.email.clone_from(email);
    }
    if let Some(phone) = &record.phone {
        merged.phone.clone_from(phone);
    }
    if let Some(website) = &record.website {
        merged.website.clone_from(website);
    }
    if let Some(company_name) = record.company.as_ref().and_then(|c| c.name.as_ref()) {
        merged.company.name.clone_from(company_name);
    }
    merged
}

/// Storage key for the override of user `id`.
pub fn override_key(id: &str) -> String {
    format!("user-{id}-edits")
}

/// Per-user override persistence.
#[derive(Clone)]
pub struct OverrideStore {
    storage: SharedStore,
}

impl std::fmt::Debug for OverrideStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverrideStore").finish_non_exhaustive()
    }
}

impl OverrideStore {
    pub fn new(storage: SharedStore) -> Self {
        Self { storage }
    }

    /// Read the stored override for `id`, treating unreadable data as absent.
    pub fn get_override(&self, id: &str) -> Option<OverrideRecord> {
        match storage::load_json::<OverrideRecord>(self.storage.as_ref(), &override_key(id)) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("ignoring stored override for user {id}: {e}");
                None
            }
        }
    }

    /// Replace the stored override for `id` with `record`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the record cannot be written.
    pub fn set_override(&self, id: &str, record: &OverrideRecord) -> Result<(), StorageError> {
        storage::save_json(self.storage.as_ref(), &override_key(id), record)
    }

    /// Remove any stored override for `id`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the store cannot be written.
    pub fn clear_override(&self, id: &str) -> Result<(), StorageError> {
        self.storage.remove_item(&override_key(id))
    }

    /// Fetched `user` with the stored override for `id` applied.
    pub fn merged(&self, id: &str, user: &User) -> User {
        merge_override(user, self.get_override(id).as_ref())
    }
}
