//! Error taxonomy for network fetches and local persistence.
//!
//! ERROR HANDLING
//! ==============
//! None of these errors escape a page. Fetch errors become inline page
//! state; storage errors are logged and degrade to in-memory behavior.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a remote user fetch.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("user not found: {0}")]
    NotFound(String),
}

impl FetchError {
    /// Message shown inline on the page that started the fetch.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => "Failed to load user data",
            Self::NotFound(_) => "User not found",
        }
    }
}

/// Failure of the browser key-value store.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage unavailable: {0}")]
    Unavailable(String),
    #[error("malformed override at {key}: {reason}")]
    MalformedOverride { key: String, reason: String },
}
