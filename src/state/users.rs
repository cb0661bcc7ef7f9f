//! User-list state and the client-side name filter.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::error::FetchError;
use crate::net::types::User;

pub const LIST_FAILED_MESSAGE: &str = "Failed to load users";

/// Directory list page state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsersState {
    pub items: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
    pub query: String,
}

impl Default for UsersState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None, query: String::new() }
    }
}

impl UsersState {
    /// Apply the result of the list fetch.
    pub fn finish_load(&mut self, result: Result<Vec<User>, FetchError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                log::warn!("user list fetch failed: {e}");
                self.error = Some(LIST_FAILED_MESSAGE.to_owned());
            }
        }
    }

    /// Whether to show the "no match" hint: loaded fine, nothing visible.
    pub fn shows_no_match(&self) -> bool {
        !self.loading && self.error.is_none() && filter_users(&self.items, &self.query).is_empty()
    }

    /// Users matching the current query, in fetch order.
    pub fn visible(&self) -> Vec<User> {
        filter_users(&self.items, &self.query).into_iter().cloned().collect()
    }
}

/// Users whose name contains `query`, ignoring case. Input order is kept.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|user| user.name.to_lowercase().contains(&needle))
        .collect()
}
