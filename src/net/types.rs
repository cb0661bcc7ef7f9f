//! Wire DTOs for the `/users` endpoints.
//!
//! DESIGN
//! ======
//! Only the fields the directory displays or edits are modeled. Upstream
//! sends more (address, geo, username); unknown fields are ignored and
//! missing strings default to empty so partial records still render.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A directory user as returned by `/users` and `/users/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable numeric identifier.
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Bare host name, without scheme (e.g. `hildegard.org`).
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub company: Company,
}

/// Employer details attached to a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "catchPhrase", skip_serializing_if = "String::is_empty")]
    pub catch_phrase: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bs: String,
}

impl User {
    /// First character of the name, upper-cased, for the avatar badge.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_owned())
    }

    /// Link target for the website field, or `None` when it is blank.
    pub fn website_href(&self) -> Option<String> {
        let site = self.website.trim();
        if site.is_empty() {
            None
        } else if site.starts_with("http://") || site.starts_with("https://") {
            Some(site.to_owned())
        } else {
            Some(format!("http://{site}"))
        }
    }

    /// Company name for display, with a placeholder when blank.
    pub fn company_label(&self) -> &str {
        if self.company.name.trim().is_empty() {
            "No company"
        } else {
            &self.company.name
        }
    }
}
