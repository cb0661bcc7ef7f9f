//! REST client for the remote user directory.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: calls fail with `FetchError::Network` since the endpoints
//! are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call is a single round trip with no retry and no cache. A 404 or an
//! empty JSON object maps to `NotFound`; anything else that goes wrong is
//! `Network`. Callers turn both into page state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
use crate::config::AppConfig;
use crate::error::FetchError;

/// Handle to the `/users` endpoints under a base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserApi {
    base_url: String,
}

impl UserApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_endpoint(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_endpoint(&self, id: &str) -> String {
        format!("{}/users/{id}", self.base_url)
    }

    /// Fetch every user, in upstream order.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Network` on transport failure, a non-success
    /// status, or an undecodable body.
    pub async fn list_users(&self) -> Result<Vec<User>, FetchError> {
        let url = self.users_endpoint();
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(&url, resp.status()));
            }
            let users = resp
                .json::<Vec<User>>()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            log::debug!("fetched {} users from {url}", users.len());
            Ok(users)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable(&url))
        }
    }

    /// Fetch a single user by id.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::NotFound` when the endpoint has no such user and
    /// `FetchError::Network` for any other failure.
    pub async fn get_user(&self, id: &str) -> Result<User, FetchError> {
        let url = self.user_endpoint(id);
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(&url, resp.status()));
            }
            let value = resp
                .json::<serde_json::Value>()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            user_from_value(id, value)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable(&url))
        }
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable(url: &str) -> FetchError {
    FetchError::Network(format!("{url}: not available outside the browser"))
}

#[cfg(any(test, feature = "csr"))]
fn status_error(url: &str, status: u16) -> FetchError {
    if status == 404 {
        FetchError::NotFound(url.to_owned())
    } else {
        FetchError::Network(format!("{url} returned {status}"))
    }
}

/// Interpret a detail response body. Upstream answers unknown ids with `{}`.
#[cfg(any(test, feature = "csr"))]
fn user_from_value(id: &str, value: serde_json::Value) -> Result<User, FetchError> {
    if value.is_null() || value.as_object().is_some_and(serde_json::Map::is_empty) {
        return Err(FetchError::NotFound(id.to_owned()));
    }
    serde_json::from_value(value).map_err(|e| FetchError::Network(format!("malformed user {id}: {e}")))
}
