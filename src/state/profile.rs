//! Edit session for a single user's profile page.
//!
//! DESIGN
//! ======
//! The session is a plain state machine (`Viewing` / `Editing`) driven by
//! page events and async completions. The displayed user and the draft are
//! separate owned copies; field edits only ever touch the draft.
//!
//! Async results are matched against a generation counter. A `LoadTicket`
//! from an older generation (a previous route id, or a page that has been
//! deactivated) is ignored when it completes.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::error::FetchError;
use crate::net::types::User;
use crate::state::overrides::{OverrideRecord, OverrideStore};

pub const SAVE_MESSAGE: &str = "Profile updated successfully!";
pub const RESET_MESSAGE: &str = "Profile reset to original data!";
pub const RESET_FAILED_MESSAGE: &str = "Failed to reload original profile data";

/// Whether the profile is shown read-only or as an edit form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileMode {
    #[default]
    Viewing,
    Editing,
}

/// Progress of the initial fetch for the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    NotFound,
    Failed,
}

/// Profile fields the edit form exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditableField {
    Name,
    Email,
    Phone,
    Website,
    CompanyName,
}

impl EditableField {
    pub const ALL: [Self; 5] = [Self::Name, Self::Email, Self::Phone, Self::Website, Self::CompanyName];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Website => "Website",
            Self::CompanyName => "Company",
        }
    }

    /// HTML input type for the edit form.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Website => "url",
            Self::Name | Self::CompanyName => "text",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter full name",
            Self::Email => "Enter email address",
            Self::Phone => "Enter phone number",
            Self::Website => "Enter website URL",
            Self::CompanyName => "Enter company name",
        }
    }

    pub fn get(self, user: &User) -> &str {
        match self {
            Self::Name => &user.name,
            Self::Email => &user.email,
            Self::Phone => &user.phone,
            Self::Website => &user.website,
            Self::CompanyName => &user.company.name,
        }
    }

    fn set(self, user: &mut User, value: String) {
        match self {
            Self::Name => user.name = value,
            Self::Email => user.email = value,
            Self::Phone => user.phone = value,
            Self::Website => user.website = value,
            Self::CompanyName => user.company.name = value,
        }
    }
}

/// Proof that a fetch was started for a given generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Identifies the message a delayed clear refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageTicket(u64);

/// Profile page state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileSession {
    pub user_id: String,
    pub status: LoadStatus,
    pub mode: ProfileMode,
    /// Last committed user: fetched, merged with the override, then saved.
    pub user: Option<User>,
    /// Working copy edited by the form.
    pub draft: Option<User>,
    pub message: Option<String>,
    pub error: Option<String>,
    /// Reset confirmation is open.
    pub confirming_reset: bool,
    /// A reset re-fetch is in flight.
    pub resetting: bool,
    generation: u64,
    message_seq: u64,
}

impl ProfileSession {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), ..Self::default() }
    }

    pub fn is_editing(&self) -> bool {
        self.mode == ProfileMode::Editing
    }

    /// Value of `field` as the page should show it: the draft while
    /// editing, the committed user otherwise.
    pub fn field_value(&self, field: EditableField) -> String {
        let source = if self.is_editing() { self.draft.as_ref() } else { self.user.as_ref() };
        source.map(|u| field.get(u).to_owned()).unwrap_or_default()
    }

    /// Start (or restart) loading `user_id`. Any earlier ticket goes stale.
    pub fn begin_load(&mut self, user_id: &str) -> LoadTicket {
        let message_seq = self.message_seq;
        let generation = self.generation + 1;
        *self = Self { user_id: user_id.to_owned(), generation, message_seq, ..Self::default() };
        LoadTicket { generation }
    }

    /// Apply a fetch result started by `begin_load`.
    ///
    /// Returns `false` when the ticket is stale and the result was dropped.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<User, FetchError>, overrides: &OverrideStore) -> bool {
        if ticket.generation != self.generation {
            log::debug!("dropping stale profile load for user {}", self.user_id);
            return false;
        }
        match result {
            Ok(fetched) => {
                let merged = overrides.merged(&self.user_id, &fetched);
                self.draft = Some(merged.clone());
                self.user = Some(merged);
                self.status = LoadStatus::Loaded;
                self.error = None;
            }
            Err(e) => {
                log::warn!("profile load failed for user {}: {e}", self.user_id);
                self.status = match e {
                    FetchError::NotFound(_) => LoadStatus::NotFound,
                    FetchError::Network(_) => LoadStatus::Failed,
                };
                self.error = Some(e.user_message().to_owned());
            }
        }
        true
    }

    /// Invalidate outstanding tickets so late results are discarded.
    pub fn deactivate(&mut self) {
        self.generation += 1;
    }

    /// `Viewing -> Editing`, seeding the draft from the displayed user.
    pub fn begin_edit(&mut self) -> bool {
        if self.is_editing() || self.resetting {
            return false;
        }
        let Some(user) = self.user.clone() else {
            return false;
        };
        self.draft = Some(user);
        self.confirming_reset = false;
        self.mode = ProfileMode::Editing;
        true
    }

    /// Change one draft field. Ignored outside `Editing`.
    pub fn update_field(&mut self, field: EditableField, value: impl Into<String>) -> bool {
        if !self.is_editing() {
            return false;
        }
        let Some(draft) = self.draft.as_mut() else {
            return false;
        };
        field.set(draft, value.into());
        true
    }

    /// Commit the draft: persist it as the user's override, display it, and
    /// return to `Viewing`.
    ///
    /// Returns the ticket of the success message, or `None` outside `Editing`.
    pub fn save(&mut self, overrides: &OverrideStore) -> Option<MessageTicket> {
        if !self.is_editing() {
            return None;
        }
        let draft = self.draft.clone()?;
        let record = OverrideRecord::from_user(&draft);
        if let Err(e) = overrides.set_override(&self.user_id, &record) {
            log::warn!("edits for user {} kept for this session only: {e}", self.user_id);
        }
        self.user = Some(draft);
        self.mode = ProfileMode::Viewing;
        Some(self.set_message(SAVE_MESSAGE))
    }

    /// Discard the draft and return to `Viewing` without persisting.
    pub fn cancel(&mut self) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.draft.clone_from(&self.user);
        self.mode = ProfileMode::Viewing;
        true
    }

    /// Ask for reset confirmation. Only allowed while viewing a loaded user.
    pub fn request_reset(&mut self) -> bool {
        if self.is_editing() || self.resetting || self.user.is_none() {
            return false;
        }
        self.confirming_reset = true;
        true
    }

    /// Close the confirmation without changing anything else.
    pub fn decline_reset(&mut self) -> bool {
        std::mem::replace(&mut self.confirming_reset, false)
    }

    /// Confirmed reset: drop the stored override and hand back a ticket for
    /// re-fetching the canonical record.
    pub fn confirm_reset(&mut self, overrides: &OverrideStore) -> Option<LoadTicket> {
        if !self.confirming_reset || self.is_editing() {
            return None;
        }
        self.confirming_reset = false;
        if let Err(e) = overrides.clear_override(&self.user_id) {
            log::warn!("override for user {} not cleared: {e}", self.user_id);
        }
        self.resetting = true;
        self.generation += 1;
        Some(LoadTicket { generation: self.generation })
    }

    /// Apply the re-fetch started by `confirm_reset`.
    ///
    /// The cleared override stays cleared even if the fetch failed.
    pub fn finish_reset(&mut self, ticket: LoadTicket, result: Result<User, FetchError>) -> Option<MessageTicket> {
        if ticket.generation != self.generation {
            log::debug!("dropping stale profile reset for user {}", self.user_id);
            return None;
        }
        self.resetting = false;
        match result {
            Ok(fetched) => {
                self.draft = Some(fetched.clone());
                self.user = Some(fetched);
                self.error = None;
                Some(self.set_message(RESET_MESSAGE))
            }
            Err(e) => {
                log::warn!("reset re-fetch failed for user {}: {e}", self.user_id);
                self.error = Some(RESET_FAILED_MESSAGE.to_owned());
                None
            }
        }
    }

    /// Show a transient message and return the ticket that clears it.
    pub fn set_message(&mut self, text: impl Into<String>) -> MessageTicket {
        self.message_seq += 1;
        self.message = Some(text.into());
        MessageTicket(self.message_seq)
    }

    /// Clear the message if it is still the one `ticket` was issued for.
    pub fn clear_message(&mut self, ticket: MessageTicket) -> bool {
        if ticket.0 != self.message_seq || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }
}
