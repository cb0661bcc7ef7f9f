//! Directory card linking to a user's profile page.

#[cfg(test)]
#[path = "user_card_test.rs"]
mod user_card_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::theme::Theme;
use crate::util::dark_mode::themed_class;

/// Card showing a user's initial, name, email, and phone.
#[component]
pub fn UserCard(user: User, theme: Signal<Theme>) -> impl IntoView {
    let href = profile_href(user.id);
    let initial = user.initial();

    view! {
        <div class=move || themed_class("user-card", theme.get())>
            <div class="user-card__avatar" aria-hidden="true">{initial}</div>
            <div class="user-card__body">
                <h2 class="user-card__name">{user.name}</h2>
                <p class="user-card__email">{user.email}</p>
                <p class="user-card__phone">{user.phone}</p>
            </div>
            <a class="btn user-card__link" href=href>"View Profile"</a>
        </div>
    }
}

/// Route path of the profile page for `id`.
pub fn profile_href(id: u64) -> String {
    format!("/user/{id}")
}
