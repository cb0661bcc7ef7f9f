//! Directory page listing users with a client-side name filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It fetches the user list once per mount and
//! re-filters on every keystroke without further network traffic.

use leptos::prelude::*;

use crate::app::ThemeHandle;
use crate::components::user_card::UserCard;
use crate::net::api::UserApi;
use crate::state::users::UsersState;
use crate::util::dark_mode::themed_class;

#[component]
pub fn UserListPage() -> impl IntoView {
    let theme = expect_context::<ThemeHandle>();
    let api = expect_context::<UserApi>();
    let users = RwSignal::new(UsersState::default());

    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let result = api.list_users().await;
            if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                users.update(|s| s.finish_load(result));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = api;
    }

    let card_theme = Signal::derive(move || theme.get());
    let on_filter = move |ev: leptos::ev::Event| {
        let query = event_target_value(&ev);
        users.update(|s| s.query = query);
    };

    view! {
        <div class=move || themed_class("user-list", theme.get())>
            <h1 class="user-list__title">"User Directory"</h1>

            <label for="filter" class="user-list__label">"Filter by name:"</label>
            <input
                id="filter"
                class="user-list__filter"
                type="text"
                placeholder="Type to filter..."
                prop:value=move || users.with(|s| s.query.clone())
                on:input=on_filter
            />

            <Show when=move || users.with(|s| s.error.is_some())>
                <p class="user-list__error">{move || users.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show
                when=move || !users.with(|s| s.loading)
                fallback=move || view! { <p class="user-list__loading">"Loading users..."</p> }
            >
                <div class="user-list__grid">
                    {move || {
                        users
                            .with(UsersState::visible)
                            .into_iter()
                            .map(|user| view! { <UserCard user=user theme=card_theme/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <Show when=move || users.with(UsersState::shows_no_match)>
                    <p class="user-list__empty">"No users found matching your filter."</p>
                </Show>
            </Show>
        </div>
    }
}
