//! Profile page for a single user with local edit, save, and reset.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns one `ProfileSession`. It starts a fetch whenever the route
//! id changes, merges the stored override on arrival, and routes button
//! and input events into the session. Results that arrive after the id
//! changed or the page unmounted are dropped by the session's generation
//! check.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::{OverridesHandle, ThemeHandle};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::config::AppConfig;
use crate::net::api::UserApi;
use crate::state::profile::{EditableField, LoadStatus, MessageTicket, ProfileSession};
use crate::util::dark_mode::themed_class;

const RESET_PROMPT: &str =
    "Are you sure you want to reset all changes? This will restore the original profile data.";

#[component]
pub fn UserProfilePage() -> impl IntoView {
    let theme = expect_context::<ThemeHandle>();
    let api = expect_context::<UserApi>();
    let overrides = expect_context::<OverridesHandle>();
    let ttl = expect_context::<AppConfig>().message_ttl;
    let params = use_params_map();
    let session = RwSignal::new(ProfileSession::default());

    let schedule_clear = move |ticket: MessageTicket| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(ttl).await;
            session.try_update(|s| s.clear_message(ticket));
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ticket, ttl);
        }
    };

    // Fetch -> merge -> display, once per route id.
    let api_load = api.clone();
    Effect::new(move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        let Some(ticket) = session.try_update(|s| s.begin_load(&id)) else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let api = api_load.clone();
            leptos::task::spawn_local(async move {
                let result = api.get_user(&id).await;
                overrides.try_with_value(|store| session.try_update(|s| s.finish_load(ticket, result, store)));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api_load, ticket);
        }
    });
    on_cleanup(move || {
        session.try_update_untracked(ProfileSession::deactivate);
    });

    let on_edit = move |_| {
        session.update(|s| {
            s.begin_edit();
        });
    };
    let on_cancel = move |_| {
        session.update(|s| {
            s.cancel();
        });
    };
    let on_save = move |_| {
        let ticket = overrides
            .try_with_value(|store| session.try_update(|s| s.save(store)))
            .flatten()
            .flatten();
        if let Some(ticket) = ticket {
            schedule_clear(ticket);
        }
    };
    let on_reset = move |_| {
        session.update(|s| {
            s.request_reset();
        });
    };
    let on_reset_cancel = Callback::new(move |()| {
        session.update(|s| {
            s.decline_reset();
        });
    });
    let on_reset_confirm = Callback::new(move |()| {
        let ticket = overrides
            .try_with_value(|store| session.try_update(|s| s.confirm_reset(store)))
            .flatten()
            .flatten();
        let Some(ticket) = ticket else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let id = session.with_untracked(|s| s.user_id.clone());
            leptos::task::spawn_local(async move {
                let result = api.get_user(&id).await;
                if let Some(Some(message)) = session.try_update(|s| s.finish_reset(ticket, result)) {
                    schedule_clear(message);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, ticket);
        }
    });

    // Memoized so typing into the form does not rebuild the page body.
    let status = Memo::new(move |_| session.with(|s| s.status));
    let editing = Memo::new(move |_| session.with(ProfileSession::is_editing));

    view! {
        <div class=move || themed_class("profile-page", theme.get())>
            {move || match status.get() {
                LoadStatus::Loading => view! {
                    <p class="profile-page__loading">"Loading user profile..."</p>
                }
                .into_any(),
                LoadStatus::NotFound | LoadStatus::Failed => view! {
                    <p class="profile-page__not-found">
                        {move || session.with(|s| s.error.clone().unwrap_or_else(|| "User not found".to_owned()))}
                    </p>
                }
                .into_any(),
                LoadStatus::Loaded => view! {
                    <div class="profile-page__content">
                        <header class="profile-page__header">
                            <h1>"User Profile"</h1>
                            <div class="profile-page__actions">
                                <Show
                                    when=move || editing.get()
                                    fallback=move || view! {
                                        <button class="btn btn--primary" on:click=on_edit>"✏️ Edit Profile"</button>
                                        <button
                                            class="btn btn--muted"
                                            on:click=on_reset
                                            disabled=move || session.with(|s| s.resetting)
                                        >
                                            "🔄 Reset"
                                        </button>
                                    }
                                >
                                    <button class="btn btn--success" on:click=on_save>"💾 Save Changes"</button>
                                    <button class="btn btn--danger" on:click=on_cancel>"❌ Cancel"</button>
                                </Show>
                            </div>
                        </header>

                        <Show when=move || session.with(|s| s.message.is_some())>
                            <div class="profile-page__message">
                                {move || session.with(|s| s.message.clone().unwrap_or_default())}
                            </div>
                        </Show>
                        <Show when=move || session.with(|s| s.error.is_some())>
                            <div class="profile-page__error">
                                {move || session.with(|s| s.error.clone().unwrap_or_default())}
                            </div>
                        </Show>

                        <div class=move || themed_class("profile-card", theme.get())>
                            {EditableField::ALL
                                .into_iter()
                                .map(|field| view! { <ProfileField field=field session=session/> })
                                .collect::<Vec<_>>()}
                            <Show when=move || editing.get()>
                                <p class="profile-card__hint">
                                    "Editing mode: make your changes and click \"Save Changes\" to persist them. "
                                    "Your edits are saved locally and survive a page refresh."
                                </p>
                            </Show>
                        </div>
                    </div>
                }
                .into_any(),
            }}

            <Show when=move || session.with(|s| s.confirming_reset)>
                <ConfirmDialog
                    message=RESET_PROMPT
                    confirm_label="Reset"
                    on_confirm=on_reset_confirm
                    on_cancel=on_reset_cancel
                />
            </Show>
        </div>
    }
}

/// One labeled profile field: an input while editing, read-only otherwise.
#[component]
fn ProfileField(field: EditableField, session: RwSignal<ProfileSession>) -> impl IntoView {
    let editing = Memo::new(move |_| session.with(ProfileSession::is_editing));
    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        session.update(|s| {
            s.update_field(field, value);
        });
    };
    let wide = if field == EditableField::CompanyName { " profile-field--wide" } else { "" };

    view! {
        <div class=format!("profile-field{wide}")>
            <label class="profile-field__label">{field.label()}</label>
            <Show
                when=move || editing.get()
                fallback=move || view! { <ProfileFieldValue field=field session=session/> }
            >
                <input
                    class="profile-field__input"
                    type=field.input_type()
                    placeholder=field.placeholder()
                    prop:value=move || session.with(|s| s.field_value(field))
                    on:input=on_input
                />
            </Show>
        </div>
    }
}

/// Read-only rendering; the website becomes a link and blanks get placeholders.
#[component]
fn ProfileFieldValue(field: EditableField, session: RwSignal<ProfileSession>) -> impl IntoView {
    move || {
        let Some(user) = session.with(|s| s.user.clone()) else {
            return view! { <p class="profile-field__value"></p> }.into_any();
        };
        match field {
            EditableField::Website => match user.website_href() {
                Some(href) => view! {
                    <p class="profile-field__value">
                        <a href=href target="_blank" rel="noopener noreferrer">{user.website}</a>
                    </p>
                }
                .into_any(),
                None => view! { <p class="profile-field__value profile-field__value--empty">"No website"</p> }
                    .into_any(),
            },
            EditableField::CompanyName => {
                view! { <p class="profile-field__value">{user.company_label().to_owned()}</p> }.into_any()
            }
            _ => view! { <p class="profile-field__value">{field.get(&user).to_owned()}</p> }.into_any(),
        }
    }
}
