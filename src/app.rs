//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::config::AppConfig;
use crate::net::api::UserApi;
use crate::pages::{user_list::UserListPage, user_profile::UserProfilePage};
use crate::state::overrides::OverrideStore;
use crate::state::theme::{Theme, ThemeStore};
use crate::util::{dark_mode, storage};

/// Theme access for views: a reactive read side and the persistent store.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    theme: RwSignal<Theme>,
    store: StoredValue<ThemeStore, LocalStorage>,
}

impl ThemeHandle {
    /// Current theme, tracked.
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    /// Flip and persist the theme; subscribers update the signal.
    pub fn toggle(&self) -> Theme {
        self.store
            .try_update_value(ThemeStore::toggle)
            .unwrap_or_else(|| self.theme.get_untracked())
    }
}

/// Shared handle to the override store.
pub type OverridesHandle = StoredValue<OverrideStore, LocalStorage>;

/// Root application component.
///
/// Builds the stores, provides them as contexts, and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let shared = storage::open_default();

    let mut theme_store = ThemeStore::load(shared.clone(), config.theme_storage_key.clone());
    let theme = RwSignal::new(theme_store.theme());
    dark_mode::apply(theme_store.theme());
    theme_store.subscribe(move |next| {
        theme.set(next);
        dark_mode::apply(next);
    });

    provide_context(ThemeHandle { theme, store: StoredValue::new_local(theme_store) });
    provide_context::<OverridesHandle>(StoredValue::new_local(OverrideStore::new(shared)));
    provide_context(UserApi::from_config(&config));
    provide_context(config);

    view! {
        <Title text="User Manager"/>

        <Router>
            <NavBar/>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=UserListPage/>
                    <Route path=(StaticSegment("user"), ParamSegment("id")) view=UserProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
