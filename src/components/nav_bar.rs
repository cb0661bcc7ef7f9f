//! Top navigation bar with the home link and theme toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::ThemeHandle;
use crate::util::dark_mode::themed_class;

#[component]
pub fn NavBar() -> impl IntoView {
    let theme = expect_context::<ThemeHandle>();

    view! {
        <nav class=move || themed_class("navbar", theme.get())>
            <div class="navbar__inner">
                <A href="/" attr:class="navbar__brand">"User Manager"</A>
                <button
                    class="btn navbar__theme-toggle"
                    on:click=move |_| {
                        let next = theme.toggle();
                        log::debug!("theme switched to {next}");
                    }
                    title="Toggle dark mode"
                >
                    {move || theme.get().toggle_label()}
                </button>
            </div>
        </nav>
    }
}
