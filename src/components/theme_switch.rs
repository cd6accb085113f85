//! Theme Switch Component
//!
//! Floating button that flips between light and dark mode.

use leptos::prelude::*;

use crate::theme::{use_theme, Theme};

#[component]
pub fn ThemeSwitch() -> impl IntoView {
    let theme = use_theme();

    let button_class = move || {
        theme.get().pick(
            "theme-switch bg-white text-gray-800",
            "theme-switch bg-gray-700 text-yellow-300",
        )
    };

    view! {
        <button
            class=button_class
            title=move || match theme.get() {
                Theme::Light => "Switch to dark mode",
                Theme::Dark => "Switch to light mode",
            }
            aria-label="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
