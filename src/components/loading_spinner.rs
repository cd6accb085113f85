//! Loading Spinner Component
//!
//! Shown in place of the item grid while a fetch is in flight.

use leptos::prelude::*;

use crate::theme::use_theme;
use crate::view::Palette;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class=move || Palette::for_theme(theme.get()).centered>
            <div class="spinner" role="status" aria-label="Loading"></div>
        </div>
    }
}
