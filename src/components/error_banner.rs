//! Error Banner Component
//!
//! Shown in place of the item grid when the fetch failed.

use leptos::prelude::*;

use crate::theme::use_theme;
use crate::view::Palette;

/// Alert with the failure message and a manual retry button
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    let theme = use_theme();
    let palette = move || Palette::for_theme(theme.get());

    view! {
        <div class=move || palette().centered>
            <div class=move || palette().alert role="alert">
                <strong class="alert-title">"Error: "</strong>
                <span class="alert-message">{message}</span>
                <button class="retry-btn" on:click=move |_| on_retry.run(())>
                    "Retry"
                </button>
            </div>
        </div>
    }
}
