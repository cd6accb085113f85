//! Items Dashboard App
//!
//! Root component: owns the store, provides theme and app context, and
//! fetches items on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorBanner, ItemGrid, JobsPanel, LoadingSpinner, ThemeSwitch};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields, AppStore};
use crate::theme::{provide_theme, Theme};
use crate::view::{ItemsView, Palette};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = AppStore::new(AppState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);
    let theme = provide_theme(Theme::Light);

    // Fetch items on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let mut generation = 0;
        store.items().update(|items| generation = items.begin_fetch());
        log::info!("[APP] Fetching items (generation {}, trigger={})", generation, trigger);

        let api = ctx.api();
        spawn_local(async move {
            let result = api.fetch_items().await;
            match &result {
                Ok(items) => log::info!("[APP] Loaded {} items", items.len()),
                Err(e) => log::error!("[APP] Items fetch failed: {} (status {:?})", e, e.status()),
            }
            let mut applied = false;
            store.items().update(|items| applied = items.finish_fetch(generation, result));
            if !applied {
                log::debug!("[APP] Dropped stale items response (generation {})", generation);
            }
        });
    });

    let palette = move || Palette::for_theme(theme.get());
    // Only item state drives this branch; jobs writes leave it alone
    let items_view = move || store.items().with(|items| ItemsView::resolve(items, theme.get()));

    view! {
        <div class=move || palette().page>
            <ThemeSwitch />
            <div class="container">
                {move || match items_view() {
                    ItemsView::Loading => view! { <LoadingSpinner /> }.into_any(),
                    ItemsView::Failed(message) => view! {
                        <ErrorBanner message=message on_retry=Callback::new(move |_| ctx.reload()) />
                    }.into_any(),
                    ItemsView::Loaded(cards) => view! {
                        <header class="page-header">
                            <h1 class=move || palette().title>"Items List"</h1>
                            <p class=move || palette().subtitle>"Manage and track your items"</p>
                        </header>
                        <ItemGrid cards=cards />
                    }.into_any(),
                }}

                // Stays mounted across refetches and theme switches
                <JobsPanel />
            </div>
        </div>
    }
}
