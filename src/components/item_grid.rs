//! Item Grid Component
//!
//! Responsive grid of item cards with status badges.

use leptos::prelude::*;

use crate::theme::use_theme;
use crate::view::{ItemCard, Palette};

#[component]
pub fn ItemGrid(cards: Vec<ItemCard>) -> impl IntoView {
    let theme = use_theme();
    let palette = move || Palette::for_theme(theme.get());
    let is_empty = cards.is_empty();

    view! {
        <div class="item-grid">
            {cards.into_iter().map(|card| {
                let title = card.name.clone();
                view! {
                    <div class=move || palette().card data-item-id=card.id.to_string()>
                        <div class="item-card-body">
                            <h2 class=move || palette().card_title title=title>
                                {card.name}
                            </h2>
                            <p class=move || palette().card_text>{card.description}</p>
                            <div class="item-card-footer">
                                <span class=card.badge_class>{card.status_label}</span>
                            </div>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
        <Show when=move || is_empty>
            <p class=move || palette().subtitle>"No items yet."</p>
        </Show>
    }
}
