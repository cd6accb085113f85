//! View Models
//!
//! Pure mapping from (items, loading, error, theme) to what the components
//! draw. Components only turn these into DOM.

use crate::models::Item;
use crate::store::ItemsState;
use crate::theme::Theme;

/// The three mutually exclusive states of the items page
#[derive(Clone, Debug, PartialEq)]
pub enum ItemsView {
    Loading,
    Failed(String),
    Loaded(Vec<ItemCard>),
}

impl ItemsView {
    /// Loading wins over error, error wins over content
    pub fn resolve(state: &ItemsState, theme: Theme) -> Self {
        if state.loading {
            ItemsView::Loading
        } else if let Some(message) = &state.error {
            ItemsView::Failed(message.clone())
        } else {
            ItemsView::Loaded(state.list.iter().map(|item| ItemCard::new(item, theme)).collect())
        }
    }
}

/// Badge color family, chosen by status
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusColor {
    Green,
    Yellow,
    Gray,
}

/// Fixed status lookup; unknown statuses (and `pending`) fall back to gray
pub fn status_color(status: &str) -> StatusColor {
    match status.to_lowercase().as_str() {
        "completed" => StatusColor::Green,
        "in_progress" => StatusColor::Yellow,
        _ => StatusColor::Gray,
    }
}

pub fn badge_class(color: StatusColor, theme: Theme) -> &'static str {
    match (color, theme) {
        (StatusColor::Green, Theme::Light) => "status-badge bg-green-100 text-green-800",
        (StatusColor::Green, Theme::Dark) => "status-badge bg-green-800 text-green-100",
        (StatusColor::Yellow, Theme::Light) => "status-badge bg-yellow-100 text-yellow-800",
        (StatusColor::Yellow, Theme::Dark) => "status-badge bg-yellow-800 text-yellow-100",
        (StatusColor::Gray, Theme::Light) => "status-badge bg-gray-100 text-gray-800",
        (StatusColor::Gray, Theme::Dark) => "status-badge bg-gray-800 text-gray-100",
    }
}

/// `in_progress` reads as "in progress"
pub fn status_label(status: &str) -> String {
    status.replace('_', " ")
}

/// One card in the item grid
#[derive(Clone, Debug, PartialEq)]
pub struct ItemCard {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status_label: String,
    pub badge_class: &'static str,
}

impl ItemCard {
    pub fn new(item: &Item, theme: Theme) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            status_label: status_label(&item.status),
            badge_class: badge_class(status_color(&item.status), theme),
        }
    }
}

/// Theme-dependent classes for every surface outside the badges
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub centered: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub card: &'static str,
    pub card_title: &'static str,
    pub card_text: &'static str,
    pub alert: &'static str,
    pub panel: &'static str,
    pub input: &'static str,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            page: theme.pick("page bg-gray-50", "page bg-gray-900"),
            centered: theme.pick("centered bg-gray-50", "centered bg-gray-900"),
            title: theme.pick("title text-gray-900", "title text-white"),
            subtitle: theme.pick("subtitle text-gray-500", "subtitle text-gray-400"),
            card: theme.pick("item-card bg-white", "item-card bg-gray-800"),
            card_title: theme.pick("item-name text-gray-900", "item-name text-white"),
            card_text: theme.pick("item-description text-gray-600", "item-description text-gray-300"),
            alert: theme.pick(
                "alert bg-red-100 border-red-400 text-red-700",
                "alert bg-red-900 border-red-700 text-red-100",
            ),
            panel: theme.pick("jobs-panel bg-white text-gray-900", "jobs-panel bg-gray-800 text-white"),
            input: theme.pick("field bg-white text-gray-900", "field bg-gray-700 text-white"),
        }
    }
}
