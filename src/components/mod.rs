//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod error_banner;
mod item_grid;
mod job_form;
mod jobs_panel;
mod loading_spinner;
mod theme_switch;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use item_grid::ItemGrid;
pub use job_form::JobForm;
pub use jobs_panel::JobsPanel;
pub use loading_spinner::LoadingSpinner;
pub use theme_switch::ThemeSwitch;
