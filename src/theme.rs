//! Theme Context
//!
//! Light/dark mode provided explicitly through the Leptos Context API.
//! Lives only as long as the tab; nothing is persisted.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Pick the class variant for this theme
    pub fn pick(self, light: &'static str, dark: &'static str) -> &'static str {
        match self {
            Theme::Light => light,
            Theme::Dark => dark,
        }
    }
}

/// Theme handle shared by every view
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn new(initial: Theme) -> Self {
        Self { theme: RwSignal::new(initial) }
    }

    /// Current theme, tracked by the calling reactive scope
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

/// Create the theme context at the root and mirror it onto `<html class>`
pub fn provide_theme(initial: Theme) -> ThemeContext {
    let ctx = ThemeContext::new(initial);
    provide_context(ctx);

    Effect::new(move |_| {
        let theme = ctx.get();
        log::debug!("[THEME] switched to {}", theme.as_str());
        apply_to_document(theme);
    });

    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Toggle the `dark` class on the document root so `.dark` CSS rules follow
fn apply_to_document(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        log::warn!("[THEME] could not update root class: {:?}", e);
    }
}
