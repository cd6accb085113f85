//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::{ApiClient, HttpTransport};
use crate::config::AppConfig;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch items from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch items from backend - write
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: AppConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a refetch of items
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// HTTP client pointed at the configured backend
    pub fn api(&self) -> ApiClient {
        let base_url = self.config.with_value(|c| c.api_base_url.clone());
        ApiClient::new(HttpTransport::new(base_url))
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
