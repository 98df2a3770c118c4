//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Account whose data every page shows - read
    pub user_id: ReadSignal<String>,
    /// Trigger to reload the opportunity list from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the opportunity list from backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        user_id: ReadSignal<String>,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            user_id,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a refetch on pages that watch the counter
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
