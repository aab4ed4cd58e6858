//! Tauri event bus adapter.
//!
//! Implements the EventBus trait using Tauri's event system.

use tapgate_events::EventBus;
use tauri::{AppHandle, Emitter, Runtime};

/// EventBus implementation that emits events to every webview.
pub struct TauriEventBus<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> TauriEventBus<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> EventBus for TauriEventBus<R> {
    fn emit(&self, topic: &str, payload: serde_json::Value) {
        if let Err(e) = self.app.emit(topic, payload) {
            tracing::error!(topic, "failed to emit event: {:?}", e);
        }
    }
}
