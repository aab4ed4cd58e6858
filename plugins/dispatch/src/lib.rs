use std::sync::Arc;

use tapgate_dispatch::{CapabilityRef, NullCapability};
use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};
use tokio::sync::Mutex;

mod adapters;
mod commands;
mod config;
mod error;
mod handler;
mod platform;
mod state;

pub use config::DispatchConfig;
pub use error::{PluginError, Result};
pub use handler::ForegroundSignal;
pub use state::State;

const PLUGIN_NAME: &str = "tapgate-dispatch";

pub type SharedState = Mutex<State>;

/// Plugin using the built-in capability for the current platform.
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<DispatchConfig>> {
    build(None)
}

/// Plugin using a host-supplied tag reader.
pub fn init_with_capability<R: Runtime>(
    capability: CapabilityRef,
) -> TauriPlugin<R, Option<DispatchConfig>> {
    build(Some(capability))
}

fn build<R: Runtime>(capability: Option<CapabilityRef>) -> TauriPlugin<R, Option<DispatchConfig>> {
    Builder::<R, Option<DispatchConfig>>::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![
            commands::get_dispatch_status,
            commands::is_tag_reading_supported,
            commands::deliver_discovery_intent,
        ])
        .setup(move |app, api| {
            let config = api.config().clone().unwrap_or_default();
            let capability = select_capability(&config, capability);

            let state = handler::create_state(app, &config, capability);
            app.manage(SharedState::new(state));

            Ok(())
        })
        .on_window_event(handler::on_window_event)
        .build()
}

/// Pick the tag reader: configuration can switch off even a host-supplied one.
fn select_capability(config: &DispatchConfig, supplied: Option<CapabilityRef>) -> CapabilityRef {
    match (config.enabled, supplied) {
        (false, _) => {
            tracing::info!("tag dispatch disabled by configuration");
            Arc::new(NullCapability)
        }
        (true, Some(capability)) => capability,
        (true, None) => platform::default_capability(),
    }
}
