use tapgate_dispatch::{DiscoveryIntent, DiscoveryKind, DispatchSnapshot};
use tauri::{command, AppHandle, Manager, Runtime, State};

use crate::{PluginError, Result, SharedState};

fn shared_state<R: Runtime>(app: &AppHandle<R>) -> Result<State<'_, SharedState>> {
    app.try_state::<SharedState>()
        .ok_or(PluginError::NotInitialized)
}

#[command]
pub async fn get_dispatch_status<R: Runtime>(app: AppHandle<R>) -> Result<DispatchSnapshot> {
    let state = shared_state(&app)?;
    let state_guard = state.lock().await;
    Ok(state_guard.snapshot())
}

#[command]
pub async fn is_tag_reading_supported<R: Runtime>(app: AppHandle<R>) -> Result<bool> {
    let state = shared_state(&app)?;
    let state_guard = state.lock().await;
    Ok(state_guard.is_supported())
}

/// Entry point for platform bridges that deliver raw intents through IPC.
///
/// Resolves to `null` when the intent was not forwarded.
#[command]
pub async fn deliver_discovery_intent<R: Runtime>(
    app: AppHandle<R>,
    intent: DiscoveryIntent,
) -> Result<Option<DiscoveryKind>> {
    let state = shared_state(&app)?;
    let mut state_guard = state.lock().await;
    Ok(state_guard.deliver(intent))
}
