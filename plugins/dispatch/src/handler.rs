use std::sync::Arc;

use tapgate_dispatch::CapabilityRef;
use tapgate_events::{EventBusRef, NullEventBus};
use tauri::{AppHandle, Manager, Runtime, Window, WindowEvent};

use crate::adapters::TauriEventBus;
use crate::{DispatchConfig, SharedState, State};

/// Host lifecycle signal derived from a window event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForegroundSignal {
    Enter,
    Exit,
    Destroyed,
}

impl ForegroundSignal {
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::Focused(true) => Some(Self::Enter),
            WindowEvent::Focused(false) => Some(Self::Exit),
            WindowEvent::Destroyed => Some(Self::Destroyed),
            _ => None,
        }
    }
}

pub fn create_state<R: Runtime>(
    app: &AppHandle<R>,
    config: &DispatchConfig,
    capability: CapabilityRef,
) -> State {
    let bus: EventBusRef = if config.emit_events {
        Arc::new(TauriEventBus::new(app.clone()))
    } else {
        Arc::new(NullEventBus)
    };

    State::new(capability, &config.screen, bus)
}

/// Called from the plugin's `on_window_event` hook.
pub fn on_window_event<R: Runtime>(window: &Window<R>, event: &WindowEvent) {
    let Some(signal) = ForegroundSignal::from_window_event(event) else {
        return;
    };
    let Some(state) = window.try_state::<SharedState>() else {
        return;
    };

    let mut state_guard = state.blocking_lock();
    if !state_guard.gates(window.label()) {
        return;
    }

    // Failures are logged by the registrar and never reach the window.
    match state_guard.handle_signal(signal) {
        Ok(transition) => {
            tracing::trace!(label = window.label(), ?signal, ?transition, "window lifecycle")
        }
        Err(e) => tracing::trace!(label = window.label(), ?signal, error = %e, "window lifecycle"),
    }
}
