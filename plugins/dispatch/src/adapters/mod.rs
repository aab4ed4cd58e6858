//! Adapters that bridge Tauri to the crate-level abstractions.

mod event_bus;

pub use event_bus::TauriEventBus;
