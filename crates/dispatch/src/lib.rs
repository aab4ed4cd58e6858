//! Foreground-gated tag dispatch for tapgate.
//!
//! This crate decides *when* the process may intercept proximity tag
//! discoveries: only while the owning screen is in the foreground.
//! It tracks:
//! - Capability (does the device expose tag reading at all)
//! - Registration (does this screen currently hold first-refusal priority)
//! - Discovery forwarding (classify and hand the raw intent to the screen)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                             │
//! │  event.rs      - DiscoveryKind, DiscoveryIntent (pure)      │
//! │  screen.rs     - ScreenId, RoutingTarget, DispatchFilters   │
//! │  state.rs      - RegistrationState, token, snapshot         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Infrastructure Layer                        │
//! │  capability.rs - TagCapability trait, NullCapability        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Application Layer                          │
//! │  registrar.rs  - DispatchRegistrar state machine            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tapgate_dispatch::{new_callback, DeviceContext, DispatchRegistrar, NullCapability, ScreenContext};
//!
//! let mut registrar = DispatchRegistrar::initialize(
//!     Arc::new(NullCapability),
//!     &DeviceContext::default(),
//!     new_callback(|event| println!("tag: {}", event.kind)),
//! );
//!
//! let screen = ScreenContext::new("main");
//! registrar.on_foreground_enter(&screen)?;
//! registrar.on_foreground_exit(&screen)?;
//! ```

mod capability;
mod error;
mod event;
mod registrar;
mod screen;
mod state;

pub use capability::{
    Availability, CapabilityHandle, CapabilityRef, DeviceContext, NullCapability, TagCapability,
};
pub use error::{CapabilityError, DispatchError, Result};
pub use event::{
    DiscoveryEvent, DiscoveryIntent, DiscoveryKind, ACTION_NDEF_DISCOVERED, ACTION_TAG_DISCOVERED,
    ACTION_TECH_DISCOVERED,
};
pub use registrar::{new_callback, DiscoveryCallback, DispatchRegistrar, Transition};
pub use screen::{DispatchFilters, LaunchMode, RoutingTarget, ScreenContext, ScreenId};
pub use state::{DispatchSnapshot, RegistrationState, RegistrationToken};
