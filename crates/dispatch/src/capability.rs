//! Capability layer abstraction.
//!
//! The platform owns the tag reader. These traits let the registrar stay
//! pure and testable while a host plugs in the real adapter.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CapabilityError;
use crate::screen::{DispatchFilters, RoutingTarget, ScreenContext};

/// Host device information passed to the capability query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceContext {
    /// Platform name (e.g., "android", "ios", "macos")
    pub platform: String,
}

impl DeviceContext {
    pub fn current() -> Self {
        Self {
            platform: std::env::consts::OS.to_string(),
        }
    }
}

/// Handle to the device's default tag reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityHandle {
    pub adapter_id: String,
}

impl CapabilityHandle {
    pub fn new(adapter_id: impl Into<String>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
        }
    }
}

/// Result of the one-time capability query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Supported(CapabilityHandle),
    Unsupported,
}

impl Availability {
    pub fn handle(&self) -> Option<&CapabilityHandle> {
        match self {
            Availability::Supported(handle) => Some(handle),
            Availability::Unsupported => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Availability::Supported(_))
    }
}

impl From<Option<CapabilityHandle>> for Availability {
    fn from(handle: Option<CapabilityHandle>) -> Self {
        handle.map_or(Availability::Unsupported, Availability::Supported)
    }
}

/// Platform tag-reading capability.
pub trait TagCapability: Send + Sync {
    /// Resolve the default tag reader, or `None` if the device has none.
    fn query_default(&self, device: &DeviceContext) -> Option<CapabilityHandle>;

    /// Grant `screen` first-refusal priority over tag discoveries.
    fn register(
        &self,
        handle: &CapabilityHandle,
        screen: &ScreenContext,
        target: &RoutingTarget,
        filters: &DispatchFilters,
    ) -> Result<(), CapabilityError>;

    /// Revoke the priority granted to `screen`.
    fn deregister(
        &self,
        handle: &CapabilityHandle,
        screen: &ScreenContext,
    ) -> Result<(), CapabilityError>;
}

/// Shared capability reference.
pub type CapabilityRef = Arc<dyn TagCapability>;

/// Capability for devices without a tag reader.
pub struct NullCapability;

impl TagCapability for NullCapability {
    fn query_default(&self, _device: &DeviceContext) -> Option<CapabilityHandle> {
        None
    }

    fn register(
        &self,
        _handle: &CapabilityHandle,
        _screen: &ScreenContext,
        _target: &RoutingTarget,
        _filters: &DispatchFilters,
    ) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unavailable("no tag reader".to_string()))
    }

    fn deregister(
        &self,
        _handle: &CapabilityHandle,
        _screen: &ScreenContext,
    ) -> Result<(), CapabilityError> {
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_capability_is_absent() {
        assert_eq!(NullCapability.query_default(&DeviceContext::current()), None);
    }

    #[test]
    fn test_availability_from_option() {
        let supported = Availability::from(Some(CapabilityHandle::new("nfc0")));
        assert!(supported.is_supported());
        assert_eq!(supported.handle().map(|h| h.adapter_id.as_str()), Some("nfc0"));

        let absent = Availability::from(None);
        assert!(!absent.is_supported());
        assert!(absent.handle().is_none());
    }
}
