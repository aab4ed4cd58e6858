//! Shared event contracts between the dispatch plugin and the UI layer.
//!
//! This crate defines the DTOs for events the plugin publishes. Using
//! shared types prevents runtime deserialization errors from mismatched
//! field names on the webview side.
//!
//! Also provides the `EventBus` trait for decoupled event emission.

mod bus;

pub use bus::{EmittedEvent, EventBus, EventBusRef, InMemoryEventBus, NullEventBus};

use serde::{Deserialize, Serialize};
use tapgate_dispatch::{DiscoveryEvent, DiscoveryKind, DispatchSnapshot, RegistrationState};

/// Event emitted when a tag is discovered while the screen holds the grant.
///
/// Producers: dispatch plugin
/// Consumers: frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDiscoveredEvent {
    /// Classifier (tag-discovered, technology-discovered, structured-data-discovered).
    pub kind: DiscoveryKind,
    /// Raw platform action.
    #[serde(default)]
    pub action: Option<String>,
    /// Tag identifier as lowercase hex.
    #[serde(default)]
    pub tag_id: Option<String>,
    /// Opaque platform extras.
    #[serde(default)]
    pub extras: serde_json::Value,
    /// Screen the discovery was routed to.
    pub screen: String,
    /// Timestamp in milliseconds.
    #[serde(default)]
    pub timestamp_ms: i64,
}

impl From<DiscoveryEvent> for TagDiscoveredEvent {
    fn from(event: DiscoveryEvent) -> Self {
        Self {
            kind: event.kind,
            action: event.intent.action,
            tag_id: event.intent.tag_id.as_deref().map(hex::encode),
            extras: event.intent.extras,
            screen: event.screen.to_string(),
            timestamp_ms: event.received_at_ms,
        }
    }
}

/// Event emitted when foreground dispatch is granted or revoked.
///
/// Producers: dispatch plugin
/// Consumers: frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchStateEvent {
    pub state: RegistrationState,
    pub supported: bool,
    #[serde(default)]
    pub screen: Option<String>,
    #[serde(default)]
    pub degraded: bool,
}

impl From<&DispatchSnapshot> for DispatchStateEvent {
    fn from(snapshot: &DispatchSnapshot) -> Self {
        Self {
            state: snapshot.state,
            supported: snapshot.supported,
            screen: snapshot.screen.as_ref().map(|s| s.to_string()),
            degraded: snapshot.degraded,
        }
    }
}

/// Event names as constants to prevent typos.
pub mod event_names {
    /// Tag discovered event.
    pub const TAG_DISCOVERED: &str = "nfc:tag_discovered";
    /// Dispatch registration changed event.
    pub const DISPATCH_STATE: &str = "nfc:dispatch_state";
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapgate_dispatch::{DiscoveryIntent, ScreenId};

    #[test]
    fn test_tag_discovered_from_event() {
        let event = DiscoveryEvent {
            kind: DiscoveryKind::StructuredDataDiscovered,
            intent: DiscoveryIntent::new("android.nfc.action.NDEF_DISCOVERED")
                .with_tag_id(vec![0x04, 0xab, 0x0f]),
            screen: ScreenId::new("main"),
            received_at_ms: 12345,
        };

        let dto = TagDiscoveredEvent::from(event);
        assert_eq!(dto.kind, DiscoveryKind::StructuredDataDiscovered);
        assert_eq!(dto.tag_id.as_deref(), Some("04ab0f"));
        assert_eq!(dto.screen, "main");
        assert_eq!(dto.timestamp_ms, 12345);
    }

    #[test]
    fn test_tag_discovered_serializes_camel_case() {
        let dto = TagDiscoveredEvent {
            kind: DiscoveryKind::TagDiscovered,
            action: None,
            tag_id: Some("01".to_string()),
            extras: serde_json::Value::Null,
            screen: "main".to_string(),
            timestamp_ms: 1,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["kind"], "tag-discovered");
        assert_eq!(json["tagId"], "01");
        assert_eq!(json["timestampMs"], 1);
    }

    #[test]
    fn test_dispatch_state_deserialize_minimal() {
        let json = r#"{"state": "registered", "supported": true}"#;
        let event: DispatchStateEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.state, RegistrationState::Registered);
        assert!(event.supported);
        assert_eq!(event.screen, None);
        assert!(!event.degraded);
    }
}
