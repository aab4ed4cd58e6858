//! Discovery event classification.
//!
//! Pure domain logic - no I/O, no platform dependencies.

use serde::{Deserialize, Serialize};

use crate::screen::ScreenId;

/// Platform action for a generic tag discovery.
pub const ACTION_TAG_DISCOVERED: &str = "android.nfc.action.TAG_DISCOVERED";
/// Platform action for a technology-specific discovery.
pub const ACTION_TECH_DISCOVERED: &str = "android.nfc.action.TECH_DISCOVERED";
/// Platform action for a structured-data (NDEF) discovery.
pub const ACTION_NDEF_DISCOVERED: &str = "android.nfc.action.NDEF_DISCOVERED";

/// Classifier carried by every forwarded discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscoveryKind {
    TagDiscovered,
    TechnologyDiscovered,
    StructuredDataDiscovered,
}

impl DiscoveryKind {
    pub const ALL: [DiscoveryKind; 3] = [
        DiscoveryKind::TagDiscovered,
        DiscoveryKind::TechnologyDiscovered,
        DiscoveryKind::StructuredDataDiscovered,
    ];

    /// Short classifier label (e.g., "tag-discovered").
    pub fn label(&self) -> &'static str {
        match self {
            DiscoveryKind::TagDiscovered => "tag-discovered",
            DiscoveryKind::TechnologyDiscovered => "technology-discovered",
            DiscoveryKind::StructuredDataDiscovered => "structured-data-discovered",
        }
    }

    /// Platform action string this kind is delivered under.
    pub fn platform_action(&self) -> &'static str {
        match self {
            DiscoveryKind::TagDiscovered => ACTION_TAG_DISCOVERED,
            DiscoveryKind::TechnologyDiscovered => ACTION_TECH_DISCOVERED,
            DiscoveryKind::StructuredDataDiscovered => ACTION_NDEF_DISCOVERED,
        }
    }

    /// Classify an action. Accepts both platform actions and short labels.
    pub fn from_action(action: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.platform_action() == action || kind.label() == action)
    }
}

impl std::fmt::Display for DiscoveryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw notification as delivered by the platform.
///
/// Only `action` is ever inspected; everything else is forwarded untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryIntent {
    /// Action the platform matched (may be absent on malformed deliveries)
    #[serde(default)]
    pub action: Option<String>,

    /// Tag identifier bytes, if the platform supplied them
    #[serde(default)]
    pub tag_id: Option<Vec<u8>>,

    /// Opaque platform extras
    #[serde(default)]
    pub extras: serde_json::Value,
}

impl DiscoveryIntent {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            ..Default::default()
        }
    }

    pub fn with_tag_id(mut self, tag_id: Vec<u8>) -> Self {
        self.tag_id = Some(tag_id);
        self
    }

    pub fn with_extras(mut self, extras: serde_json::Value) -> Self {
        self.extras = extras;
        self
    }

    pub fn action(&self) -> &str {
        self.action.as_deref().unwrap_or("")
    }

    pub fn kind(&self) -> Option<DiscoveryKind> {
        self.action.as_deref().and_then(DiscoveryKind::from_action)
    }
}

/// A classified discovery handed to the screen's handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryEvent {
    pub kind: DiscoveryKind,
    pub intent: DiscoveryIntent,
    /// Screen the event was routed to
    pub screen: ScreenId,
    pub received_at_ms: i64,
}
