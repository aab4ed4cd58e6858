//! Registration state structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::screen::ScreenId;

/// Whether the owning screen currently holds the dispatch grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationState {
    #[default]
    Unregistered,
    Registered,
}

impl RegistrationState {
    pub fn label(&self) -> &'static str {
        match self {
            RegistrationState::Unregistered => "unregistered",
            RegistrationState::Registered => "registered",
        }
    }
}

impl std::fmt::Display for RegistrationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Proof that a screen holds first-refusal priority.
///
/// Minted after the platform grants the request and dropped on exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationToken {
    pub id: Uuid,
    pub screen: ScreenId,
    pub granted_at_ms: i64,
}

impl RegistrationToken {
    pub(crate) fn mint(screen: &ScreenId) -> Self {
        Self {
            id: Uuid::new_v4(),
            screen: screen.clone(),
            granted_at_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Serializable view of the registrar for status queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchSnapshot {
    pub supported: bool,
    pub state: RegistrationState,
    /// Screen holding the grant
    #[serde(default)]
    pub screen: Option<ScreenId>,
    /// Last grant attempt in this foreground window failed
    #[serde(default)]
    pub degraded: bool,
    #[serde(default)]
    pub token_id: Option<Uuid>,
}
