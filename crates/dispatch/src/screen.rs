//! Screen identity and routing targets.

use serde::{Deserialize, Serialize};

/// Logical identity of a screen (a window label, an activity name, a session id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenId(String);

impl ScreenId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The screen a lifecycle callback was raised for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenContext {
    pub id: ScreenId,
}

impl ScreenContext {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: ScreenId::new(id),
        }
    }
}

/// How the platform launches the routing target on delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchMode {
    /// Redeliver to the running instance if it is already front-most.
    SingleTop,
}

/// Where the platform sends discoveries while the grant is held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingTarget {
    pub screen: ScreenId,
    pub launch: LaunchMode,
    /// Platform may attach tag extras to the delivered intent
    pub mutable: bool,
}

impl RoutingTarget {
    /// Target that redelivers to `screen` itself, never a new instance.
    pub fn redeliver_to(screen: &ScreenId) -> Self {
        Self {
            screen: screen.clone(),
            launch: LaunchMode::SingleTop,
            mutable: true,
        }
    }
}

/// Filters attached to a registration request.
///
/// `None` means "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchFilters {
    pub actions: Option<Vec<String>>,
    pub tech_lists: Option<Vec<Vec<String>>>,
}

impl DispatchFilters {
    /// Accept every discovery sub-kind with no technology restriction.
    pub fn accept_all() -> Self {
        Self::default()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.actions.is_none() && self.tech_lists.is_none()
    }
}
