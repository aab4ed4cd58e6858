use serde::{Serialize, Serializer};

/// Failure reported by the platform capability layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    #[error("Platform refused the request: {0}")]
    Refused(String),

    #[error("Tag reader unavailable: {0}")]
    Unavailable(String),
}

/// Failures of the dispatch registrar.
///
/// None of these are fatal. The registrar logs each one before returning it,
/// so hosts are free to discard the error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("Tag reading is not supported on this device")]
    CapabilityAbsent,

    #[error("Foreground dispatch registration failed: {0}")]
    RegistrationFailed(String),

    #[error("Foreground dispatch deregistration failed: {0}")]
    DeregistrationFailed(String),

    #[error("Discovery event received while unregistered: {action}")]
    UnexpectedEvent { action: String },

    #[error("Unrecognized discovery action: {0}")]
    UnrecognizedAction(String),
}

impl Serialize for DispatchError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;
