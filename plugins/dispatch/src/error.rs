use serde::{Serialize, Serializer};

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("Tag dispatch plugin not initialized")]
    NotInitialized,
}

impl Serialize for PluginError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PluginError>;
