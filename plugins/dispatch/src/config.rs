use serde::Deserialize;

/// Plugin configuration, read from `plugins.tapgate-dispatch` in the Tauri config.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DispatchConfig {
    /// Master switch. When off the registrar runs without a tag reader.
    pub enabled: bool,
    /// Window label whose foreground window gates registration.
    pub screen: String,
    /// Emit discoveries and state changes to the webview.
    pub emit_events: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            screen: "main".to_string(),
            emit_events: true,
        }
    }
}
