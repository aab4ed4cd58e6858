//! Platform-specific capability selection.

use std::sync::Arc;

use tapgate_dispatch::{CapabilityRef, NullCapability};

/// Capability used when the host does not supply one.
///
/// There is no in-tree reader adapter for any platform yet, so this always
/// reports an absent reader. Mobile hosts pass theirs through
/// `init_with_capability`.
pub fn default_capability() -> CapabilityRef {
    Arc::new(NullCapability)
}
