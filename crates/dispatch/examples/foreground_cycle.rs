//! Example: Drive a registrar through a few foreground windows.
//!
//! Run with: cargo run -p tapgate-dispatch --example foreground_cycle

use std::sync::Arc;

use tapgate_dispatch::{
    new_callback, CapabilityError, CapabilityHandle, DeviceContext, DiscoveryIntent,
    DispatchFilters, DispatchRegistrar, RoutingTarget, ScreenContext, TagCapability,
};

/// Simulated reader that always grants.
struct SimulatedReader;

impl TagCapability for SimulatedReader {
    fn query_default(&self, _device: &DeviceContext) -> Option<CapabilityHandle> {
        Some(CapabilityHandle::new("simulated"))
    }

    fn register(
        &self,
        _handle: &CapabilityHandle,
        screen: &ScreenContext,
        target: &RoutingTarget,
        _filters: &DispatchFilters,
    ) -> Result<(), CapabilityError> {
        println!("  [reader] grant -> {} ({:?})", screen.id, target.launch);
        Ok(())
    }

    fn deregister(
        &self,
        _handle: &CapabilityHandle,
        screen: &ScreenContext,
    ) -> Result<(), CapabilityError> {
        println!("  [reader] revoke -> {}", screen.id);
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("tapgate_dispatch=debug")
        .init();

    println!("=== Foreground Dispatch Example ===\n");

    let mut registrar = DispatchRegistrar::initialize(
        Arc::new(SimulatedReader),
        &DeviceContext::current(),
        new_callback(|event| {
            println!(
                "  [screen] {} on {} (id: {:?})",
                event.kind, event.screen, event.intent.tag_id
            );
        }),
    );

    let screen = ScreenContext::new("main");

    for window in 1..=2 {
        println!("Foreground window {window}");
        registrar.on_foreground_enter(&screen)?;
        registrar.on_discovery_event(
            DiscoveryIntent::new("android.nfc.action.NDEF_DISCOVERED").with_tag_id(vec![0x04, 0x11]),
        )?;
        registrar.on_foreground_exit(&screen)?;
        println!();
    }

    // Outside the foreground window the event is ignored, not forwarded
    if let Err(e) = registrar.on_discovery_event(DiscoveryIntent::new("tag-discovered")) {
        println!("Background delivery ignored: {e}");
    }

    println!("\nDone.");
    Ok(())
}
