//! Integration tests for the dispatch registrar lifecycle.
//!
//! Drives the registrar the way a host would: construct, foreground,
//! deliver, background.

use std::sync::{Arc, Mutex};

use tapgate_dispatch::{
    new_callback, CapabilityError, CapabilityHandle, DeviceContext, DiscoveryEvent,
    DiscoveryIntent, DiscoveryKind, DispatchFilters, DispatchRegistrar, RegistrationState,
    RoutingTarget, ScreenContext, TagCapability, Transition,
};

#[derive(Default)]
struct Counters {
    queries: usize,
    registers: usize,
    deregisters: usize,
}

/// Capability that counts calls and optionally reports no reader.
struct CountingCapability {
    supported: bool,
    counters: Mutex<Counters>,
}

impl CountingCapability {
    fn new(supported: bool) -> Arc<Self> {
        Arc::new(Self {
            supported,
            counters: Mutex::new(Counters::default()),
        })
    }

    fn registers(&self) -> usize {
        self.counters.lock().unwrap().registers
    }

    fn deregisters(&self) -> usize {
        self.counters.lock().unwrap().deregisters
    }

    fn queries(&self) -> usize {
        self.counters.lock().unwrap().queries
    }
}

impl TagCapability for CountingCapability {
    fn query_default(&self, _device: &DeviceContext) -> Option<CapabilityHandle> {
        self.counters.lock().unwrap().queries += 1;
        self.supported.then(|| CapabilityHandle::new("nfc0"))
    }

    fn register(
        &self,
        _handle: &CapabilityHandle,
        _screen: &ScreenContext,
        _target: &RoutingTarget,
        _filters: &DispatchFilters,
    ) -> Result<(), CapabilityError> {
        self.counters.lock().unwrap().registers += 1;
        Ok(())
    }

    fn deregister(
        &self,
        _handle: &CapabilityHandle,
        _screen: &ScreenContext,
    ) -> Result<(), CapabilityError> {
        self.counters.lock().unwrap().deregisters += 1;
        Ok(())
    }
}

fn create_registrar(
    capability: Arc<CountingCapability>,
) -> (DispatchRegistrar, Arc<Mutex<Vec<DiscoveryEvent>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    let registrar = DispatchRegistrar::initialize(
        capability,
        &DeviceContext::current(),
        new_callback(move |event| sink.lock().unwrap().push(event)),
    );
    (registrar, received)
}

// =============================================================================
// Capable device
// =============================================================================

mod capable_device {
    use super::*;

    #[test]
    fn test_full_foreground_window() {
        let capability = CountingCapability::new(true);
        let (mut registrar, received) = create_registrar(Arc::clone(&capability));
        let screen = ScreenContext::new("main");

        // Construction yields a handle
        assert_eq!(
            registrar.availability().handle(),
            Some(&CapabilityHandle::new("nfc0"))
        );

        // Foreground
        assert_eq!(registrar.on_foreground_enter(&screen), Ok(Transition::Entered));
        assert_eq!(registrar.state(), RegistrationState::Registered);
        assert_eq!(capability.registers(), 1);

        // Tag
        let kind = registrar
            .on_discovery_event(DiscoveryIntent::new("tag-discovered"))
            .unwrap();
        assert_eq!(kind, DiscoveryKind::TagDiscovered);
        {
            let events = received.lock().unwrap();
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].kind, DiscoveryKind::TagDiscovered);
        }

        // Background
        assert_eq!(registrar.on_foreground_exit(&screen), Ok(Transition::Exited));
        assert_eq!(registrar.state(), RegistrationState::Unregistered);
        assert_eq!(capability.deregisters(), 1);
    }

    #[test]
    fn test_every_discovery_kind_is_forwarded() {
        let capability = CountingCapability::new(true);
        let (mut registrar, received) = create_registrar(capability);
        registrar
            .on_foreground_enter(&ScreenContext::new("main"))
            .unwrap();

        for action in [
            "android.nfc.action.TAG_DISCOVERED",
            "android.nfc.action.TECH_DISCOVERED",
            "android.nfc.action.NDEF_DISCOVERED",
        ] {
            registrar
                .on_discovery_event(DiscoveryIntent::new(action))
                .unwrap();
        }

        let kinds: Vec<_> = received.lock().unwrap().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, DiscoveryKind::ALL.to_vec());
    }

    #[test]
    fn test_events_stop_after_exit() {
        let capability = CountingCapability::new(true);
        let (mut registrar, received) = create_registrar(capability);
        let screen = ScreenContext::new("main");

        registrar.on_foreground_enter(&screen).unwrap();
        registrar.on_foreground_exit(&screen).unwrap();

        assert!(registrar
            .on_discovery_event(DiscoveryIntent::new("tag-discovered"))
            .is_err());
        assert!(received.lock().unwrap().is_empty());
    }

    #[test]
    fn test_repeated_windows_pair_grants_and_revocations() {
        let capability = CountingCapability::new(true);
        let (mut registrar, _received) = create_registrar(Arc::clone(&capability));
        let screen = ScreenContext::new("main");

        for _ in 0..5 {
            registrar.on_foreground_enter(&screen).unwrap();
            registrar.on_foreground_exit(&screen).unwrap();
        }

        assert_eq!(capability.registers(), 5);
        assert_eq!(capability.deregisters(), 5);
        assert!(registrar.token().is_none());
    }

    #[test]
    fn test_abrupt_teardown_releases_grant() {
        let capability = CountingCapability::new(true);
        {
            let (mut registrar, _received) = create_registrar(Arc::clone(&capability));
            registrar
                .on_foreground_enter(&ScreenContext::new("main"))
                .unwrap();
        }

        assert_eq!(capability.registers(), 1);
        assert_eq!(capability.deregisters(), 1);
    }
}

// =============================================================================
// Device without a tag reader
// =============================================================================

mod absent_capability {
    use super::*;

    #[test]
    fn test_all_calls_are_noops() {
        let capability = CountingCapability::new(false);
        let (mut registrar, received) = create_registrar(Arc::clone(&capability));
        let screen = ScreenContext::new("main");

        assert!(!registrar.is_supported());

        for _ in 0..3 {
            assert_eq!(
                registrar.on_foreground_enter(&screen),
                Ok(Transition::Unsupported)
            );
            let _ = registrar.on_discovery_event(DiscoveryIntent::new("tag-discovered"));
            assert_eq!(
                registrar.on_foreground_exit(&screen),
                Ok(Transition::Unsupported)
            );
        }

        assert_eq!(capability.queries(), 1);
        assert_eq!(capability.registers(), 0);
        assert_eq!(capability.deregisters(), 0);
        assert!(received.lock().unwrap().is_empty());
        assert_eq!(registrar.state(), RegistrationState::Unregistered);
    }
}
