//! Plugin state: one registrar bound to the gated screen.

use tapgate_dispatch::{
    new_callback, CapabilityRef, DeviceContext, DiscoveryIntent, DiscoveryKind,
    DispatchRegistrar, DispatchSnapshot, ScreenContext, Transition,
};
use tapgate_events::{event_names, DispatchStateEvent, EventBusRef, TagDiscoveredEvent};

use crate::handler::ForegroundSignal;

pub struct State {
    registrar: DispatchRegistrar,
    screen: ScreenContext,
    bus: EventBusRef,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("screen", &self.screen.id)
            .field("registrar", &self.registrar)
            .finish()
    }
}

impl State {
    /// Build the registrar for `screen`, forwarding discoveries onto `bus`.
    pub fn new(capability: CapabilityRef, screen: &str, bus: EventBusRef) -> Self {
        let forward = bus.clone();
        let handler = new_callback(move |event| {
            forward.publish(
                event_names::TAG_DISCOVERED,
                &TagDiscoveredEvent::from(event),
            );
        });

        let registrar =
            DispatchRegistrar::initialize(capability, &DeviceContext::current(), handler);

        Self {
            registrar,
            screen: ScreenContext::new(screen),
            bus,
        }
    }

    pub fn screen(&self) -> &ScreenContext {
        &self.screen
    }

    /// Whether lifecycle events from window `label` drive this registrar.
    pub fn gates(&self, label: &str) -> bool {
        self.screen.id.as_str() == label
    }

    pub fn snapshot(&self) -> DispatchSnapshot {
        self.registrar.snapshot()
    }

    pub fn is_supported(&self) -> bool {
        self.registrar.is_supported()
    }

    /// Apply a host lifecycle signal and publish any registration change.
    pub fn handle_signal(
        &mut self,
        signal: ForegroundSignal,
    ) -> tapgate_dispatch::Result<Transition> {
        let result = match signal {
            ForegroundSignal::Enter => self.registrar.on_foreground_enter(&self.screen),
            ForegroundSignal::Exit => self.registrar.on_foreground_exit(&self.screen),
            ForegroundSignal::Destroyed => self.registrar.on_screen_destroyed(&self.screen),
        };

        let changed = match &result {
            Ok(transition) => transition.state_changed(),
            Err(_) => true,
        };
        if changed {
            self.publish_state();
        }

        result
    }

    /// Forward a raw platform intent to the registrar.
    ///
    /// Returns `None` when the intent was not forwarded (no reader, not
    /// registered, unrecognized action). The registrar has already logged
    /// why, and nothing is surfaced to the UI.
    pub fn deliver(&mut self, intent: DiscoveryIntent) -> Option<DiscoveryKind> {
        self.registrar.on_discovery_event(intent).ok()
    }

    fn publish_state(&self) {
        let snapshot = self.registrar.snapshot();
        self.bus.publish(
            event_names::DISPATCH_STATE,
            &DispatchStateEvent::from(&snapshot),
        );
    }
}
