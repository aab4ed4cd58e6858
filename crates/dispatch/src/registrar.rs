//! Dispatch registrar - ties foreground focus to tag-discovery priority.
//!
//! The process intercepts tag discoveries if and only if the owning screen
//! is in the foreground. All methods run on the host's UI thread; the
//! registrar does no locking of its own.

use std::sync::Arc;

use crate::capability::{Availability, CapabilityRef, DeviceContext};
use crate::error::{DispatchError, Result};
use crate::event::{DiscoveryEvent, DiscoveryIntent, DiscoveryKind};
use crate::screen::{DispatchFilters, RoutingTarget, ScreenContext};
use crate::state::{DispatchSnapshot, RegistrationState, RegistrationToken};

/// Callback receiving forwarded discoveries (the screen's own handler).
pub type DiscoveryCallback = Arc<dyn Fn(DiscoveryEvent) + Send + Sync + 'static>;

pub fn new_callback<F>(f: F) -> DiscoveryCallback
where
    F: Fn(DiscoveryEvent) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// What a lifecycle call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Unregistered -> Registered, one grant issued.
    Entered,
    /// Already registered; nothing issued.
    AlreadyRegistered,
    /// Registered -> Unregistered, one revocation issued.
    Exited,
    /// Already unregistered; a precautionary revoke was issued.
    AlreadyUnregistered,
    /// A grant already failed in this foreground window; nothing issued.
    Degraded,
    /// Device has no tag reader; nothing issued.
    Unsupported,
}

impl Transition {
    pub fn state_changed(&self) -> bool {
        matches!(self, Transition::Entered | Transition::Exited)
    }
}

/// Foreground dispatch state machine for a single screen instance.
pub struct DispatchRegistrar {
    capability: CapabilityRef,
    availability: Availability,
    state: RegistrationState,
    token: Option<RegistrationToken>,
    degraded: bool,
    handler: DiscoveryCallback,
}

impl std::fmt::Debug for DispatchRegistrar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchRegistrar")
            .field("availability", &self.availability)
            .field("state", &self.state)
            .field("token", &self.token)
            .field("degraded", &self.degraded)
            .finish()
    }
}

impl DispatchRegistrar {
    /// Query the capability layer once and build an unregistered registrar.
    ///
    /// An absent reader is reported here and nowhere else. Every later call
    /// short-circuits without touching the capability layer.
    pub fn initialize(
        capability: CapabilityRef,
        device: &DeviceContext,
        handler: DiscoveryCallback,
    ) -> Self {
        let availability = Availability::from(capability.query_default(device));

        match availability.handle() {
            Some(handle) => {
                tracing::info!(adapter = %handle.adapter_id, "tag reader initialized")
            }
            None => tracing::warn!(platform = %device.platform, "device has no tag reader"),
        }

        Self {
            capability,
            availability,
            state: RegistrationState::Unregistered,
            token: None,
            degraded: false,
            handler,
        }
    }

    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    pub fn is_supported(&self) -> bool {
        self.availability.is_supported()
    }

    pub fn state(&self) -> RegistrationState {
        self.state
    }

    pub fn is_registered(&self) -> bool {
        self.state == RegistrationState::Registered
    }

    pub fn token(&self) -> Option<&RegistrationToken> {
        self.token.as_ref()
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn snapshot(&self) -> DispatchSnapshot {
        DispatchSnapshot {
            supported: self.is_supported(),
            state: self.state,
            screen: self.token.as_ref().map(|t| t.screen.clone()),
            degraded: self.degraded,
            token_id: self.token.as_ref().map(|t| t.id),
        }
    }

    /// Screen entered the foreground: request first-refusal priority.
    pub fn on_foreground_enter(&mut self, screen: &ScreenContext) -> Result<Transition> {
        let Some(handle) = self.availability.handle() else {
            return Ok(Transition::Unsupported);
        };

        if self.is_registered() {
            tracing::debug!(screen = %screen.id, "foreground dispatch already enabled");
            return Ok(Transition::AlreadyRegistered);
        }

        if self.degraded {
            tracing::debug!(screen = %screen.id, "foreground dispatch degraded for this window");
            return Ok(Transition::Degraded);
        }

        let target = RoutingTarget::redeliver_to(&screen.id);
        let filters = DispatchFilters::accept_all();

        if let Err(e) = self.capability.register(handle, screen, &target, &filters) {
            self.degraded = true;
            tracing::error!(screen = %screen.id, error = %e, "failed to enable foreground dispatch");
            return Err(DispatchError::RegistrationFailed(e.to_string()));
        }

        let token = RegistrationToken::mint(&screen.id);
        tracing::info!(screen = %screen.id, token = %token.id, "foreground dispatch enabled");
        self.token = Some(token);
        self.state = RegistrationState::Registered;

        Ok(Transition::Entered)
    }

    /// Screen left the foreground: revoke the grant.
    ///
    /// The revoke is always issued while a reader exists, even with no token
    /// held, so a partially applied grant is still released. The registrar
    /// ends up unregistered even when the platform reports a failure.
    pub fn on_foreground_exit(&mut self, screen: &ScreenContext) -> Result<Transition> {
        let Some(handle) = self.availability.handle() else {
            return Ok(Transition::Unsupported);
        };

        self.degraded = false;
        self.state = RegistrationState::Unregistered;

        let Some(token) = self.token.take() else {
            if let Err(e) = self.capability.deregister(handle, screen) {
                tracing::debug!(screen = %screen.id, error = %e, "revoke without grant failed");
            }
            tracing::debug!(screen = %screen.id, "foreground dispatch already disabled");
            return Ok(Transition::AlreadyUnregistered);
        };

        // Release whatever screen actually holds the grant.
        let holder = ScreenContext {
            id: token.screen.clone(),
        };

        if let Err(e) = self.capability.deregister(handle, &holder) {
            tracing::error!(screen = %holder.id, error = %e, "failed to disable foreground dispatch");
            return Err(DispatchError::DeregistrationFailed(e.to_string()));
        }

        tracing::info!(screen = %holder.id, token = %token.id, "foreground dispatch disabled");
        Ok(Transition::Exited)
    }

    /// Screen is being torn down. Guarantees no registration survives it.
    pub fn on_screen_destroyed(&mut self, screen: &ScreenContext) -> Result<Transition> {
        if self.is_registered() {
            tracing::debug!(screen = %screen.id, "releasing dispatch on teardown");
        }
        self.on_foreground_exit(screen)
    }

    /// Platform delivered a discovery: classify and forward it.
    pub fn on_discovery_event(&mut self, intent: DiscoveryIntent) -> Result<DiscoveryKind> {
        if !self.is_supported() {
            return Err(DispatchError::CapabilityAbsent);
        }

        let Some(token) = self.token.as_ref() else {
            tracing::warn!(action = intent.action(), "discovery received while unregistered");
            return Err(DispatchError::UnexpectedEvent {
                action: intent.action().to_string(),
            });
        };

        let Some(kind) = intent.kind() else {
            tracing::debug!(action = intent.action(), "ignoring non-discovery intent");
            return Err(DispatchError::UnrecognizedAction(intent.action().to_string()));
        };

        tracing::debug!(%kind, screen = %token.screen, "tag detected");

        let event = DiscoveryEvent {
            kind,
            screen: token.screen.clone(),
            intent,
            received_at_ms: chrono::Utc::now().timestamp_millis(),
        };
        (self.handler)(event);

        Ok(kind)
    }
}

impl Drop for DispatchRegistrar {
    fn drop(&mut self) {
        let Some(token) = self.token.take() else {
            return;
        };
        let Some(handle) = self.availability.handle() else {
            return;
        };

        let holder = ScreenContext { id: token.screen };
        match self.capability.deregister(handle, &holder) {
            Ok(()) => tracing::info!(screen = %holder.id, "foreground dispatch released on drop"),
            Err(e) => {
                tracing::error!(screen = %holder.id, error = %e, "failed to release dispatch on drop")
            }
        }
    }
}
