use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, info};

use super::bridge::UiBridge;
use super::channel::{InboundEvent, OutboundMessage};
use super::protocol::{Command, OverlayKind, StatusReport};
use super::state::{OverlayState, Transition};
use crate::surface::{AppType, ContentSurface};

// ============================================================================
// Overlay Session
// ============================================================================

/// Sole owner of the overlay state. Host commands and renderer reports both
/// enter through here, one at a time.
pub struct OverlaySession {
    state: OverlayState,
    bridge: UiBridge,
}

impl OverlaySession {
    pub fn new(surface: Box<dyn ContentSurface>, host_tx: Sender<OutboundMessage>) -> Self {
        Self {
            state: OverlayState::new(),
            bridge: UiBridge::new(surface, host_tx),
        }
    }

    pub fn current(&self) -> OverlayKind {
        self.state.current()
    }

    /// Put the renderer into its initial overlay state.
    pub fn start(&mut self) {
        self.bridge.show(self.state.current());
        self.bridge.set_app_type(AppType::Overlay);
    }

    pub fn handle_command(&mut self, command: Command) -> Transition {
        let result = self.state.apply(command);
        debug!("{command:?}: '{}' -> '{}'", result.previous, result.next);
        if let Some(kind) = result.immediate_status {
            self.bridge.report(StatusReport::from(kind));
        }
        self.bridge.show(result.next);
        result
    }

    pub fn handle_renderer_status(&mut self, label: &str) {
        if let Some(kind) = self.bridge.confirm(label) {
            self.state.reconcile(kind);
        } else {
            debug!("Forwarded unrecognized renderer status '{label}'");
        }
    }

    pub fn handle_event(&mut self, event: InboundEvent) {
        match event {
            InboundEvent::Host(command) => {
                self.handle_command(command);
            }
            InboundEvent::RendererStatus(label) => {
                self.handle_renderer_status(&label);
            }
            InboundEvent::HostClosed => {
                info!("Host input closed, no further commands");
            }
        }
    }

    /// Give back the surface once the loop is over. Dropping the bridge also
    /// releases the outbound sender so the writer thread can finish.
    pub fn into_surface(self) -> Box<dyn ContentSurface> {
        self.bridge.into_surface()
    }
}

// ============================================================================
// Main Event Loop
// ============================================================================

/// Process inbound events serially until every producer has hung up.
pub fn run_overlay_loop(session: &mut OverlaySession, events: &Receiver<InboundEvent>) {
    debug!("Overlay control loop started");
    for event in events.iter() {
        session.handle_event(event);
    }
    debug!("Overlay control loop exiting");
}
