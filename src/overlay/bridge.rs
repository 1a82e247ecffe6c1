use crossbeam_channel::Sender;
use tracing::{debug, info, warn};

use super::channel::OutboundMessage;
use super::protocol::{OverlayKind, StatusReport};
use crate::surface::{AppType, ContentSurface, RendererInstruction};

/// Adapter between the state machine, the renderer, and the host's outbound stream.
pub struct UiBridge {
    surface: Box<dyn ContentSurface>,
    host_tx: Sender<OutboundMessage>,
    /// Last kind instructed or confirmed; `None` until the first instruction.
    applied: Option<OverlayKind>,
}

impl UiBridge {
    pub fn new(surface: Box<dyn ContentSurface>, host_tx: Sender<OutboundMessage>) -> Self {
        Self {
            surface,
            host_tx,
            applied: None,
        }
    }

    /// Tell the renderer to display `kind`, unless it already is. Returns
    /// whether an instruction was issued. Delivery failures are logged and
    /// swallowed so the host channel keeps running.
    pub fn show(&mut self, kind: OverlayKind) -> bool {
        if self.applied == Some(kind) {
            debug!("UI already showing '{kind}', skipping instruction");
            return false;
        }
        self.applied = Some(kind);

        info!("Switching ui to '{kind}'");
        self.send(&RendererInstruction::SetUiType { ui_type: kind });
        true
    }

    pub fn set_app_type(&mut self, app_type: AppType) {
        self.send(&RendererInstruction::SetAppType { app_type });
    }

    fn send(&mut self, instruction: &RendererInstruction) {
        if let Err(err) = self.surface.deliver(instruction) {
            warn!(
                "Dropping {instruction:?} for {} surface: {err}",
                self.surface.label()
            );
        }
    }

    /// Forward a renderer confirmation to the host verbatim. Known labels
    /// also update what the bridge considers applied.
    pub fn confirm(&mut self, label: &str) -> Option<OverlayKind> {
        let kind = OverlayKind::from_label(label);
        if let Some(kind) = kind {
            self.applied = Some(kind);
        }
        self.report(StatusReport::new(label));
        kind
    }

    /// Queue a status line for the host.
    pub fn report(&self, report: StatusReport) {
        if self.host_tx.send(OutboundMessage::StatusChanged(report)).is_err() {
            warn!("Status writer is gone, dropping report");
        }
    }

    pub fn into_surface(self) -> Box<dyn ContentSurface> {
        self.surface
    }
}
