//! Overlay visibility state and the command transition table.

use super::protocol::{Command, OverlayKind};
use tracing::debug;

/// Result of applying one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub previous: OverlayKind,
    pub next: OverlayKind,
    /// Status the host must see right away, without waiting for the renderer.
    pub immediate_status: Option<OverlayKind>,
}

/// Pure transition function. Repeating an open command for the kind that is
/// already showing closes it; notifications never toggle.
pub fn transition(current: OverlayKind, command: Command) -> Transition {
    let (next, immediate_status) = match command {
        Command::OpenQam => {
            if current == OverlayKind::Qam {
                debug!("QAM is currently open, closing");
                (OverlayKind::Closed, None)
            } else {
                (OverlayKind::Qam, None)
            }
        }
        Command::OpenExpanded => {
            if current == OverlayKind::Expanded {
                debug!("Currently expanded, closing");
                (OverlayKind::Closed, None)
            } else {
                (OverlayKind::Expanded, None)
            }
        }
        Command::OpenNotification => (OverlayKind::Notification, None),
        Command::Close => (OverlayKind::Closed, None),
        Command::CloseNow => (OverlayKind::Closed, Some(OverlayKind::Closed)),
    };
    Transition {
        previous: current,
        next,
        immediate_status,
    }
}

/// Holder of the current command-driven kind. Only the owning session mutates it.
#[derive(Debug, Default)]
pub struct OverlayState {
    current: OverlayKind,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> OverlayKind {
        self.current
    }

    pub fn apply(&mut self, command: Command) -> Transition {
        let result = transition(self.current, command);
        self.current = result.next;
        result
    }

    /// Adopt a kind the renderer confirmed it is displaying.
    pub fn reconcile(&mut self, confirmed: OverlayKind) {
        if self.current != confirmed {
            debug!(
                "Renderer confirmed '{confirmed}' while intent was '{}'",
                self.current
            );
        }
        self.current = confirmed;
    }
}
