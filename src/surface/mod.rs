//! Boundary to the window's content surface (the renderer).
//!
//! The shell never renders anything itself. It hands the renderer one
//! instruction at a time and listens for the renderer's own status reports.

mod process;
mod wire;

pub use process::ProcessSurface;
pub use wire::{parse_renderer_event, AppType, RendererEvent, RendererInstruction};

use std::fmt;
use std::process::ExitStatus;

/// Errors surfaced when an instruction cannot be handed to the renderer.
#[derive(Debug)]
pub enum SurfaceError {
    /// No renderer was ever attached.
    Detached,
    /// The renderer existed but is gone.
    Closed(Option<ExitStatus>),
    Encode(serde_json::Error),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Detached => f.write_str("no renderer attached"),
            SurfaceError::Closed(Some(status)) => write!(f, "renderer exited ({status})"),
            SurfaceError::Closed(None) => f.write_str("renderer input closed"),
            SurfaceError::Encode(err) => write!(f, "instruction encoding failed: {err}"),
        }
    }
}

impl std::error::Error for SurfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurfaceError::Encode(err) => Some(err),
            _ => None,
        }
    }
}

/// A place instructions can be delivered to. Delivery is fire-and-forget:
/// returning `Ok` means the instruction was handed off, not that it was shown.
pub trait ContentSurface: Send {
    fn deliver(&mut self, instruction: &RendererInstruction) -> Result<(), SurfaceError>;

    /// Short name used in logs.
    fn label(&self) -> &str;

    /// Block until the renderer goes away on its own. Surfaces without a
    /// process return immediately.
    fn wait(&mut self) -> Option<ExitStatus> {
        None
    }
}

/// Surface used when no renderer is configured. Every delivery fails safely.
#[derive(Debug, Default)]
pub struct DetachedSurface;

impl ContentSurface for DetachedSurface {
    fn deliver(&mut self, _instruction: &RendererInstruction) -> Result<(), SurfaceError> {
        Err(SurfaceError::Detached)
    }

    fn label(&self) -> &str {
        "detached"
    }
}
