//! JSON-lines messages exchanged with the renderer process.

use serde::{Deserialize, Serialize};

use crate::overlay::OverlayKind;

// ============================================================================
// Instructions (window shell → renderer)
// ============================================================================

/// Instructions sent to the renderer, one JSON object per line.
///
/// Serialized with an `"action"` tag field for type discrimination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action")]
pub enum RendererInstruction {
    /// Sent once before anything else with the computed window geometry
    #[serde(rename = "configure")]
    Configure {
        width: u32,
        height: u32,
        zoom_factor: f64,
        resizable: bool,
        transparent: bool,
    },

    /// Overlay panel vs. standalone application
    #[serde(rename = "set_app_type")]
    SetAppType { app_type: AppType },

    /// Switch the displayed overlay panel
    #[serde(rename = "set_ui_type")]
    SetUiType {
        #[serde(serialize_with = "serialize_kind")]
        ui_type: OverlayKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppType {
    Overlay,
    App,
}

fn serialize_kind<S: serde::Serializer>(kind: &OverlayKind, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(kind.as_str())
}

impl RendererInstruction {
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ============================================================================
// Events (renderer → window shell)
// ============================================================================

/// Events reported by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event")]
pub enum RendererEvent {
    /// The renderer has visually settled into the given panel
    #[serde(rename = "update_status")]
    UpdateStatus { status: String },

    /// Page loaded and ready to accept instructions
    #[serde(rename = "ready")]
    Ready,
}

/// Parse one renderer output line. Blank or foreign lines yield `None`.
pub fn parse_renderer_event(line: &str) -> Option<RendererEvent> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}
