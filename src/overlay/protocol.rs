//! Line protocol spoken with the host daemon.
//!
//! Inbound lines look like `cmd:<name>`, outbound lines like `stat:<label>`.
//! Anything that does not parse as a command is ignored.

use std::fmt;

pub const COMMAND_PREFIX: &str = "cmd:";
pub const STATUS_PREFIX: &str = "stat:";

// ============================================================================
// Overlay Kind
// ============================================================================

/// What the overlay window is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverlayKind {
    #[default]
    Closed,
    Qam,
    Expanded,
    Notification,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 4] = [
        OverlayKind::Closed,
        OverlayKind::Qam,
        OverlayKind::Expanded,
        OverlayKind::Notification,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayKind::Closed => "closed",
            OverlayKind::Qam => "qam",
            OverlayKind::Expanded => "expanded",
            OverlayKind::Notification => "notification",
        }
    }

    /// Case-sensitive, matching what the renderer reports.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "closed" => Some(OverlayKind::Closed),
            "qam" => Some(OverlayKind::Qam),
            "expanded" => Some(OverlayKind::Expanded),
            "notification" => Some(OverlayKind::Notification),
            _ => None,
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Commands (host → window)
// ============================================================================

/// Commands the host can send over stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    OpenQam,
    /// `open_overlay` and `open_expanded` both land here.
    OpenExpanded,
    OpenNotification,
    Close,
    CloseNow,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::OpenQam,
        Command::OpenExpanded,
        Command::OpenNotification,
        Command::Close,
        Command::CloseNow,
    ];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "open_qam" => Some(Command::OpenQam),
            "open_overlay" | "open_expanded" => Some(Command::OpenExpanded),
            "open_notification" => Some(Command::OpenNotification),
            "close" => Some(Command::Close),
            "close_now" => Some(Command::CloseNow),
            _ => None,
        }
    }
}

/// Parse one inbound line. Returns `None` for anything that is not a known command.
pub fn parse_command(line: &str) -> Option<Command> {
    if !line.starts_with(COMMAND_PREFIX) {
        return None;
    }
    let name = line.trim().strip_prefix(COMMAND_PREFIX)?;
    Command::from_name(name)
}

// ============================================================================
// Status Reports (window → host)
// ============================================================================

/// A status label headed for the host. Renderer labels are forwarded verbatim,
/// so this is not restricted to known kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    label: String,
}

impl StatusReport {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Wire form, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!("{STATUS_PREFIX}{}", self.label)
    }
}

impl From<OverlayKind> for StatusReport {
    fn from(kind: OverlayKind) -> Self {
        StatusReport::new(kind.as_str())
    }
}
