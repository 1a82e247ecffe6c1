//! Overlay window control channel.
//!
//! The host daemon drives the overlay over a plain line protocol on
//! stdin/stdout so it can open, close, and re-target the panel.
//!
//! Architecture:
//! - Host reader thread: reads `cmd:` lines, forwards parsed commands
//! - Renderer reader thread: forwards `update_status` reports
//! - Session loop: single owner of the overlay state, consumes both in order
//! - Writer thread: serializes `stat:` lines to stdout
//!
//! Protocol:
//! - Commands (host → window): `cmd:<name>`
//! - Status (window → host): `stat:<label>`

mod bridge;
mod channel;
mod protocol;
mod session;
mod state;


pub use bridge::UiBridge;
pub use channel::{spawn_host_reader, spawn_status_writer, InboundEvent, OutboundMessage};
pub use protocol::{
    parse_command, Command, OverlayKind, StatusReport, COMMAND_PREFIX, STATUS_PREFIX,
};
pub use session::{run_overlay_loop, OverlaySession};
pub use state::{transition, OverlayState, Transition};
