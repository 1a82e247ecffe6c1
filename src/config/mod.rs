//! Command-line parsing and validation helpers.

#[cfg(test)]
mod tests;
mod validation;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::launch::{APP_WINDOW_HEIGHT, APP_WINDOW_WIDTH};

pub const MAX_DISPLAY_DIMENSION: u32 = 16_384;
pub const MAX_RENDERER_ARGS: usize = 64;

/// CLI options for the overlay shell. Launch flags mirror the environment
/// variables the Steam session sets.
#[derive(Debug, Parser, Clone)]
#[command(about = "HHD overlay window shell", author, version)]
pub struct AppConfig {
    /// Renderer process that displays the settings UI
    #[arg(long = "renderer-cmd", env = "HHD_RENDERER_CMD", value_name = "CMD")]
    pub renderer_cmd: Option<String>,

    /// Extra arguments to pass to the renderer (repeatable)
    #[arg(
        long = "renderer-arg",
        action = ArgAction::Append,
        allow_hyphen_values = true,
        value_name = "ARG"
    )]
    pub renderer_args: Vec<String>,

    /// Run as a host-controlled overlay panel
    #[arg(
        long = "overlay",
        env = "STEAM_OVERLAY",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub overlay: bool,

    /// Running under Steam's gamepad UI
    #[arg(
        long = "steam-ui",
        env = "SteamGamepadUI",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub steam_ui: bool,

    /// Use the panel's native resolution instead of downscaling
    #[arg(
        long = "native-resolution",
        env = "NATIVE_RESOLUTION",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub native_resolution: bool,

    /// Primary display width in pixels
    #[arg(long = "display-width", default_value_t = APP_WINDOW_WIDTH)]
    pub display_width: u32,

    /// Primary display height in pixels
    #[arg(long = "display-height", default_value_t = APP_WINDOW_HEIGHT)]
    pub display_height: u32,

    /// Enable verbose logging
    #[arg(long = "logs", env = "HHD_OVERLAY_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all logging (overrides --logs)
    #[arg(long = "no-logs", env = "HHD_OVERLAY_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file", env = "HHD_OVERLAY_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long = "log-json", default_value_t = false)]
    pub log_json: bool,
}
