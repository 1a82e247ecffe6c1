//! Window shell entrypoint for the handheld settings UI.
//!
//! Launched normally it starts the renderer as a regular application window.
//! With `STEAM_OVERLAY` set it becomes a host-controlled overlay panel and
//! speaks the `cmd:`/`stat:` line protocol on stdin/stdout.

use anyhow::Result;
use hhd_overlay::{config::AppConfig, init_tracing, shell};
use tracing::{error, info};

fn main() -> Result<()> {
    let config = AppConfig::parse_args()?;
    init_tracing(&config);
    info!("=== HHD overlay shell started ===");

    let result = shell::run(&config);

    if let Err(ref e) = result {
        error!("Exit with error: {e:#}");
    }
    info!("=== HHD overlay shell exiting ===");
    result
}
