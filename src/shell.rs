//! Startup sequence tying configuration, the renderer, and overlay control together.

use anyhow::{Context, Result};
use crossbeam_channel::Sender;
use std::io::{self, BufReader};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::launch::{window_geometry, LaunchProfile, WindowGeometry};
use crate::overlay::{
    run_overlay_loop, spawn_host_reader, spawn_status_writer, InboundEvent, OverlaySession,
};
use crate::surface::{
    AppType, ContentSurface, DetachedSurface, ProcessSurface, RendererInstruction,
};

/// Attach the configured renderer, or a detached surface when there is none.
pub fn attach_surface(
    config: &AppConfig,
    events: Option<Sender<InboundEvent>>,
) -> Result<Box<dyn ContentSurface>> {
    match &config.renderer_cmd {
        Some(cmd) => {
            let surface = ProcessSurface::spawn(cmd, &config.renderer_args, events)
                .with_context(|| format!("failed to start renderer '{cmd}'"))?;
            Ok(Box::new(surface))
        }
        None => {
            warn!("No renderer configured; UI instructions will be dropped");
            Ok(Box::new(DetachedSurface))
        }
    }
}

/// Hand the renderer its window geometry. Failures are not fatal.
pub fn configure_surface(surface: &mut dyn ContentSurface, geometry: &WindowGeometry) {
    let instruction = RendererInstruction::Configure {
        width: geometry.width,
        height: geometry.height,
        zoom_factor: geometry.zoom_factor,
        resizable: geometry.resizable,
        transparent: geometry.transparent,
    };
    if let Err(err) = surface.deliver(&instruction) {
        warn!("Could not configure {} surface: {err}", surface.label());
    }
}

pub fn run(config: &AppConfig) -> Result<()> {
    let profile = LaunchProfile::from_config(config);
    let geometry = window_geometry(&profile, config.display_width, config.display_height);
    info!(
        "Launching {}x{} (zoom {}, overlay: {}, steam ui: {})",
        geometry.width, geometry.height, geometry.zoom_factor, profile.overlay, profile.steam_ui
    );

    if profile.overlay {
        run_overlay_mode(config, &geometry)
    } else {
        run_app_mode(config, &geometry)
    }
}

/// Standalone window: no line protocol, the renderer runs until it exits.
fn run_app_mode(config: &AppConfig, geometry: &WindowGeometry) -> Result<()> {
    let mut surface = attach_surface(config, None)?;
    configure_surface(surface.as_mut(), geometry);
    if let Err(err) = surface.deliver(&RendererInstruction::SetAppType {
        app_type: AppType::App,
    }) {
        warn!("Could not set app type: {err}");
    }
    wait_for_renderer(surface.as_mut());
    Ok(())
}

/// Host-controlled overlay: serve the stdin/stdout protocol until the host
/// and the renderer have both hung up.
fn run_overlay_mode(config: &AppConfig, geometry: &WindowGeometry) -> Result<()> {
    info!("Overlay mode active, attaching host channel");
    let (event_tx, event_rx) = crossbeam_channel::unbounded();
    let (host_tx, host_rx) = crossbeam_channel::unbounded();

    let mut surface = attach_surface(config, Some(event_tx.clone()))?;
    configure_surface(surface.as_mut(), geometry);

    let writer = spawn_status_writer(host_rx, io::stdout());
    // Moves the last local sender; the loop ends once every producer is gone.
    let _reader = spawn_host_reader(BufReader::new(io::stdin()), event_tx);

    let mut session = OverlaySession::new(surface, host_tx);
    session.start();
    run_overlay_loop(&mut session, &event_rx);

    let mut surface = session.into_surface();
    if writer.join().is_err() {
        warn!("Status writer thread panicked");
    }
    wait_for_renderer(surface.as_mut());
    Ok(())
}

fn wait_for_renderer(surface: &mut dyn ContentSurface) {
    if let Some(status) = surface.wait() {
        info!("Renderer {} exited ({status})", surface.label());
    }
}
