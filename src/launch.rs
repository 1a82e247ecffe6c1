//! Launch profile and window geometry.
//!
//! Under Steam's gamepad UI or as an overlay the window is sized relative to a
//! Steam Deck panel (1280 wide) and zoomed so content stays readable on denser
//! screens. A plain desktop launch gets a fixed 1280x800 window.

use crate::config::AppConfig;

const REFERENCE_WIDTH: f64 = 1280.0;
const ZOOM_RATIO: f64 = 1.1;
const MAX_RATIO: f64 = 2.0;
const RESOLUTION_BOOST: f64 = 1.3;
const NATIVE_ZOOM_CAP: f64 = 3.0;

pub const APP_WINDOW_WIDTH: u32 = 1280;
pub const APP_WINDOW_HEIGHT: u32 = 800;

/// Environment-derived launch flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaunchProfile {
    pub steam_ui: bool,
    pub overlay: bool,
    pub native_resolution: bool,
}

impl LaunchProfile {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            steam_ui: config.steam_ui,
            overlay: config.overlay,
            native_resolution: config.native_resolution,
        }
    }

    fn embedded(&self) -> bool {
        self.steam_ui || self.overlay
    }
}

/// Size and zoom handed to the renderer before anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowGeometry {
    pub width: u32,
    pub height: u32,
    pub zoom_factor: f64,
    pub resizable: bool,
    pub transparent: bool,
}

pub fn window_geometry(
    profile: &LaunchProfile,
    display_width: u32,
    display_height: u32,
) -> WindowGeometry {
    if !profile.embedded() {
        return WindowGeometry {
            width: APP_WINDOW_WIDTH,
            height: APP_WINDOW_HEIGHT,
            zoom_factor: 1.0,
            resizable: true,
            transparent: false,
        };
    }

    let width = f64::from(display_width);
    let height = f64::from(display_height);

    let (width, height, zoom_factor) = if profile.native_resolution {
        // Panel resolution, with a bit of zoom even on a deck-sized screen.
        let zoom = (ZOOM_RATIO * width / REFERENCE_WIDTH).min(NATIVE_ZOOM_CAP);
        (width, height, zoom)
    } else {
        // Render 30% denser than the deck and make up the rest with zoom.
        let mut ratio = width / REFERENCE_WIDTH / RESOLUTION_BOOST;
        let mut zoom = ZOOM_RATIO * RESOLUTION_BOOST;
        if ratio < 1.0 {
            ratio = 1.0;
        } else if ratio > MAX_RATIO {
            zoom = round_tenths(ZOOM_RATIO * ratio / MAX_RATIO);
            ratio = MAX_RATIO;
        }
        ((width / ratio).round(), (height / ratio).round(), zoom)
    };

    WindowGeometry {
        width: width as u32,
        height: height as u32,
        zoom_factor,
        resizable: false,
        transparent: profile.overlay,
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn desktop_launch_uses_fixed_window() {
        let geometry = window_geometry(&LaunchProfile::default(), 3840, 2160);
        assert_eq!((geometry.width, geometry.height), (1280, 800));
        assert!(close(geometry.zoom_factor, 1.0));
        assert!(geometry.resizable);
        assert!(!geometry.transparent);
    }

    #[test]
    fn deck_panel_keeps_native_size_with_boosted_zoom() {
        let profile = LaunchProfile {
            overlay: true,
            ..LaunchProfile::default()
        };
        let geometry = window_geometry(&profile, 1280, 800);
        assert_eq!((geometry.width, geometry.height), (1280, 800));
        assert!(close(geometry.zoom_factor, ZOOM_RATIO * RESOLUTION_BOOST));
        assert!(!geometry.resizable);
        assert!(geometry.transparent);
    }

    #[test]
    fn mid_density_panel_is_downscaled() {
        let profile = LaunchProfile {
            steam_ui: true,
            ..LaunchProfile::default()
        };
        // 1920 / 1280 / 1.3 ≈ 1.154
        let geometry = window_geometry(&profile, 1920, 1200);
        assert_eq!((geometry.width, geometry.height), (1664, 1040));
        assert!(close(geometry.zoom_factor, ZOOM_RATIO * RESOLUTION_BOOST));
        assert!(!geometry.transparent);
    }

    #[test]
    fn dense_panel_caps_ratio_and_raises_zoom() {
        let profile = LaunchProfile {
            steam_ui: true,
            ..LaunchProfile::default()
        };
        // 3840 / 1280 / 1.3 ≈ 2.308, capped at 2.
        let geometry = window_geometry(&profile, 3840, 2160);
        assert_eq!((geometry.width, geometry.height), (1920, 1080));
        assert!(close(geometry.zoom_factor, 1.3));
    }

    #[test]
    fn native_resolution_scales_zoom_with_width() {
        let profile = LaunchProfile {
            overlay: true,
            native_resolution: true,
            ..LaunchProfile::default()
        };
        let geometry = window_geometry(&profile, 1920, 1080);
        assert_eq!((geometry.width, geometry.height), (1920, 1080));
        assert!(close(geometry.zoom_factor, 1.1 * 1.5));

        let geometry = window_geometry(&profile, 7680, 4320);
        assert!(close(geometry.zoom_factor, NATIVE_ZOOM_CAP));
    }
}
