//! Field of view calculation from window geometry.
//!
//! The game renders with a fixed horizontal FoV regardless of the window
//! shape. Wider windows should see more, so the FoV is rescaled from a
//! baseline ratio through a constant viewing distance:
//!
//! ```text
//! d   = BASE_SCREEN_RATIO / tan(BASE_FOV / 2)
//! fov = 2 * atan((width / height) / d)
//! ```

use std::f32::consts::PI;

/// The client's built-in field of view (90 degrees)
pub const DEFAULT_FOV: f32 = PI / 2.0;

/// Baseline FoV used by later clients for a 16:9 screen (radians)
pub const BASE_FOV: f64 = 1.925;

/// Screen ratio the baseline FoV was tuned for
pub const BASE_SCREEN_RATIO: f64 = 16.0 / 9.0;

/// Lower bound of a usable FoV (30 degrees)
pub const MIN_FOV: f32 = 30.0 * PI / 180.0;

/// Upper bound of a usable FoV (170 degrees)
pub const MAX_FOV: f32 = 170.0 * PI / 180.0;

/// Viewing distance implied by the baseline ratio and FoV
pub fn base_view_distance() -> f64 {
    BASE_SCREEN_RATIO / (BASE_FOV / 2.0).tan()
}

/// Calculate the FoV matching a window's client area.
///
/// Returns [`DEFAULT_FOV`] when either dimension is zero (minimised or not
/// yet laid out), otherwise the rescaled baseline FoV clamped to
/// `[MIN_FOV, MAX_FOV]`.
pub fn calculate_optimal_fov(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        return DEFAULT_FOV;
    }

    let ratio = f64::from(width) / f64::from(height);
    let fov = 2.0 * (ratio / base_view_distance()).atan();

    (fov as f32).clamp(MIN_FOV, MAX_FOV)
}
