//! Default gesture thresholds for the side menu.
//!
//! Values are in logical (CSS) pixels and milliseconds. They are the defaults
//! of [`DrawerSettings`](crate::DrawerSettings) and can be overridden per panel.

/// Distance in pixels a pointer must travel along an axis before the gesture
/// is classified as a horizontal drag or a vertical scroll.
///
/// Small enough to feel immediate, large enough to ignore finger jitter on
/// touch down.
pub const SWIPE_THRESHOLD: f32 = 5.0;

/// Gestures released within this many milliseconds are treated as flicks:
/// direction and distance decide, not where the panel ended up.
pub const SWIPE_TOGGLE_DURATION_MS: u64 = 200;

/// Minimum horizontal travel in pixels for a flick to open or close the panel.
pub const SWIPE_TOGGLE_DISTANCE: f32 = 50.0;

/// The bounds guard allows the panel's leading edge to overshoot the fully
/// open position by at most this many pixels.
pub const OPEN_OVERSHOOT_TOLERANCE: f32 = 1.0;
