//! Shared numeric constants for the canvas crate.

// ── Projection ──────────────────────────────────────────────────

/// Default screen pixels per world unit on the navigation map.
pub const MAP_PIXELS_PER_UNIT: f64 = 40.0;

/// Offset applied to a heading before drawing so that 0° points up on screen.
pub const HEADING_SCREEN_OFFSET_DEG: f64 = -90.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Half-size of the square hit box around a waypoint, in screen pixels.
pub const WAYPOINT_HIT_PX: f64 = 5.0;

// ── Markers ─────────────────────────────────────────────────────

/// Radius of the vehicle and waypoint dots, in screen pixels.
pub const DOT_RADIUS_PX: f64 = 3.5;

/// Radius of a path-sample marker, in screen pixels.
pub const PATH_MARKER_RADIUS_PX: f64 = 0.5;

/// Length of the heading and target-heading indicators, in screen pixels.
pub const HEADING_INDICATOR_PX: f64 = 15.0;

/// Vertical offset of the position readout below the vehicle.
pub const POSITION_LABEL_OFFSET_PX: f64 = 15.0;

/// Vertical offset of the `#n` label above a waypoint.
pub const WAYPOINT_LABEL_OFFSET_PX: f64 = 10.0;
