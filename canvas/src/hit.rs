#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::consts::WAYPOINT_HIT_PX;
use crate::nav::Waypoint;

/// Index of the waypoint under `screen_pt`, if any.
///
/// Each waypoint owns a square box of `WAYPOINT_HIT_PX` pixels in each
/// direction around its projected position. Waypoints are tested in list
/// order and the first match wins, even when a later one is nearer.
#[must_use]
pub fn waypoint_at(screen_pt: Point, waypoints: &[Waypoint], camera: &Camera) -> Option<usize> {
    waypoints.iter().position(|wp| {
        let projected = camera.world_to_screen(wp.position());
        (projected.x - screen_pt.x).abs() < WAYPOINT_HIT_PX && (projected.y - screen_pt.y).abs() < WAYPOINT_HIT_PX
    })
}
