//! Navigation model: waypoints, planned path samples, and the vehicle pose.
//!
//! The controller is the authority for all three. Each field is replaced
//! wholesale, either by a server push or by a committed local drag, so a
//! frame drawn between two events always sees a consistent collection.
//! Waypoints are addressed by their position in the list; a removal shifts
//! every later index down by one.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use frames::{NavPose, WaypointDto};

use crate::camera::Point;

/// A navigation target point in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    /// The waypoint the vehicle is currently driving towards.
    pub is_target: bool,
}

impl Waypoint {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<&WaypointDto> for Waypoint {
    fn from(dto: &WaypointDto) -> Self {
        Self { x: dto.x, y: dto.y, is_target: dto.is_target }
    }
}

/// Vehicle position and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    /// Heading in degrees, 0 = east, counter-clockwise.
    pub heading: f64,
    /// Heading the planner is steering towards, in degrees.
    pub target_heading: Option<f64>,
    /// Index into the path samples nearest the vehicle.
    pub closest_path_index: Option<usize>,
}

impl Pose {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<&NavPose> for Pose {
    fn from(msg: &NavPose) -> Self {
        Self {
            x: msg.x,
            y: msg.y,
            heading: msg.h,
            target_heading: msg.th,
            closest_path_index: msg.closest_index(),
        }
    }
}

/// Client-side copy of the controller's navigation state.
#[derive(Debug, Clone, Default)]
pub struct NavModel {
    waypoints: Vec<Waypoint>,
    path: Vec<Point>,
    pose: Pose,
}

impl NavModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Replacement ---

    pub fn apply_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    pub fn apply_waypoints(&mut self, waypoints: Vec<Waypoint>) {
        self.waypoints = waypoints;
    }

    pub fn apply_path(&mut self, path: Vec<Point>) {
        self.path = path;
    }

    /// Replace the waypoint list with a copy in which `index` sits at `world`.
    ///
    /// Returns `false` and leaves the list untouched when `index` no longer
    /// exists (the list shrank while the edit was in flight).
    pub fn commit_waypoint(&mut self, index: usize, world: Point) -> bool {
        if index >= self.waypoints.len() {
            return false;
        }
        let mut next = self.waypoints.clone();
        next[index].x = world.x;
        next[index].y = world.y;
        self.waypoints = next;
        true
    }

    // --- Queries ---

    #[must_use]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    #[must_use]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// The path sample the vehicle is tracking, if the current pose names one
    /// that exists in the current path.
    #[must_use]
    pub fn closest_path_point(&self) -> Option<Point> {
        self.pose
            .closest_path_index
            .and_then(|i| self.path.get(i))
            .copied()
    }
}
