//! World/screen projection for the navigation map.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::MAP_PIXELS_PER_UNIT;

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Projection from world units (controller coordinates) to canvas pixels.
///
/// The map origin is the canvas origin; `scale` is screen pixels per world
/// unit and differs between layouts.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { scale: MAP_PIXELS_PER_UNIT }
    }
}

impl Camera {
    #[must_use]
    pub fn with_scale(scale: f64) -> Self {
        Self { scale }
    }

    /// Canvas pixels to world units.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(screen.x / self.scale, screen.y / self.scale)
    }

    /// World units to canvas pixels.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(world.x * self.scale, world.y * self.scale)
    }
}
