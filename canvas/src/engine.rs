use frames::{NavPose, Outbound, WaypointDto};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::hit;
use crate::input::{Button, InputState, Modifiers};
use crate::nav::{NavModel, Pose, Waypoint};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Send a command to the controller.
    Send(Outbound),
    /// Change the CSS cursor over the map.
    SetCursor(&'static str),
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Surface` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub nav: NavModel,
    pub camera: Camera,
    pub input: InputState,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine projecting with the given pixels-per-unit ratio.
    #[must_use]
    pub fn with_scale(scale: f64) -> Self {
        Self { camera: Camera::with_scale(scale), ..Self::default() }
    }

    // --- Data inputs ---

    /// Apply a server push: vehicle pose.
    pub fn apply_pose(&mut self, msg: &NavPose) {
        self.nav.apply_pose(Pose::from(msg));
    }

    /// Apply a server push: full waypoint list.
    ///
    /// Indices only identify a waypoint while the list length holds, so a
    /// push that changes the length abandons any drag. A same-length push
    /// keeps the drag and its commit overwrites the pushed entry.
    pub fn apply_waypoints(&mut self, waypoints: &[WaypointDto]) -> Vec<Action> {
        self.nav.apply_waypoints(waypoints.iter().map(Waypoint::from).collect());
        if let InputState::DraggingWaypoint { index, list_len, .. } = self.input {
            if list_len != self.nav.waypoints().len() {
                log_drag_dropped(index);
                self.input = InputState::Idle;
                return vec![Action::SetCursor("default")];
            }
        }
        Vec::new()
    }

    /// Apply a server push: planned path samples.
    pub fn apply_route(&mut self, curve_points: &[[f64; 2]]) {
        self.nav.apply_path(curve_points.iter().map(|[x, y]| Point::new(*x, *y)).collect());
    }

    // --- Input events ---

    /// Start dragging the waypoint under the pointer, or remove it when Ctrl is held.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let Some(index) = hit::waypoint_at(screen_pt, self.nav.waypoints(), &self.camera) else {
            return Vec::new();
        };

        if modifiers.ctrl {
            self.input = InputState::Idle;
            return vec![Action::Send(Outbound::waypoint_remove(index))];
        }

        let waypoints = self.nav.waypoints();
        self.input =
            InputState::DraggingWaypoint { index, world: waypoints[index].position(), list_len: waypoints.len() };
        vec![Action::SetCursor("grabbing")]
    }

    /// Track the pointer while a drag is active. Nothing is sent.
    pub fn on_pointer_move(&mut self, screen_pt: Point) {
        if let InputState::DraggingWaypoint { world, .. } = &mut self.input {
            *world = self.camera.screen_to_world(screen_pt);
        }
    }

    /// Finish a drag: commit locally and send a `move` for the original index.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let InputState::DraggingWaypoint { index, world, .. } = std::mem::take(&mut self.input) else {
            return Vec::new();
        };

        if !self.nav.commit_waypoint(index, world) {
            log_drag_dropped(index);
            return vec![Action::SetCursor("default")];
        }

        vec![
            Action::Send(Outbound::waypoint_move(index, world.x, world.y)),
            Action::SetCursor("default"),
        ]
    }

    /// The pointer left the map; treated as a release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    /// Ask the controller to append a waypoint at the vehicle's position.
    ///
    /// The list is not touched locally; the controller's next
    /// `nav_waypoints` push carries the new entry.
    #[must_use]
    pub fn create_waypoint_at_pose(&self) -> Action {
        let pose = self.nav.pose();
        Action::Send(Outbound::NavCreateWaypoint { x: pose.x, y: pose.y })
    }

    // --- Queries ---

    /// The in-progress drag as `(index, world position)`, if any.
    #[must_use]
    pub fn drag(&self) -> Option<(usize, Point)> {
        self.input.drag()
    }
}

fn log_drag_dropped(index: usize) {
    log::debug!("waypoint list changed under drag of #{index}; edit dropped");
}

/// The browser half of the map: owns the canvas element and its 2D context.
pub struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Surface {
    /// Bind to a canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Convert a `MouseEvent` client position to canvas-local CSS pixels.
    #[must_use]
    pub fn local_point(&self, client_x: i32, client_y: i32) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        Point::new(f64::from(client_x) - rect.left(), f64::from(client_y) - rect.top())
    }

    /// Draw the current model state.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self, core: &EngineCore) -> Result<(), JsValue> {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        render::draw(&self.ctx, core, width, height)
    }
}
