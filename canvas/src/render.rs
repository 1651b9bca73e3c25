//! Rendering: draws the navigation map to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads the engine's model and drag state and produces pixels; it never
//! mutates application state. The host calls it on a fixed interval, so a
//! frame always reflects whatever the last push or gesture left behind.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Surface::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Camera, Point};
use crate::consts::{
    DOT_RADIUS_PX, HEADING_INDICATOR_PX, HEADING_SCREEN_OFFSET_DEG, PATH_MARKER_RADIUS_PX, POSITION_LABEL_OFFSET_PX,
    WAYPOINT_LABEL_OFFSET_PX,
};
use crate::engine::EngineCore;

const INK: &str = "#000000";
const PATH_COLOR: &str = "#808080";
const TARGET_COLOR: &str = "#1E90FF";
const CLOSEST_COLOR: &str = "#ff0000";
const LABEL_FONT: &str = "12px Arial";
const TARGET_HEADING_DASH_PX: f64 = 3.0;

/// Draw the full map: path, waypoints, vehicle, heading indicators.
///
/// `width` and `height` are the canvas size in pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore, width: f64, height: f64) -> Result<(), JsValue> {
    let camera = &core.camera;
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_line_width(1.0);

    draw_path(ctx, core.nav.path(), camera)?;
    draw_waypoints(ctx, core, camera)?;
    draw_vehicle(ctx, core, camera)?;
    Ok(())
}

fn draw_path(ctx: &CanvasRenderingContext2d, path: &[Point], camera: &Camera) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(PATH_COLOR);
    for sample in path {
        let pt = camera.world_to_screen(*sample);
        ctx.begin_path();
        ctx.arc(pt.x, pt.y, PATH_MARKER_RADIUS_PX, 0.0, 2.0 * PI)?;
        ctx.stroke();
    }
    Ok(())
}

fn draw_waypoints(ctx: &CanvasRenderingContext2d, core: &EngineCore, camera: &Camera) -> Result<(), JsValue> {
    let drag = core.drag();
    for (i, waypoint) in core.nav.waypoints().iter().enumerate() {
        let world = match drag {
            Some((index, at)) if index == i => at,
            _ => waypoint.position(),
        };
        let pt = camera.world_to_screen(world);
        let color = if waypoint.is_target { TARGET_COLOR } else { INK };

        ctx.set_fill_style_str(color);
        ctx.begin_path();
        ctx.arc(pt.x, pt.y, DOT_RADIUS_PX, 0.0, 2.0 * PI)?;
        ctx.fill();
        ctx.fill_text(&waypoint_label(i), pt.x, pt.y - WAYPOINT_LABEL_OFFSET_PX)?;
    }
    Ok(())
}

fn draw_vehicle(ctx: &CanvasRenderingContext2d, core: &EngineCore, camera: &Camera) -> Result<(), JsValue> {
    let pose = core.nav.pose();
    let origin = camera.world_to_screen(pose.position());

    ctx.set_fill_style_str(INK);
    ctx.fill_text(&position_label(pose.x, pose.y), origin.x, origin.y + POSITION_LABEL_OFFSET_PX)?;
    ctx.begin_path();
    ctx.arc(origin.x, origin.y, DOT_RADIUS_PX, 0.0, 2.0 * PI)?;
    ctx.fill();

    ctx.set_stroke_style_str(INK);
    stroke_segment(ctx, origin, heading_tip(origin, pose.heading));

    if let Some(target) = pose.target_heading {
        let dash = js_sys::Array::new();
        dash.push(&TARGET_HEADING_DASH_PX.into());
        dash.push(&TARGET_HEADING_DASH_PX.into());
        ctx.set_line_dash(&dash)?;
        ctx.set_stroke_style_str(TARGET_COLOR);
        stroke_segment(ctx, origin, heading_tip(origin, target));
        ctx.set_line_dash(&js_sys::Array::new())?;
    }

    if let Some(closest) = core.nav.closest_path_point() {
        ctx.set_stroke_style_str(CLOSEST_COLOR);
        stroke_segment(ctx, origin, camera.world_to_screen(closest));
    }
    Ok(())
}

fn stroke_segment(ctx: &CanvasRenderingContext2d, from: Point, to: Point) {
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke();
}

/// End point of a heading indicator drawn from `origin`.
///
/// Headings are degrees with 0 = east, counter-clockwise; the screen offset
/// rotates them so that 0 points up on the map.
#[must_use]
pub fn heading_tip(origin: Point, heading_deg: f64) -> Point {
    let rad = (heading_deg + HEADING_SCREEN_OFFSET_DEG).to_radians();
    Point::new(
        origin.x + rad.cos() * HEADING_INDICATOR_PX,
        origin.y + rad.sin() * HEADING_INDICATOR_PX,
    )
}

/// Operator readout of the vehicle position.
#[must_use]
pub fn position_label(x: f64, y: f64) -> String {
    format!("{x:.2}, {y:.2}")
}

/// One-based label drawn above waypoint `index`.
#[must_use]
pub fn waypoint_label(index: usize) -> String {
    format!("#{}", index + 1)
}
