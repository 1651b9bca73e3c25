//! Navigation map engine for the rover operator console.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! client's view of navigation data: the waypoint list, the planned path, the
//! vehicle pose, the waypoint drag gesture, and the per-frame map drawing. The
//! host layer feeds it controller pushes and pointer events, and forwards the
//! resulting [`engine::Action`]s to the socket.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EngineCore`] plus the browser [`engine::Surface`] |
//! | [`nav`] | Navigation model: waypoints, path samples, pose |
//! | [`camera`] | World/screen projection |
//! | [`input`] | Pointer input types and the drag state machine |
//! | [`hit`] | Waypoint hit-testing |
//! | [`render`] | Map rendering |
//! | [`consts`] | Shared numeric constants (scale, marker sizes, hit slop) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod hit;
pub mod input;
pub mod nav;
pub mod render;
