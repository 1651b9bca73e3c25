#![allow(clippy::float_cmp)]

use super::*;

fn wp(x: f64, y: f64) -> Waypoint {
    Waypoint { x, y, is_target: false }
}

fn pose_with_index(index: Option<usize>) -> Pose {
    Pose { x: 1.0, y: 1.0, heading: 0.0, target_heading: None, closest_path_index: index }
}

#[test]
fn new_model_is_empty_at_origin() {
    let nav = NavModel::new();
    assert!(nav.waypoints().is_empty());
    assert!(nav.path().is_empty());
    assert_eq!(nav.pose(), Pose::default());
}

#[test]
fn pose_from_message_maps_all_fields() {
    let msg = NavPose { x: 2.0, y: 3.0, h: 270.0, th: Some(10.0), t: Some(4), acc: None, params: None };
    let pose = Pose::from(&msg);
    assert_eq!(pose.position(), Point::new(2.0, 3.0));
    assert_eq!(pose.heading, 270.0);
    assert_eq!(pose.target_heading, Some(10.0));
    assert_eq!(pose.closest_path_index, Some(4));
}

#[test]
fn pose_from_message_with_sentinel_index_has_none() {
    let msg = NavPose { x: 0.0, y: 0.0, h: 0.0, th: None, t: Some(-1), acc: None, params: None };
    assert_eq!(Pose::from(&msg).closest_path_index, None);
}

#[test]
fn waypoint_from_dto_keeps_target_flag() {
    let dto = WaypointDto { x: 1.0, y: 2.0, is_target: true };
    assert_eq!(Waypoint::from(&dto), Waypoint { x: 1.0, y: 2.0, is_target: true });
}

#[test]
fn apply_waypoints_replaces_collection() {
    let mut nav = NavModel::new();
    nav.apply_waypoints(vec![wp(0.0, 0.0), wp(1.0, 1.0), wp(2.0, 2.0)]);
    nav.apply_waypoints(vec![wp(5.0, 5.0)]);
    assert_eq!(nav.waypoints(), &[wp(5.0, 5.0)]);
}

#[test]
fn commit_waypoint_moves_only_that_index() {
    let mut nav = NavModel::new();
    nav.apply_waypoints(vec![wp(0.0, 0.0), wp(1.0, 1.0)]);
    assert!(nav.commit_waypoint(1, Point::new(4.0, -2.0)));
    assert_eq!(nav.waypoints(), &[wp(0.0, 0.0), wp(4.0, -2.0)]);
}

#[test]
fn commit_waypoint_out_of_range_is_rejected() {
    let mut nav = NavModel::new();
    nav.apply_waypoints(vec![wp(0.0, 0.0)]);
    assert!(!nav.commit_waypoint(1, Point::new(4.0, -2.0)));
    assert_eq!(nav.waypoints(), &[wp(0.0, 0.0)]);
}

#[test]
fn closest_path_point_resolves_against_current_path() {
    let mut nav = NavModel::new();
    nav.apply_path(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.5), Point::new(2.0, 1.0)]);
    nav.apply_pose(pose_with_index(Some(1)));
    assert_eq!(nav.closest_path_point(), Some(Point::new(1.0, 0.5)));
}

#[test]
fn stale_closest_index_after_route_replace_is_none() {
    let mut nav = NavModel::new();
    nav.apply_path(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.5), Point::new(2.0, 1.0)]);
    nav.apply_pose(pose_with_index(Some(2)));
    nav.apply_path(vec![Point::new(0.0, 0.0)]);
    assert_eq!(nav.closest_path_point(), None);
}

#[test]
fn no_closest_index_means_no_point() {
    let mut nav = NavModel::new();
    nav.apply_path(vec![Point::new(0.0, 0.0)]);
    nav.apply_pose(pose_with_index(None));
    assert_eq!(nav.closest_path_point(), None);
}
