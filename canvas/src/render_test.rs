use super::*;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn heading_zero_points_up() {
    let tip = heading_tip(Point::new(100.0, 100.0), 0.0);
    assert!(close(tip, Point::new(100.0, 100.0 - HEADING_INDICATOR_PX)), "{tip:?}");
}

#[test]
fn heading_ninety_points_right() {
    let tip = heading_tip(Point::new(0.0, 0.0), 90.0);
    assert!(close(tip, Point::new(HEADING_INDICATOR_PX, 0.0)), "{tip:?}");
}

#[test]
fn heading_one_eighty_points_down() {
    let tip = heading_tip(Point::new(10.0, 10.0), 180.0);
    assert!(close(tip, Point::new(10.0, 10.0 + HEADING_INDICATOR_PX)), "{tip:?}");
}

#[test]
fn position_label_uses_two_decimals() {
    assert_eq!(position_label(1.0, -2.346), "1.00, -2.35");
}

#[test]
fn waypoint_labels_are_one_based() {
    assert_eq!(waypoint_label(0), "#1");
    assert_eq!(waypoint_label(9), "#10");
}
