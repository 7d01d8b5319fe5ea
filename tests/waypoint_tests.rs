use astarviz::scene::build_path_scene;
use astarviz::waypoint::{digit_pair, parse_overlay, parse_waypoints};
use astarviz::{CanvasMapper, Waypoint};

#[test]
fn parses_letter_prefixed_tokens() {
    assert_eq!(digit_pair("r3c5").unwrap(), (3, 5));
    assert_eq!(digit_pair("r0c0").unwrap(), (0, 0));
}

#[test]
fn parses_parenthesized_tokens() {
    assert_eq!(digit_pair("(0,1)").unwrap(), (0, 1));
    assert_eq!(digit_pair("(12,345)").unwrap(), (12, 345));
}

#[test]
fn parses_multi_digit_coordinates() {
    assert_eq!(digit_pair("r12c34").unwrap(), (12, 34));
}

#[test]
fn rejects_tokens_without_two_numbers() {
    assert!(digit_pair("r3").is_err());
    assert!(digit_pair("r3c5x7").is_err());
    assert!(digit_pair("abc").is_err());
}

#[test]
fn skips_the_header_line() {
    let waypoints = parse_waypoints("0 0 3 4 9\nr1c2 r3c4\n").unwrap();

    assert_eq!(
        waypoints,
        vec![Waypoint { row: 1, col: 2 }, Waypoint { row: 3, col: 4 }]
    );
}

#[test]
fn preserves_input_order() {
    let waypoints = parse_waypoints("header\nr0c0 r0c1 r1c1 r2c1\n").unwrap();
    let expected = [(0, 0), (0, 1), (1, 1), (2, 1)];

    assert_eq!(waypoints.len(), expected.len());
    for (point, &(row, col)) in waypoints.iter().zip(expected.iter()) {
        assert_eq!(*point, Waypoint { row, col });
    }
}

#[test]
fn requires_at_least_two_waypoints() {
    assert!(parse_waypoints("header\nr1c2\n").is_err());
    assert!(parse_waypoints("header\n\n").is_err());
    assert!(parse_waypoints("header\n").is_err());
}

#[test]
fn rejects_malformed_token_in_path() {
    assert!(parse_waypoints("header\nr1c2 bogus r3c4\n").is_err());
}

#[test]
fn overlay_accepts_any_count_including_zero() {
    assert_eq!(parse_overlay("header\n(0,1) (1,0)\n").unwrap(), vec![(0, 1), (1, 0)]);
    assert_eq!(parse_overlay("header\n\n").unwrap(), vec![]);
}

#[test]
fn minimum_path_renders_one_segment_and_two_dots() {
    let waypoints = parse_waypoints("header\nr1c2 r3c4\n").unwrap();
    let rows = waypoints.iter().map(|w| w.row).max().unwrap() + 1;
    let cols = waypoints.iter().map(|w| w.col).max().unwrap() + 1;

    let mapper = CanvasMapper::new(100.0, 100.0, 50.0, rows, cols);
    let scene = build_path_scene(&waypoints, &mapper, 2.0);

    assert_eq!(scene.segments.len(), 1);
    assert_eq!(scene.dots.len(), 2);

    let start = mapper.waypoint_px(waypoints[0]);
    let end = mapper.waypoint_px(waypoints[1]);
    assert_eq!((scene.dots[0].center.x, scene.dots[0].center.y), start);
    assert_eq!((scene.dots[1].center.x, scene.dots[1].center.y), end);
}
