use super::*;

#[test]
fn offset_is_zero_at_start() {
    assert_eq!(SLIDE.offset_at(0.0), 0.0);
}

#[test]
fn offset_is_linear_midway() {
    assert_eq!(SLIDE.offset_at(250.0), 25.0);
    assert_eq!(SLIDE.offset_at(500.0), 50.0);
    assert_eq!(SLIDE.offset_at(750.0), 75.0);
}

#[test]
fn offset_is_exactly_the_distance_at_the_end() {
    assert_eq!(SLIDE.offset_at(1000.0), 100.0);
}

#[test]
fn offset_clamps_outside_the_duration() {
    assert_eq!(SLIDE.offset_at(-250.0), 0.0);
    assert_eq!(SLIDE.offset_at(5000.0), 100.0);
}

#[test]
fn is_complete_flips_at_the_duration_boundary() {
    assert!(!SLIDE.is_complete(999.0));
    assert!(SLIDE.is_complete(1000.0));
    assert!(SLIDE.is_complete(1001.0));
}

#[test]
fn degenerate_duration_is_immediately_terminal() {
    let t = Transition { distance_px: 40.0, duration_ms: 0.0 };
    assert_eq!(t.offset_at(0.0), 40.0);
    assert!(t.is_complete(0.0));
}
