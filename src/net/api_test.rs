use super::*;

#[test]
fn success_with_body_one_is_confirmed() {
    assert_eq!(classify_response(true, "1"), ProbeOutcome::Confirmed);
}

#[test]
fn success_with_body_zero_is_other() {
    assert_eq!(classify_response(true, "0"), ProbeOutcome::Other);
}

#[test]
fn success_with_any_other_body_is_other() {
    assert_eq!(classify_response(true, ""), ProbeOutcome::Other);
    assert_eq!(classify_response(true, "11"), ProbeOutcome::Other);
    assert_eq!(classify_response(true, "true"), ProbeOutcome::Other);
}

#[test]
fn body_comparison_is_literal() {
    assert_eq!(classify_response(true, " 1"), ProbeOutcome::Other);
    assert_eq!(classify_response(true, "1\n"), ProbeOutcome::Other);
}

#[test]
fn error_status_is_failed_regardless_of_body() {
    assert_eq!(classify_response(false, "1"), ProbeOutcome::Failed);
    assert_eq!(classify_response(false, ""), ProbeOutcome::Failed);
}

#[test]
fn outcomes_map_to_green_blue_red() {
    assert_eq!(ProbeOutcome::Confirmed.fill(), FillColor::Green);
    assert_eq!(ProbeOutcome::Other.fill(), FillColor::Blue);
    assert_eq!(ProbeOutcome::Failed.fill(), FillColor::Red);
}
