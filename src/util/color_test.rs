use super::*;

#[test]
fn default_fill_is_black() {
    assert_eq!(FillColor::default(), FillColor::Black);
}

#[test]
fn css_keywords_match_each_variant() {
    assert_eq!(FillColor::Black.css(), "black");
    assert_eq!(FillColor::Green.css(), "green");
    assert_eq!(FillColor::Blue.css(), "blue");
    assert_eq!(FillColor::Red.css(), "red");
}
