//! Fill colors the probe square can take.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Square fill. Starts `Black`; the final value is picked by the probe
/// request's outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillColor {
    #[default]
    Black,
    Green,
    Blue,
    Red,
}

impl FillColor {
    /// CSS color keyword for inline styling.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            FillColor::Black => "black",
            FillColor::Green => "green",
            FillColor::Blue => "blue",
            FillColor::Red => "red",
        }
    }
}
