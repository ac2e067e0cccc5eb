//! UI control descriptions a game hands to the web layer.
//!
//! The engine only describes controls; the web crate turns them into DOM
//! elements and feeds their changes back as `InputEvent`s.

/// A labeled range slider with a numeric readout.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderSpec {
    /// Text shown before the slider.
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Initial position of the slider.
    pub value: f64,
    /// Decimal places used by the readout.
    pub decimals: usize,
    /// Game-defined event kind posted on change.
    pub kind: u32,
    /// Row index posted on change; stable for the life of the slider.
    pub index: usize,
}

impl SliderSpec {
    /// Readout text for `value` using this slider's precision.
    pub fn readout(&self, value: f64) -> String {
        format_readout(value, self.decimals)
    }
}

/// Format a value with a fixed number of decimals, e.g. `0.010`.
pub fn format_readout(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Parse the string value of a range input.
/// Returns `None` for text that is not a finite number.
pub fn parse_slider_value(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
