//! Display styling for new datasets.

use mapcel_model::DatasetStyling;
use rand::Rng;

const SATURATION_PERCENT: u8 = 70;
const LIGHTNESS_PERCENT: u8 = 50;

/// Formats a hue (degrees) as a CSS `hsl()` color with the fixed saturation
/// and lightness used for generated colors.
pub fn hsl_color(hue: u16) -> String {
    format!("hsl({hue}, {SATURATION_PERCENT}%, {LIGHTNESS_PERCENT}%)")
}

pub fn random_color<R: Rng>(rng: &mut R) -> String {
    hsl_color(rng.random_range(0..360))
}

/// Random color with the default radius and opacity.
pub fn random_styling<R: Rng>(rng: &mut R) -> DatasetStyling {
    DatasetStyling::with_color(random_color(rng))
}
