//! Model a color with the HSV notation.

use std::fmt;

use crate::color::{Component, HasSpace, Space};

metrochrome_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation.
    pub struct Hsv {
        /// The hue component of the color in degrees.
        #[range(0.0, 360.0)]
        hue: Component,
        /// The saturation component of the color.
        #[range(0.0, 1.0)]
        saturation: Component,
        /// The value component of the color.
        #[range(0.0, 1.0)]
        value: Component,
    }
}

impl HasSpace for Hsv {
    const SPACE: Space = Space::Hsv;
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} {:.3} {:.3}", self.hue, self.saturation, self.value)
    }
}
