//! Model a color with the HSL notation.

use std::fmt;

use crate::color::{Component, HasSpace, Space};

metrochrome_macros::gen_model! {
    /// A color specified with the HSL (hue, saturation, lightness) notation.
    pub struct Hsl {
        /// The hue component of the color in degrees.
        #[range(0.0, 360.0)]
        hue: Component,
        /// The saturation component of the color.
        #[range(0.0, 1.0)]
        saturation: Component,
        /// The lightness component of the color.
        #[range(0.0, 1.0)]
        lightness: Component,
    }
}

impl HasSpace for Hsl {
    const SPACE: Space = Space::Hsl;
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} {:.3} {:.3}",
            self.hue, self.saturation, self.lightness
        )
    }
}
