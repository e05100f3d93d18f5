//! Model a color by its dominant wavelength.

use std::fmt;

use crate::color::{Component, HasSpace, Space};

metrochrome_macros::gen_model! {
    /// A color specified by its dominant wavelength within the visible
    /// spectrum.
    pub struct Wavelength {
        /// The wavelength in nanometers.
        #[range(380.0, 780.0)]
        nanometers: Component,
    }
}

impl HasSpace for Wavelength {
    const SPACE: Space = Space::Wavelength;
}

impl fmt::Display for Wavelength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.nanometers)
    }
}
