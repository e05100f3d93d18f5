//! Model a color by its correlated color temperature.

use std::fmt;

use crate::color::{Component, HasSpace, Space};

metrochrome_macros::gen_model! {
    /// A color specified by the temperature of the black body radiator whose
    /// color it most resembles.
    pub struct ColorTemperature {
        /// The temperature in degrees Kelvin.
        #[range(0.0, Component::INFINITY)]
        kelvin: Component,
    }
}

impl HasSpace for ColorTemperature {
    const SPACE: Space = Space::Temperature;
}

impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.kelvin)
    }
}
