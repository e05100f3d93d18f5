//! Model a color in the CIE-XYZ color space.

use std::fmt;

use crate::color::{Component, HasSpace, Space};

metrochrome_macros::gen_model! {
    /// A color specified by CIE 1931 XYZ tristimulus values.
    pub struct CieXyz {
        /// The X component of the color.
        #[range(0.0, 1.0)]
        x: Component,
        /// The Y (luminance) component of the color.
        #[range(0.0, 1.0)]
        y: Component,
        /// The Z component of the color.
        #[range(0.0, 1.0)]
        z: Component,
    }
}

impl HasSpace for CieXyz {
    const SPACE: Space = Space::CieXyz;
}

impl CieXyz {
    /// Return the xy chromaticity coordinates, or `None` for black.
    pub fn chromaticity(&self) -> Option<(Component, Component)> {
        let sum = self.x + self.y + self.z;
        (sum > 0.0).then(|| (self.x / sum, self.y / sum))
    }
}

impl fmt::Display for CieXyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} {:.3} {:.3}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn components_are_validated() {
        assert!(CieXyz::new(0.0, 0.0, 0.0).is_ok());
        assert!(CieXyz::new(1.0, 1.0, 1.0).is_ok());
        assert!(CieXyz::new(0.95, 1.0, 1.09).is_err());
    }

    #[test]
    fn chromaticity() {
        assert_eq!(CieXyz::new(0.0, 0.0, 0.0).unwrap().chromaticity(), None);

        let (x, y) = CieXyz::new(0.2, 0.3, 0.5).unwrap().chromaticity().unwrap();
        assert_component_eq!(x, 0.2);
        assert_component_eq!(y, 0.3);
    }

    #[test]
    fn rendering() {
        assert_eq!(
            CieXyz::new(0.25, 0.5, 0.0).unwrap().to_string(),
            "0.250 0.500 0.000"
        );
    }
}
