//! Model a color with the CMYK notation, as percentages or as ratios.

use std::fmt;

use crate::color::{Component, HasSpace, Space};
use crate::format;

metrochrome_macros::gen_model! {
    /// A color specified by cyan, magenta, yellow and key (black) inks, each
    /// as a percentage 0 to 100.
    pub struct Cmyk {
        /// The cyan component of the color.
        #[range(0.0, 100.0)]
        cyan: Component,
        /// The magenta component of the color.
        #[range(0.0, 100.0)]
        magenta: Component,
        /// The yellow component of the color.
        #[range(0.0, 100.0)]
        yellow: Component,
        /// The key (black) component of the color.
        #[range(0.0, 100.0)]
        key: Component,
    }
}

impl HasSpace for Cmyk {
    const SPACE: Space = Space::Cmyk;
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} {:.1} {:.1} {:.1}",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}

metrochrome_macros::gen_model! {
    /// A color specified by cyan, magenta, yellow and key (black) inks, each
    /// as a ratio 0 to 1.
    pub struct CmykRatio {
        /// The cyan component of the color.
        #[range(0.0, 1.0)]
        cyan: Component,
        /// The magenta component of the color.
        #[range(0.0, 1.0)]
        magenta: Component,
        /// The yellow component of the color.
        #[range(0.0, 1.0)]
        yellow: Component,
        /// The key (black) component of the color.
        #[range(0.0, 1.0)]
        key: Component,
    }
}

impl HasSpace for CmykRatio {
    const SPACE: Space = Space::CmykRatio;
}

impl fmt::Display for CmykRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c, m, y, k] = self.to_components().map(|v| format::general(v, 3));
        write!(f, "{c} {m} {y} {k}")
    }
}
