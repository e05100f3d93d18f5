//! Variations on a color by mixing it with white (tints) or black (shades).

use crate::color::{Color, Component, HasSpace};
use crate::convert::ConversionTable;
use crate::error::{check_range, Error, Result};
use crate::math::lerp;
use crate::models::Rgb;

impl Rgb {
    /// Mix each channel with `target` by `amount`, truncating the result.
    fn mix(&self, target: Component, amount: Component) -> Result<Rgb> {
        let amount = check_range(Self::SPACE, "mix amount", amount, 0.0, 1.0)?;
        let channel = |c: u8| lerp(c as Component, target, amount).trunc() as i64;
        Rgb::new(
            channel(self.red()),
            channel(self.green()),
            channel(self.blue()),
        )
    }

    /// Mix this color with white. An `amount` of 0 keeps the color and 1
    /// yields white.
    pub fn tint(&self, amount: Component) -> Result<Rgb> {
        self.mix(255.0, amount)
    }

    /// Mix this color with black. An `amount` of 0 keeps the color and 1
    /// yields black.
    pub fn shade(&self, amount: Component) -> Result<Rgb> {
        self.mix(0.0, amount)
    }
}

impl ConversionTable {
    /// Tint `color` through RGB and convert the result back to its space.
    pub fn tint(&self, color: &Color, amount: Component) -> Result<Color> {
        self.through_rgb(color, |rgb| rgb.tint(amount))
    }

    /// Shade `color` through RGB and convert the result back to its space.
    pub fn shade(&self, color: &Color, amount: Component) -> Result<Color> {
        self.through_rgb(color, |rgb| rgb.shade(amount))
    }

    fn through_rgb(&self, color: &Color, f: impl Fn(&Rgb) -> Result<Rgb>) -> Result<Color> {
        let converted = self.convert(color, Rgb::SPACE)?;
        let rgb = converted.as_model::<Rgb>().ok_or(Error::Mismatch {
            expected: Rgb::SPACE,
            actual: converted.space(),
        })?;
        self.convert(&f(rgb)?.into(), color.space())
    }
}

impl Color {
    /// Mix this color with white in RGB, keeping its space.
    pub fn tint(&self, amount: Component) -> Result<Color> {
        ConversionTable::compatible().tint(self, amount)
    }

    /// Mix this color with black in RGB, keeping its space.
    pub fn shade(&self, amount: Component) -> Result<Color> {
        ConversionTable::compatible().shade(self, amount)
    }
}
