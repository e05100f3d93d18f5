use crate::color::{Color, HasSpace};
use crate::error::Result;

mod cmyk;
mod hsl;
mod hsv;
mod rgb;
mod temperature;
mod wavelength;
mod xyz;

pub use cmyk::{Cmyk, CmykRatio};
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::{Rgb, RgbHex};
pub use temperature::ColorTemperature;
pub use wavelength::Wavelength;
pub use xyz::CieXyz;

/// A trait implemented for color models that can be parsed from text and
/// stored in a generic [`Color`].
pub trait Model: HasSpace + Into<Color> + Sized {
    /// The number of components, and therefore tokens, of the model.
    const ARITY: usize;

    /// Construct the model from exactly [`Model::ARITY`] textual tokens.
    fn from_tokens(tokens: &[&str]) -> Result<Self>;

    /// Borrow the model out of a generic [`Color`] in the same space.
    fn from_color(color: &Color) -> Option<&Self>;
}
