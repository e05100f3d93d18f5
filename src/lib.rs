//! metrochrome provides validated color values for a handful of common color
//! spaces and the conversions between them.
//!
//! ```rust
//! use metrochrome::{Color, Rgb, Space};
//! let red = Color::from(Rgb::new(255, 0, 0).unwrap());
//! assert_eq!(red.to_space(Space::RgbHex).unwrap().to_string(), "#FF0000");
//! assert_eq!(red.to_space(Space::Hsv).unwrap().to_string(), "0.0 1.000 1.000");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod format;
mod math;
mod mix;
mod models;
mod parse;
mod physical;

pub use color::{Color, Component, HasSpace, Space, Spaces};
pub use convert::{ConversionTable, Route};
pub use error::{Error, ErrorKind, Result};
pub use models::{
    CieXyz, Cmyk, CmykRatio, ColorTemperature, Hsl, Hsv, Model, Rgb, RgbHex, Wavelength,
};
