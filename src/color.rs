//! A [`Color`] holds a validated value in any of the supported color spaces.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::{Error, Result};
use crate::models::{
    CieXyz, Cmyk, CmykRatio, ColorTemperature, Hsl, Hsv, Model, Rgb, RgbHex, Wavelength,
};

/// A 64-bit floating point value that all real components are stored as.
pub type Component = f64;

/// The color spaces and representations a [`Color`] can be specified in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Three integer channels, each 0 to 255.
    Rgb = 0,
    /// RGB packed into a single 24-bit integer, written as `#RRGGBB`.
    RgbHex = 1,
    /// Cyan, magenta, yellow and key as percentages 0 to 100.
    Cmyk = 2,
    /// Cyan, magenta, yellow and key as ratios 0 to 1.
    CmykRatio = 3,
    /// Hue (0 to 360), saturation and value (0 to 1).
    Hsv = 4,
    /// Hue (0 to 360), saturation and lightness (0 to 1).
    Hsl = 5,
    /// CIE 1931 XYZ tristimulus values, each 0 to 1.
    CieXyz = 6,
    /// Dominant wavelength in nanometers, 380 to 780.
    Wavelength = 7,
    /// Correlated color temperature in degrees Kelvin.
    Temperature = 8,
}

impl Space {
    /// Every supported space, in declaration order.
    pub const ALL: [Space; 9] = [
        Space::Rgb,
        Space::RgbHex,
        Space::Cmyk,
        Space::CmykRatio,
        Space::Hsv,
        Space::Hsl,
        Space::CieXyz,
        Space::Wavelength,
        Space::Temperature,
    ];

    /// The number of textual tokens needed to specify a color in this space.
    pub fn arity(self) -> usize {
        match self {
            Space::Rgb => Rgb::ARITY,
            Space::RgbHex => RgbHex::ARITY,
            Space::Cmyk => Cmyk::ARITY,
            Space::CmykRatio => CmykRatio::ARITY,
            Space::Hsv => Hsv::ARITY,
            Space::Hsl => Hsl::ARITY,
            Space::CieXyz => CieXyz::ARITY,
            Space::Wavelength => Wavelength::ARITY,
            Space::Temperature => ColorTemperature::ARITY,
        }
    }

    /// The long, human readable name of the space.
    pub fn name(self) -> &'static str {
        match self {
            Space::Rgb => "rgb",
            Space::RgbHex => "rgb-hex",
            Space::Cmyk => "cmyk",
            Space::CmykRatio => "cmyk-ratio",
            Space::Hsv => "hsv",
            Space::Hsl => "hsl",
            Space::CieXyz => "cie-xyz",
            Space::Wavelength => "wavelength",
            Space::Temperature => "temperature",
        }
    }

    /// The short command line flag selecting the space.
    pub fn flag(self) -> &'static str {
        match self {
            Space::Rgb => "-rgb",
            Space::RgbHex => "-rgbh",
            Space::Cmyk => "-cmyk",
            Space::CmykRatio => "-cmykr",
            Space::Hsv => "-hsv",
            Space::Hsl => "-hsl",
            Space::CieXyz => "-xyz",
            Space::Wavelength => "-wl",
            Space::Temperature => "-temp",
        }
    }

    /// Match a flag token such as `-rgbh`, `--rgbh` or `--rgb-hex`. Returns
    /// `None` for tokens that do not start with a dash or name no space.
    pub fn from_flag(token: &str) -> Option<Space> {
        let name = token
            .strip_prefix("--")
            .or_else(|| token.strip_prefix('-'))?;
        Self::ALL.into_iter().find(|space| {
            space.flag()[1..].eq_ignore_ascii_case(name) || space.name().eq_ignore_ascii_case(name)
        })
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Space {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|space| space.name().eq_ignore_ascii_case(s) || space.flag()[1..].eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownSpace(s.to_string()))
    }
}

/// Implemented by every model to name the space it belongs to.
pub trait HasSpace {
    /// The space the model represents.
    const SPACE: Space;
}

bitflags! {
    /// A set of [`Space`]s.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Spaces : u16 {
        /// See [`Space::Rgb`].
        const RGB = 1 << Space::Rgb as u8;
        /// See [`Space::RgbHex`].
        const RGB_HEX = 1 << Space::RgbHex as u8;
        /// See [`Space::Cmyk`].
        const CMYK = 1 << Space::Cmyk as u8;
        /// See [`Space::CmykRatio`].
        const CMYK_RATIO = 1 << Space::CmykRatio as u8;
        /// See [`Space::Hsv`].
        const HSV = 1 << Space::Hsv as u8;
        /// See [`Space::Hsl`].
        const HSL = 1 << Space::Hsl as u8;
        /// See [`Space::CieXyz`].
        const CIE_XYZ = 1 << Space::CieXyz as u8;
        /// See [`Space::Wavelength`].
        const WAVELENGTH = 1 << Space::Wavelength as u8;
        /// See [`Space::Temperature`].
        const TEMPERATURE = 1 << Space::Temperature as u8;
    }
}

impl From<Space> for Spaces {
    fn from(value: Space) -> Self {
        Spaces::from_bits_truncate(1 << value as u8)
    }
}

impl Spaces {
    /// Return true if the given space is part of this set.
    pub fn has(&self, space: Space) -> bool {
        self.contains(Spaces::from(space))
    }
}

/// A validated color in any of the supported spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// See [`Rgb`].
    Rgb(Rgb),
    /// See [`RgbHex`].
    RgbHex(RgbHex),
    /// See [`Cmyk`].
    Cmyk(Cmyk),
    /// See [`CmykRatio`].
    CmykRatio(CmykRatio),
    /// See [`Hsv`].
    Hsv(Hsv),
    /// See [`Hsl`].
    Hsl(Hsl),
    /// See [`CieXyz`].
    CieXyz(CieXyz),
    /// See [`Wavelength`].
    Wavelength(Wavelength),
    /// See [`ColorTemperature`].
    ColorTemperature(ColorTemperature),
}

impl Color {
    /// The space this color is specified in.
    pub fn space(&self) -> Space {
        match self {
            Color::Rgb(_) => Space::Rgb,
            Color::RgbHex(_) => Space::RgbHex,
            Color::Cmyk(_) => Space::Cmyk,
            Color::CmykRatio(_) => Space::CmykRatio,
            Color::Hsv(_) => Space::Hsv,
            Color::Hsl(_) => Space::Hsl,
            Color::CieXyz(_) => Space::CieXyz,
            Color::Wavelength(_) => Space::Wavelength,
            Color::ColorTemperature(_) => Space::Temperature,
        }
    }

    /// Return the model of this color if it is specified in the space of `M`.
    pub fn as_model<M: Model>(&self) -> Option<&M> {
        M::from_color(self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(m) => fmt::Display::fmt(m, f),
            Color::RgbHex(m) => fmt::Display::fmt(m, f),
            Color::Cmyk(m) => fmt::Display::fmt(m, f),
            Color::CmykRatio(m) => fmt::Display::fmt(m, f),
            Color::Hsv(m) => fmt::Display::fmt(m, f),
            Color::Hsl(m) => fmt::Display::fmt(m, f),
            Color::CieXyz(m) => fmt::Display::fmt(m, f),
            Color::Wavelength(m) => fmt::Display::fmt(m, f),
            Color::ColorTemperature(m) => fmt::Display::fmt(m, f),
        }
    }
}
