//! Model a color with integer RGB channels, either separate or packed.

use std::fmt;

use crate::color::{Color, Component, HasSpace, Space};
use crate::error::{check_range, Result};
use crate::models::Model;
use crate::parse;

/// A color specified by red, green and blue channels, each 0 to 255.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}

impl Rgb {
    /// Create a new color from its channels. Fails if any channel is outside
    /// 0 to 255.
    pub fn new(red: i64, green: i64, blue: i64) -> Result<Self> {
        Ok(Self {
            red: Self::channel("red", red)?,
            green: Self::channel("green", green)?,
            blue: Self::channel("blue", blue)?,
        })
    }

    fn channel(component: &'static str, value: i64) -> Result<u8> {
        let value = check_range(Self::SPACE, component, value, 0, u8::MAX as i64)?;
        Ok(value as u8)
    }

    /// The red channel.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// The green channel.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// The blue channel.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Return the channels scaled to 0 to 1 ratios.
    pub fn to_ratios(&self) -> [Component; 3] {
        [self.red, self.green, self.blue].map(|c| c as Component / 255.0)
    }
}

impl Model for Rgb {
    const ARITY: usize = 3;

    fn from_tokens(tokens: &[&str]) -> Result<Self> {
        parse::expect_arity(Self::SPACE, tokens, Self::ARITY)?;
        Self::new(
            parse::integer(Self::SPACE, "red", tokens[0])?,
            parse::integer(Self::SPACE, "green", tokens[1])?,
            parse::integer(Self::SPACE, "blue", tokens[2])?,
        )
    }

    fn from_color(color: &Color) -> Option<&Self> {
        match color {
            Color::Rgb(model) => Some(model),
            _ => None,
        }
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Rgb(value)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.red, self.green, self.blue)
    }
}

/// A color specified by its RGB channels packed into a 24-bit integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RgbHex {
    packed: u32,
}

impl HasSpace for RgbHex {
    const SPACE: Space = Space::RgbHex;
}

impl RgbHex {
    /// The largest packed value, `#FFFFFF`.
    pub const MAX: u32 = 0xFF_FFFF;

    /// Create a new color from a packed value. Fails if the value is outside
    /// 0 to 0xFFFFFF.
    pub fn new(packed: i64) -> Result<Self> {
        let packed = check_range(Self::SPACE, "packed value", packed, 0, Self::MAX as i64)?;
        Ok(Self {
            packed: packed as u32,
        })
    }

    /// Create a new color from 6 hexadecimal digits with an optional leading
    /// `#`.
    pub fn from_hex(token: &str) -> Result<Self> {
        Self::new(parse::hexadecimal(token)?)
    }

    /// The packed 24-bit value.
    pub fn packed(&self) -> u32 {
        self.packed
    }
}

impl Model for RgbHex {
    const ARITY: usize = 1;

    fn from_tokens(tokens: &[&str]) -> Result<Self> {
        parse::expect_arity(Self::SPACE, tokens, Self::ARITY)?;
        Self::from_hex(tokens[0])
    }

    fn from_color(color: &Color) -> Option<&Self> {
        match color {
            Color::RgbHex(model) => Some(model),
            _ => None,
        }
    }
}

impl From<RgbHex> for Color {
    fn from(value: RgbHex) -> Self {
        Color::RgbHex(value)
    }
}

impl fmt::Display for RgbHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.packed)
    }
}
