//! Turn raw textual tokens into validated colors.

use crate::color::{Color, Component, Space};
use crate::error::{Error, Result};
use crate::models::{
    CieXyz, Cmyk, CmykRatio, ColorTemperature, Hsl, Hsv, Model, Rgb, RgbHex, Wavelength,
};

/// Fail unless exactly `expected` tokens were given for `space`.
pub(crate) fn expect_arity(space: Space, tokens: &[&str], expected: usize) -> Result<()> {
    if tokens.len() == expected {
        Ok(())
    } else {
        Err(Error::Arity {
            space,
            expected,
            actual: tokens.len(),
        })
    }
}

/// Parse a token as a real number.
pub(crate) fn real(space: Space, component: &'static str, token: &str) -> Result<Component> {
    token.parse().map_err(|_| Error::Parse {
        space,
        component,
        token: token.to_string(),
        expected: "real number",
    })
}

/// Parse a token as a decimal integer: ASCII digits with an optional leading
/// `-`, so negative values still reach range validation.
pub(crate) fn integer(space: Space, component: &'static str, token: &str) -> Result<i64> {
    let parse_error = || Error::Parse {
        space,
        component,
        token: token.to_string(),
        expected: "integer",
    };

    // `i64::from_str` would also accept a leading `+`.
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(parse_error());
    }

    token.parse().map_err(|_| parse_error())
}

/// Parse a `#RRGGBB` or `RRGGBB` token into its packed value.
pub(crate) fn hexadecimal(token: &str) -> Result<i64> {
    let digits = token.strip_prefix('#').unwrap_or(token);

    if digits.len() != 6 {
        return Err(Error::MalformedHex(token.to_string()));
    }

    // `from_str_radix` would also accept a sign.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::Parse {
            space: Space::RgbHex,
            component: "packed value",
            token: token.to_string(),
            expected: "hexadecimal number",
        });
    }

    i64::from_str_radix(digits, 16).map_err(|_| Error::MalformedHex(token.to_string()))
}

impl Color {
    /// Construct a color in `space` from its textual components.
    ///
    /// ```rust
    /// use metrochrome::{Color, Space};
    /// let color = Color::parse(Space::RgbHex, &["#00FF30"]).unwrap();
    /// assert_eq!(color.to_string(), "#00FF30");
    /// ```
    pub fn parse(space: Space, tokens: &[&str]) -> Result<Color> {
        fn parse_as<M: Model>(tokens: &[&str]) -> Result<Color> {
            M::from_tokens(tokens).map(Into::into)
        }

        match space {
            Space::Rgb => parse_as::<Rgb>(tokens),
            Space::RgbHex => parse_as::<RgbHex>(tokens),
            Space::Cmyk => parse_as::<Cmyk>(tokens),
            Space::CmykRatio => parse_as::<CmykRatio>(tokens),
            Space::Hsv => parse_as::<Hsv>(tokens),
            Space::Hsl => parse_as::<Hsl>(tokens),
            Space::CieXyz => parse_as::<CieXyz>(tokens),
            Space::Wavelength => parse_as::<Wavelength>(tokens),
            Space::Temperature => parse_as::<ColorTemperature>(tokens),
        }
    }
}
