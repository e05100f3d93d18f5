//! Each color space is modeled with its own type, and a small set of
//! primitive conversions connects them. Every other pair of spaces is reached
//! by chaining primitives, pivoting through RGB.
//!
//! ```rust
//! use metrochrome::{Color, ConversionTable, Hsv, Space};
//! let hsv = Color::from(Hsv::new(200.0, 0.5, 0.8).unwrap());
//!
//! let table = ConversionTable::compatible();
//! let route = table.route(Space::Hsv, Space::CmykRatio).unwrap();
//! assert_eq!(route.to_string(), "hsv -> rgb -> cmyk -> cmyk-ratio");
//!
//! let cmyk = table.convert(&hsv, Space::Cmyk).unwrap();
//! assert_eq!(cmyk.to_string(), "50.0 16.7 0.0 20.0");
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::color::{Color, Component, HasSpace, Space, Spaces};
use crate::error::{Error, Result};
use crate::math::ratio_to_channel;
use crate::models::{
    CieXyz, Cmyk, CmykRatio, ColorTemperature, Hsl, Hsv, Model, Rgb, RgbHex, Wavelength,
};

impl Color {
    /// Convert this color to the specified space with the
    /// [`ConversionTable::compatible`] table.
    pub fn to_space(&self, space: Space) -> Result<Self> {
        ConversionTable::compatible().convert(self, space)
    }
}

/// A single directed conversion between two spaces.
#[derive(Clone, Copy)]
pub(crate) struct Edge {
    pub(crate) from: Space,
    pub(crate) to: Space,
    pub(crate) placeholder: bool,
    pub(crate) apply: fn(&Color) -> Result<Color>,
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

/// Build an [`Edge`] from a function converting one model to another.
macro_rules! edge {
    ($from:ident => $to:ident, $convert:path) => {
        edge!($from => $to, $convert, false)
    };
    ($from:ident => $to:ident, $convert:path, $placeholder:expr) => {{
        fn apply(color: &Color) -> Result<Color> {
            let model = <$from as Model>::from_color(color).ok_or(Error::Mismatch {
                expected: <$from as HasSpace>::SPACE,
                actual: color.space(),
            })?;
            $convert(model).map(Color::from)
        }

        Edge {
            from: <$from as HasSpace>::SPACE,
            to: <$to as HasSpace>::SPACE,
            placeholder: $placeholder,
            apply,
        }
    }};
}
pub(crate) use edge;

/// The chain of spaces a conversion passes through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    from: Space,
    steps: Vec<Space>,
}

impl Route {
    /// The space the route starts in.
    pub fn from(&self) -> Space {
        self.from
    }

    /// The space the route ends in.
    pub fn to(&self) -> Space {
        self.steps.last().copied().unwrap_or(self.from)
    }

    /// Every space visited after the starting one, in order.
    pub fn steps(&self) -> &[Space] {
        &self.steps
    }

    /// True for the conversion of a space to itself.
    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// Pairs of spaces for each primitive conversion along the route.
    fn hops(&self) -> impl Iterator<Item = (Space, Space)> + '_ {
        std::iter::once(self.from)
            .chain(self.steps.iter().copied())
            .zip(self.steps.iter().copied())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.from)?;
        for step in &self.steps {
            write!(f, " -> {step}")?;
        }
        Ok(())
    }
}

/// A directed table of primitive conversions between spaces.
#[derive(Clone, Copy, Debug)]
pub struct ConversionTable {
    edges: &'static [Edge],
}

// RGB edges come first so that ties while searching for a route always
// resolve through RGB.
pub(crate) const COMMON: [Edge; 10] = [
    edge!(Rgb => RgbHex, Rgb::to_rgb_hex),
    edge!(RgbHex => Rgb, RgbHex::to_rgb),
    edge!(Rgb => Cmyk, Rgb::to_cmyk),
    edge!(Cmyk => Rgb, Cmyk::to_rgb),
    edge!(Rgb => Hsv, Rgb::to_hsv),
    edge!(Hsv => Rgb, Hsv::to_rgb),
    edge!(Rgb => Hsl, Rgb::to_hsl),
    edge!(Hsl => Rgb, Hsl::to_rgb),
    edge!(Cmyk => CmykRatio, Cmyk::to_ratio),
    edge!(CmykRatio => Cmyk, CmykRatio::to_cmyk),
];

const COMPATIBLE: &[Edge] = &[
    COMMON[0],
    COMMON[1],
    COMMON[2],
    COMMON[3],
    COMMON[4],
    COMMON[5],
    COMMON[6],
    COMMON[7],
    COMMON[8],
    COMMON[9],
    edge!(Rgb => CieXyz, placeholder::rgb_to_cie_xyz, true),
    edge!(CieXyz => Rgb, placeholder::cie_xyz_to_rgb, true),
    edge!(Rgb => Wavelength, placeholder::rgb_to_wavelength, true),
    edge!(Wavelength => Rgb, placeholder::wavelength_to_rgb, true),
    edge!(Rgb => ColorTemperature, placeholder::rgb_to_temperature, true),
    edge!(ColorTemperature => Rgb, placeholder::temperature_to_rgb, true),
];

impl ConversionTable {
    /// Conversions where CIE XYZ, wavelength and temperature are not derived
    /// from the color: converting to them yields black, 380nm and 0K
    /// respectively, and converting from them always yields black.
    pub const fn compatible() -> Self {
        Self { edges: COMPATIBLE }
    }

    /// Build a table from a custom set of edges.
    pub(crate) const fn with_edges(edges: &'static [Edge]) -> Self {
        Self { edges }
    }

    /// The spaces that are connected to the rest by placeholder conversions.
    pub fn placeholders(&self) -> Spaces {
        self.edges
            .iter()
            .filter(|edge| edge.placeholder)
            .fold(Spaces::empty(), |set, edge| {
                let outer = if edge.from == Space::Rgb {
                    edge.to
                } else {
                    edge.from
                };
                set | Spaces::from(outer)
            })
    }

    /// True if any conversion along the route is a placeholder.
    pub fn uses_placeholder(&self, route: &Route) -> bool {
        route
            .hops()
            .any(|(from, to)| self.edge(from, to).is_some_and(|edge| edge.placeholder))
    }

    fn edge(&self, from: Space, to: Space) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|edge| edge.from == from && edge.to == to)
    }

    /// Find the shortest chain of primitive conversions from one space to
    /// another. Returns `None` if the spaces are not connected.
    pub fn route(&self, from: Space, to: Space) -> Option<Route> {
        if from == to {
            return Some(Route {
                from,
                steps: vec![],
            });
        }

        let mut previous = [None; Space::ALL.len()];
        let mut visited = Spaces::from(from);
        let mut queue = VecDeque::from([from]);

        while let Some(space) = queue.pop_front() {
            for edge in self.edges.iter().filter(|edge| edge.from == space) {
                if visited.has(edge.to) {
                    continue;
                }
                visited |= Spaces::from(edge.to);
                previous[edge.to as usize] = Some(space);

                if edge.to == to {
                    let mut steps = vec![to];
                    let mut current = space;
                    while current != from {
                        steps.push(current);
                        current = previous[current as usize]?;
                    }
                    steps.reverse();
                    return Some(Route { from, steps });
                }

                queue.push_back(edge.to);
            }
        }

        None
    }

    /// Convert `color` to the given space by applying each primitive
    /// conversion along its route. Every intermediate result is validated by
    /// the constructor of its model.
    pub fn convert(&self, color: &Color, to: Space) -> Result<Color> {
        let from = color.space();
        let route = self.route(from, to).ok_or(Error::NoRoute { from, to })?;
        tracing::trace!(%route, "resolved conversion route");

        let mut current = *color;
        for (from, to) in route.hops() {
            let edge = self.edge(from, to).ok_or(Error::NoRoute { from, to })?;
            if edge.placeholder {
                tracing::debug!(%from, %to, "placeholder conversion, result is not derived from the color");
            }
            current = (edge.apply)(&current)?;
            tracing::trace!(space = %to, color = %current, "converted");
        }

        Ok(current)
    }
}

impl Default for ConversionTable {
    fn default() -> Self {
        Self::compatible()
    }
}

impl Rgb {
    /// Pack the channels of this color into a single 24-bit value.
    pub fn to_rgb_hex(&self) -> Result<RgbHex> {
        RgbHex::new(self.red() as i64 * 65536 + self.green() as i64 * 256 + self.blue() as i64)
    }

    /// Convert to the CMYK notation as percentages.
    pub fn to_cmyk(&self) -> Result<Cmyk> {
        let [red, green, blue] = self.to_ratios();
        let key = 1.0 - red.max(green).max(blue);

        // Pure black only needs the key.
        if key == 1.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 100.0 * key);
        }

        let ink = |ratio: Component| 100.0 * ((1.0 - ratio - key) / (1.0 - key));
        Cmyk::new(ink(red), ink(green), ink(blue), 100.0 * key)
    }

    /// Convert to the HSV notation.
    pub fn to_hsv(&self) -> Result<Hsv> {
        let (hue, min, max) = util::hue_with_min_max(self);

        let saturation = if max == 0.0 {
            0.0
        } else {
            (max - min) / max
        };

        Hsv::new(hue, saturation, max)
    }

    /// Convert to the HSL notation.
    pub fn to_hsl(&self) -> Result<Hsl> {
        let (hue, min, max) = util::hue_with_min_max(self);

        let lightness = (max + min) / 2.0;
        let saturation = if lightness == 0.0 || lightness == 1.0 {
            0.0
        } else {
            // Fully saturated dark colors can land a few ulps above 1.
            ((max - min) / (1.0 - (2.0 * lightness - 1.0).abs())).min(1.0)
        };

        Hsl::new(hue, saturation, lightness)
    }
}

impl RgbHex {
    /// Unpack the channels of this color.
    pub fn to_rgb(&self) -> Result<Rgb> {
        let packed = self.packed() as i64;
        let red = packed / 65536;
        let green = packed % 65536 / 256;
        let blue = packed % 256;
        Rgb::new(red, green, blue)
    }
}

impl Cmyk {
    /// Convert to RGB, truncating the channels.
    pub fn to_rgb(&self) -> Result<Rgb> {
        let [cyan, magenta, yellow, key] = self.to_components().map(|v| v / 100.0);
        let channel = |ink: Component| ratio_to_channel((1.0 - ink) * (1.0 - key));
        Rgb::new(channel(cyan), channel(magenta), channel(yellow))
    }

    /// Scale the percentages down to ratios.
    pub fn to_ratio(&self) -> Result<CmykRatio> {
        let [c, m, y, k] = self.to_components().map(|v| v / 100.0);
        CmykRatio::new(c, m, y, k)
    }
}

impl CmykRatio {
    /// Scale the ratios up to percentages.
    pub fn to_cmyk(&self) -> Result<Cmyk> {
        let [c, m, y, k] = self.to_components().map(|v| v * 100.0);
        Cmyk::new(c, m, y, k)
    }
}

impl Hsv {
    /// Convert to RGB, truncating the channels.
    pub fn to_rgb(&self) -> Result<Rgb> {
        let chroma = self.value() * self.saturation();
        util::rgb_from_hue(self.hue(), chroma, self.value() - chroma)
    }
}

impl Hsl {
    /// Convert to RGB, truncating the channels.
    pub fn to_rgb(&self) -> Result<Rgb> {
        let chroma = (1.0 - (2.0 * self.lightness() - 1.0).abs()) * self.saturation();
        util::rgb_from_hue(self.hue(), chroma, self.lightness() - chroma / 2.0)
    }
}

mod util {
    use crate::color::Component;
    use crate::error::Result;
    use crate::math::ratio_to_channel;
    use crate::models::Rgb;

    /// Calculate the hue from the RGB ratios and return it along with the
    /// min and max ratios. When several channels share the maximum, red wins
    /// over green, and green over blue.
    pub fn hue_with_min_max(rgb: &Rgb) -> (Component, Component, Component) {
        let [red, green, blue] = rgb.to_ratios();

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let chroma = max - min;

        let hue = if chroma == 0.0 {
            0.0
        } else {
            60.0 * if max == red {
                ((green - blue) / chroma).rem_euclid(6.0)
            } else if max == green {
                (blue - red) / chroma + 2.0
            } else {
                (red - green) / chroma + 4.0
            }
        };

        (hue, min, max)
    }

    /// Build RGB channels from a hue, the chroma and the amount `m` added to
    /// each channel to match lightness or value.
    pub fn rgb_from_hue(hue: Component, chroma: Component, m: Component) -> Result<Rgb> {
        let sector = hue / 60.0;
        let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());

        // A hue of exactly 360 wraps around to the first sector.
        let (red, green, blue) = match sector.floor() as i64 % 6 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Rgb::new(
            ratio_to_channel(red + m),
            ratio_to_channel(green + m),
            ratio_to_channel(blue + m),
        )
    }
}

pub(crate) mod placeholder {
    use crate::error::Result;
    use crate::models::{CieXyz, ColorTemperature, Rgb, Wavelength};

    pub fn rgb_to_cie_xyz(_: &Rgb) -> Result<CieXyz> {
        CieXyz::new(0.0, 0.0, 0.0)
    }

    pub fn cie_xyz_to_rgb(_: &CieXyz) -> Result<Rgb> {
        Rgb::new(0, 0, 0)
    }

    pub fn rgb_to_wavelength(_: &Rgb) -> Result<Wavelength> {
        Wavelength::new(380.0)
    }

    pub fn wavelength_to_rgb(_: &Wavelength) -> Result<Rgb> {
        Rgb::new(0, 0, 0)
    }

    pub fn rgb_to_temperature(_: &Rgb) -> Result<ColorTemperature> {
        ColorTemperature::new(0.0)
    }

    pub fn temperature_to_rgb(_: &ColorTemperature) -> Result<Rgb> {
        Rgb::new(0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(red: i64, green: i64, blue: i64) -> Color {
        Rgb::new(red, green, blue).unwrap().into()
    }

    #[test]
    fn test_conversions() {
        use Space as S;

        #[rustfmt::skip]
        const TESTS: &[(Space, &[&str], Space, &str)] = &[
            (S::Rgb, &["210", "105", "30"], S::Rgb, "210 105 30"),
            (S::Rgb, &["210", "105", "30"], S::RgbHex, "#D2691E"),
            (S::Rgb, &["210", "105", "30"], S::Cmyk, "0.0 50.0 85.7 17.6"),
            (S::Rgb, &["210", "105", "30"], S::CmykRatio, "0 0.5 0.857 0.176"),
            (S::Rgb, &["210", "105", "30"], S::Hsv, "25.0 0.857 0.824"),
            (S::Rgb, &["210", "105", "30"], S::Hsl, "25.0 0.750 0.471"),
            (S::RgbHex, &["#D2691E"], S::Rgb, "210 105 30"),
            (S::RgbHex, &["#D2691E"], S::Hsl, "25.0 0.750 0.471"),
            (S::Rgb, &["12", "34", "56"], S::Hsv, "210.0 0.786 0.220"),
            (S::Rgb, &["12", "34", "56"], S::Hsl, "210.0 0.647 0.133"),
            (S::Rgb, &["12", "34", "56"], S::Cmyk, "78.6 39.3 0.0 78.0"),
            (S::Rgb, &["128", "128", "128"], S::Cmyk, "0.0 0.0 0.0 49.8"),
            (S::Rgb, &["255", "0", "255"], S::Hsv, "300.0 1.000 1.000"),
            (S::Rgb, &["0", "255", "0"], S::Hsl, "120.0 1.000 0.500"),
            (S::Rgb, &["0", "0", "255"], S::Hsl, "240.0 1.000 0.500"),
            (S::Rgb, &["0", "3", "16"], S::Cmyk, "100.0 81.3 0.0 93.7"),
            (S::Rgb, &["0", "41", "48"], S::Cmyk, "100.0 14.6 0.0 81.2"),
            (S::Rgb, &["0", "41", "48"], S::Hsv, "188.7 1.000 0.188"),
            (S::Rgb, &["0", "41", "48"], S::Hsl, "188.7 1.000 0.094"),
            (S::Cmyk, &["0", "100", "95.5", "82.7"], S::Rgb, "44 0 1"),
            (S::Cmyk, &["50", "25", "0", "20"], S::Rgb, "102 153 204"),
            (S::Cmyk, &["50", "25", "0", "20"], S::RgbHex, "#6699CC"),
            (S::CmykRatio, &["0.5", "0.25", "0", "0.2"], S::Rgb, "102 153 204"),
            (S::CmykRatio, &["0.5", "0.25", "0", "0.2"], S::Cmyk, "50.0 25.0 0.0 20.0"),
            (S::Hsv, &["25", "0.75", "0.5"], S::Rgb, "127 71 31"),
            (S::Hsv, &["200", "0.5", "0.8"], S::Rgb, "102 170 204"),
            (S::Hsv, &["360", "1", "1"], S::Rgb, "255 0 0"),
            (S::Hsl, &["25", "0.75", "0.470588"], S::Rgb, "209 104 29"),
            (S::Hsl, &["120", "1", "0.25"], S::Rgb, "0 127 0"),
            (S::Hsl, &["120", "1", "0.25"], S::RgbHex, "#007F00"),
        ];

        for (from, tokens, to, expected) in TESTS {
            let color = Color::parse(*from, tokens).unwrap();
            let converted = color.to_space(*to).unwrap();
            assert_eq!(converted.space(), *to);
            assert_eq!(converted.to_string(), *expected, "{from} {tokens:?} -> {to}");
        }
    }

    #[test]
    fn known_fixed_points() {
        assert_eq!(
            rgb(0, 0, 0).to_space(Space::Cmyk).unwrap().to_string(),
            "0.0 0.0 0.0 100.0"
        );
        assert_eq!(
            rgb(255, 255, 255).to_space(Space::RgbHex).unwrap().to_string(),
            "#FFFFFF"
        );
        assert_eq!(
            RgbHex::from_hex("#FFFFFF").unwrap().to_rgb().unwrap(),
            Rgb::new(255, 255, 255).unwrap()
        );
        assert_eq!(
            Hsv::new(0.0, 0.0, 0.0).unwrap().to_rgb().unwrap(),
            Rgb::new(0, 0, 0).unwrap()
        );

        let hsv = Rgb::new(255, 0, 0).unwrap().to_hsv().unwrap();
        assert_eq!(hsv.to_components(), [0.0, 1.0, 1.0]);
    }

    #[test]
    fn primitives_follow_the_ratio_formulas() {
        fn hue(red: Component, green: Component, blue: Component) -> Component {
            let max = red.max(green).max(blue);
            let chroma = max - red.min(green).min(blue);
            if chroma == 0.0 {
                0.0
            } else if max == red {
                60.0 * ((green - blue) / chroma).rem_euclid(6.0)
            } else if max == green {
                60.0 * ((blue - red) / chroma + 2.0)
            } else {
                60.0 * ((red - green) / chroma + 4.0)
            }
        }

        let channels = (0..=32).chain((33..=255).step_by(9)).chain([254, 255]);
        let channels: Vec<i64> = channels.collect();

        for &red in &channels {
            for &green in &channels {
                for &blue in &channels {
                    let rgb = Rgb::new(red, green, blue).unwrap();
                    let [r, g, b] = rgb.to_ratios();
                    let max = r.max(g).max(b);
                    let min = r.min(g).min(b);
                    let chroma = max - min;

                    let key = 1.0 - max;
                    let expected = if key == 1.0 {
                        format!("{:.1} {:.1} {:.1} {:.1}", 0.0, 0.0, 0.0, 100.0 * key)
                    } else {
                        let ink = |v: Component| 100.0 * ((1.0 - v - key) / (1.0 - key));
                        format!(
                            "{:.1} {:.1} {:.1} {:.1}",
                            ink(r),
                            ink(g),
                            ink(b),
                            100.0 * key
                        )
                    };
                    assert_eq!(rgb.to_cmyk().unwrap().to_string(), expected, "{rgb}");

                    let saturation = if max == 0.0 { 0.0 } else { chroma / max };
                    let expected = format!("{:.1} {:.3} {:.3}", hue(r, g, b), saturation, max);
                    assert_eq!(rgb.to_hsv().unwrap().to_string(), expected, "{rgb}");

                    let lightness = (max + min) / 2.0;
                    let saturation = if lightness == 0.0 || lightness == 1.0 {
                        0.0
                    } else {
                        chroma / (1.0 - (2.0 * lightness - 1.0).abs())
                    };
                    let expected =
                        format!("{:.1} {:.3} {:.3}", hue(r, g, b), saturation, lightness);
                    assert_eq!(rgb.to_hsl().unwrap().to_string(), expected, "{rgb}");
                }
            }
        }
    }

    #[test]
    fn fully_saturated_dark_colors_stay_in_range() {
        for channel in 1..=255 {
            for rgb in [(channel, 0, 0), (0, channel, 0), (0, 0, channel)] {
                let rgb = Rgb::new(rgb.0, rgb.1, rgb.2).unwrap();
                let hsl = rgb.to_hsl().unwrap();
                assert!(hsl.saturation() <= 1.0, "{rgb}");
                assert_eq!(format!("{:.3}", hsl.saturation()), "1.000", "{rgb}");
            }
        }
    }

    #[test]
    fn hue_tie_break_prefers_red_then_green() {
        // Red and green share the maximum: the red formula applies.
        let hsv = Rgb::new(255, 255, 0).unwrap().to_hsv().unwrap();
        assert_eq!(hsv.hue(), 60.0);

        // Green and blue share the maximum: the green formula applies.
        let hsv = Rgb::new(0, 255, 255).unwrap().to_hsv().unwrap();
        assert_eq!(hsv.hue(), 180.0);
    }

    #[test]
    fn achromatic_colors_have_no_hue_or_saturation() {
        for channel in [0, 1, 127, 254, 255] {
            let hsl = Rgb::new(channel, channel, channel).unwrap().to_hsl().unwrap();
            assert_eq!(hsl.hue(), 0.0);
            assert_eq!(hsl.saturation(), 0.0);
        }
    }

    #[test]
    fn hex_round_trip_is_exact() {
        for red in (0..=255).step_by(3) {
            for green in (0..=255).step_by(5) {
                for blue in 0..=255 {
                    let rgb = Rgb::new(red, green, blue).unwrap();
                    assert_eq!(rgb.to_rgb_hex().unwrap().to_rgb().unwrap(), rgb);
                }
            }
        }
    }

    #[test]
    fn ratio_round_trip_is_within_tolerance() {
        for step in 0..=20 {
            let v = step as Component * 5.0;
            let cmyk = Cmyk::new(v, 100.0 - v, v / 3.0, 12.5).unwrap();
            let back = cmyk.to_ratio().unwrap().to_cmyk().unwrap();
            for (a, b) in back.to_components().into_iter().zip(cmyk.to_components()) {
                crate::assert_component_eq!(a, b);
            }
        }
    }

    #[test]
    fn lossy_round_trips_stay_within_one_unit() {
        fn distance(a: &Rgb, b: &Rgb) -> i32 {
            [
                a.red() as i32 - b.red() as i32,
                a.green() as i32 - b.green() as i32,
                a.blue() as i32 - b.blue() as i32,
            ]
            .into_iter()
            .map(i32::abs)
            .max()
            .unwrap_or(0)
        }

        for red in (0..=255).step_by(3) {
            for green in (0..=255).step_by(5) {
                for blue in (0..=255).step_by(7) {
                    let rgb = Rgb::new(red, green, blue).unwrap();
                    let via_cmyk = rgb.to_cmyk().unwrap().to_rgb().unwrap();
                    let via_hsv = rgb.to_hsv().unwrap().to_rgb().unwrap();
                    let via_hsl = rgb.to_hsl().unwrap().to_rgb().unwrap();
                    assert!(distance(&rgb, &via_cmyk) <= 1, "{rgb} -> {via_cmyk}");
                    assert!(distance(&rgb, &via_hsv) <= 1, "{rgb} -> {via_hsv}");
                    assert!(distance(&rgb, &via_hsl) <= 1, "{rgb} -> {via_hsl}");
                }
            }
        }
    }

    #[test]
    fn pivot_conversions_compose_through_rgb() {
        for hue in (0..=360).step_by(15) {
            for saturation in [0.0, 0.25, 0.5, 1.0] {
                for value in [0.0, 0.1, 0.5, 0.9, 1.0] {
                    let hsv = Hsv::new(hue as Component, saturation, value).unwrap();
                    let direct = Color::from(hsv).to_space(Space::Cmyk).unwrap();
                    let composed = hsv.to_rgb().unwrap().to_cmyk().unwrap();
                    assert_eq!(direct, Color::from(composed));
                }
            }
        }
    }

    #[test]
    fn identity_conversions_render_identically() {
        let table = ConversionTable::compatible();
        #[rustfmt::skip]
        let colors: [(Space, &[&str]); 9] = [
            (Space::Rgb, &["1", "2", "3"]),
            (Space::RgbHex, &["#abcdef"]),
            (Space::Cmyk, &["1.25", "2", "3", "4"]),
            (Space::CmykRatio, &["0.0125", "0.2", "0.3", "0.4"]),
            (Space::Hsv, &["359.5", "0.5", "0.25"]),
            (Space::Hsl, &["12", "0.5", "0.25"]),
            (Space::CieXyz, &["0.1", "0.2", "0.3"]),
            (Space::Wavelength, &["612.5"]),
            (Space::Temperature, &["5000"]),
        ];

        for (space, tokens) in colors {
            let color = Color::parse(space, tokens).unwrap();
            assert!(table.route(space, space).unwrap().is_identity());
            assert_eq!(
                table.convert(&color, space).unwrap().to_string(),
                color.to_string()
            );
        }
    }

    #[test]
    fn routes_pivot_through_rgb() {
        use Space as S;

        let table = ConversionTable::compatible();
        let route = |from, to| table.route(from, to).unwrap().steps().to_vec();

        assert_eq!(route(S::Rgb, S::Hsl), vec![S::Hsl]);
        assert_eq!(route(S::Hsv, S::Cmyk), vec![S::Rgb, S::Cmyk]);
        assert_eq!(route(S::CmykRatio, S::Hsl), vec![S::Cmyk, S::Rgb, S::Hsl]);
        assert_eq!(route(S::RgbHex, S::CmykRatio), vec![S::Rgb, S::Cmyk, S::CmykRatio]);
        assert_eq!(route(S::Temperature, S::CieXyz), vec![S::Rgb, S::CieXyz]);

        for from in Space::ALL {
            for to in Space::ALL {
                let route = table.route(from, to).unwrap();
                assert_eq!(route.from(), from);
                assert_eq!(route.to(), to);
            }
        }
    }

    #[test]
    fn placeholder_conversions() {
        let table = ConversionTable::compatible();
        assert_eq!(
            table.placeholders(),
            Spaces::CIE_XYZ | Spaces::WAVELENGTH | Spaces::TEMPERATURE
        );

        let color = rgb(210, 105, 30);
        assert_eq!(color.to_space(Space::CieXyz).unwrap().to_string(), "0.000 0.000 0.000");
        assert_eq!(color.to_space(Space::Wavelength).unwrap().to_string(), "380.000");
        assert_eq!(color.to_space(Space::Temperature).unwrap().to_string(), "0.0");

        let wavelength = Color::from(Wavelength::new(555.0).unwrap());
        assert_eq!(wavelength.to_space(Space::RgbHex).unwrap().to_string(), "#000000");
        let temperature = Color::from(ColorTemperature::new(6500.0).unwrap());
        assert_eq!(temperature.to_space(Space::Hsl).unwrap().to_string(), "0.0 0.000 0.000");

        let route = table.route(Space::Temperature, Space::Hsv).unwrap();
        assert!(table.uses_placeholder(&route));
        let route = table.route(Space::Hsv, Space::CmykRatio).unwrap();
        assert!(!table.uses_placeholder(&route));
    }

    #[test]
    fn edges_reject_colors_from_other_spaces() {
        let err = (COMMON[0].apply)(&Color::from(Hsv::new(0.0, 0.0, 0.0).unwrap())).unwrap_err();
        assert_eq!(
            err,
            Error::Mismatch {
                expected: Space::Rgb,
                actual: Space::Hsv
            }
        );
    }

    #[test]
    fn route_display() {
        let route = ConversionTable::compatible()
            .route(Space::CmykRatio, Space::RgbHex)
            .unwrap();
        assert_eq!(route.to_string(), "cmyk-ratio -> cmyk -> rgb -> rgb-hex");
    }
}
