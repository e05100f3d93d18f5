//! Physically derived conversions for CIE XYZ and correlated color
//! temperature. RGB is treated as gamma encoded sRGB with a D65 white point.

use crate::color::{Color, Component, HasSpace, Space};
use crate::convert::{edge, placeholder, ConversionTable, Edge, COMMON};
use crate::error::{Error, Result};
use crate::math::{ratio_to_channel, transform, transform_3x3, Transform};
use crate::models::{CieXyz, ColorTemperature, Model, Rgb, Wavelength};

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const TO_XYZ: Transform = transform_3x3(
    0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
    0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
    0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const FROM_XYZ: Transform = transform_3x3(
     3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
    -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
    -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
);

/// The range of temperatures the Planckian locus approximation covers.
const LOCUS_RANGE: std::ops::RangeInclusive<Component> = 1667.0..=25000.0;

fn to_linear_light(value: Component) -> Component {
    let abs = value.abs();

    if abs < 0.04045 {
        value / 12.92
    } else {
        value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
    }
}

fn to_gamma_encoded(value: Component) -> Component {
    let abs = value.abs();

    if abs > 0.0031308 {
        value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    } else {
        12.92 * value
    }
}

impl Rgb {
    /// Convert to CIE XYZ through linear light sRGB. Bright colors near white
    /// have X or Z components above 1 and fail validation.
    pub fn to_cie_xyz(&self) -> Result<CieXyz> {
        let [x, y, z] = transform(&TO_XYZ, self.to_ratios().map(to_linear_light));
        CieXyz::new(x, y, z)
    }
}

impl CieXyz {
    /// Convert to gamma encoded sRGB, truncating the channels. Colors outside
    /// the sRGB gamut fail validation.
    pub fn to_rgb(&self) -> Result<Rgb> {
        let [red, green, blue] =
            transform(&FROM_XYZ, self.to_components()).map(|c| ratio_to_channel(to_gamma_encoded(c)));
        Rgb::new(red, green, blue)
    }

    /// Estimate the correlated color temperature with McCamy's cubic
    /// approximation. Black has a temperature of 0K.
    pub fn to_temperature(&self) -> Result<ColorTemperature> {
        let Some((x, y)) = self.chromaticity() else {
            return ColorTemperature::new(0.0);
        };

        let n = (x - 0.3320) / (0.1858 - y);
        ColorTemperature::new(449.0 * n.powi(3) + 3525.0 * n.powi(2) + 6823.3 * n + 5520.33)
    }
}

impl ColorTemperature {
    /// Return the xy chromaticity of a black body radiator at this
    /// temperature using the cubic spline approximation of Kim et al.
    pub fn chromaticity(&self) -> Result<(Component, Component)> {
        let t = self.kelvin();
        if !LOCUS_RANGE.contains(&t) {
            return Err(Error::Unsupported {
                space: Space::Temperature,
                value: t,
                reason: "the Planckian locus is only approximated from 1667K to 25000K",
            });
        }

        let (t2, t3) = (t * t, t * t * t);
        let x = if t <= 4000.0 {
            -0.2661239e9 / t3 - 0.2343589e6 / t2 + 0.8776956e3 / t + 0.179910
        } else {
            -3.0258469e9 / t3 + 2.1070379e6 / t2 + 0.2226347e3 / t + 0.240390
        };

        let (x2, x3) = (x * x, x * x * x);
        let y = if t <= 2222.0 {
            -1.1063814 * x3 - 1.34811020 * x2 + 2.18555832 * x - 0.20219683
        } else if t <= 4000.0 {
            -0.9549476 * x3 - 1.37418593 * x2 + 2.09137015 * x - 0.16748867
        } else {
            3.0817580 * x3 - 5.87338670 * x2 + 3.75112997 * x - 0.37001483
        };

        Ok((x, y))
    }

    /// Convert to CIE XYZ at the brightest luminance where every XYZ
    /// component and every linear sRGB channel stays at or below 1.
    pub fn to_cie_xyz(&self) -> Result<CieXyz> {
        let (x, y) = self.chromaticity()?;

        let xyz = [x / y, 1.0, (1.0 - x - y) / y];
        let linear = transform(&FROM_XYZ, xyz);
        let brightest = xyz
            .into_iter()
            .chain(linear)
            .fold(Component::MIN, Component::max);

        let [x, y, z] = xyz.map(|c| c / brightest);
        CieXyz::new(x, y, z)
    }
}

const PHYSICAL: &[Edge] = &[
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
    edge!(Rgb => CieXyz, Rgb::to_cie_xyz),
    edge!(CieXyz => Rgb, CieXyz::to_rgb),
    edge!(CieXyz => ColorTemperature, CieXyz::to_temperature),
    edge!(ColorTemperature => CieXyz, ColorTemperature::to_cie_xyz),
    edge!(Rgb => Wavelength, placeholder::rgb_to_wavelength, true),
    edge!(Wavelength => Rgb, placeholder::wavelength_to_rgb, true),
];

impl ConversionTable {
    /// Conversions where CIE XYZ is derived from sRGB and color temperature
    /// from the chromaticity of CIE XYZ. Wavelength conversions remain
    /// placeholders as in [`ConversionTable::compatible`].
    pub const fn physical() -> Self {
        Self::with_edges(PHYSICAL)
    }
}
