use super::gamut::max_chroma_for_lh;
use super::math::multiply;
use super::ColorSpace;
use crate::error::{ColorFormatError, GamutBoundaryError};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function scales the coordinates by 255, rounds half to even, and
/// clamps the result to `0x00..=0xff`. It is the only place where the
/// pipeline clamps, absorbing any overshoot from the floating point math.
///
/// # Errors
///
/// This function fails if a coordinate is not-a-number or infinite.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> Result<[u8; 3], ColorFormatError> {
    #[inline]
    fn convert(value: Float) -> Result<u8, ColorFormatError> {
        if !value.is_finite() {
            return Err(ColorFormatError::NonFiniteCoordinate);
        }
        Ok((value * 255.0).round_ties_even().clamp(0.0, 255.0) as u8)
    }

    let [r, g, b] = *coordinates;
    Ok([convert(r)?, convert(g)?, convert(b)?])
}

// --------------------------------------------------------------------------------------------------------------------
// https://www.hsluv.org/implementations/ share these constants.

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.240969941904521,  -1.537383177570093,  -0.498610760293    ],
    [ -0.96924363628087,    1.87596750150772,    0.041555057407175 ],
    [  0.055630079696993,  -0.20397695888897,    1.056971514242878 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595,  0.35758433938387, 0.18048078840183  ],
    [ 0.21263900587151,  0.71516867876775, 0.072192315360733 ],
    [ 0.019330818715591, 0.11919477979462, 0.95053215224966  ],
];

/// The luminance of the D65 reference white.
pub(crate) const REF_Y: Float = 1.0;
/// The u′ chromaticity of the D65 reference white.
#[allow(clippy::excessive_precision)]
pub(crate) const REF_U: Float = 0.19783000664283;
/// The v′ chromaticity of the D65 reference white.
#[allow(clippy::excessive_precision)]
pub(crate) const REF_V: Float = 0.46831999493879;
/// CIE's κ, truncated from 24389/27.
pub(crate) const KAPPA: Float = 903.2962962;
/// CIE's ε, truncated from 216/24389.
pub(crate) const EPSILON: Float = 0.0088564516;

/// The lightness above which colors are white.
const WHITE_THRESHOLD: Float = 100.0 - 1e-7;
/// The lightness below which colors are black.
const BLACK_THRESHOLD: Float = 1e-8;
/// The chroma below which colors have no meaningful hue.
const CHROMA_THRESHOLD: Float = 1e-8;

// --------------------------------------------------------------------------------------------------------------------

/// Apply sRGB's gamma to a linear coordinate.
#[inline]
#[allow(clippy::suboptimal_flops)]
pub(crate) fn linear_to_gamma(value: Float) -> Float {
    if value <= 0.0031308 {
        12.92 * value
    } else {
        1.055 * value.powf(5.0 / 12.0) - 0.055
    }
}

/// Remove sRGB's gamma from a gamma-corrected coordinate.
#[inline]
pub(crate) fn gamma_to_linear(value: Float) -> Float {
    if value > 0.04045 {
        ((value + 0.055) / 1.055).powf(2.4)
    } else {
        value / 12.92
    }
}

/// Convert coordinates from sRGB to linear sRGB. This is a one-hop, direct
/// conversion.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    [gamma_to_linear(r), gamma_to_linear(g), gamma_to_linear(b)]
}

/// Convert coordinates from linear sRGB to sRGB. This is a one-hop, direct
/// conversion. It does not clamp.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    [linear_to_gamma(r), linear_to_gamma(g), linear_to_gamma(b)]
}

/// Convert coordinates for linear sRGB to XYZ. This is a one-hop, direct
/// conversion.
fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

/// Convert coordinates for XYZ to linear sRGB. This is a one-hop, direct
/// conversion.
fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert CIELUV lightness to XYZ luminance.
#[inline]
fn l_to_y(l: Float) -> Float {
    if l <= 8.0 {
        REF_Y * l / KAPPA
    } else {
        REF_Y * ((l + 16.0) / 116.0).powf(3.0)
    }
}

/// Convert XYZ luminance to CIELUV lightness.
#[inline]
#[allow(clippy::suboptimal_flops)]
fn y_to_l(y: Float) -> Float {
    if y <= EPSILON {
        y / REF_Y * KAPPA
    } else {
        116.0 * (y / REF_Y).powf(1.0 / 3.0) - 16.0
    }
}

/// Convert coordinates for XYZ to CIELUV. This is a one-hop, direct
/// conversion.
///
/// Black maps to the origin. If the lightness is positive but the divider
/// `x + 15y + 3z` is zero, u and v are not-a-number. That can only happen for
/// colors outside the gamut of real colors and is left for the caller to
/// detect.
#[allow(clippy::float_cmp, clippy::suboptimal_flops)]
pub(crate) fn xyz_to_luv(value: &[Float; 3]) -> [Float; 3] {
    let [x, y, z] = *value;

    let l = y_to_l(y);
    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let divider = x + 15.0 * y + 3.0 * z;
    if divider == 0.0 {
        return [l, Float::NAN, Float::NAN];
    }

    let var_u = 4.0 * x / divider;
    let var_v = 9.0 * y / divider;
    [
        l,
        13.0 * l * (var_u - REF_U),
        13.0 * l * (var_v - REF_V),
    ]
}

/// Convert coordinates for CIELUV to XYZ. This is a one-hop, direct
/// conversion. Colors without positive lightness are black.
#[allow(clippy::suboptimal_flops)]
pub(crate) fn luv_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [l, u, v] = *value;
    if l <= 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let var_u = u / (13.0 * l) + REF_U;
    let var_v = v / (13.0 * l) + REF_V;
    let y = l_to_y(l);
    let x = y * 9.0 * var_u / (4.0 * var_v);
    let z = y * (12.0 - 3.0 * var_u - 20.0 * var_v) / (4.0 * var_v);
    [x, y, z]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for CIELUV to CIELCh. This is a one-hop, direct
/// conversion.
///
/// Near-zero chroma has no meaningful hue, which becomes 0. Otherwise, the hue
/// is normalized to `0..360`.
pub(crate) fn luv_to_lch(value: &[Float; 3]) -> [Float; 3] {
    let [l, u, v] = *value;

    let c = u.hypot(v);
    let h = if c < CHROMA_THRESHOLD {
        0.0
    } else {
        let h = v.atan2(u).to_degrees();
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    };

    [l, c, h]
}

/// Convert coordinates for CIELCh to CIELUV. This is a one-hop, direct
/// conversion.
pub(crate) fn lch_to_luv(value: &[Float; 3]) -> [Float; 3] {
    let [l, c, h] = *value;
    let hue_radian = h.to_radians();
    [l, hue_radian.cos() * c, hue_radian.sin() * c]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for HSLuv to CIELCh. This is a one-hop, direct
/// conversion.
///
/// Lightness at or beyond the extremes produces white or black with zero
/// chroma, independent of saturation. Otherwise, saturation scales the maximum
/// chroma for the lightness and hue.
///
/// # Errors
///
/// This function fails if the maximum chroma is undefined.
pub(crate) fn hsluv_to_lch(value: &[Float; 3]) -> Result<[Float; 3], GamutBoundaryError> {
    let [h, s, l] = *value;

    if l > WHITE_THRESHOLD {
        return Ok([100.0, 0.0, h]);
    } else if l < BLACK_THRESHOLD {
        return Ok([0.0, 0.0, h]);
    }

    let max_chroma = max_chroma_for_lh(l, h)?;
    Ok([l, max_chroma / 100.0 * s, h])
}

/// Convert coordinates for CIELCh to HSLuv. This is a one-hop, direct
/// conversion.
///
/// Lightness at or beyond the extremes produces white or black with zero
/// saturation. Otherwise, the saturation is the chroma relative to the maximum
/// chroma for the lightness and hue. Since floating point error may push the
/// ratio past the boundary, it is capped at 100. A not-a-number ratio passes
/// through.
///
/// # Errors
///
/// This function fails if the maximum chroma is undefined.
pub(crate) fn lch_to_hsluv(value: &[Float; 3]) -> Result<[Float; 3], GamutBoundaryError> {
    let [l, c, h] = *value;

    if l > WHITE_THRESHOLD {
        return Ok([h, 0.0, 100.0]);
    } else if l < BLACK_THRESHOLD {
        return Ok([h, 0.0, 0.0]);
    }

    let ratio = c / max_chroma_for_lh(l, h)?;
    let ratio = if 1.0 < ratio { 1.0 } else { ratio };
    Ok([h, ratio * 100.0, l])
}

// --------------------------------------------------------------------------------------------------------------------

/// Take one step along the pipeline towards HSLuv.
fn step_towards_hsluv(
    space: ColorSpace,
    value: &[Float; 3],
) -> Result<(ColorSpace, [Float; 3]), GamutBoundaryError> {
    use ColorSpace::*;

    Ok(match space {
        Srgb => (LinearSrgb, rgb_to_linear_rgb(value)),
        LinearSrgb => (Xyz, linear_srgb_to_xyz(value)),
        Xyz => (Luv, xyz_to_luv(value)),
        Luv => (Lch, luv_to_lch(value)),
        Lch => (Hsluv, lch_to_hsluv(value)?),
        Hsluv => (Hsluv, *value),
    })
}

/// Take one step along the pipeline towards sRGB.
fn step_towards_srgb(
    space: ColorSpace,
    value: &[Float; 3],
) -> Result<(ColorSpace, [Float; 3]), GamutBoundaryError> {
    use ColorSpace::*;

    Ok(match space {
        Srgb => (Srgb, *value),
        LinearSrgb => (Srgb, linear_rgb_to_rgb(value)),
        Xyz => (LinearSrgb, xyz_to_linear_srgb(value)),
        Luv => (Xyz, luv_to_xyz(value)),
        Lch => (Luv, lch_to_luv(value)),
        Hsluv => (Lch, hsluv_to_lch(value)?),
    })
}

/// Convert the coordinates from one color space to another.
///
/// This function walks the pipeline one color space at a time, in whichever
/// direction leads to the targeted color space. It does not normalize
/// not-a-number coordinates and does not check whether the result is in gamut
/// for the targeted color space.
///
/// # Errors
///
/// The conversion fails if it passes between CIELCh and HSLuv and the maximum
/// chroma is undefined.
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> Result<[Float; 3], GamutBoundaryError> {
    let mut space = from_space;
    let mut coordinates = *coordinates;

    while space < to_space {
        (space, coordinates) = step_towards_hsluv(space, &coordinates)?;
    }
    while to_space < space {
        (space, coordinates) = step_towards_srgb(space, &coordinates)?;
    }

    Ok(coordinates)
}
