//! The four entry points for converting between HSLuv and sRGB, plus the
//! helpers for converting between sRGB and hex codes.
//!
//! All functions are pure. They accept any floating point coordinates and do
//! not validate ranges. Out-of-range hue, saturation, or lightness is
//! converted as is, which may well produce out-of-gamut RGB coordinates.
//! Only [`rgb_to_hex`] clamps. It rejects not-a-number and infinite
//! coordinates, which have no hex code.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{convert, format_hex, from_24bit, parse_hex, to_24bit};
use crate::error::{ColorFormatError, GamutBoundaryError, HsluvError};
use crate::core::ColorSpace;
use crate::Float;

/// Convert the HSLuv coordinates to sRGB.
///
/// Hue is in degrees, with saturation and lightness ranging `0..=100`. The
/// resulting RGB coordinates range `0..=1` for in-range inputs, give or take
/// floating point error. Lightness 100 always is white and lightness 0 always
/// is black, whatever the hue and saturation.
///
/// # Errors
///
/// This function fails if the maximum chroma for the lightness and hue is
/// undefined, which is the case for not-a-number lightness or hue.
///
/// # Examples
///
/// ```
/// # use hsluv_core::{hsluv_to_rgb, GamutBoundaryError};
/// let [r, g, b] = hsluv_to_rgb(12.177050630061776, 100.0, 53.23711559542933)?;
/// assert!((r - 1.0).abs() < 1e-9);
/// assert!(g.abs() < 1e-9 && b.abs() < 1e-9);
/// # Ok::<(), GamutBoundaryError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hsluv_to_rgb(h: Float, s: Float, l: Float) -> Result<[Float; 3], GamutBoundaryError> {
    convert(ColorSpace::Hsluv, ColorSpace::Srgb, &[h, s, l])
}

/// Convert the sRGB coordinates to HSLuv.
///
/// The RGB coordinates range `0..=1`. Gray tones, including black and white,
/// have hue 0 and saturation 0.
///
/// # Errors
///
/// This function fails if the maximum chroma for the color's lightness and
/// hue is undefined, which is the case for not-a-number coordinates.
///
/// # Examples
///
/// ```
/// # use hsluv_core::{hsluv_from_rgb, GamutBoundaryError};
/// let [h, s, l] = hsluv_from_rgb(1.0, 0.0, 0.0)?;
/// assert!((h - 12.17705).abs() < 1e-5);
/// assert!((s - 100.0).abs() < 1e-9);
/// assert!((l - 53.23712).abs() < 1e-5);
/// # Ok::<(), GamutBoundaryError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hsluv_from_rgb(r: Float, g: Float, b: Float) -> Result<[Float; 3], GamutBoundaryError> {
    convert(ColorSpace::Srgb, ColorSpace::Hsluv, &[r, g, b])
}

/// Convert the HSLuv coordinates to a hex code.
///
/// The hex code has six uppercase hexadecimal digits and no `#`. The RGB
/// coordinates are clamped to the gamut.
///
/// # Errors
///
/// This function fails for the same inputs as [`hsluv_to_rgb`]. It also
/// fails if the RGB coordinates are not-a-number or infinite, notably for
/// not-a-number or infinite saturation.
///
/// # Examples
///
/// ```
/// # use hsluv_core::{hsluv_to_hexcode, HsluvError};
/// assert_eq!(hsluv_to_hexcode(48.84, 100.0, 62.88)?, "CD8B00");
/// assert!(hsluv_to_hexcode(48.84, f64::NAN, 62.88).is_err());
/// # Ok::<(), HsluvError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hsluv_to_hexcode(h: Float, s: Float, l: Float) -> Result<String, HsluvError> {
    let [r, g, b] = hsluv_to_rgb(h, s, l)?;
    Ok(rgb_to_hex(r, g, b)?)
}

/// Convert the hex code to HSLuv coordinates.
///
/// The hex code has six hexadecimal digits in upper or lower case and may
/// start with a `#`.
///
/// # Errors
///
/// This function fails if the hex code is malformed.
///
/// # Examples
///
/// ```
/// # use hsluv_core::{hsluv_from_hexcode, HsluvError};
/// let [h, s, l] = hsluv_from_hexcode("cd8b00")?;
/// assert_eq!(format!("{:.3} {:.3} {:.3}", h, s, l), "48.837 100.000 62.882");
/// # Ok::<(), HsluvError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hsluv_from_hexcode(hexcode: &str) -> Result<[Float; 3], HsluvError> {
    let [r, g, b] = hex_to_rgb(hexcode)?;
    Ok(hsluv_from_rgb(r, g, b)?)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the hex code to sRGB coordinates.
///
/// # Errors
///
/// This function fails if the hex code does not have exactly six hexadecimal
/// digits after an optional `#`.
///
/// # Examples
///
/// ```
/// # use hsluv_core::{hex_to_rgb, error::ColorFormatError};
/// assert_eq!(hex_to_rgb("#FF0000")?, [1.0, 0.0, 0.0]);
/// assert_eq!(hex_to_rgb("0x0000"), Err(ColorFormatError::MalformedHex));
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hex_to_rgb(hexcode: &str) -> Result<[Float; 3], ColorFormatError> {
    let [r, g, b] = parse_hex(hexcode)?;
    Ok(from_24bit(r, g, b))
}

/// Convert the sRGB coordinates to a hex code.
///
/// This function scales each coordinate to `0..=255`, rounds half to even,
/// and clamps.
///
/// # Errors
///
/// This function fails if a coordinate is not-a-number or infinite.
///
/// # Examples
///
/// ```
/// # use hsluv_core::{rgb_to_hex, error::ColorFormatError};
/// assert_eq!(rgb_to_hex(0.8039, 0.5451, -0.001)?, "CD8B00");
/// assert_eq!(rgb_to_hex(1.5, 1.0, 1.0)?, "FFFFFF");
/// assert_eq!(rgb_to_hex(f64::NAN, 1.0, 1.0), Err(ColorFormatError::NonFiniteCoordinate));
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgb_to_hex(r: Float, g: Float, b: Float) -> Result<String, ColorFormatError> {
    Ok(format_hex(to_24bit(&[r, g, b])?))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::max_chroma_for_lh;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Uniform};

    fn round(value: Float, digits: i32) -> Float {
        let factor = (10.0 as Float).powi(digits);
        (value * factor).round() / factor
    }

    fn round_all(coordinates: [Float; 3]) -> [Float; 3] {
        coordinates.map(|c| round(c, 4))
    }

    fn hue_distance(h1: Float, h2: Float) -> Float {
        let d = (h1 - h2).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    fn assert_round_trip(h: Float, s: Float, l: Float) -> Result<(), GamutBoundaryError> {
        let [r, g, b] = hsluv_to_rgb(h, s, l)?;
        let [h2, s2, l2] = hsluv_from_rgb(r, g, b)?;

        assert!((l - l2).abs() < 1e-3, "lightness differs: {} {}", l, l2);

        // Saturation and hue are meaningless for white and black.
        if l < 1e-3 || 100.0 - 1e-3 < l {
            return Ok(());
        }
        assert!((s - s2).abs() < 1e-3, "saturation differs: {} {}", s, s2);

        // Hue is meaningless for grays.
        if 1e-2 < s {
            assert!(
                hue_distance(h, h2) < 1e-3,
                "hue differs for {:?}: {} {}",
                [h, s, l],
                h,
                h2
            );
        }
        Ok(())
    }

    #[test]
    fn test_from_hexcode() -> Result<(), HsluvError> {
        assert_eq!(round_all(hsluv_from_hexcode("CD8B00")?), [48.837, 100.0, 62.8823]);
        assert_eq!(round_all(hsluv_from_hexcode("000000")?), [0.0, 0.0, 0.0]);
        assert_eq!(round_all(hsluv_from_hexcode("FFFFFF")?), [0.0, 0.0, 100.0]);
        assert_eq!(round_all(hsluv_from_hexcode("FF0000")?), [12.1771, 100.0, 53.2371]);
        assert_eq!(round_all(hsluv_from_hexcode("00FF00")?), [127.715, 100.0, 87.7355]);
        assert_eq!(round_all(hsluv_from_hexcode("0000FF")?), [265.8743, 100.0, 32.3009]);
        Ok(())
    }

    #[test]
    fn test_to_hexcode() -> Result<(), HsluvError> {
        assert_eq!(hsluv_to_hexcode(48.84, 100.0, 62.88)?, "CD8B00");
        assert_eq!(hsluv_to_hexcode(0.0, 0.0, 0.0)?, "000000");
        assert_eq!(hsluv_to_hexcode(0.0, 0.0, 100.0)?, "FFFFFF");
        assert_eq!(hsluv_to_hexcode(12.1771, 100.0, 53.2371)?, "FF0000");
        assert_eq!(hsluv_to_hexcode(127.715, 100.0, 87.7355)?, "00FF00");
        assert_eq!(hsluv_to_hexcode(265.8743, 100.0, 32.3009)?, "0000FF");
        Ok(())
    }

    #[test]
    fn test_hexcode_errors() {
        assert_eq!(
            hsluv_from_hexcode("CD8B"),
            Err(HsluvError::Format(ColorFormatError::UnexpectedCharacters))
        );
        assert_eq!(
            hsluv_from_hexcode("CD8BXX"),
            Err(HsluvError::Format(ColorFormatError::MalformedHex))
        );
        assert!(matches!(
            hsluv_to_hexcode(Float::NAN, 50.0, 50.0),
            Err(HsluvError::Gamut(GamutBoundaryError { lightness, .. })) if lightness == 50.0
        ));
    }

    #[test]
    fn test_non_finite_saturation() -> Result<(), GamutBoundaryError> {
        for s in [Float::NAN, Float::INFINITY, Float::NEG_INFINITY] {
            assert_eq!(
                hsluv_to_hexcode(0.0, s, 50.0),
                Err(HsluvError::Format(ColorFormatError::NonFiniteCoordinate)),
                "saturation {}",
                s
            );
        }

        // The floating point coordinates are still available.
        let rgb = hsluv_to_rgb(0.0, Float::NAN, 50.0)?;
        assert!(rgb.iter().all(|c| c.is_nan()), "{:?}", rgb);
        Ok(())
    }

    #[test]
    fn test_extremes() -> Result<(), GamutBoundaryError> {
        for h in [0.0, 45.0, 180.0, 359.0] {
            for s in [0.0, 50.0, 100.0] {
                let white = hsluv_to_rgb(h, s, 100.0)?;
                assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-9), "{:?}", white);
                assert_eq!(hsluv_to_rgb(h, s, 0.0)?, [0.0, 0.0, 0.0]);
            }
        }

        assert_eq!(hsluv_from_rgb(1.0, 1.0, 1.0)?, [0.0, 0.0, 100.0]);
        assert_eq!(hsluv_from_rgb(0.0, 0.0, 0.0)?, [0.0, 0.0, 0.0]);

        // Gray has neither hue nor saturation.
        let [h, s, _] = hsluv_from_rgb(0.5, 0.5, 0.5)?;
        assert_eq!(h, 0.0);
        assert!(s < 1e-9);
        Ok(())
    }

    #[test]
    fn test_out_of_range_inputs() -> Result<(), HsluvError> {
        // Hue wraps around, saturation and lightness are not validated.
        let [r1, g1, b1] = hsluv_to_rgb(30.0, 80.0, 60.0)?;
        let [r2, g2, b2] = hsluv_to_rgb(390.0, 80.0, 60.0)?;
        assert!((r1 - r2).abs() < 1e-9 && (g1 - g2).abs() < 1e-9 && (b1 - b2).abs() < 1e-9);

        let rgb = hsluv_to_rgb(30.0, 150.0, 60.0)?;
        assert!(rgb.iter().any(|c| !(0.0..=1.0).contains(c)));
        assert_eq!(hsluv_to_hexcode(30.0, 150.0, 150.0)?, "FFFFFF");
        Ok(())
    }

    #[test]
    fn test_round_trip_grid() -> Result<(), GamutBoundaryError> {
        for h in (0..360).step_by(15) {
            for s in (0..=100).step_by(10) {
                for l in (0..=100).step_by(5) {
                    assert_round_trip(h as Float, s as Float, l as Float)?;
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_round_trip_random() -> Result<(), Box<dyn std::error::Error>> {
        let mut rng = StdRng::seed_from_u64(0x4853_4c75_76);
        let hue = Uniform::new(0.0, 360.0)?;
        let percent = Uniform::new_inclusive(0.0, 100.0)?;

        for _ in 0..2_000 {
            let h = hue.sample(&mut rng);
            let s = percent.sample(&mut rng);
            let l = percent.sample(&mut rng);
            assert_round_trip(h, s, l)?;
        }
        Ok(())
    }

    #[test]
    fn test_saturation_is_monotonic() -> Result<(), GamutBoundaryError> {
        fn distance(c1: &[Float; 3], c2: &[Float; 3]) -> Float {
            let [r1, g1, b1] = *c1;
            let [r2, g2, b2] = *c2;
            ((r1 - r2).powi(2) + (g1 - g2).powi(2) + (b1 - b2).powi(2)).sqrt()
        }

        for h in (0..360).step_by(15) {
            for l in (5..100).step_by(10) {
                let (h, l) = (h as Float, l as Float);
                let gray = hsluv_to_rgb(h, 0.0, l)?;
                let mut previous = -1.0;

                for s in (0..=100).step_by(5) {
                    let rgb = hsluv_to_rgb(h, s as Float, l)?;
                    let d = distance(&rgb, &gray);
                    assert!(previous < d, "saturation {} for {:?}", s, [h, l]);
                    previous = d;

                    if s == 100 {
                        assert!(
                            rgb.iter().all(|c| -1e-9 <= *c && *c <= 1.0 + 1e-9),
                            "out of gamut {:?} for {:?}",
                            rgb,
                            [h, l]
                        );
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_full_saturation_is_max_chroma() -> Result<(), GamutBoundaryError> {
        let rgb = hsluv_to_rgb(200.0, 100.0, 70.0)?;
        let lch = convert(ColorSpace::Srgb, ColorSpace::Lch, &rgb)?;
        let max = max_chroma_for_lh(70.0, 200.0)?;
        assert!((lch[1] - max).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_hex_helpers() -> Result<(), ColorFormatError> {
        assert_eq!(hex_to_rgb("cd8b00")?, [0.803921568627451, 0.5450980392156862, 0.0]);
        assert_eq!(rgb_to_hex(0.803921568627451, 0.5450980392156862, 0.0)?, "CD8B00");
        assert_eq!(rgb_to_hex(-3.0, 0.0, 7.0)?, "0000FF");
        assert_eq!(
            rgb_to_hex(-3.0, Float::INFINITY, 7.0),
            Err(ColorFormatError::NonFiniteCoordinate)
        );
        Ok(())
    }
}
