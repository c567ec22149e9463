use super::conversion::{EPSILON, KAPPA, XYZ_TO_LINEAR_SRGB};
use crate::error::GamutBoundaryError;
use crate::Float;

/// A line in CIELUV's u/v plane, in slope-intercept form.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Line {
    pub slope: Float,
    pub intercept: Float,
}

impl Line {
    /// Determine the length of the ray from the origin with the given angle
    /// (in radians) until it intersects this line.
    ///
    /// The length is signed. It is negative if the intersection lies behind
    /// the origin, i.e., in the opposite direction of the angle.
    #[inline]
    pub fn length_of_ray_until_intersect(&self, theta: Float) -> Float {
        self.intercept / (theta.sin() - self.slope * theta.cos())
    }
}

/// Determine the boundaries of the sRGB gamut at the given lightness.
///
/// At a fixed lightness, each face of the linear RGB cube projects onto a line
/// in CIELUV's u/v plane. This function computes the six lines, one for the
/// minimum and one for the maximum of each channel, in the order red minimum,
/// red maximum, green minimum, green maximum, blue minimum, and blue maximum.
#[allow(clippy::suboptimal_flops)]
pub(crate) fn bounds(lightness: Float) -> [Line; 6] {
    let l = lightness;
    let sub1 = (l + 16.0).powf(3.0) / 1_560_896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    core::array::from_fn(|index| {
        let [m1, m2, m3] = XYZ_TO_LINEAR_SRGB[index / 2];
        let t = (index % 2) as Float;

        let top1 = (284_517.0 * m1 - 94_839.0 * m3) * sub2;
        let top2 = (838_422.0 * m3 + 769_860.0 * m2 + 731_718.0 * m1) * l * sub2
            - (769_860.0 * t) * l;
        let bottom = (632_260.0 * m3 - 126_452.0 * m2) * sub2 + 126_452.0 * t;

        Line {
            slope: top1 / bottom,
            intercept: top2 / bottom,
        }
    })
}

/// Determine the maximum chroma for the given lightness and hue (in degrees).
///
/// This function intersects the ray with the given hue with the six gamut
/// boundaries for the given lightness and picks the shortest non-negative
/// length. Intersections behind the origin are ignored, not clamped.
///
/// # Errors
///
/// This function returns an error if no intersection has a non-negative
/// length. That is the case if lightness or hue is not-a-number.
pub(crate) fn max_chroma_for_lh(
    lightness: Float,
    hue: Float,
) -> Result<Float, GamutBoundaryError> {
    let theta = hue.to_radians();

    bounds(lightness)
        .iter()
        .map(|line| line.length_of_ray_until_intersect(theta))
        .filter(|length| 0.0 <= *length)
        .min_by(Float::total_cmp)
        .ok_or(GamutBoundaryError::new(lightness, hue))
}
