/// The enumeration of color spaces along the conversion pipeline.
///
/// The color spaces form a pipeline, with conversions between neighboring
/// color spaces in both directions. The variants are declared in pipeline
/// order, which also is their ordering:
///
/// ```text
/// sRGB ⇄ linear sRGB ⇄ XYZ ⇄ CIELUV ⇄ CIELCh(uv) ⇄ HSLuv
/// ```
///
/// # RGB
///
/// [sRGB](https://en.wikipedia.org/wiki/SRGB) comes in its gamma-corrected
/// and its linear form. For both, in-gamut coordinates range from 0 to 1,
/// inclusive. The sRGB coordinates also are the ones encoded by 24-bit hex
/// codes.
///
/// # XYZ
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) with the D65
/// standard illuminant serves as the hub between RGB and the perceptually
/// motivated color spaces. Its coordinates are unbounded.
///
/// # CIELUV and CIELCh
///
/// [CIELUV](https://en.wikipedia.org/wiki/CIELUV) uses lightness L in `0..=100`
/// and two unbounded Cartesian coordinates u and v for colorness. CIELCh(uv)
/// is the same color space in polar coordinates, with non-negative chroma C
/// and hue h in degrees `0..360`.
///
/// # HSLuv
///
/// [HSLuv](https://www.hsluv.org) rescales CIELCh's chroma into a saturation
/// `0..=100`, where 100 is the edge of the sRGB gamut for the color's
/// lightness and hue. Its coordinates are hue, saturation, and lightness, in
/// that order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum ColorSpace {
    Srgb,
    LinearSrgb,
    Xyz,
    Luv,
    Lch,
    Hsluv,
}
