//! # HSLuv Core
//!
//! This crate converts colors between [HSLuv](https://www.hsluv.org), a
//! human-friendly alternative to HSL built on CIELUV, and sRGB, including
//! sRGB's 24-bit hex codes. It powers palette generators that need colors of
//! uniform perceived lightness across hues.
//!
//! ## 1. Overview
//!
//!   * The functions [`hsluv_to_rgb`], [`hsluv_from_rgb`],
//!     [`hsluv_to_hexcode`], and [`hsluv_from_hexcode`] are the **four entry
//!     points**. [`hex_to_rgb`] and [`rgb_to_hex`] convert between sRGB and
//!     hex codes.
//!   * All coordinates are arrays of three [`Float`]s.
//!   * The [`error`] module defines the **errors**. [`ColorFormatError`]
//!     signals a malformed hex code or coordinates without hex code and
//!     [`GamutBoundaryError`] an undefined maximum chroma. [`HsluvError`]
//!     wraps either.
//!
//! ## 2. Pipeline
//!
//! All conversions walk the same pipeline, one step at a time:
//!
//! ```text
//! sRGB ⇄ linear sRGB ⇄ XYZ ⇄ CIELUV ⇄ CIELCh ⇄ HSLuv
//! ```
//!
//! The step between CIELCh and HSLuv scales chroma by the maximum chroma
//! sRGB can display for the lightness and hue. It is the only step that can
//! fail. Conversions do not validate or clamp coordinates. Only the
//! conversion to hex codes clamps, and it fails for not-a-number and infinite
//! coordinates.
//!
//! ## 3. Feature Flags
//!
//! The `pyffi` feature enables the Python extension module `hsluv_core`,
//! which exposes the four entry points and the hex code helpers.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
pub type Float = f64;

/// [`Float`]'s bits.
pub type Bits = u64;

mod api;
mod core;
pub mod error;

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use api::{
    hex_to_rgb, hsluv_from_hexcode, hsluv_from_rgb, hsluv_to_hexcode, hsluv_to_rgb, rgb_to_hex,
};
pub use error::{ColorFormatError, GamutBoundaryError, HsluvError};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn hsluv_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(hsluv_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(hsluv_from_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(hsluv_to_hexcode, m)?)?;
    m.add_function(wrap_pyfunction!(hsluv_from_hexcode, m)?)?;
    m.add_function(wrap_pyfunction!(hex_to_rgb, m)?)?;
    m.add_function(wrap_pyfunction!(rgb_to_hex, m)?)?;
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;

    Ok(())
}
