mod conversion;
mod equality;
mod gamut;
mod math;
mod space;
mod string;

// conversion
pub(crate) use conversion::{convert, from_24bit, to_24bit};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;
#[cfg(test)]
pub(crate) use equality::to_eq_coordinates;

// gamut
#[cfg(test)]
pub(crate) use gamut::max_chroma_for_lh;

// space
pub(crate) use space::ColorSpace;

// string
pub(crate) use string::{format_hex, parse_hex};
