//! Conversions between little-endian bit sequences, measurement outcomes and integers.

pub mod convert;
pub mod error;
pub mod measurement;
pub mod widen;

pub use convert::{MAX_BITS, bits_to_int, int_to_bits, measurements_to_int};
pub use error::{ConvertError, Result};
pub use measurement::{Measurement, bools_to_measurements, measurements_to_bools};
pub use widen::{int_as_big_int, int_as_double};
