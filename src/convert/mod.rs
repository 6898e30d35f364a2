//! Packing and unpacking of little-endian bit sequences.
//!
//! Index `i` of a sequence always carries weight `2^i`. Only the low 63 bits of
//! an `i64` are ever used, so every decoded value is non-negative.

use tracing::debug;

use crate::{error::{ConvertError, Result}, measurement::Measurement};

/// Longest sequence (and widest encoding) accepted. The sign bit is never written.
pub const MAX_BITS: usize = 63;

/// Decodes a little-endian bit sequence into an integer.
///
/// Fails with [`ConvertError::Range`] if `bits` has 64 or more elements.
pub fn bits_to_int(bits: &[bool]) -> Result<i64> {
	pack(bits, |&b| b)
}

/// Decodes a little-endian sequence of measurement outcomes; `One` is a set bit.
///
/// ```
/// use bitconv::{measurements_to_int, Measurement::*};
/// assert_eq!(measurements_to_int(&[One, Zero]).unwrap(), 1);
/// ```
pub fn measurements_to_int(results: &[Measurement]) -> Result<i64> {
	pack(results, Measurement::is_one)
}

/// Encodes `number` as exactly `bits` little-endian bits.
///
/// Both arguments must be non-negative and `bits` may be at most 63.
/// A width above 63 is an [`ConvertError::InvalidArgument`], not an overflow.
/// Returns [`ConvertError::Overflow`] if `number` needs more than `bits` bits.
pub fn int_to_bits(number: i64, bits: i64) -> Result<Vec<bool>> {
	if !(0..=MAX_BITS as i64).contains(&bits) {
		debug!("rejecting encode width {bits}");
		return Err(ConvertError::InvalidArgument {
			name: "bits",
			value: bits,
			reason: "must be between 0 and 63",
		});
	}
	if number < 0 {
		debug!("rejecting negative number {number}");
		return Err(ConvertError::InvalidArgument {
			name: "number",
			value: number,
			reason: "must be non-negative",
		});
	}
	// Logical shift, the value is known to be non-negative here.
	let mut rest = number as u64;
	let out: Vec<bool> = (0..bits).map(|_| {
		let bit = rest & 1 != 0;
		rest >>= 1;
		bit
	}).collect();
	if rest != 0 {
		debug!("{number} does not fit into {bits} bits");
		return Err(ConvertError::Overflow { number, bits });
	}
	Ok(out)
}

fn pack<T>(items: &[T], is_set: impl Fn(&T) -> bool) -> Result<i64> {
	if items.len() > MAX_BITS {
		debug!("rejecting sequence of length {}", items.len());
		return Err(ConvertError::Range { len: items.len() });
	}
	Ok(items.iter().enumerate().fold(0, |acc, (i, x)| if is_set(x) { acc | (1 << i) } else { acc }))
}
