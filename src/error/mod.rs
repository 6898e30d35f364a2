use thiserror::Error;

/// Everything that can go wrong while converting between bits, measurements and integers.
///
/// Every variant is a violated precondition. Nothing is retried and no partial output is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
	/// A decoded sequence is too long to fit below the sign bit of an `i64`.
	#[error("length must be less than 64, but was {len}")]
	Range { len: usize },

	/// A negative (or too wide) value was passed where it isn't allowed.
	#[error("`{name}` {reason}, but was {value}")]
	InvalidArgument { name: &'static str, value: i64, reason: &'static str },

	/// Text that is not a measurement outcome. An invalid argument, kept apart for its message.
	#[error("expected One, Zero, 1 or 0, but got {0:?}")]
	InvalidMeasurement(String),

	/// The number needs more bits than were requested.
	#[error("number {number} is too large to fit into {bits} bits")]
	Overflow { number: i64, bits: i64 },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
