use std::{fmt::Display, str::FromStr};

use crate::error::ConvertError;

/// The outcome of measuring a single qubit.
///
/// Decodes like a `bool` (`One` is a set bit), but stays its own type so that
/// measurement records and plain flags can't be mixed up by accident.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Measurement {
	#[default]
	Zero,
	One,
}
impl Measurement {
	pub fn is_one(&self) -> bool {
		*self == Measurement::One
	}
}
impl From<bool> for Measurement {
	fn from(value: bool) -> Self {
		match value {
			true => Measurement::One,
			false => Measurement::Zero,
		}
	}
}
impl From<Measurement> for bool {
	fn from(value: Measurement) -> Self {
		value.is_one()
	}
}
impl Display for Measurement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Measurement::Zero => "Zero",
			Measurement::One => "One",
		})
	}
}
impl FromStr for Measurement {
	type Err = ConvertError;
	/// Accepts the display form as well as a single binary digit.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"One" | "1" => Ok(Measurement::One),
			"Zero" | "0" => Ok(Measurement::Zero),
			other => Err(ConvertError::InvalidMeasurement(other.to_string())),
		}
	}
}

pub fn measurements_to_bools(results: &[Measurement]) -> Vec<bool> {
	results.iter().map(|&r| r.into()).collect()
}
pub fn bools_to_measurements(bits: &[bool]) -> Vec<Measurement> {
	bits.iter().map(|&b| b.into()).collect()
}
