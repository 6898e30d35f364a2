use num::BigInt;

/// Widens to `f64`. Exact up to `2^53`, rounded to nearest above that.
#[allow(clippy::cast_precision_loss)]
pub fn int_as_double(number: i64) -> f64 {
	number as f64
}

pub fn int_as_big_int(number: i64) -> BigInt {
	BigInt::from(number)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn double(){
		assert_eq!(int_as_double(2), 2.0);
		assert_eq!(int_as_double(-9_007_199_254_740_991), -9_007_199_254_740_991.0);
		assert_eq!(int_as_double(i64::MAX), 9_223_372_036_854_775_808.0);
	}

	#[test]
	fn big_int(){
		assert_eq!(int_as_big_int(i64::MAX).to_string(), "9223372036854775807");
		assert_eq!(int_as_big_int(i64::MIN).to_string(), "-9223372036854775808");
		assert_eq!(int_as_big_int(0), BigInt::from(0u8));
	}
}
