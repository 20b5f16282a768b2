use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::error::{GeneratorError, Result};

/// Number of names requested in a single generation call.
///
/// # Invariants
/// - The wrapped value is always within `[Amount::MIN, Amount::MAX]`
///
/// An `Amount` can be built from the common integer types and from a
/// string, so callers holding raw user input go through the same checks
/// as callers holding a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(usize);

impl Amount {
	/// Smallest accepted amount (inclusive).
	pub const MIN: usize = 1;

	/// Largest accepted amount (inclusive).
	pub const MAX: usize = 10;

	/// Creates an amount.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `value` is outside `[MIN, MAX]`.
	pub fn new(value: usize) -> Result<Self> {
		if !(Self::MIN..=Self::MAX).contains(&value) {
			return Err(out_of_range(value));
		}
		Ok(Self(value))
	}

	/// Returns the amount as a plain count.
	pub fn get(self) -> usize {
		self.0
	}
}

fn out_of_range<T: fmt::Display>(value: T) -> GeneratorError {
	GeneratorError::InvalidArgument(format!(
		"amount must be between {} and {}, got {}",
		Amount::MIN,
		Amount::MAX,
		value
	))
}

impl Default for Amount {
	fn default() -> Self {
		Self(Self::MIN)
	}
}

impl fmt::Display for Amount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

macro_rules! amount_from_integer {
	($($int:ty),*) => {
		$(
			impl TryFrom<$int> for Amount {
				type Error = GeneratorError;

				fn try_from(value: $int) -> Result<Self> {
					let count = usize::try_from(value).map_err(|_| {
						GeneratorError::InvalidArgument(format!("amount must be a positive integer, got {}", value))
					})?;
					Amount::new(count)
				}
			}
		)*
	};
}

amount_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl FromStr for Amount {
	type Err = GeneratorError;

	fn from_str(s: &str) -> Result<Self> {
		// Integers too wide for i64 are still integers, just out of range
		let value: i64 = s.trim().parse().map_err(|err: ParseIntError| match err.kind() {
			IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(s.trim()),
			_ => GeneratorError::InvalidArgument(format!("amount must be an integer, got {:?}", s)),
		})?;
		Amount::try_from(value)
	}
}

impl TryFrom<&str> for Amount {
	type Error = GeneratorError;

	fn try_from(value: &str) -> Result<Self> {
		value.parse()
	}
}
