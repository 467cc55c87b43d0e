//! The roll data model: what to roll ([`RollSpec`]) and what was rolled ([`RollOutcome`]).
//!
//! Rolling itself is done by a [`Roller`], which is the only way to produce a [`RollOutcome`].

pub mod roller;

use std::fmt;

pub use self::roller::Roller;

/// A validated request to roll `count` dice with `sides` sides each and add `modifier` to their sum
///
/// Specs are only ever built by the [parser](crate::parse), so every spec seen outside this crate has a count in
/// `1..=99` and a die size in `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollSpec {
	/// Number of dice to roll
	count: u8,

	/// Number of sides for each die
	sides: u8,

	/// Flat amount added to (or subtracted from) the dice sum
	modifier: i32,
}

impl RollSpec {
	/// Creates a spec without validating it.
	#[must_use]
	pub(crate) const fn new(count: u8, sides: u8, modifier: i32) -> Self {
		Self {
			count,
			sides,
			modifier,
		}
	}

	/// Gets the number of dice to roll.
	#[must_use]
	#[inline]
	pub const fn count(&self) -> u8 {
		self.count
	}

	/// Gets the number of sides per die.
	#[must_use]
	#[inline]
	pub const fn sides(&self) -> u8 {
		self.sides
	}

	/// Gets the modifier added to the dice sum.
	#[must_use]
	#[inline]
	pub const fn modifier(&self) -> i32 {
		self.modifier
	}

	/// Creates a spec matching this one but with one more die to roll.
	///
	/// A character stat keeps three dice, so its rolls are made from the kept spec plus the die that gets dropped.
	///
	/// # Examples
	/// ```
	/// use dicebot::{parse, Mode};
	///
	/// let spec = parse("", Mode::CharacterBlock)?;
	/// assert_eq!(spec.to_string(), "3d6");
	/// assert_eq!(spec.with_extra_die().to_string(), "4d6");
	/// # Ok::<(), dicebot::parse::ParseError>(())
	/// ```
	#[must_use]
	pub const fn with_extra_die(&self) -> Self {
		Self::new(self.count.saturating_add(1), self.sides, self.modifier)
	}
}

impl fmt::Display for RollSpec {
	/// Formats the spec back into roll text, e.g. `2d6`, `2d6+3` or `2d6-3`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}d{}", self.count, self.sides)?;
		if self.modifier > 0 {
			write!(f, "+{}", self.modifier)
		} else if self.modifier < 0 {
			write!(f, "{}", self.modifier)
		} else {
			Ok(())
		}
	}
}

/// The result of rolling a [`RollSpec`]: every die in roll order, the modifier, and their total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
	/// Each die's value, in the order the dice were rolled
	rolls: Vec<u8>,

	/// Modifier copied from the spec that was rolled
	modifier: i32,

	/// Sum of all rolls plus the modifier
	total: i32,
}

impl RollOutcome {
	/// Creates an outcome from its parts without checking that the total adds up.
	#[must_use]
	pub(crate) const fn new(rolls: Vec<u8>, modifier: i32, total: i32) -> Self {
		Self {
			rolls,
			modifier,
			total,
		}
	}

	/// Gets each die's value, in the order the dice were rolled.
	#[must_use]
	#[inline]
	pub fn rolls(&self) -> &[u8] {
		&self.rolls
	}

	/// Gets the modifier that was added to the dice sum.
	#[must_use]
	#[inline]
	pub const fn modifier(&self) -> i32 {
		self.modifier
	}

	/// Gets the sum of all rolls plus the modifier.
	#[must_use]
	#[inline]
	pub const fn total(&self) -> i32 {
		self.total
	}
}

/// An error produced while rolling a [`RollSpec`]
///
/// None of these can happen for a spec that came out of the parser; seeing one means something is broken.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// The spec asks for zero dice.
	#[error("invalid number of dice. Passed {0}")]
	NoDice(RollSpec),

	/// The spec asks for dice with zero sides.
	#[error("invalid die value. Passed {0}")]
	NoSides(RollSpec),

	/// The roller produced a value that can't be shown on the die.
	#[error("rolled {roll}, which is not on a die of {spec}")]
	OutOfRange {
		/// Value that was rolled
		roll: u8,

		/// Spec being rolled
		spec: RollSpec,
	},

	/// There was an integer overflow when adding the modifier to the dice sum.
	#[error("integer overflow totalling {0}")]
	Overflow(RollSpec),
}
