//! Abstractions for rolling [`RollSpec`]s using various means.

use std::iter::Peekable;

#[cfg(feature = "fastrand")]
use fastrand::Rng;

use super::{Error, RollOutcome, RollSpec};

/// Rolls dice - what else is there to say?
pub trait Roller {
	/// Rolls a single die.
	#[must_use]
	fn roll_die(&mut self, sides: u8) -> u8;

	/// Rolls every die a spec asks for, in order, and totals them with the spec's modifier.
	///
	/// # Errors
	/// If the spec has no dice or no sides, the roller produces a value that isn't on the die, or the total
	/// overflows, an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use dicebot::{dice::roller::{Iter as IterRoller, Roller}, RollSpec};
	///
	/// let spec: RollSpec = "3d6+2".parse()?;
	/// let outcome = IterRoller::new([6, 1, 4]).generate(&spec)?;
	/// assert_eq!(outcome.rolls(), &[6, 1, 4]);
	/// assert_eq!(outcome.total(), 13);
	/// # Ok::<(), Box<dyn std::error::Error>>(())
	/// ```
	fn generate(&mut self, spec: &RollSpec) -> Result<RollOutcome, Error>
	where
		Self: Sized,
	{
		if spec.count == 0 {
			return Err(Error::NoDice(*spec));
		}
		if spec.sides == 0 {
			return Err(Error::NoSides(*spec));
		}

		// Roll the dice!
		let mut rolls = Vec::with_capacity(spec.count.into());
		for _ in 0..spec.count {
			let roll = self.roll_die(spec.sides);
			if !(1..=spec.sides).contains(&roll) {
				return Err(Error::OutOfRange { roll, spec: *spec });
			}
			rolls.push(roll);
		}

		let total = rolls
			.iter()
			.try_fold(spec.modifier, |sum, &roll| sum.checked_add(i32::from(roll)))
			.ok_or(Error::Overflow(*spec))?;

		Ok(RollOutcome::new(rolls, spec.modifier, total))
	}
}

/// Generates rolls with random values using [fastrand]. Requires the `fastrand` feature (enabled by default).
///
/// Each roller owns its RNG, so rollers can be created per command (or per thread) without any shared state.
///
/// # Examples
///
/// ## Default fastrand roller
/// ```
/// use dicebot::{dice::roller::{FastRand as FastRandRoller, Roller}, RollSpec};
///
/// let mut roller = FastRandRoller::default();
///
/// let spec: RollSpec = "4d6".parse()?;
/// let _ = roller.generate(&spec)?;
/// let _ = roller.generate(&spec)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// ## Manually seeded fastrand roller
/// ```
/// use dicebot::{dice::roller::{FastRand as FastRandRoller, Roller}, RollSpec};
///
/// let spec: RollSpec = "4d6".parse()?;
/// let first = FastRandRoller::with_seed(0x750c38d574400).generate(&spec)?;
/// let second = FastRandRoller::with_seed(0x750c38d574400).generate(&spec)?;
/// assert_eq!(first, second);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[cfg(feature = "fastrand")]
#[derive(Debug, Clone, Default)]
pub struct FastRand(Rng);

#[cfg(feature = "fastrand")]
impl FastRand {
	/// Creates a new fastrand roller that uses the given RNG instance to generate rolls.
	#[must_use]
	#[inline]
	pub const fn new(rng: Rng) -> Self {
		Self(rng)
	}

	/// Creates a new fastrand roller that uses a pre-seeded RNG instance to generate rolls.
	#[must_use]
	#[inline]
	pub fn with_seed(seed: u64) -> Self {
		Self(Rng::with_seed(seed))
	}
}

#[cfg(feature = "fastrand")]
impl Roller for FastRand {
	/// Rolls a single die using the [`fastrand::Rng`] the roller was created with.
	#[inline]
	fn roll_die(&mut self, sides: u8) -> u8 {
		if sides > 0 {
			self.0.u8(1..=sides)
		} else {
			0
		}
	}
}

/// Generates rolls that always have a specific value.
///
/// # Examples
/// ```
/// use dicebot::{dice::roller::{Roller, Val as ValRoller}, RollSpec};
///
/// let mut roller = ValRoller(3);
///
/// let spec: RollSpec = "4d6".parse()?;
/// let outcome = roller.generate(&spec)?;
/// assert!(outcome.rolls().iter().all(|&roll| roll == 3));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Val(pub u8);

impl Roller for Val {
	/// Rolls a single die, always with one specific value.
	#[inline]
	fn roll_die(&mut self, _sides: u8) -> u8 {
		self.0
	}
}

/// Generates rolls that always have their max value.
///
/// # Examples
/// ```
/// use dicebot::{dice::roller::{Max as MaxRoller, Roller}, RollSpec};
///
/// let spec: RollSpec = "2d20-1".parse()?;
/// let outcome = MaxRoller.generate(&spec)?;
/// assert_eq!(outcome.rolls(), &[20, 20]);
/// assert_eq!(outcome.total(), 39);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Max;

impl Roller for Max {
	/// Rolls a single die, always with the max value (same as the number of sides).
	#[inline]
	fn roll_die(&mut self, sides: u8) -> u8 {
		sides
	}
}

/// Generates rolls from an iterator of values. Mainly useful for testing purposes.
#[derive(Debug, Clone)]
pub struct Iter<I: Iterator<Item = u8>>(Peekable<I>);

impl<I: Iterator<Item = u8>> Iter<I> {
	/// Checks whether the iterator still has values available.
	#[inline]
	pub fn can_roll(&mut self) -> bool {
		self.0.peek().is_some()
	}

	/// Creates a new roller that uses the given iterator to provide roll values.
	#[must_use]
	#[inline]
	pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
		Self(iter.into_iter().peekable())
	}
}

impl<I: Iterator<Item = u8>> Roller for Iter<I> {
	/// Rolls a die with the value from the next iteration.
	///
	/// A finished iterator rolls 0, which [`Roller::generate()`] rejects as out of range.
	#[inline]
	fn roll_die(&mut self, _sides: u8) -> u8 {
		self.0.next().unwrap_or(0)
	}
}
