//! Rendering of roll outcomes into chat-ready text.
//!
//! The output uses Slack-style markup: `*bold*` for totals and kept dice, `~strike~` for dropped dice, and `_italic_`
//! around standard rolls. Every rendered message ends with a newline.

use crate::{
	dice::{RollOutcome, RollSpec},
	mode::Mode,
};

/// Number of dice rolled per advantage/disadvantage command
const ADV_DIS_DICE: usize = 2;

/// Number of dice rolled per character stat (three kept, one dropped)
const STAT_DICE: usize = 4;

/// Renders roll outcomes for each [`Mode`]. Formatting is pure: identical inputs always give identical text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
	/// Whether standard rolls list every die and the modifier before their total
	breakdown: bool,
}

impl Formatter {
	/// Creates a formatter, optionally listing individual dice in standard rolls.
	#[must_use]
	pub const fn new(breakdown: bool) -> Self {
		Self { breakdown }
	}

	/// Renders the outcomes of a command in the given mode.
	///
	/// # Errors
	/// If the number of outcomes doesn't match what the mode produces, or any outcome has the wrong number of dice
	/// for the mode, an error variant is returned.
	pub fn format(&self, mode: Mode, outcomes: &[RollOutcome], username: &str, spec: &RollSpec) -> Result<String, Error> {
		if outcomes.len() != mode.outcome_count() {
			return Err(Error::OutcomeCount {
				mode,
				expected: mode.outcome_count(),
				found: outcomes.len(),
			});
		}

		match (mode, outcomes) {
			(Mode::Standard, [outcome]) => self.standard(outcome, username, spec),
			(Mode::Advantage, [outcome]) => self.advantage(outcome, username, spec),
			(Mode::Disadvantage, [outcome]) => self.disadvantage(outcome, username, spec),
			(Mode::CharacterBlock, _) => self.stat_block(outcomes, username),
			_ => Err(Error::OutcomeCount {
				mode,
				expected: mode.outcome_count(),
				found: outcomes.len(),
			}),
		}
	}

	/// Renders a standard roll: `_<user> rolled <N>d<M> = *<total>*_`.
	///
	/// With breakdown enabled, the dice and modifier are listed before the total.
	///
	/// # Errors
	/// If the outcome doesn't have as many dice as the spec asks for, an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use dicebot::{dice::roller::{Iter as IterRoller, Roller}, Formatter, RollSpec};
	///
	/// let spec: RollSpec = "2d6+3".parse()?;
	/// let outcome = IterRoller::new([2, 5]).generate(&spec)?;
	///
	/// let text = Formatter::new(false).standard(&outcome, "alice", &spec)?;
	/// assert_eq!(text, "_alice rolled 2d6 = *10*_\n");
	///
	/// let text = Formatter::new(true).standard(&outcome, "alice", &spec)?;
	/// assert_eq!(text, "_alice rolled 2d6 = 2 + 5 (+3) = *10*_\n");
	/// # Ok::<(), Box<dyn std::error::Error>>(())
	/// ```
	pub fn standard(&self, outcome: &RollOutcome, username: &str, spec: &RollSpec) -> Result<String, Error> {
		check_roll_count(outcome, usize::from(spec.count()))?;

		let breakdown = if self.breakdown {
			let rolls = outcome.rolls().iter().map(ToString::to_string).collect::<Vec<_>>();
			format!("{}{} = ", rolls.join(" + "), modifier_suffix(outcome.modifier()))
		} else {
			String::new()
		};

		Ok(format!(
			"_{username} rolled {}d{} = {breakdown}*{}*_\n",
			spec.count(),
			spec.sides(),
			outcome.total()
		))
	}

	/// Renders a roll at advantage, keeping the higher of the two dice (the first one on a tie).
	///
	/// # Errors
	/// If the spec or outcome isn't exactly two dice, or the kept die plus the modifier overflows, an error variant is
	/// returned.
	///
	/// # Examples
	/// ```
	/// use dicebot::{dice::roller::{Iter as IterRoller, Roller}, parse, Formatter, Mode};
	///
	/// let spec = parse("+2", Mode::Advantage)?;
	/// let outcome = IterRoller::new([5, 12]).generate(&spec)?;
	/// let text = Formatter::default().advantage(&outcome, "alice", &spec)?;
	/// assert_eq!(text, "alice rolled at Advantage:\n~5~ *12* (+2) = *14*\n");
	/// # Ok::<(), Box<dyn std::error::Error>>(())
	/// ```
	#[expect(clippy::unused_self, reason = "Only standard rolls have formatting options")]
	pub fn advantage(&self, outcome: &RollOutcome, username: &str, spec: &RollSpec) -> Result<String, Error> {
		keep_one(outcome, spec, format!("{username} rolled at Advantage:"), |first, second| {
			first >= second
		})
	}

	/// Renders a roll at disadvantage, keeping the lower of the two dice (the first one on a tie).
	///
	/// # Errors
	/// If the spec or outcome isn't exactly two dice, or the kept die plus the modifier overflows, an error variant is
	/// returned.
	#[expect(clippy::unused_self, reason = "Only standard rolls have formatting options")]
	pub fn disadvantage(&self, outcome: &RollOutcome, username: &str, spec: &RollSpec) -> Result<String, Error> {
		keep_one(outcome, spec, format!("{username} rolled at Disadvantage:"), |first, second| {
			first <= second
		})
	}

	/// Renders a character stat block: six lines of four dice each, with the lowest die struck through and the other
	/// three summed.
	///
	/// # Errors
	/// If there aren't exactly six outcomes, or any outcome doesn't have exactly four dice, an error variant is
	/// returned.
	#[expect(clippy::unused_self, reason = "Only standard rolls have formatting options")]
	pub fn stat_block(&self, outcomes: &[RollOutcome], username: &str) -> Result<String, Error> {
		let expected = Mode::CharacterBlock.outcome_count();
		if outcomes.len() != expected {
			return Err(Error::OutcomeCount {
				mode: Mode::CharacterBlock,
				expected,
				found: outcomes.len(),
			});
		}

		let mut text = format!("{username} rolled a stat block:\n");
		for outcome in outcomes {
			check_roll_count(outcome, STAT_DICE)?;

			let mut sorted = outcome.rolls().to_vec();
			sorted.sort_unstable();
			let &[lowest, a, b, c] = sorted.as_slice() else {
				return Err(Error::RollCount {
					expected: STAT_DICE,
					rolls: outcome.rolls().to_vec(),
				});
			};

			let sum = [a, b, c].into_iter().map(u16::from).sum::<u16>();
			text.push_str(&format!("~{lowest}~ {a} + {b} + {c} = *{sum}*\n"));
		}

		Ok(text)
	}
}

/// Renders a two-dice roll that keeps a single die. `keep_first` decides whether the first die is kept over the
/// second; either way the dice are shown in roll order.
fn keep_one(
	outcome: &RollOutcome,
	spec: &RollSpec,
	header: String,
	keep_first: impl Fn(u8, u8) -> bool,
) -> Result<String, Error> {
	if usize::from(spec.count()) != ADV_DIS_DICE {
		return Err(Error::SpecCount {
			expected: ADV_DIS_DICE,
			spec: *spec,
		});
	}
	let &[first, second] = outcome.rolls() else {
		return Err(Error::RollCount {
			expected: ADV_DIS_DICE,
			rolls: outcome.rolls().to_vec(),
		});
	};

	let (shown, kept) = if keep_first(first, second) {
		(format!("*{first}* ~{second}~"), first)
	} else {
		(format!("~{first}~ *{second}*"), second)
	};
	let total = i32::from(kept)
		.checked_add(outcome.modifier())
		.ok_or(Error::Overflow {
			kept,
			modifier: outcome.modifier(),
		})?;

	Ok(format!(
		"{header}\n{shown}{} = *{total}*\n",
		modifier_suffix(outcome.modifier())
	))
}

/// Ensures an outcome has the expected number of dice.
fn check_roll_count(outcome: &RollOutcome, expected: usize) -> Result<(), Error> {
	if outcome.rolls().len() == expected {
		Ok(())
	} else {
		Err(Error::RollCount {
			expected,
			rolls: outcome.rolls().to_vec(),
		})
	}
}

/// Builds the parenthesized modifier shown after the dice: ` (+2)`, ` (-2)`, or nothing for 0.
fn modifier_suffix(modifier: i32) -> String {
	match modifier {
		0 => String::new(),
		m if m > 0 => format!(" (+{m})"),
		m => format!(" ({m})"),
	}
}

/// An error resulting from outcomes that don't have the shape their mode requires
///
/// Outcomes made by a [`Dicebot`](crate::Dicebot) always have the right shape; seeing one means something is broken.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// A roll has the wrong number of dice.
	#[error("expected {expected} dice in the roll, found {rolls:?}")]
	RollCount {
		/// Number of dice the mode requires
		expected: usize,

		/// Dice actually rolled
		rolls: Vec<u8>,
	},

	/// The spec asks for the wrong number of dice for the mode.
	#[error("expected {expected} dice, but the roll was {spec}")]
	SpecCount {
		/// Number of dice the mode requires
		expected: usize,

		/// Spec that was rolled
		spec: RollSpec,
	},

	/// A command has the wrong number of rolls.
	#[error("expected {expected} rolls for {mode}, found {found}")]
	OutcomeCount {
		/// Mode being formatted
		mode: Mode,

		/// Number of rolls the mode requires
		expected: usize,

		/// Number of rolls actually present
		found: usize,
	},

	/// There was an integer overflow when adding the modifier to the kept die.
	#[error("integer overflow while adding {modifier} to the kept die {kept}")]
	Overflow {
		/// Die that was kept
		kept: u8,

		/// Modifier being added
		modifier: i32,
	},
}
