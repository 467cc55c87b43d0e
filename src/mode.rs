//! The closed set of commands the bot answers to.

use std::{fmt, str::FromStr};

/// Selects both what roll text a command accepts and how its result is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "The bot's command set is fixed")]
pub enum Mode {
	/// Rolls exactly the dice given (`/roll 2d6+3`)
	Standard,

	/// Rolls 2d20 and keeps the higher die (`/adv +2`)
	Advantage,

	/// Rolls 2d20 and keeps the lower die (`/dis -1`)
	Disadvantage,

	/// Rolls six ability scores, each 4d6 with the lowest die dropped (`/character`)
	CharacterBlock,
}

impl Mode {
	/// All modes, in the order the bot lists its commands.
	pub const ALL: [Self; 4] = [
		Self::Standard,
		Self::Advantage,
		Self::Disadvantage,
		Self::CharacterBlock,
	];

	/// Gets the slash command the mode is served on.
	#[must_use]
	pub const fn command(self) -> &'static str {
		match self {
			Self::Standard => "/roll",
			Self::Advantage => "/adv",
			Self::Disadvantage => "/dis",
			Self::CharacterBlock => "/character",
		}
	}

	/// Gets the usage hint shown to a user whose roll text was rejected.
	///
	/// # Examples
	/// ```
	/// use dicebot::Mode;
	///
	/// assert_eq!(Mode::Standard.usage(), "/roll <num>d<num> (+/-)<num>");
	/// assert_eq!(Mode::CharacterBlock.usage(), "/character");
	/// ```
	#[must_use]
	pub const fn usage(self) -> &'static str {
		match self {
			Self::Standard => "/roll <num>d<num> (+/-)<num>",
			Self::Advantage => "/adv (+/-)<num>",
			Self::Disadvantage => "/dis (+/-)<num>",
			Self::CharacterBlock => "/character",
		}
	}

	/// Gets the number of roll outcomes a single command in this mode produces.
	#[must_use]
	pub const fn outcome_count(self) -> usize {
		match self {
			Self::CharacterBlock => 6,
			Self::Standard | Self::Advantage | Self::Disadvantage => 1,
		}
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.command())
	}
}

impl FromStr for Mode {
	type Err = UnknownModeError;

	/// Maps an inbound route (`/adv`) or bare command name (`adv`, `advantage`) to a mode, ignoring case.
	///
	/// # Examples
	/// ```
	/// use dicebot::Mode;
	///
	/// assert_eq!("/roll".parse::<Mode>()?, Mode::Standard);
	/// assert_eq!("Disadvantage".parse::<Mode>()?, Mode::Disadvantage);
	/// assert!("/initiative".parse::<Mode>().is_err());
	/// # Ok::<(), dicebot::mode::UnknownModeError>(())
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let name = s.trim();
		let name = name.strip_prefix('/').unwrap_or(name).to_ascii_lowercase();
		match name.as_str() {
			"roll" => Ok(Self::Standard),
			"adv" | "advantage" => Ok(Self::Advantage),
			"dis" | "disadvantage" => Ok(Self::Disadvantage),
			"character" => Ok(Self::CharacterBlock),
			_ => Err(UnknownModeError(s.to_owned())),
		}
	}
}

/// A command name that doesn't match any [`Mode`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown command: {0}")]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct UnknownModeError(pub String);
