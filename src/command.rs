//! Handling of a single bot command from start to finish: parse, roll, format.

use std::{fs, io, path::Path};

use serde::Deserialize;

#[cfg(feature = "fastrand")]
use crate::dice::roller::FastRand;
use crate::{
	dice::{self, RollOutcome, RollSpec, Roller},
	format::{self, Formatter},
	mode::Mode,
	parse::{self, ParseError},
};

/// Reply sent for errors that aren't the user's fault
pub const FALLBACK_REPLY: &str = "Hmm....something went wrong. Try again?";

/// Settings for a [`Dicebot`]
///
/// `breakdown` changes how replies are rendered. `debug` never changes a reply: it's for the host, which passes
/// [`Self::log_filter()`] to its tracing subscriber.
///
/// # Examples
/// ```
/// use dicebot::Config;
///
/// let config = Config::from_toml_str("breakdown = true")?;
/// assert!(config.breakdown);
/// assert!(!config.debug);
/// # Ok::<(), dicebot::command::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[non_exhaustive]
pub struct Config {
	/// List every die and the modifier in standard roll replies, rather than just the total
	pub breakdown: bool,

	/// Log each stage of every command. Only affects [`Self::log_filter()`].
	pub debug: bool,
}

impl Config {
	/// Creates a config with the given settings.
	#[must_use]
	pub const fn new(breakdown: bool, debug: bool) -> Self {
		Self { breakdown, debug }
	}

	/// Parses a config from TOML text. Missing keys take their default values.
	///
	/// # Errors
	/// If the text isn't valid TOML or has unknown keys or wrongly-typed values, an error variant is returned.
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(text)?)
	}

	/// Loads a config from a TOML file.
	///
	/// # Errors
	/// If the file can't be read or doesn't contain a valid config, an error variant is returned.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let text = fs::read_to_string(path)?;
		Self::from_toml_str(&text)
	}

	/// Gets the default log filter directive for hosts to install: debug level for this crate when `debug` is set,
	/// info level otherwise.
	#[must_use]
	pub const fn log_filter(&self) -> &'static str {
		if self.debug {
			"dicebot=debug"
		} else {
			"dicebot=info"
		}
	}
}

/// An error resulting from loading a [`Config`]
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
	/// The config file couldn't be read.
	#[error("unable to read config file: {0}")]
	Io(#[from] io::Error),

	/// The config text isn't a valid config.
	#[error("invalid config: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Everything produced by a successful command: the parsed spec, every roll made from it, and the rendered reply
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Rolled {
	/// Mode the command was handled in
	pub mode: Mode,

	/// Spec parsed from the command's text
	pub spec: RollSpec,

	/// Each set of dice rolled, in order (one for most modes, six for a stat block)
	pub outcomes: Vec<RollOutcome>,

	/// Rendered reply text
	pub text: String,
}

/// Where a [`Reply`] should be posted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "Chat replies are either public or not")]
pub enum Visibility {
	/// Visible to everyone in the channel
	InChannel,

	/// Visible only to the user who issued the command
	Ephemeral,
}

/// Reply text for a command along with where it should be posted
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Reply {
	/// Text to post
	pub text: String,

	/// Where to post it
	pub visibility: Visibility,
}

/// Handles dice commands. Holds only configuration, so one bot can serve any number of commands, from any number of
/// threads.
///
/// # Examples
/// ```
/// use dicebot::{dice::roller::Iter as IterRoller, Config, Dicebot, Mode};
///
/// let bot = Dicebot::new(Config::default());
/// let mut roller = IterRoller::new([15, 8]);
/// let rolled = bot.roll_using("", "alice", Mode::Disadvantage, &mut roller)?;
/// assert_eq!(rolled.outcomes[0].rolls(), &[15, 8]);
/// assert_eq!(rolled.text, "alice rolled at Disadvantage:\n~15~ *8* = *8*\n");
/// # Ok::<(), dicebot::command::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dicebot {
	/// Settings the bot was created with
	config: Config,

	/// Renders replies according to the config
	formatter: Formatter,
}

impl Dicebot {
	/// Creates a bot with the given settings.
	#[must_use]
	pub const fn new(config: Config) -> Self {
		Self {
			config,
			formatter: Formatter::new(config.breakdown),
		}
	}

	/// Gets the settings the bot was created with.
	#[must_use]
	#[inline]
	pub const fn config(&self) -> &Config {
		&self.config
	}

	/// Handles a command, rolling with a freshly-seeded [`FastRand`] roller. See [`Self::roll_using()`].
	#[cfg(feature = "fastrand")]
	#[expect(clippy::missing_errors_doc, reason = "Same as roll_using")]
	pub fn roll(&self, raw_text: &str, username: &str, mode: Mode) -> Result<Rolled, Error> {
		self.roll_using(raw_text, username, mode, &mut FastRand::default())
	}

	/// Handles a command: parses its text for the mode, rolls the dice with the given roller, and renders the reply.
	///
	/// A stat block rolls the parsed spec plus one extra die six times, so that the lowest die of each can be dropped.
	///
	/// # Errors
	/// If the text isn't valid roll text for the mode, [`Error::Parse`] is returned. The other variants only occur if
	/// the roller misbehaves or something is broken.
	pub fn roll_using(
		&self,
		raw_text: &str,
		username: &str,
		mode: Mode,
		roller: &mut impl Roller,
	) -> Result<Rolled, Error> {
		let span = tracing::debug_span!("command", %mode, username);
		let _enter = span.enter();

		let spec = parse::parse(raw_text, mode)?;
		tracing::debug!(%spec, "parsed roll");

		let outcomes = match mode {
			Mode::CharacterBlock => {
				let stat = spec.with_extra_die();
				(0..mode.outcome_count())
					.map(|_| roller.generate(&stat))
					.collect::<Result<Vec<_>, _>>()?
			}
			Mode::Standard | Mode::Advantage | Mode::Disadvantage => vec![roller.generate(&spec)?],
		};
		tracing::debug!(?outcomes, "rolled dice");

		let text = self.formatter.format(mode, &outcomes, username, &spec)?;
		tracing::debug!(%text, "formatted reply");

		Ok(Rolled {
			mode,
			spec,
			outcomes,
			text,
		})
	}

	/// Handles a command and returns only its reply text. See [`Self::roll()`].
	#[cfg(feature = "fastrand")]
	#[expect(clippy::missing_errors_doc, reason = "Same as roll_using")]
	pub fn handle_command(&self, raw_text: &str, username: &str, mode: Mode) -> Result<String, Error> {
		self.roll(raw_text, username, mode).map(|rolled| rolled.text)
	}

	/// Handles a command with the given roller and returns only its reply text. See [`Self::roll_using()`].
	#[expect(clippy::missing_errors_doc, reason = "Same as roll_using")]
	pub fn handle_command_using(
		&self,
		raw_text: &str,
		username: &str,
		mode: Mode,
		roller: &mut impl Roller,
	) -> Result<String, Error> {
		self.roll_using(raw_text, username, mode, roller)
			.map(|rolled| rolled.text)
	}

	/// Handles a command and turns any error into a reply, the way the bot answers in chat. See [`Self::reply_using()`].
	#[cfg(feature = "fastrand")]
	#[must_use]
	pub fn reply(&self, raw_text: &str, username: &str, mode: Mode) -> Reply {
		self.reply_using(raw_text, username, mode, &mut FastRand::default())
	}

	/// Handles a command with the given roller and turns any error into a reply.
	///
	/// Rolls are posted in the channel. Rejected roll text is answered privately with the reason and the mode's usage
	/// hint. Any other error is logged and answered privately with [`FALLBACK_REPLY`].
	///
	/// # Examples
	/// ```
	/// use dicebot::{dice::roller::Max as MaxRoller, Config, Dicebot, Mode, Visibility};
	///
	/// let bot = Dicebot::new(Config::default());
	///
	/// let reply = bot.reply_using("3d4", "alice", Mode::Standard, &mut MaxRoller);
	/// assert_eq!(reply.text, "_alice rolled 3d4 = *12*_\n");
	/// assert_eq!(reply.visibility, Visibility::InChannel);
	///
	/// let reply = bot.reply_using("3x4", "alice", Mode::Standard, &mut MaxRoller);
	/// assert!(reply.text.ends_with("\n Please use /roll <num>d<num> (+/-)<num>"));
	/// assert_eq!(reply.visibility, Visibility::Ephemeral);
	/// ```
	#[must_use]
	pub fn reply_using(&self, raw_text: &str, username: &str, mode: Mode, roller: &mut impl Roller) -> Reply {
		match self.roll_using(raw_text, username, mode, roller) {
			Ok(rolled) => Reply {
				text: rolled.text,
				visibility: Visibility::InChannel,
			},
			Err(Error::Parse(err)) => Reply {
				text: format!("error: {err}\n Please use {}", mode.usage()),
				visibility: Visibility::Ephemeral,
			},
			Err(err) => {
				tracing::error!(%mode, username, raw_text, error = %err, "unhandled error while handling command");
				Reply {
					text: FALLBACK_REPLY.to_owned(),
					visibility: Visibility::Ephemeral,
				}
			}
		}
	}
}

/// An error resulting from handling a command
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// The command's text isn't valid roll text.
	#[error(transparent)]
	Parse(#[from] ParseError),

	/// Rolling the dice failed.
	#[error("error rolling dice: {0}")]
	Generation(#[from] dice::Error),

	/// Rendering the reply failed.
	#[error("error formatting roll: {0}")]
	Format(#[from] format::Error),
}

impl Error {
	/// Checks whether the error was caused by the user's input, rather than being a defect.
	#[must_use]
	pub const fn is_user_fault(&self) -> bool {
		matches!(self, Self::Parse(..))
	}
}
