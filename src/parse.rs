//! Parsing of roll text (`NdM`, `NdM+K`, `NdM-K`) into [`RollSpec`]s.
//!
//! Parsing happens in three steps: the [`Mode`] decides what the roll text actually is ([`roll_text()`]), a
//! [`fields()`] parser splits it into its raw count, die value, and modifier, and [`parse()`] validates each field.

use std::{ops::Range, str::FromStr};

use chumsky::prelude::*;

use crate::{dice::RollSpec, mode::Mode};

/// Shortest acceptable roll text (`1d6`)
pub const MIN_LEN: usize = 3;

/// Longest acceptable roll text (`99d100+100`, with a digit to spare)
pub const MAX_LEN: usize = 11;

/// Most dice a single roll may ask for
pub const MAX_COUNT: u8 = 99;

/// Most sides a single die may have
pub const MAX_SIDES: u8 = 100;

/// Dice rolled by every advantage/disadvantage command, before any user-supplied modifier
const ADV_DIS_PREFIX: &str = "2d20";

/// Dice making up a single character stat (the kept dice only)
const CHARACTER_STAT: &str = "3d6";

/// The unvalidated parts of a roll text, split around its `d` and first sign character
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Fields {
	/// Everything before the first `d`
	pub count: String,

	/// Everything between the `d` and the modifier (or the end of the text)
	pub sides: String,

	/// The modifier text, if there is one. A negative modifier keeps its `-`; a positive one loses its `+`.
	pub modifier: Option<String>,
}

/// Builds the roll text for a command in the given mode, with all whitespace removed.
///
/// # Examples
/// ```
/// use dicebot::{parse::roll_text, Mode};
///
/// assert_eq!(roll_text("2d6 + 3", Mode::Standard), "2d6+3");
/// assert_eq!(roll_text("+2", Mode::Advantage), "2d20+2");
/// assert_eq!(roll_text("whatever", Mode::CharacterBlock), "3d6");
/// ```
#[must_use]
pub fn roll_text(input: &str, mode: Mode) -> String {
	let text = match mode {
		Mode::Standard => input.to_owned(),
		// Anything the user typed lands after the fixed dice, so only a modifier survives validation
		Mode::Advantage | Mode::Disadvantage => format!("{ADV_DIS_PREFIX}{input}"),
		Mode::CharacterBlock => CHARACTER_STAT.to_owned(),
	};
	text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Generates a parser that splits roll text into its raw [`Fields`].
///
/// The count is everything before the first `d`. The rest is split at its first `+` if it has one, otherwise at its
/// first `-` if it has one; later sign characters stay in the modifier text. No numbers are checked here, so the only
/// way for this parser to fail is text without a `d`.
pub fn fields<'src>() -> impl Parser<'src, &'src str, Fields, extra::Err<Rich<'src, char>>> + Clone {
	let count = none_of("d").repeated().collect::<String>().then_ignore(just('d'));

	// Positive modifier (e.g. 6+3), sign dropped
	let plus = none_of("+")
		.repeated()
		.collect::<String>()
		.then_ignore(just('+'))
		.then(any().repeated().collect::<String>())
		.map(|(sides, modifier)| (sides, Some(modifier)));

	// Negative modifier (e.g. 6-3), sign kept
	let minus = none_of("-")
		.repeated()
		.collect::<String>()
		.then(just('-').then(any().repeated().collect::<String>()))
		.map(|(sides, (sign, rest))| (sides, Some(format!("{sign}{rest}"))));

	// No modifier at all
	let bare = any().repeated().collect::<String>().map(|sides| (sides, None));

	count
		.then(choice((plus, minus, bare)))
		.then_ignore(end())
		.map(|(count, (sides, modifier))| Fields {
			count,
			sides,
			modifier,
		})
}

/// Parses a command's input text into a validated [`RollSpec`] according to its mode.
///
/// # Errors
/// If the roll text is too short or long, has no `d`, or has a count, die value, or modifier that isn't a valid
/// number in range, a [`ParseError`] describing the first problem found is returned.
///
/// # Examples
/// ```
/// use dicebot::{parse, Mode};
///
/// let spec = parse("2d6-3", Mode::Standard)?;
/// assert_eq!((spec.count(), spec.sides(), spec.modifier()), (2, 6, -3));
///
/// let spec = parse("+2", Mode::Advantage)?;
/// assert_eq!((spec.count(), spec.sides(), spec.modifier()), (2, 20, 2));
///
/// assert!(parse("0d6", Mode::Standard).is_err());
/// # Ok::<(), dicebot::parse::ParseError>(())
/// ```
pub fn parse(input: &str, mode: Mode) -> Result<RollSpec, ParseError> {
	let text = roll_text(input, mode);
	tracing::debug!(%mode, %text, "parsing roll text");

	let len = text.chars().count();
	if len < MIN_LEN {
		return Err(ParseError::whole(Reason::TooShort, text));
	}
	if len > MAX_LEN {
		return Err(ParseError::whole(Reason::TooLong, text));
	}

	let Ok(fields) = fields().parse(text.as_str()).into_result() else {
		return Err(ParseError::whole(Reason::MissingSeparator, text));
	};

	// Character offsets of each field within the text
	let count_len = fields.count.chars().count();
	let count_span = 0..count_len;
	let sides_start = count_len.saturating_add(1);
	let sides_span = sides_start..sides_start.saturating_add(fields.sides.chars().count());
	let modifier_span = fields
		.modifier
		.as_ref()
		.map_or(len..len, |modifier| len.saturating_sub(modifier.chars().count())..len);

	// Fields are bounded by MAX_LEN, so any digit string fits in an i64
	let Ok(count) = fields.count.parse::<i64>() else {
		return Err(ParseError::new(Reason::InvalidCount, text, count_span));
	};
	if fields.sides.is_empty() {
		return Err(ParseError::new(Reason::MissingSides, text, sides_span));
	}
	let Ok(sides) = fields.sides.parse::<i64>() else {
		return Err(ParseError::new(Reason::InvalidSides, text, sides_span));
	};
	if sides <= 0 {
		return Err(ParseError::new(Reason::NonPositiveSides, text, sides_span));
	}
	if count <= 0 {
		return Err(ParseError::new(Reason::NonPositiveCount, text, count_span));
	}
	let modifier = match fields.modifier.as_deref().map(str::parse::<i32>) {
		None => 0,
		Some(Ok(modifier)) => modifier,
		Some(Err(_)) => return Err(ParseError::new(Reason::InvalidModifier, text, modifier_span)),
	};

	let Some(count) = u8::try_from(count).ok().filter(|count| *count <= MAX_COUNT) else {
		return Err(ParseError::new(Reason::TooManyDice, text, count_span));
	};
	let Some(sides) = u8::try_from(sides).ok().filter(|sides| *sides <= MAX_SIDES) else {
		return Err(ParseError::new(Reason::TooManySides, text, sides_span));
	};

	Ok(RollSpec::new(count, sides, modifier))
}

impl FromStr for RollSpec {
	type Err = ParseError;

	/// Parses plain roll text, as given to the `/roll` command.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse(s, Mode::Standard)
	}
}

/// Roll text that was rejected, along with why and where
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}. Given {text}")]
#[non_exhaustive]
pub struct ParseError {
	/// What was wrong with the text
	pub reason: Reason,

	/// The roll text that was parsed, after mode handling and whitespace removal
	pub text: String,

	/// Character range of the offending part of [`Self::text`]
	pub span: Range<usize>,
}

impl ParseError {
	/// Creates an error pointing at part of the roll text.
	#[must_use]
	pub const fn new(reason: Reason, text: String, span: Range<usize>) -> Self {
		Self { reason, text, span }
	}

	/// Creates an error pointing at the entire roll text.
	#[must_use]
	fn whole(reason: Reason, text: String) -> Self {
		let span = 0..text.chars().count();
		Self::new(reason, text, span)
	}
}

/// Why roll text was rejected
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Reason {
	/// Fewer than [`MIN_LEN`] characters.
	#[error("Roll string too short")]
	TooShort,

	/// More than [`MAX_LEN`] characters.
	#[error("Roll string too long")]
	TooLong,

	/// No `d` between the dice count and die value.
	#[error("No 'd' found between the number of dice and the die value")]
	MissingSeparator,

	/// The dice count isn't an integer.
	#[error("Non digit found in the number of dice provided")]
	InvalidCount,

	/// Nothing between the `d` and the modifier.
	#[error("No dice value provided")]
	MissingSides,

	/// The die value isn't an integer.
	#[error("Non digit found in the dice value")]
	InvalidSides,

	/// The die value is 0 or negative.
	#[error("Die value can not be 0 or less")]
	NonPositiveSides,

	/// The dice count is 0 or negative.
	#[error("Number of dice can not be 0 or less")]
	NonPositiveCount,

	/// The modifier isn't an integer.
	#[error("Invalid roll modifier")]
	InvalidModifier,

	/// The dice count is above [`MAX_COUNT`].
	#[error("Number of dice can not be more than 99")]
	TooManyDice,

	/// The die value is above [`MAX_SIDES`].
	#[error("Die value can not be more than 100")]
	TooManySides,
}
