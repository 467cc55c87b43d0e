use crate::{
	dice::{
		roller::{Iter as IterRoller, Roller},
		RollOutcome, RollSpec,
	},
	format::{Error, Formatter},
	mode::Mode,
	parse::parse,
};

#[test]
fn standard_roll() {
	let (spec, outcome) = rolled("2d6+3", Mode::Standard, [2, 5]);
	let text = Formatter::new(false).standard(&outcome, "alice", &spec).unwrap();
	assert_eq!(text, "_alice rolled 2d6 = *10*_\n");
}

#[test]
fn standard_roll_with_breakdown() {
	let formatter = Formatter::new(true);

	let (spec, outcome) = rolled("3d8-1", Mode::Standard, [8, 1, 4]);
	let text = formatter.standard(&outcome, "bob", &spec).unwrap();
	assert_eq!(text, "_bob rolled 3d8 = 8 + 1 + 4 (-1) = *12*_\n");

	let (spec, outcome) = rolled("1d20", Mode::Standard, [17]);
	let text = formatter.standard(&outcome, "bob", &spec).unwrap();
	assert_eq!(text, "_bob rolled 1d20 = 17 = *17*_\n");
}

#[test]
fn advantage_keeps_first_when_higher() {
	let (spec, outcome) = rolled("", Mode::Advantage, [15, 8]);
	let text = Formatter::default().advantage(&outcome, "alice", &spec).unwrap();
	assert_eq!(text, "alice rolled at Advantage:\n*15* ~8~ = *15*\n");
}

#[test]
fn advantage_keeps_second_when_higher() {
	let (spec, outcome) = rolled("", Mode::Advantage, [5, 12]);
	let text = Formatter::default().advantage(&outcome, "alice", &spec).unwrap();
	assert_eq!(text, "alice rolled at Advantage:\n~5~ *12* = *12*\n");
}

#[test]
fn advantage_tie_keeps_first() {
	let (spec, outcome) = rolled("-3", Mode::Advantage, [9, 9]);
	let text = Formatter::default().advantage(&outcome, "alice", &spec).unwrap();
	assert_eq!(text, "alice rolled at Advantage:\n*9* ~9~ (-3) = *6*\n");
}

#[test]
fn disadvantage_keeps_lower() {
	let formatter = Formatter::default();

	let (spec, outcome) = rolled("", Mode::Disadvantage, [15, 8]);
	let text = formatter.disadvantage(&outcome, "carol", &spec).unwrap();
	assert_eq!(text, "carol rolled at Disadvantage:\n~15~ *8* = *8*\n");

	let (spec, outcome) = rolled("+4", Mode::Disadvantage, [3, 17]);
	let text = formatter.disadvantage(&outcome, "carol", &spec).unwrap();
	assert_eq!(text, "carol rolled at Disadvantage:\n*3* ~17~ (+4) = *7*\n");

	let (spec, outcome) = rolled("", Mode::Disadvantage, [11, 11]);
	let text = formatter.disadvantage(&outcome, "carol", &spec).unwrap();
	assert_eq!(text, "carol rolled at Disadvantage:\n*11* ~11~ = *11*\n");
}

#[test]
fn stat_block() {
	let outcomes = stats([
		[1, 4, 5, 6],
		[3, 3, 3, 3],
		[6, 6, 6, 6],
		[2, 1, 1, 1],
		[5, 2, 6, 4],
		[1, 1, 1, 1],
	]);
	let text = Formatter::default().stat_block(&outcomes, "dave").unwrap();
	assert_eq!(
		text,
		"dave rolled a stat block:\n\
		~1~ 4 + 5 + 6 = *15*\n\
		~3~ 3 + 3 + 3 = *9*\n\
		~6~ 6 + 6 + 6 = *18*\n\
		~1~ 1 + 1 + 2 = *4*\n\
		~2~ 4 + 5 + 6 = *15*\n\
		~1~ 1 + 1 + 1 = *3*\n"
	);
}

#[test]
fn stat_block_keeps_roll_order_in_outcomes() {
	let outcomes = stats([[6, 1, 5, 4]; 6]);
	let text = Formatter::default().stat_block(&outcomes, "dave").unwrap();
	assert!(text.lines().skip(1).all(|line| line == "~1~ 4 + 5 + 6 = *15*"));
	assert_eq!(outcomes[0].rolls(), &[6, 1, 5, 4]);
}

#[test]
fn formatting_is_repeatable() {
	let formatter = Formatter::new(true);
	let (spec, outcome) = rolled("4d10+2", Mode::Standard, [3, 10, 7, 1]);
	let first = formatter.format(Mode::Standard, &[outcome.clone()], "erin", &spec).unwrap();
	let second = formatter.format(Mode::Standard, &[outcome], "erin", &spec).unwrap();
	assert_eq!(first, second);
}

#[test]
fn format_dispatches_by_mode() {
	let formatter = Formatter::default();
	let (spec, outcome) = rolled("+1", Mode::Advantage, [2, 19]);

	let text = formatter.format(Mode::Advantage, &[outcome.clone()], "frank", &spec).unwrap();
	assert_eq!(text, formatter.advantage(&outcome, "frank", &spec).unwrap());

	let text = formatter.format(Mode::Disadvantage, &[outcome.clone()], "frank", &spec).unwrap();
	assert_eq!(text, formatter.disadvantage(&outcome, "frank", &spec).unwrap());
}

#[test]
fn wrong_outcome_count() {
	let formatter = Formatter::default();
	let (spec, outcome) = rolled("1d6", Mode::Standard, [3]);

	let result = formatter.format(Mode::Standard, &[outcome.clone(), outcome.clone()], "gina", &spec);
	assert_eq!(result, Err(Error::OutcomeCount { mode: Mode::Standard, expected: 1, found: 2 }));

	let result = formatter.format(Mode::Standard, &[], "gina", &spec);
	assert_eq!(result, Err(Error::OutcomeCount { mode: Mode::Standard, expected: 1, found: 0 }));

	let outcomes = stats([[1, 2, 3, 4]; 5]);
	let result = formatter.stat_block(&outcomes, "gina");
	assert_eq!(result, Err(Error::OutcomeCount { mode: Mode::CharacterBlock, expected: 6, found: 5 }));
}

#[test]
fn wrong_dice_count() {
	let formatter = Formatter::default();

	let (spec, outcome) = rolled("3d20", Mode::Standard, [1, 2, 3]);
	let result = formatter.advantage(&outcome, "hank", &spec);
	assert_eq!(result, Err(Error::SpecCount { expected: 2, spec }));

	let (_, other) = rolled("2d6", Mode::Standard, [1, 2]);
	let result = formatter.standard(&other, "hank", &spec);
	assert_eq!(result, Err(Error::RollCount { expected: 3, rolls: vec![1, 2] }));

	let (spec, _) = rolled("+1", Mode::Advantage, [1, 2]);
	let result = formatter.advantage(&RollOutcome::new(vec![7], 1, 8), "hank", &spec);
	assert_eq!(result, Err(Error::RollCount { expected: 2, rolls: vec![7] }));

	let spec = parse("", Mode::CharacterBlock).unwrap();
	let outcome = IterRoller::new([1, 2, 3]).generate(&spec).unwrap();
	let result = formatter.stat_block(&vec![outcome; 6], "hank");
	assert_eq!(result, Err(Error::RollCount { expected: 4, rolls: vec![1, 2, 3] }));
}

#[test]
fn kept_die_overflow() {
	let spec = RollSpec::new(2, 20, i32::MAX);
	let outcome = RollOutcome::new(vec![5, 3], i32::MAX, i32::MAX);

	let result = Formatter::default().advantage(&outcome, "ivy", &spec);
	assert_eq!(result, Err(Error::Overflow { kept: 5, modifier: i32::MAX }));
	let result = Formatter::default().disadvantage(&outcome, "ivy", &spec);
	assert_eq!(result, Err(Error::Overflow { kept: 3, modifier: i32::MAX }));
}

#[test]
fn error_messages_name_the_offending_data() {
	let err = Error::RollCount { expected: 4, rolls: vec![1, 2, 3] };
	assert_eq!(err.to_string(), "expected 4 dice in the roll, found [1, 2, 3]");

	let err = Error::Overflow { kept: 5, modifier: i32::MAX };
	assert_eq!(err.to_string(), "integer overflow while adding 2147483647 to the kept die 5");
}

fn rolled<const N: usize>(input: &str, mode: Mode, rolls: [u8; N]) -> (RollSpec, RollOutcome) {
	let spec = parse(input, mode).unwrap();
	let outcome = IterRoller::new(rolls).generate(&spec).unwrap();
	(spec, outcome)
}

fn stats<const N: usize>(rolls: [[u8; 4]; N]) -> Vec<RollOutcome> {
	let spec = parse("", Mode::CharacterBlock).unwrap().with_extra_die();
	rolls
		.into_iter()
		.map(|stat| IterRoller::new(stat).generate(&spec).unwrap())
		.collect()
}
