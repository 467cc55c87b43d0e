use crate::mode::{Mode, UnknownModeError};

#[test]
fn routes_map_to_modes() {
	assert_eq!("/roll".parse::<Mode>(), Ok(Mode::Standard));
	assert_eq!("/adv".parse::<Mode>(), Ok(Mode::Advantage));
	assert_eq!("/dis".parse::<Mode>(), Ok(Mode::Disadvantage));
	assert_eq!("/character".parse::<Mode>(), Ok(Mode::CharacterBlock));
}

#[test]
fn bare_names_map_to_modes() {
	assert_eq!("roll".parse::<Mode>(), Ok(Mode::Standard));
	assert_eq!("ADVANTAGE".parse::<Mode>(), Ok(Mode::Advantage));
	assert_eq!(" dis ".parse::<Mode>(), Ok(Mode::Disadvantage));
	assert_eq!("Character".parse::<Mode>(), Ok(Mode::CharacterBlock));
}

#[test]
fn unknown_routes() {
	assert_eq!("/initiative".parse::<Mode>(), Err(UnknownModeError("/initiative".to_owned())));
	assert!("".parse::<Mode>().is_err());
	assert!("//roll".parse::<Mode>().is_err());
}

#[test]
fn display_round_trips() {
	for mode in Mode::ALL {
		assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
	}
}

#[test]
fn usage_hints() {
	assert_eq!(Mode::Standard.usage(), "/roll <num>d<num> (+/-)<num>");
	assert_eq!(Mode::Advantage.usage(), "/adv (+/-)<num>");
	assert_eq!(Mode::Disadvantage.usage(), "/dis (+/-)<num>");
	assert_eq!(Mode::CharacterBlock.usage(), "/character");
}

#[test]
fn outcome_counts() {
	assert_eq!(Mode::Standard.outcome_count(), 1);
	assert_eq!(Mode::Advantage.outcome_count(), 1);
	assert_eq!(Mode::Disadvantage.outcome_count(), 1);
	assert_eq!(Mode::CharacterBlock.outcome_count(), 6);
}
