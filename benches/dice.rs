#![feature(test)]

extern crate test;

use test::Bencher;

use dicebot::{
	dice::roller::{FastRand, Roller},
	parse, Mode, RollSpec,
};

#[bench]
fn roll_4d8(b: &mut Bencher) {
	let spec: RollSpec = "4d8".parse().unwrap();
	let mut rng = FastRand::default();
	b.iter(|| rng.generate(&spec).unwrap());
}

#[bench]
fn roll_2d20_advantage(b: &mut Bencher) {
	let spec = parse("+5", Mode::Advantage).unwrap();
	let mut rng = FastRand::default();
	b.iter(|| rng.generate(&spec).unwrap());
}

#[bench]
fn roll_99d100(b: &mut Bencher) {
	let spec: RollSpec = "99d100+100".parse().unwrap();
	let mut rng = FastRand::default();
	b.iter(|| rng.generate(&spec).unwrap())
}

#[bench]
fn roll_stat_block(b: &mut Bencher) {
	let stat = parse("", Mode::CharacterBlock).unwrap().with_extra_die();
	let mut rng = FastRand::default();
	b.iter(|| (0..6).map(|_| rng.generate(&stat).unwrap()).collect::<Vec<_>>())
}
