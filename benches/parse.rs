#![feature(test)]

extern crate test;

use test::Bencher;

use dicebot::{parse, Mode};

#[bench]
fn parse_plain(b: &mut Bencher) {
	b.iter(|| parse("2d6", Mode::Standard).unwrap());
}

#[bench]
fn parse_modifier(b: &mut Bencher) {
	b.iter(|| parse("8d12 + 11", Mode::Standard).unwrap());
}

#[bench]
fn parse_longest(b: &mut Bencher) {
	b.iter(|| parse("99d100-1000", Mode::Standard).unwrap());
}

#[bench]
fn parse_advantage(b: &mut Bencher) {
	b.iter(|| parse("-3", Mode::Advantage).unwrap());
}

#[bench]
fn parse_rejected(b: &mut Bencher) {
	b.iter(|| parse("2d6+1-2", Mode::Standard).unwrap_err());
}
