use std::{
	io::{self, Write},
	path::PathBuf,
	process::ExitCode,
};

use ariadne::{Label, Report, ReportKind, Source};
use clap::Parser;
use dicebot::{
	command::{Error, FALLBACK_REPLY},
	dice::roller::FastRand,
	parse::ParseError,
	Config, Dicebot, Mode,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Rolls dice and prints the reply the chat bot would post
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
	/// Command to answer: roll, adv, dis or character (a leading slash is accepted)
	#[arg(short, long, default_value = "roll")]
	mode: Mode,

	/// Name shown in the reply
	#[arg(short, long, default_value = "you")]
	user: String,

	/// TOML config file
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// List every die in standard rolls
	#[arg(long)]
	breakdown: bool,

	/// Log each stage of the command
	#[arg(long)]
	debug: bool,

	/// Seed the dice for repeatable rolls
	#[arg(long)]
	seed: Option<u64>,

	/// Roll text, e.g. "2d6 + 3". Read from stdin when omitted.
	text: Vec<String>,
}

fn main() -> ExitCode {
	let args = Args::parse();

	let file_config = match args.config.as_deref().map(Config::load).transpose() {
		Ok(config) => config.unwrap_or_default(),
		Err(err) => {
			eprintln!("{err}");
			return ExitCode::FAILURE;
		}
	};
	let config = Config::new(
		args.breakdown || file_config.breakdown,
		args.debug || file_config.debug,
	);
	init_logging(config.log_filter());
	tracing::debug!(?config, "starting");

	let input = if !args.text.is_empty() || args.mode == Mode::CharacterBlock {
		// Obtain the roll text by combining all args passed to the executable, so that it can be left unquoted even
		// with spaces
		args.text.join(" ")
	} else {
		match read_input() {
			Ok(input) => input,
			Err(err) => {
				eprintln!("Unable to read roll text: {err}");
				return ExitCode::FAILURE;
			}
		}
	};

	let bot = Dicebot::new(config);
	let mut roller = args.seed.map_or_else(FastRand::default, FastRand::with_seed);
	match bot.roll_using(&input, &args.user, args.mode, &mut roller) {
		Ok(rolled) => {
			print!("{}", rolled.text);
			ExitCode::SUCCESS
		}
		Err(Error::Parse(err)) => {
			if let Err(io_err) = report(&err) {
				tracing::warn!(error = %io_err, "unable to render parse error report");
			}
			eprintln!("error: {err}\n Please use {}", args.mode.usage());
			ExitCode::FAILURE
		}
		Err(err) => {
			tracing::error!(error = %err, %input, "unhandled error while handling command");
			eprintln!("{FALLBACK_REPLY}");
			ExitCode::FAILURE
		}
	}
}

/// Installs a compact stderr logger, filtered by `RUST_LOG` or else by the config's filter.
fn init_logging(default_filter: &str) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(io::stderr)
				.with_target(false)
				.compact(),
		)
		.init();
}

/// Reads the first line of stdin, prompting for it if stdin isn't already piped.
fn read_input() -> io::Result<String> {
	let mut lines = io::stdin().lines();

	// If there isn't already input available in stdin, display a prompt for it
	if lines.size_hint().1.is_none() {
		print!("Enter roll text: ");
		io::stdout().flush()?;
	}

	lines.next().unwrap_or_else(|| Ok(String::new()))
}

/// Prints a report pointing at the part of the roll text that was rejected.
fn report(err: &ParseError) -> io::Result<()> {
	Report::build(ReportKind::Error, ("roll", err.span.clone()))
		.with_message(err.reason)
		.with_label(Label::new(("roll", err.span.clone())).with_message(format!("given {}", err.text)))
		.finish()
		.eprint(("roll", Source::from(err.text.as_str())))
}
