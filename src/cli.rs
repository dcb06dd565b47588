//! Command line for the demo binary

use clap::{Arg, ArgMatches, Command, value_parser};

use marble_roller::Difficulty;

/// Parsed demo options
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub level: u32,
    pub seed: u64,
    pub difficulty: Difficulty,
}

pub fn command() -> Command {
    let level_arg = Arg::new("level")
        .help("Level number to play")
        .value_parser(value_parser!(u32).range(1..))
        .default_value("1");

    let seed_arg = Arg::new("seed")
        .help("Seed for the generated stroke and frame timing")
        .value_parser(value_parser!(u64))
        .default_value("42");

    let difficulty_option = Arg::new("difficulty")
        .long("difficulty")
        .short('d')
        .value_parser(["relaxed", "standard", "precise"])
        .default_value("standard");

    Command::new("marble-roller")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rolls a marble down a generated stroke for one level")
        .arg(level_arg)
        .arg(seed_arg)
        .arg(difficulty_option)
}

/// Parse the process arguments; invalid input exits with a usage error
pub fn parse_command_line() -> Options {
    options_from(&command().get_matches())
}

fn options_from(matches: &ArgMatches) -> Options {
    Options {
        level: matches.get_one::<u32>("level").copied().unwrap_or(1),
        seed: matches.get_one::<u64>("seed").copied().unwrap_or(42),
        difficulty: matches
            .get_one::<String>("difficulty")
            .and_then(|d| Difficulty::from_str(d))
            .unwrap_or_default(),
    }
}
