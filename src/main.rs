#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::option_if_let_else,
    clippy::use_self
)]
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Error, Result};
use aoc_framework::PartKind;
use aoc_framework::runner::OutputHandler;
use clap::{ArgAction, Args, Parser, Subcommand};

mod geometry;
mod numeric;
mod solutions;

/// Blinks simulated by a `day11` session when `--blinks` is not given.
const DEFAULT_SESSION_BLINKS: u32 = 25;

/// Advent of Code 2024 puzzle solver.
#[derive(Parser, Debug)]
#[command(name = "2024")]
struct Cli {
    #[command(subcommand)]
    day: DayCommand,
}

/// Arguments shared by every day subcommand.
#[derive(Args, Debug)]
struct CommonArgs {
    /// Sets an alternative input file to use over default input.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print solution names and step durations; repeatable.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum DayCommand {
    /// Day 1: Historian Hysteria.
    Day01(CommonArgs),
    /// Day 2: Red-Nosed Reports.
    Day02(CommonArgs),
    /// Day 3: Mull It Over.
    Day03(CommonArgs),
    /// Day 4: Ceres Search.
    Day04(CommonArgs),
    /// Day 5: Print Queue.
    Day05(CommonArgs),
    /// Day 6: Guard Gallivant.
    Day06(CommonArgs),
    /// Day 7: Bridge Repair.
    Day07 {
        #[command(flatten)]
        common: CommonArgs,

        /// Evaluate a single calibration equation in lieu of an input file.
        #[arg(short, long, value_name = "EQUATION")]
        equation: Option<String>,
    },
    /// Day 8: Resonant Collinearity.
    Day08(CommonArgs),
    /// Day 9: Disk Fragmenter.
    Day09(CommonArgs),
    /// Day 10: Hoof It.
    Day10(CommonArgs),
    /// Day 11: Plutonian Pebbles.
    Day11 {
        #[command(flatten)]
        common: CommonArgs,

        /// Report the stone count after every blink of the session.
        #[arg(short, long, action = ArgAction::SetTrue)]
        analytics: bool,

        /// Space-separated starting stones in lieu of an input file.
        #[arg(short, long, value_name = "STONES")]
        stones: Option<String>,

        /// Number of blinks for the session.
        #[arg(short, long, value_name = "NUMBER")]
        blinks: Option<u32>,
    },
    /// Day 12: Garden Groups.
    Day12(CommonArgs),
}

impl DayCommand {
    fn number(&self) -> u8 {
        match self {
            Self::Day01(_) => 1,
            Self::Day02(_) => 2,
            Self::Day03(_) => 3,
            Self::Day04(_) => 4,
            Self::Day05(_) => 5,
            Self::Day06(_) => 6,
            Self::Day07 { .. } => 7,
            Self::Day08(_) => 8,
            Self::Day09(_) => 9,
            Self::Day10(_) => 10,
            Self::Day11 { .. } => 11,
            Self::Day12(_) => 12,
        }
    }

    fn common(&self) -> &CommonArgs {
        match self {
            Self::Day01(common)
            | Self::Day02(common)
            | Self::Day03(common)
            | Self::Day04(common)
            | Self::Day05(common)
            | Self::Day06(common)
            | Self::Day08(common)
            | Self::Day09(common)
            | Self::Day10(common)
            | Self::Day12(common)
            | Self::Day07 { common, .. }
            | Self::Day11 { common, .. } => common,
        }
    }
}

/// Read the default input file for a day to a string.
fn get_default_input(day: u8) -> Result<String> {
    let filename = format!("day{day:02}.txt");
    let path = PathBuf::from("inputs").join(filename);

    fs::read_to_string(&path).with_context(|| {
        format!(
            "default input file missing: {}\n\n\
            please create the file or provide the input file argument",
            path.display()
        )
    })
}

/// Read the given input file to a string.
fn get_input(input_file: &PathBuf) -> Result<String> {
    fs::read_to_string(input_file)
        .with_context(|| format!("could not read input file at: {}", input_file.display()))
}

/// Read the day's input, preferring an explicit `--input` file.
fn load_input(day: u8, common: &CommonArgs) -> Result<String> {
    common
        .input
        .as_ref()
        .map_or_else(|| get_default_input(day), get_input)
}

struct CliOutputHandler {
    /// Count of `-v` flags; zero prints the answers alone.
    verbosity: u8,
}

impl CliOutputHandler {
    fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    fn format_duration(duration: Duration) -> String {
        const ONE_SECOND: Duration = Duration::from_secs(1);
        const ONE_MILLISECOND: Duration = Duration::from_millis(1);
        const ONE_MICROSECOND: Duration = Duration::from_micros(1);
        const DECIMAL_PLACES: usize = 3;

        if duration >= ONE_SECOND {
            return format!("{:.*} seconds", DECIMAL_PLACES, duration.as_secs_f32());
        }

        let nanos = duration.subsec_nanos();
        if duration >= ONE_MILLISECOND {
            format!("{:.*} milliseconds", DECIMAL_PLACES, f64::from(nanos) / 1e6)
        } else if duration >= ONE_MICROSECOND {
            format!("{:.*} microseconds", DECIMAL_PLACES, f64::from(nanos) / 1e3)
        } else {
            format!("{nanos} nanoseconds")
        }
    }
}

impl OutputHandler for CliOutputHandler {
    fn solution_name(&mut self, name: &str) {
        if self.verbosity >= 1 {
            println!("= {name} =");
        }
    }

    fn parse_start(&mut self) {
        // do nothing
    }

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        if let Some(duration) = duration_opt {
            println!("Input parsed in {}", Self::format_duration(duration));
        }
    }

    fn part_start(&mut self, _part: PartKind) {
        // do nothing
    }

    fn part_output(
        &mut self,
        part: PartKind,
        output: &dyn Display,
        duration_opt: Option<Duration>,
    ) {
        if let Some(duration) = duration_opt {
            println!("{part}: {output} ({})", Self::format_duration(duration));
        } else {
            println!("{part}: {output}");
        }
    }

    fn note(&mut self, message: &dyn Display) {
        println!("{message}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let day = cli.day.number();
    let common = cli.day.common();
    // verbosity doubles as the switch for measuring step durations
    let timed = common.verbose >= 1;
    let mut handler = CliOutputHandler::new(common.verbose);

    let run_result = match &cli.day {
        DayCommand::Day07 {
            equation: Some(equation),
            ..
        } => {
            let mut input = equation.clone();
            input.push('\n');
            solutions::run_day(day, &input, &mut handler, timed)
        }
        DayCommand::Day11 {
            common,
            analytics,
            stones,
            blinks,
        } if *analytics || stones.is_some() || blinks.is_some() => {
            let stones_text = match stones {
                Some(stones) => stones.clone(),
                None => load_input(day, common)?,
            };
            solutions::run_day11_session(
                &stones_text,
                blinks.unwrap_or(DEFAULT_SESSION_BLINKS),
                *analytics,
                &mut handler,
            )
        }
        _ => {
            let input = load_input(day, common)?;
            solutions::run_day(day, &input, &mut handler, timed)
        }
    };

    run_result.map_err(|dyn_error| {
        let anyhow_error = Error::from_boxed(dyn_error);
        anyhow_error.context("failed to run solution")
    })
}
