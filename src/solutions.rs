//! Solutions implemented for Advent of Code 2024.
//!
//! This module provides [`run_day`] to dispatch a solution by its day. The
//! set of days is closed, so dispatch is a static match rather than any kind
//! of runtime registration.
//!
//! Steps to make a solution available to run:
//! 1. Make a submodule to hold the solution implementation.
//! 2. Have the submodule implement [`AdventOfCode2024<DAY>`] for its day as a
//!    [`SolutionRunner`], normally via
//!    [`#[solution_runner]`][aoc_framework::runner::solution_runner].
//! 3. Import the submodule and add a match case for the day in [`run_day`].

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use aoc_framework::DynamicResult;
use aoc_framework::runner::{OutputHandler, SolutionRunner};
use thiserror::Error;

mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
mod day12;

/// A structure collecting solutions by day.
///
/// In a submodule, implement this as a [`SolutionRunner`] for the day:
///
/// ```ignore
/// // in a submodule "day01.rs"
/// #[solution_runner(name = "Day 1", part_one = Day01)]
/// impl super::AdventOfCode2024<1> {}
/// ```
struct AdventOfCode2024<const DAY: u8>;

/// A solution for a day is not available.
#[derive(Error, Debug)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(u8);

/// Run a solution based on the day.
///
/// # Errors
///
/// If the solution for the given day is not available, a [`DayNotAvailable`]
/// error is returned.
///
/// Any dynamically dispatched error from running the solution is propagated.
pub fn run_day(
    day: u8,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    match day {
        1 => AdventOfCode2024::<1>::run(input, handler, timed),
        2 => AdventOfCode2024::<2>::run(input, handler, timed),
        3 => AdventOfCode2024::<3>::run(input, handler, timed),
        4 => AdventOfCode2024::<4>::run(input, handler, timed),
        5 => AdventOfCode2024::<5>::run(input, handler, timed),
        6 => AdventOfCode2024::<6>::run(input, handler, timed),
        7 => AdventOfCode2024::<7>::run(input, handler, timed),
        8 => AdventOfCode2024::<8>::run(input, handler, timed),
        9 => AdventOfCode2024::<9>::run(input, handler, timed),
        10 => AdventOfCode2024::<10>::run(input, handler, timed),
        11 => AdventOfCode2024::<11>::run(input, handler, timed),
        12 => AdventOfCode2024::<12>::run(input, handler, timed),
        _ => Err(DayNotAvailable(day).into()),
    }
}

/// Run a custom day 11 blink session instead of the standard two parts.
///
/// Backs the `day11 --stones/--blinks/--analytics` command line surface:
/// simulates the given number of blinks over the stones text and reports
/// through the handler's note event, per blink when `analytics` is set.
///
/// # Errors
///
/// Propagates any error parsing the stones text.
pub fn run_day11_session(
    stones_text: &str,
    blinks: u32,
    analytics: bool,
    handler: &mut dyn OutputHandler,
) -> DynamicResult<()> {
    day11::run_session(stones_text, blinks, analytics, handler)
}
