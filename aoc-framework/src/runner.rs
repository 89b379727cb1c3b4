//! Functions and traits for running solutions.
//!
//! Annotate a struct or impl block with
//! [`#[solution_runner]`][solution_runner] naming the solution's display
//! name, its part types, and optionally its [`ParseData`] type; the attribute
//! generates a [`SolutionRunner`] implementation calling the matching
//! `solve_*` function below.
//!
//! ```
//! # use aoc_framework::runner::solution_runner;
//! # use aoc_framework::{DynamicResult, PartOne, Solution};
//! #
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = str;
//!     type Output = usize;
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         Ok(input.lines().count())
//!     }
//! }
//!
//! #[solution_runner(name = "Day 1", part_one = Day01)]
//! struct Day01Runner;
//! ```

use std::fmt::Display;
use std::time::Duration;

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

// re-export procedural macro
pub use aoc_framework_macros::solution_runner;

/// Receives the events of a running solution.
///
/// Running a solution emits events in order: the solution's name, a parse
/// start/end pair when a [`ParseData`] step exists, and a start/output pair
/// per part. How the events surface (printed, colored, filtered by
/// verbosity) is the handler's concern.
pub trait OutputHandler {
    /// The solution's display name, emitted first.
    fn solution_name(&mut self, name: &str);

    /// Input parsing is about to begin.
    fn parse_start(&mut self);

    /// Input parsing finished, with the elapsed duration when timing is on.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// A part is about to run.
    fn part_start(&mut self, part: PartKind);

    /// A part finished with the given answer, with the elapsed duration when
    /// timing is on.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);

    /// A free-form diagnostic line outside the parse/part lifecycle.
    ///
    /// Emitted by solver-specific sessions (like day 11 analytics); the
    /// default implementation discards it.
    fn note(&mut self, _message: &dyn Display) {}
}

/// Evaluate an expression, optionally measuring its duration.
///
/// Expands to a `(result, Option<Duration>)` tuple; the duration is `Some`
/// only when the `$timed` flag is true.
macro_rules! measure_if_timed {
    ($expr:expr, $timed:expr) => {{
        if $timed {
            let start = ::std::time::Instant::now();
            let result = $expr;
            (result, Some(start.elapsed()))
        } else {
            ($expr, None)
        }
    }};
}

/// Run one part, emitting its events through the handler.
///
/// # Errors
///
/// Propagates the solution's error.
fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    handler.part_start(part);
    let (result, duration_opt) = measure_if_timed!(S::solve(input), timed);
    let output = result?;
    handler.part_output(part, &output, duration_opt);
    Ok(())
}

/// Run the parse step, emitting its events through the handler.
///
/// # Errors
///
/// Propagates the parse error.
fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    handler.parse_start();
    let (result, duration_opt) = measure_if_timed!(D::parse(input), timed);
    let parsed = result?;
    handler.parse_end(duration_opt);
    Ok(parsed)
}

/// Run a part-one-only solution taking raw string input.
///
/// # Errors
///
/// Propagates the solution's error.
pub fn solve_half_solution<S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
{
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)
}

/// Run a two-part solution taking raw string input.
///
/// # Errors
///
/// Propagates the first part error encountered.
pub fn solve_full_solution<S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)?;
    run_part::<S2, PartTwo>(input, handler, timed)
}

/// Run a part-one-only solution with a [`ParseData`] step.
///
/// # Errors
///
/// Propagates the parse or solution error.
pub fn solve_parsed_half_solution<D, S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)
}

/// Run a two-part solution with a [`ParseData`] step shared by the parts.
///
/// # Errors
///
/// Propagates the parse error or the first part error encountered.
pub fn solve_parsed_full_solution<D, S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)?;
    run_part::<S2, PartTwo>(&parsed, handler, timed)
}

/// A runnable solution, as generated by [`#[solution_runner]`][solution_runner].
pub trait SolutionRunner {
    /// Run the solution over the input, emitting events through the handler.
    ///
    /// # Errors
    ///
    /// Propagates any parse or solve error.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;
}
