//! Traits and utilities shared by Advent of Code solutions.
//!
//! A solution is a unit struct implementing [`Solution`] for [`PartOne`],
//! [`PartTwo`], or both. Input either stays a `str` or is parsed up front by a
//! type implementing [`ParseData`], shared between the parts:
//!
//! ```
//! use aoc_framework::{DynamicResult, ParseData, PartOne, Solution};
//!
//! struct Numbers(Vec<u32>);
//!
//! impl ParseData for Numbers {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         let values = input
//!             .lines()
//!             .map(|line| line.parse())
//!             .collect::<Result<_, _>>()?;
//!         Ok(Self(values))
//!     }
//! }
//!
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = Numbers;
//!     type Output = u32;
//!
//!     fn solve(input: &Self::Input) -> DynamicResult<u32> {
//!         Ok(input.0.iter().sum())
//!     }
//! }
//! ```
//!
//! The [`runner`] module executes solutions and reports progress through an
//! [`OutputHandler`][runner::OutputHandler]; the
//! [`#[solution_runner]`][runner::solution_runner] attribute wires a day's
//! types to the appropriate runner function.

#![warn(clippy::pedantic)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod parsing;
pub mod runner;

mod private {
    /// Sealing trait so [`Part`][super::Part] cannot gain implementations
    /// outside this crate.
    pub trait Sealed {}
}

/// A boxed, dynamically dispatched error.
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result carrying a [`DynamicError`].
pub type DynamicResult<T> = Result<T, DynamicError>;

/// Identifies a solution part at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// Marker trait for the zero-sized part types used as generic parameters to
/// [`Solution<P>`].
///
/// Sealed; the only implementors are [`PartOne`] and [`PartTwo`].
pub trait Part: private::Sealed {
    /// The runtime [`PartKind`] this marker stands for.
    fn kind() -> PartKind;
}

/// Marker for part one of a solution.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Marker for part two of a solution.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// A solution to one part of a day's puzzle.
pub trait Solution<P: Part> {
    /// The input type the solution accepts, by reference.
    ///
    /// Set to `str` to receive the raw input text, or to a [`ParseData`] type
    /// to receive parsed data.
    type Input: ?Sized;

    /// The answer type, printed through the output handler.
    type Output: Display;

    /// Solve the part for the given input.
    ///
    /// # Errors
    ///
    /// Any error encountered while solving (an unexpected input shape, an
    /// exhausted search) is returned boxed.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// A data structure constructed by parsing the raw input text once, before
/// any part runs.
pub trait ParseData {
    /// Parse the input string.
    ///
    /// # Errors
    ///
    /// Malformed input is reported as a boxed error; the day aborts without
    /// running any part.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}
