use std::collections::HashMap;
use std::num::ParseIntError;

use aoc_framework::parsing::ParseContextError;
use aoc_framework::runner::{OutputHandler, solution_runner};
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

use crate::numeric::{digit_count, histogram, parse_number_list};

#[solution_runner(
    name = "Day 11: Plutonian Pebbles",
    parsed = Stones,
    part_one = Day11,
    part_two = Day11
)]
impl super::AdventOfCode2024<11> {}

/*
Input is a single line of numbers engraved on stones. Each blink rewrites
every stone simultaneously by the first matching rule:

- a 0 becomes a 1;
- a stone with an even digit count splits into its left and right halves,
  leading zeros of the right half dropped;
- anything else is multiplied by 2024.
*/

/// Type for engraved stone values.
///
/// Splitting keeps values near their starting magnitude but multiplication
/// grows them past 32 bits within a few blinks.
type StoneValue = u64;

/// Type for counting stones; 75 blinks grow the list into the trillions.
type StoneCount = u64;

struct Stones(Vec<StoneValue>);

#[derive(thiserror::Error, Debug)]
enum ParseStonesError {
    #[error("expected at least one stone")]
    Empty,

    #[error("failed to parse a stone value")]
    ParseValue(#[from] ParseContextError<ParseIntError>),
}

impl ParseData for Stones {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let values: Vec<StoneValue> =
            parse_number_list(input).map_err(ParseStonesError::ParseValue)?;
        if values.is_empty() {
            return Err(ParseStonesError::Empty.into());
        }
        Ok(Self(values))
    }
}

/*
For part 1, count the stones after 25 blinks.

The list's order never influences a rewrite, so equal stones evolve
identically; the simulation tracks a count per distinct value instead of the
exponentially growing list.
*/

/// Apply one blink to a single stone, yielding its replacement and the split
/// half when the stone splits.
fn blink_stone(value: StoneValue) -> (StoneValue, Option<StoneValue>) {
    if value == 0 {
        return (1, None);
    }

    let digits = digit_count(value);
    if digits % 2 == 0 {
        let split = 10u64.pow(digits / 2);
        (value / split, Some(value % split))
    } else {
        let grown = value
            .checked_mul(2024)
            .expect("should not overflow multiplying a stone");
        (grown, None)
    }
}

type StoneCounts = HashMap<StoneValue, StoneCount>;

/// Rewrite every stone once over per-value counts.
fn blink_counts(counts: &StoneCounts) -> StoneCounts {
    let mut next = StoneCounts::with_capacity(counts.len());
    for (&value, &count) in counts {
        let (replacement, split_half) = blink_stone(value);
        *next.entry(replacement).or_insert(0) += count;
        if let Some(half) = split_half {
            *next.entry(half).or_insert(0) += count;
        }
    }
    next
}

fn total_stones(counts: &StoneCounts) -> StoneCount {
    counts
        .values()
        .copied()
        .checked_sum()
        .expect("should not overflow counting stones")
}

fn stones_after_blinks(stones: &Stones, blinks: u32) -> StoneCount {
    let mut counts = histogram(stones.0.iter().copied());
    for _ in 0..blinks {
        counts = blink_counts(&counts);
    }
    total_stones(&counts)
}

struct Day11;

impl Solution<PartOne> for Day11 {
    type Input = Stones;
    type Output = StoneCount;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(stones_after_blinks(input, 25))
    }
}

/*
For part 2, count the stones after 75 blinks.
*/

impl Solution<PartTwo> for Day11 {
    type Input = Stones;
    type Output = StoneCount;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(stones_after_blinks(input, 75))
    }
}

/// Run a custom blink session over the stones text.
///
/// Reports the final stone count through the handler's note event, and the
/// count after every blink when `analytics` is set.
pub(super) fn run_session(
    stones_text: &str,
    blinks: u32,
    analytics: bool,
    handler: &mut dyn OutputHandler,
) -> DynamicResult<()> {
    let stones = Stones::parse(stones_text)?;

    let mut counts = histogram(stones.0.iter().copied());
    for blink in 1..=blinks {
        counts = blink_counts(&counts);
        if analytics {
            let total = total_stones(&counts);
            handler.note(&format!("after blink {blink}: {total} stones"));
        }
    }

    let total = total_stones(&counts);
    handler.note(&format!("stones after {blinks} blinks: {total}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fmt::Display;
    use std::time::Duration;

    use aoc_framework::PartKind;

    use super::*;

    /// Blink an ordered stone list, for checking the published sequences.
    fn blink_list(values: &[StoneValue]) -> Vec<StoneValue> {
        let mut next = Vec::with_capacity(values.len());
        for &value in values {
            let (replacement, split_half) = blink_stone(value);
            next.push(replacement);
            if let Some(half) = split_half {
                next.push(half);
            }
        }
        next
    }

    #[test]
    fn one_blink_matches_the_published_list() {
        let blinked = blink_list(&[0, 1, 10, 99, 999]);
        assert_eq!(blinked, vec![1, 2024, 1, 0, 9, 9, 2_021_976]);
    }

    #[test]
    fn six_blinks_grow_the_example_to_22_stones() -> DynamicResult<()> {
        let parsed = Stones::parse("125 17")?;
        assert_eq!(stones_after_blinks(&parsed, 6), 22);

        // the ordered rewrite agrees with the per-value counts
        let mut list = parsed.0.clone();
        for _ in 0..6 {
            list = blink_list(&list);
        }
        assert_eq!(list.len(), 22);
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Stones::parse("125 17")?;
        let result = <Day11 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 55_312);
        Ok(())
    }

    struct RecordingHandler(Vec<String>);

    impl OutputHandler for RecordingHandler {
        fn solution_name(&mut self, _name: &str) {}
        fn parse_start(&mut self) {}
        fn parse_end(&mut self, _duration_opt: Option<Duration>) {}
        fn part_start(&mut self, _part: PartKind) {}
        fn part_output(
            &mut self,
            _part: PartKind,
            _output: &dyn Display,
            _duration_opt: Option<Duration>,
        ) {
        }
        fn note(&mut self, message: &dyn Display) {
            self.0.push(message.to_string());
        }
    }

    #[test]
    fn session_reports_each_blink_with_analytics() -> DynamicResult<()> {
        let mut handler = RecordingHandler(Vec::new());
        run_session("125 17", 6, true, &mut handler)?;

        // six analytics lines plus the final count
        assert_eq!(handler.0.len(), 7);
        assert_eq!(
            handler.0.last().map(String::as_str),
            Some("stones after 6 blinks: 22")
        );
        Ok(())
    }
}
