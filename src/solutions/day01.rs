use std::num::ParseIntError;

use aoc_framework::parsing::{ParseContextError, parse_input_lines};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

use crate::numeric::{absolute_difference, histogram, parse_number_list};

#[solution_runner(
    name = "Day 1: Historian Hysteria",
    parsed = LocationLists,
    part_one = Day01,
    part_two = Day01
)]
impl super::AdventOfCode2024<1> {}

/*
Input is two columns of location IDs, one pair of whitespace-separated
numbers per line. The left column and right column are independent lists.
*/

/// Type for location IDs.
///
/// Observed 5 digit numbers from input, so is sized to hold such.
type LocationId = u32;

struct LocationLists {
    left: Vec<LocationId>,
    right: Vec<LocationId>,
}

#[derive(thiserror::Error, Debug)]
enum ParseLocationListsError {
    #[error("expected two location IDs on a line, found {found}")]
    WrongFieldCount { found: usize },

    #[error("failed to parse a location ID")]
    ParseId(#[from] ParseContextError<ParseIntError>),
}

impl ParseData for LocationLists {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let pairs: Vec<(LocationId, LocationId)> =
            parse_input_lines(input, |_, line| -> DynamicResult<_> {
                let values: Vec<LocationId> =
                    parse_number_list(line).map_err(ParseLocationListsError::ParseId)?;
                let [left, right] = values[..] else {
                    return Err(ParseLocationListsError::WrongFieldCount {
                        found: values.len(),
                    }
                    .into());
                };
                Ok((left, right))
            })
            .collect::<Result<_, _>>()?;

        let (left, right) = pairs.into_iter().unzip();
        Ok(Self { left, right })
    }
}

/*
For part 1, pair the smallest left ID with the smallest right ID, the second
smallest with the second smallest, and so on, then sum the distances between
the IDs of each pair.
*/

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = LocationLists;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut left = input.left.clone();
        let mut right = input.right.clone();
        left.sort_unstable();
        right.sort_unstable();

        let sum = left
            .iter()
            .zip(&right)
            .map(|(left_id, right_id)| absolute_difference(*left_id, *right_id))
            .checked_sum()
            .expect("should not overflow summing distances");
        Ok(sum)
    }
}

/*
For part 2, calculate a similarity score: each left ID contributes the ID
multiplied by the number of times it appears in the right list.
*/

/// Type for the similarity score.
///
/// A 5 digit ID can repeat across a 4 digit list length, so this is sized
/// well past the worst case.
type SimilarityScore = u64;

impl Solution<PartTwo> for Day01 {
    type Input = LocationLists;
    type Output = SimilarityScore;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let right_counts = histogram(input.right.iter().copied());

        let score = input
            .left
            .iter()
            .map(|&id| {
                let count = right_counts.get(&id).copied().unwrap_or(0);
                SimilarityScore::from(id)
                    .checked_mul(count)
                    .expect("should not overflow weighting an ID by its count")
            })
            .checked_sum()
            .expect("should not overflow summing the similarity score");
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"3   4
4   3
2   5
1   3
3   9
3   3
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = LocationLists::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 11);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = LocationLists::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 31);
        Ok(())
    }

    #[test]
    fn parse_rejects_a_short_line() {
        let result = LocationLists::parse("3   4\n7\n");
        assert!(result.is_err());
    }
}
