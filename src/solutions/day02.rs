use std::num::ParseIntError;

use aoc_framework::parsing::{ParseContextError, parse_input_lines};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

use crate::numeric::parse_number_list;

#[solution_runner(
    name = "Day 2: Red-Nosed Reports",
    parsed = UnusualData,
    part_one = Day02,
    part_two = Day02
)]
impl super::AdventOfCode2024<2> {}

/*
Input is a report per line, each a whitespace-separated list of levels.
*/

/// Type for reactor levels.
///
/// Observed 2 digit numbers from input, so is sized to hold such.
type Level = u8;

#[derive(Debug)]
struct Report(Vec<Level>);

#[derive(thiserror::Error, Debug)]
enum ParseReportError {
    #[error("a report requires at least one level")]
    Empty,

    #[error("failed to parse a level")]
    ParseLevel(#[from] ParseContextError<ParseIntError>),
}

struct UnusualData(Vec<Report>);

impl ParseData for UnusualData {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let reports = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let levels: Vec<Level> = parse_number_list(line).map_err(ParseReportError::ParseLevel)?;
            if levels.is_empty() {
                return Err(ParseReportError::Empty.into());
            }
            Ok(Report(levels))
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(reports))
    }
}

/*
For part 1, count the safe reports. A report is safe when its levels are
either all increasing or all decreasing, and each step changes by at least
one and at most three.
*/

impl Report {
    fn is_safe(&self) -> bool {
        levels_are_safe(&self.0)
    }
}

fn levels_are_safe(levels: &[Level]) -> bool {
    let steps: Vec<i16> = levels
        .windows(2)
        .map(|pair| i16::from(pair[1]) - i16::from(pair[0]))
        .collect();

    steps.iter().all(|step| (1..=3).contains(step))
        || steps.iter().all(|step| (-3..=-1).contains(step))
}

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = UnusualData;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.0.iter().filter(|report| report.is_safe()).count())
    }
}

/*
For part 2, the Problem Dampener tolerates a single bad level: a report also
counts as safe if removing any one of its levels leaves a safe report.
*/

impl Report {
    fn is_safe_dampened(&self) -> bool {
        if self.is_safe() {
            return true;
        }

        // reports are short, so trying every single-level removal is cheap
        (0..self.0.len()).any(|skipped| {
            let remaining: Vec<Level> = self
                .0
                .iter()
                .enumerate()
                .filter_map(|(index, level)| (index != skipped).then_some(*level))
                .collect();
            levels_are_safe(&remaining)
        })
    }
}

impl Solution<PartTwo> for Day02 {
    type Input = UnusualData;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .iter()
            .filter(|report| report.is_safe_dampened())
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = UnusualData::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 2);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = UnusualData::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 4);
        Ok(())
    }

    #[test]
    fn dampener_tolerates_removing_an_end_level() {
        let report = Report(vec![9, 1, 2, 3]);
        assert!(!report.is_safe());
        assert!(report.is_safe_dampened());
    }
}
