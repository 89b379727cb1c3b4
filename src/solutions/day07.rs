use std::num::ParseIntError;
use std::str::FromStr;

use aoc_framework::parsing::{ParseContextError, parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

use crate::numeric::{concatenate, parse_number_list};

#[solution_runner(
    name = "Day 7: Bridge Repair",
    parsed = CalibrationInput,
    part_one = Day07,
    part_two = Day07
)]
impl super::AdventOfCode2024<7> {}

/*
Input is one calibration equation per line: a test value, a colon, and a list
of operands. The operators between operands went missing; an equation counts
if some choice of operators, applied strictly left to right, produces the
test value. Operator precedence does not apply.
*/

/// Type for test values and running accumulators.
///
/// Observed test values up to 15 digits from input, so is sized to hold such.
type CalibrationValue = u64;

#[derive(Debug)]
struct Equation {
    test_value: CalibrationValue,
    operands: Vec<CalibrationValue>,
}

#[derive(thiserror::Error, Debug)]
enum ParseEquationError {
    #[error("expected an equation formatted as \"value: operands\", found: {0:?}")]
    ExpectedColonFormat(String),

    #[error("an equation requires at least one operand")]
    MissingOperands,

    #[error("failed to parse a calibration number")]
    ParseNumber(#[from] ParseContextError<ParseIntError>),
}

impl FromStr for Equation {
    type Err = ParseEquationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (test_value, operand_list) = s
            .split_once(':')
            .ok_or_else(|| ParseEquationError::ExpectedColonFormat(s.to_owned()))?;

        let test_value = parse_with_context(test_value.trim())?;
        let operands: Vec<CalibrationValue> = parse_number_list(operand_list)?;
        if operands.is_empty() {
            return Err(ParseEquationError::MissingOperands);
        }

        Ok(Self {
            test_value,
            operands,
        })
    }
}

struct CalibrationInput(Vec<Equation>);

impl ParseData for CalibrationInput {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let equations =
            parse_input_lines(input, |_, line| Ok(line.parse()?)).collect::<Result<_, _>>()?;
        Ok(Self(equations))
    }
}

/*
For part 1, two operators are available: add and multiply. Sum the test
values of the solvable equations.
*/

/// An operator combining the running left value with the next operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Multiply,
    Concatenate,
}

impl Operator {
    /// Apply to the running value and the next operand, `None` on overflow.
    ///
    /// An overflowing result already exceeds any representable test value,
    /// so callers treat `None` like an over-target branch.
    fn apply(self, left: CalibrationValue, right: CalibrationValue) -> Option<CalibrationValue> {
        match self {
            Self::Add => left.checked_add(right),
            Self::Multiply => left.checked_mul(right),
            Self::Concatenate => concatenate(left, right),
        }
    }
}

const PART_ONE_OPERATORS: [Operator; 2] = [Operator::Add, Operator::Multiply];

/// Depth-first search over operator choices, strictly left to right.
///
/// Every available operator is monotone non-decreasing for the non-negative
/// operands the input guarantees, so a running value above the target can
/// never come back down; such branches are pruned.
fn search(
    target: CalibrationValue,
    accumulated: CalibrationValue,
    rest: &[CalibrationValue],
    operators: &[Operator],
) -> bool {
    if accumulated > target {
        return false;
    }
    let Some((&next, rest)) = rest.split_first() else {
        return accumulated == target;
    };

    operators.iter().any(|operator| {
        operator
            .apply(accumulated, next)
            .is_some_and(|value| search(target, value, rest, operators))
    })
}

impl Equation {
    /// Whether some left-to-right operator assignment produces the test
    /// value.
    fn is_solvable(&self, operators: &[Operator]) -> bool {
        search(
            self.test_value,
            self.operands[0],
            &self.operands[1..],
            operators,
        )
    }
}

/// Sum the test values of the equations solvable with the operator set.
fn total_calibration(
    input: &CalibrationInput,
    operators: &[Operator],
) -> CalibrationValue {
    input
        .0
        .iter()
        .filter(|equation| equation.is_solvable(operators))
        .map(|equation| equation.test_value)
        .checked_sum()
        .expect("should not overflow summing test values")
}

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = CalibrationInput;
    type Output = CalibrationValue;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(total_calibration(input, &PART_ONE_OPERATORS))
    }
}

/*
For part 2, a third operator joins: concatenation, gluing the decimal digits
of its right operand onto its left.
*/

const PART_TWO_OPERATORS: [Operator; 3] = [
    Operator::Add,
    Operator::Multiply,
    Operator::Concatenate,
];

impl Solution<PartTwo> for Day07 {
    type Input = CalibrationInput;
    type Output = CalibrationValue;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(total_calibration(input, &PART_TWO_OPERATORS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = CalibrationInput::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 3749);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = CalibrationInput::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 11387);
        Ok(())
    }

    #[test]
    fn concatenation_alone_can_solve_an_equation() -> DynamicResult<()> {
        let equation: Equation = "156: 15 6".parse()?;
        assert!(!equation.is_solvable(&PART_ONE_OPERATORS));
        assert!(equation.is_solvable(&PART_TWO_OPERATORS));
        Ok(())
    }

    #[test]
    fn single_operand_equation_compares_directly() -> DynamicResult<()> {
        let matching: Equation = "42: 42".parse()?;
        assert!(matching.is_solvable(&PART_ONE_OPERATORS));

        let differing: Equation = "42: 41".parse()?;
        assert!(!differing.is_solvable(&PART_ONE_OPERATORS));
        Ok(())
    }

    #[test]
    fn growing_the_operator_set_never_invalidates_an_equation() -> DynamicResult<()> {
        let parsed = CalibrationInput::parse(EXAMPLE_INPUT)?;
        for equation in &parsed.0 {
            if equation.is_solvable(&PART_ONE_OPERATORS) {
                assert!(
                    equation.is_solvable(&PART_TWO_OPERATORS),
                    "equation for {} lost solvability",
                    equation.test_value
                );
            }
        }
        Ok(())
    }
}
