use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use regex::Regex;

#[solution_runner(name = "Day 3: Mull It Over", part_one = Day03, part_two = Day03)]
impl super::AdventOfCode2024<3> {}

/*
Input is corrupted program memory: a stream of characters in which only
well-formed `mul(X,Y)`, `do()`, and `don't()` tokens matter. Multiplier
operands are 1 to 3 digits.
*/

/// An instruction recognized in the corrupted memory.
#[derive(Debug, PartialEq, Eq)]
enum Instruction {
    Mul(u32, u32),
    Enable,
    Disable,
}

/// Scan the memory for instructions, in order of appearance.
fn scan_instructions(memory: &str) -> Vec<Instruction> {
    let token_pattern = Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")
        .expect("token pattern should be a valid regex");

    token_pattern
        .captures_iter(memory)
        .map(|captures| match &captures[0] {
            "do()" => Instruction::Enable,
            "don't()" => Instruction::Disable,
            _ => {
                // the mul alternative is the only one with capture groups
                let left = captures[1]
                    .parse()
                    .expect("captured digits should parse as a multiplier");
                let right = captures[2]
                    .parse()
                    .expect("captured digits should parse as a multiplier");
                Instruction::Mul(left, right)
            }
        })
        .collect()
}

/*
For part 1, sum the results of all `mul` instructions.
*/

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = str;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let sum = scan_instructions(input)
            .iter()
            .filter_map(|instruction| match instruction {
                Instruction::Mul(left, right) => Some(left * right),
                _ => None,
            })
            .checked_sum()
            .expect("should not overflow summing products");
        Ok(sum)
    }
}

/*
For part 2, `don't()` disables later `mul` instructions and `do()` re-enables
them; multiplications start enabled. Sum only the enabled results.
*/

impl Solution<PartTwo> for Day03 {
    type Input = str;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut enabled = true;
        let sum = scan_instructions(input)
            .iter()
            .filter_map(|instruction| match instruction {
                Instruction::Enable => {
                    enabled = true;
                    None
                }
                Instruction::Disable => {
                    enabled = false;
                    None
                }
                Instruction::Mul(left, right) => enabled.then(|| left * right),
            })
            .checked_sum()
            .expect("should not overflow summing products");
        Ok(sum)
    }
}
