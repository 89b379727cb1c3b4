use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Vector2;

use crate::geometry::{Coordinate, Grid, GridPoint, PointNeighbors, eight_direction_vectors};

#[solution_runner(
    name = "Day 4: Ceres Search",
    parsed = WordSearch,
    part_one = Day04,
    part_two = Day04
)]
impl super::AdventOfCode2024<4> {}

/*
Input is a rectangular grid of letters forming a word search.
*/

struct WordSearch {
    grid: Grid<char>,
}

impl ParseData for WordSearch {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rows: Vec<Vec<char>> =
            parse_input_lines(input, |_, line| Ok(line.chars().collect()))
                .collect::<Result<_, _>>()?;
        let grid = Grid::from_rows(rows)?;
        Ok(Self { grid })
    }
}

/*
For part 1, count every occurrence of the word XMAS: horizontal, vertical, or
diagonal, forwards or backwards, overlaps included.
*/

const WORD: [char; 4] = ['X', 'M', 'A', 'S'];

impl WordSearch {
    /// Whether the word reads from the start point along a one-step vector.
    fn has_word_from(&self, start: GridPoint, step: Vector2<Coordinate>) -> bool {
        let mut cursor = start;
        for letter in &WORD[1..] {
            cursor += step;
            if self.grid.get(cursor) != Some(letter) {
                return false;
            }
        }
        true
    }

    fn count_word_occurrences(&self) -> usize {
        self.grid
            .iter_points()
            .filter(|&point| self.grid[point] == WORD[0])
            .map(|point| {
                eight_direction_vectors()
                    .into_iter()
                    .filter(|&step| self.has_word_from(point, step))
                    .count()
            })
            .sum()
    }
}

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = WordSearch;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.count_word_occurrences())
    }
}

/*
For part 2, the actual puzzle is an X-MAS: two MAS strings crossing on their
shared A, each diagonal readable in either direction.
*/

impl WordSearch {
    fn is_cross_center(&self, point: GridPoint) -> bool {
        if self.grid[point] != 'A' {
            return false;
        }

        let diagonal_reads_mas = |near: GridPoint, far: GridPoint| {
            matches!(
                (self.grid.get(near), self.grid.get(far)),
                (Some('M'), Some('S')) | (Some('S'), Some('M'))
            )
        };

        diagonal_reads_mas(point.up_left(), point.down_right())
            && diagonal_reads_mas(point.up_right(), point.down_left())
    }
}

impl Solution<PartTwo> for Day04 {
    type Input = WordSearch;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .grid
            .iter_points()
            .filter(|&point| input.is_cross_center(point))
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = WordSearch::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 18);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = WordSearch::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 9);
        Ok(())
    }

    #[test]
    fn word_can_read_backwards() -> DynamicResult<()> {
        let parsed = WordSearch::parse("SAMX\n")?;
        let result = <Day04 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 1);
        Ok(())
    }
}
