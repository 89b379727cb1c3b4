use std::collections::VecDeque;

use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

use crate::geometry::{Grid, GridPoint, PointNeighbors, PointSet};

#[solution_runner(
    name = "Day 10: Hoof It",
    parsed = TopographicMap,
    part_one = Day10,
    part_two = Day10
)]
impl super::AdventOfCode2024<10> {}

/*
Input is a topographic map: a grid of digit heights 0 through 9, with `.`
marking cells no trail can cross.

A hiking trail starts at height 0, ends at height 9, and climbs by exactly
one per step, moving only between 4-adjacent cells. Trailheads are the
height-0 cells.
*/

/// Sentinel height written at `.` cells; above every real height, so no
/// climb-by-one step ever enters one.
const IMPASSABLE: u8 = 10;

struct TopographicMap {
    heights: Grid<u8>,
}

#[derive(thiserror::Error, Debug)]
enum ParseTopographicMapError {
    #[error("character is invalid for a height: {0:?}")]
    InvalidChar(char),
}

impl ParseData for TopographicMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rows: Vec<Vec<u8>> = parse_input_lines(input, |_, line| {
            line.chars()
                .map(|character| match character {
                    '.' => Ok(IMPASSABLE),
                    _ => character
                        .to_digit(10)
                        .map(|digit| u8::try_from(digit).expect("decimal digit should fit u8"))
                        .ok_or_else(|| ParseTopographicMapError::InvalidChar(character).into()),
                })
                .collect()
        })
        .collect::<Result<_, _>>()?;

        let heights = Grid::from_rows(rows)?;
        Ok(Self { heights })
    }
}

impl TopographicMap {
    /// The height-0 cells, in row-major order.
    fn trailheads(&self) -> impl Iterator<Item = GridPoint> {
        self.heights
            .iter_points()
            .filter(|&point| self.heights[point] == 0)
    }
}

/*
For part 1, a trailhead's score is the number of distinct height-9 cells
reachable from it by some trail. Sum the scores.
*/

impl TopographicMap {
    /// Count the distinct peaks reachable from a trailhead.
    ///
    /// Breadth-first search with a visited set: each reachable cell is
    /// expanded once, so each reachable peak counts once.
    fn trailhead_score(&self, trailhead: GridPoint) -> usize {
        let mut visited = PointSet::from([trailhead]);
        let mut frontier = VecDeque::from([trailhead]);
        let mut peaks = 0;

        while let Some(point) = frontier.pop_front() {
            let height = self.heights[point];
            if height == 9 {
                continue;
            }

            for neighbor in [point.up(), point.right(), point.down(), point.left()] {
                if self.heights.get(neighbor) == Some(&(height + 1)) && visited.insert(neighbor) {
                    if self.heights[neighbor] == 9 {
                        peaks += 1;
                    }
                    frontier.push_back(neighbor);
                }
            }
        }
        peaks
    }
}

struct Day10;

impl Solution<PartOne> for Day10 {
    type Input = TopographicMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .trailheads()
            .map(|trailhead| input.trailhead_score(trailhead))
            .sum())
    }
}

/*
For part 2, a trailhead's rating is the number of distinct trails leaving it,
counting paths rather than endpoints. Sum the ratings.
*/

impl TopographicMap {
    /// Count the distinct trails from a cell to any peak.
    ///
    /// Plain recursion with no visited set: distinct paths to the same peak
    /// each count. Strict ascent bounds the depth at ten cells, so the
    /// recursion is safe.
    fn trail_rating(&self, point: GridPoint) -> usize {
        let height = self.heights[point];
        if height == 9 {
            return 1;
        }

        [point.up(), point.right(), point.down(), point.left()]
            .into_iter()
            .map(|neighbor| {
                if self.heights.get(neighbor) == Some(&(height + 1)) {
                    self.trail_rating(neighbor)
                } else {
                    0
                }
            })
            .sum()
    }
}

impl Solution<PartTwo> for Day10 {
    type Input = TopographicMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .trailheads()
            .map(|trailhead| input.trail_rating(trailhead))
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = TopographicMap::parse(EXAMPLE_INPUT)?;
        let result = <Day10 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 36);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = TopographicMap::parse(EXAMPLE_INPUT)?;
        let result = <Day10 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 81);
        Ok(())
    }

    #[test]
    fn impassable_cells_split_the_slopes() -> DynamicResult<()> {
        let parsed = TopographicMap::parse(
            "...0...\n...1...\n...2...\n6543456\n7.....7\n8.....8\n9.....9\n",
        )?;
        let trailhead = GridPoint::new(3, 0);
        assert_eq!(parsed.trailhead_score(trailhead), 2);
        Ok(())
    }

    #[test]
    fn rating_counts_each_distinct_trail() -> DynamicResult<()> {
        let parsed = TopographicMap::parse(
            ".....0.\n..4321.\n..5..2.\n..6543.\n..7..4.\n..8765.\n..9....\n",
        )?;
        let trailhead = GridPoint::new(5, 0);
        assert_eq!(parsed.trail_rating(trailhead), 3);
        Ok(())
    }

    #[test]
    fn single_file_ridge_scores_once() -> DynamicResult<()> {
        let parsed = TopographicMap::parse("0123456789\n")?;
        assert_eq!(parsed.trailhead_score(GridPoint::new(0, 0)), 1);
        assert_eq!(parsed.trail_rating(GridPoint::new(0, 0)), 1);
        Ok(())
    }
}
