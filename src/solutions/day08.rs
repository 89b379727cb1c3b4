use std::collections::HashMap;

use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Vector2;

use crate::geometry::{Coordinate, Grid, GridPoint, PointSet, unique_pairs};

#[solution_runner(
    name = "Day 8: Resonant Collinearity",
    parsed = AntennaMap,
    part_one = Day08,
    part_two = Day08
)]
impl super::AdventOfCode2024<8> {}

/*
Input is a map of antennas. `.` is empty; any other alphanumeric character is
an antenna broadcasting on the frequency the character names. Only antennas
sharing a frequency interact.
*/

struct AntennaMap {
    grid: Grid<char>,
    /// Antenna positions grouped by frequency character.
    antenna_groups: HashMap<char, Vec<GridPoint>>,
}

#[derive(thiserror::Error, Debug)]
enum ParseAntennaMapError {
    #[error("character is invalid for a map cell: {0:?}")]
    InvalidChar(char),
}

impl ParseData for AntennaMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rows: Vec<Vec<char>> = parse_input_lines(input, |_, line| {
            for character in line.chars() {
                if character != '.' && !character.is_ascii_alphanumeric() {
                    return Err(ParseAntennaMapError::InvalidChar(character).into());
                }
            }
            Ok(line.chars().collect())
        })
        .collect::<Result<_, _>>()?;
        let grid = Grid::from_rows(rows)?;

        let mut antenna_groups: HashMap<char, Vec<GridPoint>> = HashMap::new();
        for point in grid.iter_points() {
            let character = grid[point];
            if character != '.' {
                antenna_groups.entry(character).or_default().push(point);
            }
        }

        Ok(Self {
            grid,
            antenna_groups,
        })
    }
}

/*
For part 1, every pair of same-frequency antennas casts two antinodes, one on
each side, as far beyond each antenna as the antennas are apart. Count the
distinct in-bounds antinode positions.
*/

impl AntennaMap {
    fn paired_antinodes(&self) -> PointSet {
        let mut antinodes = PointSet::new();
        for positions in self.antenna_groups.values() {
            for (&a, &b) in unique_pairs(positions) {
                for point in [a + (a - b), b + (b - a)] {
                    if self.grid.contains(point) {
                        antinodes.insert(point);
                    }
                }
            }
        }
        antinodes
    }
}

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = AntennaMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.paired_antinodes().len())
    }
}

/*
For part 2, resonant harmonics put an antinode at every in-bounds grid
position exactly in line with a pair at a whole multiple of its separation,
the antennas themselves included.
*/

/// Insert every in-bounds point from the start along the step.
fn extend_ray(
    grid: &Grid<char>,
    start: GridPoint,
    step: Vector2<Coordinate>,
    antinodes: &mut PointSet,
) {
    let mut cursor = start;
    while grid.contains(cursor) {
        antinodes.insert(cursor);
        cursor += step;
    }
}

impl AntennaMap {
    fn harmonic_antinodes(&self) -> PointSet {
        let mut antinodes = PointSet::new();
        for positions in self.antenna_groups.values() {
            for (&a, &b) in unique_pairs(positions) {
                extend_ray(&self.grid, a, a - b, &mut antinodes);
                extend_ray(&self.grid, b, b - a, &mut antinodes);
            }
        }
        antinodes
    }
}

impl Solution<PartTwo> for Day08 {
    type Input = AntennaMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.harmonic_antinodes().len())
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::row_major_cmp;

    use super::*;

    const EXAMPLE_INPUT: &str = r"............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = AntennaMap::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 14);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = AntennaMap::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 34);
        Ok(())
    }

    #[test]
    fn lone_pair_casts_mirrored_antinodes() -> DynamicResult<()> {
        // one antinode falls off the left edge, the other lands in bounds
        let parsed = AntennaMap::parse("a.a..\n")?;
        assert_eq!(
            parsed.paired_antinodes(),
            PointSet::from([GridPoint::new(4, 0)])
        );
        Ok(())
    }

    #[test]
    fn harmonics_cover_the_antennas_and_the_line() -> DynamicResult<()> {
        let parsed = AntennaMap::parse("a.a..\n")?;
        let mut antinodes: Vec<_> = parsed.harmonic_antinodes().into_iter().collect();
        antinodes.sort_by(|a, b| row_major_cmp(*a, *b));
        assert_eq!(
            antinodes,
            vec![
                GridPoint::new(0, 0),
                GridPoint::new(2, 0),
                GridPoint::new(4, 0),
            ]
        );
        Ok(())
    }
}
