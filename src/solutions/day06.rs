use std::num::TryFromIntError;

use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

use crate::geometry::{CardinalDirection, Coordinate, Grid, GridPoint};

#[solution_runner(
    name = "Day 6: Guard Gallivant",
    parsed = LabMap,
    part_one = Day06,
    part_two = Day06
)]
impl super::AdventOfCode2024<6> {}

/*
Input is a map of the lab: `.` is open floor, `#` is an obstruction, and a
single `^` marks the guard's starting position, facing north.

The guard repeats a fixed protocol: with an obstruction directly ahead, turn
90 degrees clockwise; otherwise step forward. Eventually the guard either
walks off the map or falls into a loop.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Obstruction,
}

/// The parsed lab: the obstruction layout and where the guard starts.
struct LabMap {
    cells: Grid<Cell>,
    start: GridPoint,
}

#[derive(thiserror::Error, Debug)]
enum ParseLabMapError {
    #[error("too many lines to represent y coordinate")]
    LineIndexOverflow(#[source] TryFromIntError),

    #[error("too many characters to represent x coordinate")]
    CharIndexOverflow(#[source] TryFromIntError),

    #[error("character is invalid for a map cell: {0:?}")]
    InvalidChar(char),

    #[error("detected a second guard after first (at {first}): {second}")]
    SecondGuard { first: GridPoint, second: GridPoint },

    #[error("map is missing a guard")]
    MissingGuard,
}

impl ParseData for LabMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut tracked_start = None;

        let rows: Vec<Vec<Cell>> = parse_input_lines(input, |line_index, line| -> DynamicResult<_> {
            let y = Coordinate::try_from(line_index).map_err(ParseLabMapError::LineIndexOverflow)?;

            let mut row = Vec::new();
            for (char_index, character) in line.char_indices() {
                let cell = match character {
                    '.' => Cell::Empty,
                    '#' => Cell::Obstruction,
                    '^' => {
                        let x = Coordinate::try_from(char_index)
                            .map_err(ParseLabMapError::CharIndexOverflow)?;
                        let coords = GridPoint::new(x, y);

                        if let Some(first) = tracked_start {
                            return Err(ParseLabMapError::SecondGuard {
                                first,
                                second: coords,
                            }
                            .into());
                        }
                        tracked_start = Some(coords);

                        // the guard stands on open floor
                        Cell::Empty
                    }
                    _ => return Err(ParseLabMapError::InvalidChar(character).into()),
                };
                row.push(cell);
            }
            Ok(row)
        })
        .collect::<Result<_, _>>()?;

        let cells = Grid::from_rows(rows)?;
        let start = tracked_start.ok_or(ParseLabMapError::MissingGuard)?;

        Ok(Self { cells, start })
    }
}

/// The guard's live patrol state.
struct Patrol {
    cells: Grid<Cell>,
    position: GridPoint,
    facing: CardinalDirection,
    /// Per-cell bitmask of the facings the guard has been marked with.
    visited: Grid<u8>,
    visited_count: usize,
    looping: bool,
}

impl Patrol {
    /// Start a fresh patrol over the map, optionally with one extra
    /// obstruction placed before the guard moves.
    fn new(map: &LabMap, extra_obstruction: Option<GridPoint>) -> Self {
        let mut cells = map.cells.clone();
        if let Some(point) = extra_obstruction {
            cells[point] = Cell::Obstruction;
        }

        let visited = Grid::filled_like(&cells, 0u8);
        let mut patrol = Self {
            cells,
            position: map.start,
            facing: CardinalDirection::North,
            visited,
            visited_count: 0,
            looping: false,
        };
        patrol.mark(patrol.position, patrol.facing);
        patrol
    }

    /// Record a visit of the position with the facing.
    ///
    /// Re-marking a `(position, facing)` pair means the walk has re-entered
    /// an earlier state, so it will repeat forever; the looping flag latches.
    fn mark(&mut self, position: GridPoint, facing: CardinalDirection) {
        let bit = facing.mask_bit();
        let mask = self.visited[position];

        if mask == 0 {
            self.visited_count += 1;
        }
        if mask & bit != 0 {
            self.looping = true;
        }
        self.visited[position] = mask | bit;
    }

    /// Advance the guard by one decision.
    ///
    /// Returns true when the guard steps off the map. A turn stays in place
    /// and marks nothing; only a forward move marks the new cell. The exit
    /// itself is never marked.
    fn step(&mut self) -> bool {
        assert!(
            self.cells[self.position] != Cell::Obstruction,
            "guard cannot stand on an obstruction"
        );

        let ahead = self.position + self.facing.into_vector();
        match self.cells.get(ahead) {
            None => true,
            Some(Cell::Obstruction) => {
                self.facing = self.facing.turn_clockwise();
                false
            }
            Some(Cell::Empty) => {
                self.position = ahead;
                self.mark(ahead, self.facing);
                false
            }
        }
    }

    /// Step until the guard exits the map or provably loops.
    fn run(&mut self) {
        while !self.looping && !self.step() {}
    }
}

/*
For part 1, count the distinct cells the guard visits before leaving the map.
*/

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = LabMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut patrol = Patrol::new(input, None);
        patrol.run();
        assert!(!patrol.looping, "the unmodified patrol should exit the map");
        Ok(patrol.visited_count)
    }
}

/*
For part 2, count the cells where adding a single new obstruction traps the
guard in a loop. The guard's starting cell is not a candidate.

Each candidate starts from a freshly built patrol; rebuilding resets the
visit masks and keeps candidate runs independent of each other.
*/

impl Solution<PartTwo> for Day06 {
    type Input = LabMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let count = input
            .cells
            .iter_points()
            .filter(|&candidate| candidate != input.start)
            .filter(|&candidate| {
                let mut patrol = Patrol::new(input, Some(candidate));
                patrol.run();
                patrol.looping
            })
            .count();
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn parse_finds_the_guard() -> DynamicResult<()> {
        let parsed = LabMap::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.start, GridPoint::new(4, 6));
        assert_eq!(parsed.cells[parsed.start], Cell::Empty);
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = LabMap::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 41);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = LabMap::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 6);
        Ok(())
    }

    #[test]
    fn a_turn_does_not_mark_the_current_cell() -> DynamicResult<()> {
        // guard faces an obstruction immediately, turns east, then exits
        let parsed = LabMap::parse("#.\n^.\n")?;
        let mut patrol = Patrol::new(&parsed, None);
        patrol.run();
        assert!(!patrol.looping);
        // start plus the single eastward move
        assert_eq!(patrol.visited_count, 2);
        Ok(())
    }

    #[test]
    fn patrol_terminates_within_the_state_bound() -> DynamicResult<()> {
        let parsed = LabMap::parse(EXAMPLE_INPUT)?;
        let state_bound =
            4 * usize::from(parsed.cells.width().unsigned_abs()) * usize::from(parsed.cells.height().unsigned_abs());

        let mut patrol = Patrol::new(&parsed, None);
        let mut steps = 0;
        while !patrol.looping && !patrol.step() {
            steps += 1;
            assert!(steps <= state_bound, "patrol should settle within {state_bound} steps");
        }
        Ok(())
    }

    #[test]
    fn revisiting_a_cell_and_facing_flags_a_loop() -> DynamicResult<()> {
        // four obstructions forming a closed clockwise circuit
        let parsed = LabMap::parse(".#..\n.^.#\n#...\n..#.\n")?;
        let mut patrol = Patrol::new(&parsed, None);
        patrol.run();
        assert!(patrol.looping);
        Ok(())
    }
}
