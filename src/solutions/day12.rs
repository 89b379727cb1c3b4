use std::collections::{HashMap, VecDeque};

use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

use crate::geometry::{CARDINAL_DIRECTIONS, Grid, GridPoint, PointNeighbors, PointSet};

#[solution_runner(
    name = "Day 12: Garden Groups",
    parsed = GardenMap,
    part_one = Day12,
    part_two = Day12
)]
impl super::AdventOfCode2024<12> {}

/*
Input is a garden map: one plant label per plot, one plot per character.
Plots sharing a label and touching 4-adjacently grow the same plant and fence
together as a region.
*/

struct GardenMap {
    plots: Grid<char>,
}

#[derive(thiserror::Error, Debug)]
enum ParseGardenMapError {
    #[error("character is invalid for a plant label: {0:?}")]
    InvalidChar(char),
}

impl ParseData for GardenMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rows: Vec<Vec<char>> = parse_input_lines(input, |_, line| {
            line.chars()
                .map(|character| {
                    if character.is_ascii_alphabetic() {
                        Ok(character)
                    } else {
                        Err(ParseGardenMapError::InvalidChar(character).into())
                    }
                })
                .collect()
        })
        .collect::<Result<_, _>>()?;

        let plots = Grid::from_rows(rows)?;
        Ok(Self { plots })
    }
}

/// A maximal 4-connected group of same-label plots.
struct Region {
    label: char,
    plots: PointSet,
}

impl GardenMap {
    /// Partition the grid into regions.
    ///
    /// Scans row-major; each unlabeled plot seeds a flood fill over its
    /// 4-connected same-label neighbors, so discovery order is
    /// deterministic. The fill runs on an explicit worklist.
    fn regions(&self) -> Vec<Region> {
        let mut labeled = Grid::filled_like(&self.plots, false);
        let mut regions = Vec::new();

        for start in self.plots.iter_points() {
            if labeled[start] {
                continue;
            }
            let label = self.plots[start];

            let mut plots = PointSet::new();
            let mut worklist = VecDeque::from([start]);
            labeled[start] = true;

            while let Some(point) = worklist.pop_front() {
                debug_assert_eq!(self.plots[point], label, "flood fill crossed a label");
                plots.insert(point);
                for direction in CARDINAL_DIRECTIONS {
                    let neighbor = point + direction.into_vector();
                    if self.plots.get(neighbor) == Some(&label) && !labeled[neighbor] {
                        labeled[neighbor] = true;
                        worklist.push_back(neighbor);
                    }
                }
            }

            regions.push(Region { label, plots });
        }
        regions
    }
}

/*
For part 1, price each region at area times perimeter and sum the prices.
The perimeter counts the unit edges whose far side is out of bounds or a
different region.
*/

impl Region {
    fn area(&self) -> usize {
        self.plots.len()
    }

    /// Count boundary edges plot by plot.
    ///
    /// A neighbor outside the plot set is either out of bounds or another
    /// plant; both put a fence on that side.
    fn perimeter(&self) -> usize {
        self.plots
            .iter()
            .map(|&plot| {
                CARDINAL_DIRECTIONS
                    .iter()
                    .filter(|direction| !self.plots.contains(&(plot + direction.into_vector())))
                    .count()
            })
            .sum()
    }
}

/// Price a region by its area and one boundary measure.
fn price(area: usize, boundary: usize) -> u64 {
    let area = u64::try_from(area).expect("region area should fit in u64");
    let boundary = u64::try_from(boundary).expect("boundary measure should fit in u64");
    area.checked_mul(boundary)
        .expect("should not overflow pricing a region")
}

struct Day12;

impl Solution<PartOne> for Day12 {
    type Input = GardenMap;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let total = input
            .regions()
            .iter()
            .map(|region| price(region.area(), region.perimeter()))
            .checked_sum()
            .expect("should not overflow summing fence prices");
        Ok(total)
    }
}

/*
For part 2, the bulk discount prices a region at area times its number of
sides, where a side is a maximal straight run of boundary edges. A region has
as many sides as boundary corners, so the corners are counted instead.
*/

impl Region {
    /// Count the region's sides as its boundary corners.
    ///
    /// Every plot participates in the four lattice corners around it, tagged
    /// with the quadrant of the corner the plot fills: bit 0 set when the
    /// plot is right of the corner, bit 1 set when below. A corner is named
    /// after the cell whose top-left lattice point it is, which spreads the
    /// names one cell past the grid on the bottom and right.
    ///
    /// The participation multiset at a corner decides the turn there:
    /// - one plot: a convex corner;
    /// - two plots on diagonally opposite quadrants (tags differing in both
    ///   bits): the region pinches through the point, two corners;
    /// - two plots side by side: the boundary runs straight through, none;
    /// - three plots: a concave corner;
    /// - four plots: interior, none.
    fn side_count(&self) -> usize {
        let mut participations: HashMap<GridPoint, Vec<u8>> = HashMap::new();
        for &plot in &self.plots {
            participations.entry(plot).or_default().push(0b11);
            participations.entry(plot.right()).or_default().push(0b10);
            participations.entry(plot.down()).or_default().push(0b01);
            participations.entry(plot.down_right()).or_default().push(0b00);
        }

        participations
            .values()
            .map(|tags| match tags[..] {
                [_] => 1,
                [a, b] => {
                    if a ^ b == 0b11 {
                        2
                    } else {
                        0
                    }
                }
                [_, _, _] => 1,
                _ => 0,
            })
            .sum()
    }
}

impl Solution<PartTwo> for Day12 {
    type Input = GardenMap;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let total = input
            .regions()
            .iter()
            .map(|region| price(region.area(), region.side_count()))
            .checked_sum()
            .expect("should not overflow summing fence prices");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_EXAMPLE: &str = r"AAAA
BBCD
BBCC
EEEC
";

    const NESTED_EXAMPLE: &str = r"OOOOO
OXOXO
OOOOO
OXOXO
OOOOO
";

    const LARGER_EXAMPLE: &str = r"RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

    /// Measures per label for samples where each label forms one region.
    fn measures_by_label(input: &str) -> DynamicResult<HashMap<char, (usize, usize, usize)>> {
        let parsed = GardenMap::parse(input)?;
        let measures = parsed
            .regions()
            .into_iter()
            .map(|region| {
                (
                    region.label,
                    (region.area(), region.perimeter(), region.side_count()),
                )
            })
            .collect();
        Ok(measures)
    }

    #[test]
    fn small_example_region_measures() -> DynamicResult<()> {
        let measures = measures_by_label(SMALL_EXAMPLE)?;
        assert_eq!(measures[&'A'], (4, 10, 4));
        assert_eq!(measures[&'B'], (4, 8, 4));
        assert_eq!(measures[&'C'], (4, 10, 8));
        assert_eq!(measures[&'D'], (1, 4, 4));
        assert_eq!(measures[&'E'], (3, 8, 4));
        Ok(())
    }

    #[test]
    fn part_one_solves_examples() -> DynamicResult<()> {
        for (input, expected) in [
            (SMALL_EXAMPLE, 140),
            (NESTED_EXAMPLE, 772),
            (LARGER_EXAMPLE, 1930),
        ] {
            let parsed = GardenMap::parse(input)?;
            let result = <Day12 as Solution<PartOne>>::solve(&parsed)?;
            assert_eq!(result, expected);
        }
        Ok(())
    }

    #[test]
    fn part_two_solves_examples() -> DynamicResult<()> {
        for (input, expected) in [(SMALL_EXAMPLE, 80), (LARGER_EXAMPLE, 1206)] {
            let parsed = GardenMap::parse(input)?;
            let result = <Day12 as Solution<PartTwo>>::solve(&parsed)?;
            assert_eq!(result, expected);
        }
        Ok(())
    }

    #[test]
    fn inner_holes_add_sides() -> DynamicResult<()> {
        let parsed = GardenMap::parse("EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE\n")?;
        let result = <Day12 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 236);
        Ok(())
    }

    #[test]
    fn diagonal_touch_counts_two_corners() -> DynamicResult<()> {
        let parsed = GardenMap::parse(
            "AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA\n",
        )?;
        let result = <Day12 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 368);
        Ok(())
    }

    #[test]
    fn regions_partition_the_grid() -> DynamicResult<()> {
        let parsed = GardenMap::parse(LARGER_EXAMPLE)?;
        let regions = parsed.regions();

        let total_area: usize = regions.iter().map(Region::area).sum();
        let width = usize::from(parsed.plots.width().unsigned_abs());
        let height = usize::from(parsed.plots.height().unsigned_abs());
        assert_eq!(total_area, width * height);

        let mut seen = PointSet::new();
        for region in &regions {
            for &plot in &region.plots {
                assert_eq!(parsed.plots[plot], region.label);
                assert!(seen.insert(plot), "plot {plot} labeled twice");
            }
        }
        Ok(())
    }

    #[test]
    fn boundary_measures_stay_in_bounds() -> DynamicResult<()> {
        let parsed = GardenMap::parse(LARGER_EXAMPLE)?;
        for region in parsed.regions() {
            let area = region.area();
            let perimeter = region.perimeter();
            let sides = region.side_count();

            assert!(perimeter >= 4);
            assert!(perimeter <= 4 * area);
            assert!(sides <= perimeter);
        }
        Ok(())
    }
}
