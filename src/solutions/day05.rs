use std::collections::{HashMap, HashSet};
use std::num::ParseIntError;

use aoc_framework::parsing::{InputScanner, ParseContextError, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use petgraph::algo::toposort;
use petgraph::graph::DiGraph;

use crate::geometry::unique_pairs;

#[solution_runner(
    name = "Day 5: Print Queue",
    parsed = PrintPlan,
    part_one = Day05,
    part_two = Day05
)]
impl super::AdventOfCode2024<5> {}

/*
Input has two blocks separated by an empty line. The first block is one
ordering rule `X|Y` per line, meaning page X must be printed before page Y
whenever both appear in an update. The second block is one update per line, a
comma-separated list of page numbers.
*/

/// Type for page numbers.
///
/// Observed 2 digit numbers from input, so is sized to hold such.
type PageNumber = u8;

struct PrintPlan {
    /// Ordering rules as (before, after) pairs.
    rules: HashSet<(PageNumber, PageNumber)>,
    updates: Vec<Vec<PageNumber>>,
}

#[derive(thiserror::Error, Debug)]
enum ParsePrintPlanError {
    #[error("expected a rule formatted as X|Y, found: {0:?}")]
    ExpectedRuleFormat(String),

    #[error("failed to parse a page number")]
    ParsePage(#[from] ParseContextError<ParseIntError>),
}

impl ParseData for PrintPlan {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut scanner = InputScanner::new(input);

        let rule_list = scanner.collect_sequence(|_, line| -> DynamicResult<_> {
            let (before, after) = line
                .split_once('|')
                .ok_or_else(|| ParsePrintPlanError::ExpectedRuleFormat(line.to_owned()))?;
            let before = parse_with_context(before).map_err(ParsePrintPlanError::ParsePage)?;
            let after = parse_with_context(after).map_err(ParsePrintPlanError::ParsePage)?;
            Ok((before, after))
        })?;

        let updates = scanner.collect_sequence(|_, line| -> DynamicResult<_> {
            let pages = line
                .split(',')
                .map(|page| parse_with_context(page).map_err(ParsePrintPlanError::ParsePage))
                .collect::<Result<_, _>>()?;
            Ok(pages)
        })?;

        Ok(Self {
            rules: rule_list.into_iter().collect(),
            updates,
        })
    }
}

/*
For part 1, sum the middle page numbers of the updates that already respect
every rule.
*/

impl PrintPlan {
    /// Whether no rule orders a later page of the update before an earlier
    /// one.
    fn update_is_ordered(&self, pages: &[PageNumber]) -> bool {
        unique_pairs(pages).all(|(earlier, later)| !self.rules.contains(&(*later, *earlier)))
    }
}

fn middle_page(pages: &[PageNumber]) -> PageNumber {
    pages[pages.len() / 2]
}

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = PrintPlan;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let sum = input
            .updates
            .iter()
            .filter(|pages| input.update_is_ordered(pages.as_slice()))
            .map(|pages| Self::Output::from(middle_page(pages)))
            .checked_sum()
            .expect("should not overflow summing middle pages");
        Ok(sum)
    }
}

/*
For part 2, reorder only the incorrectly ordered updates so they respect the
rules, then sum their middle page numbers.
*/

impl PrintPlan {
    /// Order an update's pages by topologically sorting the rules that
    /// mention only pages of this update.
    ///
    /// The full rule set is cyclic by design; restricted to one update's
    /// pages it must not be, or no valid ordering would exist.
    fn reorder_update(&self, pages: &[PageNumber]) -> Vec<PageNumber> {
        let mut graph = DiGraph::<PageNumber, ()>::new();
        let node_for_page: HashMap<PageNumber, _> = pages
            .iter()
            .map(|&page| (page, graph.add_node(page)))
            .collect();

        for &(before, after) in &self.rules {
            if let (Some(&before_node), Some(&after_node)) =
                (node_for_page.get(&before), node_for_page.get(&after))
            {
                graph.add_edge(before_node, after_node, ());
            }
        }

        let sorted = toposort(&graph, None)
            .expect("rules restricted to one update's pages should be acyclic");
        sorted.into_iter().map(|node| graph[node]).collect()
    }
}

impl Solution<PartTwo> for Day05 {
    type Input = PrintPlan;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let sum = input
            .updates
            .iter()
            .filter(|pages| !input.update_is_ordered(pages.as_slice()))
            .map(|pages| Self::Output::from(middle_page(&input.reorder_update(pages))))
            .checked_sum()
            .expect("should not overflow summing middle pages");
        Ok(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = PrintPlan::parse(EXAMPLE_INPUT)?;
        let result = <Day05 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 143);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = PrintPlan::parse(EXAMPLE_INPUT)?;
        let result = <Day05 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 123);
        Ok(())
    }

    #[test]
    fn reorder_respects_rules() -> DynamicResult<()> {
        let parsed = PrintPlan::parse(EXAMPLE_INPUT)?;
        let reordered = parsed.reorder_update(&[75, 97, 47, 61, 53]);
        assert_eq!(reordered, vec![97, 75, 47, 61, 53]);
        assert!(parsed.update_is_ordered(&reordered));
        Ok(())
    }
}
