//! Utility functions and errors for parsing input.

use std::iter::{Enumerate, Peekable};
use std::str::{FromStr, Lines};

use thiserror::Error;

use crate::{DynamicError, DynamicResult};

/// A string parsing error carrying the string that failed to parse.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    /// The string that was being parsed.
    string: String,
    source: E,
}

/// Parse a string slice into another type, keeping the string as error
/// context.
///
/// # Errors
///
/// Returns a [`ParseContextError`] wrapping [`F::Err`][FromStr::Err] if the
/// string does not parse.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string.parse::<F>().map_err(|source| ParseContextError {
        string: string.to_string(),
        source,
    })
}

/// A line in an input string caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// The line index, zero based; displayed one based.
    line_index: usize,
    source: DynamicError,
}

/// Parse each line of the input with a closure receiving the line index and
/// the line.
///
/// # Errors
///
/// A line that fails to parse yields an [`InvalidLine`] sourcing the
/// closure's error; remaining lines are still iterable.
pub fn parse_input_lines<T, F>(
    input: &str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    F: FnMut(usize, &str) -> DynamicResult<T>,
{
    input.lines().enumerate().map(move |(line_index, line)| {
        parser(line_index, line).map_err(|source| InvalidLine { line_index, source })
    })
}

/// A cursor over the lines of an input string, for inputs structured as
/// blank-line-separated sequences.
///
/// A *sequence* is a run of non-empty lines; an empty line (or the end of
/// input) terminates it. The scanner hands each line to a parsing closure
/// along with the line's index in the whole input, so errors can report
/// accurate line numbers.
pub struct InputScanner<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
}

impl<'a> InputScanner<'a> {
    /// Create a scanner at the first line of the input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate().peekable(),
        }
    }

    /// Parse the next line of the current sequence.
    ///
    /// Consumes one line. Returns `Ok(None)` when the sequence is over,
    /// whether by an empty line (consumed) or by the end of input.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidLine`] sourcing the closure's error.
    pub fn next_in_sequence<T, F>(&mut self, parser: F) -> Result<Option<T>, InvalidLine>
    where
        F: FnOnce(usize, &str) -> DynamicResult<T>,
    {
        match self.lines.next() {
            None => Ok(None),
            Some((_, line)) if line.is_empty() => Ok(None),
            Some((line_index, line)) => parser(line_index, line)
                .map(Some)
                .map_err(|source| InvalidLine { line_index, source }),
        }
    }

    /// Parse lines until the current sequence ends, collecting the results.
    ///
    /// # Errors
    ///
    /// Stops at the first line that fails to parse, returning its
    /// [`InvalidLine`].
    pub fn collect_sequence<T, F>(&mut self, mut parser: F) -> Result<Vec<T>, InvalidLine>
    where
        F: FnMut(usize, &str) -> DynamicResult<T>,
    {
        let mut items = Vec::new();
        while let Some(item) = self.next_in_sequence(&mut parser)? {
            items.push(item);
        }
        Ok(items)
    }

    /// Skip over empty lines without consuming the next non-empty line.
    ///
    /// Returns `Some(())` if a non-empty line remains, `None` at end of
    /// input. Useful for iterating an unknown number of sequences.
    pub fn skip_empty(&mut self) -> Option<()> {
        while let Some((_, line)) = self.lines.peek() {
            if line.is_empty() {
                self.lines.next();
            } else {
                return Some(());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_input_lines_reports_line_number() {
        let results: Vec<_> =
            parse_input_lines("1\ntwo\n3\n", |_, line| Ok(line.parse::<u32>()?)).collect();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        let Err(error) = &results[1] else {
            panic!("line 2 should fail to parse");
        };
        assert_eq!(error.to_string(), "failure parsing line 2");
        assert!(results[2].is_ok());
    }

    #[test]
    fn scanner_splits_sequences_at_empty_lines() -> DynamicResult<()> {
        let mut scanner = InputScanner::new("1\n2\n\n3\n");

        let first = scanner.collect_sequence(|_, line| Ok(line.parse::<u32>()?))?;
        assert_eq!(first, vec![1, 2]);

        let second = scanner.collect_sequence(|_, line| Ok(line.parse::<u32>()?))?;
        assert_eq!(second, vec![3]);

        assert!(scanner.skip_empty().is_none());
        Ok(())
    }
}
