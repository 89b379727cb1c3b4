use std::fmt::{self, Display, Write as _};
use std::num::TryFromIntError;

use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "Day 9: Disk Fragmenter",
    parsed = Disk,
    part_one = Day09,
    part_two = Day09
)]
impl super::AdventOfCode2024<9> {}

/*
Input is a disk map: a single line of digits alternating file length, free
length, file length, free length. The file at even digit position 2k has id
k. A zero digit is legal, producing a file that owns no blocks or an empty
free span, and the line may end on either kind of digit.
*/

/// Type for file IDs.
///
/// The input has up to 5 digits of disk map, so ids stay under ten thousand.
type FileId = u16;

/// A file's identity and the block indices it currently owns.
#[derive(Debug, Clone)]
struct DiskFile {
    id: FileId,
    size: usize,
    /// Owned block indices, ascending until a compaction rewrites them.
    blocks: Vec<usize>,
}

/// A flat block array and the file table over it.
///
/// Invariant: `alloc[i]` names file `f` exactly when `i` is in `f.blocks`;
/// `None` marks a free block.
#[derive(Debug, Clone)]
struct Disk {
    alloc: Vec<Option<FileId>>,
    files: Vec<DiskFile>,
}

#[derive(thiserror::Error, Debug)]
enum ParseDiskError {
    #[error("disk map is empty")]
    Empty,

    #[error("character is invalid for a disk map: {0:?}")]
    InvalidDigit(char),

    #[error("too many files to represent a file id")]
    FileIdOverflow(#[source] TryFromIntError),
}

impl ParseData for Disk {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let digits = input.trim();
        if digits.is_empty() {
            return Err(ParseDiskError::Empty.into());
        }

        let mut alloc: Vec<Option<FileId>> = Vec::new();
        let mut files = Vec::new();
        for (digit_position, character) in digits.char_indices() {
            let length = character
                .to_digit(10)
                .ok_or(ParseDiskError::InvalidDigit(character))? as usize;

            if digit_position % 2 == 0 {
                let id =
                    FileId::try_from(files.len()).map_err(ParseDiskError::FileIdOverflow)?;
                let blocks: Vec<usize> = (alloc.len()..alloc.len() + length).collect();
                alloc.resize(alloc.len() + length, Some(id));
                files.push(DiskFile {
                    id,
                    size: length,
                    blocks,
                });
            } else {
                alloc.resize(alloc.len() + length, None);
            }
        }

        Ok(Self { alloc, files })
    }
}

impl Display for Disk {
    /// Render the block array: `.` for a free block, the owning file's id
    /// modulo ten otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.alloc {
            match slot {
                Some(id) => write!(f, "{}", id % 10)?,
                None => f.write_char('.')?,
            }
        }
        Ok(())
    }
}

/*
For part 1, compact one block at a time: repeatedly move the rightmost
allocated block into the leftmost free slot, until no allocated block has
free space to its left. Then sum block index times file id over the disk.
*/

impl Disk {
    /// The leftmost free index at or after `from`, if any.
    fn next_free(&self, from: usize) -> Option<usize> {
        self.alloc[from..]
            .iter()
            .position(Option::is_none)
            .map(|offset| from + offset)
    }

    /// Per-block compaction.
    ///
    /// Walks files highest id first and each file's blocks rightmost first,
    /// so blocks always move in rightmost-block order. Stops the moment the
    /// leftmost free slot is at or past the block under consideration, as no
    /// later block can be further right.
    fn compact_blocks(&mut self) {
        let Some(mut first_free) = self.next_free(0) else {
            return;
        };

        // the lowest-id file sits leftmost and never moves
        for file_index in (1..self.files.len()).rev() {
            let positions = self.files[file_index].blocks.clone();
            for (block_index, &position) in positions.iter().enumerate().rev() {
                if first_free >= position {
                    return;
                }

                let id = self.files[file_index].id;
                self.alloc[first_free] = Some(id);
                self.alloc[position] = None;
                self.files[file_index].blocks[block_index] = first_free;

                first_free = self.next_free(first_free + 1).unwrap_or(self.alloc.len());
            }
        }
    }

    /// Sum of block index times owning file id; free blocks contribute
    /// nothing.
    fn checksum(&self) -> u64 {
        self.alloc
            .iter()
            .enumerate()
            .filter_map(|(position, slot)| {
                slot.map(|id| {
                    let position =
                        u64::try_from(position).expect("block index should fit in u64");
                    position * u64::from(id)
                })
            })
            .checked_sum()
            .expect("should not overflow summing the checksum")
    }
}

struct Day09;

impl Solution<PartOne> for Day09 {
    type Input = Disk;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut disk = input.clone();
        disk.compact_blocks();
        Ok(disk.checksum())
    }
}

/*
For part 2, compact whole files instead: files in decreasing id order each
move once, to the leftmost free run large enough to hold the file, and only
if that run starts left of the file's current first block.
*/

impl Disk {
    /// The start of the leftmost free run of at least `size` blocks lying
    /// entirely before `limit`, if any.
    fn find_free_run(&self, size: usize, limit: usize) -> Option<usize> {
        let mut run_length = 0;
        for index in 0..limit {
            if self.alloc[index].is_none() {
                run_length += 1;
                if run_length == size {
                    return Some(index + 1 - size);
                }
            } else {
                run_length = 0;
            }
        }
        None
    }

    /// Whole-file compaction.
    fn compact_files(&mut self) {
        for file_index in (1..self.files.len()).rev() {
            let file = &self.files[file_index];
            if file.size == 0 {
                continue;
            }

            let first_block = file.blocks[0];
            let Some(run_start) = self.find_free_run(file.size, first_block) else {
                continue;
            };

            let id = file.id;
            let size = file.size;
            let old_blocks = std::mem::take(&mut self.files[file_index].blocks);
            let new_blocks: Vec<usize> = (run_start..run_start + size).collect();
            for &position in &old_blocks {
                self.alloc[position] = None;
            }
            for &position in &new_blocks {
                self.alloc[position] = Some(id);
            }
            self.files[file_index].blocks = new_blocks;
        }
    }
}

impl Solution<PartTwo> for Day09 {
    type Input = Disk;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut disk = input.clone();
        disk.compact_files();
        Ok(disk.checksum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "2333133121414131402\n";

    #[test]
    fn parse_renders_the_canonical_picture() -> DynamicResult<()> {
        let disk = Disk::parse("12345")?;
        assert_eq!(disk.to_string(), "0..111....22222");
        Ok(())
    }

    #[test]
    fn block_compaction_packs_leftward() -> DynamicResult<()> {
        let mut disk = Disk::parse("12345")?;
        disk.compact_blocks();
        assert_eq!(disk.to_string(), "022111222......");
        assert_eq!(disk.checksum(), 60);
        Ok(())
    }

    #[test]
    fn file_compaction_leaves_unmovable_files() -> DynamicResult<()> {
        let mut disk = Disk::parse("12345")?;
        disk.compact_files();
        assert_eq!(disk.to_string(), "0..111....22222");
        assert_eq!(disk.checksum(), 132);
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Disk::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 1928);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Disk::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 2858);
        Ok(())
    }

    #[test]
    fn compaction_conserves_allocated_blocks() -> DynamicResult<()> {
        let parsed = Disk::parse(EXAMPLE_INPUT)?;
        let total_size: usize = parsed.files.iter().map(|file| file.size).sum();

        for compact in [Disk::compact_blocks, Disk::compact_files] {
            let mut disk = parsed.clone();
            compact(&mut disk);
            let allocated = disk.alloc.iter().filter(|slot| slot.is_some()).count();
            assert_eq!(allocated, total_size);
        }
        Ok(())
    }

    #[test]
    fn trailing_free_span_is_appended() -> DynamicResult<()> {
        let disk = Disk::parse("12")?;
        assert_eq!(disk.to_string(), "0..");
        Ok(())
    }

    #[test]
    fn zero_length_file_never_occupies_a_block() -> DynamicResult<()> {
        let mut disk = Disk::parse("031")?;
        assert_eq!(disk.to_string(), "...1");
        disk.compact_blocks();
        assert_eq!(disk.to_string(), "1...");
        assert_eq!(disk.checksum(), 0);
        Ok(())
    }
}
