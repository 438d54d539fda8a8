//! # `merges.txt` Reader

use std::io::BufRead;

use crate::{
    errors::{EmoError, EmoResult},
    vocab::MergeRankTable,
};

/// The header prefix on the first line of a `merges.txt`.
pub const VERSION_HEADER: &str = "#version";

/// Parse merge lines into a [`MergeRankTable`].
///
/// Blank lines are ignored. If the first non-blank line is a
/// ``#version`` header it is skipped; otherwise it is the rank-0 merge.
/// Every other line must hold exactly two whitespace-separated tokens.
///
/// ## Arguments
/// * `lines` - The source lines, in priority order.
///
/// ## Returns
/// [`EmoError::MalformedMerge`] with the 1-based line number of a bad line.
pub fn parse_merge_lines<I, S>(lines: I) -> EmoResult<MergeRankTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut first_line = true;

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        if core::mem::take(&mut first_line) && line.trim_start().starts_with(VERSION_HEADER) {
            log::debug!("skipping merges header {:?}", line.trim());
            continue;
        }

        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(left), Some(right), None) => pairs.push((left.to_string(), right.to_string())),
            _ => {
                return Err(EmoError::MalformedMerge {
                    line: idx + 1,
                    text: line.to_string(),
                });
            }
        }
    }

    MergeRankTable::from_pairs(pairs)
}

/// Read a `merges.txt` file into a [`MergeRankTable`].
///
/// See [`parse_merge_lines`].
pub fn read_merges_txt<R: BufRead>(reader: R) -> EmoResult<MergeRankTable> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    parse_merge_lines(lines)
}
