//! Padding rules for pick-out sequences.
//!
//! Every sequence goes through two passes:
//! 1. Uppercase, then fill with `0` on the right up to the longest length.
//! 2. Extend by [`TAIL_WIDTH`] characters taken from the cyclic [`TAIL_PATTERN`].
//!
//! ```text
//! act   -> ACT00 -> ACT00AATAT
//! gtaca -> GTACA -> GTACAAATAT
//! ```

use crate::model::{PaddedSequenceSet, SequenceSet};

/// Fill character of the first pass.
pub const ZERO_FILL: char = '0';

/// Repeated tail appended by the second pass.
pub const TAIL_PATTERN: &str = "AATAT";

/// Characters added on top of the longest sequence.
pub const TAIL_WIDTH: usize = 5;

/// Left-justifies `text` to `width` characters using `fill`.
///
/// Text already at or beyond `width` is returned unchanged.
pub fn pad_right(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    let mut out = String::with_capacity(text.len() + width.saturating_sub(len));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(width.saturating_sub(len)));
    out
}

/// Extends `text` to `width` characters with the cyclic repetition of `pattern`.
///
/// The appended part always starts at the first character of `pattern` and is
/// truncated to exactly the missing number of characters.
pub fn pad_with_pattern(text: &str, width: usize, pattern: &str) -> String {
    let missing = width.saturating_sub(text.chars().count());
    let mut out = String::with_capacity(text.len() + missing);
    out.push_str(text);
    out.extend(pattern.chars().cycle().take(missing));
    out
}

/// First pass: uppercase and zero-fill to `max_len`.
pub fn primary_pad(token: &str, max_len: usize) -> String {
    pad_right(&token.to_uppercase(), max_len, ZERO_FILL)
}

/// Second pass: append the pattern tail up to `max_len + TAIL_WIDTH`.
pub fn secondary_pad(padded: &str, max_len: usize) -> String {
    pad_with_pattern(padded, max_len + TAIL_WIDTH, TAIL_PATTERN)
}

/// Pads the whole set to `max_len + TAIL_WIDTH`, keeping input order.
///
/// `max_len` comes from the set's [`LengthHistogram`](crate::model::LengthHistogram).
pub fn pad_sequences(sequences: &SequenceSet, max_len: usize) -> PaddedSequenceSet {
    let padded = sequences
        .iter()
        .map(|token| secondary_pad(&primary_pad(token, max_len), max_len))
        .collect();
    PaddedSequenceSet::new(padded, max_len + TAIL_WIDTH)
}
