use crate::NgramSize;
use ::std::collections::VecDeque;
use compact_str::CompactString;

pub(crate) type NgramString = CompactString;

/// Chars counted as word boundaries by the generator
pub const BOUNDARY_CHARS: [char; 2] = [' ', '\t'];

#[inline(always)]
pub fn is_boundary(ch: char) -> bool {
    BOUNDARY_CHARS.contains(&ch)
}

/// Collapses whitespace runs into a single space, trims both ends
/// and appends one space marking the end of the line.
///
/// A word end and a literal space are indistinguishable afterwards.
pub fn normalize_line(line: &str) -> String {
    let mut normalized = String::with_capacity(line.len() + 1);
    for word in line.split_whitespace() {
        normalized.push_str(word);
        normalized.push(' ');
    }
    if normalized.is_empty() {
        normalized.push(' ');
    }
    normalized
}

/// Sliding buffer of the last `n` chars, starts filled with spaces.
#[derive(Clone, Debug)]
pub struct NgramWindow {
    buf: VecDeque<char>,
}

impl NgramWindow {
    #[inline]
    pub fn new(ngram_size: NgramSize) -> Self {
        Self {
            buf: VecDeque::from(vec![' '; ngram_size.get()]),
        }
    }

    /// Shifts the window by one char and returns the new ngram
    #[inline]
    pub fn push(&mut self, ch: char) -> NgramString {
        self.buf.pop_front();
        self.buf.push_back(ch);
        self.buf.iter().collect()
    }

    /// Pushes every char of the normalized `line`, calling `f` with each ngram
    #[inline]
    pub(crate) fn feed_line(&mut self, line: &str, mut f: impl FnMut(NgramString)) {
        for ch in normalize_line(line).chars() {
            f(self.push(ch));
        }
    }
}
