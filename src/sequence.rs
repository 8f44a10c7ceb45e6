//! Zero-copy text views used by the SNBT parser.
//!
//! A [`Sequence`] is an immutable `[start, end)` window over a shared text
//! buffer. Slicing only narrows the window, so any number of sequences (and
//! the parse errors built from them) can alias the same buffer without
//! copying. A [`Cursor`] walks a sequence in both directions and remembers one
//! mark, from which [`Cursor::sub_sequence`] yields the text consumed since.
//!
//! Offsets are byte offsets that must fall on character boundaries. Negative
//! offsets address from the end, `-1` being the last character.
//!
//! ```
//! use na_snbt::Sequence;
//!
//! let seq = Sequence::new("{key:value}");
//! let inner = seq.slice(1, -1).unwrap();
//! assert_eq!(inner, "key:value");
//! assert_eq!(inner.char_at(-1), Some('e'));
//!
//! let mut cursor = inner.cursor();
//! cursor.eat_while(|c| c != ':');
//! assert_eq!(cursor.sub_sequence(), "key");
//! ```

use std::{fmt, ops::Range};

use crate::{ParseError, ParseErrorKind};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sequence<'a> {
    buffer: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Sequence<'a> {
    #[inline]
    pub fn new(buffer: &'a str) -> Self {
        Self {
            buffer,
            start: 0,
            end: buffer.len(),
        }
    }

    /// The whole backing buffer this view was sliced from.
    #[inline]
    pub fn buffer(&self) -> &'a str {
        self.buffer
    }

    /// Absolute start offset in the backing buffer.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Absolute end offset (exclusive) in the backing buffer.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn as_str(&self) -> &'a str {
        &self.buffer[self.start..self.end]
    }

    #[inline]
    pub fn chars(&self) -> std::str::Chars<'a> {
        self.as_str().chars()
    }

    #[inline]
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor::new(*self)
    }

    /// Resolves a relative, possibly negative, offset to an absolute one.
    fn resolve(&self, index: isize) -> Option<usize> {
        let relative = if index < 0 {
            let back = index.unsigned_abs();
            if back > self.len() {
                return None;
            }
            self.len() - back
        } else {
            let index = index as usize;
            if index > self.len() {
                return None;
            }
            index
        };
        let absolute = self.start + relative;
        self.buffer
            .is_char_boundary(absolute)
            .then_some(absolute)
    }

    /// Narrows the view to `[from, to)`; both ends may be negative.
    pub fn slice(&self, from: isize, to: isize) -> Option<Sequence<'a>> {
        let start = self.resolve(from)?;
        let end = self.resolve(to)?;
        (start <= end).then_some(Sequence {
            buffer: self.buffer,
            start,
            end,
        })
    }

    #[inline]
    pub fn slice_from(&self, from: isize) -> Option<Sequence<'a>> {
        self.slice(from, self.len() as isize)
    }

    #[inline]
    pub fn slice_to(&self, to: isize) -> Option<Sequence<'a>> {
        self.slice(0, to)
    }

    /// Narrows the view to an absolute range of the backing buffer.
    pub(crate) fn with_range(&self, range: Range<usize>) -> Sequence<'a> {
        debug_assert!(self.start <= range.start && range.end <= self.end);
        Sequence {
            buffer: self.buffer,
            start: range.start,
            end: range.end,
        }
    }

    /// The character at a character index; negative indices count from the
    /// end.
    pub fn char_at(&self, index: isize) -> Option<char> {
        if index < 0 {
            self.chars().rev().nth(index.unsigned_abs() - 1)
        } else {
            self.chars().nth(index as usize)
        }
    }

    #[inline]
    pub fn first(&self) -> Option<char> {
        self.chars().next()
    }

    #[inline]
    pub fn last(&self) -> Option<char> {
        self.chars().next_back()
    }

    pub fn trim(&self) -> Sequence<'a> {
        self.trim_start().trim_end()
    }

    pub fn trim_start(&self) -> Sequence<'a> {
        let trimmed = self.as_str().trim_start();
        Sequence {
            buffer: self.buffer,
            start: self.end - trimmed.len(),
            end: self.end,
        }
    }

    pub fn trim_end(&self) -> Sequence<'a> {
        let trimmed = self.as_str().trim_end();
        Sequence {
            buffer: self.buffer,
            start: self.start,
            end: self.start + trimmed.len(),
        }
    }

    /// Drops `c` from both ends if the view is wrapped in it.
    pub fn strip_wrapper(&self, open: char, close: char) -> Option<Sequence<'a>> {
        let inner = self.as_str().strip_prefix(open)?.strip_suffix(close)?;
        let start = self.start + open.len_utf8();
        Some(Sequence {
            buffer: self.buffer,
            start,
            end: start + inner.len(),
        })
    }

    /// Absolute offset of the first character matching `pred`.
    pub fn position(&self, mut pred: impl FnMut(char) -> bool) -> Option<usize> {
        self.as_str()
            .char_indices()
            .find(|&(_, c)| pred(c))
            .map(|(i, _)| self.start + i)
    }

    /// Builds a parse error at a relative offset of this view.
    pub fn error_at(
        &self,
        offset: usize,
        kind: ParseErrorKind,
        message: impl Into<std::borrow::Cow<'static, str>>,
    ) -> ParseError {
        ParseError::new(self.buffer, self.start + offset, kind, message)
    }
}

impl fmt::Debug for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}..{}", self.as_str(), self.start, self.end)
    }
}

impl fmt::Display for Sequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Sequence<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Sequence<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Sequence<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<'a> From<&'a str> for Sequence<'a> {
    fn from(buffer: &'a str) -> Self {
        Sequence::new(buffer)
    }
}

impl<'a> IntoIterator for Sequence<'a> {
    type Item = char;
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

/// A position within a [`Sequence`] plus one mark.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    seq: Sequence<'a>,
    pos: usize,
    mark: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(seq: Sequence<'a>) -> Self {
        Self {
            seq,
            pos: seq.start,
            mark: seq.start,
        }
    }

    #[inline]
    pub fn sequence(&self) -> Sequence<'a> {
        self.seq
    }

    /// Absolute position in the backing buffer.
    #[inline]
    pub fn abs_pos(&self) -> usize {
        self.pos
    }

    /// Position relative to the start of the sequence.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos - self.seq.start
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.seq.end
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.seq.buffer[self.pos..self.seq.end]
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// The character just before the cursor.
    pub fn peek_back(&self) -> Option<char> {
        self.seq.buffer[self.seq.start..self.pos].chars().next_back()
    }

    /// Steps back over one character.
    pub fn prev(&mut self) -> Option<char> {
        let c = self.peek_back()?;
        self.pos -= c.len_utf8();
        Some(c)
    }

    #[inline]
    pub fn mark(&mut self) {
        self.mark = self.pos;
    }

    #[inline]
    pub fn marked(&self) -> usize {
        self.mark
    }

    /// Moves back to the mark.
    #[inline]
    pub fn reset(&mut self) {
        self.pos = self.mark;
    }

    /// Moves to an absolute position previously taken from
    /// [`abs_pos`](Self::abs_pos). Returns `false`, without moving, when
    /// `pos` is outside the sequence or not on a character boundary.
    pub fn jump(&mut self, pos: usize) -> bool {
        if pos < self.seq.start || pos > self.seq.end || !self.seq.buffer.is_char_boundary(pos) {
            return false;
        }
        self.pos = pos;
        true
    }

    /// The text between the mark and the current position.
    pub fn sub_sequence(&self) -> Sequence<'a> {
        let (start, end) = if self.mark <= self.pos {
            (self.mark, self.pos)
        } else {
            (self.pos, self.mark)
        };
        self.seq.with_range(start..end)
    }

    /// The text from `start` (absolute) to the current position.
    pub fn since(&self, start: usize) -> Sequence<'a> {
        self.seq.with_range(start..self.pos)
    }

    #[inline]
    pub fn remaining(&self) -> Sequence<'a> {
        self.seq.with_range(self.pos..self.seq.end)
    }

    pub fn skip_whitespace(&mut self) -> usize {
        let rest = self.rest();
        let skipped = rest.len() - rest.trim_start().len();
        self.pos += skipped;
        skipped
    }

    /// Peeks the next non-whitespace character without moving.
    pub fn peek_non_whitespace(&self) -> Option<char> {
        self.rest().trim_start().chars().next()
    }

    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    pub fn eat_if(&mut self, pred: impl FnOnce(char) -> bool) -> Option<char> {
        let c = self.peek().filter(|&c| pred(c))?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes characters while `pred` holds and returns them.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> Sequence<'a> {
        let start = self.pos;
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(rest.len(), |(i, _)| i);
        self.pos += len;
        self.seq.with_range(start..self.pos)
    }

    /// Consumes `word` if the text continues with it, ignoring ASCII case.
    pub fn eat_word_ignore_case(&mut self, word: &str) -> bool {
        let rest = self.rest();
        match rest.get(..word.len()) {
            Some(head) if head.eq_ignore_ascii_case(word) => {
                self.pos += word.len();
                true
            }
            _ => false,
        }
    }

    /// Runs `attempt`, rewinding to the current position when it yields
    /// nothing.
    pub fn attempt<T>(&mut self, attempt: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.pos;
        let result = attempt(self);
        if result.is_none() {
            self.pos = start;
        }
        result
    }

    #[inline]
    pub fn error(
        &self,
        kind: ParseErrorKind,
        message: impl Into<std::borrow::Cow<'static, str>>,
    ) -> ParseError {
        ParseError::new(self.seq.buffer, self.pos, kind, message)
    }

    #[inline]
    pub fn error_at(
        &self,
        pos: usize,
        kind: ParseErrorKind,
        message: impl Into<std::borrow::Cow<'static, str>>,
    ) -> ParseError {
        ParseError::new(self.seq.buffer, pos, kind, message)
    }
}

impl Iterator for Cursor<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.seq.end - self.pos;
        (len.div_ceil(4), Some(len))
    }
}
