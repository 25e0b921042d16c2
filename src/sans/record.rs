//! Record layouts for both protocol generations, and the splitting of a
//! validated information block into fields.

use thiserror::Error;

use super::{MAX_INFO_SIZE, MIN_INFO_SIZE};

/// A view of part of a record buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first byte.
    pub start: usize,
    /// Number of bytes.
    pub len: usize,
}

impl Span {
    fn between(start: usize, end: usize) -> Self {
        Self {
            start,
            len: end - start,
        }
    }

    /// Offset one past the last byte.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Resolve the span against a buffer.
    pub fn get<'a>(&self, r: &'a [u8]) -> Option<&'a [u8]> {
        r.get(self.start..self.end())
    }
}

/// An error splitting an information block into fields.
#[derive(Debug, Error)]
pub enum SplitError {
    /// No field separator before the trailer.
    #[error("No field separator found.")]
    MissingSeparator,
    /// Block length outside of the range a record buffer can hold.
    #[error("Unusable block length ({0}).")]
    Length(usize),
}

/// The layout of an information block for one protocol generation.
///
/// A record owns the buffer an information block is read into. Splitting
/// recomputes every field span from scratch; spans are never carried over from
/// an earlier block.
pub trait Format: Default {
    /// Byte separating the fields of a block.
    const SEPARATOR: u8;
    /// Nominal transport speed of this generation.
    const BAUD_RATE: u32;

    /// The buffer receiving the raw block.
    fn buf_mut(&mut self) -> &mut [u8; MAX_INFO_SIZE];

    /// Split the first `size` bytes of the buffer into fields.
    ///
    /// `size` includes the two trailing protocol bytes, which never belong to
    /// a field. On error, the field spans are left untouched.
    fn split(&mut self, size: usize) -> Result<(), SplitError>;

    /// Reset the buffer and every span.
    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Offset of the trailer of a block of `size` bytes.
fn trailer_start(size: usize) -> Result<usize, SplitError> {
    if !(MIN_INFO_SIZE..=MAX_INFO_SIZE).contains(&size) {
        Err(SplitError::Length(size))?;
    }

    Ok(size - 2)
}

fn find(r: &[u8], separator: u8) -> Option<usize> {
    r.iter().position(|b| *b == separator)
}

/// A record from a historical meter: a key and a value separated by a space.
#[derive(Clone, Debug, Default)]
pub struct Historical {
    buf: [u8; MAX_INFO_SIZE],
    key: Option<Span>,
    value: Option<Span>,
}

impl Historical {
    /// The raw buffer, including trailer and terminator of the last block.
    pub fn buf(&self) -> &[u8; MAX_INFO_SIZE] {
        &self.buf
    }

    pub fn key(&self) -> Option<&[u8]> {
        self.key.and_then(|s| s.get(&self.buf))
    }

    pub fn value(&self) -> Option<&[u8]> {
        self.value.and_then(|s| s.get(&self.buf))
    }
}

impl Format for Historical {
    const SEPARATOR: u8 = b' ';
    const BAUD_RATE: u32 = 1200;

    fn buf_mut(&mut self) -> &mut [u8; MAX_INFO_SIZE] {
        &mut self.buf
    }

    fn split(&mut self, size: usize) -> Result<(), SplitError> {
        let end = trailer_start(size)?;
        let sep = find(&self.buf[..end], Self::SEPARATOR).ok_or(SplitError::MissingSeparator)?;

        self.key = Some(Span::between(0, sep));
        self.value = Some(Span::between(sep + 1, end));

        Ok(())
    }
}

/// A record from a standard meter: a key, an optional date and a value,
/// separated by tabs.
#[derive(Clone, Debug, Default)]
pub struct Standard {
    buf: [u8; MAX_INFO_SIZE],
    key: Option<Span>,
    date: Option<Span>,
    value: Option<Span>,
}

impl Standard {
    /// The raw buffer, including trailer and terminator of the last block.
    pub fn buf(&self) -> &[u8; MAX_INFO_SIZE] {
        &self.buf
    }

    pub fn key(&self) -> Option<&[u8]> {
        self.key.and_then(|s| s.get(&self.buf))
    }

    /// The timestamp attached to the value, for keys that carry one.
    pub fn date(&self) -> Option<&[u8]> {
        self.date.and_then(|s| s.get(&self.buf))
    }

    pub fn value(&self) -> Option<&[u8]> {
        self.value.and_then(|s| s.get(&self.buf))
    }
}

impl Format for Standard {
    const SEPARATOR: u8 = b'\t';
    const BAUD_RATE: u32 = 9600;

    fn buf_mut(&mut self) -> &mut [u8; MAX_INFO_SIZE] {
        &mut self.buf
    }

    fn split(&mut self, size: usize) -> Result<(), SplitError> {
        let end = trailer_start(size)?;
        let sep = find(&self.buf[..end], Self::SEPARATOR).ok_or(SplitError::MissingSeparator)?;

        // A second separator before the trailer means the block is dated.
        let rest = sep + 1;
        let (date, value_start) = match find(&self.buf[rest..end], Self::SEPARATOR) {
            Some(i) => (Some(Span::between(rest, rest + i)), rest + i + 1),
            None => (None, rest),
        };

        self.key = Some(Span::between(0, sep));
        self.date = date;
        self.value = Some(Span::between(value_start, end));

        Ok(())
    }
}
