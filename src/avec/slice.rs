//! Transport replaying a slice of received bytes.

use super::Transport;

/// A transport delivering the bytes of a slice, then nothing.
///
/// Useful to decode a recorded stream. Once the slice is exhausted, reads
/// wait for the full timeout and fail.
#[derive(Clone, Debug)]
pub struct SliceTransport<'a> {
    r: &'a [u8],
}

impl<'a> SliceTransport<'a> {
    pub fn new(r: &'a [u8]) -> Self {
        Self { r }
    }

    /// Bytes not yet read.
    pub fn remaining(&self) -> &'a [u8] {
        self.r
    }
}

impl Transport for SliceTransport<'_> {
    fn available(&mut self) -> bool {
        !self.r.is_empty()
    }

    fn read(&mut self) -> u8 {
        match self.r.split_first() {
            Some((&b, rest)) => {
                self.r = rest;
                b
            }
            None => 0,
        }
    }
}
