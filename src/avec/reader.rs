//! Frame reader over a blocking transport.

use either::Either::{Left, Right};
use thiserror::Error;

use crate::sans::{
    frame::{FrameStart, InfoStart, InfoStartError, strip_parity},
    record::SplitError,
};

use super::{Clock, Transport};

/// Errors ending a read cycle.
///
/// Every error is recoverable: the next read cycle starts a fresh search for
/// frame markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The frame ended before an information block started.
    #[error("Reached the end of the frame before an information block.")]
    FrameEndEncountered,
    /// The information block is too short to hold a separator and trailer.
    #[error("Information block is too small.")]
    FrameTooSmall,
    /// The information block has no field separator.
    #[error("Information block has no field separator.")]
    FrameInvalid,
    /// The checksum matches neither known scheme, or not the scheme in use.
    #[error("Information block checksum is invalid.")]
    ChecksumInvalid,
    /// No byte arrived within the read timeout.
    #[error("Timed out waiting for a byte.")]
    Timeout,
    /// The information block does not fit in the buffer.
    #[error("Information block exceeds the buffer capacity.")]
    BufferOverflow,
}

impl Error {
    /// Short identifier of this error, as printed by meter firmware tooling.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FrameEndEncountered => "FRAME_END",
            Self::FrameTooSmall => "FRAME_TOO_SMALL",
            Self::FrameInvalid => "FRAME_INVALID",
            Self::ChecksumInvalid => "CHECKSUM_INVALID",
            Self::Timeout => "TIMEOUT",
            Self::BufferOverflow => "DATA_OVERFLOW",
        }
    }
}

impl From<InfoStartError> for Error {
    fn from(err: InfoStartError) -> Self {
        match err {
            InfoStartError::FrameEnd => Self::FrameEndEncountered,
        }
    }
}

impl From<SplitError> for Error {
    fn from(_: SplitError) -> Self {
        Self::FrameInvalid
    }
}

/// Bound on how long a single byte read may block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadTimeout {
    /// Milliseconds without data before a read fails.
    pub limit_ms: u32,
    /// Milliseconds to sleep between checks for data.
    pub poll_ms: u32,
}

impl Default for ReadTimeout {
    fn default() -> Self {
        Self {
            limit_ms: 1000,
            poll_ms: 10,
        }
    }
}

/// Locates frame boundaries and extracts information blocks from a
/// transport.
///
/// The reader keeps no state between calls. Every call starts a fresh search
/// for markers, so after any error calling [`Reader::wait_for_frame`] again
/// resynchronizes with the stream.
#[derive(Debug)]
pub struct Reader<T, C> {
    transport: T,
    clock: C,
    timeout: ReadTimeout,
}

impl<T: Transport, C: Clock> Reader<T, C> {
    /// Create a reader with the default timeout.
    pub fn new(transport: T, clock: C) -> Self {
        Self::with_timeout(transport, clock, ReadTimeout::default())
    }

    pub fn with_timeout(transport: T, clock: C, timeout: ReadTimeout) -> Self {
        Self {
            transport,
            clock,
            timeout,
        }
    }

    pub fn timeout(&self) -> ReadTimeout {
        self.timeout
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Release the transport and clock.
    pub fn into_inner(self) -> (T, C) {
        (self.transport, self.clock)
    }

    /// Discard bytes until the start of a frame.
    ///
    /// Returns `false` if a read times out first.
    pub fn wait_for_frame(&mut self) -> bool {
        self.transport.flush();

        let mut state = FrameStart;
        loop {
            let Some(r) = self.read_byte() else {
                return false;
            };

            state = match state.advance(r) {
                Left(_) => return true,
                Right(state) => state,
            };
        }
    }

    /// Extract the next information block into a buffer.
    ///
    /// Discards bytes until the start of an information block, then copies
    /// bytes verbatim until its end marker, which is not copied. On success
    /// the block is followed by a NUL terminator and its length is returned.
    ///
    /// The block must be strictly shorter than the buffer, leaving room for
    /// the terminator. Nothing is ever written past the end of the buffer.
    pub fn fill_info_block(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let mut state = InfoStart(());
        let mut body = loop {
            let r = self.read_byte().ok_or(Error::Timeout)?;

            state = match state
                .advance(r)
                .inspect_err(|err| log::trace!("{err}"))?
            {
                Left(body) => break body,
                Right(state) => state,
            };
        };

        let mut size = 0;
        loop {
            let r = self.read_byte().ok_or(Error::Timeout)?;

            body = match body.advance(r) {
                Left(_) => break,
                Right((r, body)) => {
                    let slot = buf.get_mut(size).ok_or(Error::BufferOverflow)?;
                    *slot = r;
                    size += 1;

                    if size == buf.len() {
                        log::trace!("information block fills the {size}-byte buffer");
                        Err(Error::BufferOverflow)?;
                    }

                    body
                }
            };
        }

        if let Some(terminator) = buf.get_mut(size) {
            *terminator = 0;
        }

        Ok(size)
    }

    /// Read one byte, waiting up to the configured timeout.
    ///
    /// The parity bit is stripped. Returns `None` on timeout; a NUL byte is
    /// never valid protocol data and is reported the same way.
    pub fn read_byte(&mut self) -> Option<u8> {
        let start = self.clock.millis();

        while !self.transport.available() {
            self.clock.delay(self.timeout.poll_ms);

            if self.clock.millis().wrapping_sub(start) > self.timeout.limit_ms {
                log::debug!("read timeout");
                return None;
            }
        }

        match strip_parity(self.transport.read()) {
            0 => None,
            r => Some(r),
        }
    }
}
