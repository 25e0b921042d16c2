//! States locating frame and information block boundaries.

use either::Either::{self, Left, Right};
use tartan_bitfield::bitfield;
use thiserror::Error;

/// A control byte delimiting frames and information blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Marker {
    /// Begins a frame.
    StartFrame = 0x02,
    /// Ends a frame.
    EndFrame = 0x03,
    /// Begins an information block.
    StartInfo = 0x0A,
    /// Ends an information block.
    EndInfo = 0x0D,
}

impl Marker {
    /// Classify a (parity-stripped) byte as a marker, if it is one.
    pub fn classify(r: u8) -> Option<Self> {
        match r {
            0x02 => Some(Self::StartFrame),
            0x03 => Some(Self::EndFrame),
            0x0A => Some(Self::StartInfo),
            0x0D => Some(Self::EndInfo),
            _ => None,
        }
    }
}

/// Strip the parity bit from a byte as received on the wire.
///
/// Teleinfo is transmitted as 7-bit characters; the high bit carries no data.
pub fn strip_parity(r: u8) -> u8 {
    bitfield! {
        struct WireByte(u8) {
            [0..7] payload: u8,
        }
    }

    WireByte(r).payload()
}

/// State token to discard bytes until the start of a frame.
#[derive(Debug)]
pub struct FrameStart;

impl FrameStart {
    /// Transition to another state by examining a byte.
    ///
    /// Returns a successor state token once the start-of-frame marker is seen.
    pub fn advance(self, r: u8) -> Either<InfoStart, Self> {
        match Marker::classify(r) {
            Some(Marker::StartFrame) => Left(InfoStart(())),
            _ => Right(self),
        }
    }
}

/// An error advancing towards the start of an information block.
#[derive(Debug, Error)]
pub enum InfoStartError {
    /// The frame ended before another information block began.
    #[error("Reached the end of the frame.")]
    FrameEnd,
}

/// State token to discard bytes until the start of an information block.
#[derive(Debug)]
pub struct InfoStart(pub(crate) ());

impl InfoStart {
    /// Transition to another state by examining a byte.
    ///
    /// Returns a successor state token once the start-of-information marker
    /// is seen.
    pub fn advance(self, r: u8) -> Result<Either<InfoBody, Self>, InfoStartError> {
        let successor = match Marker::classify(r) {
            Some(Marker::EndFrame) => Err(InfoStartError::FrameEnd)?,
            Some(Marker::StartInfo) => Left(InfoBody(())),
            _ => Right(self),
        };

        Ok(successor)
    }
}

/// State token to collect the bytes of an information block.
#[derive(Debug)]
pub struct InfoBody(pub(crate) ());

impl InfoBody {
    /// Transition to another state by examining a byte.
    ///
    /// Returns the byte as part of the block, or at the end-of-information
    /// marker, a successor state token awaiting the next block. Any other
    /// byte, markers included, belongs to the block.
    pub fn advance(self, r: u8) -> Either<InfoStart, (u8, Self)> {
        match Marker::classify(r) {
            Some(Marker::EndInfo) => Left(InfoStart(())),
            _ => Right((r, self)),
        }
    }
}
