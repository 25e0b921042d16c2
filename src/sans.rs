//! IO-free building blocks for decoding teleinfo streams.
//!
//! Nothing in this module blocks or reads from a transport. Bytes are handed
//! in by the caller, one at a time for frame tracking or as a complete
//! information block for validation and splitting. See [`crate::avec`] for a
//! blocking implementation of the full read cycle.
//!
//! # Architecture
//!
//! Frame tracking is a finite-state machine whose states are zero-size,
//! non-copy tokens. Calling a token's `advance` method with the next received
//! byte returns its successor, along with any payload byte extracted. Only the
//! initial state, re-exported for convenience as [`Decoder`], can be
//! constructed.
//!
//! Once an information block has been collected, it is checked with a
//! [`check::Checksum`] and then split into fields by a [`record::Format`].
//! The checksum must be applied before splitting; splitting assumes the final
//! two bytes of the block are protocol trailer.

pub mod check;
pub mod frame;
pub mod record;

/// Entrypoint to the finite-state machine.
pub type Decoder = frame::FrameStart;

/// Capacity of a record buffer, and the largest information block accepted
/// (trailing separator and checksum included).
pub const MAX_INFO_SIZE: usize = 32;

/// Smallest information block able to hold a separator and its trailer.
pub const MIN_INFO_SIZE: usize = 3;
