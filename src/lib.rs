#![no_std]

//! A decoder for the "teleinfo" serial telemetry emitted by residential
//! electricity meters.
//!
//! Meters continuously transmit frames bounded by control markers, each
//! carrying newline-delimited key/value information blocks protected by a
//! one-byte checksum. This crate locates those blocks, validates their
//! checksum, and splits them into raw key, date and value spans. It does not
//! interpret the decoded values.
//!
//! Most users should begin with [`avec::TeleInfo`], which runs a complete
//! read cycle over a byte transport. The IO-free building blocks (checksum
//! validation, marker classification and field splitting) are exposed in the
//! [`sans`] module for applications that drive the stream themselves.
//!
//! Both protocol generations are supported: [`Historical`] (space-separated,
//! 1200 baud) and [`Standard`] (tab-separated with optional dates, 9600 baud).
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable the [`std::time`]-backed clock (default).
//!
//! ## Logging
//!
//! Internal decisions, such as the detected checksum scheme, are reported
//! through the [`log`] facade and are silent unless a logger is installed.

#[cfg(feature = "std")]
extern crate std;

pub mod avec;
pub mod sans;

pub use sans::record::{Historical, Standard};
