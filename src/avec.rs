//! Blocking interfaces running complete read cycles over a byte transport.
//!
//! The decoder consumes two capabilities supplied by the application: a
//! [`Transport`] delivering received bytes, and a [`Clock`] bounding how long
//! a read may wait. Neither is opened, configured or owned beyond the
//! lifetime of the decoder.
//!
//! [`TeleInfo`] composes a [`Reader`], a checksum validator and a record
//! [`Format`](crate::sans::record::Format) into a single `read` call. All
//! reads are synchronous; a call may block for up to the configured per-byte
//! timeout while waiting for data.

pub mod reader;
pub mod slice;
#[cfg(feature = "std")]
pub mod system;
pub mod teleinfo;

pub use reader::{Error, ReadTimeout, Reader};
pub use slice::SliceTransport;
#[cfg(feature = "std")]
pub use system::SystemClock;
pub use teleinfo::TeleInfo;

/// A source of received bytes, such as a serial port.
pub trait Transport {
    /// Whether a byte can be read without blocking.
    fn available(&mut self) -> bool;

    /// Read an available byte.
    ///
    /// Only called after [`Transport::available`] returned `true`.
    fn read(&mut self) -> u8;

    /// Discard any pending data, before waiting for a new frame.
    fn flush(&mut self) {}

    /// Prepare the transport to receive at a speed, in baud.
    fn begin(&mut self, _baud: u32) {}

    /// Release the transport.
    fn end(&mut self) {}
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn available(&mut self) -> bool {
        (**self).available()
    }

    fn read(&mut self) -> u8 {
        (**self).read()
    }

    fn flush(&mut self) {
        (**self).flush()
    }

    fn begin(&mut self, baud: u32) {
        (**self).begin(baud)
    }

    fn end(&mut self) {
        (**self).end()
    }
}

/// A monotonic time source.
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary reference point.
    ///
    /// The counter may wrap around.
    fn millis(&self) -> u32;

    /// Suspend the current thread for about `ms` milliseconds.
    fn delay(&mut self, ms: u32);
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn millis(&self) -> u32 {
        (**self).millis()
    }

    fn delay(&mut self, ms: u32) {
        (**self).delay(ms)
    }
}
