//! Complete read cycles for one record format.

use core::marker::PhantomData;

use crate::sans::{MIN_INFO_SIZE, check::Checksum, record::Format};

use super::{Clock, Error, ReadTimeout, Reader, Transport};

/// Decoder reading records of format `F` from a transport.
///
/// Each call to [`TeleInfo::read`] runs one read cycle: wait for a frame,
/// extract its next information block, validate its checksum and split it
/// into fields. The only state kept across cycles is the checksum scheme
/// detected on the first valid block.
///
/// # Example
///
/// ```
/// let mut teleinfo = TeleInfo::<Historical, _, _>::new(serial, SystemClock::new());
/// teleinfo.begin();
///
/// let mut record = Historical::default();
/// loop {
///     match teleinfo.read(&mut record) {
///         Ok(()) => handle(record.key(), record.value()),
///         Err(err) => log::warn!("{}", err.name()),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct TeleInfo<F, T, C> {
    reader: Reader<T, C>,
    checksum: Checksum,
    _format: PhantomData<F>,
}

impl<F: Format, T: Transport, C: Clock> TeleInfo<F, T, C> {
    /// Create a decoder with the default read timeout.
    pub fn new(transport: T, clock: C) -> Self {
        Self::with_timeout(transport, clock, ReadTimeout::default())
    }

    pub fn with_timeout(transport: T, clock: C, timeout: ReadTimeout) -> Self {
        Self {
            reader: Reader::with_timeout(transport, clock, timeout),
            checksum: Checksum::new(),
            _format: PhantomData,
        }
    }

    /// Prepare the transport at the speed of format `F`.
    pub fn begin(&mut self) {
        self.reader.transport_mut().begin(F::BAUD_RATE);
    }

    /// Release the transport.
    pub fn end(&mut self) {
        self.reader.transport_mut().end();
    }

    pub fn checksum(&self) -> &Checksum {
        &self.checksum
    }

    pub fn reader_mut(&mut self) -> &mut Reader<T, C> {
        &mut self.reader
    }

    /// Release the transport and clock.
    pub fn into_inner(self) -> (T, C) {
        self.reader.into_inner()
    }

    /// Read one record.
    ///
    /// The record is cleared first, so on error its fields are all empty and
    /// never hold data from an earlier read. Nothing is retried; call again to
    /// resynchronize with the stream.
    pub fn read(&mut self, record: &mut F) -> Result<(), Error> {
        record.clear();

        if !self.reader.wait_for_frame() {
            Err(Error::Timeout)?;
        }

        let buf = record.buf_mut();
        let size = self.reader.fill_info_block(&mut buf[..])?;

        if size < MIN_INFO_SIZE {
            Err(Error::FrameTooSmall)?;
        }

        if !self.checksum.validate(&buf[..size]) {
            Err(Error::ChecksumInvalid)?;
        }

        record.split(size)?;

        Ok(())
    }
}
