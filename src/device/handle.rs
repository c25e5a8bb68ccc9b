//! Per-open handles: the cursor side of the file interface.

use std::sync::Arc;

use bytes::Bytes;

use crate::error::MotdError;
use crate::transfer::{TransferSink, TransferSource};

use super::{MotdDevice, OpenMode, Whence};

/// A cursor over a [`MotdDevice`], paired with the mode it was opened in.
///
/// The handle owns the per-open state the device deliberately does not:
/// the current position. Reads and writes advance the cursor by the
/// number of bytes they report; failed operations leave it where it was.
/// Handles are cheap (an `Arc` clone plus an offset) and independent:
/// two handles on the same device never share a cursor.
///
/// A handle used concurrently from two threads without external
/// synchronization has an unspecified cursor interleaving; wrap it in a
/// lock or give each thread its own handle.
///
/// Dropping the handle is the release: it has no effect on the buffer.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use motdrs::{MotdDevice, OpenMode, Whence};
///
/// let dev = Arc::new(MotdDevice::new());
///
/// let mut h = dev.open(OpenMode::ReadWrite);
/// h.write(b"hello")?;
/// assert_eq!(h.position(), 5);
///
/// h.seek(0, Whence::Set)?;
/// assert_eq!(&h.read_bytes(5)?[..], b"hello");
/// # Ok::<(), motdrs::MotdError>(())
/// ```
#[derive(Debug)]
pub struct Handle {
    dev: Arc<MotdDevice>,
    mode: OpenMode,
    pos: u64,
}

impl Handle {
    pub(super) fn new(dev: Arc<MotdDevice>, mode: OpenMode) -> Self {
        Self { dev, mode, pos: 0 }
    }

    /// The mode this handle was opened in.
    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// Current cursor position.
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// The device this handle is open on.
    pub fn device(&self) -> &Arc<MotdDevice> {
        &self.dev
    }

    /// Reads up to `max` bytes at the cursor into `sink`, advancing the
    /// cursor by the number of bytes delivered.
    ///
    /// `Ok(0)` means end of buffer. On [`MotdError::TransferFault`] the
    /// cursor does not move.
    pub fn read<S>(&mut self, max: usize, sink: &mut S) -> Result<usize, MotdError>
    where
        S: TransferSink + ?Sized,
    {
        let n = self.dev.read(self.pos, max, sink)?;
        self.pos += n as u64;
        Ok(n)
    }

    /// Reads up to `max` bytes at the cursor as owned [`Bytes`],
    /// advancing the cursor. An empty result means end of buffer.
    pub fn read_bytes(&mut self, max: usize) -> Result<Bytes, MotdError> {
        let data = self.dev.read_bytes(self.pos, max);
        self.pos += data.len() as u64;
        Ok(data)
    }

    /// Writes all of `source` at the cursor, advancing it by the bytes
    /// written.
    ///
    /// On any failure the cursor and the buffer are unchanged; see
    /// [`MotdDevice::write`] for the error contract.
    pub fn write<S>(&mut self, source: &S) -> Result<usize, MotdError>
    where
        S: TransferSource + ?Sized,
    {
        let n = self.dev.write(self.pos, source)?;
        self.pos += n as u64;
        Ok(n)
    }

    /// Moves the cursor and returns the new position.
    ///
    /// Positions past the current end are legal. On error the cursor is
    /// unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`MotdError::InvalidSeek`] if the resulting position would
    /// be negative, or if the current position does not fit the signed
    /// arithmetic.
    pub fn seek(&mut self, delta: i64, whence: Whence) -> Result<u64, MotdError> {
        let current = i64::try_from(self.pos).map_err(|_| MotdError::InvalidSeek {
            position: i64::MAX,
        })?;
        let new_pos = self.dev.seek(current, delta, whence)?;
        // seek() rejects negatives, so the cast is lossless.
        self.pos = new_pos as u64;
        Ok(self.pos)
    }

    /// Releases the handle.
    ///
    /// A no-op that mirrors the open/release pairing of the file
    /// interface; dropping the handle does the same thing.
    pub fn release(self) {}
}
