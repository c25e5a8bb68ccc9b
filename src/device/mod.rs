//! The buffer device: one growable banner behind a reader-writer lock.
//!
//! This module implements the file-like operation contract over the
//! internal store:
//!
//! - [`MotdDevice`] - the shared buffer service (open / read / write /
//!   seek / truncate)
//! - [`Handle`] - a per-open cursor over a device
//! - [`OpenMode`] and [`Whence`] - the open and seek modes
//!
//! All operations are synchronous. The device performs no scheduling of
//! its own; readers proceed in parallel under the shared lock, writers
//! and truncation are fully serialized under the exclusive lock.

mod handle;

use std::sync::Arc;

use bytes::Bytes;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::buffer::Store;
use crate::error::MotdError;
use crate::transfer::{TransferSink, TransferSource};

pub use handle::Handle;

/// Access mode requested when opening the device.
///
/// The mode's only effect at this layer is the truncate-on-open policy:
/// a [`OpenMode::WriteOnly`] open empties the buffer before any write is
/// applied ("fresh banner on overwrite"), while read-only and read-write
/// opens leave it untouched. Enforcement of read/write permission per
/// handle is the embedding file layer's concern, not the device's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenMode {
    /// Read access; buffer contents are preserved.
    ReadOnly,
    /// Write access; buffer is truncated on open.
    WriteOnly,
    /// Read and write access; buffer contents are preserved.
    ReadWrite,
}

/// Reference point for a seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Whence {
    /// Absolute: the new position is the given delta.
    Set,
    /// Relative: the new position is the current position plus delta.
    Cur,
    /// The new position is the current buffer length; delta is ignored.
    End,
}

/// An in-memory message-of-the-day buffer with file-like semantics.
///
/// One `MotdDevice` holds one growable byte buffer. The buffer and its
/// length are guarded together by a single reader-writer lock, so no
/// caller ever observes them in a mutually inconsistent state. Share the
/// device across handles (and threads) with [`Arc`]; every handle opened
/// from the same device sees the same bytes.
///
/// Per-handle cursors live in [`Handle`], not here. The device itself
/// works on explicit offsets and never mutates caller state.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use motdrs::{MotdDevice, OpenMode};
///
/// let dev = Arc::new(MotdDevice::new());
///
/// let mut w = dev.open(OpenMode::ReadWrite);
/// w.write(b"welcome to motdrs")?;
///
/// assert_eq!(dev.len(), 17);
/// # Ok::<(), motdrs::MotdError>(())
/// ```
#[derive(Debug, Default)]
pub struct MotdDevice {
    store: RwLock<Store>,
}

impl MotdDevice {
    /// Creates a device with an empty buffer and no backing allocation.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::new()),
        }
    }

    /// Opens a handle on this device.
    ///
    /// Opening in [`OpenMode::WriteOnly`] truncates the buffer before the
    /// handle is returned; other modes have no side effect. Opening never
    /// fails.
    ///
    /// The returned handle starts with its cursor at offset 0 and holds a
    /// clone of the `Arc`, so it may outlive the binding it was opened
    /// from.
    pub fn open(self: &Arc<Self>, mode: OpenMode) -> Handle {
        debug!(?mode, "open");
        if mode == OpenMode::WriteOnly {
            self.truncate();
        }
        Handle::new(Arc::clone(self), mode)
    }

    /// Empties the buffer and releases its backing storage.
    ///
    /// Atomic with respect to concurrent reads and writes: the exclusive
    /// lock is held for the whole reset, so no reader can observe a
    /// half-freed buffer.
    pub fn truncate(&self) {
        self.store.write().truncate();
    }

    /// Current buffer length in bytes.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// Returns `true` if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads up to `max` bytes starting at `offset` into `sink`.
    ///
    /// Holds the shared lock for the duration of the call; concurrent
    /// reads proceed in parallel. Returns the number of bytes delivered:
    ///
    /// - `offset >= len` yields `Ok(0)` - end of buffer, not an error
    /// - otherwise exactly `min(max, len - offset)` bytes are copied
    ///
    /// # Errors
    ///
    /// Returns [`MotdError::TransferFault`] if the sink rejects the copy.
    /// Nothing is then considered delivered; the caller's cursor must not
    /// advance.
    pub fn read<S>(&self, offset: u64, max: usize, sink: &mut S) -> Result<usize, MotdError>
    where
        S: TransferSink + ?Sized,
    {
        let store = self.store.read();
        let range = store.slice_from(offset, max);
        if range.is_empty() {
            return Ok(0);
        }
        sink.copy_from(range)?;
        trace!(offset, count = range.len(), "read");
        Ok(range.len())
    }

    /// Reads up to `max` bytes starting at `offset` as owned [`Bytes`].
    ///
    /// Convenience over [`read`](Self::read) for in-process callers,
    /// where the copy out cannot fault. An empty result means end of
    /// buffer.
    pub fn read_bytes(&self, offset: u64, max: usize) -> Bytes {
        let store = self.store.read();
        Bytes::copy_from_slice(store.slice_from(offset, max))
    }

    /// Writes all of `source` at `offset`, growing the buffer as needed.
    ///
    /// Holds the exclusive lock for the entire call; writes are fully
    /// serialized against each other, reads, and truncation. The source
    /// bytes are staged into a private allocation first, so a transfer
    /// fault is detected before the shared buffer is touched. Once
    /// staging succeeds the whole write is applied: there are no partial
    /// writes.
    ///
    /// On success returns `source.len()` and leaves the buffer length at
    /// `max(old_len, offset + source.len())`.
    ///
    /// # Errors
    ///
    /// - [`MotdError::TransferFault`] - the source could not be read
    /// - [`MotdError::OutOfMemory`] - staging or growth failed to
    ///   allocate
    /// - [`MotdError::WriteGap`] - `offset` lies past the current end
    ///
    /// Every failure leaves the buffer contents and length exactly as
    /// they were before the call.
    pub fn write<S>(&self, offset: u64, source: &S) -> Result<usize, MotdError>
    where
        S: TransferSource + ?Sized,
    {
        let mut store = self.store.write();

        let count = source.len();
        let mut staged = Vec::new();
        staged
            .try_reserve_exact(count)
            .map_err(|_| MotdError::OutOfMemory { requested: count })?;
        staged.resize(count, 0);
        source.copy_to(&mut staged)?;

        let written = store.write_at(offset, &staged)?;
        trace!(offset, count = written, len = store.len(), "write");
        Ok(written)
    }

    /// Resolves a seek against the caller's current position.
    ///
    /// The device is not mutated; on success the caller adopts the
    /// returned position as its cursor. [`Whence::End`] reads the current
    /// length under the shared lock and ignores `delta`. Positions past
    /// the current end are legal: a later read there returns 0 bytes and
    /// a later write there is rejected as a [`MotdError::WriteGap`].
    ///
    /// # Errors
    ///
    /// Returns [`MotdError::InvalidSeek`] if the resulting position would
    /// be negative or does not fit a signed position.
    pub fn seek(&self, current: i64, delta: i64, whence: Whence) -> Result<i64, MotdError> {
        let new_pos = match whence {
            Whence::Set => delta,
            Whence::Cur => current.checked_add(delta).ok_or(MotdError::InvalidSeek {
                position: current.saturating_add(delta),
            })?,
            Whence::End => {
                let len = self.store.read().len();
                i64::try_from(len).map_err(|_| MotdError::InvalidSeek { position: i64::MAX })?
            }
        };

        if new_pos < 0 {
            return Err(MotdError::InvalidSeek { position: new_pos });
        }
        Ok(new_pos)
    }
}
