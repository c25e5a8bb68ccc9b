//! The caller-boundary byte copy seam.
//!
//! The buffer lives on one side of a privilege boundary and its callers on
//! the other; moving bytes across that boundary can fail independently of
//! the buffer itself. These traits model that copy:
//!
//! - [`TransferSource`] - bytes flowing *into* the buffer (write path)
//! - [`TransferSink`] - bytes flowing *out of* the buffer (read path)
//!
//! In-process callers use the slice and `Vec<u8>` impls, which never
//! fault. An embedding that copies to or from another address space
//! implements these traits itself and reports failures as
//! [`MotdError::TransferFault`]; the device guarantees the shared buffer
//! is untouched whenever a transfer faults.

use crate::error::MotdError;

/// A source of bytes for a write, copied into the buffer's staging area.
pub trait TransferSource {
    /// Number of bytes this source will provide.
    fn len(&self) -> usize;

    /// Returns `true` if the source has no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies all bytes into `dst`, which is exactly `self.len()` long.
    ///
    /// # Errors
    ///
    /// Returns [`MotdError::TransferFault`] if the source cannot be read.
    /// Partially written `dst` contents are discarded by the caller.
    fn copy_to(&self, dst: &mut [u8]) -> Result<(), MotdError>;
}

/// A destination for bytes read out of the buffer.
pub trait TransferSink {
    /// Copies `src` out to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`MotdError::TransferFault`] if the destination cannot be
    /// written. The read is then reported as having delivered nothing.
    fn copy_from(&mut self, src: &[u8]) -> Result<(), MotdError>;
}

impl TransferSource for [u8] {
    fn len(&self) -> usize {
        self.len()
    }

    fn copy_to(&self, dst: &mut [u8]) -> Result<(), MotdError> {
        dst.copy_from_slice(self);
        Ok(())
    }
}

impl TransferSource for &[u8] {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn copy_to(&self, dst: &mut [u8]) -> Result<(), MotdError> {
        dst.copy_from_slice(self);
        Ok(())
    }
}

impl<const N: usize> TransferSource for [u8; N] {
    fn len(&self) -> usize {
        N
    }

    fn copy_to(&self, dst: &mut [u8]) -> Result<(), MotdError> {
        dst.copy_from_slice(self);
        Ok(())
    }
}

impl TransferSource for Vec<u8> {
    fn len(&self) -> usize {
        self.len()
    }

    fn copy_to(&self, dst: &mut [u8]) -> Result<(), MotdError> {
        dst.copy_from_slice(self);
        Ok(())
    }
}

impl TransferSink for Vec<u8> {
    fn copy_from(&mut self, src: &[u8]) -> Result<(), MotdError> {
        self.extend_from_slice(src);
        Ok(())
    }
}
