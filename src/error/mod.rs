//! Error types for motdrs.

use std::fmt;

/// Errors that can occur during buffer operations.
#[derive(Debug)]
pub enum MotdError {
    /// A byte copy across the caller boundary failed.
    ///
    /// The shared buffer is never modified when this is returned; the
    /// caller's cursor must not advance.
    TransferFault,

    /// Growing the buffer (or staging incoming bytes) failed to allocate.
    ///
    /// Prior contents are left intact; the operation may be retried.
    OutOfMemory {
        /// Number of additional bytes the allocation asked for.
        requested: usize,
    },

    /// A write began past the current end of the buffer.
    ///
    /// Accepting it would leave an undefined gap between the old end and
    /// the write offset, so it is rejected rather than zero-filled.
    WriteGap {
        /// Offset the write asked for.
        offset: u64,
        /// Buffer length at the time of the write.
        len: usize,
    },

    /// A seek produced a negative position.
    InvalidSeek {
        /// The out-of-range position that was computed.
        position: i64,
    },
}

impl fmt::Display for MotdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotdError::TransferFault => write!(f, "byte transfer across caller boundary failed"),
            MotdError::OutOfMemory { requested } => {
                write!(f, "out of memory: could not allocate {} bytes", requested)
            }
            MotdError::WriteGap { offset, len } => {
                write!(
                    f,
                    "write at offset {} would leave a gap past end of buffer (len {})",
                    offset, len
                )
            }
            MotdError::InvalidSeek { position } => {
                write!(f, "seek produced invalid position {}", position)
            }
        }
    }
}

impl std::error::Error for MotdError {}
