//! motdrs
//!
//! An in-memory "message of the day" buffer with a file-like interface.
//!
//! `motdrs` models a Unix character device that serves and accepts a short
//! textual banner: a single dynamically growable byte buffer behind the
//! classic open / read / write / seek / release contract. It is designed as
//! a small, composable primitive for:
//!
//! - banner / greeting services
//! - virtual file nodes backed by memory
//! - teaching and testing file-interface layers
//!
//! The crate intentionally:
//! - does NOT persist contents across restarts
//! - does NOT register anything with the operating system
//! - does NOT impose an encoding or size limit on the buffer
//! - does NOT schedule background work
//!
//! It only does one thing: **serve one growable byte buffer, safely, to
//! many concurrent handles.**
//!
//! # Semantics
//!
//! - Opening in write-only mode truncates the buffer ("fresh banner on
//!   overwrite"); read-only and read-write opens leave it untouched.
//! - Reads are bounded by the current length; reading at or past the end
//!   returns zero bytes, which is end-of-buffer, not an error.
//! - Writes grow the buffer on demand. A write starting past the current
//!   end would leave an undefined gap and is rejected.
//! - Every failure is atomic: the buffer is never left half-mutated.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use motdrs::{MotdDevice, OpenMode};
//!
//! fn main() -> Result<(), motdrs::MotdError> {
//!     let dev = Arc::new(MotdDevice::new());
//!
//!     let mut writer = dev.open(OpenMode::WriteOnly);
//!     writer.write(b"hello world")?;
//!
//!     let mut reader = dev.open(OpenMode::ReadOnly);
//!     let banner = reader.read_bytes(64)?;
//!     assert_eq!(&banner[..], b"hello world");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod device;
mod error;
mod transfer;

mod buffer; // internal (growable store, no locking)

//
// Public surface (intentionally tiny)
//

pub use device::{Handle, MotdDevice, OpenMode, Whence};
pub use error::MotdError;
pub use transfer::{TransferSink, TransferSource};
