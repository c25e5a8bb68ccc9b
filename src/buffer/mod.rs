//! Internal growable byte store.
//!
//! This module owns the buffer contents and the growth algorithm, with no
//! locking of its own; the device layer wraps a [`Store`] in a
//! reader-writer lock. It is an implementation detail and not part of the
//! public API.

mod store;

pub(crate) use store::Store;
