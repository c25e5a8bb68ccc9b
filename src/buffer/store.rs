//! The growable byte store behind the device lock.

use tracing::debug;

use crate::error::MotdError;

/// A contiguous, dynamically growable byte buffer.
///
/// `Store` keeps `data` and its logical length as one composite value, so
/// a single lock around the whole struct is enough to rule out torn
/// reads. It starts empty with no allocation and only ever grows when a
/// write extends past the current end.
///
/// Growth is failure-atomic: if the allocation for a larger buffer fails,
/// the old contents and length are left exactly as they were.
#[derive(Debug, Default)]
pub(crate) struct Store {
    data: Vec<u8>,
}

impl Store {
    /// Creates an empty store with no backing allocation.
    pub(crate) fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Current logical length in bytes.
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the readable range starting at `offset`, at most `max`
    /// bytes long.
    ///
    /// An `offset` at or past the end yields an empty slice: that is the
    /// end-of-buffer signal, not an error.
    pub(crate) fn slice_from(&self, offset: u64, max: usize) -> &[u8] {
        let len = self.data.len();
        let Ok(offset) = usize::try_from(offset) else {
            return &[];
        };
        if offset >= len {
            return &[];
        }
        let count = max.min(len - offset);
        &self.data[offset..offset + count]
    }

    /// Writes `staged` at `offset`, growing the buffer if the write
    /// extends past the current end.
    ///
    /// The bytes must already be staged in our address space; transfer
    /// faults are the caller's concern and must be detected before this
    /// point.
    ///
    /// # Errors
    ///
    /// - [`MotdError::WriteGap`] if `offset` is past the current end. A
    ///   gap of uninitialized bytes is never exposed.
    /// - [`MotdError::OutOfMemory`] if growth allocation fails; contents
    ///   and length are unchanged.
    pub(crate) fn write_at(&mut self, offset: u64, staged: &[u8]) -> Result<usize, MotdError> {
        let len = self.data.len();
        let offset = match usize::try_from(offset) {
            Ok(o) if o <= len => o,
            _ => return Err(MotdError::WriteGap { offset, len }),
        };

        let end = offset + staged.len();
        if end > len {
            let expand_by = end - len;
            self.data
                .try_reserve_exact(expand_by)
                .map_err(|_| MotdError::OutOfMemory {
                    requested: expand_by,
                })?;
            debug!(old_len = len, new_len = end, "buffer grown");
            // Cannot fail: capacity was reserved above. The zero fill is
            // immediately overwritten by the copy below (offset <= len).
            self.data.resize(end, 0);
        }

        self.data[offset..end].copy_from_slice(staged);
        Ok(staged.len())
    }

    /// Discards all contents and the backing allocation.
    pub(crate) fn truncate(&mut self) {
        debug!(dropped = self.data.len(), "buffer truncated");
        self.data = Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty_without_allocation() {
        let store = Store::new();
        assert_eq!(store.len(), 0);
        assert_eq!(store.data.capacity(), 0);
    }

    #[test]
    fn test_append_grows_length() {
        let mut store = Store::new();
        assert_eq!(store.write_at(0, b"hello").unwrap(), 5);
        assert_eq!(store.len(), 5);

        assert_eq!(store.write_at(5, b" world").unwrap(), 6);
        assert_eq!(store.len(), 11);
        assert_eq!(store.slice_from(0, 64), b"hello world");
    }

    #[test]
    fn test_overwrite_inside_keeps_length() {
        let mut store = Store::new();
        store.write_at(0, b"hello world").unwrap();

        assert_eq!(store.write_at(6, b"motd!").unwrap(), 5);
        assert_eq!(store.len(), 11, "pure overwrite must not change length");
        assert_eq!(store.slice_from(0, 64), b"hello motd!");
    }

    #[test]
    fn test_straddling_write_grows_by_the_overhang() {
        let mut store = Store::new();
        store.write_at(0, b"hello").unwrap();

        // 3 bytes inside, 3 bytes past the end
        assert_eq!(store.write_at(2, b"LLOWAY").unwrap(), 6);
        assert_eq!(store.len(), 8);
        assert_eq!(store.slice_from(0, 64), b"heLLOWAY");
    }

    #[test]
    fn test_write_past_end_is_rejected() {
        let mut store = Store::new();
        store.write_at(0, b"abc").unwrap();

        let err = store.write_at(4, b"gap").unwrap_err();
        assert!(matches!(err, MotdError::WriteGap { offset: 4, len: 3 }));
        assert_eq!(store.len(), 3, "rejected write must not mutate");
        assert_eq!(store.slice_from(0, 64), b"abc");
    }

    #[test]
    fn test_write_at_exact_end_is_append_not_gap() {
        let mut store = Store::new();
        store.write_at(0, b"abc").unwrap();
        assert_eq!(store.write_at(3, b"def").unwrap(), 3);
        assert_eq!(store.slice_from(0, 64), b"abcdef");
    }

    #[test]
    fn test_slice_from_bounds() {
        let mut store = Store::new();
        store.write_at(0, b"0123456789").unwrap();

        assert_eq!(store.slice_from(10, 5), b"", "offset == len is EOF");
        assert_eq!(store.slice_from(11, 5), b"", "offset > len is EOF");
        assert_eq!(store.slice_from(7, 64), b"789", "reads are bounded by len");
        assert_eq!(store.slice_from(2, 3), b"234");
        assert_eq!(store.slice_from(u64::MAX, 5), b"", "huge offset is EOF");
    }

    #[test]
    fn test_truncate_resets_everything() {
        let mut store = Store::new();
        store.write_at(0, b"old banner").unwrap();

        store.truncate();
        assert_eq!(store.len(), 0);
        assert_eq!(store.slice_from(0, 64), b"");

        // Usable again after truncation
        store.write_at(0, b"new").unwrap();
        assert_eq!(store.slice_from(0, 64), b"new");
    }

    #[test]
    fn test_empty_write_is_a_noop() {
        let mut store = Store::new();
        assert_eq!(store.write_at(0, b"").unwrap(), 0);
        assert_eq!(store.len(), 0);
    }
}
