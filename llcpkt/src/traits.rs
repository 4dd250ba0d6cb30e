pub use bytes::Buf;

/// A `Buf` whose cursor can also move backwards and whose tail can be cut.
///
/// Moving back exposes bytes that were previously advanced over, which is how
/// lower-layer headers get prepended in front of an already written payload.
pub trait PktBuf: Buf {
    /// Move the cursor back by `cnt` bytes.
    fn move_back(&mut self, cnt: usize);

    /// Remove `cnt` trailing bytes.
    fn trim_off(&mut self, cnt: usize);
}

/// A `PktBuf` with a writable chunk.
pub trait PktBufMut: PktBuf {
    /// Number of bytes in front of the current chunk that `move_back` can reclaim.
    fn chunk_headroom(&self) -> usize;

    /// A mutable chunk slice.
    fn chunk_mut(&mut self) -> &mut [u8];

    /// Grow the chunk over `bytes.len()` bytes of headroom and write `bytes`
    /// there.
    ///
    /// # Panics
    /// Panics if the headroom is shorter than `bytes`.
    #[inline]
    fn prepend_slice(&mut self, bytes: &[u8]) {
        assert!(self.chunk_headroom() >= bytes.len());
        self.move_back(bytes.len());
        self.chunk_mut()[..bytes.len()].copy_from_slice(bytes);
    }
}

impl<T: PktBuf + ?Sized> PktBuf for &mut T {
    #[inline]
    fn move_back(&mut self, cnt: usize) {
        (**self).move_back(cnt)
    }

    #[inline]
    fn trim_off(&mut self, cnt: usize) {
        (**self).trim_off(cnt);
    }
}

impl<T: PktBufMut + ?Sized> PktBufMut for &mut T {
    #[inline]
    fn chunk_mut(&mut self) -> &mut [u8] {
        (**self).chunk_mut()
    }

    #[inline]
    fn chunk_headroom(&self) -> usize {
        (**self).chunk_headroom()
    }
}
