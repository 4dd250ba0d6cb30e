use bytes::Buf;

use crate::{PktBuf, PktBufMut};

/// A read-only packet buffer over a borrowed byte slice.
///
/// The chunk is the window `[cursor, end)` of the slice. Bytes before the
/// cursor stay reachable through `move_back`.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    start: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor {
            buf,
            start: 0,
            end: buf.len(),
        }
    }

    /// The whole underlying slice up to the current end of the chunk.
    #[inline]
    pub fn buf(&self) -> &'a [u8] {
        &self.buf[..self.end]
    }

    /// The current chunk, carrying the lifetime of the underlying slice.
    #[inline]
    pub fn chunk_shared_lifetime(&self) -> &'a [u8] {
        &self.buf[self.start..self.end]
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.start
    }
}

impl<'a> Buf for Cursor<'a> {
    #[inline]
    fn remaining(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.start += cnt;
    }
}

impl<'a> PktBuf for Cursor<'a> {
    #[inline]
    fn move_back(&mut self, cnt: usize) {
        assert!(cnt <= self.start);
        self.start -= cnt;
    }

    #[inline]
    fn trim_off(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.end -= cnt;
    }
}

/// A writable packet buffer over a borrowed byte slice.
#[derive(Debug)]
pub struct CursorMut<'a> {
    buf: &'a mut [u8],
    start: usize,
    end: usize,
}

impl<'a> CursorMut<'a> {
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        let end = buf.len();
        CursorMut { buf, start: 0, end }
    }

    #[inline]
    pub fn buf(&self) -> &[u8] {
        &self.buf[..self.end]
    }

    #[inline]
    pub fn chunk_mut_shared_lifetime(self) -> &'a mut [u8] {
        &mut self.buf[self.start..self.end]
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.start
    }
}

impl<'a> Buf for CursorMut<'a> {
    #[inline]
    fn remaining(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.start += cnt;
    }
}

impl<'a> PktBuf for CursorMut<'a> {
    #[inline]
    fn move_back(&mut self, cnt: usize) {
        assert!(cnt <= self.start);
        self.start -= cnt;
    }

    #[inline]
    fn trim_off(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.end -= cnt;
    }
}

impl<'a> PktBufMut for CursorMut<'a> {
    #[inline]
    fn chunk_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.start..self.end]
    }

    #[inline]
    fn chunk_headroom(&self) -> usize {
        self.start
    }
}
