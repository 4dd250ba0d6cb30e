#![allow(missing_docs)]
#![allow(unused_parens)]

use crate::llc::XidClass;
use crate::{Buf, PktBuf, PktBufMut};
use crate::Cursor;

/// A constant that defines the fixed byte length of the basic Llc header.
pub const LLC_HEADER_LEN: usize = 3;
/// A fixed Llc header: null DSAP, null SSAP, UI command.
pub const LLC_HEADER_TEMPLATE: LlcHeader<[u8; 3]> = LlcHeader {
    buf: [0x00, 0x00, 0x03],
};

#[derive(Debug, Clone, Copy)]
pub struct LlcHeader<T> {
    buf: T,
}
impl<T: AsRef<[u8]>> LlcHeader<T> {
    #[inline]
    pub fn parse_unchecked(buf: T) -> Self {
        Self { buf }
    }
    #[inline]
    pub fn buf(&self) -> &T {
        &self.buf
    }
    #[inline]
    pub fn release(self) -> T {
        self.buf
    }
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        let remaining_len = buf.as_ref().len();
        if remaining_len < 3 {
            return Err(buf);
        }
        let container = Self { buf };
        Ok(container)
    }
    #[inline]
    pub fn header_slice(&self) -> &[u8] {
        &self.buf.as_ref()[0..3]
    }
    #[inline]
    pub fn dsap(&self) -> u8 {
        self.buf.as_ref()[0]
    }
    #[inline]
    pub fn ssap(&self) -> u8 {
        self.buf.as_ref()[1]
    }
    #[inline]
    pub fn control(&self) -> u8 {
        self.buf.as_ref()[2]
    }
}
impl<T: AsMut<[u8]>> LlcHeader<T> {
    #[inline]
    pub fn header_slice_mut(&mut self) -> &mut [u8] {
        &mut self.buf.as_mut()[0..3]
    }
    #[inline]
    pub fn set_dsap(&mut self, value: u8) {
        self.buf.as_mut()[0] = value;
    }
    #[inline]
    pub fn set_ssap(&mut self, value: u8) {
        self.buf.as_mut()[1] = value;
    }
    #[inline]
    pub fn set_control(&mut self, value: u8) {
        self.buf.as_mut()[2] = value;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LlcPacket<T> {
    buf: T,
}
impl<T: Buf> LlcPacket<T> {
    #[inline]
    pub fn parse_unchecked(buf: T) -> Self {
        Self { buf }
    }
    #[inline]
    pub fn buf(&self) -> &T {
        &self.buf
    }
    #[inline]
    pub fn release(self) -> T {
        self.buf
    }
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        let chunk_len = buf.chunk().len();
        if chunk_len < 3 {
            return Err(buf);
        }
        let container = Self { buf };
        Ok(container)
    }
    #[inline]
    pub fn header_slice(&self) -> &[u8] {
        &self.buf.chunk()[0..3]
    }
    #[inline]
    pub fn dsap(&self) -> u8 {
        self.buf.chunk()[0]
    }
    #[inline]
    pub fn ssap(&self) -> u8 {
        self.buf.chunk()[1]
    }
    #[inline]
    pub fn control(&self) -> u8 {
        self.buf.chunk()[2]
    }
}
impl<T: PktBuf> LlcPacket<T> {
    #[inline]
    pub fn payload(self) -> T {
        let mut buf = self.buf;
        buf.advance(3);
        buf
    }
}
impl<T: PktBufMut> LlcPacket<T> {
    #[inline]
    pub fn prepend_header<HT: AsRef<[u8]>>(mut buf: T, header: &LlcHeader<HT>) -> Self {
        buf.prepend_slice(header.header_slice());
        Self { buf }
    }
    #[inline]
    pub fn set_dsap(&mut self, value: u8) {
        self.buf.chunk_mut()[0] = value;
    }
    #[inline]
    pub fn set_ssap(&mut self, value: u8) {
        self.buf.chunk_mut()[1] = value;
    }
    #[inline]
    pub fn set_control(&mut self, value: u8) {
        self.buf.chunk_mut()[2] = value;
    }
}
impl<'a> LlcPacket<Cursor<'a>> {
    #[inline]
    pub fn parse_from_cursor(buf: Cursor<'a>) -> Result<Self, Cursor<'a>> {
        let remaining_len = buf.chunk().len();
        if remaining_len < 3 {
            return Err(buf);
        }
        let container = Self { buf };
        Ok(container)
    }
    #[inline]
    pub fn payload_as_cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf.chunk()[3..])
    }
}

/// A constant that defines the fixed byte length of the XID information field.
pub const XID_INFO_LEN: usize = 3;
/// A fixed XID information field: IEEE basic format, class 1, zero window.
pub const XID_INFO_TEMPLATE: XidInfo<[u8; 3]> = XidInfo {
    buf: [0x81, 0x01, 0x00],
};

#[derive(Debug, Clone, Copy)]
pub struct XidInfo<T> {
    buf: T,
}
impl<T: AsRef<[u8]>> XidInfo<T> {
    #[inline]
    pub fn parse_unchecked(buf: T) -> Self {
        Self { buf }
    }
    #[inline]
    pub fn buf(&self) -> &T {
        &self.buf
    }
    #[inline]
    pub fn release(self) -> T {
        self.buf
    }
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        let remaining_len = buf.as_ref().len();
        if remaining_len < 3 {
            return Err(buf);
        }
        let container = Self { buf };
        Ok(container)
    }
    #[inline]
    pub fn header_slice(&self) -> &[u8] {
        &self.buf.as_ref()[0..3]
    }
    #[inline]
    pub fn fmt_id(&self) -> u8 {
        self.buf.as_ref()[0]
    }
    #[inline]
    pub fn llc_class(&self) -> XidClass {
        XidClass::from(self.buf.as_ref()[1])
    }
    #[inline]
    pub fn rx_window(&self) -> u8 {
        self.buf.as_ref()[2] >> 1
    }
}
impl<T: AsMut<[u8]>> XidInfo<T> {
    #[inline]
    pub fn header_slice_mut(&mut self) -> &mut [u8] {
        &mut self.buf.as_mut()[0..3]
    }
    #[inline]
    pub fn set_fmt_id(&mut self, value: u8) {
        self.buf.as_mut()[0] = value;
    }
    #[inline]
    pub fn set_llc_class(&mut self, value: XidClass) {
        self.buf.as_mut()[1] = u8::from(value);
    }
    #[inline]
    pub fn set_rx_window(&mut self, value: u8) {
        assert!(value <= 0x7f);
        self.buf.as_mut()[2] = (value << 1);
    }
}
