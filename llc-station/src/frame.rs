use std::fmt;

use llcpkt::ether::{EtherAddr, ETHDOT3_HEADER_LEN};
use llcpkt::llc::PduType;
use llcpkt::{Buf, PktBuf, PktBufMut};

/// The hardware type of a network device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkType {
    Ether,
    Loopback,
    /// Any other hardware type, by its ARP hardware number.
    Other(u16),
}

impl LinkType {
    /// The ARP hardware number of the link type.
    pub fn hw_type(&self) -> u16 {
        match self {
            LinkType::Ether => 1,
            LinkType::Loopback => 772,
            LinkType::Other(t) => *t,
        }
    }
}

/// The device a frame arrived on or leaves from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetDev {
    pub addr: EtherAddr,
    pub link: LinkType,
}

impl NetDev {
    pub fn ether(addr: EtherAddr) -> Self {
        Self {
            addr,
            link: LinkType::Ether,
        }
    }
}

/// An owned link-layer frame.
///
/// The frame keeps headroom in front of its data so that headers can be
/// prepended after the payload has been written, the same way a network
/// buffer reserves space for lower layers. The readable window is
/// `[cursor, end)` and is exposed through [`Buf`], [`PktBuf`] and
/// [`PktBufMut`].
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    dev: NetDev,
    buf: Vec<u8>,
    cursor: usize,
    end: usize,
}

impl Frame {
    /// Wrap received bytes. The frame has no headroom.
    pub fn from_bytes(dev: NetDev, bytes: &[u8]) -> Self {
        Self {
            dev,
            buf: bytes.to_vec(),
            cursor: 0,
            end: bytes.len(),
        }
    }

    /// A zeroed frame with `data_size` bytes of data behind `headroom` bytes
    /// of headroom.
    pub fn with_headroom(dev: NetDev, headroom: usize, data_size: usize) -> Self {
        Self {
            dev,
            buf: vec![0; headroom + data_size],
            cursor: headroom,
            end: headroom + data_size,
        }
    }

    /// A zeroed frame for an LLC PDU of the given format carrying `data_size`
    /// bytes, with room for the LLC header and the 802.3 header.
    pub fn alloc(dev: NetDev, kind: PduType, data_size: usize) -> Self {
        Self::with_headroom(dev, ETHDOT3_HEADER_LEN + kind.header_len(), data_size)
    }

    #[inline]
    pub fn dev(&self) -> &NetDev {
        &self.dev
    }

    /// The readable bytes of the frame.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.buf[self.cursor..self.end]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.cursor
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("dev", &self.dev)
            .field("headroom", &self.cursor)
            .field("len", &self.len())
            .finish()
    }
}

impl Buf for Frame {
    #[inline]
    fn remaining(&self) -> usize {
        self.end - self.cursor
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        &self.buf[self.cursor..self.end]
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.cursor += cnt;
    }
}

impl PktBuf for Frame {
    #[inline]
    fn move_back(&mut self, cnt: usize) {
        assert!(cnt <= self.cursor);
        self.cursor -= cnt;
    }

    #[inline]
    fn trim_off(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.end -= cnt;
    }
}

impl PktBufMut for Frame {
    #[inline]
    fn chunk_headroom(&self) -> usize {
        self.cursor
    }

    #[inline]
    fn chunk_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.cursor..self.end]
    }
}
