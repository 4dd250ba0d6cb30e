//! IEEE 802.3 framing.
//!
//! LLC PDUs ride in length-framed Ethernet frames: the two bytes that an
//! Ethernet II frame uses for its EtherType instead carry the byte length of
//! the LLC PDU. Values up to [`DOT3_MAX_PAYLOAD_LEN`] are lengths, values from
//! [`ETHERTYPE_MIN`] upwards are EtherTypes.
//!
//! ```text
//!  0                   6                   12      14
//! +-------------------+-------------------+-------+------------------+
//! |     dst addr      |     src addr      |  len  | LLC PDU (len B)  | padding
//! +-------------------+-------------------+-------+------------------+
//! ```

use core::fmt;

use byteorder::{ByteOrder, NetworkEndian};

use crate::{Buf, PktBufMut};

mod generated;
pub use generated::{EthDot3Header, EthDot3Packet, ETHDOT3_HEADER_LEN, ETHDOT3_HEADER_TEMPLATE};

/// The largest value of the length field that still denotes a length.
pub const DOT3_MAX_PAYLOAD_LEN: usize = 1500;

/// The smallest value of the type/length field that denotes an EtherType.
pub const ETHERTYPE_MIN: u16 = 0x0600;

/// A six-octet Ethernet address.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct EtherAddr(pub [u8; 6]);

impl EtherAddr {
    /// The broadcast address.
    pub const BROADCAST: EtherAddr = EtherAddr([0xff; 6]);

    /// Construct an Ethernet address from a sequence of octets, in big-endian.
    ///
    /// # Panics
    /// The function panics if `data` is not six octets long.
    pub fn from_bytes(data: &[u8]) -> EtherAddr {
        let mut bytes = [0; 6];
        bytes.copy_from_slice(data);
        EtherAddr(bytes)
    }

    /// Return an Ethernet address as a sequence of octets, in big-endian.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Query whether the address is an unicast address.
    pub fn is_unicast(&self) -> bool {
        !(self.is_broadcast() || self.is_multicast())
    }

    /// Query whether this address is the broadcast address.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Query whether the 'multicast' bit in the OUI is set.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Query whether the 'locally administered' bit in the OUI is set.
    pub const fn is_local(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Parse a string with the form 'Aa:0b:Cc:11:02:33' into `EtherAddr`.
    pub fn parse_from<T: AsRef<str>>(s: T) -> Option<Self> {
        let mut result = [0; 6];
        let mut parts = s.as_ref().split(':');
        for octet in result.iter_mut() {
            let part = parts.next()?;
            if part.len() != 2 || !part.bytes().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            *octet = u8::from_str_radix(part, 16).ok()?;
        }
        if parts.next().is_some() {
            return None;
        }
        Some(Self(result))
    }
}

impl fmt::Display for EtherAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
        )
    }
}

/// Check whether `buf` starts with an 802.3 header, i.e. whether its
/// type/length field holds a length.
///
/// Returns `false` if `buf` is too short to hold the header.
#[inline]
pub fn is_dot3_frame(buf: &[u8]) -> bool {
    if buf.len() < ETHDOT3_HEADER_LEN {
        return false;
    }
    usize::from(NetworkEndian::read_u16(&buf[12..14])) <= DOT3_MAX_PAYLOAD_LEN
}

/// Prepend an 802.3 header to `buf`, carrying the remaining bytes of `buf` as
/// its payload.
///
/// Returns `buf` untouched if the payload does not fit a length field or if
/// the headroom cannot hold the header.
pub fn prepend_dot3_header<T: PktBufMut>(
    buf: T,
    src: EtherAddr,
    dst: EtherAddr,
) -> Result<EthDot3Packet<T>, T> {
    if buf.remaining() > DOT3_MAX_PAYLOAD_LEN || buf.chunk_headroom() < ETHDOT3_HEADER_LEN {
        return Err(buf);
    }
    let mut pkt = EthDot3Packet::prepend_header(buf, &ETHDOT3_HEADER_TEMPLATE);
    pkt.set_src_addr(src);
    pkt.set_dst_addr(dst);
    Ok(pkt)
}
