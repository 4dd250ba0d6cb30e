use llcpkt::ether::{EtherAddr, EthDot3Packet};
use llcpkt::llc::{LlcPacket, PduType, UCmd, LLC_SAP_NULL};
use llcpkt::{Buf, Cursor};

use crate::{Frame, NetDev};

/// A station-level event recognized in an inbound frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationEvent {
    /// XID command addressed to the null SAP.
    RxNullDsapXidCmd,
    /// TEST command addressed to the null SAP.
    RxNullDsapTestCmd,
}

impl StationEvent {
    /// Every event, in evaluation order.
    pub const ALL: [StationEvent; 2] = [
        StationEvent::RxNullDsapXidCmd,
        StationEvent::RxNullDsapTestCmd,
    ];

    #[inline]
    fn u_cmd(&self) -> UCmd {
        match self {
            StationEvent::RxNullDsapXidCmd => UCmd::XID,
            StationEvent::RxNullDsapTestCmd => UCmd::TEST,
        }
    }

    /// Whether `pdu` is a U format command carrying this event's command code
    /// to the null SAP.
    #[inline]
    pub fn matches<T: Buf>(&self, pdu: &LlcPacket<T>) -> bool {
        pdu.is_cmd()
            && pdu.pdu_type() == PduType::U
            && pdu.u_cmd() == self.u_cmd()
            && pdu.dsap() == LLC_SAP_NULL
    }

    /// The first event matching `pdu`, if any.
    pub fn classify<T: Buf>(pdu: &LlcPacket<T>) -> Option<Self> {
        Self::ALL.into_iter().find(|ev| ev.matches(pdu))
    }
}

/// A borrowed view of a received 802.3 frame carrying an LLC PDU.
///
/// The LLC view covers exactly the number of bytes announced by the 802.3
/// length field, without trailing padding.
#[derive(Debug, Clone, Copy)]
pub struct RxPdu<'a> {
    dev: NetDev,
    src: EtherAddr,
    dst: EtherAddr,
    llc: LlcPacket<Cursor<'a>>,
}

impl<'a> RxPdu<'a> {
    /// Parse the 802.3 and LLC headers at the start of `frame`.
    pub fn parse(frame: &'a Frame) -> Option<Self> {
        let dot3 = EthDot3Packet::parse(Cursor::new(frame.data())).ok()?;
        let src = dot3.src_addr();
        let dst = dot3.dst_addr();
        let llc = LlcPacket::parse(dot3.payload()).ok()?;
        Some(Self {
            dev: *frame.dev(),
            src,
            dst,
            llc,
        })
    }

    #[inline]
    pub fn dev(&self) -> &NetDev {
        &self.dev
    }

    #[inline]
    pub fn src_addr(&self) -> EtherAddr {
        self.src
    }

    #[inline]
    pub fn dst_addr(&self) -> EtherAddr {
        self.dst
    }

    #[inline]
    pub fn llc(&self) -> &LlcPacket<Cursor<'a>> {
        &self.llc
    }

    /// The bytes following the basic LLC header.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        let pdu = self.llc.buf().chunk_shared_lifetime();
        let hdr_len = self.llc.pdu_type().header_len().min(pdu.len());
        &pdu[hdr_len..]
    }
}
