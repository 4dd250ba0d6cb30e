//! LLC (Logical Link Control) Implementation
//!
//! This module provides support for parsing and constructing IEEE 802.2 LLC
//! PDUs together with the XID information field used by type 1 (connectionless)
//! stations.
//!
//! # LLC Header Structure
//!
//! - **DSAP**: destination service access point. Address 0 is the null SAP,
//!   reserved for the station itself.
//! - **SSAP**: source service access point. The lowest bit is the
//!   command/response bit: clear on commands, set on responses.
//! - **Control**: one byte for U (unnumbered) frames, two bytes for I and S
//!   frames. The two lowest bits select the frame format.
//!
//! # Example
//!
//! ```rust
//! use llcpkt::llc::*;
//! use llcpkt::Cursor;
//!
//! // A TEST command addressed to the null SAP.
//! let packet_data = [0x00, 0x06, 0xf3, 0x01, 0x02, 0x03];
//! let llc = LlcPacket::parse(Cursor::new(&packet_data[..])).unwrap();
//!
//! assert!(llc.is_cmd());
//! assert_eq!(llc.dsap(), LLC_SAP_NULL);
//! assert_eq!(llc.ssap_addr(), 0x06);
//! assert_eq!(llc.pdu_type(), PduType::U);
//! assert_eq!(llc.u_cmd(), UCmd::TEST);
//! assert!(llc.pf_bit());
//! ```

use crate::{Buf, PktBufMut};

mod generated;
pub use generated::{LlcHeader, LlcPacket, LLC_HEADER_LEN, LLC_HEADER_TEMPLATE};
pub use generated::{XidInfo, XID_INFO_LEN, XID_INFO_TEMPLATE};

/// The null SAP, addressing the station component of an LLC entity.
pub const LLC_SAP_NULL: u8 = 0x00;

/// The SAP used by spanning tree BPDUs.
pub const LLC_SAP_BPDU: u8 = 0x42;

/// The command/response bit of the SSAP byte, set on responses.
pub const LLC_PDU_RSP: u8 = 0x01;

/// The poll/final bit of a U format control byte.
pub const LLC_U_PF_BIT_MASK: u8 = 0x10;

/// Format identifier of an IEEE basic XID information field.
pub const LLC_XID_FMT_ID: u8 = 0x81;

/// The largest receive window an XID information field can carry.
pub const LLC_XID_MAX_RX_WINDOW: u8 = 0x7f;

/// Format of an LLC PDU, selected by the low bits of the control field.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PduType {
    /// Information transfer, sequenced.
    I,
    /// Supervisory, sequenced.
    S,
    /// Unnumbered.
    U,
}

impl PduType {
    /// Decode the format from the first control byte.
    #[inline]
    pub fn from_control(control: u8) -> Self {
        if control & 0x01 == 0 {
            PduType::I
        } else if control & 0x03 == 0x01 {
            PduType::S
        } else {
            PduType::U
        }
    }

    /// Length of the LLC header for this format, control field included.
    #[inline]
    pub fn header_len(&self) -> usize {
        match self {
            PduType::U => 3,
            PduType::I | PduType::S => 4,
        }
    }
}

enum_sim! {
    /// An enum-like type for the command code of a U format control byte,
    /// with the poll/final bit masked out.
    pub struct UCmd (u8) {
        /// Unnumbered information.
        UI = 0x03,
        /// Disconnected mode.
        DM = 0x0f,
        /// Disconnect.
        DISC = 0x43,
        /// Unnumbered acknowledgement.
        UA = 0x63,
        /// Set asynchronous balanced mode extended.
        SABME = 0x6f,
        /// Frame reject.
        FRMR = 0x87,
        /// Exchange identification.
        XID = 0xaf,
        /// Loopback test.
        TEST = 0xe3,
    }
}

impl UCmd {
    /// Build the U format control byte for this command.
    #[inline]
    pub fn control(&self, pf_bit: bool) -> u8 {
        if pf_bit {
            self.0 | LLC_U_PF_BIT_MASK
        } else {
            self.0
        }
    }
}

enum_sim! {
    /// An enum-like type for the LLC class advertised in an XID information field.
    pub struct XidClass (u8) {
        /// Type 1 operation only.
        CLASS_1 = 0x01,
        /// Type 1 and type 2 operation.
        CLASS_2 = 0x03,
        /// Type 1 and type 3 operation.
        CLASS_3 = 0x05,
        /// Type 1, 2 and 3 operation.
        CLASS_4 = 0x07,
    }
}

impl XidClass {
    /// The class number, 1 to 4, of a well-formed type byte.
    #[inline]
    pub fn class_number(&self) -> u8 {
        ((self.0 & 0x07) >> 1) + 1
    }
}

impl<T: Buf> LlcPacket<T> {
    /// Whether the command/response bit marks this PDU as a command.
    #[inline]
    pub fn is_cmd(&self) -> bool {
        self.ssap() & LLC_PDU_RSP == 0
    }

    /// Whether the command/response bit marks this PDU as a response.
    #[inline]
    pub fn is_rsp(&self) -> bool {
        !self.is_cmd()
    }

    /// The source SAP address without the command/response bit.
    #[inline]
    pub fn ssap_addr(&self) -> u8 {
        self.ssap() & !LLC_PDU_RSP
    }

    #[inline]
    pub fn pdu_type(&self) -> PduType {
        PduType::from_control(self.control())
    }

    /// The U format command code. Only meaningful for U format PDUs.
    #[inline]
    pub fn u_cmd(&self) -> UCmd {
        UCmd::from(self.control() & !LLC_U_PF_BIT_MASK)
    }

    /// The poll/final bit of a U format PDU.
    #[inline]
    pub fn pf_bit(&self) -> bool {
        self.control() & LLC_U_PF_BIT_MASK != 0
    }
}

/// Prepend a U format LLC header to `buf`.
///
/// `ssap` is the SAP address; the command/response bit is taken from `rsp`.
///
/// # Panics
/// Panics if `buf` has less than [`LLC_HEADER_LEN`] bytes of headroom.
#[inline]
pub fn prepend_u_header<T: PktBufMut>(
    buf: T,
    dsap: u8,
    ssap: u8,
    rsp: bool,
    cmd: UCmd,
    pf_bit: bool,
) -> LlcPacket<T> {
    let mut pdu = LlcPacket::prepend_header(buf, &LLC_HEADER_TEMPLATE);
    pdu.set_dsap(dsap);
    pdu.set_ssap(if rsp { ssap | LLC_PDU_RSP } else { ssap & !LLC_PDU_RSP });
    pdu.set_control(cmd.control(pf_bit));
    pdu
}

/// Build an XID information field in the IEEE basic format.
///
/// # Panics
/// Panics if `rx_window` exceeds [`LLC_XID_MAX_RX_WINDOW`].
#[inline]
pub fn xid_info(class: XidClass, rx_window: u8) -> XidInfo<[u8; 3]> {
    let mut info = XID_INFO_TEMPLATE;
    info.set_fmt_id(LLC_XID_FMT_ID);
    info.set_llc_class(class);
    info.set_rx_window(rx_window);
    info
}
