use llcpkt::ether::{prepend_dot3_header, EtherAddr, DOT3_MAX_PAYLOAD_LEN, ETHDOT3_HEADER_LEN};
use llcpkt::llc::{prepend_u_header, xid_info, PduType, UCmd, LLC_SAP_NULL, XID_INFO_LEN};
use llcpkt::{Buf, PktBufMut};
use tracing::debug;

use crate::error::*;
use crate::event::RxPdu;
use crate::{Frame, FrameHost, LinkType, Station};

/// A response action run by a station transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationAction {
    /// Answer an XID command with the station's XID information.
    SendXidRsp,
    /// Answer a TEST command by echoing its data.
    SendTestRsp,
}

impl StationAction {
    /// Run the action for the inbound PDU `rx`.
    ///
    /// On success exactly one frame has been transmitted. On failure no frame
    /// has been transmitted and any frame allocated on the way has been
    /// released.
    pub fn exec<H: FrameHost>(&self, station: &Station<H>, rx: &RxPdu<'_>) -> Result<()> {
        match self {
            StationAction::SendXidRsp => send_xid_rsp(station, rx),
            StationAction::SendTestRsp => send_test_rsp(station, rx),
        }
    }
}

fn send_xid_rsp<H: FrameHost>(station: &Station<H>, rx: &RxPdu<'_>) -> Result<()> {
    let conf = station.conf();
    let mut nskb = station.alloc_frame(rx, PduType::U, XID_INFO_LEN)?;
    nskb.chunk_mut()
        .copy_from_slice(xid_info(conf.xid_class, conf.rx_window).header_slice());
    prepend_u_header(
        &mut nskb,
        rx.llc().ssap_addr(),
        LLC_SAP_NULL,
        true,
        UCmd::XID,
        true,
    );
    station.xmit(nskb, rx.src_addr())?;
    debug!(dst = %rx.src_addr(), dsap = rx.llc().ssap_addr(), "sent XID response");
    station.stats().inc_xid_rsp();
    Ok(())
}

fn send_test_rsp<H: FrameHost>(station: &Station<H>, rx: &RxPdu<'_>) -> Result<()> {
    let data = rx.data();
    let mut nskb = station.alloc_frame(rx, PduType::U, data.len())?;
    nskb.chunk_mut().copy_from_slice(data);
    prepend_u_header(
        &mut nskb,
        rx.llc().ssap_addr(),
        LLC_SAP_NULL,
        true,
        UCmd::TEST,
        true,
    );
    station.xmit(nskb, rx.src_addr())?;
    debug!(dst = %rx.src_addr(), len = data.len(), "sent TEST response");
    station.stats().inc_test_rsp();
    Ok(())
}

/// Prepend the 802.3 header to a frame whose data starts at its LLC header.
///
/// The length field is set to the number of bytes behind the header. Fails
/// without touching the frame if the device link type carries no 802.3
/// header or if the frame lacks headroom.
pub fn mac_hdr_init(frame: &mut Frame, sa: EtherAddr, da: EtherAddr) -> Result<()> {
    match frame.dev().link {
        LinkType::Ether | LinkType::Loopback => {}
        other => return Err(StationError::UnsupportedLink(other.hw_type())),
    }
    if frame.chunk_headroom() < ETHDOT3_HEADER_LEN {
        return Err(StationError::NoHeadroom {
            needed: ETHDOT3_HEADER_LEN,
            available: frame.chunk_headroom(),
        });
    }
    let len = frame.remaining();
    if len > DOT3_MAX_PAYLOAD_LEN {
        return Err(StationError::PduTooLong { len });
    }

    match prepend_dot3_header(frame, sa, da) {
        Ok(_) => Ok(()),
        Err(_) => Err(StationError::PduTooLong { len }),
    }
}
