mod common;
use common::*;

use llcpkt::ether::*;
use llcpkt::llc::*;
use llcpkt::{Buf, Cursor, CursorMut, PktBufMut};

use smoltcp::wire::{EthernetAddress, EthernetFrame, EthernetProtocol};

#[test]
fn xid_cmd_parsing_test() {
    let packet = file_to_packet("xid_cmd.dat");
    assert_eq!(packet.len(), 60);
    assert_eq!(is_dot3_frame(&packet[..]), true);

    let dot3_pkt = EthDot3Packet::parse(Cursor::new(&packet[..])).unwrap();
    assert_eq!(dot3_pkt.src_addr(), EtherAddr([0x00, 0x0c, 0x29, 0xaa, 0xbb, 0xcc]));
    assert_eq!(dot3_pkt.payload_len(), 6);

    let llc_pkt = LlcPacket::parse(dot3_pkt.payload()).unwrap();
    assert_eq!(llc_pkt.buf().chunk().len(), 6);
    assert_eq!(llc_pkt.dsap(), LLC_SAP_NULL);
    assert_eq!(llc_pkt.ssap(), 0x04);
    assert!(llc_pkt.is_cmd());
    assert_eq!(llc_pkt.pdu_type(), PduType::U);
    assert_eq!(llc_pkt.u_cmd(), UCmd::XID);
    assert_eq!(llc_pkt.pf_bit(), false);

    let payload = llc_pkt.payload();
    let info = XidInfo::parse(payload.chunk()).unwrap();
    assert_eq!(info.fmt_id(), LLC_XID_FMT_ID);
    assert_eq!(info.llc_class(), XidClass::CLASS_1);
    assert_eq!(info.rx_window(), 0);
}

#[test]
fn test_cmd_parsing_test() {
    let packet = file_to_packet("test_cmd.dat");

    let dot3_pkt = EthDot3Packet::parse_from_cursor(Cursor::new(&packet[..])).unwrap();
    let llc_pkt = LlcPacket::parse_from_cursor(dot3_pkt.payload_as_cursor()).unwrap();
    assert_eq!(llc_pkt.ssap_addr(), 0x06);
    assert_eq!(llc_pkt.u_cmd(), UCmd::TEST);
    assert_eq!(llc_pkt.pf_bit(), true);
    assert_eq!(llc_pkt.payload_as_cursor().chunk(), &[0x01, 0x02, 0x03]);
}

#[test]
fn bpdu_parsing_test() {
    let packet = file_to_packet("bpdu_ui.dat");

    let dot3_pkt = EthDot3Packet::parse(Cursor::new(&packet[..])).unwrap();
    assert!(dot3_pkt.dst_addr().is_multicast());
    assert_eq!(dot3_pkt.payload_len(), 38);

    let llc_pkt = LlcPacket::parse(dot3_pkt.payload()).unwrap();
    assert_eq!(llc_pkt.dsap(), LLC_SAP_BPDU);
    assert_eq!(llc_pkt.ssap(), LLC_SAP_BPDU);
    assert_eq!(llc_pkt.u_cmd(), UCmd::UI);
}

#[test]
fn xid_rsp_creation_test() {
    let mut buf: [u8; 64] = [0; 64];
    let total = ETHDOT3_HEADER_LEN + LLC_HEADER_LEN + XID_INFO_LEN;

    let mut pkt_buf = CursorMut::new(&mut buf[..total]);
    pkt_buf.advance(ETHDOT3_HEADER_LEN + LLC_HEADER_LEN);
    pkt_buf
        .chunk_mut()
        .copy_from_slice(xid_info(XidClass::CLASS_2, 127).header_slice());

    let llc_pkt = prepend_u_header(pkt_buf, 0x04, LLC_SAP_NULL, true, UCmd::XID, true);
    let mut dot3_pkt = EthDot3Packet::prepend_header(llc_pkt.release(), &ETHDOT3_HEADER_TEMPLATE);
    dot3_pkt.set_dst_addr(EtherAddr([0x00, 0x0c, 0x29, 0xaa, 0xbb, 0xcc]));
    dot3_pkt.set_src_addr(EtherAddr([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]));

    assert_eq!(
        dot3_pkt.release().chunk(),
        &[
            0x00, 0x0c, 0x29, 0xaa, 0xbb, 0xcc, 0x02, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x06,
            0x04, 0x01, 0xbf, 0x81, 0x03, 0xfe
        ]
    );

    // smoltcp sees the length field as an unknown ethertype
    let frame = EthernetFrame::new_checked(&buf[..total]).unwrap();
    assert_eq!(
        frame.dst_addr(),
        EthernetAddress([0x00, 0x0c, 0x29, 0xaa, 0xbb, 0xcc])
    );
    assert_eq!(
        frame.src_addr(),
        EthernetAddress([0x02, 0x00, 0x00, 0x00, 0x00, 0x01])
    );
    assert_eq!(frame.ethertype(), EthernetProtocol::Unknown(6));
    assert_eq!(frame.payload(), &[0x04, 0x01, 0xbf, 0x81, 0x03, 0xfe]);
}
