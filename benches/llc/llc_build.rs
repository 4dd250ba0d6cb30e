use criterion::{black_box, criterion_group, criterion_main, Criterion};
use llcpkt::ether::*;
use llcpkt::llc::*;
use llcpkt::{Buf, Cursor, CursorMut, PktBufMut};

fn xid_rsp_build(buf: &mut [u8]) {
    let mut pkt = CursorMut::new(&mut buf[0..20]);
    pkt.advance(ETHDOT3_HEADER_LEN + LLC_HEADER_LEN);
    pkt.chunk_mut()
        .copy_from_slice(xid_info(XidClass::CLASS_2, 127).header_slice());

    let llcpkt = prepend_u_header(pkt, 0x04, LLC_SAP_NULL, true, UCmd::XID, true);

    let mut ethpkt = EthDot3Packet::prepend_header(llcpkt.release(), &ETHDOT3_HEADER_TEMPLATE);
    ethpkt.set_dst_addr(EtherAddr([0x00, 0x0c, 0x29, 0xaa, 0xbb, 0xcc]));
    ethpkt.set_src_addr(EtherAddr([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]));
}

fn xid_cmd_parse(buf: &[u8]) -> bool {
    let ethpkt = EthDot3Packet::parse(Cursor::new(buf)).unwrap();
    let llcpkt = LlcPacket::parse(ethpkt.payload()).unwrap();
    llcpkt.is_cmd() && llcpkt.u_cmd() == UCmd::XID && llcpkt.dsap() == LLC_SAP_NULL
}

pub fn b(c: &mut Criterion) {
    c.bench_function("xid_rsp_build", |b| {
        let mut buf = [0; 64];
        b.iter(|| {
            xid_rsp_build(black_box(&mut buf[..]));
        })
    });

    c.bench_function("xid_cmd_parse", |b| {
        let mut buf = [0; 60];
        buf[..20].copy_from_slice(&[
            0x02, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x0c, 0x29, 0xaa, 0xbb, 0xcc, 0x00, 0x06,
            0x00, 0x04, 0xaf, 0x81, 0x01, 0x00,
        ]);
        b.iter(|| {
            black_box(xid_cmd_parse(black_box(&buf[..])));
        })
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
