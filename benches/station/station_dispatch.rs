use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use llc_station::*;
use llcpkt::ether::EtherAddr;
use llcpkt::llc::PduType;

// Transmitted and released frames are simply dropped.
struct NullHost;

impl FrameHost for NullHost {
    fn alloc_frame(&self, dev: &NetDev, kind: PduType, data_size: usize) -> Option<Frame> {
        Some(Frame::alloc(*dev, kind, data_size))
    }

    fn transmit(&self, frame: Frame) {
        black_box(frame);
    }

    fn release(&self, frame: Frame) {
        black_box(frame);
    }
}

const XID_CMD: [u8; 20] = [
    0x02, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x0c, 0x29, 0xaa, 0xbb, 0xcc, 0x00, 0x06, 0x00,
    0x04, 0xaf, 0x81, 0x01, 0x00,
];

const UI_CMD: [u8; 20] = [
    0x02, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x0c, 0x29, 0xaa, 0xbb, 0xcc, 0x00, 0x06, 0x42,
    0x42, 0x03, 0x00, 0x00, 0x00,
];

pub fn b(c: &mut Criterion) {
    let dev = NetDev::ether(EtherAddr([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]));
    let station = Station::new(StationConf::new(), Arc::new(NullHost)).unwrap();

    c.bench_function("station_xid_dispatch", |b| {
        b.iter(|| black_box(station.rcv(Frame::from_bytes(dev, black_box(&XID_CMD[..])))))
    });

    c.bench_function("station_drop_dispatch", |b| {
        b.iter(|| black_box(station.rcv(Frame::from_bytes(dev, black_box(&UI_CMD[..])))))
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
