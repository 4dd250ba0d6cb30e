#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::{fs::File, io::Read};

use llc_station::{Dispatch, Frame, FrameHandler, FrameHost, NetDev};
use llcpkt::ether::EtherAddr;
use llcpkt::llc::PduType;

pub const LOCAL_ADDR: EtherAddr = EtherAddr([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);

pub fn local_dev() -> NetDev {
    NetDev::ether(LOCAL_ADDR)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Read a hex-text packet fixture from `tests/packet_examples`.
pub fn file_to_packet(fname: &str) -> Vec<u8> {
    // The test is executed under the crate root directory.
    let mut program_path = std::env::current_dir().unwrap();
    program_path.push("tests");
    program_path.push("packet_examples");
    program_path.push(fname);

    let mut file = File::open(program_path).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    let content = content.trim();

    content
        .as_bytes()
        .chunks(2)
        .map(|pair| u8::from_str_radix(std::str::from_utf8(pair).unwrap(), 16).unwrap())
        .collect()
}

/// Build an 802.3 frame carrying `pdu`, padded to the Ethernet minimum.
pub fn dot3_frame(dst: EtherAddr, src: EtherAddr, pdu: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(dst.as_bytes());
    bytes.extend_from_slice(src.as_bytes());
    bytes.extend_from_slice(&(pdu.len() as u16).to_be_bytes());
    bytes.extend_from_slice(pdu);
    if bytes.len() < 60 {
        bytes.resize(60, 0);
    }
    bytes
}

/// A host that records every frame it is handed.
#[derive(Debug, Default)]
pub struct MockHost {
    pub fail_alloc: bool,
    pub allocs: AtomicUsize,
    pub sent: Mutex<Vec<Frame>>,
    pub released: Mutex<Vec<Frame>>,
}

impl MockHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_alloc() -> Arc<Self> {
        Arc::new(Self {
            fail_alloc: true,
            ..Default::default()
        })
    }

    pub fn sent(&self) -> Vec<Frame> {
        self.sent.lock().unwrap().clone()
    }

    pub fn released(&self) -> Vec<Frame> {
        self.released.lock().unwrap().clone()
    }

    /// How many released frames carry exactly `bytes`.
    pub fn released_count(&self, bytes: &[u8]) -> usize {
        self.released
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.data() == bytes)
            .count()
    }
}

impl FrameHost for MockHost {
    fn alloc_frame(&self, dev: &NetDev, kind: PduType, data_size: usize) -> Option<Frame> {
        self.allocs.fetch_add(1, Ordering::SeqCst);
        if self.fail_alloc {
            None
        } else {
            Some(Frame::alloc(*dev, kind, data_size))
        }
    }

    fn transmit(&self, frame: Frame) {
        self.sent.lock().unwrap().push(frame);
    }

    fn release(&self, frame: Frame) {
        self.released.lock().unwrap().push(frame);
    }
}

/// A SAP handler that records delivered frames and releases them.
#[derive(Debug)]
pub struct SapSink {
    pub host: Arc<MockHost>,
    pub delivered: AtomicUsize,
}

impl SapSink {
    pub fn new(host: Arc<MockHost>) -> Arc<Self> {
        Arc::new(Self {
            host,
            delivered: AtomicUsize::new(0),
        })
    }
}

impl FrameHandler for SapSink {
    fn deliver(&self, frame: Frame) -> Dispatch {
        self.delivered.fetch_add(1, Ordering::SeqCst);
        self.host.release(frame);
        Dispatch::Handled
    }
}
