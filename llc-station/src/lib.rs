#![warn(missing_debug_implementations, rust_2018_idioms)]

//! The IEEE 802.2 LLC station component.
//!
//! Every LLC entity has a station component listening on the null SAP
//! (address 0). It answers two connectionless commands on behalf of the
//! whole entity:
//!
//! - **XID**: answered with an XID response advertising the supported LLC
//!   class and receive window (class 2, window 127 by default).
//! - **TEST**: answered with a TEST response echoing the command's data.
//!
//! Everything else reaching the station is dropped. The station owns no
//! frames: it allocates, transmits and releases them through a
//! [`FrameHost`] provided by the surrounding network stack, and releases
//! each inbound frame exactly once.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//!
//! use llc_station::*;
//! use llcpkt::ether::EtherAddr;
//! use llcpkt::llc::PduType;
//!
//! #[derive(Debug, Default)]
//! struct Host {
//!     sent: Mutex<Vec<Frame>>,
//! }
//!
//! impl FrameHost for Host {
//!     fn alloc_frame(&self, dev: &NetDev, kind: PduType, size: usize) -> Option<Frame> {
//!         Some(Frame::alloc(*dev, kind, size))
//!     }
//!     fn transmit(&self, frame: Frame) {
//!         self.sent.lock().unwrap().push(frame);
//!     }
//!     fn release(&self, _frame: Frame) {}
//! }
//!
//! let local = EtherAddr([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);
//! let host = Arc::new(Host::default());
//! let station = Station::new(StationConf::new(), host.clone())?;
//!
//! // XID command from 00:0c:29:aa:bb:cc, SAP 0x04, to the null SAP.
//! let bytes = [
//!     0x02, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x0c, 0x29, 0xaa, 0xbb, 0xcc, 0x00, 0x06,
//!     0x00, 0x04, 0xaf, 0x81, 0x01, 0x00,
//! ];
//! let dispatch = station.rcv(Frame::from_bytes(NetDev::ether(local), &bytes));
//! assert_eq!(dispatch, Dispatch::Handled);
//! assert_eq!(host.sent.lock().unwrap().len(), 1);
//! # Ok::<(), StationError>(())
//! ```

mod error;
pub use error::{Result, StationError};

mod frame;
pub use frame::{Frame, LinkType, NetDev};

mod host;
pub use host::FrameHost;

mod conf;
pub use conf::StationConf;

mod stats;
pub use stats::{StationStats, StatsSnapshot};

mod event;
pub use event::{RxPdu, StationEvent};

mod action;
pub use action::{mac_hdr_init, StationAction};

mod trans;
pub use trans::{find_transition, Transition, STATION_TRANSITIONS};

mod station;
pub use station::{Dispatch, Station, StationRegistration};

mod rx;
pub use rx::{DropReason, FrameHandler, LlcRx, RxOutcome};
