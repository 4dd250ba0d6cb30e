use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use llcpkt::ether::{is_dot3_frame, EthDot3Packet, ETHDOT3_HEADER_LEN};
use llcpkt::llc::{LlcPacket, LLC_SAP_NULL};
use llcpkt::{Cursor, PktBuf};
use tracing::{debug, trace, warn};

use crate::error::*;
use crate::{Dispatch, Frame, FrameHost};

/// A consumer of LLC frames registered with an [`LlcRx`].
///
/// The handler takes ownership of the frame and must hand it back to the host
/// through `transmit` or `release`.
pub trait FrameHandler: Send + Sync {
    fn deliver(&self, frame: Frame) -> Dispatch;
}

/// Why [`LlcRx`] dropped a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The type/length field holds an EtherType.
    NotDot3,
    /// The length field does not fit the frame.
    BadLength,
    /// The PDU is shorter than its LLC header.
    Truncated,
    /// The frame is unicast to another station.
    OtherHost,
    /// Null DSAP, but no station is registered.
    NoStation,
    /// No handler for this DSAP.
    UnknownSap(u8),
}

/// Where [`LlcRx::rcv`] sent a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RxOutcome {
    Station(Dispatch),
    Sap { sap: u8, dispatch: Dispatch },
    Dropped(DropReason),
}

/// The LLC receive path of a host: validates 802.3 framing and routes each
/// PDU by its DSAP.
///
/// Frames for the null SAP go to the registered station handler, all others
/// to the handler registered for their DSAP. Frames nobody takes are
/// released.
pub struct LlcRx<H> {
    host: Arc<H>,
    station: RwLock<Option<Arc<dyn FrameHandler>>>,
    saps: RwLock<HashMap<u8, Arc<dyn FrameHandler>>>,
}

impl<H: FrameHost> LlcRx<H> {
    pub fn new(host: Arc<H>) -> Self {
        Self {
            host,
            station: RwLock::new(None),
            saps: RwLock::new(HashMap::new()),
        }
    }

    #[inline]
    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    /// Install the null-SAP handler.
    pub fn set_station_handler(&self, handler: Arc<dyn FrameHandler>) -> Result<()> {
        let mut station = self.station.write().unwrap_or_else(PoisonError::into_inner);
        if station.is_some() {
            warn!("station handler already registered");
            return Err(StationError::AlreadyRegistered);
        }
        *station = Some(handler);
        debug!("station handler registered");
        Ok(())
    }

    /// Remove the null-SAP handler, returning it.
    pub fn clear_station_handler(&self) -> Option<Arc<dyn FrameHandler>> {
        let prev = self
            .station
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if prev.is_some() {
            debug!("station handler removed");
        }
        prev
    }

    /// Remove the null-SAP handler only if it is `handler`.
    pub fn clear_station_handler_if(&self, handler: &Arc<dyn FrameHandler>) -> bool {
        let mut station = self.station.write().unwrap_or_else(PoisonError::into_inner);
        match station.as_ref() {
            Some(cur) if same_handler(cur, handler) => {
                *station = None;
                debug!("station handler removed");
                true
            }
            _ => false,
        }
    }

    pub fn has_station_handler(&self) -> bool {
        self.station
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Install the handler for `sap`. The null SAP belongs to the station.
    pub fn register_sap(&self, sap: u8, handler: Arc<dyn FrameHandler>) -> Result<()> {
        if sap == LLC_SAP_NULL {
            return Err(StationError::ReservedSap(sap));
        }
        let mut saps = self.saps.write().unwrap_or_else(PoisonError::into_inner);
        if saps.contains_key(&sap) {
            return Err(StationError::SapInUse(sap));
        }
        saps.insert(sap, handler);
        debug!(sap, "sap handler registered");
        Ok(())
    }

    pub fn unregister_sap(&self, sap: u8) -> Option<Arc<dyn FrameHandler>> {
        self.saps
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&sap)
    }

    /// Receive a frame whose data starts at its 802.3 header.
    pub fn rcv(&self, mut frame: Frame) -> RxOutcome {
        let dsap = match self.fixup(&mut frame) {
            Ok(dsap) => dsap,
            Err(reason) => return self.drop_frame(frame, reason),
        };

        if dsap == LLC_SAP_NULL {
            let handler = self
                .station
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone();
            return match handler {
                Some(handler) => RxOutcome::Station(handler.deliver(frame)),
                None => self.drop_frame(frame, DropReason::NoStation),
            };
        }

        let handler = self
            .saps
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&dsap)
            .cloned();
        match handler {
            Some(handler) => RxOutcome::Sap {
                sap: dsap,
                dispatch: handler.deliver(frame),
            },
            None => self.drop_frame(frame, DropReason::UnknownSap(dsap)),
        }
    }

    // Check the framing, cut link-layer padding off the frame and return the DSAP.
    fn fixup(&self, frame: &mut Frame) -> std::result::Result<u8, DropReason> {
        if !is_dot3_frame(frame.data()) {
            return Err(DropReason::NotDot3);
        }
        let dot3 = EthDot3Packet::parse(Cursor::new(frame.data()))
            .map_err(|_| DropReason::BadLength)?;

        let dst = dot3.dst_addr();
        if dst.is_unicast() && dst != frame.dev().addr {
            return Err(DropReason::OtherHost);
        }

        let pdu_len = usize::from(dot3.payload_len());
        let (dsap, hdr_len) = match LlcPacket::parse(dot3.payload()) {
            Ok(llc) => (llc.dsap(), llc.pdu_type().header_len()),
            Err(_) => return Err(DropReason::Truncated),
        };
        if pdu_len < hdr_len {
            return Err(DropReason::Truncated);
        }

        let padding = frame.len() - (ETHDOT3_HEADER_LEN + pdu_len);
        if padding > 0 {
            frame.trim_off(padding);
        }
        Ok(dsap)
    }

    fn drop_frame(&self, frame: Frame, reason: DropReason) -> RxOutcome {
        trace!(?reason, len = frame.len(), "llc rx drop");
        self.host.release(frame);
        RxOutcome::Dropped(reason)
    }
}

// Compares the data pointers only, vtables of the same type may differ.
fn same_handler(a: &Arc<dyn FrameHandler>, b: &Arc<dyn FrameHandler>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

impl<H> fmt::Debug for LlcRx<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let station = self
            .station
            .read()
            .map(|s| s.is_some())
            .unwrap_or_default();
        let saps: Vec<u8> = self
            .saps
            .read()
            .map(|saps| saps.keys().copied().collect())
            .unwrap_or_default();
        f.debug_struct("LlcRx")
            .field("station", &station)
            .field("saps", &saps)
            .finish()
    }
}
