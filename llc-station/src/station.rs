use std::fmt;
use std::sync::Arc;

use llcpkt::ether::{EtherAddr, ETHDOT3_HEADER_LEN};
use llcpkt::llc::PduType;
use llcpkt::{Buf, PktBuf, PktBufMut};
use tracing::{debug, trace, warn};

use crate::action::mac_hdr_init;
use crate::error::*;
use crate::event::RxPdu;
use crate::rx::{FrameHandler, LlcRx};
use crate::stats::StationStats;
use crate::trans::{find_transition, Transition};
use crate::{Frame, FrameHost, StationConf};

/// The result of dispatching one inbound frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// No transition matched; the frame was dropped.
    Dropped,
    /// A transition matched and all of its actions succeeded.
    Handled,
    /// A transition matched and `failures` of its actions failed.
    Failed { failures: usize },
}

impl Dispatch {
    /// False only if an action failed.
    #[inline]
    pub fn is_ok(&self) -> bool {
        !matches!(self, Dispatch::Failed { .. })
    }
}

/// The LLC station component.
///
/// The station answers XID and TEST commands addressed to the null SAP and
/// drops everything else. Its transition table is static and dispatch takes
/// no locks, so one station can serve any number of receive contexts at once.
#[derive(Debug)]
pub struct Station<H> {
    conf: StationConf,
    host: Arc<H>,
    stats: StationStats,
}

impl<H: FrameHost> Station<H> {
    pub fn new(conf: StationConf, host: Arc<H>) -> Result<Self> {
        conf.validate()?;
        Ok(Self {
            conf,
            host,
            stats: StationStats::default(),
        })
    }

    #[inline]
    pub fn conf(&self) -> &StationConf {
        &self.conf
    }

    #[inline]
    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    #[inline]
    pub fn stats(&self) -> &StationStats {
        &self.stats
    }

    /// Dispatch an inbound frame.
    ///
    /// The frame's data must start at its 802.3 header. Every action of the
    /// first matching transition runs, even after an earlier one failed.
    /// The frame is handed back to the host through `release` exactly once,
    /// whatever the outcome.
    pub fn rcv(&self, frame: Frame) -> Dispatch {
        self.stats.inc_rx();
        trace!(len = frame.len(), "station rcv");

        let dispatch = match RxPdu::parse(&frame) {
            Some(rx) => match find_transition(rx.llc()) {
                Some(trans) => self.exec_actions(trans, &rx),
                None => Dispatch::Dropped,
            },
            None => Dispatch::Dropped,
        };
        if dispatch == Dispatch::Dropped {
            self.stats.inc_dropped();
        }

        self.host.release(frame);
        dispatch
    }

    fn exec_actions(&self, trans: &Transition, rx: &RxPdu<'_>) -> Dispatch {
        trace!(event = ?trans.event, src = %rx.src_addr(), "station transition");
        let mut failures = 0;
        for action in trans.actions {
            if let Err(err) = action.exec(self, rx) {
                warn!(?action, error = %err, "station action failed");
                self.stats.inc_failures();
                failures += 1;
            }
        }
        if failures == 0 {
            Dispatch::Handled
        } else {
            Dispatch::Failed { failures }
        }
    }

    /// Obtain a response frame on the device `rx` arrived on.
    ///
    /// A frame that cannot hold `data_size` bytes plus the LLC and 802.3
    /// headers is released and reported as an error.
    pub(crate) fn alloc_frame(
        &self,
        rx: &RxPdu<'_>,
        kind: PduType,
        data_size: usize,
    ) -> Result<Frame> {
        let mut frame = self
            .host
            .alloc_frame(rx.dev(), kind, data_size)
            .ok_or(StationError::AllocFailed { size: data_size })?;

        let needed = ETHDOT3_HEADER_LEN + kind.header_len();
        if frame.remaining() < data_size {
            self.host.release(frame);
            return Err(StationError::AllocFailed { size: data_size });
        }
        if frame.chunk_headroom() < needed {
            let available = frame.chunk_headroom();
            self.host.release(frame);
            return Err(StationError::NoHeadroom { needed, available });
        }
        if frame.remaining() > data_size {
            let extra = frame.remaining() - data_size;
            frame.trim_off(extra);
        }
        Ok(frame)
    }

    /// Stamp the MAC header on a finished LLC frame and transmit it, or
    /// release it if stamping fails.
    pub(crate) fn xmit(&self, mut frame: Frame, da: EtherAddr) -> Result<()> {
        let sa = frame.dev().addr;
        match mac_hdr_init(&mut frame, sa, da) {
            Ok(()) => {
                self.host.transmit(frame);
                Ok(())
            }
            Err(err) => {
                self.host.release(frame);
                Err(err)
            }
        }
    }
}

impl<H: FrameHost + 'static> Station<H> {
    /// Register the station as the null-SAP handler of `rx`.
    ///
    /// The station stays registered until the returned registration is dropped.
    pub fn attach(self: &Arc<Self>, rx: &Arc<LlcRx<H>>) -> Result<StationRegistration<H>> {
        let handler: Arc<dyn FrameHandler> = self.clone();
        rx.set_station_handler(handler.clone())?;
        Ok(StationRegistration {
            rx: rx.clone(),
            handler,
        })
    }
}

impl<H: FrameHost> FrameHandler for Station<H> {
    fn deliver(&self, frame: Frame) -> Dispatch {
        self.rcv(frame)
    }
}

/// Keeps a station registered with an [`LlcRx`]; deregisters it on drop.
///
/// A registration whose station was already replaced leaves the current
/// handler in place.
pub struct StationRegistration<H: FrameHost> {
    rx: Arc<LlcRx<H>>,
    handler: Arc<dyn FrameHandler>,
}

impl<H: FrameHost> fmt::Debug for StationRegistration<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StationRegistration")
            .field("rx", &self.rx)
            .finish_non_exhaustive()
    }
}

impl<H: FrameHost> Drop for StationRegistration<H> {
    fn drop(&mut self) {
        if !self.rx.clear_station_handler_if(&self.handler) {
            debug!("stale station registration dropped");
        }
    }
}
