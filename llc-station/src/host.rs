use llcpkt::llc::PduType;

use crate::{Frame, NetDev};

/// Frame primitives provided by the host networking stack.
///
/// The station never creates or destroys frames on its own: every frame it
/// obtains comes from `alloc_frame` and leaves through exactly one of
/// `transmit` or `release`. Every inbound frame handed to the station is
/// given back through `release` once dispatch is over.
pub trait FrameHost: Send + Sync {
    /// Allocate a frame on `dev` for an LLC PDU of format `kind` with
    /// `data_size` bytes after the LLC header.
    ///
    /// The returned frame's data area holds `data_size` bytes and must have
    /// headroom for the LLC header and the 802.3 header, as
    /// [`Frame::alloc`] provides. `None` signals resource exhaustion.
    fn alloc_frame(&self, dev: &NetDev, kind: PduType, data_size: usize) -> Option<Frame>;

    /// Hand a fully built frame to the link-layer transmit path.
    fn transmit(&self, frame: Frame);

    /// Return a frame that will not be transmitted.
    fn release(&self, frame: Frame);
}
