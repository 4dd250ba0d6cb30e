use llcpkt::llc::LlcPacket;
use llcpkt::Buf;

use crate::{StationAction, StationEvent};

/// An event together with the actions it triggers, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub event: StationEvent,
    pub actions: &'static [StationAction],
}

/// The station transition table. The station has a single state, so the
/// table maps events straight to actions.
pub static STATION_TRANSITIONS: [Transition; 2] = [
    Transition {
        event: StationEvent::RxNullDsapXidCmd,
        actions: &[StationAction::SendXidRsp],
    },
    Transition {
        event: StationEvent::RxNullDsapTestCmd,
        actions: &[StationAction::SendTestRsp],
    },
];

/// The first transition whose event matches `pdu`.
pub fn find_transition<T: Buf>(pdu: &LlcPacket<T>) -> Option<&'static Transition> {
    STATION_TRANSITIONS.iter().find(|trans| trans.event.matches(pdu))
}
