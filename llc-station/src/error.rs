use thiserror::Error;

pub type Result<T> = std::result::Result<T, StationError>;

/// Errors raised by station actions and by handler registration.
///
/// None of them is fatal to the station: a failed action releases whatever it
/// allocated and the station stays ready for the next frame.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StationError {
    /// The host could not provide a frame for a response.
    #[error("frame allocation of {size} data bytes failed")]
    AllocFailed { size: usize },

    /// The frame cannot hold the headers that still have to be prepended.
    #[error("frame has {available} bytes of headroom, {needed} needed")]
    NoHeadroom { needed: usize, available: usize },

    /// The LLC PDU is longer than an 802.3 length field can describe.
    #[error("LLC PDU of {len} bytes does not fit an 802.3 frame")]
    PduTooLong { len: usize },

    /// The device link type has no 802.3 MAC header to stamp.
    #[error("link type {0:#06x} cannot carry LLC frames")]
    UnsupportedLink(u16),

    #[error("a station handler is already registered")]
    AlreadyRegistered,

    #[error("SAP {0:#04x} is reserved for the station")]
    ReservedSap(u8),

    #[error("SAP {0:#04x} already has a handler")]
    SapInUse(u8),

    #[error("invalid station configuration: {0}")]
    InvalidConf(String),
}

impl StationError {
    pub(crate) fn invalid_conf<S: Into<String>>(msg: S) -> Self {
        StationError::InvalidConf(msg.into())
    }
}
