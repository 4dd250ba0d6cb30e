use llcpkt::llc::{XidClass, LLC_XID_MAX_RX_WINDOW};

use crate::error::*;

/// Station configuration.
///
/// The defaults advertise class 2 service with a receive window of 127 in
/// XID responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StationConf {
    pub xid_class: XidClass,
    pub rx_window: u8,
}

impl StationConf {
    pub const XID_CLASS: XidClass = XidClass::CLASS_2;
    pub const RX_WINDOW: u8 = 127;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_xid_class(&mut self, val: XidClass) {
        self.xid_class = val;
    }

    pub fn set_rx_window(&mut self, val: u8) {
        self.rx_window = val;
    }

    pub fn validate(&self) -> Result<()> {
        if self.rx_window > LLC_XID_MAX_RX_WINDOW {
            return Err(StationError::invalid_conf(format!(
                "receive window {} exceeds {}",
                self.rx_window, LLC_XID_MAX_RX_WINDOW
            )));
        }
        if !matches!(
            self.xid_class,
            XidClass::CLASS_1 | XidClass::CLASS_2 | XidClass::CLASS_3 | XidClass::CLASS_4
        ) {
            return Err(StationError::invalid_conf(format!(
                "unknown xid class {:#04x}",
                self.xid_class.raw()
            )));
        }
        Ok(())
    }
}

impl Default for StationConf {
    fn default() -> Self {
        Self {
            xid_class: Self::XID_CLASS,
            rx_window: Self::RX_WINDOW,
        }
    }
}
