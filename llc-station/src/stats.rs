use std::sync::atomic::{AtomicU64, Ordering};

/// Station counters. Updated with relaxed atomics from any receive context.
#[derive(Debug, Default)]
pub struct StationStats {
    rx: AtomicU64,
    dropped: AtomicU64,
    xid_rsp: AtomicU64,
    test_rsp: AtomicU64,
    failures: AtomicU64,
}

/// A point-in-time copy of [`StationStats`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub rx: u64,
    pub dropped: u64,
    pub xid_rsp: u64,
    pub test_rsp: u64,
    pub failures: u64,
}

impl StationStats {
    #[inline]
    pub(crate) fn inc_rx(&self) {
        self.rx.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn inc_dropped(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn inc_xid_rsp(&self) {
        self.xid_rsp.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn inc_test_rsp(&self) {
        self.test_rsp.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn inc_failures(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            rx: self.rx.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
            xid_rsp: self.xid_rsp.load(Ordering::Relaxed),
            test_rsp: self.test_rsp.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}
