use std::sync::atomic::{AtomicU64, Ordering};

/// Per-process lookup counters exposed on `/stats`.
#[derive(Debug)]
pub struct ServeStats {
    blocks_served: AtomicU64,
    transactions_served: AtomicU64,
    failed_lookups: AtomicU64,
}

impl Default for ServeStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ServeStats {
    pub const fn new() -> Self {
        Self {
            blocks_served: AtomicU64::new(0),
            transactions_served: AtomicU64::new(0),
            failed_lookups: AtomicU64::new(0),
        }
    }

    pub fn inc_blocks_served(&self) {
        self.blocks_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_transactions_served(&self) {
        self.transactions_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_failed_lookups(&self) {
        self.failed_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ServeSnapshot {
        ServeSnapshot {
            blocks_served: self.blocks_served.load(Ordering::Relaxed),
            transactions_served: self.transactions_served.load(Ordering::Relaxed),
            failed_lookups: self.failed_lookups.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServeSnapshot {
    pub blocks_served: u64,
    pub transactions_served: u64,
    pub failed_lookups: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_increments() {
        let stats = ServeStats::new();
        stats.inc_blocks_served();
        stats.inc_blocks_served();
        stats.inc_transactions_served();
        stats.inc_failed_lookups();
        assert_eq!(
            stats.snapshot(),
            ServeSnapshot {
                blocks_served: 2,
                transactions_served: 1,
                failed_lookups: 1,
            }
        );
    }
}
