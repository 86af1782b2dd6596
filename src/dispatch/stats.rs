use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Process-wide dispatch counters, shared across concurrent dispatches.
#[derive(Debug, Default)]
pub struct DispatchStats {
    /// Total dispatch attempts
    pub total_dispatched: AtomicU64,
    /// Primary messages delivered
    pub primary_sent: AtomicU64,
    /// Confirmation messages delivered
    pub confirmations_sent: AtomicU64,
    /// Attempts rejected for missing fields
    pub validation_failures: AtomicU64,
    /// Attempts that failed at acquisition or primary send
    pub transport_failures: AtomicU64,
    /// Attempts where the primary was delivered but the confirmation failed
    pub partial_failures: AtomicU64,
}

impl DispatchStats {
    pub fn snapshot(&self) -> DispatchStatsSnapshot {
        DispatchStatsSnapshot {
            total_dispatched: self.total_dispatched.load(Ordering::Relaxed),
            primary_sent: self.primary_sent.load(Ordering::Relaxed),
            confirmations_sent: self.confirmations_sent.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
            transport_failures: self.transport_failures.load(Ordering::Relaxed),
            partial_failures: self.partial_failures.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of dispatch statistics
#[derive(Debug, Clone, Serialize)]
pub struct DispatchStatsSnapshot {
    pub total_dispatched: u64,
    pub primary_sent: u64,
    pub confirmations_sent: u64,
    pub validation_failures: u64,
    pub transport_failures: u64,
    pub partial_failures: u64,
}
