//! Observability: ephemeral, in-memory counters for hydration activity.
//!
//! Counters are thread-local and never persisted; hosts that want
//! visibility into DTO traffic read a snapshot and reset between
//! sampling windows.

use std::cell::RefCell;

thread_local! {
    static STATS: RefCell<HydrationStats> = RefCell::new(HydrationStats::default());
}

///
/// HydrationStats
/// Counters for DTO and collection construction on the current thread.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HydrationStats {
    pub dtos_hydrated: u64,
    pub collections_hydrated: u64,
    pub unknown_keys_ignored: u64,
    pub collection_items_reused: u64,
    pub collection_items_hydrated: u64,
}

/// Snapshot the current thread's hydration counters.
#[must_use]
pub fn snapshot() -> HydrationStats {
    STATS.with(|stats| stats.borrow().clone())
}

/// Reset the current thread's hydration counters.
pub fn reset() {
    STATS.with(|stats| *stats.borrow_mut() = HydrationStats::default());
}

pub(crate) fn record_dto_hydration(unknown_keys: u64) {
    STATS.with(|stats| {
        let mut stats = stats.borrow_mut();
        stats.dtos_hydrated += 1;
        stats.unknown_keys_ignored += unknown_keys;
    });
}

pub(crate) fn record_collection_hydration(reused: u64, hydrated: u64) {
    STATS.with(|stats| {
        let mut stats = stats.borrow_mut();
        stats.collections_hydrated += 1;
        stats.collection_items_reused += reused;
        stats.collection_items_hydrated += hydrated;
    });
}
