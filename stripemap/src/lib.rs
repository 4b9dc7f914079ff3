//! # Lock-striped concurrent hash table
//!
//! A `StripedMap` is a fixed-size array of buckets where every bucket is
//! guarded by its own mutex. Splitting one table-wide lock into
//! `bucket_count` independent locks bounds contention to the collision rate
//! of the bucket index: writers hitting different buckets never wait on each
//! other, so up to `bucket_count` operations proceed in parallel in the best
//! case.
//!
//! The table is deliberately minimal. Keys and values are fixed-width
//! integers, the bucket count never changes, and entries are never removed
//! or mutated once inserted. A bucket owns its entries outright in an
//! append-only chain; `put` appends and `get` scans newest-first, so when
//! the same key was inserted more than once the most recent entry wins.
//! Duplicates are kept, never collapsed.
//!
//! Every operation acquires at most one lock and never takes a second one
//! while holding the first, so no lock-ordering deadlock is possible. The
//! map itself orders nothing across threads: a `put` racing a `get` on the
//! same key without an external synchronization point may or may not be
//! observed, though a bucket chain is always internally consistent. Pair the
//! map with a rendezvous when two phases must see each other's writes.

mod bucket;
pub mod map;

pub use bucket::Entry;
pub use map::StripedMap;

/// Construction-time validation failures.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("bucket count must be at least 1, got {0}")]
    InvalidBucketCount(usize),
}
