use parking_lot::Mutex;

use crate::bucket::{BucketChain, Entry};
use crate::ConfigError;

/// A concurrent hash table with one mutex per bucket.
///
/// Bucket selection is plain modulo on the key, so callers control the
/// collision pattern directly. Operations on different buckets never
/// contend; operations on the same bucket are serialized by that bucket's
/// lock. There is no table-wide lock.
#[derive(Debug)]
pub struct StripedMap {
    buckets: Vec<Mutex<BucketChain>>,
}

impl StripedMap {
    /// Creates a map with `bucket_count` buckets, fixed for its lifetime.
    pub fn new(bucket_count: usize) -> Result<Self, ConfigError> {
        if bucket_count == 0 {
            return Err(ConfigError::InvalidBucketCount(bucket_count));
        }
        let mut buckets = Vec::with_capacity(bucket_count);
        for _ in 0..bucket_count {
            buckets.push(Mutex::new(BucketChain::default()));
        }
        Ok(Self { buckets })
    }

    #[inline]
    fn bucket_of(&self, key: u64) -> usize {
        (key % self.buckets.len() as u64) as usize
    }

    /// Appends a new entry for `key`. Duplicate keys are kept as
    /// independent entries; nothing is overwritten.
    pub fn put(&self, key: u64, value: u64) {
        let mut chain = self.buckets[self.bucket_of(key)].lock();
        chain.push(key, value);
    }

    /// Returns the most recently inserted entry for `key`, if any.
    pub fn get(&self, key: u64) -> Option<Entry> {
        let chain = self.buckets[self.bucket_of(key)].lock();
        chain.find(key)
    }

    /// Per-bucket key layout for diagnostics, newest-first within a bucket.
    ///
    /// Locks one bucket at a time, so under concurrent writers this is a
    /// best-effort snapshot, not a consistent one.
    pub fn dump(&self) -> Vec<(usize, Vec<u64>)> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(idx, bucket)| (idx, bucket.lock().keys_newest_first()))
            .collect()
    }

    /// Number of buckets this map was constructed with.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of entries chained in bucket `idx`.
    pub fn bucket_len(&self, idx: usize) -> usize {
        self.buckets[idx].lock().len()
    }

    /// Total entry count, summed one bucket at a time (best-effort under
    /// concurrent writers, like [`dump`](StripedMap::dump)).
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.lock().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
