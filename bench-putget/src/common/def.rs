use anyhow::{bail, Result};
use log::info;
use std::time::Duration;

/// Default size of the key universe for the put/get workload.
pub const DEFAULT_NKEYS: usize = 100_000;

/// Default bucket count of the table under test. Deliberately tiny so that
/// bucket collisions are the common case, not the exception.
pub const DEFAULT_BUCKET_COUNT: usize = 5;

/// Default number of rendezvous rounds for the barrier workload.
pub const DEFAULT_ROUNDS: u64 = 20_000;

/// Fully-resolved parameters of a two-phase put/get run.
#[derive(Debug, Clone)]
pub struct WorkloadSetup {
    pub nthread: usize,
    pub nkeys: usize,
    pub bucket_count: usize,
    /// Size of each worker's disjoint insert partition.
    pub keys_per_worker: usize,
    pub seed: u64,
}

impl WorkloadSetup {
    pub fn new(nthread: usize, nkeys: usize, bucket_count: usize, seed: u64) -> Result<Self> {
        if nthread == 0 {
            bail!("nthread must be at least 1");
        }
        if nkeys == 0 || nkeys % nthread != 0 {
            bail!(
                "nkeys ({}) must be a positive multiple of nthread ({})",
                nkeys,
                nthread
            );
        }
        let keys_per_worker = nkeys / nthread;
        info!(
            "WorkloadSetup({} threads x {} keys, {} buckets, seed={})",
            nthread, keys_per_worker, bucket_count, seed
        );
        Ok(Self {
            nthread,
            nkeys,
            bucket_count,
            keys_per_worker,
            seed,
        })
    }

    /// One plan per worker, covering the key universe without overlap.
    pub fn worker_plans(&self) -> Vec<WorkerPlan> {
        (0..self.nthread)
            .map(|worker_id| WorkerPlan {
                worker_id,
                first_key: worker_id * self.keys_per_worker,
                end_key: (worker_id + 1) * self.keys_per_worker,
            })
            .collect()
    }
}

/// Typed per-worker configuration, handed to each worker at spawn time.
#[derive(Debug, Clone, Copy)]
pub struct WorkerPlan {
    pub worker_id: usize,
    /// First index (inclusive) of this worker's slice of the key universe.
    pub first_key: usize,
    /// End index (exclusive) of this worker's slice.
    pub end_key: usize,
}

/// What a worker reports back once both phases are done.
#[derive(Debug)]
pub struct WorkerReport {
    pub worker_id: usize,
    pub put_elapsed: Duration,
    pub get_elapsed: Duration,
    /// Lookups over the whole key universe that came back empty.
    pub misses: usize,
}
