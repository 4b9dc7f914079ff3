use clap::{Parser, Subcommand};

use super::def;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Two-phase table workload: partitioned puts, one rendezvous,
    /// full-universe gets with a miss count (the default command)
    PutGet {
        /// Size of the key universe; must be a multiple of nthread
        #[arg(long, default_value_t = def::DEFAULT_NKEYS)]
        nkeys: usize,

        /// Number of buckets (and bucket locks) in the table
        #[arg(long, default_value_t = def::DEFAULT_BUCKET_COUNT)]
        buckets: usize,

        /// Log the per-bucket key layout after the run
        #[arg(long, default_value_t = false)]
        dump: bool,
    },
    /// Lockstep barrier workload: every worker crosses the cyclic barrier
    /// once per round, checking the round counter as it goes
    BarrierRounds {
        /// Number of rendezvous rounds to run
        #[arg(long, default_value_t = def::DEFAULT_ROUNDS)]
        rounds: u64,
    },
}

#[derive(Parser, Debug, Clone)]
pub struct BenchmarkCli {
    /// Number of worker threads
    pub nthread: usize,

    /// Seed for the pseudo-random key and jitter sequences
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}
