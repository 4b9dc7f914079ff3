// Benchmark driver for the contention-study primitives.
// 2 workloads:
// - put-get (default): partitioned inserts into the striped table, one
//   rendezvous, then full-universe lookups from every worker
// - barrier-rounds: every worker crosses the cyclic barrier in lockstep
use anyhow::Result;
use bench_putget::common::{cli, def, utils, workload};
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    utils::init_logging("info");
    let args = cli::BenchmarkCli::parse();

    match &args.command {
        Some(cli::Command::BarrierRounds { rounds }) => {
            let completed = workload::run_barrier_rounds(args.nthread, *rounds, args.seed)?;
            info!("OK; passed ({} rounds completed)", completed);
        }
        command => {
            let (nkeys, buckets, dump) = match command {
                Some(cli::Command::PutGet {
                    nkeys,
                    buckets,
                    dump,
                }) => (*nkeys, *buckets, *dump),
                _ => (def::DEFAULT_NKEYS, def::DEFAULT_BUCKET_COUNT, false),
            };
            let setup = def::WorkloadSetup::new(args.nthread, nkeys, buckets, args.seed)?;
            let summary = workload::run_put_get(&setup, dump)?;
            info!(
                "completion time = {:?}, {} keys missing in total",
                summary.elapsed, summary.total_misses
            );
        }
    }
    Ok(())
}
