use anyhow::Result;
use crossbeam::channel::{unbounded, Sender};
use log::{debug, info};
use rendez::{CyclicBarrier, OnceRendezvous};
use stripemap::StripedMap;
use std::thread;
use std::time::{Duration, Instant};

use super::def::{WorkerPlan, WorkerReport, WorkloadSetup};
use super::generators;

/// Aggregate outcome of a two-phase put/get run.
#[derive(Debug)]
pub struct PutGetSummary {
    pub total_misses: usize,
    pub elapsed: Duration,
    pub reports: Vec<WorkerReport>,
}

fn put_get_worker(
    plan: WorkerPlan,
    map: &StripedMap,
    rendezvous: &OnceRendezvous,
    keys: &[u64],
    report_sender: Sender<WorkerReport>,
) {
    // Phase one: insert this worker's disjoint partition, tagged with the
    // worker id.
    let put_start = Instant::now();
    for &key in &keys[plan.first_key..plan.end_key] {
        map.put(key, plan.worker_id as u64);
    }
    let put_elapsed = put_start.elapsed();
    info!("worker {}: put time = {:?}", plan.worker_id, put_elapsed);

    // The happens-before edge between the phases: after this returns, every
    // worker's puts are visible to every worker's gets.
    rendezvous.arrive_and_wait();

    // Phase two: every worker probes the WHOLE key universe, not just its
    // own partition. The redundant scans are the point: nthread readers
    // hammering the same buckets while counting misses.
    let get_start = Instant::now();
    let mut misses = 0;
    for &key in keys {
        if map.get(key).is_none() {
            misses += 1;
        }
    }
    let get_elapsed = get_start.elapsed();
    info!(
        "worker {}: get time = {:?}, {} keys missing",
        plan.worker_id, get_elapsed, misses
    );

    report_sender
        .send(WorkerReport {
            worker_id: plan.worker_id,
            put_elapsed,
            get_elapsed,
            misses,
        })
        .unwrap();
}

/// Runs the two-phase workload: partitioned puts, one rendezvous, then
/// full-universe gets from every worker.
///
/// With the universe fully partitioned and inserted before the rendezvous,
/// the total miss count must be zero.
pub fn run_put_get(setup: &WorkloadSetup, dump: bool) -> Result<PutGetSummary> {
    let map = StripedMap::new(setup.bucket_count)?;
    let rendezvous = OnceRendezvous::new(setup.nthread)?;
    let keys = generators::key_universe(setup.nkeys, setup.seed);

    let (report_sender, report_receiver) = unbounded();
    let start = Instant::now();
    thread::scope(|s| {
        for plan in setup.worker_plans() {
            let map = &map;
            let rendezvous = &rendezvous;
            let keys = &keys[..];
            let report_sender = report_sender.clone();
            s.spawn(move || put_get_worker(plan, map, rendezvous, keys, report_sender));
        }
    });
    let elapsed = start.elapsed();
    drop(report_sender);

    let mut reports: Vec<WorkerReport> = report_receiver.iter().collect();
    reports.sort_by_key(|r| r.worker_id);
    let total_misses = reports.iter().map(|r| r.misses).sum();

    let total_ops = setup.nkeys + setup.nthread * setup.nkeys;
    info!(
        "completed {} puts + {} gets in {:?}, {:.1} ops/s, {} keys missing in total",
        setup.nkeys,
        setup.nthread * setup.nkeys,
        elapsed,
        total_ops as f64 / elapsed.as_secs_f64(),
        total_misses
    );

    if dump {
        for (idx, bucket_keys) in map.dump() {
            let line = bucket_keys
                .iter()
                .map(|k| k.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            debug!("{}: {}", idx, line);
        }
    }

    Ok(PutGetSummary {
        total_misses,
        elapsed,
        reports,
    })
}

/// Runs the lockstep barrier workload: `nthread` workers each cross the
/// barrier `rounds` times, checking the round counter before every arrival.
/// Returns the barrier's final round count.
pub fn run_barrier_rounds(nthread: usize, rounds: u64, seed: u64) -> Result<u64> {
    let barrier = CyclicBarrier::new(nthread)?;
    let start = Instant::now();
    thread::scope(|s| {
        for worker_id in 0..nthread {
            let barrier = &barrier;
            s.spawn(move || {
                let mut jitter = generators::jitter_source(seed, worker_id);
                for i in 0..rounds {
                    // Between a worker's own arrivals the counter cannot
                    // move, so it must still equal the iteration index.
                    let observed = barrier.round();
                    assert_eq!(
                        i, observed,
                        "worker {} observed round {} at iteration {}",
                        worker_id, observed, i
                    );
                    barrier.await_rendezvous();
                    // Shuffle the arrival order between rounds.
                    thread::sleep(Duration::from_micros(jitter.next()));
                }
            });
        }
    });
    info!(
        "{} workers completed {} rounds in {:?}",
        nthread,
        rounds,
        start.elapsed()
    );
    Ok(barrier.round())
}
