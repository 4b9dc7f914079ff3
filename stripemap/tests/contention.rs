use stripemap::StripedMap;
use std::thread;

// Hammering one bucket from many threads must not lose a single entry:
// the chain length afterwards is exactly the number of puts issued.
#[test]
fn test_same_bucket_inserts_lose_nothing() {
    const NTHREAD: usize = 8;
    const PER_THREAD: usize = 2_000;
    let map = StripedMap::new(4).unwrap();
    thread::scope(|s| {
        for id in 0..NTHREAD {
            let map = &map;
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    // Every key is a multiple of 4, so all of them land in
                    // bucket 0.
                    map.put(4 * (id * PER_THREAD + i) as u64, id as u64);
                }
            });
        }
    });
    assert_eq!(NTHREAD * PER_THREAD, map.bucket_len(0));
    for idx in 1..4 {
        assert_eq!(0, map.bucket_len(idx));
    }
}

// Writers spread across all buckets, then (after the spawning scope joins
// them) every key must be found from any thread.
#[test]
fn test_partitioned_inserts_fully_visible_after_join() {
    const NTHREAD: usize = 4;
    const NKEYS: usize = 10_000;
    let map = StripedMap::new(7).unwrap();
    let keys: Vec<u64> = (0..NKEYS as u64).map(|i| i * 13 + 5).collect();
    let per_worker = NKEYS / NTHREAD;
    thread::scope(|s| {
        for id in 0..NTHREAD {
            let map = &map;
            let partition = &keys[id * per_worker..(id + 1) * per_worker];
            s.spawn(move || {
                for &key in partition {
                    map.put(key, id as u64);
                }
            });
        }
    });
    assert_eq!(NKEYS, map.len());
    thread::scope(|s| {
        for _ in 0..NTHREAD {
            let map = &map;
            let keys = &keys;
            s.spawn(move || {
                let misses = keys.iter().filter(|&&k| map.get(k).is_none()).count();
                assert_eq!(0, misses);
            });
        }
    });
}

// Readers and writers on disjoint buckets run concurrently without ever
// observing a torn chain.
#[test]
fn test_disjoint_buckets_do_not_interfere() {
    const ROUNDS: usize = 5_000;
    let map = StripedMap::new(2).unwrap();
    thread::scope(|s| {
        let map = &map;
        s.spawn(move || {
            for i in 0..ROUNDS {
                map.put(2 * i as u64, 0);
            }
        });
        s.spawn(move || {
            for i in 0..ROUNDS {
                map.put(2 * i as u64 + 1, 1);
            }
        });
        s.spawn(move || {
            for i in 0..ROUNDS {
                // Whatever is already inserted must be readable while the
                // writers keep appending.
                if let Some(e) = map.get(2 * (i % 100) as u64 + 1) {
                    assert_eq!(1, e.value);
                }
            }
        });
    });
    assert_eq!(ROUNDS, map.bucket_len(0));
    assert_eq!(ROUNDS, map.bucket_len(1));
}
