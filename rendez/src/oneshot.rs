use parking_lot::{Condvar, Mutex};

use crate::ConfigError;

#[derive(Debug)]
struct OnceState {
    arrived: usize,
    released: bool,
}

/// A one-shot rendezvous point.
///
/// Exactly `parties` participants call [`arrive_and_wait`]; the last arrival
/// releases every waiter, once. Unlike [`CyclicBarrier`] there is no round
/// tracking: the released state is permanent and later calls return
/// immediately.
///
/// The release establishes a happens-before edge between the two phases it
/// separates: everything a participant did before arriving is visible to
/// every participant after its own arrival returns.
///
/// [`arrive_and_wait`]: OnceRendezvous::arrive_and_wait
/// [`CyclicBarrier`]: crate::CyclicBarrier
#[derive(Debug)]
pub struct OnceRendezvous {
    parties: usize,
    state: Mutex<OnceState>,
    cond: Condvar,
}

impl OnceRendezvous {
    /// Creates a rendezvous point for exactly `parties` participants.
    pub fn new(parties: usize) -> Result<Self, ConfigError> {
        if parties == 0 {
            return Err(ConfigError::InvalidParticipantCount(parties));
        }
        Ok(Self {
            parties,
            state: Mutex::new(OnceState {
                arrived: 0,
                released: false,
            }),
            cond: Condvar::new(),
        })
    }

    /// Blocks until all participants have arrived, then returns to all of
    /// them. Returns immediately if the rendezvous has already released.
    pub fn arrive_and_wait(&self) {
        let mut state = self.state.lock();
        if state.released {
            return;
        }
        state.arrived += 1;
        if state.arrived == self.parties {
            state.released = true;
            self.cond.notify_all();
        } else {
            while !state.released {
                self.cond.wait(&mut state);
            }
        }
    }

    /// Whether the rendezvous has already released its waiters.
    pub fn is_released(&self) -> bool {
        self.state.lock().released
    }

    /// Number of participants this rendezvous was constructed for.
    pub fn parties(&self) -> usize {
        self.parties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_zero_parties_rejected() {
        let err = OnceRendezvous::new(0).unwrap_err();
        assert_eq!(err, ConfigError::InvalidParticipantCount(0));
    }

    #[test]
    fn test_single_party_releases_immediately() {
        let point = OnceRendezvous::new(1).unwrap();
        assert!(!point.is_released());
        point.arrive_and_wait();
        assert!(point.is_released());
    }

    #[test]
    fn test_release_after_full_arrival() {
        const NTHREAD: usize = 6;
        let point = Arc::new(OnceRendezvous::new(NTHREAD).unwrap());
        let flags: Arc<Vec<AtomicBool>> =
            Arc::new((0..NTHREAD).map(|_| AtomicBool::new(false)).collect());
        let mut handles = Vec::with_capacity(NTHREAD);
        for id in 0..NTHREAD {
            let point = point.clone();
            let flags = flags.clone();
            handles.push(thread::spawn(move || {
                flags[id].store(true, Ordering::SeqCst);
                point.arrive_and_wait();
                // Every pre-arrival write is visible after the release.
                for flag in flags.iter() {
                    assert!(flag.load(Ordering::SeqCst));
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert!(point.is_released());
    }

    #[test]
    fn test_late_arrival_returns_immediately() {
        let point = OnceRendezvous::new(2).unwrap();
        thread::scope(|s| {
            s.spawn(|| point.arrive_and_wait());
            s.spawn(|| point.arrive_and_wait());
        });
        // A call after the release must not block or re-arm the counter.
        point.arrive_and_wait();
        assert!(point.is_released());
    }
}
