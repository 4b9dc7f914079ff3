use parking_lot::{Condvar, Mutex};

use crate::ConfigError;

/// State shared by all participants, guarded by the barrier's mutex.
#[derive(Debug)]
struct BarrierState {
    /// Participants that have arrived for the current round.
    arrived: usize,
    /// Completed rendezvous rounds.
    round: u64,
}

/// A reusable multi-round rendezvous barrier.
///
/// `parties` participants repeatedly call [`await_rendezvous`]; each call
/// blocks until all `parties` of them have arrived for the current round,
/// then releases them together and advances the round counter by one.
///
/// The whole group must stay in lockstep: every participant calls
/// [`await_rendezvous`] the same number of times, once per round.
///
/// [`await_rendezvous`]: CyclicBarrier::await_rendezvous
#[derive(Debug)]
pub struct CyclicBarrier {
    parties: usize,
    state: Mutex<BarrierState>,
    cond: Condvar,
}

impl CyclicBarrier {
    /// Creates a barrier for exactly `parties` participants.
    pub fn new(parties: usize) -> Result<Self, ConfigError> {
        if parties == 0 {
            return Err(ConfigError::InvalidParticipantCount(parties));
        }
        Ok(Self {
            parties,
            state: Mutex::new(BarrierState {
                arrived: 0,
                round: 0,
            }),
            cond: Condvar::new(),
        })
    }

    /// Blocks until all participants have arrived for the current round.
    ///
    /// The last arrival resets the arrival count, advances the round and
    /// wakes every waiter; all callers then return the number of the round
    /// they just completed. No caller returns before the full group has
    /// arrived.
    pub fn await_rendezvous(&self) -> u64 {
        let mut state = self.state.lock();
        state.arrived += 1;
        if state.arrived == self.parties {
            state.arrived = 0;
            state.round += 1;
            // Broadcast, not single-wake: the whole round proceeds together.
            self.cond.notify_all();
            state.round
        } else {
            // The round counter doubles as the generation check: a spurious
            // wakeup with an unchanged round goes back to waiting.
            let entered = state.round;
            while state.round == entered {
                self.cond.wait(&mut state);
            }
            state.round
        }
    }

    /// Number of completed rounds.
    pub fn round(&self) -> u64 {
        self.state.lock().round
    }

    /// Number of participants this barrier was constructed for.
    pub fn parties(&self) -> usize {
        self.parties
    }
}
