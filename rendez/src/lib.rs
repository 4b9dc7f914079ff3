//! # Rendezvous primitives
//!
//! A rendezvous is a synchronization point where a fixed number of
//! participants block until all of them have arrived, and then all proceed
//! together. This crate provides two flavors:
//!
//! * [`CyclicBarrier`] — a reusable barrier. After a full rendezvous it
//!   resets itself, so the same group of participants can meet again, round
//!   after round. The barrier counts completed rounds and no participant can
//!   observe round `r+1` before every participant has finished round `r`.
//!
//! * [`OnceRendezvous`] — a one-shot rendezvous. The first full arrival
//!   releases every waiter exactly once; the release is permanent and any
//!   later arrival returns immediately. Use it to separate two phases of a
//!   parallel computation: every write issued before a participant arrives
//!   is visible to every participant after its own arrival returns.
//!
//! Both primitives are built on one mutex/condvar pair. Waiters block on the
//! condvar instead of spinning on an atomic counter, which would burn a core
//! per waiting participant under contention. Condvar waits are wrapped in a
//! state-checking loop, so spurious wakeups never release a participant
//! early.
//!
//! The participant count is fixed at construction. Calling a primitive from
//! more concurrent threads than it was constructed for is a violated
//! precondition: the primitives cannot detect it, and a participant that
//! never arrives blocks the rest indefinitely. There is no timeout or
//! cancellation.

pub mod barrier;
pub mod oneshot;

pub use barrier::CyclicBarrier;
pub use oneshot::OnceRendezvous;

/// Construction-time validation failures.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("participant count must be at least 1, got {0}")]
    InvalidParticipantCount(usize),
}
