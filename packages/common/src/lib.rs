//! Shared runtime primitives: drop-running cleanup handles, contract
//! assertions, and a cancellable timer sequence over an injected
//! scheduler (virtual time in tests).

pub mod disposer;
pub mod invariant;
pub mod schedule;

pub use disposer::Disposer;
pub use schedule::{Scheduler, Sequence, SequenceStep, TimerHandle, VirtualScheduler};
