//! # Timed Sequences
//!
//! Scheduler abstraction for delayed, cancellable work. The editor's
//! two-phase ready transition (Loading -> Ready -> Interactive) runs on
//! this: each step fires after a delay relative to the previous one, the
//! second step can never fire before the first, and the whole sequence is
//! cancelled when the owning view unmounts.
//!
//! Production hosts bind [`Scheduler`] to their frame/timer primitives;
//! tests drive [`VirtualScheduler`] and advance virtual time
//! deterministically.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Cancellation handle for a scheduled timer. Cancelling a timer that has
/// already fired is a no-op.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Capability to run a callback after a delay.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u64, action: Box<dyn FnOnce()>) -> TimerHandle;
}

/// One step of a [`Sequence`]: `delay_ms` is relative to the completion of
/// the previous step (or to sequence start for the first step).
pub struct SequenceStep {
    pub delay_ms: u64,
    pub action: Box<dyn FnOnce()>,
}

impl SequenceStep {
    pub fn new(delay_ms: u64, action: impl FnOnce() + 'static) -> Self {
        Self {
            delay_ms,
            action: Box::new(action),
        }
    }
}

struct SequenceState {
    timer: Option<TimerHandle>,
    cancelled: bool,
    done: bool,
}

/// A strictly-ordered chain of delayed steps. Step N+1 is only scheduled
/// after step N has run, so steps can never fire out of order even if the
/// underlying scheduler reorders equal deadlines.
pub struct Sequence {
    state: Rc<RefCell<SequenceState>>,
}

impl Sequence {
    pub fn run(scheduler: Rc<dyn Scheduler>, steps: Vec<SequenceStep>) -> Self {
        let state = Rc::new(RefCell::new(SequenceState {
            timer: None,
            cancelled: false,
            done: steps.is_empty(),
        }));

        schedule_next(scheduler, state.clone(), steps.into());

        Self { state }
    }

    /// Cancel whatever remains of the sequence. Steps that already ran are
    /// unaffected.
    pub fn cancel(&self) {
        let mut state = self.state.borrow_mut();
        state.cancelled = true;
        if let Some(mut timer) = state.timer.take() {
            timer.cancel();
        }
    }

    pub fn is_done(&self) -> bool {
        self.state.borrow().done
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.borrow().cancelled
    }
}

impl Drop for Sequence {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule_next(
    scheduler: Rc<dyn Scheduler>,
    state: Rc<RefCell<SequenceState>>,
    mut steps: VecDeque<SequenceStep>,
) {
    if state.borrow().cancelled {
        return;
    }

    let step = match steps.pop_front() {
        Some(step) => step,
        None => {
            let mut state = state.borrow_mut();
            state.done = true;
            state.timer = None;
            return;
        }
    };

    let handle = scheduler.schedule(step.delay_ms, {
        let scheduler = scheduler.clone();
        let state = state.clone();
        Box::new(move || {
            (step.action)();
            schedule_next(scheduler, state, steps);
        })
    });

    state.borrow_mut().timer = Some(handle);
}

struct VirtualTimer {
    id: u64,
    due: u64,
    action: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct VirtualInner {
    now: u64,
    next_id: u64,
    timers: Vec<VirtualTimer>,
}

/// Deterministic scheduler driven by explicit [`advance`](Self::advance)
/// calls. Timers fire in deadline order (insertion order breaks ties).
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    inner: Rc<RefCell<VirtualInner>>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.inner.borrow().now
    }

    /// Number of timers that have not fired or been cancelled yet.
    pub fn pending(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Move virtual time forward, firing every timer that comes due.
    /// Actions run outside the internal borrow, so they may schedule
    /// further timers (the sequence chaining depends on this).
    pub fn advance(&self, ms: u64) {
        let target = self.inner.borrow().now + ms;

        loop {
            let next_id = {
                let inner = self.inner.borrow();
                inner
                    .timers
                    .iter()
                    .filter(|t| t.due <= target)
                    .min_by_key(|t| (t.due, t.id))
                    .map(|t| t.id)
            };

            let Some(id) = next_id else {
                break;
            };

            let timer = {
                let mut inner = self.inner.borrow_mut();
                let index = inner
                    .timers
                    .iter()
                    .position(|t| t.id == id)
                    .expect("timer disappeared mid-advance");
                let timer = inner.timers.remove(index);
                inner.now = inner.now.max(timer.due);
                timer
            };

            (timer.action)();
        }

        self.inner.borrow_mut().now = target;
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&self, delay_ms: u64, action: Box<dyn FnOnce()>) -> TimerHandle {
        let id;
        {
            let mut inner = self.inner.borrow_mut();
            id = inner.next_id;
            inner.next_id += 1;
            let due = inner.now + delay_ms;
            inner.timers.push(VirtualTimer { id, due, action });
        }

        let weak = Rc::downgrade(&self.inner);
        TimerHandle::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().timers.retain(|t| t.id != id);
            }
        })
    }
}
