//! Geometry change notification.
//!
//! The overlay never polls layout. A host hands it a [`GeometryNotifier`]
//! that fires whenever the preview surface may have moved or resized
//! (resize observation, scrolling, frame dimension edits), and the overlay
//! recomputes only then.

use mosaic_common::Disposer;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Source of "geometry may have changed" pulses. Subscribing yields a
/// [`Disposer`] that detaches the callback.
pub trait GeometryNotifier {
    fn subscribe(&self, callback: Box<dyn Fn()>) -> Disposer;
}

struct NotifierInner {
    next_id: u64,
    subscribers: Vec<(u64, Rc<dyn Fn()>)>,
}

/// Notifier driven by explicit [`emit`](SyntheticNotifier::emit) calls.
/// Hosts wire their resize and scroll observers to it; tests drive it
/// directly.
#[derive(Clone)]
pub struct SyntheticNotifier {
    inner: Rc<RefCell<NotifierInner>>,
}

impl SyntheticNotifier {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(NotifierInner {
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Fires every live subscriber once.
    pub fn emit(&self) {
        // Collect first so a callback may subscribe or unsubscribe without
        // hitting a RefCell borrow conflict.
        let callbacks: Vec<Rc<dyn Fn()>> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for cb in callbacks {
            cb();
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl Default for SyntheticNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryNotifier for SyntheticNotifier {
    fn subscribe(&self, callback: Box<dyn Fn()>) -> Disposer {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::from(callback)));
            id
        };
        let weak: Weak<RefCell<NotifierInner>> = Rc::downgrade(&self.inner);
        Disposer::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
            }
        })
    }
}
