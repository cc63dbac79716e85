//! # State Store
//!
//! Transactional wrapper around document state. `change` runs a synchronous
//! mutation, commits it atomically, and bumps the revision counter exactly
//! once per call; revision subscribers are notified after the commit, with
//! no borrow held, so they can freely read the store.
//!
//! There is deliberately no fine-grained per-field subscription: consumers
//! subscribe to "revision changed" and regenerate their derived state
//! top-down.

use crate::document::Document;
use mosaic_common::Disposer;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

type RevisionListener = Rc<dyn Fn(u64)>;

struct StoreInner {
    document: Document,
    revision: u64,
    next_listener: u64,
    listeners: Vec<(u64, RevisionListener)>,
}

/// Shared, single-threaded document store. Cheap to clone.
#[derive(Clone)]
pub struct StateStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl StateStore {
    pub fn new(document: Document) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                document,
                revision: 0,
                next_listener: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }

    /// Read the document without mutating it.
    pub fn read<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
        f(&self.inner.borrow().document)
    }

    /// Apply a synchronous mutation atomically. The revision advances once
    /// per call regardless of how many fields the closure touches.
    pub fn change<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
        let (result, revision, listeners) = {
            let mut inner = self.inner.borrow_mut();
            let result = f(&mut inner.document);
            inner.revision += 1;
            debug!(revision = inner.revision, "document change committed");
            (result, inner.revision, inner.listeners.clone())
        };

        for (_, listener) in listeners {
            listener(revision);
        }

        result
    }

    /// Subscribe to revision changes. The subscription is released when
    /// the returned disposer runs.
    pub fn subscribe(&self, listener: impl Fn(u64) + 'static) -> Disposer {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener;
            inner.next_listener += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };

        let weak = Rc::downgrade(&self.inner);
        Disposer::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(l, _)| *l != id);
            }
        })
    }

    /// Number of live revision subscribers, for leak checks in tests.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}
