//! # Disposers
//!
//! One-shot cleanup handles returned by registration APIs (binding
//! connections, geometry subscriptions). A disposer runs its cleanup exactly
//! once: either when `dispose` is called explicitly or when the handle is
//! dropped, whichever comes first.

/// One-shot cleanup handle.
pub struct Disposer {
    cleanup: Option<Box<dyn FnOnce()>>,
}

impl Disposer {
    pub fn new(cleanup: impl FnOnce() + 'static) -> Self {
        Self {
            cleanup: Some(Box::new(cleanup)),
        }
    }

    /// A disposer that does nothing. Returned by idempotent registration
    /// paths when the registration already exists.
    pub fn noop() -> Self {
        Self { cleanup: None }
    }

    /// Run the cleanup now. Calling this on an already-disposed handle is a
    /// no-op.
    pub fn dispose(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }

    /// Whether the cleanup still has to run.
    pub fn is_live(&self) -> bool {
        self.cleanup.is_some()
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Disposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposer")
            .field("live", &self.is_live())
            .finish()
    }
}
