//! Stable node identities.
//!
//! Every identity is a process-unique integer drawn from one shared
//! counter. Template ids survive re-evaluation (the evaluator reuses the
//! template tree); view ids are fresh per evaluation pass.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_raw() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(u64);

        impl $name {
            pub fn fresh() -> Self {
                Self(next_raw())
            }

            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identity of a template node. Usable as a map key across
    /// re-evaluations of the same document revision.
    TemplateId
);
id_type!(
    /// Identity of an evaluated view node. Fresh on every evaluation pass.
    ViewId
);
id_type!(
    /// Identity of an author-defined component.
    ComponentId
);
id_type!(
    /// Identity of a preview frame.
    FrameId
);
