//! Preview frames.

use crate::id::FrameId;
use serde::{Deserialize, Serialize};

/// One preview viewport instance with independent dimensions. `width` and
/// `height` are free-form size strings; unset means `"auto"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub id: FrameId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            id: FrameId::fresh(),
            width: None,
            height: None,
        }
    }

    pub fn with_size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self.height = Some(height.into());
        self
    }

    pub fn width_or_auto(&self) -> &str {
        self.width.as_deref().unwrap_or("auto")
    }

    pub fn height_or_auto(&self) -> &str {
        self.height.as_deref().unwrap_or("auto")
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
