//! Error types for the editor.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("render error: {0}")]
    Render(#[from] mosaic_renderer::RenderError),

    #[error("component not found: {0}")]
    ComponentNotFound(String),
}
