//! Error types for context and window operations

use thiserror::Error;

/// Failures surfaced by the windowing layer
///
/// Every variant is fatal to the operation that produced it and carries the
/// backend's diagnostic where one exists; nothing is retried internally.
#[derive(Error, Debug)]
pub enum WindowError {
    /// The backend library failed to initialize
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// The backend refused the window description
    #[error("Window creation failed")]
    CreationFailed,

    /// A Vulkan surface could not be created for the window
    #[error("Surface creation failed: {0}")]
    SurfaceCreationFailed(String),

    /// Any other error reported by the backend
    #[error("GLFW error: {0}")]
    Glfw(String),
}

/// Result alias for windowing operations
pub type WindowResult<T> = Result<T, WindowError>;
