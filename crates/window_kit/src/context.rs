//! Windowing context and polling orchestrator
//!
//! [`WindowContext`] owns the GLFW instance and the window lifetime
//! registry. It is constructed explicitly and passed where needed; there is
//! no ambient global. One context per process is the intended lifecycle,
//! since the backend library itself is process-global.

use crate::error::{WindowError, WindowResult};
use crate::window::registry::StorageRegistry;
use crate::window::storage::WindowChannel;

/// Owner of the backend library instance and the polling cycle
pub struct WindowContext {
    glfw: glfw::Glfw,
    registry: StorageRegistry<WindowChannel>,
}

impl WindowContext {
    /// Initialize the backend library
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InitializationFailed`] with the backend
    /// diagnostic if GLFW cannot initialize.
    pub fn new() -> WindowResult<Self> {
        let glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|err| WindowError::InitializationFailed(err.to_string()))?;
        log::info!("GLFW initialized");

        Ok(Self {
            glfw,
            registry: StorageRegistry::new(),
        })
    }

    /// Run one polling cycle
    ///
    /// Clears every live window's event buffer and rolls its input state
    /// forward, then pumps the backend event queue and delivers the pending
    /// raw notifications into each window's storage. Call once per frame;
    /// events and input queried between two calls are stable. Only one
    /// thread may poll.
    pub fn poll_events(&mut self) {
        log::trace!("polling cycle");
        self.registry.reset_all();
        self.glfw.poll_events();
        self.registry.collect_all();
    }

    /// Whether the backend can create Vulkan surfaces on this machine
    pub fn is_vulkan_supported(&self) -> bool {
        self.glfw.vulkan_supported()
    }

    /// Instance extensions Vulkan needs for surface creation here
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::Glfw`] if the backend cannot report them,
    /// typically because Vulkan is unavailable.
    pub fn required_vulkan_extensions(&self) -> WindowResult<Vec<String>> {
        self.glfw
            .get_required_instance_extensions()
            .ok_or_else(|| WindowError::Glfw("failed to get required instance extensions".into()))
    }

    pub(crate) fn glfw_mut(&mut self) -> &mut glfw::Glfw {
        &mut self.glfw
    }

    pub(crate) fn registry(&self) -> &StorageRegistry<WindowChannel> {
        &self.registry
    }
}
