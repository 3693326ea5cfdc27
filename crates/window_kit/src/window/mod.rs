//! Window creation and per-window queries
//!
//! A [`Window`] owns its native GLFW handle and the storage that accumulates
//! its events each polling cycle. Construction goes through
//! [`WindowBuilder`], which applies the window hints and registers the
//! storage with the context's lifetime registry; destruction needs no
//! unregistration, the registry drops the expired entry on its next sweep.

pub(crate) mod registry;
pub(crate) mod storage;

use std::sync::{Arc, Mutex};

use glfw::Context as _;

use crate::config::WindowSettings;
use crate::context::WindowContext;
use crate::error::{WindowError, WindowResult};
use crate::events::Event;
use crate::input::InputState;
use self::storage::WindowChannel;

/// OpenGL context parameters requested at window creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenGlConfig {
    /// Major context version
    pub major: u32,
    /// Minor context version
    pub minor: u32,
    /// Request a core profile context
    pub core_profile: bool,
}

/// Graphics API the window's surface is created for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphicsMode {
    /// No client API; the window is used with Vulkan or plain
    #[default]
    NoApi,
    /// An OpenGL context with the given parameters
    OpenGl(OpenGlConfig),
}

/// Builder for [`Window`]
///
/// Defaults: 1280x720, titled, decorated, visible, focused, not resizable,
/// no client API.
#[derive(Debug, Clone)]
pub struct WindowBuilder {
    title: String,
    width: u32,
    height: u32,
    resizable: bool,
    visible: bool,
    decorated: bool,
    focused: bool,
    mode: GraphicsMode,
}

impl WindowBuilder {
    /// Start from the default window description
    pub fn new() -> Self {
        Self {
            title: String::from("window_kit"),
            width: 1280,
            height: 720,
            resizable: false,
            visible: true,
            decorated: true,
            focused: true,
            mode: GraphicsMode::NoApi,
        }
    }

    /// Start from deserialized [`WindowSettings`]
    pub fn from_settings(settings: &WindowSettings) -> Self {
        Self {
            title: settings.title.clone(),
            width: settings.width,
            height: settings.height,
            resizable: settings.resizable,
            visible: settings.visible,
            decorated: settings.decorated,
            focused: settings.focused,
            mode: GraphicsMode::NoApi,
        }
    }

    /// Set the window title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the client area size in screen coordinates
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Allow the user to resize the window
    pub fn resizable(mut self) -> Self {
        self.resizable = true;
        self
    }

    /// Create the window without decorations
    pub fn borderless(mut self) -> Self {
        self.decorated = false;
        self
    }

    /// Create the window invisible and unfocused
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self.focused = false;
        self
    }

    /// Request an OpenGL context
    pub fn opengl(mut self, config: OpenGlConfig) -> Self {
        self.mode = GraphicsMode::OpenGl(config);
        self
    }

    /// Request no client API (the default, required for Vulkan)
    pub fn no_api(mut self) -> Self {
        self.mode = GraphicsMode::NoApi;
        self
    }

    /// Create the native window and register its storage with the context
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::CreationFailed`] if the backend refuses the
    /// window description.
    pub fn build(self, context: &mut WindowContext) -> WindowResult<Window> {
        let glfw = context.glfw_mut();
        glfw.default_window_hints();
        glfw.window_hint(glfw::WindowHint::Resizable(self.resizable));
        glfw.window_hint(glfw::WindowHint::Visible(self.visible));
        glfw.window_hint(glfw::WindowHint::Decorated(self.decorated));
        glfw.window_hint(glfw::WindowHint::Focused(self.focused));
        match self.mode {
            GraphicsMode::NoApi => {
                glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
            }
            GraphicsMode::OpenGl(config) => {
                glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGl));
                glfw.window_hint(glfw::WindowHint::ContextVersion(config.major, config.minor));
                if config.core_profile {
                    glfw.window_hint(glfw::WindowHint::OpenGlProfile(
                        glfw::OpenGlProfileHint::Core,
                    ));
                }
            }
        }

        let (mut handle, receiver) = glfw
            .create_window(
                self.width,
                self.height,
                &self.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(WindowError::CreationFailed)?;

        // some platforms ignore the pre-creation hint,
        // see https://github.com/glfw/glfw/issues/2060
        if !self.decorated {
            handle.set_decorated(false);
        }

        handle.set_close_polling(true);
        handle.set_size_polling(true);
        handle.set_framebuffer_size_polling(true);
        handle.set_focus_polling(true);
        handle.set_key_polling(true);
        handle.set_char_polling(true);
        handle.set_mouse_button_polling(true);
        handle.set_cursor_pos_polling(true);
        handle.set_cursor_enter_polling(true);
        handle.set_scroll_polling(true);

        let channel = Arc::new(Mutex::new(WindowChannel::new(receiver)));
        context.registry().register(Arc::downgrade(&channel));

        log::debug!(
            "created window '{}' ({}x{}, mode {:?})",
            self.title,
            self.width,
            self.height,
            self.mode
        );

        Ok(Window {
            handle,
            channel,
            close_requested: false,
        })
    }
}

impl Default for WindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A native window with polled events and double-buffered input state
///
/// The window is the sole owner of its event storage; the context's registry
/// only holds a weak reference to it. Dropping the window destroys the native
/// handle and lets the registry entry expire naturally.
pub struct Window {
    handle: glfw::PWindow,
    channel: Arc<Mutex<WindowChannel>>,
    close_requested: bool,
}

impl Window {
    /// Whether [`request_close`] has been called
    ///
    /// A close request from the user (clicking the close button) only records
    /// an [`Event::Closed`]; the window does not close until the client reacts
    /// to that event by calling [`request_close`]. Ignoring the event vetoes
    /// the close.
    ///
    /// [`request_close`]: Window::request_close
    pub fn should_close(&self) -> bool {
        self.close_requested
    }

    /// Request the window to close
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Events recorded during the most recent polling cycle, in delivery order
    ///
    /// The returned snapshot is stable until the next
    /// [`WindowContext::poll_events`] call.
    pub fn events(&self) -> Vec<Event> {
        self.channel.lock().unwrap().storage().events().to_vec()
    }

    /// Snapshot of the input state as of the most recent polling cycle
    pub fn input(&self) -> InputState {
        self.channel.lock().unwrap().storage().input().clone()
    }

    /// Set the window title
    pub fn set_title(&mut self, title: &str) {
        self.handle.set_title(title);
    }

    /// Resize the client area, in screen coordinates
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.handle.set_size(width, height);
    }

    /// Current client area size in screen coordinates
    pub fn size(&self) -> (i32, i32) {
        self.handle.get_size()
    }

    /// Current framebuffer size in pixels
    pub fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.handle.get_framebuffer_size();
        (width as u32, height as u32)
    }

    /// Whether the window currently has input focus
    pub fn is_focused(&self) -> bool {
        self.handle.is_focused()
    }

    /// Whether the window is currently visible
    pub fn is_visible(&self) -> bool {
        self.handle.is_visible()
    }

    /// Make the window visible
    pub fn show(&mut self) {
        self.handle.show();
    }

    /// Hide the window
    pub fn hide(&mut self) {
        self.handle.hide();
    }

    /// Bring the window to front and give it input focus
    pub fn focus(&mut self) {
        self.handle.focus();
    }

    /// Make this window's OpenGL context current on the calling thread
    pub fn make_current(&mut self) {
        self.handle.make_current();
    }

    /// Swap the front and back buffers of an OpenGL window
    pub fn swap_buffers(&mut self) {
        self.handle.swap_buffers();
    }

    /// Load an OpenGL entry point; the context must be current
    pub fn get_proc_address(&mut self, name: &str) -> glfw::GLProc {
        self.handle.get_proc_address(name)
    }

    /// Create a Vulkan surface for this window through GLFW
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::SurfaceCreationFailed`] with the backend's
    /// result code if GLFW cannot create the surface.
    pub fn create_vulkan_surface(
        &mut self,
        instance: ash::vk::Instance,
    ) -> WindowResult<ash::vk::SurfaceKHR> {
        let mut surface = ash::vk::SurfaceKHR::null();
        let result = self
            .handle
            .create_window_surface(instance, std::ptr::null(), &mut surface);

        if result == ash::vk::Result::SUCCESS {
            Ok(surface)
        } else {
            Err(WindowError::SurfaceCreationFailed(format!(
                "GLFW could not create a Vulkan surface: {result:?}"
            )))
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        log::debug!("destroying window");
    }
}
