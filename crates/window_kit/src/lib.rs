//! # window_kit
//!
//! A cross-platform window and input abstraction over GLFW with a polled
//! event model.
//!
//! ## Features
//!
//! - **Polled events**: each window accumulates an ordered event sequence per
//!   polling cycle, cleared automatically at the start of the next cycle
//! - **Edge-detected input**: double-buffered key/button state answering
//!   "held", "pressed this cycle" and "released this cycle"
//! - **Automatic lifetime tracking**: windows register their storage on
//!   creation and never unregister; the context compacts expired entries
//!   once per cycle
//! - **Vulkan and OpenGL ready**: surface creation, required instance
//!   extensions, context switching and proc loading pass through to GLFW
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use window_kit::prelude::*;
//!
//! fn main() -> WindowResult<()> {
//!     let mut context = WindowContext::new()?;
//!     let mut window = WindowBuilder::new()
//!         .title("hello")
//!         .size(800, 600)
//!         .resizable()
//!         .build(&mut context)?;
//!
//!     while !window.should_close() {
//!         context.poll_events();
//!         for event in window.events() {
//!             println!("{event:?}");
//!             if event == Event::Closed {
//!                 window.request_close();
//!             }
//!         }
//!         if window.input().is_key_pressed(Key::Escape) {
//!             window.request_close();
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod input;
pub mod window;

pub use config::{Config, ConfigError, WindowSettings};
pub use context::WindowContext;
pub use error::{WindowError, WindowResult};
pub use events::Event;
pub use input::{InputState, Key, Modifiers, MouseButton, KEY_COUNT, MOUSE_BUTTON_COUNT};
pub use window::{GraphicsMode, OpenGlConfig, Window, WindowBuilder};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, WindowSettings},
        context::WindowContext,
        error::{WindowError, WindowResult},
        events::Event,
        input::{InputState, Key, Modifiers, MouseButton},
        window::{GraphicsMode, OpenGlConfig, Window, WindowBuilder},
    };
}
