//! Discrete window and input events
//!
//! Every window accumulates an ordered sequence of these records while the
//! context pumps the backend event queue. The sequence is cleared at the
//! start of each polling cycle, so events obtained between two
//! [`WindowContext::poll_events`](crate::WindowContext::poll_events) calls
//! reflect exactly the notifications delivered during the most recent pump.

use crate::input::{Key, Modifiers, MouseButton};

/// A single event recorded for a window during one polling cycle
///
/// The joystick, touch and sensor variants are part of the event vocabulary
/// for backends that can report them; the GLFW backend never produces them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The user requested the window to close
    Closed,
    /// The window client area was resized
    Resized {
        /// New width in screen coordinates
        width: i32,
        /// New height in screen coordinates
        height: i32,
    },
    /// The framebuffer was resized (pixels, not screen coordinates)
    FramebufferResized {
        /// New framebuffer width in pixels
        width: u32,
        /// New framebuffer height in pixels
        height: u32,
    },
    /// The window gained input focus
    FocusGained,
    /// The window lost input focus
    FocusLost,
    /// A unicode character was entered
    TextEntered {
        /// The character produced by the keystroke
        character: char,
    },
    /// A keyboard key went down
    KeyPressed {
        /// The key that was pressed
        key: Key,
        /// Platform scancode accompanying the notification
        scancode: i32,
        /// Modifier keys held at the time of the press
        modifiers: Modifiers,
    },
    /// A keyboard key went up
    KeyReleased {
        /// The key that was released
        key: Key,
        /// Platform scancode accompanying the notification
        scancode: i32,
        /// Modifier keys held at the time of the release
        modifiers: Modifiers,
    },
    /// A mouse button went down
    ///
    /// The position is the last one reported to the window; `(0.0, 0.0)` if
    /// no cursor movement has been delivered yet.
    MouseButtonPressed {
        /// The button that was pressed
        button: MouseButton,
        /// Cursor x position at the time of the press
        x: f64,
        /// Cursor y position at the time of the press
        y: f64,
        /// Modifier keys held at the time of the press
        modifiers: Modifiers,
    },
    /// A mouse button went up
    MouseButtonReleased {
        /// The button that was released
        button: MouseButton,
        /// Cursor x position at the time of the release
        x: f64,
        /// Cursor y position at the time of the release
        y: f64,
        /// Modifier keys held at the time of the release
        modifiers: Modifiers,
    },
    /// The cursor moved inside the window
    MouseMoved {
        /// New cursor x position
        x: f64,
        /// New cursor y position
        y: f64,
    },
    /// The mouse wheel was scrolled
    MouseWheelScrolled {
        /// Horizontal scroll offset of this notification
        delta_x: f64,
        /// Vertical scroll offset of this notification
        delta_y: f64,
        /// Cursor x position at the time of the scroll
        x: f64,
        /// Cursor y position at the time of the scroll
        y: f64,
    },
    /// The cursor entered the window client area
    MouseEntered,
    /// The cursor left the window client area
    MouseLeft,
    /// A joystick was connected
    JoystickConnected {
        /// Backend joystick identifier
        joystick_id: u32,
    },
    /// A joystick was disconnected
    JoystickDisconnected {
        /// Backend joystick identifier
        joystick_id: u32,
    },
    /// A joystick button went down
    JoystickButtonPressed {
        /// Backend joystick identifier
        joystick_id: u32,
        /// Button index on the joystick
        button: u32,
    },
    /// A joystick button went up
    JoystickButtonReleased {
        /// Backend joystick identifier
        joystick_id: u32,
        /// Button index on the joystick
        button: u32,
    },
    /// A joystick axis moved
    JoystickMoved {
        /// Backend joystick identifier
        joystick_id: u32,
        /// Axis index on the joystick
        axis: u32,
        /// New axis position in `[-1.0, 1.0]`
        position: f32,
    },
    /// A touch began
    TouchBegan {
        /// Finger index of the touch
        finger: u32,
        /// Touch x position
        x: f64,
        /// Touch y position
        y: f64,
    },
    /// A touch moved
    TouchMoved {
        /// Finger index of the touch
        finger: u32,
        /// Touch x position
        x: f64,
        /// Touch y position
        y: f64,
    },
    /// A touch ended
    TouchEnded {
        /// Finger index of the touch
        finger: u32,
        /// Touch x position
        x: f64,
        /// Touch y position
        y: f64,
    },
    /// A device sensor reported a new value
    SensorChanged {
        /// Sensor x axis value
        x: f32,
        /// Sensor y axis value
        y: f32,
        /// Sensor z axis value
        z: f32,
    },
}
