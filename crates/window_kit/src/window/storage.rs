//! Per-window event storage and raw notification translation
//!
//! [`WindowStorage`] owns the ordered event sequence and the input state for
//! one window. The Rust GLFW binding delivers raw notifications through a
//! per-window channel rather than C callbacks, so [`WindowChannel`] pairs the
//! storage with that receiver and drains it during the pump phase of each
//! polling cycle.

use glfw::{Action, WindowEvent};

use super::registry::CycleStorage;
use crate::events::Event;
use crate::input::lookup;
use crate::input::{InputState, Key, MouseButton};

/// Event sequence plus input state owned by a single window
#[derive(Debug, Default)]
pub(crate) struct WindowStorage {
    events: Vec<Event>,
    input: InputState,
}

impl WindowStorage {
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Append an event and fold it into the input state
    pub fn record(&mut self, event: Event) {
        self.input.apply(&event);
        self.events.push(event);
    }

    /// Start a new cycle: drop last cycle's events, roll state buffers
    pub fn reset(&mut self) {
        self.events.clear();
        self.input.reset();
    }
}

/// A window's storage bundled with its raw notification receiver
pub(crate) struct WindowChannel {
    receiver: glfw::GlfwReceiver<(f64, WindowEvent)>,
    storage: WindowStorage,
}

impl WindowChannel {
    pub fn new(receiver: glfw::GlfwReceiver<(f64, WindowEvent)>) -> Self {
        Self {
            receiver,
            storage: WindowStorage::default(),
        }
    }

    pub fn storage(&self) -> &WindowStorage {
        &self.storage
    }
}

impl CycleStorage for WindowChannel {
    fn reset(&mut self) {
        self.storage.reset();
    }

    fn collect(&mut self) {
        for (_, raw) in glfw::flush_messages(&self.receiver) {
            if let Some(event) = translate(&raw, self.storage.input()) {
                self.storage.record(event);
            }
        }
    }
}

/// Translate one raw GLFW notification into a wrapper event
///
/// Returns `None` for notifications the event model discards: repeat key
/// actions, keys or buttons that map to the sentinel, zero-sized framebuffer
/// resizes, and notification kinds outside the event vocabulary. Button and
/// scroll events carry the last cursor position reported to this window,
/// which is `(0.0, 0.0)` until the first cursor movement arrives.
pub(crate) fn translate(raw: &WindowEvent, input: &InputState) -> Option<Event> {
    match *raw {
        WindowEvent::Close => Some(Event::Closed),
        WindowEvent::Size(width, height) => Some(Event::Resized { width, height }),
        WindowEvent::FramebufferSize(width, height) => {
            if width <= 0 || height <= 0 {
                return None;
            }
            Some(Event::FramebufferResized {
                width: width as u32,
                height: height as u32,
            })
        }
        WindowEvent::Focus(true) => Some(Event::FocusGained),
        WindowEvent::Focus(false) => Some(Event::FocusLost),
        WindowEvent::Char(character) => Some(Event::TextEntered { character }),
        WindowEvent::Key(key, scancode, action, mods) => {
            let key = lookup::key_from_glfw(key as i32);
            if key == Key::Unknown {
                return None;
            }
            match action {
                Action::Press => Some(Event::KeyPressed {
                    key,
                    scancode,
                    modifiers: mods.into(),
                }),
                Action::Release => Some(Event::KeyReleased {
                    key,
                    scancode,
                    modifiers: mods.into(),
                }),
                Action::Repeat => None,
            }
        }
        WindowEvent::MouseButton(button, action, mods) => {
            let button = lookup::mouse_button_from_glfw(button as i32);
            if button == MouseButton::Unknown {
                return None;
            }
            let (x, y) = input.cursor_position();
            match action {
                Action::Press => Some(Event::MouseButtonPressed {
                    button,
                    x,
                    y,
                    modifiers: mods.into(),
                }),
                Action::Release => Some(Event::MouseButtonReleased {
                    button,
                    x,
                    y,
                    modifiers: mods.into(),
                }),
                Action::Repeat => None,
            }
        }
        WindowEvent::CursorPos(x, y) => Some(Event::MouseMoved { x, y }),
        WindowEvent::Scroll(delta_x, delta_y) => {
            let (x, y) = input.cursor_position();
            Some(Event::MouseWheelScrolled {
                delta_x,
                delta_y,
                x,
                y,
            })
        }
        WindowEvent::CursorEnter(true) => Some(Event::MouseEntered),
        WindowEvent::CursorEnter(false) => Some(Event::MouseLeft),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;

    #[test]
    fn events_preserve_delivery_order() {
        let mut storage = WindowStorage::default();
        let raw = [
            WindowEvent::CursorPos(5.0, 6.0),
            WindowEvent::Key(glfw::Key::W, 17, Action::Press, glfw::Modifiers::empty()),
            WindowEvent::Scroll(0.0, 1.0),
        ];
        for event in &raw {
            let translated = translate(event, storage.input()).unwrap();
            storage.record(translated);
        }

        assert_eq!(
            storage.events(),
            &[
                Event::MouseMoved { x: 5.0, y: 6.0 },
                Event::KeyPressed {
                    key: Key::W,
                    scancode: 17,
                    modifiers: Modifiers::empty(),
                },
                Event::MouseWheelScrolled {
                    delta_x: 0.0,
                    delta_y: 1.0,
                    x: 5.0,
                    y: 6.0,
                },
            ]
        );
    }

    #[test]
    fn reset_clears_events_and_rolls_input() {
        let mut storage = WindowStorage::default();
        storage.record(Event::KeyPressed {
            key: Key::A,
            scancode: 0,
            modifiers: Modifiers::empty(),
        });
        assert_eq!(storage.events().len(), 1);
        assert!(storage.input().is_key_pressed(Key::A));

        storage.reset();
        assert!(storage.events().is_empty());
        assert!(storage.input().is_key_down(Key::A));
        assert!(!storage.input().is_key_pressed(Key::A));
    }

    #[test]
    fn unknown_key_notification_is_discarded() {
        let input = InputState::new();
        let raw = WindowEvent::Key(
            glfw::Key::Unknown,
            0,
            Action::Press,
            glfw::Modifiers::empty(),
        );
        assert_eq!(translate(&raw, &input), None);
    }

    #[test]
    fn repeat_actions_are_discarded() {
        let input = InputState::new();
        let raw = WindowEvent::Key(glfw::Key::W, 17, Action::Repeat, glfw::Modifiers::empty());
        assert_eq!(translate(&raw, &input), None);
    }

    #[test]
    fn zero_sized_framebuffer_resize_is_discarded() {
        let input = InputState::new();
        assert_eq!(translate(&WindowEvent::FramebufferSize(0, 600), &input), None);
        assert_eq!(translate(&WindowEvent::FramebufferSize(800, 0), &input), None);
        assert_eq!(
            translate(&WindowEvent::FramebufferSize(800, 600), &input),
            Some(Event::FramebufferResized {
                width: 800,
                height: 600,
            })
        );
    }

    #[test]
    fn button_events_carry_last_cursor_position() {
        let mut storage = WindowStorage::default();
        let moved = translate(&WindowEvent::CursorPos(120.0, 80.0), storage.input()).unwrap();
        storage.record(moved);

        let raw = WindowEvent::MouseButton(
            glfw::MouseButton::Button1,
            Action::Press,
            glfw::Modifiers::empty(),
        );
        let pressed = translate(&raw, storage.input()).unwrap();
        assert_eq!(
            pressed,
            Event::MouseButtonPressed {
                button: MouseButton::Left,
                x: 120.0,
                y: 80.0,
                modifiers: Modifiers::empty(),
            }
        );
    }

    #[test]
    fn modifier_bits_are_converted() {
        let input = InputState::new();
        let raw = WindowEvent::Key(
            glfw::Key::S,
            0,
            Action::Press,
            glfw::Modifiers::Control | glfw::Modifiers::Shift,
        );
        let Some(Event::KeyPressed { modifiers, .. }) = translate(&raw, &input) else {
            panic!("expected a key press");
        };
        assert!(modifiers.contains(Modifiers::CONTROL));
        assert!(modifiers.contains(Modifiers::SHIFT));
        assert!(!modifiers.contains(Modifiers::ALT));
    }

    #[test]
    fn close_notification_translates_to_closed_event() {
        let input = InputState::new();
        assert_eq!(translate(&WindowEvent::Close, &input), Some(Event::Closed));
    }

    #[test]
    fn click_before_any_cursor_movement_reports_origin() {
        let input = InputState::new();
        let raw = WindowEvent::MouseButton(
            glfw::MouseButton::Button1,
            Action::Press,
            glfw::Modifiers::empty(),
        );
        assert_eq!(
            translate(&raw, &input),
            Some(Event::MouseButtonPressed {
                button: MouseButton::Left,
                x: 0.0,
                y: 0.0,
                modifiers: Modifiers::empty(),
            })
        );
    }

    #[test]
    fn focus_and_cursor_boundary_notifications() {
        let input = InputState::new();
        assert_eq!(translate(&WindowEvent::Focus(true), &input), Some(Event::FocusGained));
        assert_eq!(translate(&WindowEvent::Focus(false), &input), Some(Event::FocusLost));
        assert_eq!(
            translate(&WindowEvent::CursorEnter(true), &input),
            Some(Event::MouseEntered)
        );
        assert_eq!(
            translate(&WindowEvent::CursorEnter(false), &input),
            Some(Event::MouseLeft)
        );
    }
}
