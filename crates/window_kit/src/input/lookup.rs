//! Bidirectional static lookup between wrapper symbols and GLFW codes
//!
//! Two fixed tables are built once at first use: a forward array indexed by
//! the wrapper symbol and a reverse array indexed by the backend code. Both
//! directions are O(1). Unmapped values degrade to the sentinel on either
//! side; they are never errors. Duplicate entries, on the other hand, are
//! rejected at construction time.

use once_cell::sync::Lazy;

use super::{Key, MouseButton, Symbol};

/// Backend code meaning "no mapping exists" (matches `GLFW_KEY_UNKNOWN`)
pub const BACKEND_NONE: i32 = -1;

/// Highest legal GLFW key code
const GLFW_KEY_MAX: i32 = glfw::Key::Menu as i32;

/// Highest legal GLFW mouse button code
const GLFW_MOUSE_BUTTON_MAX: i32 = glfw::MouseButton::Button8 as i32;

/// Immutable two-way map between a symbol type and backend integer codes
pub(crate) struct Lookup<T: Symbol> {
    forward: Vec<i32>,
    reverse: Vec<T>,
    backend_max: i32,
}

impl<T: Symbol> Lookup<T> {
    /// Build both tables from an explicit entry list
    ///
    /// # Panics
    ///
    /// Panics if an entry names the sentinel symbol, or if two entries
    /// collide on a forward or reverse slot. Collisions would make the
    /// round-trip ambiguous, so they fail hard here rather than silently
    /// overwriting a slot.
    fn new(backend_max: i32, entries: &[(T, i32)]) -> Self {
        assert!(backend_max >= 0, "backend range must be non-empty");

        let mut forward = vec![BACKEND_NONE; T::COUNT];
        let mut reverse = vec![T::NONE; backend_max as usize + 1];

        for &(symbol, code) in entries {
            let Some(idx) = symbol.index() else {
                panic!("the sentinel symbol cannot be mapped");
            };
            assert!(
                forward[idx] == BACKEND_NONE,
                "duplicate forward mapping for {symbol:?}"
            );
            forward[idx] = code;

            if (0..=backend_max).contains(&code) {
                let slot = code as usize;
                assert!(
                    reverse[slot] == T::NONE,
                    "backend code {code} already mapped to {:?}",
                    reverse[slot]
                );
                reverse[slot] = symbol;
            }
        }

        Self {
            forward,
            reverse,
            backend_max,
        }
    }

    /// Backend code for a symbol; [`BACKEND_NONE`] if unregistered
    fn to_backend(&self, symbol: T) -> i32 {
        symbol.index().map_or(BACKEND_NONE, |idx| self.forward[idx])
    }

    /// Symbol for a backend code; the sentinel if out of range or unpopulated
    fn to_symbol(&self, code: i32) -> T {
        if code < 0 || code > self.backend_max {
            return T::NONE;
        }
        self.reverse[code as usize]
    }
}

const KEY_ENTRIES: &[(Key, i32)] = &[
    // printable keys
    (Key::Space, glfw::Key::Space as i32),
    (Key::Apostrophe, glfw::Key::Apostrophe as i32),
    (Key::Comma, glfw::Key::Comma as i32),
    (Key::Minus, glfw::Key::Minus as i32),
    (Key::Period, glfw::Key::Period as i32),
    (Key::Slash, glfw::Key::Slash as i32),
    (Key::Num0, glfw::Key::Num0 as i32),
    (Key::Num1, glfw::Key::Num1 as i32),
    (Key::Num2, glfw::Key::Num2 as i32),
    (Key::Num3, glfw::Key::Num3 as i32),
    (Key::Num4, glfw::Key::Num4 as i32),
    (Key::Num5, glfw::Key::Num5 as i32),
    (Key::Num6, glfw::Key::Num6 as i32),
    (Key::Num7, glfw::Key::Num7 as i32),
    (Key::Num8, glfw::Key::Num8 as i32),
    (Key::Num9, glfw::Key::Num9 as i32),
    (Key::Semicolon, glfw::Key::Semicolon as i32),
    (Key::Equal, glfw::Key::Equal as i32),
    (Key::A, glfw::Key::A as i32),
    (Key::B, glfw::Key::B as i32),
    (Key::C, glfw::Key::C as i32),
    (Key::D, glfw::Key::D as i32),
    (Key::E, glfw::Key::E as i32),
    (Key::F, glfw::Key::F as i32),
    (Key::G, glfw::Key::G as i32),
    (Key::H, glfw::Key::H as i32),
    (Key::I, glfw::Key::I as i32),
    (Key::J, glfw::Key::J as i32),
    (Key::K, glfw::Key::K as i32),
    (Key::L, glfw::Key::L as i32),
    (Key::M, glfw::Key::M as i32),
    (Key::N, glfw::Key::N as i32),
    (Key::O, glfw::Key::O as i32),
    (Key::P, glfw::Key::P as i32),
    (Key::Q, glfw::Key::Q as i32),
    (Key::R, glfw::Key::R as i32),
    (Key::S, glfw::Key::S as i32),
    (Key::T, glfw::Key::T as i32),
    (Key::U, glfw::Key::U as i32),
    (Key::V, glfw::Key::V as i32),
    (Key::W, glfw::Key::W as i32),
    (Key::X, glfw::Key::X as i32),
    (Key::Y, glfw::Key::Y as i32),
    (Key::Z, glfw::Key::Z as i32),
    (Key::LBracket, glfw::Key::LeftBracket as i32),
    (Key::Backslash, glfw::Key::Backslash as i32),
    (Key::RBracket, glfw::Key::RightBracket as i32),
    (Key::Grave, glfw::Key::GraveAccent as i32),
    (Key::World1, glfw::Key::World1 as i32),
    (Key::World2, glfw::Key::World2 as i32),
    // navigation and editing
    (Key::Escape, glfw::Key::Escape as i32),
    (Key::Enter, glfw::Key::Enter as i32),
    (Key::Tab, glfw::Key::Tab as i32),
    (Key::Backspace, glfw::Key::Backspace as i32),
    (Key::Insert, glfw::Key::Insert as i32),
    (Key::Delete, glfw::Key::Delete as i32),
    (Key::Right, glfw::Key::Right as i32),
    (Key::Left, glfw::Key::Left as i32),
    (Key::Down, glfw::Key::Down as i32),
    (Key::Up, glfw::Key::Up as i32),
    (Key::PageUp, glfw::Key::PageUp as i32),
    (Key::PageDown, glfw::Key::PageDown as i32),
    (Key::Home, glfw::Key::Home as i32),
    (Key::End, glfw::Key::End as i32),
    (Key::CapsLock, glfw::Key::CapsLock as i32),
    (Key::ScrollLock, glfw::Key::ScrollLock as i32),
    (Key::NumLock, glfw::Key::NumLock as i32),
    (Key::PrintScreen, glfw::Key::PrintScreen as i32),
    (Key::Pause, glfw::Key::Pause as i32),
    // function keys
    (Key::F1, glfw::Key::F1 as i32),
    (Key::F2, glfw::Key::F2 as i32),
    (Key::F3, glfw::Key::F3 as i32),
    (Key::F4, glfw::Key::F4 as i32),
    (Key::F5, glfw::Key::F5 as i32),
    (Key::F6, glfw::Key::F6 as i32),
    (Key::F7, glfw::Key::F7 as i32),
    (Key::F8, glfw::Key::F8 as i32),
    (Key::F9, glfw::Key::F9 as i32),
    (Key::F10, glfw::Key::F10 as i32),
    (Key::F11, glfw::Key::F11 as i32),
    (Key::F12, glfw::Key::F12 as i32),
    (Key::F13, glfw::Key::F13 as i32),
    (Key::F14, glfw::Key::F14 as i32),
    (Key::F15, glfw::Key::F15 as i32),
    (Key::F16, glfw::Key::F16 as i32),
    (Key::F17, glfw::Key::F17 as i32),
    (Key::F18, glfw::Key::F18 as i32),
    (Key::F19, glfw::Key::F19 as i32),
    (Key::F20, glfw::Key::F20 as i32),
    (Key::F21, glfw::Key::F21 as i32),
    (Key::F22, glfw::Key::F22 as i32),
    (Key::F23, glfw::Key::F23 as i32),
    (Key::F24, glfw::Key::F24 as i32),
    (Key::F25, glfw::Key::F25 as i32),
    // numpad keys
    (Key::Numpad0, glfw::Key::Kp0 as i32),
    (Key::Numpad1, glfw::Key::Kp1 as i32),
    (Key::Numpad2, glfw::Key::Kp2 as i32),
    (Key::Numpad3, glfw::Key::Kp3 as i32),
    (Key::Numpad4, glfw::Key::Kp4 as i32),
    (Key::Numpad5, glfw::Key::Kp5 as i32),
    (Key::Numpad6, glfw::Key::Kp6 as i32),
    (Key::Numpad7, glfw::Key::Kp7 as i32),
    (Key::Numpad8, glfw::Key::Kp8 as i32),
    (Key::Numpad9, glfw::Key::Kp9 as i32),
    (Key::NumpadDecimal, glfw::Key::KpDecimal as i32),
    (Key::NumpadDivide, glfw::Key::KpDivide as i32),
    (Key::NumpadMultiply, glfw::Key::KpMultiply as i32),
    (Key::NumpadSubtract, glfw::Key::KpSubtract as i32),
    (Key::NumpadAdd, glfw::Key::KpAdd as i32),
    (Key::NumpadEnter, glfw::Key::KpEnter as i32),
    (Key::NumpadEqual, glfw::Key::KpEqual as i32),
    // modifier keys
    (Key::LShift, glfw::Key::LeftShift as i32),
    (Key::LControl, glfw::Key::LeftControl as i32),
    (Key::LAlt, glfw::Key::LeftAlt as i32),
    (Key::LSuper, glfw::Key::LeftSuper as i32),
    (Key::RShift, glfw::Key::RightShift as i32),
    (Key::RControl, glfw::Key::RightControl as i32),
    (Key::RAlt, glfw::Key::RightAlt as i32),
    (Key::RSuper, glfw::Key::RightSuper as i32),
    (Key::Menu, glfw::Key::Menu as i32),
];

const MOUSE_ENTRIES: &[(MouseButton, i32)] = &[
    (MouseButton::Left, glfw::MouseButton::Button1 as i32),
    (MouseButton::Right, glfw::MouseButton::Button2 as i32),
    (MouseButton::Middle, glfw::MouseButton::Button3 as i32),
    (MouseButton::Button4, glfw::MouseButton::Button4 as i32),
    (MouseButton::Button5, glfw::MouseButton::Button5 as i32),
    (MouseButton::Button6, glfw::MouseButton::Button6 as i32),
    (MouseButton::Button7, glfw::MouseButton::Button7 as i32),
    (MouseButton::Button8, glfw::MouseButton::Button8 as i32),
];

static KEY_TABLE: Lazy<Lookup<Key>> = Lazy::new(|| Lookup::new(GLFW_KEY_MAX, KEY_ENTRIES));

static MOUSE_TABLE: Lazy<Lookup<MouseButton>> =
    Lazy::new(|| Lookup::new(GLFW_MOUSE_BUTTON_MAX, MOUSE_ENTRIES));

/// GLFW key code for a wrapper key; [`BACKEND_NONE`] if unmapped
pub fn key_to_glfw(key: Key) -> i32 {
    KEY_TABLE.to_backend(key)
}

/// Wrapper key for a GLFW key code; [`Key::Unknown`] if unmapped or out of range
pub fn key_from_glfw(code: i32) -> Key {
    KEY_TABLE.to_symbol(code)
}

/// GLFW button code for a wrapper mouse button; [`BACKEND_NONE`] if unmapped
pub fn mouse_button_to_glfw(button: MouseButton) -> i32 {
    MOUSE_TABLE.to_backend(button)
}

/// Wrapper mouse button for a GLFW button code; [`MouseButton::Unknown`] if
/// unmapped or out of range
pub fn mouse_button_from_glfw(code: i32) -> MouseButton {
    MOUSE_TABLE.to_symbol(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_entries_round_trip() {
        for &(key, code) in KEY_ENTRIES {
            assert_eq!(key_to_glfw(key), code, "forward mapping for {key:?}");
            if (0..=GLFW_KEY_MAX).contains(&code) {
                assert_eq!(key_from_glfw(code), key, "reverse mapping for {key:?}");
            }
        }
    }

    #[test]
    fn mouse_entries_round_trip() {
        for &(button, code) in MOUSE_ENTRIES {
            assert_eq!(mouse_button_to_glfw(button), code);
            assert_eq!(mouse_button_from_glfw(code), button);
        }
    }

    #[test]
    fn unknown_symbol_degrades_to_sentinel() {
        assert_eq!(key_to_glfw(Key::Unknown), BACKEND_NONE);
        assert_eq!(mouse_button_to_glfw(MouseButton::Unknown), BACKEND_NONE);
    }

    #[test]
    fn out_of_range_codes_degrade_without_indexing() {
        assert_eq!(key_from_glfw(-1), Key::Unknown);
        assert_eq!(key_from_glfw(GLFW_KEY_MAX + 1), Key::Unknown);
        assert_eq!(key_from_glfw(i32::MAX), Key::Unknown);
        assert_eq!(mouse_button_from_glfw(-7), MouseButton::Unknown);
        assert_eq!(mouse_button_from_glfw(99), MouseButton::Unknown);
    }

    #[test]
    fn unpopulated_in_range_code_is_unknown() {
        // GLFW code 1 is not a key GLFW ever reports
        assert_eq!(key_from_glfw(1), Key::Unknown);
    }

    #[test]
    fn every_valid_key_is_registered() {
        assert_eq!(KEY_ENTRIES.len(), super::super::KEY_COUNT);
        assert_eq!(MOUSE_ENTRIES.len(), super::super::MOUSE_BUTTON_COUNT);
    }

    #[test]
    #[should_panic(expected = "duplicate forward mapping")]
    fn duplicate_forward_entry_is_rejected() {
        let _ = Lookup::new(
            GLFW_MOUSE_BUTTON_MAX,
            &[
                (MouseButton::Left, 0),
                (MouseButton::Left, 1),
            ],
        );
    }

    #[test]
    #[should_panic(expected = "already mapped")]
    fn reverse_slot_collision_is_rejected() {
        let _ = Lookup::new(
            GLFW_MOUSE_BUTTON_MAX,
            &[
                (MouseButton::Left, 0),
                (MouseButton::Right, 0),
            ],
        );
    }
}
