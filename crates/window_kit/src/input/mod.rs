//! Keyboard and mouse input model
//!
//! Defines the wrapper-level key and button vocabulary, the bidirectional
//! mapping to GLFW's native codes ([`lookup`]), and the double-buffered
//! [`InputState`] that derives pressed/released edges by comparing the
//! current cycle's state against the previous one.

pub mod lookup;

use crate::events::Event;

/// Keyboard keys
///
/// A closed enumeration with `Unknown` as the sentinel for unmapped backend
/// codes. The valid range `Space..=Menu` is contiguous and doubles as the
/// index space for key state arrays.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Unmapped or unrecognized key
    Unknown = -1,
    /// Space key
    Space = 0,
    /// Apostrophe key
    Apostrophe,
    /// Comma key
    Comma,
    /// Minus key
    Minus,
    /// Period key
    Period,
    /// Slash key
    Slash,
    /// Top-row 0 key
    Num0,
    /// Top-row 1 key
    Num1,
    /// Top-row 2 key
    Num2,
    /// Top-row 3 key
    Num3,
    /// Top-row 4 key
    Num4,
    /// Top-row 5 key
    Num5,
    /// Top-row 6 key
    Num6,
    /// Top-row 7 key
    Num7,
    /// Top-row 8 key
    Num8,
    /// Top-row 9 key
    Num9,
    /// Semicolon key
    Semicolon,
    /// Equal key
    Equal,
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Left bracket key
    LBracket,
    /// Backslash key
    Backslash,
    /// Right bracket key
    RBracket,
    /// Grave accent key
    Grave,
    /// Non-US key 1
    World1,
    /// Non-US key 2
    World2,
    /// Escape key
    Escape,
    /// Enter key
    Enter,
    /// Tab key
    Tab,
    /// Backspace key
    Backspace,
    /// Insert key
    Insert,
    /// Delete key
    Delete,
    /// Right arrow key
    Right,
    /// Left arrow key
    Left,
    /// Down arrow key
    Down,
    /// Up arrow key
    Up,
    /// Page up key
    PageUp,
    /// Page down key
    PageDown,
    /// Home key
    Home,
    /// End key
    End,
    /// Caps lock key
    CapsLock,
    /// Scroll lock key
    ScrollLock,
    /// Num lock key
    NumLock,
    /// Print screen key
    PrintScreen,
    /// Pause key
    Pause,
    /// F1 key
    F1,
    /// F2 key
    F2,
    /// F3 key
    F3,
    /// F4 key
    F4,
    /// F5 key
    F5,
    /// F6 key
    F6,
    /// F7 key
    F7,
    /// F8 key
    F8,
    /// F9 key
    F9,
    /// F10 key
    F10,
    /// F11 key
    F11,
    /// F12 key
    F12,
    /// F13 key
    F13,
    /// F14 key
    F14,
    /// F15 key
    F15,
    /// F16 key
    F16,
    /// F17 key
    F17,
    /// F18 key
    F18,
    /// F19 key
    F19,
    /// F20 key
    F20,
    /// F21 key
    F21,
    /// F22 key
    F22,
    /// F23 key
    F23,
    /// F24 key
    F24,
    /// F25 key
    F25,
    /// Numpad 0 key
    Numpad0,
    /// Numpad 1 key
    Numpad1,
    /// Numpad 2 key
    Numpad2,
    /// Numpad 3 key
    Numpad3,
    /// Numpad 4 key
    Numpad4,
    /// Numpad 5 key
    Numpad5,
    /// Numpad 6 key
    Numpad6,
    /// Numpad 7 key
    Numpad7,
    /// Numpad 8 key
    Numpad8,
    /// Numpad 9 key
    Numpad9,
    /// Numpad decimal key
    NumpadDecimal,
    /// Numpad divide key
    NumpadDivide,
    /// Numpad multiply key
    NumpadMultiply,
    /// Numpad subtract key
    NumpadSubtract,
    /// Numpad add key
    NumpadAdd,
    /// Numpad enter key
    NumpadEnter,
    /// Numpad equal key
    NumpadEqual,
    /// Left shift key
    LShift,
    /// Left control key
    LControl,
    /// Left alt key
    LAlt,
    /// Left super key
    LSuper,
    /// Right shift key
    RShift,
    /// Right control key
    RControl,
    /// Right alt key
    RAlt,
    /// Right super key
    RSuper,
    /// Menu key
    Menu,
}

/// Number of keyboard keys, excluding [`Key::Unknown`]
pub const KEY_COUNT: usize = Key::Menu as usize + 1;

/// Mouse buttons
///
/// `Unknown` is the sentinel for backend codes outside the mapped range.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Unmapped or unrecognized button
    Unknown = -1,
    /// The left mouse button
    Left = 0,
    /// The right mouse button
    Right,
    /// The middle (wheel) mouse button
    Middle,
    /// The first extra mouse button
    Button4,
    /// The second extra mouse button
    Button5,
    /// The third extra mouse button
    Button6,
    /// The fourth extra mouse button
    Button7,
    /// The fifth extra mouse button
    Button8,
}

/// Number of mouse buttons, excluding [`MouseButton::Unknown`]
pub const MOUSE_BUTTON_COUNT: usize = MouseButton::Button8 as usize + 1;

bitflags::bitflags! {
    /// Modifier keys held while an input notification was delivered
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        /// A shift key was held
        const SHIFT = 1 << 0;
        /// A control key was held
        const CONTROL = 1 << 1;
        /// An alt key was held
        const ALT = 1 << 2;
        /// A super (system) key was held
        const SUPER = 1 << 3;
    }
}

impl From<glfw::Modifiers> for Modifiers {
    fn from(mods: glfw::Modifiers) -> Self {
        let mut out = Self::empty();
        if mods.contains(glfw::Modifiers::Shift) {
            out |= Self::SHIFT;
        }
        if mods.contains(glfw::Modifiers::Control) {
            out |= Self::CONTROL;
        }
        if mods.contains(glfw::Modifiers::Alt) {
            out |= Self::ALT;
        }
        if mods.contains(glfw::Modifiers::Super) {
            out |= Self::SUPER;
        }
        out
    }
}

/// A closed input enumeration usable as a state-array index
///
/// The sentinel never yields an index, so it can never reach a state array
/// or a lookup slot.
pub(crate) trait Symbol: Copy + Eq + std::fmt::Debug + 'static {
    /// The sentinel value for unmapped codes
    const NONE: Self;
    /// Number of valid (non-sentinel) values
    const COUNT: usize;

    /// Array index of this value, `None` for the sentinel
    fn index(self) -> Option<usize>;
}

impl Symbol for Key {
    const NONE: Self = Self::Unknown;
    const COUNT: usize = KEY_COUNT;

    fn index(self) -> Option<usize> {
        let raw = self as i32;
        (raw >= 0).then(|| raw as usize)
    }
}

impl Symbol for MouseButton {
    const NONE: Self = Self::Unknown;
    const COUNT: usize = MOUSE_BUTTON_COUNT;

    fn index(self) -> Option<usize> {
        let raw = self as i32;
        (raw >= 0).then(|| raw as usize)
    }
}

/// Double-buffered keyboard and mouse state for one window
///
/// `previous` always reflects the state as of the end of the prior polling
/// cycle; `current` is mutated only while events are applied during the pump
/// phase, never by queries. Comparing the two buffers yields one-cycle-wide
/// pressed/released edges.
#[derive(Debug, Clone)]
pub struct InputState {
    keys: [bool; KEY_COUNT],
    prev_keys: [bool; KEY_COUNT],
    buttons: [bool; MOUSE_BUTTON_COUNT],
    prev_buttons: [bool; MOUSE_BUTTON_COUNT],
    cursor: (f64, f64),
    scroll: (f64, f64),
}

impl InputState {
    /// Create a state with nothing held and zeroed cursor/scroll
    pub fn new() -> Self {
        Self {
            keys: [false; KEY_COUNT],
            prev_keys: [false; KEY_COUNT],
            buttons: [false; MOUSE_BUTTON_COUNT],
            prev_buttons: [false; MOUSE_BUTTON_COUNT],
            cursor: (0.0, 0.0),
            scroll: (0.0, 0.0),
        }
    }

    /// Fold one event into the current-cycle state
    ///
    /// Key and button events toggle current bits, cursor moves overwrite the
    /// position (last write wins within a cycle), scroll offsets accumulate,
    /// and a focus loss force-clears both bitsets so keys cannot remain stuck
    /// when the platform stops delivering releases to an unfocused window.
    pub(crate) fn apply(&mut self, event: &Event) {
        match *event {
            Event::KeyPressed { key, .. } => {
                if let Some(idx) = key.index() {
                    self.keys[idx] = true;
                }
            }
            Event::KeyReleased { key, .. } => {
                if let Some(idx) = key.index() {
                    self.keys[idx] = false;
                }
            }
            Event::MouseButtonPressed { button, .. } => {
                if let Some(idx) = button.index() {
                    self.buttons[idx] = true;
                }
            }
            Event::MouseButtonReleased { button, .. } => {
                if let Some(idx) = button.index() {
                    self.buttons[idx] = false;
                }
            }
            Event::MouseMoved { x, y } => {
                self.cursor = (x, y);
            }
            Event::MouseWheelScrolled { delta_x, delta_y, .. } => {
                self.scroll.0 += delta_x;
                self.scroll.1 += delta_y;
            }
            Event::FocusLost => {
                self.keys = [false; KEY_COUNT];
                self.buttons = [false; MOUSE_BUTTON_COUNT];
            }
            _ => {}
        }
    }

    /// Start a new polling cycle
    ///
    /// Copies current state into the previous buffer and zeroes the scroll
    /// accumulator. Must run exactly once per cycle, before that cycle's
    /// notifications are applied.
    pub(crate) fn reset(&mut self) {
        self.prev_keys = self.keys;
        self.prev_buttons = self.buttons;
        self.scroll = (0.0, 0.0);
    }

    /// Whether the key is currently held
    pub fn is_key_down(&self, key: Key) -> bool {
        key.index().map_or(false, |idx| self.keys[idx])
    }

    /// Whether the key went down during the most recent cycle
    pub fn is_key_pressed(&self, key: Key) -> bool {
        key.index()
            .map_or(false, |idx| self.keys[idx] && !self.prev_keys[idx])
    }

    /// Whether the key went up during the most recent cycle
    pub fn is_key_released(&self, key: Key) -> bool {
        key.index()
            .map_or(false, |idx| !self.keys[idx] && self.prev_keys[idx])
    }

    /// Whether the mouse button is currently held
    pub fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        button.index().map_or(false, |idx| self.buttons[idx])
    }

    /// Whether the mouse button went down during the most recent cycle
    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        button
            .index()
            .map_or(false, |idx| self.buttons[idx] && !self.prev_buttons[idx])
    }

    /// Whether the mouse button went up during the most recent cycle
    pub fn is_mouse_button_released(&self, button: MouseButton) -> bool {
        button
            .index()
            .map_or(false, |idx| !self.buttons[idx] && self.prev_buttons[idx])
    }

    /// Last reported cursor position, in window coordinates
    pub fn cursor_position(&self) -> (f64, f64) {
        self.cursor
    }

    /// Scroll offsets accumulated during the most recent cycle
    pub fn scroll_delta(&self) -> (f64, f64) {
        self.scroll
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> Event {
        Event::KeyPressed {
            key,
            scancode: 0,
            modifiers: Modifiers::empty(),
        }
    }

    fn release(key: Key) -> Event {
        Event::KeyReleased {
            key,
            scancode: 0,
            modifiers: Modifiers::empty(),
        }
    }

    #[test]
    fn edge_detection_over_cycles() {
        let mut input = InputState::new();

        // cycle 1: nothing happened
        input.reset();
        assert!(!input.is_key_down(Key::W));
        assert!(!input.is_key_pressed(Key::W));

        // cycle 2: key goes down
        input.reset();
        input.apply(&press(Key::W));
        assert!(input.is_key_down(Key::W));
        assert!(input.is_key_pressed(Key::W));
        assert!(!input.is_key_released(Key::W));

        // cycle 3: still held, edge gone
        input.reset();
        assert!(input.is_key_down(Key::W));
        assert!(!input.is_key_pressed(Key::W));

        // cycle 4: key goes up
        input.reset();
        input.apply(&release(Key::W));
        assert!(!input.is_key_down(Key::W));
        assert!(input.is_key_released(Key::W));

        // cycle 5: released edge gone
        input.reset();
        assert!(!input.is_key_released(Key::W));
    }

    #[test]
    fn mouse_button_edges() {
        let mut input = InputState::new();

        input.reset();
        input.apply(&Event::MouseButtonPressed {
            button: MouseButton::Left,
            x: 0.0,
            y: 0.0,
            modifiers: Modifiers::empty(),
        });
        assert!(input.is_mouse_button_down(MouseButton::Left));
        assert!(input.is_mouse_button_pressed(MouseButton::Left));

        input.reset();
        input.apply(&Event::MouseButtonReleased {
            button: MouseButton::Left,
            x: 0.0,
            y: 0.0,
            modifiers: Modifiers::empty(),
        });
        assert!(input.is_mouse_button_released(MouseButton::Left));
        assert!(!input.is_mouse_button_down(MouseButton::Left));
    }

    #[test]
    fn focus_loss_clears_held_state() {
        let mut input = InputState::new();
        input.apply(&press(Key::A));
        input.apply(&press(Key::LShift));
        input.apply(&Event::MouseButtonPressed {
            button: MouseButton::Right,
            x: 0.0,
            y: 0.0,
            modifiers: Modifiers::empty(),
        });

        input.apply(&Event::FocusLost);
        assert!(!input.is_key_down(Key::A));
        assert!(!input.is_key_down(Key::LShift));
        assert!(!input.is_mouse_button_down(MouseButton::Right));
    }

    #[test]
    fn scroll_accumulates_then_resets_per_cycle() {
        let mut input = InputState::new();
        input.apply(&Event::MouseWheelScrolled {
            delta_x: 1.0,
            delta_y: 2.0,
            x: 0.0,
            y: 0.0,
        });
        input.apply(&Event::MouseWheelScrolled {
            delta_x: 3.0,
            delta_y: 4.0,
            x: 0.0,
            y: 0.0,
        });
        assert_eq!(input.scroll_delta(), (4.0, 6.0));

        input.reset();
        assert_eq!(input.scroll_delta(), (0.0, 0.0));
    }

    #[test]
    fn cursor_position_last_write_wins() {
        let mut input = InputState::new();
        input.apply(&Event::MouseMoved { x: 10.0, y: 20.0 });
        input.apply(&Event::MouseMoved { x: 30.0, y: 40.0 });
        assert_eq!(input.cursor_position(), (30.0, 40.0));

        // position survives the cycle boundary
        input.reset();
        assert_eq!(input.cursor_position(), (30.0, 40.0));
    }

    #[test]
    fn sentinel_symbols_never_report_state() {
        let input = InputState::new();
        assert!(!input.is_key_down(Key::Unknown));
        assert!(!input.is_key_pressed(Key::Unknown));
        assert!(!input.is_mouse_button_down(MouseButton::Unknown));
    }
}
