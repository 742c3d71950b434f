//! UI Runtime Messages
//!
//! The vocabulary of the message-driven UI runtime. Every translation ends in
//! one of the five shapes wrapped by [`UiMessage`].

use serde::Serialize;
use std::fmt;

/// Semantic key kind understood by the UI runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeyType {
    /// Plain text; the characters travel in [`KeyMsg::runes`]
    Runes,
    /// Enter / Return
    Enter,
    /// Tab
    Tab,
    /// Space bar
    Space,
    /// Backspace
    Backspace,
    /// Forward delete
    Delete,
    /// Home
    Home,
    /// End
    End,
    /// Page Up
    PageUp,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Escape
    Escape,
    /// Function key N
    Function(u8),
    /// Interrupt (Ctrl+C)
    CtrlC,
}

impl KeyType {
    /// Name used by terminal UI runtimes when printing keys
    pub fn name(&self) -> String {
        match self {
            KeyType::Runes => "runes".to_string(),
            KeyType::Enter => "enter".to_string(),
            KeyType::Tab => "tab".to_string(),
            KeyType::Space => " ".to_string(),
            KeyType::Backspace => "backspace".to_string(),
            KeyType::Delete => "delete".to_string(),
            KeyType::Home => "home".to_string(),
            KeyType::End => "end".to_string(),
            KeyType::PageUp => "pgup".to_string(),
            KeyType::Up => "up".to_string(),
            KeyType::Down => "down".to_string(),
            KeyType::Left => "left".to_string(),
            KeyType::Right => "right".to_string(),
            KeyType::Escape => "esc".to_string(),
            KeyType::Function(n) => format!("f{}", n),
            KeyType::CtrlC => "ctrl+c".to_string(),
        }
    }
}

/// Key message (one per released key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyMsg {
    /// Semantic key kind
    pub key_type: KeyType,
    /// Characters produced; empty for non-text keys
    pub runes: Vec<char>,
    /// Alt was held when the key was released
    pub alt: bool,
}

impl KeyMsg {
    /// The interrupt message emitted for Ctrl+C
    pub fn interrupt() -> Self {
        Self {
            key_type: KeyType::CtrlC,
            runes: Vec::new(),
            alt: false,
        }
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt {
            f.write_str("alt+")?;
        }
        if self.key_type == KeyType::Runes {
            let text: String = self.runes.iter().collect();
            f.write_str(&text)
        } else {
            f.write_str(&self.key_type.name())
        }
    }
}

/// Logical mouse button
///
/// `None` is the zero value produced for host buttons without a mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum MouseButton {
    /// No logical button
    #[default]
    None,
    /// Left button
    Left,
    /// Middle button
    Middle,
    /// Right button
    Right,
}

/// Discrete wheel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WheelDirection {
    /// Wheel moved away from the user
    Up,
    /// Wheel moved toward the user
    Down,
}

impl WheelDirection {
    /// Direction for a signed vertical delta, `None` when the delta is zero
    pub fn from_delta(dy: f64) -> Option<Self> {
        if dy > 0.0 {
            Some(WheelDirection::Up)
        } else if dy < 0.0 {
            Some(WheelDirection::Down)
        } else {
            None
        }
    }
}

/// Pointer moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MouseMotionMsg {
    /// X coordinate (host space)
    pub x: i32,
    /// Y coordinate (host space)
    pub y: i32,
}

/// Mouse button event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MouseButtonMsg {
    /// X coordinate (host space)
    pub x: i32,
    /// Y coordinate (host space)
    pub y: i32,
    /// Logical button
    pub button: MouseButton,
    /// Alt held
    pub alt: bool,
    /// Ctrl held
    pub ctrl: bool,
}

/// Mouse wheel event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MouseWheelMsg {
    /// X coordinate (host space)
    pub x: i32,
    /// Y coordinate (host space)
    pub y: i32,
    /// Scroll direction
    pub direction: WheelDirection,
    /// Alt held
    pub alt: bool,
    /// Ctrl held
    pub ctrl: bool,
}

/// Window resized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowSizeMsg {
    /// Width in logical units
    pub width: u32,
    /// Height in logical units
    pub height: u32,
}

/// Message pushed to the UI runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiMessage {
    /// Key message
    Key(KeyMsg),
    /// Pointer motion
    MouseMotion(MouseMotionMsg),
    /// Mouse button
    MouseButton(MouseButtonMsg),
    /// Mouse wheel
    MouseWheel(MouseWheelMsg),
    /// Window size
    WindowSize(WindowSizeMsg),
}

impl From<KeyMsg> for UiMessage {
    fn from(msg: KeyMsg) -> Self {
        UiMessage::Key(msg)
    }
}

impl From<MouseMotionMsg> for UiMessage {
    fn from(msg: MouseMotionMsg) -> Self {
        UiMessage::MouseMotion(msg)
    }
}

impl From<MouseButtonMsg> for UiMessage {
    fn from(msg: MouseButtonMsg) -> Self {
        UiMessage::MouseButton(msg)
    }
}

impl From<MouseWheelMsg> for UiMessage {
    fn from(msg: MouseWheelMsg) -> Self {
        UiMessage::MouseWheel(msg)
    }
}

impl From<WindowSizeMsg> for UiMessage {
    fn from(msg: WindowSizeMsg) -> Self {
        UiMessage::WindowSize(msg)
    }
}

impl fmt::Display for UiMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiMessage::Key(msg) => write!(f, "key {}", msg),
            UiMessage::MouseMotion(msg) => write!(f, "motion ({}, {})", msg.x, msg.y),
            UiMessage::MouseButton(msg) => write!(
                f,
                "button {:?} ({}, {}) alt={} ctrl={}",
                msg.button, msg.x, msg.y, msg.alt, msg.ctrl
            ),
            UiMessage::MouseWheel(msg) => write!(
                f,
                "wheel {:?} ({}, {}) alt={} ctrl={}",
                msg.direction, msg.x, msg.y, msg.alt, msg.ctrl
            ),
            UiMessage::WindowSize(msg) => write!(f, "resize {}x{}", msg.width, msg.height),
        }
    }
}
