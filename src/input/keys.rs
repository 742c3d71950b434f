//! Host Key and Button Identities
//!
//! Physical key and mouse button identifiers as reported by a frame-based
//! rendering host. These are the "from" side of the mapping tables in
//! [`crate::input::mapper`].

use crate::input::error::{InputError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! physical_keys {
    ($($name:ident),+ $(,)?) => {
        /// Physical keyboard key as reported by the host.
        ///
        /// Ordering follows declaration order, which keeps edge-detection output
        /// deterministic. `Shift`, `Control`, `Alt` and `Meta` are aggregate
        /// keys: hosts answer "is held" for either side, but never report them
        /// in a released-keys list.
        #[allow(missing_docs)]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(try_from = "String")]
        pub enum PhysicalKey {
            $($name,)+
        }

        impl PhysicalKey {
            /// Every physical key, in declaration order
            pub const ALL: &'static [PhysicalKey] = &[$(PhysicalKey::$name,)+];

            /// Variant name, as accepted by [`FromStr`]
            pub fn name(&self) -> &'static str {
                match self {
                    $(PhysicalKey::$name => stringify!($name),)+
                }
            }
        }
    };
}

physical_keys! {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,
    Apostrophe, Backslash, Comma, Equal, GraveAccent, LeftBracket, Minus,
    Period, RightBracket, Semicolon, Slash, IntlBackslash,
    Space, Enter, Tab, Backspace, Delete, Insert, Escape,
    Home, End, PageUp, PageDown,
    ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,
    ShiftLeft, ShiftRight, ControlLeft, ControlRight,
    AltLeft, AltRight, MetaLeft, MetaRight,
    CapsLock, NumLock, ScrollLock, PrintScreen, Pause, ContextMenu,
    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,
    NumpadAdd, NumpadSubtract, NumpadMultiply, NumpadDivide,
    NumpadDecimal, NumpadEnter, NumpadEqual,
    Shift, Control, Alt, Meta,
}

impl PhysicalKey {
    /// True for the aggregate modifier queries (`Shift`, `Control`, `Alt`, `Meta`)
    pub fn is_aggregate_modifier(&self) -> bool {
        matches!(
            self,
            PhysicalKey::Shift | PhysicalKey::Control | PhysicalKey::Alt | PhysicalKey::Meta
        )
    }

    /// Left/right keys that satisfy an aggregate modifier query
    pub fn modifier_sides(&self) -> &'static [PhysicalKey] {
        match self {
            PhysicalKey::Shift => &[PhysicalKey::ShiftLeft, PhysicalKey::ShiftRight],
            PhysicalKey::Control => &[PhysicalKey::ControlLeft, PhysicalKey::ControlRight],
            PhysicalKey::Alt => &[PhysicalKey::AltLeft, PhysicalKey::AltRight],
            PhysicalKey::Meta => &[PhysicalKey::MetaLeft, PhysicalKey::MetaRight],
            _ => &[],
        }
    }
}

impl fmt::Display for PhysicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PhysicalKey {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        PhysicalKey::ALL
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InputError::UnknownKeyName(s.to_string()))
    }
}

impl TryFrom<String> for PhysicalKey {
    type Error = InputError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Physical mouse button as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum PhysicalMouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
    /// Wheel button
    Middle,
    /// Side button (browser back)
    Back,
    /// Side button (browser forward)
    Forward,
}

impl PhysicalMouseButton {
    /// Every physical button
    pub const ALL: &'static [PhysicalMouseButton] = &[
        PhysicalMouseButton::Left,
        PhysicalMouseButton::Right,
        PhysicalMouseButton::Middle,
        PhysicalMouseButton::Back,
        PhysicalMouseButton::Forward,
    ];
}

impl FromStr for PhysicalMouseButton {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(PhysicalMouseButton::Left),
            "right" => Ok(PhysicalMouseButton::Right),
            "middle" => Ok(PhysicalMouseButton::Middle),
            "back" => Ok(PhysicalMouseButton::Back),
            "forward" => Ok(PhysicalMouseButton::Forward),
            _ => Err(InputError::UnknownButtonName(s.to_string())),
        }
    }
}

impl TryFrom<String> for PhysicalMouseButton {
    type Error = InputError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_round_trip() {
        for key in PhysicalKey::ALL {
            assert_eq!(key.name().parse::<PhysicalKey>().unwrap(), *key);
        }
    }

    #[test]
    fn test_key_parse_case_insensitive() {
        assert_eq!("a".parse::<PhysicalKey>().unwrap(), PhysicalKey::A);
        assert_eq!(" pageup ".parse::<PhysicalKey>().unwrap(), PhysicalKey::PageUp);
        assert_eq!("SHIFTLEFT".parse::<PhysicalKey>().unwrap(), PhysicalKey::ShiftLeft);
    }

    #[test]
    fn test_unknown_key_name() {
        match "hyper".parse::<PhysicalKey>() {
            Err(InputError::UnknownKeyName(name)) => assert_eq!(name, "hyper"),
            other => panic!("Expected UnknownKeyName, got {:?}", other),
        }
    }

    #[test]
    fn test_declaration_order() {
        assert!(PhysicalKey::A < PhysicalKey::B);
        assert!(PhysicalKey::Z < PhysicalKey::Digit0);
        assert_eq!(PhysicalKey::ALL.first(), Some(&PhysicalKey::A));
        assert_eq!(PhysicalKey::ALL.last(), Some(&PhysicalKey::Meta));
    }

    #[test]
    fn test_modifier_sides() {
        assert!(PhysicalKey::Shift.is_aggregate_modifier());
        assert!(!PhysicalKey::ShiftLeft.is_aggregate_modifier());
        assert_eq!(
            PhysicalKey::Control.modifier_sides(),
            &[PhysicalKey::ControlLeft, PhysicalKey::ControlRight]
        );
        assert!(PhysicalKey::A.modifier_sides().is_empty());
    }

    #[test]
    fn test_button_parse() {
        assert_eq!(
            "Middle".parse::<PhysicalMouseButton>().unwrap(),
            PhysicalMouseButton::Middle
        );
        assert!("wheel".parse::<PhysicalMouseButton>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let keys: Vec<PhysicalKey> = serde_json::from_str(r#"["enter", "ShiftLeft", "f5"]"#).unwrap();
        assert_eq!(
            keys,
            vec![PhysicalKey::Enter, PhysicalKey::ShiftLeft, PhysicalKey::F5]
        );
        assert_eq!(serde_json::to_string(&PhysicalKey::PageUp).unwrap(), r#""PageUp""#);

        let err = serde_json::from_str::<PhysicalKey>(r#""Hyper""#).unwrap_err();
        assert!(err.to_string().contains("Unknown key name: Hyper"));

        let button: PhysicalMouseButton = serde_json::from_str(r#""left""#).unwrap();
        assert_eq!(button, PhysicalMouseButton::Left);
    }
}
