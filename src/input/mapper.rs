//! Key and Button Mapping Tables
//!
//! Static host-key to UI-key and host-button to UI-button associations.
//! Both tables are plain lookup data built once per process and never mutated
//! afterwards, so any number of translators may read them concurrently.
//!
//! The key table is deliberately partial: letters, digits, common punctuation,
//! navigation, F1-F12 and basic editing keys. Numpad, media, lock and modifier
//! keys have no entry and translate to nothing.

use crate::input::keys::{PhysicalKey, PhysicalMouseButton};
use crate::input::message::{KeyType, MouseButton};
use std::collections::HashMap;
use std::sync::OnceLock;

/// One key table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMapping {
    /// Semantic key kind
    pub key_type: KeyType,
    /// Unshifted glyph, if the key produces text
    pub rune: Option<char>,
}

impl KeyMapping {
    const fn text(rune: char) -> Self {
        Self {
            key_type: KeyType::Runes,
            rune: Some(rune),
        }
    }

    const fn with_rune(key_type: KeyType, rune: char) -> Self {
        Self {
            key_type,
            rune: Some(rune),
        }
    }

    const fn control(key_type: KeyType) -> Self {
        Self {
            key_type,
            rune: None,
        }
    }

    /// Fresh copy of the default characters
    pub fn runes(&self) -> Vec<char> {
        self.rune.into_iter().collect()
    }
}

static KEY_TABLE: OnceLock<HashMap<PhysicalKey, KeyMapping>> = OnceLock::new();
static BUTTON_TABLE: OnceLock<HashMap<PhysicalMouseButton, MouseButton>> = OnceLock::new();

fn key_table() -> &'static HashMap<PhysicalKey, KeyMapping> {
    KEY_TABLE.get_or_init(build_key_table)
}

fn button_table() -> &'static HashMap<PhysicalMouseButton, MouseButton> {
    BUTTON_TABLE.get_or_init(build_button_table)
}

fn build_key_table() -> HashMap<PhysicalKey, KeyMapping> {
    use PhysicalKey::*;

    let mappings = [
        // Editing and navigation
        (Enter, KeyMapping::with_rune(KeyType::Enter, '\n')),
        (Tab, KeyMapping::with_rune(KeyType::Tab, '\t')),
        (Space, KeyMapping::with_rune(KeyType::Space, ' ')),
        (Backspace, KeyMapping::control(KeyType::Backspace)),
        (Delete, KeyMapping::control(KeyType::Delete)),
        (Home, KeyMapping::control(KeyType::Home)),
        (End, KeyMapping::control(KeyType::End)),
        (PageUp, KeyMapping::control(KeyType::PageUp)),
        (ArrowUp, KeyMapping::control(KeyType::Up)),
        (ArrowDown, KeyMapping::control(KeyType::Down)),
        (ArrowLeft, KeyMapping::control(KeyType::Left)),
        (ArrowRight, KeyMapping::control(KeyType::Right)),
        (Escape, KeyMapping::control(KeyType::Escape)),
        // Digits
        (Digit1, KeyMapping::text('1')),
        (Digit2, KeyMapping::text('2')),
        (Digit3, KeyMapping::text('3')),
        (Digit4, KeyMapping::text('4')),
        (Digit5, KeyMapping::text('5')),
        (Digit6, KeyMapping::text('6')),
        (Digit7, KeyMapping::text('7')),
        (Digit8, KeyMapping::text('8')),
        (Digit9, KeyMapping::text('9')),
        (Digit0, KeyMapping::text('0')),
        // Letters
        (A, KeyMapping::text('a')),
        (B, KeyMapping::text('b')),
        (C, KeyMapping::text('c')),
        (D, KeyMapping::text('d')),
        (E, KeyMapping::text('e')),
        (F, KeyMapping::text('f')),
        (G, KeyMapping::text('g')),
        (H, KeyMapping::text('h')),
        (I, KeyMapping::text('i')),
        (J, KeyMapping::text('j')),
        (K, KeyMapping::text('k')),
        (L, KeyMapping::text('l')),
        (M, KeyMapping::text('m')),
        (N, KeyMapping::text('n')),
        (O, KeyMapping::text('o')),
        (P, KeyMapping::text('p')),
        (Q, KeyMapping::text('q')),
        (R, KeyMapping::text('r')),
        (S, KeyMapping::text('s')),
        (T, KeyMapping::text('t')),
        (U, KeyMapping::text('u')),
        (V, KeyMapping::text('v')),
        (W, KeyMapping::text('w')),
        (X, KeyMapping::text('x')),
        (Y, KeyMapping::text('y')),
        (Z, KeyMapping::text('z')),
        // Punctuation (US layout, unshifted)
        (Comma, KeyMapping::text(',')),
        (Period, KeyMapping::text('.')),
        (Slash, KeyMapping::text('/')),
        (Backslash, KeyMapping::text('\\')),
        (Semicolon, KeyMapping::text(';')),
        (Apostrophe, KeyMapping::text('\'')),
        (GraveAccent, KeyMapping::text('`')),
        (Equal, KeyMapping::text('=')),
        (Minus, KeyMapping::text('-')),
        (LeftBracket, KeyMapping::text('[')),
        (RightBracket, KeyMapping::text(']')),
        // Function keys
        (F1, KeyMapping::control(KeyType::Function(1))),
        (F2, KeyMapping::control(KeyType::Function(2))),
        (F3, KeyMapping::control(KeyType::Function(3))),
        (F4, KeyMapping::control(KeyType::Function(4))),
        (F5, KeyMapping::control(KeyType::Function(5))),
        (F6, KeyMapping::control(KeyType::Function(6))),
        (F7, KeyMapping::control(KeyType::Function(7))),
        (F8, KeyMapping::control(KeyType::Function(8))),
        (F9, KeyMapping::control(KeyType::Function(9))),
        (F10, KeyMapping::control(KeyType::Function(10))),
        (F11, KeyMapping::control(KeyType::Function(11))),
        (F12, KeyMapping::control(KeyType::Function(12))),
    ];

    mappings.into_iter().collect()
}

fn build_button_table() -> HashMap<PhysicalMouseButton, MouseButton> {
    [
        (PhysicalMouseButton::Left, MouseButton::Left),
        (PhysicalMouseButton::Middle, MouseButton::Middle),
        (PhysicalMouseButton::Right, MouseButton::Right),
    ]
    .into_iter()
    .collect()
}

/// Read-only view over the static key table
#[derive(Debug, Clone, Copy)]
pub struct KeyMapper {
    table: &'static HashMap<PhysicalKey, KeyMapping>,
}

impl KeyMapper {
    /// Create a key mapper (builds the shared table on first use)
    pub fn new() -> Self {
        Self { table: key_table() }
    }

    /// Look up a physical key
    pub fn lookup(&self, key: PhysicalKey) -> Option<&'static KeyMapping> {
        self.table.get(&key)
    }

    /// Check if a key has a table entry
    pub fn is_mapped(&self, key: PhysicalKey) -> bool {
        self.table.contains_key(&key)
    }

    /// Number of table entries
    pub fn mapped_key_count(&self) -> usize {
        self.table.len()
    }

    /// All table entries, in key declaration order
    pub fn entries(&self) -> Vec<(PhysicalKey, KeyMapping)> {
        let mut entries: Vec<_> = self.table.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by_key(|(key, _)| *key);
        entries
    }
}

impl Default for KeyMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view over the static mouse button table
#[derive(Debug, Clone, Copy)]
pub struct ButtonMapper {
    table: &'static HashMap<PhysicalMouseButton, MouseButton>,
}

impl ButtonMapper {
    /// Create a button mapper (builds the shared table on first use)
    pub fn new() -> Self {
        Self {
            table: button_table(),
        }
    }

    /// Map a physical button; unmapped buttons yield [`MouseButton::None`]
    pub fn map_button(&self, button: PhysicalMouseButton) -> MouseButton {
        self.table.get(&button).copied().unwrap_or_default()
    }

    /// Check if a button has a table entry
    pub fn is_mapped(&self, button: PhysicalMouseButton) -> bool {
        self.table.contains_key(&button)
    }
}

impl Default for ButtonMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapper_creation() {
        let mapper = KeyMapper::new();
        // 13 editing/navigation + 10 digits + 26 letters + 11 punctuation + 12 function keys
        assert_eq!(mapper.mapped_key_count(), 72);
    }

    #[test]
    fn test_letter_mapping() {
        let mapper = KeyMapper::new();

        let a = mapper.lookup(PhysicalKey::A).unwrap();
        assert_eq!(a.key_type, KeyType::Runes);
        assert_eq!(a.rune, Some('a'));

        let z = mapper.lookup(PhysicalKey::Z).unwrap();
        assert_eq!(z.rune, Some('z'));
    }

    #[test]
    fn test_control_keys_carry_text() {
        let mapper = KeyMapper::new();

        assert_eq!(
            mapper.lookup(PhysicalKey::Enter),
            Some(&KeyMapping::with_rune(KeyType::Enter, '\n'))
        );
        assert_eq!(mapper.lookup(PhysicalKey::Tab).unwrap().rune, Some('\t'));
        assert_eq!(mapper.lookup(PhysicalKey::Space).unwrap().rune, Some(' '));
        assert_eq!(mapper.lookup(PhysicalKey::Backspace).unwrap().rune, None);
    }

    #[test]
    fn test_function_keys() {
        let mapper = KeyMapper::new();

        assert_eq!(
            mapper.lookup(PhysicalKey::F1).unwrap().key_type,
            KeyType::Function(1)
        );
        assert_eq!(
            mapper.lookup(PhysicalKey::F12).unwrap().key_type,
            KeyType::Function(12)
        );
        assert!(!mapper.is_mapped(PhysicalKey::F13));
    }

    #[test]
    fn test_partial_mapping() {
        let mapper = KeyMapper::new();

        assert!(!mapper.is_mapped(PhysicalKey::Numpad5));
        assert!(!mapper.is_mapped(PhysicalKey::PageDown));
        assert!(!mapper.is_mapped(PhysicalKey::Insert));
        assert!(!mapper.is_mapped(PhysicalKey::ShiftLeft));
        assert!(!mapper.is_mapped(PhysicalKey::Shift));
        assert!(!mapper.is_mapped(PhysicalKey::CapsLock));
    }

    #[test]
    fn test_runes_at_most_one_char() {
        let mapper = KeyMapper::new();

        for (key, mapping) in mapper.entries() {
            let runes = mapping.runes();
            assert!(runes.len() <= 1, "{:?} maps to {:?}", key, runes);
            if mapping.key_type == KeyType::Runes {
                assert_eq!(runes.len(), 1, "{:?} is a text key without text", key);
            }
        }
    }

    #[test]
    fn test_runes_returns_fresh_copy() {
        let mapper = KeyMapper::new();
        let mapping = mapper.lookup(PhysicalKey::Q).unwrap();

        let mut runes = mapping.runes();
        runes[0] = 'Q';

        assert_eq!(mapper.lookup(PhysicalKey::Q).unwrap().rune, Some('q'));
    }

    #[test]
    fn test_entries_sorted() {
        let entries = KeyMapper::new().entries();
        assert!(entries.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn test_button_mapping() {
        let mapper = ButtonMapper::new();

        assert_eq!(mapper.map_button(PhysicalMouseButton::Left), MouseButton::Left);
        assert_eq!(mapper.map_button(PhysicalMouseButton::Middle), MouseButton::Middle);
        assert_eq!(mapper.map_button(PhysicalMouseButton::Right), MouseButton::Right);
        assert_eq!(mapper.map_button(PhysicalMouseButton::Back), MouseButton::None);
        assert_eq!(mapper.map_button(PhysicalMouseButton::Forward), MouseButton::None);
        assert!(!mapper.is_mapped(PhysicalMouseButton::Back));
    }
}
