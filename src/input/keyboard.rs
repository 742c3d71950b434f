//! Keyboard Event Handling
//!
//! Turns released physical keys into [`KeyMsg`]s using the static key table,
//! the live modifier state, and the Ctrl+C interrupt rule.

use crate::input::host::InputSource;
use crate::input::keys::PhysicalKey;
use crate::input::mapper::KeyMapper;
use crate::input::message::KeyMsg;
use tracing::{debug, trace};

/// Keyboard modifiers relevant to translation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    /// Either Shift held
    pub shift: bool,
    /// Either Ctrl held
    pub ctrl: bool,
    /// Either Alt held
    pub alt: bool,
}

impl KeyModifiers {
    /// Read the modifier state live from the host
    pub fn query<S: InputSource + ?Sized>(source: &S) -> Self {
        Self {
            shift: source.is_key_pressed(PhysicalKey::Shift),
            ctrl: source.is_key_pressed(PhysicalKey::Control),
            alt: source.is_key_pressed(PhysicalKey::Alt),
        }
    }
}

/// Keyboard event handler
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardHandler {
    /// Key table view
    mapper: KeyMapper,
}

impl KeyboardHandler {
    /// Create a new keyboard handler
    pub fn new() -> Self {
        Self {
            mapper: KeyMapper::new(),
        }
    }

    /// Translate one released key under the given modifiers
    ///
    /// Returns `None` for keys without a table entry.
    pub fn translate_release(&self, key: PhysicalKey, modifiers: KeyModifiers) -> Option<KeyMsg> {
        if key == PhysicalKey::C && modifiers.ctrl {
            debug!("Key release: {:?} with ctrl -> interrupt", key);
            return Some(KeyMsg::interrupt());
        }

        let Some(mapping) = self.mapper.lookup(key) else {
            trace!("Key release: {:?} has no mapping", key);
            return None;
        };

        let mut runes = mapping.runes();
        if modifiers.shift {
            runes = runes.into_iter().flat_map(char::to_uppercase).collect();
        }

        let msg = KeyMsg {
            key_type: mapping.key_type,
            runes,
            alt: modifiers.alt,
        };

        debug!(
            "Key release: {:?} -> {:?} runes={:?} alt={}",
            key, msg.key_type, msg.runes, msg.alt
        );

        Some(msg)
    }

    /// Translate every key the host reports as released this frame
    ///
    /// Modifiers are queried from the host for each key; output preserves
    /// host order.
    pub fn translate_released<S: InputSource + ?Sized>(&self, source: &S) -> Vec<KeyMsg> {
        source
            .just_released_keys()
            .into_iter()
            .filter_map(|key| self.translate_release(key, KeyModifiers::query(source)))
            .collect()
    }

    /// Key table used by this handler
    pub fn mapper(&self) -> &KeyMapper {
        &self.mapper
    }
}
