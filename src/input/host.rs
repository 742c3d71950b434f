//! Host-Facing Input Source
//!
//! The pull side of the bridge. A frame-based host answers two keyboard
//! queries through [`InputSource`] and hands mouse/window values to the
//! translator directly as [`MouseMotion`], [`MouseButtonInput`],
//! [`MouseWheel`] and [`WindowSize`].

use crate::input::edge::EdgeDetector;
use crate::input::keys::{PhysicalKey, PhysicalMouseButton};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Keyboard queries the translator makes once per frame
#[cfg_attr(test, mockall::automock)]
pub trait InputSource {
    /// Keys whose release was detected since the previous frame, in host order
    fn just_released_keys(&self) -> Vec<PhysicalKey>;

    /// Live "is this key held" query; must answer aggregate modifiers
    /// (`Shift`, `Control`, `Alt`, `Meta`) for either side
    fn is_key_pressed(&self, key: PhysicalKey) -> bool;
}

/// Absolute pointer position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseMotion {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

/// Mouse button transition reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseButtonInput {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
    /// Physical button
    pub button: PhysicalMouseButton,
    /// Pressed this tick (false means released this tick)
    #[serde(default)]
    pub just_pressed: bool,
}

/// Wheel movement reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouseWheel {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
    /// Signed vertical delta (positive = away from the user)
    pub dy: f64,
}

/// Window dimensions in logical units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Width
    pub width: u32,
    /// Height
    pub height: u32,
}

/// Owned keyboard state for one frame
///
/// Useful for hosts that collect their input up front, and for driving the
/// translator from recorded input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSnapshot {
    held: HashSet<PhysicalKey>,
    released: Vec<PhysicalKey>,
}

impl FrameSnapshot {
    /// Empty frame: nothing held, nothing released
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a held set and a released list
    pub fn from_parts<H, R>(held: H, released: R) -> Self
    where
        H: IntoIterator<Item = PhysicalKey>,
        R: IntoIterator<Item = PhysicalKey>,
    {
        Self {
            held: held.into_iter().collect(),
            released: released.into_iter().collect(),
        }
    }

    /// Mark a key as held
    pub fn hold(mut self, key: PhysicalKey) -> Self {
        self.held.insert(key);
        self
    }

    /// Append a key to the released list
    pub fn release(mut self, key: PhysicalKey) -> Self {
        self.released.push(key);
        self
    }

    /// Released keys in host order
    pub fn released(&self) -> &[PhysicalKey] {
        &self.released
    }
}

impl InputSource for FrameSnapshot {
    fn just_released_keys(&self) -> Vec<PhysicalKey> {
        self.released.clone()
    }

    fn is_key_pressed(&self, key: PhysicalKey) -> bool {
        self.held.contains(&key)
            || key
                .modifier_sides()
                .iter()
                .any(|side| self.held.contains(side))
    }
}

/// Adapter for hosts that only expose raw held state
///
/// Each call to [`PolledInput::next_frame`] diffs against the previous tick
/// to produce the released list the translator expects.
#[derive(Debug, Clone, Default)]
pub struct PolledInput {
    keys: EdgeDetector<PhysicalKey>,
    buttons: EdgeDetector<PhysicalMouseButton>,
}

impl PolledInput {
    /// Create an adapter with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick of keyboard state
    pub fn next_frame<I>(&mut self, held_now: I) -> FrameSnapshot
    where
        I: IntoIterator<Item = PhysicalKey>,
    {
        let held: HashSet<PhysicalKey> = held_now.into_iter().collect();
        let transitions = self.keys.advance(held.iter().copied());

        FrameSnapshot {
            held,
            released: transitions.released,
        }
    }

    /// Advance one tick of mouse button state
    ///
    /// Presses come first, then releases, each in button order.
    pub fn next_buttons<I>(&mut self, held_now: I, x: i32, y: i32) -> Vec<MouseButtonInput>
    where
        I: IntoIterator<Item = PhysicalMouseButton>,
    {
        let transitions = self.buttons.advance(held_now);

        let pressed = transitions.pressed.into_iter().map(|button| MouseButtonInput {
            x,
            y,
            button,
            just_pressed: true,
        });
        let released = transitions.released.into_iter().map(|button| MouseButtonInput {
            x,
            y,
            button,
            just_pressed: false,
        });

        pressed.chain(released).collect()
    }

    /// Forget all held state
    pub fn reset(&mut self) {
        self.keys.reset();
        self.buttons.reset();
    }
}
