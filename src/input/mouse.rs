//! Mouse Event Handling
//!
//! Handles pointer motion, button transitions and wheel movement, including
//! the press-suppression policy.

use crate::input::host::{MouseButtonInput, MouseMotion, MouseWheel};
use crate::input::keyboard::KeyModifiers;
use crate::input::mapper::ButtonMapper;
use crate::input::message::{MouseButtonMsg, MouseMotionMsg, MouseWheelMsg, WheelDirection};
use tracing::{debug, trace};

/// Mouse event handler
#[derive(Debug, Clone, Copy)]
pub struct MouseHandler {
    /// Button table view
    mapper: ButtonMapper,

    /// Drop fresh presses so one click yields one (release) message
    filter_mouse_pressed: bool,
}

impl MouseHandler {
    /// Create a new mouse handler
    pub fn new(filter_mouse_pressed: bool) -> Self {
        Self {
            mapper: ButtonMapper::new(),
            filter_mouse_pressed,
        }
    }

    /// Translate pointer motion (always produces a message, no modifiers)
    pub fn translate_motion(&self, motion: MouseMotion) -> MouseMotionMsg {
        trace!("Mouse motion: ({}, {})", motion.x, motion.y);

        MouseMotionMsg {
            x: motion.x,
            y: motion.y,
        }
    }

    /// Translate a button transition
    ///
    /// Returns `None` when the press is suppressed. Unmapped buttons produce a
    /// message carrying [`MouseButton::None`](crate::input::message::MouseButton::None).
    pub fn translate_button(
        &self,
        input: MouseButtonInput,
        modifiers: KeyModifiers,
    ) -> Option<MouseButtonMsg> {
        // The UI runtime reports a click for both press and release; keeping
        // only the release leaves one message per click.
        if self.filter_mouse_pressed && input.just_pressed {
            trace!("Mouse press suppressed: {:?}", input.button);
            return None;
        }

        let button = self.mapper.map_button(input.button);

        debug!(
            "Mouse button {}: {:?} -> {:?} at ({}, {})",
            if input.just_pressed { "down" } else { "up" },
            input.button,
            button,
            input.x,
            input.y
        );

        Some(MouseButtonMsg {
            x: input.x,
            y: input.y,
            button,
            alt: modifiers.alt,
            ctrl: modifiers.ctrl,
        })
    }

    /// Translate wheel movement; a zero delta produces nothing
    pub fn translate_wheel(&self, wheel: MouseWheel, modifiers: KeyModifiers) -> Option<MouseWheelMsg> {
        let Some(direction) = WheelDirection::from_delta(wheel.dy) else {
            trace!("Mouse wheel: zero delta ignored");
            return None;
        };

        debug!("Mouse wheel: dy={} -> {:?}", wheel.dy, direction);

        Some(MouseWheelMsg {
            x: wheel.x,
            y: wheel.y,
            direction,
            alt: modifiers.alt,
            ctrl: modifiers.ctrl,
        })
    }

    /// Whether fresh presses are dropped
    pub fn filters_mouse_pressed(&self) -> bool {
        self.filter_mouse_pressed
    }
}

impl Default for MouseHandler {
    fn default() -> Self {
        Self::new(true)
    }
}
