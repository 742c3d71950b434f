//! Input Event Translator
//!
//! Top-level coordinator: called by the host loop once per frame for each kind
//! of input, it translates what the host reports and pushes the resulting
//! [`UiMessage`]s to a [`MessageSink`].

use crate::input::host::{InputSource, MouseButtonInput, MouseMotion, MouseWheel, WindowSize};
use crate::input::keyboard::{KeyModifiers, KeyboardHandler};
use crate::input::keys::PhysicalKey;
use crate::input::message::{UiMessage, WindowSizeMsg};
use crate::input::mouse::MouseHandler;
use crate::input::sink::MessageSink;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

/// Translator settings, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorOptions {
    /// Drop mouse button presses and only forward releases
    pub filter_mouse_pressed: bool,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            filter_mouse_pressed: true,
        }
    }
}

impl TranslatorOptions {
    /// Defaults with the given option mutators applied in order
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = TranslatorOption>,
    {
        let mut settings = Self::default();
        for option in options {
            option(&mut settings);
        }
        settings
    }
}

/// Construction-time option mutator
pub type TranslatorOption = Box<dyn FnOnce(&mut TranslatorOptions) + Send>;

/// Only forward mouse button releases when `filter` is true (the default)
pub fn with_filter_mouse_pressed(filter: bool) -> TranslatorOption {
    Box::new(move |options: &mut TranslatorOptions| options.filter_mouse_pressed = filter)
}

/// Host input, tagged by kind
#[derive(Debug, Clone, PartialEq)]
pub enum HostInputEvent {
    /// Poll the source for released keys
    KeysReleased,
    /// Pointer moved
    MouseMotion(MouseMotion),
    /// Mouse button transition
    MouseButton(MouseButtonInput),
    /// Wheel movement
    MouseWheel(MouseWheel),
    /// Window resized
    WindowSize(WindowSize),
}

/// Input event translator
pub struct InputTranslator<S> {
    /// Downstream sink
    sink: S,

    /// Settings
    options: TranslatorOptions,

    /// Keyboard event handler
    keyboard: KeyboardHandler,

    /// Mouse event handler
    mouse: MouseHandler,

    /// Messages pushed to the sink
    events_emitted: AtomicU64,
}

impl<S: MessageSink> InputTranslator<S> {
    /// Create a translator, applying option mutators in order
    pub fn new<I>(sink: S, options: I) -> Self
    where
        I: IntoIterator<Item = TranslatorOption>,
    {
        let options = TranslatorOptions::from_options(options);
        debug!("Input translator created: {:?}", options);

        Self {
            sink,
            options,
            keyboard: KeyboardHandler::new(),
            mouse: MouseHandler::new(options.filter_mouse_pressed),
            events_emitted: AtomicU64::new(0),
        }
    }

    /// Create a translator with default options
    pub fn with_defaults(sink: S) -> Self {
        Self::new(sink, Vec::new())
    }

    /// Route a tagged host event; returns the number of messages pushed
    pub fn handle_event<I: InputSource + ?Sized>(&self, event: HostInputEvent, source: &I) -> usize {
        match event {
            HostInputEvent::KeysReleased => self.handle_key_press(source),
            HostInputEvent::MouseMotion(motion) => self.handle_mouse_motion(motion),
            HostInputEvent::MouseButton(button) => self.handle_mouse_button(button, source),
            HostInputEvent::MouseWheel(wheel) => self.handle_mouse_wheel(wheel, source),
            HostInputEvent::WindowSize(size) => self.handle_window_size(size),
        }
    }

    /// Translate every key released since the last frame
    pub fn handle_key_press<I: InputSource + ?Sized>(&self, source: &I) -> usize {
        let messages = self.keyboard.translate_released(source);
        let emitted = messages.len();

        for msg in messages {
            self.emit(msg.into());
        }

        emitted
    }

    /// Translate pointer motion
    pub fn handle_mouse_motion(&self, motion: MouseMotion) -> usize {
        self.emit(self.mouse.translate_motion(motion).into());
        1
    }

    /// Translate a mouse button transition
    pub fn handle_mouse_button<I: InputSource + ?Sized>(
        &self,
        input: MouseButtonInput,
        source: &I,
    ) -> usize {
        // Suppressed presses never touch the host
        if self.options.filter_mouse_pressed && input.just_pressed {
            trace!("Mouse press suppressed: {:?}", input.button);
            return 0;
        }

        match self.mouse.translate_button(input, KeyModifiers::query(source)) {
            Some(msg) => {
                self.emit(msg.into());
                1
            }
            None => 0,
        }
    }

    /// Translate wheel movement
    pub fn handle_mouse_wheel<I: InputSource + ?Sized>(&self, wheel: MouseWheel, source: &I) -> usize {
        match self.mouse.translate_wheel(wheel, KeyModifiers::query(source)) {
            Some(msg) => {
                self.emit(msg.into());
                1
            }
            None => 0,
        }
    }

    /// Forward a window resize unchanged
    pub fn handle_window_size(&self, size: WindowSize) -> usize {
        debug!("Window size: {}x{}", size.width, size.height);

        self.emit(UiMessage::WindowSize(WindowSizeMsg {
            width: size.width,
            height: size.height,
        }));
        1
    }

    fn emit(&self, msg: UiMessage) {
        self.events_emitted.fetch_add(1, Ordering::Relaxed);
        self.sink.send(msg);
    }

    /// Settings in effect
    pub fn options(&self) -> TranslatorOptions {
        self.options
    }

    /// Total messages pushed to the sink
    pub fn events_emitted(&self) -> u64 {
        self.events_emitted.load(Ordering::Relaxed)
    }

    /// Downstream sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Check whether a key has a translation
    pub fn is_key_mapped(&self, key: PhysicalKey) -> bool {
        key == PhysicalKey::C || self.keyboard.mapper().is_mapped(key)
    }
}
