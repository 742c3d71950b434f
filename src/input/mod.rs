//! Input Event Translation
//!
//! Bridges a frame-based host that polls input ("is this key down right now")
//! and a message-driven UI runtime that consumes typed input messages.
//!
//! # Architecture
//!
//! ```text
//! Host frame loop
//!       ↓  InputSource + per-kind host values
//! ┌─────────────────────────┐
//! │  InputTranslator        │ ← Main coordinator
//! │  - Event routing        │
//! │  - Press suppression    │
//! └─────────────────────────┘
//!       ↓              ↓
//! ┌──────────┐   ┌──────────┐
//! │ Keyboard │   │  Mouse   │
//! │ Handler  │   │ Handler  │
//! └──────────┘   └──────────┘
//!       ↓              ↓
//! ┌──────────┐   ┌──────────┐
//! │   Key    │   │  Button  │
//! │  Table   │   │  Table   │
//! └──────────┘   └──────────┘
//!       ↓
//! MessageSink (UiMessage)
//! ```
//!
//! # Usage Example
//!
//! ```rust
//! use crt_input_bridge::input::{
//!     FrameSnapshot, InputTranslator, KeyType, PhysicalKey, RecordingSink, UiMessage,
//! };
//!
//! let translator = InputTranslator::with_defaults(RecordingSink::new());
//!
//! let frame = FrameSnapshot::new()
//!     .hold(PhysicalKey::ShiftLeft)
//!     .release(PhysicalKey::Q);
//! translator.handle_key_press(&frame);
//!
//! match translator.sink().messages().as_slice() {
//!     [UiMessage::Key(msg)] => {
//!         assert_eq!(msg.key_type, KeyType::Runes);
//!         assert_eq!(msg.runes, vec!['Q']);
//!     }
//!     other => panic!("unexpected messages: {:?}", other),
//! }
//! ```
//!
//! Hosts that only expose raw held state can drive the translator through
//! [`PolledInput`], which diffs consecutive ticks with an [`EdgeDetector`].

// Core modules
pub mod edge;
pub mod error;
pub mod host;
pub mod keyboard;
pub mod keys;
pub mod mapper;
pub mod message;
pub mod mouse;
pub mod sink;
pub mod translator;

// Re-export main types for convenience
pub use edge::{EdgeDetector, Transitions};
pub use error::{InputError, Result};
pub use host::{
    FrameSnapshot, InputSource, MouseButtonInput, MouseMotion, MouseWheel, PolledInput,
    WindowSize,
};
pub use keyboard::{KeyModifiers, KeyboardHandler};
pub use keys::{PhysicalKey, PhysicalMouseButton};
pub use mapper::{ButtonMapper, KeyMapper, KeyMapping};
pub use message::{
    KeyMsg, KeyType, MouseButton, MouseButtonMsg, MouseMotionMsg, MouseWheelMsg, UiMessage,
    WheelDirection, WindowSizeMsg,
};
pub use mouse::MouseHandler;
pub use sink::{MessageSink, RecordingSink};
pub use translator::{
    with_filter_mouse_pressed, HostInputEvent, InputTranslator, TranslatorOption,
    TranslatorOptions,
};
