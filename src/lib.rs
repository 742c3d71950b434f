//! # crt-input-bridge
//!
//! Input bridge between a frame-based rendering host and a message-driven
//! terminal UI runtime.
//!
//! The host polls input every frame ("is this key down right now"); the UI
//! runtime consumes discrete, typed messages ("a key was pressed"). This crate
//! sits in between:
//!
//! - [`input`] - key/button tables, modifier composition, press suppression
//!   and the [`InputTranslator`](input::InputTranslator) itself
//! - [`config`] - TOML configuration with CLI overrides
//! - [`replay`] - drives the translator from recorded frames
//! - [`utils`] - user-facing error formatting
//!
//! # Data Flow
//!
//! ```text
//! Host frame loop → InputSource / host values → InputTranslator → MessageSink → UI runtime
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Bridge configuration
pub mod config;

/// Input event translation
pub mod input;

/// Recorded input replay
pub mod replay;

/// Utility functions
pub mod utils;
