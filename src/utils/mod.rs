//! Utility Functions
//!
//! User-friendly error formatting for the replay binary.
//!
//! ```rust
//! use crt_input_bridge::utils::format_user_error;
//!
//! let error = anyhow::anyhow!("Invalid log level: loud").context("Failed to load config");
//! eprintln!("{}", format_user_error(&error));
//! ```

pub mod errors;

pub use errors::format_user_error;
