//! Downstream Message Sinks
//!
//! The push side of the bridge. Delivery is fire-and-forget: the translator
//! calls [`MessageSink::send`] and never waits for or inspects the outcome.
//! Whether a full or closed sink blocks, drops or errors is the sink's own
//! contract.

use crate::input::error::{InputError, Result};
use crate::input::message::UiMessage;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// Receiver of translated messages
pub trait MessageSink {
    /// Attempt delivery of one message
    fn try_send(&self, msg: UiMessage) -> Result<()>;

    /// Fire-and-forget delivery; failures are logged and the message dropped
    fn send(&self, msg: UiMessage) {
        if let Err(e) = self.try_send(msg) {
            debug!("Dropping UI message: {}", e);
        }
    }
}

impl<S: MessageSink + ?Sized> MessageSink for &S {
    fn try_send(&self, msg: UiMessage) -> Result<()> {
        (**self).try_send(msg)
    }
}

impl<S: MessageSink + ?Sized> MessageSink for Arc<S> {
    fn try_send(&self, msg: UiMessage) -> Result<()> {
        (**self).try_send(msg)
    }
}

impl<S: MessageSink + ?Sized> MessageSink for Box<S> {
    fn try_send(&self, msg: UiMessage) -> Result<()> {
        (**self).try_send(msg)
    }
}

/// Async UI runtimes: never blocks the frame loop
impl MessageSink for tokio::sync::mpsc::UnboundedSender<UiMessage> {
    fn try_send(&self, msg: UiMessage) -> Result<()> {
        tokio::sync::mpsc::UnboundedSender::send(self, msg).map_err(|_| InputError::SinkClosed)
    }
}

/// Bounded tokio channels drop instead of blocking the frame loop
impl MessageSink for tokio::sync::mpsc::Sender<UiMessage> {
    fn try_send(&self, msg: UiMessage) -> Result<()> {
        tokio::sync::mpsc::Sender::try_send(self, msg).map_err(|e| match e {
            tokio::sync::mpsc::error::TrySendError::Full(_) => InputError::SinkFull,
            tokio::sync::mpsc::error::TrySendError::Closed(_) => InputError::SinkClosed,
        })
    }
}

/// Thread-based UI runtimes; a bounded channel blocks when full
impl MessageSink for crossbeam_channel::Sender<UiMessage> {
    fn try_send(&self, msg: UiMessage) -> Result<()> {
        crossbeam_channel::Sender::send(self, msg).map_err(|_| InputError::SinkClosed)
    }
}

/// In-memory sink that keeps every message
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<UiMessage>>,
}

impl RecordingSink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything received so far
    pub fn messages(&self) -> Vec<UiMessage> {
        self.messages.lock().clone()
    }

    /// Take everything received so far, leaving the sink empty
    pub fn drain(&self) -> Vec<UiMessage> {
        std::mem::take(&mut *self.messages.lock())
    }

    /// Number of messages received
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    /// True when nothing has been received
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl MessageSink for RecordingSink {
    fn try_send(&self, msg: UiMessage) -> Result<()> {
        self.messages.lock().push(msg);
        Ok(())
    }
}
