use std::sync::{Arc, Mutex, mpsc};

use crate::foundation::core::ElementId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
/// Notification travelling from the host toward the runtime.
pub enum RuntimeEvent {
    /// A button was activated by the toolkit (`onButtonPress(id)`).
    ButtonPress {
        /// Button id.
        id: ElementId,
    },
}

/// Outbound delivery seam. Implementations decide how events reach the runtime.
///
/// Delivery is synchronous. An `Err` is logged by the caller and never feeds back
/// into registry state.
pub trait EventSink: Send {
    /// Hand one event to the runtime side.
    fn deliver(&mut self, event: RuntimeEvent) -> anyhow::Result<()>;
}

impl<F> EventSink for F
where
    F: FnMut(RuntimeEvent) -> anyhow::Result<()> + Send,
{
    fn deliver(&mut self, event: RuntimeEvent) -> anyhow::Result<()> {
        self(event)
    }
}

/// Sink that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn deliver(&mut self, _event: RuntimeEvent) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Sink forwarding into a std channel (e.g. to a runtime thread).
#[derive(Debug)]
pub struct ChannelSink {
    tx: mpsc::Sender<RuntimeEvent>,
}

impl ChannelSink {
    /// Sink plus the receiving end the runtime drains.
    pub fn new() -> (Self, mpsc::Receiver<RuntimeEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelSink {
    fn deliver(&mut self, event: RuntimeEvent) -> anyhow::Result<()> {
        self.tx
            .send(event)
            .map_err(|_| anyhow::anyhow!("runtime event channel closed"))
    }
}

/// Sink that keeps every event in memory. Clones share one log.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<RuntimeEvent>>>,
}

impl RecordingSink {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far.
    pub fn events(&self) -> Vec<RuntimeEvent> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventSink for RecordingSink {
    fn deliver(&mut self, event: RuntimeEvent) -> anyhow::Result<()> {
        self.events
            .lock()
            .map_err(|_| anyhow::anyhow!("event log poisoned"))?
            .push(event);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/boundary/events.rs"]
mod tests;
