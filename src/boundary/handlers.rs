//! Runtime callback indices registered for button clicks and ticks.

use std::collections::BTreeMap;

use crate::foundation::core::ElementId;

/// Index into the runtime's function table.
pub type CallbackIndex = u32;

/// Runtime callbacks registered through the boundary.
///
/// The registry only emits button ids; this table lets the runtime side map a
/// press (or a tick) back to the functions it asked to have called.
#[derive(Clone, Debug, Default)]
pub struct HandlerTable {
    on_click: BTreeMap<ElementId, CallbackIndex>,
    on_tick: Vec<CallbackIndex>,
}

impl HandlerTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route presses of `button` to `callback`, replacing any earlier registration.
    pub fn register_on_click(&mut self, button: ElementId, callback: CallbackIndex) {
        if let Some(prev) = self.on_click.insert(button, callback) {
            tracing::debug!(button, prev, callback, "replaced click handler");
        }
    }

    /// Append a tick callback. Callbacks run in registration order.
    pub fn register_on_tick(&mut self, callback: CallbackIndex) {
        self.on_tick.push(callback);
    }

    /// Callback registered for `button`, if any.
    pub fn click_handler(&self, button: ElementId) -> Option<CallbackIndex> {
        self.on_click.get(&button).copied()
    }

    /// Tick callbacks in registration order.
    pub fn tick_handlers(&self) -> &[CallbackIndex] {
        &self.on_tick
    }
}

#[cfg(test)]
#[path = "../../tests/unit/boundary/handlers.rs"]
mod tests;
