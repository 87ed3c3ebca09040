//! Recorded runtime sessions.
//!
//! A [`Script`] is a JSON list of [`HostCall`]s (plus optional settings) captured
//! from, or written in place of, a live runtime. A [`Session`] replays one against a
//! fresh [`GuiContext`], recording a per-call [`CallOutcome`] and every event the
//! host emitted. Failing calls are recorded and the replay continues, the same way
//! a live runtime sees an error result and carries on.

use std::path::Path;

use anyhow::Context as _;

use crate::{
    boundary::calls::{HostCall, HostReply, dispatch},
    boundary::events::{RecordingSink, RuntimeEvent},
    boundary::handlers::HandlerTable,
    config::HostSettings,
    foundation::error::{HostError, HostResult},
    registry::context::GuiContext,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Replayable list of boundary calls.
pub struct Script {
    /// Settings the session should run with; `None` defers to the caller.
    #[serde(default)]
    pub settings: Option<HostSettings>,
    /// Calls in order.
    pub calls: Vec<HostCall>,
}

impl Script {
    /// Parse and validate a script from JSON text.
    pub fn from_json_str(raw: &str) -> HostResult<Self> {
        let script: Script = serde_json::from_str(raw)?;
        script.validate()?;
        Ok(script)
    }

    /// Parse and validate a script file.
    pub fn from_json_file(path: &Path) -> HostResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read script '{}'", path.display()))?;
        Self::from_json_str(&raw)
    }

    /// Reject scripts that cannot produce anything.
    pub fn validate(&self) -> HostResult<()> {
        if self.calls.is_empty() {
            return Err(HostError::validation("script contains no calls"));
        }
        if let Some(settings) = &self.settings {
            settings.validate()?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// What happened to one replayed call.
pub struct CallOutcome {
    /// Position in the script.
    pub index: usize,
    /// Wire name of the call.
    pub call: &'static str,
    /// Reply, or the error's display string.
    pub result: Result<HostReply, String>,
}

impl CallOutcome {
    /// True if the call failed.
    pub fn is_err(&self) -> bool {
        self.result.is_err()
    }
}

/// A [`GuiContext`] plus everything a runtime would hold alongside it.
#[derive(Debug)]
pub struct Session {
    ctx: GuiContext,
    handlers: HandlerTable,
    events: RecordingSink,
    outcomes: Vec<CallOutcome>,
}

impl Session {
    /// Empty session with `settings`.
    pub fn new(settings: HostSettings) -> HostResult<Self> {
        let events = RecordingSink::new();
        let ctx = GuiContext::new(settings, events.clone())?;
        Ok(Self {
            ctx,
            handlers: HandlerTable::new(),
            events,
            outcomes: Vec::new(),
        })
    }

    /// Session configured by `script.settings`, or `fallback` when the script has none.
    pub fn for_script(script: &Script, fallback: HostSettings) -> HostResult<Self> {
        Self::new(script.settings.clone().unwrap_or(fallback))
    }

    /// Apply one call and record its outcome.
    pub fn apply(&mut self, call: HostCall) -> &CallOutcome {
        let index = self.outcomes.len();
        let name = call.name();
        let result = dispatch(&mut self.ctx, &mut self.handlers, call).map_err(|err| {
            tracing::warn!(index, call = name, error = %err, "call failed");
            err.to_string()
        });
        self.outcomes.push(CallOutcome {
            index,
            call: name,
            result,
        });
        &self.outcomes[index]
    }

    /// Apply every call of `script`.
    pub fn run(&mut self, script: &Script) {
        for call in &script.calls {
            self.apply(call.clone());
        }
    }

    /// Apply every call of `script`, handing each outcome to `observe`.
    ///
    /// An error from `observe` stops the replay; call failures do not.
    pub fn run_with<F>(&mut self, script: &Script, mut observe: F) -> HostResult<()>
    where
        F: FnMut(&GuiContext, &CallOutcome) -> HostResult<()>,
    {
        for call in &script.calls {
            self.apply(call.clone());
            if let Some(outcome) = self.outcomes.last() {
                observe(&self.ctx, outcome)?;
            }
        }
        Ok(())
    }

    /// The registry.
    pub fn context(&self) -> &GuiContext {
        &self.ctx
    }

    /// Callbacks registered so far.
    pub fn handlers(&self) -> &HandlerTable {
        &self.handlers
    }

    /// Events emitted so far.
    pub fn events(&self) -> Vec<RuntimeEvent> {
        self.events.events()
    }

    /// Outcomes in call order.
    pub fn outcomes(&self) -> &[CallOutcome] {
        &self.outcomes
    }

    /// Failed outcomes only.
    pub fn failures(&self) -> impl Iterator<Item = &CallOutcome> {
        self.outcomes.iter().filter(|o| o.is_err())
    }
}

#[cfg(test)]
#[path = "../tests/unit/script.rs"]
mod tests;
