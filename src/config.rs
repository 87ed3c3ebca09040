use std::{path::Path, time::Duration};

use anyhow::Context as _;

use crate::{
    foundation::core::Argb,
    foundation::error::{HostError, HostResult},
    registry::sprite::DEFAULT_MAX_SURFACE_DIM,
};

/// Default floor between two runtime ticks.
pub const DEFAULT_MIN_TICK_MS: u64 = 500;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Host-side tuning shared by the registry, the cadence driver, and the CLI.
pub struct HostSettings {
    /// Background painted before every canvas frame.
    pub clear_argb: Argb,
    /// Minimum spacing between tick starts, in milliseconds.
    pub min_tick_ms: u64,
    /// Upper bound for canvas and bitmap width/height.
    pub max_surface_dim: u32,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            clear_argb: Argb::BLACK,
            min_tick_ms: DEFAULT_MIN_TICK_MS,
            max_surface_dim: DEFAULT_MAX_SURFACE_DIM,
        }
    }
}

impl HostSettings {
    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> HostResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read settings '{}'", path.display()))?;
        let settings: HostSettings = serde_json::from_str(&raw)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply `SPRITEHOST_*` environment overrides. Unparseable values are ignored.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("SPRITEHOST_CLEAR_ARGB").and_then(|v| parse_argb(&v)) {
            self.clear_argb = v;
        }
        if let Some(v) = lookup("SPRITEHOST_MIN_TICK_MS").and_then(|v| v.parse::<u64>().ok()) {
            self.min_tick_ms = v;
        }
        if let Some(v) = lookup("SPRITEHOST_MAX_SURFACE_DIM")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|&n| n > 0)
        {
            self.max_surface_dim = v;
        }
        self
    }

    /// Reject settings the registry cannot work with.
    pub fn validate(&self) -> HostResult<()> {
        if self.max_surface_dim == 0 {
            return Err(HostError::validation("max_surface_dim must be > 0"));
        }
        Ok(())
    }

    /// Tick floor as a [`Duration`].
    pub fn min_tick(&self) -> Duration {
        Duration::from_millis(self.min_tick_ms)
    }
}

fn parse_argb(raw: &str) -> Option<Argb> {
    let raw = raw.trim();
    let parsed = match raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .or_else(|| raw.strip_prefix('#'))
    {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16).ok(),
        None => raw.parse::<u32>().ok(),
    };
    parsed.map(Argb)
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
