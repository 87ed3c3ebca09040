use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{HostError, HostResult};

/// Read-only directory of packaged resources (images, fonts) addressed by relative name.
#[derive(Clone, Debug)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    /// Asset directory rooted at `root`. The directory is not touched until a load.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path for `name` after normalization.
    pub fn resolve(&self, name: &str) -> HostResult<PathBuf> {
        let rel = normalize_asset_name(name)?;
        Ok(rel.split('/').fold(self.root.clone(), |p, seg| p.join(seg)))
    }

    /// Read the whole resource `name`.
    pub fn load(&self, name: &str) -> HostResult<Vec<u8>> {
        let path = self.resolve(name)?;
        let bytes =
            std::fs::read(&path).with_context(|| format!("read asset '{}'", path.display()))?;
        tracing::debug!(name, bytes = bytes.len(), "loaded asset");
        Ok(bytes)
    }
}

/// Canonical `/`-separated form of an asset name.
///
/// Backslashes count as separators, empty and `.` segments vanish. Absolute names,
/// drive prefixes, and `..` are rejected.
pub fn normalize_asset_name(name: &str) -> HostResult<String> {
    let unified = name.replace('\\', "/");
    if unified.starts_with('/') {
        return Err(HostError::validation(format!(
            "asset name '{name}' must be relative"
        )));
    }

    let segments: Vec<&str> = unified
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect();
    if let Some(first) = segments.first()
        && first.contains(':')
    {
        return Err(HostError::validation(format!(
            "asset name '{name}' must be relative"
        )));
    }
    if segments.contains(&"..") {
        return Err(HostError::validation(format!(
            "asset name '{name}' must not contain '..'"
        )));
    }
    if segments.is_empty() {
        return Err(HostError::validation("asset name must contain a file name"));
    }
    Ok(segments.join("/"))
}

#[cfg(test)]
#[path = "../tests/unit/assets.rs"]
mod tests;
