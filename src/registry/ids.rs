use crate::foundation::core::{ElementId, ElementKind};

/// Per-category monotonic id source.
///
/// Every category starts at `1` and only ever counts up; removed elements never
/// give their id back. Bitmap and text sprites share the [`ElementKind::Sprite`]
/// counter because both live in one sprite table.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    last: [ElementId; 4],
}

impl IdAllocator {
    /// Fresh allocator with every category unused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id for `kind`.
    pub fn next(&mut self, kind: ElementKind) -> ElementId {
        let slot = &mut self.last[kind.slot()];
        // 32-bit range is assumed to suffice for one registry lifetime.
        *slot += 1;
        *slot
    }

    /// Last id issued for `kind`, or `0` if none yet.
    pub fn peek(&self, kind: ElementKind) -> ElementId {
        self.last[kind.slot()]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/ids.rs"]
mod tests;
