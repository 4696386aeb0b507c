// src/models/export_stats.rs

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportStats {
    pub selected: u64,
    pub exported: u64,
    pub skipped: u64,
}

impl ExportStats {
    #[inline]
    #[must_use]
    pub const fn new(selected: u64) -> Self {
        Self {
            selected,
            exported: 0,
            skipped: 0,
        }
    }

    #[inline]
    pub const fn record_exported(&mut self) {
        self.exported = self.exported.saturating_add(1);
    }

    #[inline]
    pub const fn record_skipped(&mut self) {
        self.skipped = self.skipped.saturating_add(1);
    }
}
