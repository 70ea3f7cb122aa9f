use std::collections::VecDeque;

use uuid::Uuid;

use crate::preset::GeneratedPreset;

/// Presets kept for display by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 3;

/// Bounded preset history, most recent first.
#[derive(Debug, Clone)]
pub struct PresetHistory {
    entries: VecDeque<GeneratedPreset>,
    limit: usize,
}

impl PresetHistory {
    /// A history keeping at most `limit` presets (at least one).
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Record a preset, evicting the oldest past the limit.
    pub fn push(&mut self, preset: GeneratedPreset) {
        self.entries.push_front(preset);
        self.entries.truncate(self.limit);
    }

    pub fn latest(&self) -> Option<&GeneratedPreset> {
        self.entries.front()
    }

    /// Every entry but the latest.
    pub fn previous(&self) -> impl Iterator<Item = &GeneratedPreset> {
        self.entries.iter().skip(1)
    }

    pub fn get(&self, id: Uuid) -> Option<&GeneratedPreset> {
        self.entries.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedPreset> {
        self.entries.iter()
    }

    /// Owned copy, most recent first.
    pub fn to_vec(&self) -> Vec<GeneratedPreset> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for PresetHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
