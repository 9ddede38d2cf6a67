use std::collections::BTreeMap;

use super::{WindowId, WindowRecord};

/// Single source of truth for all open windows.
///
/// Records are keyed by id; ids are handed out by the manager and never
/// reused, so a removed id stays dead forever.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: BTreeMap<WindowId, WindowRecord>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: WindowRecord) {
        self.windows.insert(record.id, record);
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.get(&id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.get_mut(&id)
    }

    pub fn remove(&mut self, id: WindowId) -> Option<WindowRecord> {
        self.windows.remove(&id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut WindowRecord> {
        self.windows.values_mut()
    }

    /// Ids of all open windows ordered bottom to top by stacking order.
    pub fn ids_by_z(&self) -> Vec<WindowId> {
        let mut ids: Vec<(u64, WindowId)> = self
            .windows
            .values()
            .map(|record| (record.z_index, record.id))
            .collect();
        ids.sort_unstable();
        ids.into_iter().map(|(_, id)| id).collect()
    }

    /// Topmost window whose z-index is highest among those passing `keep`.
    pub fn topmost_where<F>(&self, mut keep: F) -> Option<WindowId>
    where
        F: FnMut(&WindowRecord) -> bool,
    {
        self.windows
            .values()
            .filter(|record| keep(record))
            .max_by_key(|record| record.z_index)
            .map(|record| record.id)
    }
}
