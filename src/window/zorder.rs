use super::{WindowId, WindowRecord};

/// Stacking-order allocator and active-window tracker.
///
/// The counter only ever moves forward for the lifetime of the manager, even
/// as windows close. Never compacting the range keeps every live z-index
/// unambiguous without renumbering on close.
#[derive(Debug)]
pub struct ZOrder {
    next: u64,
    active: Option<WindowId>,
}

impl Default for ZOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl ZOrder {
    pub fn new() -> Self {
        Self {
            next: 1,
            active: None,
        }
    }

    /// Hand out a stacking value strictly greater than every value handed
    /// out before.
    pub fn next_z(&mut self) -> u64 {
        let z = self.next;
        self.next += 1;
        z
    }

    /// Raise the record to the top of the stack and mark it active.
    pub fn focus(&mut self, record: &mut WindowRecord) {
        record.z_index = self.next_z();
        self.active = Some(record.id);
    }

    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    pub fn set_active(&mut self, id: Option<WindowId>) {
        self.active = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::WinRect;
    use crate::window::WindowOptions;

    #[test]
    fn next_z_is_strictly_increasing() {
        let mut z = ZOrder::new();
        let mut last = 0;
        for _ in 0..100 {
            let next = z.next_z();
            assert!(next > last);
            last = next;
        }
    }

    #[test]
    fn focus_assigns_top_z_and_tracks_active() {
        let mut z = ZOrder::new();
        let mut a = WindowRecord::new(
            WindowId::new(1),
            WinRect::new(0, 0, 10, 5),
            z.next_z(),
            WindowOptions::new("a"),
        );
        let mut b = WindowRecord::new(
            WindowId::new(2),
            WinRect::new(0, 0, 10, 5),
            z.next_z(),
            WindowOptions::new("b"),
        );
        assert!(b.z_index > a.z_index);
        z.focus(&mut a);
        assert!(a.z_index > b.z_index);
        assert_eq!(z.active(), Some(a.id));
        z.focus(&mut b);
        assert!(b.z_index > a.z_index);
        assert_eq!(z.active(), Some(b.id));
    }
}
