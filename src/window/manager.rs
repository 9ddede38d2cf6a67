use thiserror::Error;

use super::gesture::{ActiveGesture, DragGesture, PointerPos, ResizeGesture};
use super::registry::WindowRegistry;
use super::zorder::ZOrder;
use super::{WindowId, WindowOptions, WindowRecord, default_geometry};
use crate::geometry::{Viewport, WinRect, spawn_origin};

/// Recoverable failure conditions for manager operations.
///
/// None of these should escape as panics; callers are free to ignore them
/// (permissive-UI convention) and every rejection is logged at debug level.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WmError {
    /// No usable surface to mount windows on (empty viewport).
    #[error("no usable mount surface: viewport is empty")]
    Mount,
    /// The referenced window is not in the registry (already closed).
    #[error("unknown window {0}")]
    NotFound(WindowId),
    /// The operation is disabled by the window's constraints.
    #[error("operation not permitted by window constraints")]
    ConstraintViolation,
    /// A drag or resize is already in progress somewhere.
    #[error("another pointer gesture is already active")]
    GestureConflict,
}

/// Lifecycle notifications, drained by collaborators such as the taskbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Created(WindowId),
    Closed(WindowId),
    Focused(WindowId),
    Minimized(WindowId),
    Restored(WindowId),
}

/// The window lifecycle API: composes the registry, the z-order allocator
/// and the gesture state machines behind one instance owned by the
/// application. There are no ambient singletons; collaborators receive the
/// manager explicitly.
#[derive(Debug)]
pub struct WindowManager {
    registry: WindowRegistry,
    zorder: ZOrder,
    viewport: Viewport,
    // single global gesture slot: one drag OR resize at a time, process-wide
    active_gesture: Option<ActiveGesture>,
    next_id: u64,
    // queue of lifecycle events; collaborators drain via `take_events`
    events: Vec<WindowEvent>,
}

impl WindowManager {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            registry: WindowRegistry::new(),
            zorder: ZOrder::new(),
            viewport,
            active_gesture: None,
            next_id: 1,
            events: Vec::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Adopt a new viewport (e.g. after a terminal resize). Windows that are
    /// currently maximized keep filling the work area.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let work = viewport.work_area();
        for record in self.registry.iter_mut() {
            if record.maximized {
                record.geometry = work.clamp_min(
                    record.constraints.min_width,
                    record.constraints.min_height,
                );
            }
        }
    }

    /// Create a window, assign it a fresh id and the top stacking position,
    /// and focus it. Fails with [`WmError::Mount`] when there is no viewport
    /// surface to place the window on.
    pub fn create_window(&mut self, options: WindowOptions) -> Result<WindowId, WmError> {
        if self.viewport.is_empty() {
            tracing::warn!(title = %options.title, "create rejected: empty viewport");
            return Err(WmError::Mount);
        }
        let id = WindowId::new(self.next_id);
        self.next_id += 1;
        let (width, height) = default_geometry(&options);
        let (x, y) = match (options.x, options.y) {
            (Some(x), Some(y)) => (x, y),
            _ => spawn_origin(self.viewport, width, height),
        };
        let geometry = WinRect::new(x, y, width, height);
        let record = WindowRecord::new(id, geometry, self.zorder.next_z(), options);
        tracing::info!(%id, ?geometry, "created window");
        self.registry.insert(record);
        self.events.push(WindowEvent::Created(id));
        self.focus_window(id)?;
        Ok(id)
    }

    /// Close a window, consulting its close guard first. A guard returning
    /// `false` aborts the close with no state change. If the closed window
    /// was active, focus transfers to the topmost remaining window.
    pub fn close_window(&mut self, id: WindowId) -> Result<(), WmError> {
        let Some(record) = self.registry.get_mut(id) else {
            tracing::debug!(%id, "close ignored: unknown window");
            return Err(WmError::NotFound(id));
        };
        if !record.constraints.closable {
            tracing::debug!(%id, "close ignored: window is not closable");
            return Err(WmError::ConstraintViolation);
        }
        if let Some(guard) = record.on_close.as_mut()
            && !guard()
        {
            tracing::debug!(%id, "close vetoed by guard");
            return Ok(());
        }
        self.cancel_gesture_for(id);
        self.registry.remove(id);
        self.events.push(WindowEvent::Closed(id));
        tracing::info!(%id, "closed window");
        if self.zorder.active() == Some(id) {
            self.focus_fallback(None);
        }
        Ok(())
    }

    /// Raise the window to the top of the stack and mark it active.
    pub fn focus_window(&mut self, id: WindowId) -> Result<(), WmError> {
        let Some(record) = self.registry.get_mut(id) else {
            tracing::debug!(%id, "focus ignored: unknown window");
            return Err(WmError::NotFound(id));
        };
        self.zorder.focus(record);
        self.events.push(WindowEvent::Focused(id));
        Ok(())
    }

    /// Hide the window, keeping its geometry and constraints so it can be
    /// restored without recomputation. No-op when already minimized.
    pub fn minimize_window(&mut self, id: WindowId) -> Result<(), WmError> {
        let Some(record) = self.registry.get_mut(id) else {
            tracing::debug!(%id, "minimize ignored: unknown window");
            return Err(WmError::NotFound(id));
        };
        if !record.constraints.minimizable {
            tracing::debug!(%id, "minimize ignored: window is not minimizable");
            return Err(WmError::ConstraintViolation);
        }
        if record.minimized {
            return Ok(());
        }
        // The flags are mutually exclusive: leaving maximization restores the
        // saved geometry before the window goes away.
        if record.maximized {
            if let Some(saved) = record.saved_geometry.take() {
                record.geometry = saved;
            }
            record.maximized = false;
        }
        record.minimized = true;
        self.cancel_gesture_for(id);
        self.events.push(WindowEvent::Minimized(id));
        tracing::debug!(%id, "minimized window");
        if self.zorder.active() == Some(id) {
            self.focus_fallback(Some(id));
        }
        Ok(())
    }

    /// Re-show a minimized window and focus it.
    pub fn restore_window(&mut self, id: WindowId) -> Result<(), WmError> {
        let Some(record) = self.registry.get_mut(id) else {
            tracing::debug!(%id, "restore ignored: unknown window");
            return Err(WmError::NotFound(id));
        };
        if record.minimized {
            record.minimized = false;
            self.events.push(WindowEvent::Restored(id));
            tracing::debug!(%id, "restored window");
        }
        self.focus_window(id)
    }

    /// Toggle maximization. The first call saves the current geometry and
    /// fills the work area; calling again restores the saved geometry
    /// exactly. A minimized window is un-minimized as part of maximizing.
    pub fn maximize_window(&mut self, id: WindowId) -> Result<(), WmError> {
        let work = self.viewport.work_area();
        let Some(record) = self.registry.get_mut(id) else {
            tracing::debug!(%id, "maximize ignored: unknown window");
            return Err(WmError::NotFound(id));
        };
        if !record.constraints.maximizable {
            tracing::debug!(%id, "maximize ignored: window is not maximizable");
            return Err(WmError::ConstraintViolation);
        }
        if record.maximized {
            if let Some(saved) = record.saved_geometry.take() {
                record.geometry = saved;
            }
            record.maximized = false;
            tracing::debug!(%id, "un-maximized window");
            return Ok(());
        }
        if record.minimized {
            record.minimized = false;
            self.events.push(WindowEvent::Restored(id));
        }
        record.saved_geometry = Some(record.geometry);
        record.geometry =
            work.clamp_min(record.constraints.min_width, record.constraints.min_height);
        record.maximized = true;
        self.cancel_gesture_for(id);
        tracing::debug!(%id, "maximized window");
        self.focus_window(id)
    }

    /// Start a drag gesture for the window's title region. Refused while any
    /// other gesture is active, for immovable windows and while maximized.
    /// Starting a drag also focuses the window.
    pub fn begin_drag(&mut self, id: WindowId, pointer: PointerPos) -> Result<(), WmError> {
        if self.active_gesture.is_some() {
            tracing::debug!(%id, "drag ignored: another gesture is active");
            return Err(WmError::GestureConflict);
        }
        let Some(record) = self.registry.get(id) else {
            tracing::debug!(%id, "drag ignored: unknown window");
            return Err(WmError::NotFound(id));
        };
        if !record.constraints.movable || record.maximized {
            tracing::debug!(%id, "drag ignored: window is not movable here");
            return Err(WmError::ConstraintViolation);
        }
        self.active_gesture = Some(ActiveGesture::Drag(DragGesture::begin(
            id,
            pointer,
            record.geometry,
        )));
        self.focus_window(id)
    }

    /// Start a resize gesture for the window's bottom-right handle. Same
    /// single-gesture discipline as [`Self::begin_drag`].
    pub fn begin_resize(&mut self, id: WindowId, pointer: PointerPos) -> Result<(), WmError> {
        if self.active_gesture.is_some() {
            tracing::debug!(%id, "resize ignored: another gesture is active");
            return Err(WmError::GestureConflict);
        }
        let Some(record) = self.registry.get(id) else {
            tracing::debug!(%id, "resize ignored: unknown window");
            return Err(WmError::NotFound(id));
        };
        if !record.constraints.resizable || record.maximized {
            tracing::debug!(%id, "resize ignored: window is not resizable here");
            return Err(WmError::ConstraintViolation);
        }
        self.active_gesture = Some(ActiveGesture::Resize(ResizeGesture::begin(
            id,
            pointer,
            record.geometry,
        )));
        self.focus_window(id)
    }

    /// Feed a pointer movement into the active gesture, writing the updated
    /// geometry back into the registry so concurrent readers stay
    /// consistent. Returns `true` when a gesture consumed the move.
    pub fn pointer_move(&mut self, pointer: PointerPos) -> bool {
        match self.active_gesture {
            Some(ActiveGesture::Drag(gesture)) => {
                let (x, y) = gesture.origin_at(pointer);
                if let Some(record) = self.registry.get_mut(gesture.id) {
                    record.geometry.x = x;
                    record.geometry.y = y;
                }
                true
            }
            Some(ActiveGesture::Resize(gesture)) => {
                if let Some(record) = self.registry.get_mut(gesture.id) {
                    let (width, height) = gesture.size_at(
                        pointer,
                        record.constraints.min_width,
                        record.constraints.min_height,
                    );
                    record.geometry.width = width;
                    record.geometry.height = height;
                }
                true
            }
            None => false,
        }
    }

    /// Pointer-up: the gesture returns to idle. Idempotent.
    pub fn end_gesture(&mut self) -> bool {
        self.active_gesture.take().is_some()
    }

    /// Programmatic or pointer-cancel termination of the gesture; the
    /// geometry written so far stays as-is.
    pub fn cancel_gesture(&mut self) {
        if let Some(gesture) = self.active_gesture.take() {
            tracing::debug!(id = %gesture.window(), "cancelled gesture");
        }
    }

    pub fn active_gesture(&self) -> Option<&ActiveGesture> {
        self.active_gesture.as_ref()
    }

    pub fn active_id(&self) -> Option<WindowId> {
        self.zorder.active()
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowRecord> {
        self.registry.get(id)
    }

    /// Ids of all open windows (minimized included), bottom to top.
    pub fn ids(&self) -> Vec<WindowId> {
        self.registry.ids_by_z()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Topmost visible window containing the given point, if any.
    pub fn hit_test(&self, pointer: PointerPos) -> Option<WindowId> {
        self.registry
            .topmost_where(|record| record.is_visible() && record.geometry.contains(pointer.x, pointer.y))
    }

    /// Drain lifecycle events queued since the last call.
    pub fn take_events(&mut self) -> Vec<WindowEvent> {
        std::mem::take(&mut self.events)
    }

    fn cancel_gesture_for(&mut self, id: WindowId) {
        if self
            .active_gesture
            .as_ref()
            .is_some_and(|gesture| gesture.window() == id)
        {
            self.active_gesture = None;
        }
    }

    /// Hand focus to the topmost remaining window, preferring visible ones,
    /// or to none. `exclude` keeps a just-minimized window from reclaiming
    /// its own focus.
    fn focus_fallback(&mut self, exclude: Option<WindowId>) {
        let next = self
            .registry
            .topmost_where(|record| record.is_visible() && Some(record.id) != exclude)
            .or_else(|| self.registry.topmost_where(|record| Some(record.id) != exclude));
        match next {
            Some(next_id) => {
                let _ = self.focus_window(next_id);
            }
            None => self.zorder.set_active(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> WindowManager {
        WindowManager::new(Viewport::new(1280, 800).with_taskbar(1))
    }

    #[test]
    fn create_rejects_empty_viewport() {
        let mut wm = WindowManager::new(Viewport::new(0, 0));
        assert_eq!(
            wm.create_window(WindowOptions::new("a")).unwrap_err(),
            WmError::Mount
        );
        assert!(wm.is_empty());
    }

    #[test]
    fn default_spawn_is_inside_work_area() {
        let mut wm = manager();
        let id = wm.create_window(WindowOptions::new("a")).unwrap();
        let geometry = wm.window(id).unwrap().geometry;
        let work = wm.viewport().work_area();
        assert!(geometry.x >= 0 && geometry.y >= 0);
        assert!(geometry.right() <= work.right());
        assert!(geometry.bottom() <= work.bottom());
    }

    #[test]
    fn close_guard_can_veto() {
        let mut wm = manager();
        let id = wm
            .create_window(WindowOptions::new("dirty").on_close(Box::new(|| false)))
            .unwrap();
        assert_eq!(wm.close_window(id), Ok(()));
        assert!(wm.window(id).is_some(), "vetoed close must not remove");
        assert_eq!(wm.active_id(), Some(id));
    }

    #[test]
    fn unknown_id_operations_are_recoverable() {
        let mut wm = manager();
        let id = wm.create_window(WindowOptions::new("a")).unwrap();
        wm.close_window(id).unwrap();
        assert_eq!(wm.close_window(id), Err(WmError::NotFound(id)));
        assert_eq!(wm.focus_window(id), Err(WmError::NotFound(id)));
        assert_eq!(wm.minimize_window(id), Err(WmError::NotFound(id)));
        assert_eq!(wm.restore_window(id), Err(WmError::NotFound(id)));
        assert_eq!(wm.maximize_window(id), Err(WmError::NotFound(id)));
    }

    #[test]
    fn constraint_violations_leave_state_untouched() {
        let mut wm = manager();
        let id = wm
            .create_window(
                WindowOptions::new("pinned")
                    .movable(false)
                    .resizable(false)
                    .minimizable(false)
                    .maximizable(false)
                    .closable(false),
            )
            .unwrap();
        let before = wm.window(id).unwrap().geometry;
        let origin = PointerPos::new(0, 0);
        assert_eq!(wm.begin_drag(id, origin), Err(WmError::ConstraintViolation));
        assert_eq!(
            wm.begin_resize(id, origin),
            Err(WmError::ConstraintViolation)
        );
        assert_eq!(wm.minimize_window(id), Err(WmError::ConstraintViolation));
        assert_eq!(wm.maximize_window(id), Err(WmError::ConstraintViolation));
        assert_eq!(wm.close_window(id), Err(WmError::ConstraintViolation));
        assert_eq!(wm.window(id).unwrap().geometry, before);
        assert!(wm.active_gesture().is_none());
    }

    #[test]
    fn viewport_resize_follows_maximized_windows() {
        let mut wm = manager();
        let id = wm.create_window(WindowOptions::new("a")).unwrap();
        wm.maximize_window(id).unwrap();
        wm.set_viewport(Viewport::new(640, 480).with_taskbar(2));
        let geometry = wm.window(id).unwrap().geometry;
        assert_eq!(geometry, WinRect::new(0, 0, 640, 478));
        assert!(wm.window(id).unwrap().maximized);
    }

    #[test]
    fn hit_test_prefers_topmost_visible() {
        let mut wm = manager();
        let a = wm
            .create_window(WindowOptions::new("a").at(10, 10).size(20, 10))
            .unwrap();
        let b = wm
            .create_window(WindowOptions::new("b").at(15, 12).size(20, 10))
            .unwrap();
        assert_eq!(wm.hit_test(PointerPos::new(16, 13)), Some(b));
        wm.minimize_window(b).unwrap();
        assert_eq!(wm.hit_test(PointerPos::new(16, 13)), Some(a));
        assert_eq!(wm.hit_test(PointerPos::new(500, 500)), None);
    }
}
