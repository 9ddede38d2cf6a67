use desk_wm::geometry::Viewport;
use desk_wm::window::{WindowManager, WindowOptions, WmError};

fn manager() -> WindowManager {
    WindowManager::new(Viewport::new(1280, 800).with_taskbar(1))
}

#[test]
fn newest_window_stacks_on_top_until_refocused() {
    let mut wm = manager();
    let a = wm.create_window(WindowOptions::new("a")).unwrap();
    let b = wm.create_window(WindowOptions::new("b")).unwrap();
    assert!(wm.window(b).unwrap().z_index > wm.window(a).unwrap().z_index);
    assert_eq!(wm.active_id(), Some(b));

    wm.focus_window(a).unwrap();
    assert!(wm.window(a).unwrap().z_index > wm.window(b).unwrap().z_index);
    assert_eq!(wm.active_id(), Some(a));
    assert_eq!(wm.ids(), vec![b, a]);
}

#[test]
fn z_indices_are_never_recycled_after_close() {
    let mut wm = manager();
    let a = wm.create_window(WindowOptions::new("a")).unwrap();
    let top_z = wm.window(a).unwrap().z_index;
    wm.close_window(a).unwrap();
    let b = wm.create_window(WindowOptions::new("b")).unwrap();
    assert!(b != a, "ids must never be reused");
    assert!(
        wm.window(b).unwrap().z_index > top_z,
        "the stacking counter must keep climbing across closes"
    );
}

#[test]
fn refocusing_the_active_window_still_raises_it() {
    let mut wm = manager();
    let a = wm.create_window(WindowOptions::new("a")).unwrap();
    let before = wm.window(a).unwrap().z_index;
    wm.focus_window(a).unwrap();
    assert!(wm.window(a).unwrap().z_index > before);
    assert_eq!(wm.active_id(), Some(a));
}

#[test]
fn focus_on_unknown_id_reports_not_found_without_side_effects() {
    let mut wm = manager();
    let a = wm.create_window(WindowOptions::new("a")).unwrap();
    let b = wm.create_window(WindowOptions::new("b")).unwrap();
    wm.close_window(a).unwrap();
    assert_eq!(wm.focus_window(a), Err(WmError::NotFound(a)));
    assert_eq!(wm.active_id(), Some(b));
}

#[test]
fn restore_focuses_over_a_later_created_window() {
    let mut wm = manager();
    let a = wm.create_window(WindowOptions::new("a")).unwrap();
    wm.minimize_window(a).unwrap();
    let b = wm.create_window(WindowOptions::new("b")).unwrap();
    wm.restore_window(a).unwrap();
    assert_eq!(wm.active_id(), Some(a));
    assert!(wm.window(a).unwrap().z_index > wm.window(b).unwrap().z_index);
}
