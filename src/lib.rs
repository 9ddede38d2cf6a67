//! A floating window manager engine for desktop-metaphor UIs.
//!
//! The engine (`window`) owns all window state: creation, stacking and
//! focus, drag/resize gestures, minimize/maximize/restore and close. It is
//! rendering-agnostic and driven through pointer positions and lifecycle
//! calls. The remaining modules are a terminal shell around it: chrome
//! drawing, a taskbar, and the crossterm event pump.

pub mod constants;
pub mod desktop;
pub mod drivers;
pub mod event_loop;
pub mod geometry;
pub mod taskbar;
pub mod tracing_sub;
pub mod ui;
pub mod window;
