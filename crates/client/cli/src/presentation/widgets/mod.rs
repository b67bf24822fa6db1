//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the session and renders to a
//! terminal frame. Widgets never dispatch events.

pub mod footer;
pub mod grid;
pub mod toolbar;
