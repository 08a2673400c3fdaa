//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the app state and renders to a
//! terminal frame. Widgets never mutate state.

pub mod attack_menu;
pub mod creature_panel;
pub mod footer;
pub mod header;
pub mod messages;
pub mod roster_select;
