//! OS input collaborators
//!
//! Thin seams around the operating system: a pointer device for cursor
//! queries, moves and button events, and a global hotkey registry. The core
//! modules only ever talk to these traits and wrappers, never to the OS
//! crates directly.

pub mod hotkeys;
pub mod pointer;

pub use hotkeys::{parse_combo, HotkeyBindings, HotkeyError};
pub use pointer::{MouseButton, PointerDevice, PointerError, SystemPointer};
