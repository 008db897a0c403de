//! Tavern Hotkeys - hotkey-driven clicking for Hearthstone Battlegrounds
//!
//! Binds global keyboard shortcuts to simulated mouse clicks at configured
//! screen coordinates. The pointer travels a randomized Bezier trajectory
//! rather than teleporting, so simulated input is harder to distinguish
//! from manual input.
//!
//! ## Module layout
//!
//! - `motion`: the human-like curve generator, easing functions and speed
//!   tiers
//! - `click`: position memory and the click orchestrator
//! - `dispatch`: logical actions mapped to configured screen regions
//! - `config`: JSON config file with defaults, backfill and hot reload
//! - `input`: thin seams over the OS pointer and global hotkey collaborators
//! - `app`: the hotkey event loop tying it all together

pub mod app;
pub mod click;
pub mod config;
pub mod dispatch;
pub mod input;
pub mod motion;

pub use config::{Config, ConfigHandle};
pub use motion::Point;
