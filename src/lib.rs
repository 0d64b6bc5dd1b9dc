//! pokegrid - searchable Pokemon card grid on tui-dispatch
//!
//! The library exposes the app's modules for the binary and for tests.

pub mod action;
pub mod api;
pub mod artwork;
pub mod components;
pub mod effect;
pub mod loader;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod theme;
pub mod type_colors;
