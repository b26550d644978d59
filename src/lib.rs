//! Floating window manager for the Phantom desktop.
//!
//! The engine lives in [`window`] and [`layout::floating`]: window records,
//! focus and z-order, drag and resize geometry. [`apps`] maps app ids to
//! content views, and [`desktop`] puts it all on a terminal screen.

pub mod apps;
pub mod config;
pub mod constants;
pub mod desktop;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod keybindings;
pub mod layout;
pub mod runner;
pub mod state;
pub mod theme;
pub mod tracing_sub;
pub mod window;
