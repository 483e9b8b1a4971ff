//! Terminal front end for the session companion.
//!
//! One ratatui tab per panel: Themes, Fate & Oracles, and Characters &
//! Threads. Panels reset when the user leaves them unless the app is
//! started with `--keep-panels`.

pub mod app;
pub mod error;
pub mod logging;
pub mod shared;
pub mod tabs;
pub mod terminal;

pub use error::TuiError;
