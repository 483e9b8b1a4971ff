//! Session companion for tabletop role-playing.
//!
//! Three independent panels share one pattern: some owned state, a handful
//! of guarded mutations and an output log.
//!
//! - [`themes`]: five ranked themes with fixed per-rank weights and a d100
//!   roll per theme.
//! - [`fate`]: action/danger dice counters, chaos factor and likelihood.
//! - [`tracker`]: capped character and thread lists with uniform random
//!   selection.
//!
//! Invalid operations are ignored rather than reported, so every mutation
//! returns whether it changed anything instead of a `Result`.

pub mod config;
pub mod error;
pub mod fate;
pub mod list;
pub mod log;
pub mod panel;
pub mod themes;
pub mod tracker;

pub use config::CompanionConfig;
pub use error::CompanionError;
pub use fate::{ChaosFactor, DiceConfig, DiceKind, FatePanel, Likelihood, OracleConfig};
pub use list::ItemList;
pub use log::OutputLog;
pub use panel::PanelId;
pub use themes::{Direction, ThemeOrder, ThemePanel, ThemeRoll};
pub use tracker::{ItemKind, TrackerPanel};
