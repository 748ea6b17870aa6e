//! Open a native terminal emulator at a directory.
//!
//! [`opener`] holds the per-platform candidate tables and the launch cascade,
//! [`launcher`] layers configuration profiles and the host fallback on top.

pub mod config;
pub mod error;
pub mod host;
pub mod launcher;
pub mod logging;
pub mod opener;
pub mod target;

pub use config::Config;
pub use opener::open_terminal_at;
pub use target::TargetDirectory;
