//! The invoking host: notices and the integrated-terminal fallback.

use anyhow::{Context, Result};
use std::process::Command;

use crate::target::TargetDirectory;

/// What the launcher needs from whoever invoked it.
pub trait Host {
    /// Show an informational notice.
    fn info(&self, message: &str);

    /// Open the host's own terminal in `dir`. Last resort after the cascade.
    fn open_integrated_terminal(&self, dir: &TargetDirectory) -> Result<()>;
}

/// Host for the command line: notices go to stderr and the integrated
/// terminal is an interactive shell in the terminal we were started from.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleHost;

impl Host for ConsoleHost {
    fn info(&self, message: &str) {
        eprintln!("{message}");
    }

    fn open_integrated_terminal(&self, dir: &TargetDirectory) -> Result<()> {
        let shell = user_shell();
        eprintln!("Starting {shell} in {dir} (exit to return)");
        let status = Command::new(&shell)
            .current_dir(dir.as_path())
            .status()
            .with_context(|| format!("Failed to start {shell}"))?;
        if !status.success() {
            tracing::debug!(%status, "integrated shell exited");
        }
        Ok(())
    }
}

#[cfg(windows)]
fn user_shell() -> String {
    std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
}

#[cfg(not(windows))]
fn user_shell() -> String {
    std::env::var("SHELL")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "sh".to_string())
}
