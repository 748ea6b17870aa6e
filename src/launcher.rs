//! Profile-aware entry point used by the `open` command.

use anyhow::{bail, Result};

use crate::config::{Config, Profile};
use crate::host::Host;
use crate::opener::{self, Candidate, LaunchOutcome, Spawner};
use crate::target::TargetDirectory;


/// How an `open` request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A native terminal was launched.
    Launched(Candidate),
    /// Nothing launched; the host's integrated terminal was opened.
    Integrated,
    /// Nothing launched and the integrated fallback is disabled.
    Unavailable,
}

/// Notice shown when the cascade is exhausted.
pub const NO_TERMINAL_NOTICE: &str = "No system terminal found";

/// Open a terminal at `dir` according to `config`.
///
/// The `single` profile tries exactly `terminal.command` and fails with an
/// error naming the program. The `cascade` profile tries `terminal.preferred`
/// and then the platform table, and degrades to the host's terminal.
pub async fn open_here<S, H>(
    spawner: &S,
    host: &H,
    config: &Config,
    platform_id: &str,
    dir: &TargetDirectory,
) -> Result<Resolution>
where
    S: Spawner + ?Sized,
    H: Host + ?Sized,
{
    match config.terminal.profile {
        Profile::Single => {
            let candidate = opener::render_template(&config.terminal.command, dir)?;
            match opener::attempt_launch(spawner, &candidate).await {
                LaunchOutcome::Succeeded => Ok(Resolution::Launched(candidate)),
                LaunchOutcome::Failed(err) => {
                    tracing::error!(error = %err, "configured terminal failed");
                    bail!("Could not open {}: {err}", candidate.program)
                }
            }
        }
        Profile::Cascade => {
            if let Some(template) = &config.terminal.preferred {
                let preferred = opener::render_template(template, dir)?;
                if opener::launch_first(spawner, std::slice::from_ref(&preferred))
                    .await
                    .is_some()
                {
                    return Ok(Resolution::Launched(preferred));
                }
            }

            if let Some(launched) = opener::launch_at(spawner, platform_id, dir).await {
                return Ok(Resolution::Launched(launched));
            }

            if config.fallback.integrated {
                host.info(&format!(
                    "{NO_TERMINAL_NOTICE}; opening the integrated terminal in {dir}"
                ));
                host.open_integrated_terminal(dir)?;
                Ok(Resolution::Integrated)
            } else {
                host.info(&format!("{NO_TERMINAL_NOTICE} for {dir}"));
                Ok(Resolution::Unavailable)
            }
        }
    }
}
