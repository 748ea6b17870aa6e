//! Terminal candidate tables and the launch cascade.
//!
//! Each platform has an ordered list of [`Candidate`]s. [`launch_first`] tries
//! them one at a time through [`attempt_launch`] and stops at the first one
//! that reports no error within [`DECISION_WINDOW`].

mod candidate;
mod launch;
mod shell;
mod table;

#[cfg(test)]
pub(crate) mod stub;

pub use candidate::Candidate;
pub use launch::{
    attempt_launch, ErrorSignal, LaunchEvent, LaunchOutcome, LaunchState, Spawner, SystemSpawner,
    DECISION_WINDOW,
};
pub use shell::{
    augmented_path, cd_then_shell, cmd_quote, posix_quote, render_template, DIR_PLACEHOLDER,
};
pub use table::{candidates_for, Platform};

use crate::target::TargetDirectory;

/// Try `candidates` in order and stop at the first that launches.
///
/// Returns the candidate that launched, or `None` when every one failed.
/// Candidates after the winner are never spawned.
pub async fn launch_first<'a, S: Spawner + ?Sized>(
    spawner: &S,
    candidates: &'a [Candidate],
) -> Option<&'a Candidate> {
    for candidate in candidates {
        tracing::debug!(terminal = %candidate.name, command = %candidate, "trying terminal");
        match attempt_launch(spawner, candidate).await {
            LaunchOutcome::Succeeded => {
                tracing::info!(terminal = %candidate.name, "launched terminal");
                return Some(candidate);
            }
            LaunchOutcome::Failed(err) => {
                tracing::debug!(terminal = %candidate.name, error = %err, "terminal failed");
            }
        }
    }
    None
}

/// Open a native terminal at `dir` using the table for `platform_id`.
///
/// `false` means nothing was launched and the caller should fall back. An
/// unknown platform returns `false` without spawning anything.
pub async fn open_terminal_at<S: Spawner + ?Sized>(
    spawner: &S,
    platform_id: &str,
    dir: &TargetDirectory,
) -> bool {
    launch_at(spawner, platform_id, dir).await.is_some()
}

/// Same as [`open_terminal_at`], returning the candidate that launched.
pub async fn launch_at<S: Spawner + ?Sized>(
    spawner: &S,
    platform_id: &str,
    dir: &TargetDirectory,
) -> Option<Candidate> {
    let Some(platform) = Platform::from_id(platform_id) else {
        tracing::warn!(platform = platform_id, "no terminal table for platform");
        return None;
    };
    let candidates = candidates_for(platform, dir);
    let launched = launch_first(spawner, &candidates).await.cloned();
    if launched.is_none() {
        tracing::warn!(%platform, dir = %dir, "no terminal could be launched");
    }
    launched
}
