//! A single terminal launch, turned from fire-and-forget into a definite
//! outcome by waiting a short decision window for an error signal.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use super::Candidate;
use crate::error::LaunchError;

/// How long a freshly spawned terminal has to report an error before it is
/// considered launched.
pub const DECISION_WINDOW: Duration = Duration::from_millis(200);

/// Resolves with `Some(error)` when a spawn error is delivered late, or `None`
/// once the launcher has exited. May stay pending forever.
pub type ErrorSignal = Pin<Box<dyn Future<Output = Option<LaunchError>> + Send>>;

/// Issues process spawns. The seam between the cascade and the OS.
pub trait Spawner {
    /// Start `candidate`. An `Err` is an error signal observed at t = 0.
    fn spawn(&self, candidate: &Candidate) -> Result<ErrorSignal, LaunchError>;
}

/// Result of one launch attempt.
#[derive(Debug)]
pub enum LaunchOutcome {
    /// Spawned with no error inside the decision window.
    Succeeded,
    /// An error was observed before the window elapsed.
    Failed(LaunchError),
}

impl LaunchOutcome {
    /// `true` for [`LaunchOutcome::Succeeded`].
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// The one event that moves a launch out of [`LaunchState::Pending`].
#[derive(Debug)]
pub enum LaunchEvent {
    /// The spawn reported an error.
    ErrorSignal(LaunchError),
    /// The launcher exited before the window elapsed.
    Settled,
    /// The decision window elapsed with no error.
    WindowElapsed,
}

/// Launch state machine. Only `Pending` reacts to events; the other two are
/// final.
#[derive(Debug)]
pub enum LaunchState {
    /// Spawn issued, waiting for an event.
    Pending,
    /// Error observed inside the window.
    Failed(LaunchError),
    /// No error observed inside the window.
    Succeeded,
}

impl LaunchState {
    /// Apply `event`.
    #[must_use]
    pub fn on(self, event: LaunchEvent) -> Self {
        match (self, event) {
            (Self::Pending, LaunchEvent::ErrorSignal(err)) => Self::Failed(err),
            (Self::Pending, LaunchEvent::Settled | LaunchEvent::WindowElapsed) => Self::Succeeded,
            (done, _) => done,
        }
    }

    /// The outcome once the state is final.
    pub fn outcome(self) -> Option<LaunchOutcome> {
        match self {
            Self::Pending => None,
            Self::Failed(err) => Some(LaunchOutcome::Failed(err)),
            Self::Succeeded => Some(LaunchOutcome::Succeeded),
        }
    }
}

/// Spawn `candidate` and race its error signal against [`DECISION_WINDOW`].
pub async fn attempt_launch<S: Spawner + ?Sized>(
    spawner: &S,
    candidate: &Candidate,
) -> LaunchOutcome {
    let event = match spawner.spawn(candidate) {
        Err(err) => LaunchEvent::ErrorSignal(err),
        Ok(signal) => {
            tokio::select! {
                biased;
                signal = signal => signal.map_or(LaunchEvent::Settled, LaunchEvent::ErrorSignal),
                () = tokio::time::sleep(DECISION_WINDOW) => LaunchEvent::WindowElapsed,
            }
        }
    };
    tracing::trace!(terminal = %candidate.name, ?event, "launch event");

    // Any event moves Pending to a final state.
    LaunchState::Pending
        .on(event)
        .outcome()
        .unwrap_or(LaunchOutcome::Succeeded)
}

/// Spawns real processes, detached from our stdio and process group.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn spawn(&self, candidate: &Candidate) -> Result<ErrorSignal, LaunchError> {
        let mut cmd = std::process::Command::new(&candidate.program);
        push_args(&mut cmd, candidate);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.env("PATH", super::shell::augmented_path());
            cmd.process_group(0);
        }

        let mut child = Command::from(cmd)
            .kill_on_drop(false)
            .spawn()
            .map_err(|err| LaunchError::from_spawn(&candidate.program, err))?;
        let program = candidate.program.clone();

        // Only spawn errors fail a launch. Any exit inside the window settles
        // it; dropping the child after the window leaves the process running.
        Ok(Box::pin(async move {
            match child.wait().await {
                Ok(status) => tracing::debug!(%program, %status, "launcher exited"),
                Err(err) => tracing::debug!(%program, error = %err, "could not wait on launcher"),
            }
            None
        }))
    }
}

#[cfg(windows)]
fn push_args(cmd: &mut std::process::Command, candidate: &Candidate) {
    use std::os::windows::process::CommandExt;

    // cmd.exe does its own parsing; hand it our quoting untouched.
    if candidate.program.eq_ignore_ascii_case("cmd") {
        for arg in &candidate.args {
            cmd.raw_arg(arg);
        }
    } else {
        cmd.args(&candidate.args);
    }
}

#[cfg(not(windows))]
fn push_args(cmd: &mut std::process::Command, candidate: &Candidate) {
    cmd.args(&candidate.args);
}
