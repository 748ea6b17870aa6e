//! Scripted spawner for tests: behaviour per program, every call recorded.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use super::{Candidate, ErrorSignal, Spawner};
use crate::error::LaunchError;

#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    /// Spawn fails synchronously.
    NotFound,
    /// Spawn error is delivered after the given delay.
    ErrorAfter(Duration),
    /// Launcher exits right away.
    Exits,
    /// Process keeps running.
    Runs,
}

pub struct ScriptedSpawner {
    behaviors: HashMap<String, Behavior>,
    fallback: Behavior,
    calls: Mutex<Vec<Candidate>>,
}

impl ScriptedSpawner {
    /// Every program not scripted behaves like `fallback`.
    pub fn new(fallback: Behavior) -> Self {
        Self {
            behaviors: HashMap::new(),
            fallback,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, program: &str, behavior: Behavior) -> Self {
        self.behaviors.insert(program.to_string(), behavior);
        self
    }

    pub fn calls(&self) -> Vec<Candidate> {
        self.calls.lock().unwrap().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.program).collect()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Spawner for ScriptedSpawner {
    fn spawn(&self, candidate: &Candidate) -> Result<ErrorSignal, LaunchError> {
        self.calls.lock().unwrap().push(candidate.clone());
        let behavior = self
            .behaviors
            .get(&candidate.program)
            .copied()
            .unwrap_or(self.fallback);
        let program = candidate.program.clone();

        match behavior {
            Behavior::NotFound => Err(LaunchError::NotFound { program }),
            Behavior::ErrorAfter(delay) => Ok(Box::pin(async move {
                tokio::time::sleep(delay).await;
                Some(LaunchError::NotFound { program })
            })),
            Behavior::Exits => Ok(Box::pin(async { None::<LaunchError> })),
            Behavior::Runs => Ok(Box::pin(std::future::pending::<Option<LaunchError>>())),
        }
    }
}
