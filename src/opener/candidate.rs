use std::fmt;

/// One terminal emulator invocation: what to run and with which arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Human-readable terminal name, used in notices and logs.
    pub name: String,
    /// Executable resolved through `PATH`.
    pub program: String,
    /// Fully built argument list, directory already embedded.
    pub args: Vec<String>,
}

impl Candidate {
    /// Create a candidate.
    pub fn new(name: impl Into<String>, program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args,
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}
