use anyhow::{bail, Result};

use super::Candidate;
use crate::target::TargetDirectory;

/// Placeholder replaced by the target directory in command templates.
pub const DIR_PLACEHOLDER: &str = "{dir}";

/// `PATH` for spawned terminals: Homebrew and `/usr/local` first, then the
/// inherited entries without duplicates.
pub fn augmented_path() -> String {
    let current = std::env::var("PATH").unwrap_or_default();
    let extras = ["/usr/local/bin", "/opt/homebrew/bin", "/opt/homebrew/sbin"];
    let mut parts: Vec<&str> = extras.to_vec();
    for p in current.split(':').filter(|s| !s.is_empty()) {
        if !parts.contains(&p) {
            parts.push(p);
        }
    }
    parts.join(":")
}

/// Quote `s` as a single POSIX shell word.
pub fn posix_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Quote `s` as a single `cmd.exe` word. Windows paths cannot contain `"`, so
/// any that slip through are dropped rather than escaped.
pub fn cmd_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', ""))
}

/// Shell script that changes into `dir` and replaces itself with the user's
/// interactive shell, keeping the terminal window open.
pub fn cd_then_shell(dir: &TargetDirectory) -> String {
    format!(
        "cd -- {} && exec \"${{SHELL:-sh}}\"",
        posix_quote(dir.as_str())
    )
}

/// Build a candidate from a user command template such as
/// `"kitty --directory {dir}"`. Without a placeholder the directory is
/// appended as the final argument.
pub fn render_template(template: &str, dir: &TargetDirectory) -> Result<Candidate> {
    let mut parts = shlex_split(template);
    if parts.is_empty() {
        bail!("Empty terminal command");
    }
    let program = parts.remove(0);

    let mut args: Vec<String> = parts
        .iter()
        .map(|part| part.replace(DIR_PLACEHOLDER, dir.as_str()))
        .collect();
    if !parts.iter().any(|p| p.contains(DIR_PLACEHOLDER)) {
        args.push(dir.as_str().to_string());
    }

    Ok(Candidate::new(program.clone(), program, args))
}

/// Whitespace splitter that keeps single- or double-quoted runs together.
/// Quotes are literal inside the other kind; there are no escapes.
fn shlex_split(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in s.chars() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), _) if q == c => quote = None,
            (None, ' ' | '\t') => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}
