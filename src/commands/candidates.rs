use anyhow::{Context, Result};
use std::fmt::Write;
use std::path::Path;
use termhere::{
    opener::{candidates_for, Candidate, Platform, DECISION_WINDOW},
    target,
};


pub fn cmd_candidates(dir: &Path, platform_id: Option<&str>) -> Result<()> {
    let id = platform_id.map_or_else(|| Platform::current_id().to_owned(), str::to_owned);
    let platform = Platform::from_id(&id).with_context(|| format!("Unknown platform: {id}"))?;
    let dir = target::resolve_target(Some(dir), None)?;

    let list = candidates_for(platform, &dir);
    print!(
        "{}",
        render_listing(platform, &list, |program| which::which(program).is_ok())
    );
    Ok(())
}

/// One line per candidate, marked `[x]` when its program is installed.
fn render_listing(
    platform: Platform,
    list: &[Candidate],
    installed: impl Fn(&str) -> bool,
) -> String {
    let mut out = format!(
        "{platform} terminals, in order (decision window {}):\n",
        humantime::format_duration(DECISION_WINDOW)
    );
    for (i, candidate) in list.iter().enumerate() {
        let mark = if installed(&candidate.program) { 'x' } else { ' ' };
        let _ = writeln!(out, "  {}. [{mark}] {}: {candidate}", i + 1, candidate.name);
    }
    out
}
