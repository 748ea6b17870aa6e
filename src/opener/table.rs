use std::fmt;

use super::shell::{cd_then_shell, cmd_quote};
use super::Candidate;
use crate::target::TargetDirectory;

/// Operating system families with a known terminal table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS.
    MacOs,
    /// Windows.
    Windows,
    /// Linux and the BSDs.
    Unix,
}

impl Platform {
    /// Map a platform identifier to a family. Accepts both the Rust
    /// `std::env::consts::OS` spelling and the Node-style one (`darwin`,
    /// `win32`). Anything else is unknown.
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_ascii_lowercase().as_str() {
            "darwin" | "macos" => Some(Self::MacOs),
            "win32" | "windows" => Some(Self::Windows),
            "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Some(Self::Unix),
            _ => None,
        }
    }

    /// Identifier of the platform this binary runs on.
    pub const fn current_id() -> &'static str {
        std::env::consts::OS
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Unix => "unix",
        })
    }
}

/// Terminals that take a working-directory flag, in probe order:
/// (display name, program, flag). A flag ending in `=` is joined to the path.
const UNIX_NATIVE: &[(&str, &str, &[&str])] = &[
    ("GNOME Terminal", "gnome-terminal", &["--working-directory="]),
    ("Konsole", "konsole", &["--workdir"]),
    ("Xfce Terminal", "xfce4-terminal", &["--working-directory="]),
    ("MATE Terminal", "mate-terminal", &["--working-directory="]),
    ("Tilix", "tilix", &["--working-directory="]),
    ("Alacritty", "alacritty", &["--working-directory"]),
    ("Kitty", "kitty", &["--directory"]),
    ("WezTerm", "wezterm", &["start", "--cwd"]),
];

/// Ordered candidate list for `platform`, most preferred first.
pub fn candidates_for(platform: Platform, dir: &TargetDirectory) -> Vec<Candidate> {
    match platform {
        Platform::MacOs => vec![
            mac_app("Terminal.app", "Terminal", dir),
            mac_app("iTerm", "iTerm", dir),
        ],
        Platform::Windows => vec![
            Candidate::new(
                "Windows Terminal",
                "wt",
                vec!["-d".into(), dir.as_str().into()],
            ),
            Candidate::new(
                "Command Prompt",
                "cmd",
                vec![
                    "/c".into(),
                    "start".into(),
                    "cmd.exe".into(),
                    "/K".into(),
                    format!("cd /d {}", cmd_quote(dir.as_str())),
                ],
            ),
        ],
        Platform::Unix => {
            let mut list: Vec<Candidate> = UNIX_NATIVE
                .iter()
                .map(|&(name, program, flag)| native_flag(name, program, flag, dir))
                .collect();
            // xterm has no working-directory flag
            list.push(Candidate::new(
                "XTerm",
                "xterm",
                vec!["-e".into(), "sh".into(), "-c".into(), cd_then_shell(dir)],
            ));
            list
        }
    }
}

fn mac_app(name: &str, app: &str, dir: &TargetDirectory) -> Candidate {
    Candidate::new(
        name,
        "open",
        vec!["-a".into(), app.into(), dir.as_str().into()],
    )
}

fn native_flag(name: &str, program: &str, flag: &[&str], dir: &TargetDirectory) -> Candidate {
    let mut args: Vec<String> = flag.iter().map(|s| (*s).to_string()).collect();
    match args.last_mut() {
        Some(last) if last.ends_with('=') => last.push_str(dir.as_str()),
        _ => args.push(dir.as_str().to_string()),
    }
    Candidate::new(name, program, args)
}
