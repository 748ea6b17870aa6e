use anyhow::Result;
use std::path::PathBuf;
use termhere::{
    config::Config,
    host::ConsoleHost,
    launcher::{self, Resolution},
    logging,
    opener::{Platform, SystemSpawner},
    target,
};

pub struct OpenArgs {
    pub path: Option<PathBuf>,
    pub active_file: Option<PathBuf>,
    pub platform: Option<String>,
    pub no_fallback: bool,
}

pub async fn cmd_open(args: OpenArgs) -> Result<()> {
    let mut config = Config::load()?;
    if args.no_fallback {
        config.fallback.integrated = false;
    }
    init_logging(&config);

    let dir = target::resolve_target(args.path.as_deref(), args.active_file.as_deref())?;
    let platform = args
        .platform
        .unwrap_or_else(|| Platform::current_id().to_owned());
    tracing::debug!(%dir, %platform, profile = %config.terminal.profile, "open requested");

    match launcher::open_here(&SystemSpawner, &ConsoleHost, &config, &platform, &dir).await? {
        Resolution::Launched(candidate) => eprintln!("Opened {} in {dir}", candidate.name),
        Resolution::Integrated | Resolution::Unavailable => {}
    }
    Ok(())
}

fn init_logging(config: &Config) {
    let sink = logging::default_path()
        .and_then(|path| logging::get_or_create(&path, &config.log.level));
    if let Err(e) = sink {
        eprintln!("Warning: logging disabled: {e:#}");
    }
}
