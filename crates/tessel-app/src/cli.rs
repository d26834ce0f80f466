use clap::Parser;
use std::path::PathBuf;

/// Tessel: keeps native windows aligned with the shell's tiling layout.
///
/// Reads a startup snapshot and then one event per line from the native
/// window manager, and writes `set_window_positions` commands to stdout.
#[derive(Parser, Debug)]
#[command(name = "tessel", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error or a full
    /// filter directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Read native events from a file instead of stdin.
    #[arg(long)]
    pub events: Option<PathBuf>,

    /// Override the shell window's device pixel ratio from the snapshot.
    #[arg(long)]
    pub scale: Option<f64>,

    /// Override the shell window's client width (device-independent px).
    #[arg(long)]
    pub width: Option<f64>,

    /// Override the shell window's client height (device-independent px).
    #[arg(long)]
    pub height: Option<f64>,
}

impl Args {
    /// `EnvFilter` directive from `--log-level`. A bare level applies to
    /// the workspace crates only.
    pub fn log_directive(&self) -> Option<String> {
        self.log_level.as_deref().map(|level| {
            if level.contains('=') {
                level.to_string()
            } else {
                format!("tessel={level}")
            }
        })
    }
}

pub fn parse() -> Args {
    Args::parse()
}
