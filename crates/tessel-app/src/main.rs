mod cli;
mod runtime;

use std::path::PathBuf;
use std::process::ExitCode;

use tessel_common::{ConfigError, TesselError};
use tessel_config::toml_loader::{create_default_config, default_config_path};
use tessel_config::{load_config_from, ReloadManager, TesselConfig};
use tessel_tiling::platform::JsonLinesBridge;
use tessel_tiling::WmState;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::runtime::input::{pump_events, read_snapshot};
use crate::runtime::SyncLoop;

const EVENT_QUEUE_CAPACITY: usize = 256;

fn resolve_config_path(args: &Args) -> Result<PathBuf, ConfigError> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    if !path.exists() {
        create_default_config(&path)?;
    }
    Ok(path)
}

fn init_logging(args: &Args, config: &TesselConfig) {
    let directive = args
        .log_directive()
        .unwrap_or_else(|| config.logging.directive());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("invalid log directive {directive:?}: {e}");
        EnvFilter::new("tessel=info")
    });
    // stdout carries the command stream
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn open_input(args: &Args) -> Result<Box<dyn AsyncBufRead + Unpin + Send>, TesselError> {
    match &args.events {
        Some(path) => {
            let file = tokio::fs::File::open(path).await?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(tokio::io::stdin()))),
    }
}

async fn run(args: Args, config_path: PathBuf, config: TesselConfig) -> Result<(), TesselError> {
    let settings = ReloadManager::start(config_path, config.clone());

    let mut lines = open_input(&args).await?.lines();
    let mut snapshot = read_snapshot(&mut lines).await?;
    if let Some(scale) = args.scale {
        snapshot.host.scale_factor = scale;
    }
    if let Some(width) = args.width {
        snapshot.host.width = width;
    }
    if let Some(height) = args.height {
        snapshot.host.height = height;
    }
    info!(
        width = snapshot.host.width,
        height = snapshot.host.height,
        scale = snapshot.host.scale_factor,
        "startup snapshot received"
    );

    let state = WmState::new(snapshot, &config);
    let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);
    let pump = tokio::spawn(pump_events(lines, events_tx));

    let bridge = JsonLinesBridge::new(std::io::stdout());
    let (_, summary) = SyncLoop::new(state, bridge, &config)
        .run(events_rx, Some(settings))
        .await;

    match pump.await {
        Ok(published) => info!(published, syncs = summary.syncs, "native stream closed"),
        Err(e) => error!("event reader task failed: {e}"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Logging needs the configured level, so settings load before it is
    // set up and any failure is reported right after.
    let config_path = resolve_config_path(&args);
    let loaded = match &config_path {
        Ok(path) => Some(load_config_from(path)),
        Err(_) => None,
    };
    let config = match &loaded {
        Some(Ok(config)) => config.clone(),
        _ => TesselConfig::default(),
    };
    init_logging(&args, &config);

    let config_path = match config_path {
        Ok(path) => path,
        Err(e) => {
            error!("cannot resolve config file: {e}");
            return ExitCode::FAILURE;
        }
    };
    match loaded {
        Some(Err(e)) => warn!("failed to load config: {e}, using defaults"),
        _ => info!("config loaded from {}", config_path.display()),
    }

    match run(args, config_path, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("tessel failed: {e}");
            ExitCode::FAILURE
        }
    }
}
