use crate::schema::TesselConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use std::path::{Path, PathBuf};
use tessel_common::ConfigError;
use tokio::sync::{broadcast, watch};
use tracing::{debug, error, info, warn};

/// Republishes settings whenever the settings file changes.
///
/// Subscribers only wake for settings that differ from the current ones,
/// so saving an unchanged file does not retile anything.
pub struct ReloadManager {
    pub(super) config_path: PathBuf,
    pub(super) settings_tx: watch::Sender<TesselConfig>,
}

impl ReloadManager {
    /// Publish `initial` and start watching `config_path` for changes.
    ///
    /// A reload that fails to load or validate is logged and the current
    /// settings stay.
    pub fn start(config_path: PathBuf, initial: TesselConfig) -> watch::Receiver<TesselConfig> {
        let (settings_tx, settings_rx) = watch::channel(initial);
        let manager = ReloadManager {
            config_path,
            settings_tx,
        };
        tokio::spawn(manager.run());
        settings_rx
    }

    async fn run(self) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);
        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {
                    if !self.reload() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }

    /// Returns false once nobody listens for settings anymore.
    pub(super) fn reload(&self) -> bool {
        if self.settings_tx.is_closed() {
            info!("all settings receivers dropped, stopping reload manager");
            return false;
        }
        match load_validated(&self.config_path) {
            Ok(config) => {
                let changed = self.settings_tx.send_if_modified(|current| {
                    if *current == config {
                        return false;
                    }
                    *current = config;
                    true
                });
                if changed {
                    info!("settings reloaded from {}", self.config_path.display());
                } else {
                    debug!("settings file saved without changes");
                }
            }
            Err(e) => warn!("config reload failed, keeping current settings: {e}"),
        }
        true
    }
}

fn load_validated(path: &Path) -> Result<TesselConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
