//! Bridge that writes each command as one JSON line.
//!
//! The native process reads these from the shell's stdout.

use std::io::Write;
use std::sync::Mutex;

use tessel_common::errors::PlatformError;

use super::{NativeBridge, OutboundCommand, PositionMap, Result};

pub struct JsonLinesBridge<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesBridge<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|_| PlatformError::WriteError("writer lock poisoned".into()))
    }
}

impl<W: Write + Send> NativeBridge for JsonLinesBridge<W> {
    fn set_positions(&self, positions: &PositionMap) -> Result<()> {
        let command = OutboundCommand::SetWindowPositions {
            positions: positions.clone(),
        };
        let line = serde_json::to_string(&command)
            .map_err(|e| PlatformError::WriteError(format!("failed to encode command: {e}")))?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| PlatformError::WriteError("writer lock poisoned".into()))?;
        writeln!(writer, "{line}")
            .and_then(|_| writer.flush())
            .map_err(|e| PlatformError::WriteError(e.to_string()))
    }
}
