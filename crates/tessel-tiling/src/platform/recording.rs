//! In-memory bridge that keeps every batch it receives.

use std::sync::Mutex;

use tessel_common::errors::PlatformError;

use super::{NativeBridge, PositionMap, Result};

/// Records each `set_positions` batch. Can be told to fail, to exercise
/// the error path of callers.
#[derive(Default)]
pub struct RecordingBridge {
    calls: Mutex<Vec<PositionMap>>,
    fail_with: Mutex<Option<String>>,
}

impl RecordingBridge {
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Mutex::default(),
            fail_with: Mutex::new(Some(message.into())),
        }
    }

    /// Every batch received so far, oldest first.
    pub fn calls(&self) -> Vec<PositionMap> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<PositionMap> {
        self.calls().pop()
    }
}

impl NativeBridge for RecordingBridge {
    fn set_positions(&self, positions: &PositionMap) -> Result<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(positions.clone());
        }
        match self.fail_with.lock().ok().and_then(|f| f.clone()) {
            Some(message) => Err(PlatformError::BridgeError(message)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_batch() {
        let bridge = RecordingBridge::default();
        bridge.set_positions(&PositionMap::new()).unwrap();
        bridge.set_positions(&PositionMap::new()).unwrap();
        assert_eq!(bridge.calls().len(), 2);
    }

    #[test]
    fn failing_bridge_still_records() {
        let bridge = RecordingBridge::failing("timed out");
        let err = bridge.set_positions(&PositionMap::new()).unwrap_err();
        assert_eq!(err.to_string(), "bridge error: timed out");
        assert_eq!(bridge.calls().len(), 1);
    }
}
