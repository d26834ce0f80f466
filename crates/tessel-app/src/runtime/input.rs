//! Reading the native layer's line protocol.

use tessel_common::errors::ProtocolError;
use tessel_tiling::{NativeEvent, NativeSnapshot};
use tokio::io::{AsyncBufRead, Lines};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Await the startup snapshot: the first non-blank line.
pub async fn read_snapshot<R>(lines: &mut Lines<R>) -> Result<NativeSnapshot, ProtocolError>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let line = lines
            .next_line()
            .await
            .map_err(|e| ProtocolError::MissingSnapshot(e.to_string()))?
            .ok_or_else(|| ProtocolError::MissingSnapshot("input closed".into()))?;
        if line.trim().is_empty() {
            continue;
        }
        return NativeSnapshot::from_json_line(&line);
    }
}

/// Forward every following line as an event until input ends. Malformed
/// lines are logged and skipped. Returns how many events were forwarded.
///
/// Sending waits while the queue is full, so no event is ever dropped.
/// The sender is dropped on return, which ends the consumer's stream.
pub async fn pump_events<R>(mut lines: Lines<R>, events: mpsc::Sender<NativeEvent>) -> usize
where
    R: AsyncBufRead + Unpin,
{
    let mut published = 0;
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("failed to read native event: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match NativeEvent::from_json_line(&line) {
            Ok(event) => {
                if events.send(event).await.is_err() {
                    debug!("event consumer gone, stopping input");
                    break;
                }
                published += 1;
            }
            Err(e) => warn!("skipping native event: {e}"),
        }
    }
    debug!(published, "native event stream ended");
    published
}
