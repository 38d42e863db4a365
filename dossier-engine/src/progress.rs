//! Progress event delivery: bounded channel, lossy under back-pressure,
//! observer runs on its own task so a slow or panicking callback can
//! never stall an iteration.

use std::panic::{catch_unwind, AssertUnwindSafe};

use dossier_core::models::ProgressEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct ProgressReporter {
    tx: Option<mpsc::Sender<ProgressEvent>>,
}

impl ProgressReporter {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn new(tx: mpsc::Sender<ProgressEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Fire-and-forget emit. A full channel drops the event.
    pub fn emit(&self, event: ProgressEvent) {
        let Some(tx) = &self.tx else { return };
        if let Err(mpsc::error::TrySendError::Full(event)) = tx.try_send(event) {
            debug!(event_type = ?event.event_type, "progress channel full; event dropped");
        }
    }
}

/// Spawn the observer task: drains the channel and hands each event to
/// the callback. A panicking callback is logged and the observer keeps
/// draining.
pub fn spawn_observer<F>(
    mut rx: mpsc::Receiver<ProgressEvent>,
    mut callback: F,
) -> JoinHandle<()>
where
    F: FnMut(ProgressEvent) + Send + 'static,
{
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            if catch_unwind(AssertUnwindSafe(|| callback(event))).is_err() {
                warn!("progress observer callback panicked; event discarded");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::models::ProgressEventKind;

    #[tokio::test]
    async fn full_channel_drops_instead_of_blocking() {
        let (tx, mut rx) = mpsc::channel(1);
        let reporter = ProgressReporter::new(tx);
        reporter.emit(ProgressEvent::new(ProgressEventKind::TypeStarted, "one"));
        reporter.emit(ProgressEvent::new(ProgressEventKind::TypeStarted, "two"));

        let first = rx.recv().await.unwrap();
        assert_eq!(first.message, "one");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn observer_survives_a_panicking_callback() {
        let (tx, rx) = mpsc::channel(8);
        let (seen_tx, mut seen_rx) = mpsc::unbounded_channel();
        let handle = spawn_observer(rx, move |event: ProgressEvent| {
            if event.message == "boom" {
                panic!("observer callback exploded");
            }
            let _ = seen_tx.send(event.message);
        });

        tx.send(ProgressEvent::new(ProgressEventKind::TypeStarted, "boom"))
            .await
            .unwrap();
        tx.send(ProgressEvent::new(ProgressEventKind::TypeStarted, "after"))
            .await
            .unwrap();
        drop(tx);

        assert_eq!(seen_rx.recv().await.unwrap(), "after");
        handle.await.unwrap();
    }
}
