use std::sync::{Arc, Mutex, PoisonError};

use castbot_logging::castbot_info;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::scrape::{run_scrape, EventSink, Pacer, ScrapeRange};
use crate::{EngineEvent, ProfileSource, RunId};

struct ChannelSink {
    tx: mpsc::UnboundedSender<EngineEvent>,
}

impl EventSink for ChannelSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Runs scrape loops on the tokio runtime and streams their events.
///
/// At most one run is tracked; starting a new run cancels the previous one.
#[derive(Clone)]
pub struct EngineHandle {
    source: Arc<dyn ProfileSource>,
    pacer: Arc<dyn Pacer>,
    event_tx: mpsc::UnboundedSender<EngineEvent>,
    active: Arc<Mutex<Option<(RunId, CancellationToken)>>>,
}

impl EngineHandle {
    pub fn new(
        source: Arc<dyn ProfileSource>,
        pacer: Arc<dyn Pacer>,
    ) -> (Self, mpsc::UnboundedReceiver<EngineEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let handle = Self {
            source,
            pacer,
            event_tx,
            active: Arc::new(Mutex::new(None)),
        };
        (handle, event_rx)
    }

    /// Spawns the loop for `range`. Must be called from within a tokio runtime.
    pub fn start(&self, range: ScrapeRange) {
        let cancel = CancellationToken::new();
        let previous = self
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace((range.run_id, cancel.clone()));
        if let Some((run_id, token)) = previous {
            castbot_info!("Run {} superseded by run {}", run_id, range.run_id);
            token.cancel();
        }

        let source = self.source.clone();
        let pacer = self.pacer.clone();
        let sink = ChannelSink {
            tx: self.event_tx.clone(),
        };
        let active = self.active.clone();
        tokio::spawn(async move {
            run_scrape(source.as_ref(), pacer.as_ref(), &range, &cancel, &sink).await;
            let mut guard = active.lock().unwrap_or_else(PoisonError::into_inner);
            if matches!(guard.as_ref(), Some((run_id, _)) if *run_id == range.run_id) {
                *guard = None;
            }
        });
    }

    /// Cancels the active run, if any. The loop notices at its next iteration.
    pub fn stop(&self) {
        let active = self
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some((run_id, token)) = active {
            castbot_info!("Stopping run {}", run_id);
            token.cancel();
        }
    }

    pub fn active_run(&self) -> Option<RunId> {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|(run_id, _)| *run_id)
    }
}
