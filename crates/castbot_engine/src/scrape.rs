use std::time::Duration;

use castbot_logging::{castbot_debug, castbot_info, castbot_warn};
use tokio_util::sync::CancellationToken;

use crate::{EngineEvent, ProfileSource, RunId, ScrapeSummary};

/// Inclusive id range on one mirror host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRange {
    pub run_id: RunId,
    pub host: String,
    pub start_id: u64,
    pub end_id: u64,
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

/// Rate limiter between consecutive lookups.
#[async_trait::async_trait]
pub trait Pacer: Send + Sync {
    /// Waits one interval; may return early once `cancel` fires.
    async fn pause(&self, cancel: &CancellationToken);
}

#[derive(Debug, Clone, Copy)]
pub struct TokioPacer {
    interval: Duration,
}

impl TokioPacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for TokioPacer {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait::async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, cancel: &CancellationToken) {
        tokio::select! {
            _ = tokio::time::sleep(self.interval) => {}
            _ = cancel.cancelled() => {}
        }
    }
}

/// Walks the range one id at a time: look up, report a hit, pause, repeat.
///
/// Cancellation is checked before every lookup, so an in-flight request
/// always completes and only the following ids are skipped. Lookup errors
/// are logged and counted but never end the run.
pub async fn run_scrape(
    source: &dyn ProfileSource,
    pacer: &dyn Pacer,
    range: &ScrapeRange,
    cancel: &CancellationToken,
    sink: &dyn EventSink,
) -> ScrapeSummary {
    let mut summary = ScrapeSummary::default();
    castbot_info!(
        "Run {} scraping {} ids {}..={}",
        range.run_id,
        range.host,
        range.start_id,
        range.end_id
    );

    for id in range.start_id..=range.end_id {
        if cancel.is_cancelled() {
            summary.cancelled = true;
            break;
        }

        match source.lookup(&range.host, id).await {
            Ok(Some(profile)) => {
                summary.found += 1;
                sink.emit(EngineEvent::ProfileFound {
                    run_id: range.run_id,
                    id,
                    profile,
                });
            }
            Ok(None) => {
                castbot_debug!("Run {} id {} has no profile", range.run_id, id);
                summary.misses += 1;
            }
            Err(err) => {
                castbot_warn!("Run {} id {} lookup failed: {}", range.run_id, id, err);
                summary.failures += 1;
            }
        }

        pacer.pause(cancel).await;
    }

    castbot_info!(
        "Run {} finished: found={} misses={} failures={} cancelled={}",
        range.run_id,
        summary.found,
        summary.misses,
        summary.failures,
        summary.cancelled
    );
    sink.emit(EngineEvent::ScrapeFinished {
        run_id: range.run_id,
        summary,
    });
    summary
}
