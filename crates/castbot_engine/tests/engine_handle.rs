use std::sync::Arc;
use std::time::Duration;

use castbot_engine::{
    CastingProfile, EngineEvent, EngineHandle, FetchError, ProfileSource, ScrapeRange, TokioPacer,
};
use tokio::time::timeout;

struct EverySource;

#[async_trait::async_trait]
impl ProfileSource for EverySource {
    async fn lookup(&self, host: &str, id: u64) -> Result<Option<CastingProfile>, FetchError> {
        Ok(Some(CastingProfile {
            link: format!("https://{host}/a_{id}"),
            name: format!("N{id}"),
            age: String::new(),
            gender: String::new(),
            country: String::new(),
            city: String::new(),
        }))
    }
}

fn range(run_id: u64, start_id: u64, end_id: u64) -> ScrapeRange {
    ScrapeRange {
        run_id,
        host: "acmodasi.com.ua".to_string(),
        start_id,
        end_id,
    }
}

async fn next_event(rx: &mut tokio::sync::mpsc::UnboundedReceiver<EngineEvent>) -> EngineEvent {
    timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("event in time")
        .expect("channel open")
}

#[tokio::test]
async fn handle_streams_profiles_then_summary() {
    let (engine, mut rx) = EngineHandle::new(
        Arc::new(EverySource),
        Arc::new(TokioPacer::new(Duration::from_millis(1))),
    );

    engine.start(range(1, 1, 2));

    let mut ids = Vec::new();
    loop {
        match next_event(&mut rx).await {
            EngineEvent::ProfileFound { id, .. } => ids.push(id),
            EngineEvent::ScrapeFinished { run_id, summary } => {
                assert_eq!(run_id, 1);
                assert_eq!(summary.found, 2);
                assert!(!summary.cancelled);
                break;
            }
        }
    }
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn stop_cancels_within_one_pause() {
    let (engine, mut rx) = EngineHandle::new(
        Arc::new(EverySource),
        Arc::new(TokioPacer::new(Duration::from_secs(60))),
    );

    engine.start(range(3, 1, 1_000));
    let first = next_event(&mut rx).await;
    assert!(matches!(first, EngineEvent::ProfileFound { id: 1, .. }));
    assert_eq!(engine.active_run(), Some(3));

    engine.stop();

    match next_event(&mut rx).await {
        EngineEvent::ScrapeFinished { run_id, summary } => {
            assert_eq!(run_id, 3);
            assert!(summary.cancelled);
            assert_eq!(summary.found, 1);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(engine.active_run(), None);
}
