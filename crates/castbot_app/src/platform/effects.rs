use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use castbot_core::{Effect, RunId, ScrapeOutcome};
use castbot_engine::{EngineHandle, ScrapeRange, ScrapeSummary};
use castbot_logging::castbot_info;
use teloxide::types::ChatId;

/// Executes engine-side effects and remembers which chat each run reports to.
pub struct EffectRunner {
    engine: EngineHandle,
    run_chats: Mutex<HashMap<RunId, ChatId>>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            engine,
            run_chats: Mutex::new(HashMap::new()),
        }
    }

    /// Runs `StartScrape`/`StopScrape` and hands back the chat-facing effects
    /// in their original order.
    pub fn apply(&self, chat: ChatId, effects: Vec<Effect>) -> Vec<Effect> {
        let mut outgoing = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                Effect::StartScrape(job) => {
                    castbot_info!(
                        "StartScrape run_id={} host={} ids={}..={}",
                        job.run_id,
                        job.domain.host(),
                        job.start_id,
                        job.end_id
                    );
                    self.chats().insert(job.run_id, chat);
                    self.engine.start(ScrapeRange {
                        run_id: job.run_id,
                        host: job.domain.host().to_string(),
                        start_id: job.start_id,
                        end_id: job.end_id,
                    });
                }
                Effect::StopScrape => self.engine.stop(),
                other => outgoing.push(other),
            }
        }
        outgoing
    }

    pub fn chat_for(&self, run_id: RunId) -> Option<ChatId> {
        self.chats().get(&run_id).copied()
    }

    /// Forgets the run and returns its chat.
    pub fn finish(&self, run_id: RunId) -> Option<ChatId> {
        self.chats().remove(&run_id)
    }

    fn chats(&self) -> std::sync::MutexGuard<'_, HashMap<RunId, ChatId>> {
        self.run_chats.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn map_summary(summary: ScrapeSummary) -> ScrapeOutcome {
    ScrapeOutcome {
        found: summary.found,
        failures: summary.failures,
        cancelled: summary.cancelled,
    }
}
