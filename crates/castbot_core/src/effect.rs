use crate::view_model::texts;
use crate::{Domain, Keyboard, RunId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Chat message, optionally with an inline button set.
    Send {
        text: String,
        keyboard: Option<Keyboard>,
    },
    /// Short notice: a callback toast when answering a button press,
    /// a plain message otherwise.
    Notice(String),
    StartScrape(ScrapeJob),
    StopScrape,
}

impl Effect {
    pub(crate) fn send(text: impl Into<String>) -> Self {
        Effect::Send {
            text: text.into(),
            keyboard: None,
        }
    }

    pub(crate) fn prompt(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Effect::Send {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }

    pub(crate) fn notice(text: impl Into<String>) -> Self {
        Effect::Notice(text.into())
    }

    /// The reply text when this effect turns a user action down.
    pub fn rejection(&self) -> Option<&str> {
        let text = match self {
            Effect::Send { text, .. } | Effect::Notice(text) => text.as_str(),
            Effect::StartScrape(_) | Effect::StopScrape => return None,
        };
        texts::REJECTIONS
            .iter()
            .any(|rejection| *rejection == text)
            .then_some(text)
    }
}

/// Everything the engine needs to run one scrape over an inclusive id range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeJob {
    pub run_id: RunId,
    pub domain: Domain,
    pub start_id: u64,
    pub end_id: u64,
}
