use crate::{Domain, RunId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Inbound chat action from a user, authorized or not.
    User { from: UserId, action: Action },
    /// Engine finished (or abandoned) a scrape run.
    ScrapeFinished {
        run_id: RunId,
        outcome: ScrapeOutcome,
    },
}

/// A single user action, decoded from a command, button press or reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `/start`: show the domain choice.
    RequestDomainSelection,
    SelectDomain(Domain),
    RequestSetId(IdKind),
    StartScraping,
    StopScraping,
    /// Free text; only meaningful while a start/end prompt is pending.
    Text(String),
}

impl Action {
    pub fn from_callback_data(data: &str) -> Option<Self> {
        if let Some(domain) = Domain::from_callback_data(data) {
            return Some(Action::SelectDomain(domain));
        }
        match data {
            "set_start" => Some(Action::RequestSetId(IdKind::Start)),
            "set_end" => Some(Action::RequestSetId(IdKind::End)),
            "start_scraping" => Some(Action::StartScraping),
            "stop_scraping" => Some(Action::StopScraping),
            _ => None,
        }
    }

    /// Classifies an incoming chat message. `/start` and `/start@botname`
    /// are the only commands; everything else is free text.
    pub fn from_message_text(text: &str) -> Self {
        let trimmed = text.trim();
        let command = trimmed.split_whitespace().next().unwrap_or_default();
        let command = command.split('@').next().unwrap_or_default();
        if command == "/start" {
            Action::RequestDomainSelection
        } else {
            Action::Text(text.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Start,
    End,
}

impl IdKind {
    pub fn label(self) -> &'static str {
        match self {
            IdKind::Start => "Start",
            IdKind::End => "End",
        }
    }
}

/// Result of a scrape run as seen by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrapeOutcome {
    pub found: u64,
    pub failures: u64,
    pub cancelled: bool,
}
