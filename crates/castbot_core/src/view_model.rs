use crate::{Domain, IdKind};

/// Inline button sets the notifier can attach to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyboard {
    DomainChoice,
    RangeControl,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub data: &'static str,
}

impl Keyboard {
    /// Rows of buttons, top to bottom.
    pub fn rows(self) -> Vec<Vec<Button>> {
        match self {
            Keyboard::DomainChoice => vec![Domain::ALL
                .into_iter()
                .map(|domain| Button {
                    label: domain.label(),
                    data: domain.callback_data(),
                })
                .collect()],
            Keyboard::RangeControl => vec![vec![
                Button {
                    label: "Set Start ID",
                    data: "set_start",
                },
                Button {
                    label: "Set End ID",
                    data: "set_end",
                },
                Button {
                    label: "Start Scraping",
                    data: "start_scraping",
                },
            ]],
            Keyboard::Stop => vec![vec![Button {
                label: "Stop Scraping",
                data: "stop_scraping",
            }]],
        }
    }
}

/// Fixed operator-facing texts.
pub mod texts {
    use super::*;

    pub const UNAUTHORIZED: &str = "Sorry, you are not authorized to use this bot.";
    pub const SELECT_COUNTRY: &str = "Please select your country:";
    pub const DOMAIN_LOCKED: &str = "Cannot change country during active scraping.";
    pub const ID_LOCKED: &str = "Cannot change ID during active scraping.";
    pub const ALREADY_RUNNING: &str = "Scraping is already in progress.";
    pub const BOUNDS_MISSING: &str = "Please set both Start and End IDs first.";
    pub const DOMAIN_MISSING: &str = "Please select your country first.";
    pub const BOUNDS_REVERSED: &str = "Start ID must not be greater than End ID.";
    pub const INVALID_NUMBER: &str = "Please enter a valid number for ID.";
    pub const STARTED: &str = "Scraping started";
    pub const STOPPED: &str = "Scraping stopped";
    pub const NO_RESULTS: &str = "No results found in the specified ID range.";

    /// Replies that turn an action down without changing the session.
    pub const REJECTIONS: [&str; 8] = [
        UNAUTHORIZED,
        DOMAIN_LOCKED,
        ID_LOCKED,
        ALREADY_RUNNING,
        BOUNDS_MISSING,
        DOMAIN_MISSING,
        BOUNDS_REVERSED,
        INVALID_NUMBER,
    ];

    pub fn domain_selected(domain: Domain) -> String {
        format!("Selected domain: {}", domain.host())
    }

    pub fn enter_id(kind: IdKind) -> String {
        format!("Please enter the {} ID:", kind.label())
    }

    pub fn id_set(kind: IdKind, value: u64) -> String {
        format!("{} ID set to: {}", kind.label(), value)
    }

    pub fn no_results(failures: u64) -> String {
        if failures == 0 {
            NO_RESULTS.to_string()
        } else {
            format!("{NO_RESULTS}\n{failures} request(s) failed along the way.")
        }
    }

    pub fn finished(found: u64) -> String {
        format!("Scraping finished. Profiles found: {found}")
    }
}
