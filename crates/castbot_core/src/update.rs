use crate::view_model::texts;
use crate::{Action, Effect, Keyboard, Msg, ScrapeJob, ScrapeOutcome, Session, UserId};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: Session, msg: Msg) -> (Session, Vec<Effect>) {
    let effects = match msg {
        Msg::User { from, action } => handle_action(&mut state, from, action),
        Msg::ScrapeFinished { run_id, outcome } => {
            // A stopped run may report after a newer run was activated; only
            // the active run may clear the flag.
            if state.active_run() == Some(run_id) {
                state.end_run();
            }
            finished_effects(outcome)
        }
    };

    (state, effects)
}

fn handle_action(state: &mut Session, from: UserId, action: Action) -> Vec<Effect> {
    if !state.is_authorized(from) {
        return vec![Effect::notice(texts::UNAUTHORIZED)];
    }

    match action {
        Action::RequestDomainSelection => {
            state.clear_awaiting();
            vec![Effect::prompt(texts::SELECT_COUNTRY, Keyboard::DomainChoice)]
        }
        Action::SelectDomain(domain) => {
            if state.is_scraping() {
                return vec![Effect::notice(texts::DOMAIN_LOCKED)];
            }
            state.clear_awaiting();
            state.set_domain(domain);
            vec![Effect::prompt(
                texts::domain_selected(domain),
                Keyboard::RangeControl,
            )]
        }
        Action::RequestSetId(kind) => {
            if state.is_scraping() {
                return vec![Effect::notice(texts::ID_LOCKED)];
            }
            state.await_input(kind);
            vec![Effect::send(texts::enter_id(kind))]
        }
        Action::Text(text) => submit_id(state, &text),
        Action::StartScraping => start_scraping(state),
        Action::StopScraping => {
            state.end_run();
            vec![Effect::StopScrape, Effect::send(texts::STOPPED)]
        }
    }
}

fn submit_id(state: &mut Session, text: &str) -> Vec<Effect> {
    let Some(kind) = state.awaiting_input() else {
        return Vec::new();
    };
    if state.is_scraping() {
        return vec![Effect::notice(texts::ID_LOCKED)];
    }
    state.take_awaiting();

    match parse_id(text) {
        Some(value) => {
            state.set_id(kind, value);
            vec![Effect::send(texts::id_set(kind, value))]
        }
        None => vec![Effect::prompt(texts::INVALID_NUMBER, Keyboard::RangeControl)],
    }
}

fn start_scraping(state: &mut Session) -> Vec<Effect> {
    if state.is_scraping() {
        return vec![Effect::notice(texts::ALREADY_RUNNING)];
    }
    let (Some(start_id), Some(end_id)) = (state.start_id(), state.end_id()) else {
        return vec![Effect::prompt(texts::BOUNDS_MISSING, Keyboard::RangeControl)];
    };
    let Some(domain) = state.domain() else {
        return vec![Effect::prompt(texts::DOMAIN_MISSING, Keyboard::DomainChoice)];
    };
    if start_id > end_id {
        return vec![Effect::prompt(texts::BOUNDS_REVERSED, Keyboard::RangeControl)];
    }

    state.clear_awaiting();
    let run_id = state.begin_run();
    vec![
        Effect::notice(texts::STARTED),
        Effect::StartScrape(ScrapeJob {
            run_id,
            domain,
            start_id,
            end_id,
        }),
    ]
}

fn finished_effects(outcome: ScrapeOutcome) -> Vec<Effect> {
    if outcome.found == 0 {
        vec![Effect::send(texts::no_results(outcome.failures))]
    } else if !outcome.cancelled {
        vec![Effect::send(texts::finished(outcome.found))]
    } else {
        Vec::new()
    }
}

/// Ids are non-negative decimal integers; surrounding whitespace is allowed.
fn parse_id(text: &str) -> Option<u64> {
    text.trim().parse::<u64>().ok()
}
