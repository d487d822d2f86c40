use castbot_core::{
    texts, update, Action, Domain, Effect, IdKind, Msg, ScrapeOutcome, Session, UserId,
};

const OPERATOR: UserId = UserId(1);

fn operator(state: Session, action: Action) -> (Session, Vec<Effect>) {
    update(
        state,
        Msg::User {
            from: OPERATOR,
            action,
        },
    )
}

fn started(start: &str, end: &str) -> Session {
    let (state, _) = operator(Session::new(OPERATOR), Action::SelectDomain(Domain::Russia));
    let mut state = state;
    for (kind, text) in [(IdKind::Start, start), (IdKind::End, end)] {
        let (next, _) = operator(state, Action::RequestSetId(kind));
        let (next, _) = operator(next, Action::Text(text.to_string()));
        state = next;
    }
    let (state, _) = operator(state, Action::StartScraping);
    assert!(state.is_scraping());
    state
}

fn finish(state: Session, run_id: u64, outcome: ScrapeOutcome) -> (Session, Vec<Effect>) {
    update(state, Msg::ScrapeFinished { run_id, outcome })
}

#[test]
fn completion_with_results_clears_flag_without_no_results_notice() {
    let state = started("100", "102");

    let (state, effects) = finish(
        state,
        1,
        ScrapeOutcome {
            found: 1,
            failures: 0,
            cancelled: false,
        },
    );

    assert!(!state.is_scraping());
    assert_eq!(
        effects,
        vec![Effect::Send {
            text: texts::finished(1),
            keyboard: None,
        }]
    );
}

#[test]
fn empty_range_emits_exactly_one_no_results_notice() {
    let state = started("5", "5");

    let (state, effects) = finish(state, 1, ScrapeOutcome::default());

    assert!(!state.is_scraping());
    let notices = effects
        .iter()
        .filter(|effect| matches!(effect, Effect::Send { text, .. } if text == texts::NO_RESULTS))
        .count();
    assert_eq!(notices, 1);
    assert_eq!(effects.len(), 1);
}

#[test]
fn no_results_notice_mentions_failed_requests() {
    let state = started("1", "4");

    let (_, effects) = finish(
        state,
        1,
        ScrapeOutcome {
            found: 0,
            failures: 2,
            cancelled: false,
        },
    );

    let [Effect::Send { text, .. }] = effects.as_slice() else {
        panic!("unexpected effects: {effects:?}");
    };
    assert!(text.starts_with(texts::NO_RESULTS));
    assert!(text.contains("2 request(s) failed"));
}

#[test]
fn cancelled_run_with_results_reports_nothing_more() {
    let (state, _) = operator(started("1", "50"), Action::StopScraping);

    let (state, effects) = finish(
        state,
        1,
        ScrapeOutcome {
            found: 3,
            failures: 0,
            cancelled: true,
        },
    );

    assert!(!state.is_scraping());
    assert!(effects.is_empty());
}

#[test]
fn stale_completion_does_not_end_newer_run() {
    let (state, _) = operator(started("1", "50"), Action::StopScraping);
    let (state, _) = operator(state, Action::StartScraping);
    assert_eq!(state.active_run(), Some(2));

    let (state, _) = finish(
        state,
        1,
        ScrapeOutcome {
            found: 0,
            failures: 0,
            cancelled: true,
        },
    );

    assert!(state.is_scraping());
    assert_eq!(state.active_run(), Some(2));

    let (state, _) = finish(state, 2, ScrapeOutcome::default());
    assert!(!state.is_scraping());
}

#[test]
fn bounds_survive_a_completed_run() {
    let (state, _) = finish(started("7", "9"), 1, ScrapeOutcome::default());

    assert_eq!(state.start_id(), Some(7));
    assert_eq!(state.end_id(), Some(9));
    assert_eq!(state.domain(), Some(Domain::Russia));

    let (state, effects) = operator(state, Action::StartScraping);
    assert!(state.is_scraping());
    assert_eq!(effects.len(), 2);
}
