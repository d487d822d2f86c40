use crate::{Domain, IdKind};

/// Telegram user identity as a plain number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub u64);

/// Monotonic identifier of one scrape activation.
pub type RunId = u64;

/// The single operator session.
///
/// Domain and range only change while no run is active; the active run is
/// the `is_scraping` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    authorized: UserId,
    domain: Option<Domain>,
    start_id: Option<u64>,
    end_id: Option<u64>,
    awaiting: Option<IdKind>,
    active_run: Option<RunId>,
    last_run: RunId,
}

impl Session {
    pub fn new(authorized: UserId) -> Self {
        Self {
            authorized,
            domain: None,
            start_id: None,
            end_id: None,
            awaiting: None,
            active_run: None,
            last_run: 0,
        }
    }

    pub fn authorized_user(&self) -> UserId {
        self.authorized
    }

    pub fn is_authorized(&self, user: UserId) -> bool {
        self.authorized == user
    }

    pub fn domain(&self) -> Option<Domain> {
        self.domain
    }

    pub fn start_id(&self) -> Option<u64> {
        self.start_id
    }

    pub fn end_id(&self) -> Option<u64> {
        self.end_id
    }

    pub fn awaiting_input(&self) -> Option<IdKind> {
        self.awaiting
    }

    pub fn is_scraping(&self) -> bool {
        self.active_run.is_some()
    }

    pub fn active_run(&self) -> Option<RunId> {
        self.active_run
    }

    pub(crate) fn set_domain(&mut self, domain: Domain) {
        self.domain = Some(domain);
    }

    pub(crate) fn set_id(&mut self, kind: IdKind, value: u64) {
        match kind {
            IdKind::Start => self.start_id = Some(value),
            IdKind::End => self.end_id = Some(value),
        }
    }

    pub(crate) fn await_input(&mut self, kind: IdKind) {
        self.awaiting = Some(kind);
    }

    pub(crate) fn take_awaiting(&mut self) -> Option<IdKind> {
        self.awaiting.take()
    }

    pub(crate) fn clear_awaiting(&mut self) {
        self.awaiting = None;
    }

    pub(crate) fn begin_run(&mut self) -> RunId {
        self.last_run += 1;
        self.active_run = Some(self.last_run);
        self.last_run
    }

    pub(crate) fn end_run(&mut self) {
        self.active_run = None;
    }
}
