//! Castbot core: pure session state machine and notifier view model.
mod domain;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use domain::Domain;
pub use effect::{Effect, ScrapeJob};
pub use msg::{Action, IdKind, Msg, ScrapeOutcome};
pub use state::{RunId, Session, UserId};
pub use update::update;
pub use view_model::{texts, Button, Keyboard};
