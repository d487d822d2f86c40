//! Castbot engine: page fetching, profile parsing and the scrape loop.
mod decode;
mod engine;
mod fetch;
mod profile;
mod scrape;
mod source;
mod types;

pub use decode::{decode_html, DecodedHtml};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use profile::{parse_profile, ProfileField, FIELD_INDEX, VALUE_SELECTOR};
pub use scrape::{run_scrape, EventSink, Pacer, ScrapeRange, TokioPacer};
pub use source::{profile_url, HttpProfileSource, ProfileSource};
pub use types::{
    CastingProfile, EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, RunId,
    ScrapeSummary,
};
