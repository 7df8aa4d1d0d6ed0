//! Hacker stories engine: HTTP fetching, effect execution, and persistence.
mod decode;
mod engine;
mod fetch;
mod session;
mod store;
mod types;

pub use decode::{decode_hits, DecodeError};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use session::{
    SearchSession, SessionError, SessionSettings, SettingsError, DEFAULT_SEARCH_TERM,
    SEARCH_TERM_KEY,
};
pub use store::{KeyValueStore, MemoryStore, RonFileStore, StoreError};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput};
