use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use stories_core::{update, AppState, AppViewModel, Effect, Msg, SearchConfig, SortKey, Story};
use stories_logging::{stories_info, stories_warn};
use thiserror::Error;

use crate::engine::EngineHandle;
use crate::fetch::{FetchSettings, Fetcher};
use crate::store::KeyValueStore;
use crate::EngineEvent;

/// Store key under which the last search term is remembered.
pub const SEARCH_TERM_KEY: &str = "search";
/// Term used when nothing has been remembered yet.
pub const DEFAULT_SEARCH_TERM: &str = "React";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub search: SearchConfig,
    pub fetch: FetchSettings,
    pub storage_key: String,
    pub default_search_term: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            fetch: FetchSettings::default(),
            storage_key: SEARCH_TERM_KEY.to_string(),
            default_search_term: DEFAULT_SEARCH_TERM.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

impl SessionSettings {
    /// Parses a RON document; omitted fields keep their defaults.
    pub fn from_ron_str(text: &str) -> Result<Self, SettingsError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to start fetch engine: {0}")]
    Engine(#[from] io::Error),
}

/// One user's search session: the only mutator of its [`AppState`].
///
/// Commands update state synchronously and queue fetches on the engine.
/// Completed fetches are applied when the owner calls
/// [`SearchSession::process_pending_events`] or [`SearchSession::wait_for_event`].
pub struct SearchSession<S: KeyValueStore> {
    state: AppState,
    engine: EngineHandle,
    store: S,
    storage_key: String,
}

impl<S: KeyValueStore> SearchSession<S> {
    /// Session backed by the reqwest fetcher.
    pub fn new(settings: SessionSettings, store: S) -> Result<Self, SessionError> {
        let engine = EngineHandle::new(settings.fetch.clone())?;
        Ok(Self::from_parts(settings, store, engine))
    }

    pub fn with_fetcher(
        settings: SessionSettings,
        store: S,
        fetcher: Arc<dyn Fetcher>,
    ) -> Result<Self, SessionError> {
        let engine = EngineHandle::with_fetcher(fetcher)?;
        Ok(Self::from_parts(settings, store, engine))
    }

    fn from_parts(settings: SessionSettings, store: S, engine: EngineHandle) -> Self {
        // An empty remembered term counts as nothing remembered.
        let term = store
            .get(&settings.storage_key)
            .filter(|term| !term.is_empty())
            .unwrap_or(settings.default_search_term);
        let mut session = Self {
            state: AppState::with_config(settings.search),
            engine,
            store,
            storage_key: settings.storage_key,
        };
        session.dispatch(Msg::SearchInputChanged(term));
        session
    }

    /// Searches for the restored term.
    pub fn start(&mut self) {
        self.dispatch(Msg::SearchSubmitted);
    }

    /// Edits the search input without searching.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.dispatch(Msg::SearchInputChanged(term.into()));
    }

    /// Searches for `term`. Any string is accepted, including the empty one.
    pub fn submit(&mut self, term: impl Into<String>) {
        self.dispatch(Msg::SearchInputChanged(term.into()));
        self.dispatch(Msg::SearchSubmitted);
    }

    /// Searches again for a term from the last-searches shortlist.
    pub fn retry_from_history(&mut self, term: impl Into<String>) {
        self.dispatch(Msg::HistorySearchSelected(term.into()));
    }

    /// Dismisses a story locally. Unknown stories are ignored.
    pub fn remove(&mut self, story: Story) {
        self.dispatch(Msg::StoryDismissed(story));
    }

    pub fn select_sort(&mut self, key: SortKey) {
        self.dispatch(Msg::SortSelected(key));
    }

    pub fn current_request_url(&self) -> Option<&str> {
        self.state.current_request_url()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Applies every fetch that has completed so far. Returns how many were applied.
    pub fn process_pending_events(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.engine.try_recv() {
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    /// Blocks until one fetch completes and applies it. `false` on timeout.
    pub fn wait_for_event(&mut self, timeout: Duration) -> bool {
        match self.engine.recv_timeout(timeout) {
            Some(event) => {
                self.apply_event(event);
                true
            }
            None => false,
        }
    }

    fn apply_event(&mut self, event: EngineEvent) {
        let msg = match event {
            EngineEvent::FetchCompleted {
                url,
                result: Ok(stories),
            } => Msg::StoriesFetched { url, stories },
            EngineEvent::FetchCompleted {
                url,
                result: Err(err),
            } => {
                stories_warn!("Fetch for {} failed: {}", url, err);
                Msg::StoriesFetchFailed { url }
            }
        };
        self.dispatch(msg);
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchStories { url } => {
                    stories_info!("FetchStories url_len={} url={}", url.len(), url);
                    self.engine.fetch(url);
                }
                Effect::PersistSearchTerm { term } => {
                    if let Err(err) = self.store.set(&self.storage_key, &term) {
                        stories_warn!("Failed to persist search term: {}", err);
                    }
                }
            }
        }
    }
}
