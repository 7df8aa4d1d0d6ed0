use serde::{Deserialize, Serialize};

use crate::fetch_state::{reduce_stories, FetchState, StoriesAction};
use crate::history::{SearchHistory, DEFAULT_ENDPOINT};
use crate::sort::{sort_stories, SortKey};
use crate::story::Story;
use crate::view_model::AppViewModel;

/// Default size of the last-searches shortlist.
pub const LAST_SEARCHES_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Base URL the raw search term is appended to.
    pub endpoint: String,
    pub last_searches_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            last_searches_limit: LAST_SEARCHES_LIMIT,
        }
    }
}

/// Everything one search session owns. Only [`crate::update`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    config: SearchConfig,
    stories: FetchState,
    history: SearchHistory,
    sort: SortKey,
    search_term: String,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        let history = SearchHistory::new(config.endpoint.clone());
        Self {
            config,
            history,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stories(&self) -> &FetchState {
        &self.stories
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// URL of the latest submitted search, if any.
    pub fn current_request_url(&self) -> Option<&str> {
        self.history.current()
    }

    pub fn last_searches(&self) -> Vec<String> {
        self.history.last_searches(self.config.last_searches_limit)
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            search_term: self.search_term.clone(),
            current_request_url: self.current_request_url().map(ToOwned::to_owned),
            stories: sort_stories(&self.stories.data, self.sort),
            is_loading: self.stories.is_loading,
            is_error: self.stories.is_error,
            sort: self.sort,
            last_searches: self.last_searches(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn dispatch(&mut self, action: StoriesAction) {
        let stories = std::mem::take(&mut self.stories);
        self.stories = reduce_stories(stories, action);
        self.mark_dirty();
    }

    /// Applies a removal; the view only counts as changed when a story went away.
    pub(crate) fn remove_story(&mut self, story: Story) -> bool {
        let before = self.stories.data.len();
        let stories = std::mem::take(&mut self.stories);
        self.stories = reduce_stories(stories, StoriesAction::RemoveStory(story));
        let removed = self.stories.data.len() != before;
        if removed {
            self.mark_dirty();
        }
        removed
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        self.search_term = term;
        self.mark_dirty();
    }

    pub(crate) fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.mark_dirty();
    }

    /// Records the current term in the history, enters loading, and returns
    /// the URL to fetch.
    pub(crate) fn begin_search(&mut self) -> String {
        let url = self.history.url_for(&self.search_term);
        self.history.append(url.clone());
        self.dispatch(StoriesAction::FetchInit);
        url
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
