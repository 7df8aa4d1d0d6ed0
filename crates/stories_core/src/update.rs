use stories_logging::{stories_debug, stories_trace};

use crate::{AppState, Effect, Msg, StoriesAction};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchInputChanged(term) => change_term(&mut state, term),
        Msg::SearchSubmitted => submit(&mut state),
        Msg::HistorySearchSelected(term) => {
            let mut effects = change_term(&mut state, term);
            effects.extend(submit(&mut state));
            effects
        }
        Msg::StoryDismissed(story) => {
            let object_id = story.object_id.clone();
            if !state.remove_story(story) {
                stories_trace!("Dismiss ignored, no story with id {}", object_id);
            }
            Vec::new()
        }
        Msg::SortSelected(key) => {
            if state.sort_key() != key {
                state.set_sort(key);
            }
            Vec::new()
        }
        Msg::StoriesFetched { url, stories } => {
            if is_current(&state, &url) {
                stories_debug!("Fetched {} stories for {}", stories.len(), url);
                state.dispatch(StoriesAction::FetchSuccess(stories));
            }
            Vec::new()
        }
        Msg::StoriesFetchFailed { url } => {
            if is_current(&state, &url) {
                stories_debug!("Fetch failed for {}", url);
                state.dispatch(StoriesAction::FetchFailure);
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn change_term(state: &mut AppState, term: String) -> Vec<Effect> {
    if state.search_term() == term {
        return Vec::new();
    }
    state.set_search_term(term.clone());
    vec![Effect::PersistSearchTerm { term }]
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    let url = state.begin_search();
    stories_debug!("Search submitted url={}", url);
    vec![Effect::FetchStories { url }]
}

// Responses for superseded requests must not overwrite the newer result.
fn is_current(state: &AppState, url: &str) -> bool {
    let current = state.current_request_url() == Some(url);
    if !current {
        stories_debug!(
            "Discarding stale response for {} (current {:?})",
            url,
            state.current_request_url()
        );
    }
    current
}
