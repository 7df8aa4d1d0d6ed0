use std::sync::Once;

use pretty_assertions::assert_eq;
use stories_core::{
    update, AppState, Effect, Msg, SearchConfig, SortKey, Story, StoryId, DEFAULT_ENDPOINT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(stories_logging::initialize_for_tests);
}

fn story(id: &str, title: &str, num_comments: u32) -> Story {
    Story {
        title: title.to_string(),
        url: format!("https://example.com/{id}"),
        author: "author".to_string(),
        num_comments,
        points: 0,
        object_id: StoryId::from(id),
    }
}

fn submit(state: AppState, term: &str) -> (AppState, Vec<Effect>) {
    let (state, mut effects) = update(state, Msg::SearchInputChanged(term.to_string()));
    let (state, more) = update(state, Msg::SearchSubmitted);
    effects.extend(more);
    (state, effects)
}

fn fetched(state: AppState, term: &str, stories: Vec<Story>) -> AppState {
    let url = format!("{DEFAULT_ENDPOINT}{term}");
    update(state, Msg::StoriesFetched { url, stories }).0
}

#[test]
fn submit_records_history_enters_loading_and_requests_fetch() {
    init_logging();
    let (mut state, effects) = submit(AppState::new(), "React");
    let url = format!("{DEFAULT_ENDPOINT}React");

    assert_eq!(
        effects,
        vec![
            Effect::PersistSearchTerm {
                term: "React".to_string()
            },
            Effect::FetchStories { url: url.clone() },
        ]
    );
    assert_eq!(state.current_request_url(), Some(url.as_str()));
    assert_eq!(state.history().len(), 1);

    let view = state.view();
    assert!(view.is_loading);
    assert!(!view.is_error);
    assert!(view.stories.is_empty());
    assert_eq!(view.search_term, "React");
    assert!(state.consume_dirty());
}

#[test]
fn resubmitting_same_term_fetches_again_without_persisting() {
    init_logging();
    let (state, _) = submit(AppState::new(), "React");
    let (state, effects) = submit(state, "React");

    assert_eq!(
        effects,
        vec![Effect::FetchStories {
            url: format!("{DEFAULT_ENDPOINT}React")
        }]
    );
    assert_eq!(state.history().len(), 2);
}

#[test]
fn empty_term_is_accepted() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SearchSubmitted);

    assert_eq!(
        effects,
        vec![Effect::FetchStories {
            url: DEFAULT_ENDPOINT.to_string()
        }]
    );
    assert_eq!(state.current_request_url(), Some(DEFAULT_ENDPOINT));
}

#[test]
fn successful_fetch_shows_stories() {
    init_logging();
    let (state, _) = submit(AppState::new(), "React");
    let stories = vec![story("1", "React", 3), story("2", "Redux", 2)];
    let state = fetched(state, "React", stories.clone());

    let view = state.view();
    assert!(!view.is_loading);
    assert!(!view.is_error);
    assert_eq!(view.stories, stories);
}

#[test]
fn failed_fetch_keeps_previous_results_visible() {
    init_logging();
    let (state, _) = submit(AppState::new(), "React");
    let stories = vec![story("1", "React", 3), story("2", "Redux", 2)];
    let state = fetched(state, "React", stories.clone());

    let (state, _) = submit(state, "Xyzzy");
    assert!(state.view().is_loading);
    assert_eq!(state.view().stories, stories);

    let (state, effects) = update(
        state,
        Msg::StoriesFetchFailed {
            url: format!("{DEFAULT_ENDPOINT}Xyzzy"),
        },
    );
    let view = state.view();
    assert!(effects.is_empty());
    assert!(view.is_error);
    assert!(!view.is_loading);
    assert_eq!(view.stories, stories);
}

#[test]
fn stale_responses_are_discarded() {
    init_logging();
    let (state, _) = submit(AppState::new(), "React");
    let (mut state, _) = submit(state, "Redux");
    assert!(state.consume_dirty());

    // The slower, older request resolves after the newer one was issued.
    let (mut state, _) = update(
        state,
        Msg::StoriesFetched {
            url: format!("{DEFAULT_ENDPOINT}React"),
            stories: vec![story("1", "React", 0)],
        },
    );
    assert!(state.view().is_loading);
    assert!(state.view().stories.is_empty());
    assert!(!state.consume_dirty());

    let (state, _) = update(
        state,
        Msg::StoriesFetchFailed {
            url: format!("{DEFAULT_ENDPOINT}React"),
        },
    );
    assert!(!state.view().is_error);

    let redux = vec![story("2", "Redux", 0)];
    let state = fetched(state, "Redux", redux.clone());
    assert_eq!(state.view().stories, redux);
    assert!(!state.view().is_loading);
}

#[test]
fn history_selection_searches_again() {
    init_logging();
    let mut state = AppState::new();
    for term in ["React", "React", "Redux", "Angular", "Vue", "Node", "Go"] {
        state = submit(state, term).0;
    }
    assert_eq!(
        state.view().last_searches,
        vec!["React", "Redux", "Angular", "Vue", "Node"]
    );

    let (state, effects) = update(state, Msg::HistorySearchSelected("Redux".to_string()));
    assert_eq!(
        effects,
        vec![
            Effect::PersistSearchTerm {
                term: "Redux".to_string()
            },
            Effect::FetchStories {
                url: format!("{DEFAULT_ENDPOINT}Redux")
            },
        ]
    );
    assert_eq!(state.view().search_term, "Redux");
    assert_eq!(
        state.view().last_searches,
        vec!["Redux", "Angular", "Vue", "Node", "Go"]
    );
}

#[test]
fn dismiss_removes_story_locally() {
    init_logging();
    let (state, _) = submit(AppState::new(), "React");
    let a = story("a", "A", 0);
    let b = story("b", "B", 0);
    let c = story("c", "C", 0);
    let mut state = fetched(state, "React", vec![a.clone(), b.clone(), c.clone()]);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::StoryDismissed(b));
    assert!(effects.is_empty());
    assert_eq!(state.view().stories, vec![a.clone(), c.clone()]);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::StoryDismissed(story("zzz", "Z", 0)));
    assert!(effects.is_empty());
    assert_eq!(state.view().stories, vec![a, c]);
    assert!(!state.consume_dirty());
}

#[test]
fn sort_changes_view_but_not_stored_data() {
    init_logging();
    let (state, _) = submit(AppState::new(), "React");
    let stories = vec![
        story("1", "Redux", 3),
        story("2", "React", 5),
        story("3", "Vue", 2),
    ];
    let state = fetched(state, "React", stories.clone());

    let (state, effects) = update(state, Msg::SortSelected(SortKey::Comment));
    assert!(effects.is_empty());
    let counts: Vec<u32> = state
        .view()
        .stories
        .iter()
        .map(|story| story.num_comments)
        .collect();
    assert_eq!(counts, vec![5, 3, 2]);
    assert_eq!(state.stories().data, stories);
    assert_eq!(state.view().sort, SortKey::Comment);

    let (state, _) = update(state, Msg::SortSelected(SortKey::None));
    assert_eq!(state.view().stories, stories);
}

#[test]
fn reselecting_the_same_sort_is_not_a_change() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::SortSelected(SortKey::Title));
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::SortSelected(SortKey::Title));
    assert!(!state.consume_dirty());
}

#[test]
fn custom_endpoint_and_limit_are_honoured() {
    init_logging();
    let config = SearchConfig {
        endpoint: "http://localhost:9/search?q=".to_string(),
        last_searches_limit: 2,
    };
    let mut state = AppState::with_config(config);
    for term in ["a", "b", "c", "d"] {
        state = submit(state, term).0;
    }

    assert_eq!(state.current_request_url(), Some("http://localhost:9/search?q=d"));
    assert_eq!(state.view().last_searches, vec!["b", "c"]);
}

#[test]
fn every_message_changes_state_or_requests_io() {
    init_logging();
    let (state, _) = submit(AppState::new(), "React");
    let shown = story("1", "React", 3);
    let mut base = fetched(state, "React", vec![shown.clone()]);
    base.consume_dirty();
    let current = format!("{DEFAULT_ENDPOINT}React");

    let messages = vec![
        Msg::SearchInputChanged("Redux".to_string()),
        Msg::SearchSubmitted,
        Msg::HistorySearchSelected("Vue".to_string()),
        Msg::StoryDismissed(shown),
        Msg::SortSelected(SortKey::Point),
        Msg::StoriesFetched {
            url: current.clone(),
            stories: Vec::new(),
        },
        Msg::StoriesFetchFailed { url: current },
    ];

    for msg in messages {
        // Exhaustive so a new message kind has to be listed above.
        match &msg {
            Msg::SearchInputChanged(_)
            | Msg::SearchSubmitted
            | Msg::HistorySearchSelected(_)
            | Msg::StoryDismissed(_)
            | Msg::SortSelected(_)
            | Msg::StoriesFetched { .. }
            | Msg::StoriesFetchFailed { .. } => {}
        }
        let label = format!("{msg:?}");
        let (mut next, effects) = update(base.clone(), msg);
        assert!(
            next.consume_dirty() || !effects.is_empty(),
            "{label} was silently ignored"
        );
    }
}
