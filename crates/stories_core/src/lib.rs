//! Hacker stories core: pure search-session state machine and view-model helpers.
mod effect;
mod fetch_state;
mod history;
mod msg;
mod sort;
mod state;
mod story;
mod update;
mod view_model;

pub use effect::Effect;
pub use fetch_state::{reduce_stories, FetchState, StoriesAction};
pub use history::{SearchHistory, DEFAULT_ENDPOINT};
pub use msg::Msg;
pub use sort::{sort_stories, SortKey};
pub use state::{AppState, SearchConfig, LAST_SEARCHES_LIMIT};
pub use story::{Story, StoryId};
pub use update::update;
pub use view_model::AppViewModel;
