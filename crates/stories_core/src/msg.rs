use crate::{SortKey, Story};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search input.
    SearchInputChanged(String),
    /// User submitted the current search input.
    SearchSubmitted,
    /// User picked a term from the last-searches shortlist.
    HistorySearchSelected(String),
    /// User dismissed a story from the result list.
    StoryDismissed(Story),
    /// User picked a display ordering.
    SortSelected(SortKey),
    /// Engine fetched the hits for `url`.
    StoriesFetched { url: String, stories: Vec<Story> },
    /// Engine failed to fetch or decode `url`.
    StoriesFetchFailed { url: String },
}
