use crate::{SortKey, Story};

/// Read-only snapshot handed to whatever renders the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search_term: String,
    pub current_request_url: Option<String>,
    /// Stored stories in the selected display order.
    pub stories: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
    pub sort: SortKey,
    /// Earlier terms, oldest first, each reusable via
    /// [`crate::Msg::HistorySearchSelected`].
    pub last_searches: Vec<String>,
    pub dirty: bool,
}
