/// IO requested by [`crate::update`]; executed by the host, never by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one GET against `url` and report back with
    /// [`crate::Msg::StoriesFetched`] or [`crate::Msg::StoriesFetchFailed`].
    FetchStories { url: String },
    /// Remember the search term across sessions.
    PersistSearchTerm { term: String },
}
