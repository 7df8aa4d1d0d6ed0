use crate::Story;

/// The authoritative result set plus its fetch lifecycle flags.
///
/// `is_loading` and `is_error` are never both set; `data` only changes on
/// [`StoriesAction::FetchSuccess`] and [`StoriesAction::RemoveStory`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchState {
    pub data: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    FetchInit,
    FetchSuccess(Vec<Story>),
    FetchFailure,
    /// Drops the first story sharing `object_id` with the given one.
    RemoveStory(Story),
}

/// Pure reducer over [`FetchState`]. Every state accepts every action.
pub fn reduce_stories(state: FetchState, action: StoriesAction) -> FetchState {
    let FetchState {
        mut data,
        is_loading,
        is_error,
    } = state;

    match action {
        StoriesAction::FetchInit => FetchState {
            data,
            is_loading: true,
            is_error: false,
        },
        StoriesAction::FetchSuccess(payload) => FetchState {
            data: payload,
            is_loading: false,
            is_error: false,
        },
        StoriesAction::FetchFailure => FetchState {
            data,
            is_loading: false,
            is_error: true,
        },
        StoriesAction::RemoveStory(item) => {
            if let Some(index) = data
                .iter()
                .position(|story| story.object_id == item.object_id)
            {
                data.remove(index);
            }
            FetchState {
                data,
                is_loading,
                is_error,
            }
        }
    }
}
