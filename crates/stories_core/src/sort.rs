use std::cmp::Ordering;

use crate::Story;

/// Display ordering for the result list. Never touches the stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Fetch order.
    #[default]
    None,
    /// Ascending by title.
    Title,
    /// Ascending by author.
    Author,
    /// Most comments first.
    Comment,
    /// Most points first.
    Point,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::None,
        SortKey::Title,
        SortKey::Author,
        SortKey::Comment,
        SortKey::Point,
    ];

    pub fn compare(self, a: &Story, b: &Story) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Author => a.author.cmp(&b.author),
            SortKey::Comment => b.num_comments.cmp(&a.num_comments),
            SortKey::Point => b.points.cmp(&a.points),
        }
    }
}

/// Returns a sorted copy of `stories`. Ties keep their source order.
pub fn sort_stories(stories: &[Story], key: SortKey) -> Vec<Story> {
    let mut sorted = stories.to_vec();
    if key != SortKey::None {
        // `sort_by` is stable.
        sorted.sort_by(|a, b| key.compare(a, b));
    }
    sorted
}
