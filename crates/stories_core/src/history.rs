/// Algolia's Hacker News search endpoint; the term is appended verbatim.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";

/// Append-only log of submitted request URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    endpoint: String,
    urls: Vec<String>,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl SearchHistory {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            urls: Vec::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request URL for `term`: the endpoint base followed by the raw term.
    pub fn url_for(&self, term: &str) -> String {
        format!("{}{}", self.endpoint, term)
    }

    /// Inverse of [`SearchHistory::url_for`]. Foreign URLs map to themselves.
    pub fn term_for<'a>(&self, url: &'a str) -> &'a str {
        url.strip_prefix(self.endpoint.as_str()).unwrap_or(url)
    }

    pub fn append(&mut self, url: impl Into<String>) {
        self.urls.push(url.into());
    }

    /// The most recently appended URL.
    pub fn current(&self) -> Option<&str> {
        self.urls.last().map(String::as_str)
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Up to `max_count` earlier terms, oldest first.
    ///
    /// Consecutive repeats count once and the active term is left out, so the
    /// shortlist only offers searches the user could go back to.
    pub fn last_searches(&self, max_count: usize) -> Vec<String> {
        let mut collapsed: Vec<&str> = Vec::with_capacity(self.urls.len());
        for url in &self.urls {
            let term = self.term_for(url);
            if collapsed.last() != Some(&term) {
                collapsed.push(term);
            }
        }

        let window_len = max_count.saturating_add(1);
        let window = &collapsed[collapsed.len().saturating_sub(window_len)..];
        let without_current = &window[..window.len().saturating_sub(1)];
        without_current.iter().map(|term| term.to_string()).collect()
    }
}
