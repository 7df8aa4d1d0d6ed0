use serde::Deserialize;
use stories_core::Story;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed search response: {message}")]
    Malformed { message: String },
}

#[derive(Deserialize)]
struct SearchResponse {
    hits: Vec<Story>,
}

/// Decode a search API body into its `hits`, keeping the API's ranking order.
pub fn decode_hits(bytes: &[u8]) -> Result<Vec<Story>, DecodeError> {
    serde_json::from_slice::<SearchResponse>(bytes)
        .map(|response| response.hits)
        .map_err(|err| DecodeError::Malformed {
            message: err.to_string(),
        })
}
