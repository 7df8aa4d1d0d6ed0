use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identity of a [`Story`], the API's `objectID`.
///
/// The search API sends string ids; numeric ids are accepted as well and kept
/// in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StoryId(String);

impl StoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StoryId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for StoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for StoryId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for StoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => StoryId(text),
            RawId::Number(number) => StoryId::from(number),
        })
    }
}

/// One search hit. Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_comments: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u32,
    #[serde(rename = "objectID")]
    pub object_id: StoryId,
}

// Comment hits come back with `null` titles and counters.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::{Story, StoryId};

    #[test]
    fn decodes_numeric_and_string_ids() {
        let numeric: Story = serde_json::from_str(
            r#"{"title":"React","url":"https://reactjs.org/","author":"Jordan Walke","num_comments":3,"points":4,"objectID":0}"#,
        )
        .unwrap();
        assert_eq!(numeric.object_id, StoryId::from("0"));

        let text: Story = serde_json::from_str(
            r#"{"title":"Redux","url":"https://redux.js.org/","author":"Dan Abramov","num_comments":2,"points":5,"objectID":"42"}"#,
        )
        .unwrap();
        assert_eq!(text.object_id.as_str(), "42");
    }

    #[test]
    fn null_and_missing_fields_fall_back_to_defaults() {
        let story: Story =
            serde_json::from_str(r#"{"title":null,"author":"pg","points":null,"objectID":"7"}"#)
                .unwrap();
        assert_eq!(story.title, "");
        assert_eq!(story.url, "");
        assert_eq!(story.author, "pg");
        assert_eq!(story.num_comments, 0);
        assert_eq!(story.points, 0);
    }

    #[test]
    fn missing_object_id_is_rejected() {
        let result = serde_json::from_str::<Story>(r#"{"title":"no id"}"#);
        assert!(result.is_err());
    }
}
