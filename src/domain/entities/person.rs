use std::fmt;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub i64);

impl From<i64> for PersonId {
    fn from(value: i64) -> Self {
        PersonId(value)
    }
}

impl From<PersonId> for i64 {
    fn from(value: PersonId) -> Self {
        value.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person as served by the listing endpoint. The client only displays
/// these and asks for deletion by id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonRecord {
    pub id: PersonId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub surname: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default)]
    pub age: Option<i32>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Column the server matches the search text against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchField {
    #[default]
    All,
    Id,
    Name,
    Surname,
    Email,
    Age,
}

impl SearchField {
    pub const ALL: [SearchField; 6] = [
        SearchField::All,
        SearchField::Id,
        SearchField::Name,
        SearchField::Surname,
        SearchField::Email,
        SearchField::Age,
    ];

    /// Value sent as the `field` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            SearchField::All => "All",
            SearchField::Id => "Id",
            SearchField::Name => "Name",
            SearchField::Surname => "Surname",
            SearchField::Email => "Email",
            SearchField::Age => "Age",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_param().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub text: String,
    pub field: SearchField,
}

impl FilterState {
    pub fn new(text: impl Into<String>, field: SearchField) -> Self {
        Self {
            text: text.into(),
            field,
        }
    }

    /// The trimmed search text, or `None` when the filter is cleared.
    pub fn active_query(&self) -> Option<SearchQuery> {
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }
        Some(SearchQuery {
            text: text.to_string(),
            field: self.field,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub field: SearchField,
}
