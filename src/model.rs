//! Entities shared by the repository and the HTTP layer.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Store-native row identifier (SQLite `rowid`). Always positive once assigned; decoding rejects
/// zero and negative values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RowId(pub i64);

impl TryFrom<i64> for RowId {
    type Error = String;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        if n > 0 {
            Ok(RowId(n))
        } else {
            Err(format!("id must be a positive integer, got {}", n))
        }
    }
}

impl From<RowId> for i64 {
    fn from(id: RowId) -> Self {
        id.0
    }
}

impl RowId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `id` on the wire: omitted, `null` or `0` all mean "not yet persisted".
fn optional_row_id<'de, D>(deserializer: D) -> Result<Option<RowId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<i64>::deserialize(deserializer)? {
        None | Some(0) => Ok(None),
        Some(n) => RowId::try_from(n).map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    #[serde(default, deserialize_with = "optional_row_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RowId>,
    /// Caller-formatted date; stored verbatim.
    pub date: String,
    pub route_id: i64,
    pub comment: String,
    pub excuses: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    #[serde(default, deserialize_with = "optional_row_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RowId>,
    pub name: String,
    /// Unit is caller convention.
    pub distance: i64,
}

/// Body of the delete request. Unlike the entities, the id is mandatory and must be positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdContainer {
    pub id: RowId,
}
