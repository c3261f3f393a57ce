use crate::utils::error::{CellBaseError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A `(category, subcategory)` pair such as `feature/gene`.
///
/// The subcategory may be chosen at runtime (`feature/xref` read from a config file).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointGroup {
    pub category: &'static str,
    pub subcategory: Cow<'static, str>,
}

impl EndpointGroup {
    pub const fn new(category: &'static str, subcategory: &'static str) -> Self {
        Self {
            category,
            subcategory: Cow::Borrowed(subcategory),
        }
    }

    pub fn with_subcategory(category: &'static str, subcategory: impl Into<Cow<'static, str>>) -> Self {
        Self {
            category,
            subcategory: subcategory.into(),
        }
    }
}

impl fmt::Display for EndpointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.subcategory)
    }
}

/// The full `(category, subcategory, resource)` triple of one remote endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub group: EndpointGroup,
    pub resource: &'static str,
}

impl Endpoint {
    pub const fn new(group: EndpointGroup, resource: &'static str) -> Self {
        Self { group, resource }
    }

    pub fn category(&self) -> &'static str {
        self.group.category
    }

    pub fn subcategory(&self) -> &str {
        &self.group.subcategory
    }

    /// URL path segments below `{version}/{species}/`.
    ///
    /// Without a query id the id segment is left out entirely.
    pub fn path_segments(&self, query_id: Option<&QueryId>, layout: PathLayout) -> Vec<String> {
        let mut segments = vec![self.category().to_string(), self.subcategory().to_string()];
        let id = query_id.map(QueryId::as_segment);

        match layout {
            PathLayout::ResourceFirst => {
                segments.push(self.resource.to_string());
                segments.extend(id);
            }
            PathLayout::QueryFirst => {
                segments.extend(id);
                segments.push(self.resource.to_string());
            }
        }

        segments
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.resource)
    }
}

/// Where the query id sits relative to the resource name in the URL path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum PathLayout {
    /// `{category}/{subcategory}/{resource}/{query_id}`
    #[default]
    ResourceFirst,
    /// `{category}/{subcategory}/{query_id}/{resource}`
    QueryFirst,
}

/// One lookup key or several. Several ids travel as one comma separated segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryId {
    Single(String),
    Many(Vec<String>),
}

impl QueryId {
    pub fn as_segment(&self) -> String {
        match self {
            QueryId::Single(id) => id.clone(),
            QueryId::Many(ids) => ids.join(","),
        }
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_segment())
    }
}

impl From<&str> for QueryId {
    fn from(id: &str) -> Self {
        QueryId::Single(id.to_string())
    }
}

impl From<String> for QueryId {
    fn from(id: String) -> Self {
        QueryId::Single(id)
    }
}

impl From<&String> for QueryId {
    fn from(id: &String) -> Self {
        QueryId::Single(id.clone())
    }
}

impl From<Vec<String>> for QueryId {
    fn from(ids: Vec<String>) -> Self {
        QueryId::Many(ids)
    }
}

impl From<Vec<&str>> for QueryId {
    fn from(ids: Vec<&str>) -> Self {
        QueryId::Many(ids.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for QueryId {
    fn from(ids: [&str; N]) -> Self {
        QueryId::Many(ids.iter().map(|id| id.to_string()).collect())
    }
}

/// Query-string parameters, kept in insertion order.
///
/// Setting a key twice replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    params: Vec<(String, String)>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();

        match self.params.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn include(self, fields: &[&str]) -> Self {
        self.with("include", fields.join(","))
    }

    pub fn exclude(self, fields: &[&str]) -> Self {
        self.with("exclude", fields.join(","))
    }

    pub fn limit(self, limit: u64) -> Self {
        self.with("limit", limit.to_string())
    }

    pub fn skip(self, skip: u64) -> Self {
        self.with("skip", skip.to_string())
    }

    pub fn count(self, count: bool) -> Self {
        self.with("count", count.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Options::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

/// One entry of the `response` array CellBase wraps every result in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub num_results: Option<u64>,
    #[serde(default)]
    pub num_total_results: Option<u64>,
    #[serde(default)]
    pub result: Vec<serde_json::Value>,
}

/// Decode the `response` envelope of a raw CellBase body.
pub fn response_results(body: &serde_json::Value) -> Result<Vec<QueryResponse>> {
    let responses = body
        .get("response")
        .ok_or_else(|| CellBaseError::UnexpectedResponse {
            message: "body has no 'response' field".to_string(),
        })?;

    if !responses.is_array() {
        return Err(CellBaseError::UnexpectedResponse {
            message: format!("'response' is not an array: {}", responses),
        });
    }

    Ok(serde_json::from_value(responses.clone())?)
}
