// Response shapes consumed from the management API.
//
// Only the fields the client reads are modelled. Everything else in a
// child entry (`href`, etc.) is ignored by serde.

use serde::Deserialize;

/// Flat metric-name to value snapshot for one resource.
///
/// Values are kept exactly as the appliance sent them: numbers stay
/// numbers, strings stay strings.
pub type StatisticsMap = serde_json::Map<String, serde_json::Value>;

/// Tree listing returned by every non-leaf resource:
/// ```json
/// { "children": [ { "name": "pool1", "href": "..." }, ... ] }
/// ```
#[derive(Debug, Deserialize)]
pub struct TreeResponse {
    #[serde(default)]
    pub children: Option<Vec<TreeChild>>,
}

/// One entry of a tree listing. Entries without a `name` are not
/// named resources and are skipped by the listing accessors.
#[derive(Debug, Deserialize)]
pub struct TreeChild {
    #[serde(default)]
    pub name: Option<String>,
}

impl TreeResponse {
    /// Names of the children that have one, in response order.
    ///
    /// Returns `None` when the `children` field itself is absent.
    pub fn into_names(self) -> Option<Vec<String>> {
        self.children
            .map(|children| children.into_iter().filter_map(|c| c.name).collect())
    }
}

/// Leaf resource carrying statistics:
/// ```json
/// { "statistics": { "current_conn": 3, "state": "active" } }
/// ```
#[derive(Debug, Deserialize)]
pub struct StatisticsResponse {
    #[serde(default)]
    pub statistics: Option<StatisticsMap>,
}
