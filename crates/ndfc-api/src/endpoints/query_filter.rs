//! Generic list-query parameters shared by collection endpoints.

/// Lucene-style filter plus paging and sort parameters.
///
/// Zero or empty fields are omitted from the query string. Parameters are
/// emitted in a fixed order: `filter`, `limit`, `max`, `offset`, `sort`.
///
/// ```
/// use ndfc_api::endpoints::QueryFilter;
///
/// let filter = QueryFilter {
///     filter: "name:my_fabric AND status:active".into(),
///     max: 10,
///     ..QueryFilter::default()
/// };
/// assert_eq!(
///     filter.query_string(),
///     "filter=name%3Amy_fabric+AND+status%3Aactive&max=10"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilter {
    /// e.g. `"prop1:value1 AND prop2:value2"`
    pub filter: String,
    pub limit: u32,
    pub max: u32,
    pub offset: u32,
    /// Comma separated properties; prefix with `-` for descending.
    pub sort: String,
}

impl QueryFilter {
    /// Non-empty parameters as `(name, value)` pairs, unencoded.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.filter.is_empty() {
            pairs.push(("filter", self.filter.clone()));
        }
        for (name, value) in [("limit", self.limit), ("max", self.max), ("offset", self.offset)] {
            if value != 0 {
                pairs.push((name, value.to_string()));
            }
        }
        if !self.sort.is_empty() {
            pairs.push(("sort", self.sort.clone()));
        }
        pairs
    }

    /// Form-urlencoded query string without the leading `?`.
    pub fn query_string(&self) -> String {
        let path = super::with_query("", self.pairs());
        path.trim_start_matches('?').to_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }
}
