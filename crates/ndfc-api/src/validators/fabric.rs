//! Schema for fabric detail queries.

use serde::Deserialize;

use super::{Validate, check_len};
use crate::endpoints::QueryFilter;
use crate::error::Error;

/// ```yaml
/// filter: "name:SITE1"
/// max: 10
/// offset: 0
/// sort: "name"
/// ```
///
/// Every field is optional and may be `null`; a missing `max` or `offset`
/// is left off the query. `filter` and `sort`, when given, must not be
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FabricDetailGetConfig {
    #[serde(default)]
    pub max: Option<u32>,
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub offset: Option<u32>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl FabricDetailGetConfig {
    pub fn to_query_filter(&self) -> QueryFilter {
        QueryFilter {
            filter: self.filter.clone().unwrap_or_default(),
            max: self.max.unwrap_or_default(),
            offset: self.offset.unwrap_or_default(),
            sort: self.sort.clone().unwrap_or_default(),
            ..QueryFilter::default()
        }
    }
}

impl Validate for FabricDetailGetConfig {
    fn validate(&self) -> Result<(), Error> {
        if let Some(filter) = &self.filter {
            check_len("filter", filter, 1, None)?;
        }
        if let Some(sort) = &self.sort {
            check_len("sort", sort, 1, None)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_document_is_valid() {
        let config: FabricDetailGetConfig = serde_json::from_value(json!({})).expect("parse");
        assert!(config.validate().is_ok());
        assert!(config.to_query_filter().is_empty());
    }

    #[test]
    fn converts_to_query_filter() {
        let config: FabricDetailGetConfig =
            serde_json::from_value(json!({"filter": "name:SITE1", "max": 10, "sort": "-name"}))
                .expect("parse");
        let filter = config.to_query_filter();
        assert_eq!(filter.query_string(), "filter=name%3ASITE1&max=10&sort=-name");
    }

    #[test]
    fn null_max_and_offset_default_to_zero() {
        let config: FabricDetailGetConfig =
            serde_json::from_value(json!({"max": null, "offset": null})).expect("parse");
        assert_eq!(config.max, None);
        assert_eq!(config.offset, None);
        assert!(config.validate().is_ok());
        assert!(config.to_query_filter().is_empty());
    }

    #[test]
    fn present_but_empty_sort_is_rejected() {
        let config = FabricDetailGetConfig {
            sort: Some(String::new()),
            ..FabricDetailGetConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_max_is_rejected() {
        let parsed: Result<FabricDetailGetConfig, _> = serde_json::from_value(json!({"max": -1}));
        assert!(parsed.is_err());
    }
}
