//! Fabric endpoints under `/api/v1/manage/fabrics`.

use super::{Endpoint, FABRICS, QueryFilter, with_query};
use crate::sender::Verb;

/// `GET /fabrics?category=fabric[&filter=..&max=..&offset=..&sort=..]`
///
/// Always scoped to `category=fabric`; the query filter narrows the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FabricDetailGet {
    pub query_filter: QueryFilter,
}

impl FabricDetailGet {
    pub fn new(query_filter: QueryFilter) -> Self {
        Self { query_filter }
    }
}

impl Endpoint for FabricDetailGet {
    fn verb(&self) -> Verb {
        Verb::Get
    }

    fn path(&self) -> String {
        let mut pairs = vec![("category", "fabric".to_owned())];
        pairs.extend(self.query_filter.pairs());
        with_query(FABRICS, pairs)
    }

    fn description(&self) -> &'static str {
        "Get Fabric Details"
    }
}

/// `GET /fabrics[?filter=..]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FabricsGet {
    pub query_filter: QueryFilter,
}

impl Endpoint for FabricsGet {
    fn verb(&self) -> Verb {
        Verb::Get
    }

    fn path(&self) -> String {
        with_query(FABRICS, self.query_filter.pairs())
    }

    fn description(&self) -> &'static str {
        "Get Fabrics"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(filter: QueryFilter) -> String {
        FabricDetailGet::new(filter).path()
    }

    #[test]
    fn detail_defaults() {
        let ep = FabricDetailGet::default();
        assert_eq!(ep.verb(), Verb::Get);
        assert_eq!(ep.description(), "Get Fabric Details");
        assert_eq!(ep.path(), "/api/v1/manage/fabrics?category=fabric");
    }

    #[test]
    fn detail_with_filter_only() {
        let path = detail(QueryFilter {
            filter: "name:my_fabric".into(),
            ..QueryFilter::default()
        });
        assert_eq!(
            path,
            "/api/v1/manage/fabrics?category=fabric&filter=name%3Amy_fabric"
        );
    }

    #[test]
    fn detail_with_all_parameters() {
        let path = detail(QueryFilter {
            filter: "name:my_fabric".into(),
            max: 10,
            offset: 5,
            sort: "name".into(),
            ..QueryFilter::default()
        });
        assert!(path.starts_with("/api/v1/manage/fabrics?category=fabric"));
        assert!(path.contains("filter=name%3Amy_fabric"));
        assert!(path.contains("max=10"));
        assert!(path.contains("offset=5"));
        assert!(path.contains("sort=name"));
    }

    #[test]
    fn detail_encodes_complex_filter_and_sort() {
        let path = detail(QueryFilter {
            filter: "name:my_fabric AND status:active".into(),
            sort: "name,-timestamp".into(),
            ..QueryFilter::default()
        });
        assert!(path.contains("filter=name%3Amy_fabric+AND+status%3Aactive"));
        assert!(path.contains("sort=name%2C-timestamp"));
    }

    #[test]
    fn detail_path_is_idempotent() {
        let ep = FabricDetailGet::new(QueryFilter {
            filter: "name:fabric1".into(),
            max: 5,
            ..QueryFilter::default()
        });
        assert_eq!(ep.path(), ep.path());
    }

    #[test]
    fn fabrics_get_without_filter_has_no_query() {
        assert_eq!(FabricsGet::default().path(), "/api/v1/manage/fabrics");

        let ep = FabricsGet {
            query_filter: QueryFilter {
                limit: 20,
                ..QueryFilter::default()
            },
        };
        assert_eq!(ep.path(), "/api/v1/manage/fabrics?limit=20");
    }
}
