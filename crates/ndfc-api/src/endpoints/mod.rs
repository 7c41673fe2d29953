// Endpoint descriptors
//
// Each descriptor pairs an HTTP verb with a path (and, for the two save
// endpoints, a validated body). Business objects turn a descriptor into a
// `RestRequest` and hand it to `RestSend`.

pub mod credentials;
pub mod fabrics;
pub mod query_filter;
pub mod switches;

use url::form_urlencoded;

use crate::sender::{RestRequest, Verb};

pub use query_filter::QueryFilter;

pub const MANAGE: &str = "/api/v1/manage";
pub const CREDENTIALS: &str = "/api/v1/manage/credentials";
pub const FABRICS: &str = "/api/v1/manage/fabrics";
pub const SWITCHES: &str = "/api/v1/manage/switches";

/// A single controller operation.
pub trait Endpoint {
    fn verb(&self) -> Verb;

    /// Full request path, query string included. Building it is idempotent.
    fn path(&self) -> String;

    fn description(&self) -> &'static str;

    /// Request body, if the operation takes one.
    fn body(&self) -> Option<serde_json::Value> {
        None
    }

    fn request(&self) -> RestRequest {
        RestRequest {
            verb: self.verb(),
            path: self.path(),
            payload: self.body(),
        }
    }
}

/// Append form-urlencoded `pairs` to `base`, omitting `?` when empty.
pub(crate) fn with_query<'a>(
    base: &str,
    pairs: impl IntoIterator<Item = (&'a str, String)>,
) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, &value);
    }
    let query = serializer.finish();
    if query.is_empty() {
        base.to_owned()
    } else {
        format!("{base}?{query}")
    }
}

/// Declare a fixed-path, body-less endpoint.
macro_rules! simple_endpoint {
    ($(#[$meta:meta])* $name:ident, $verb:expr, $path:expr, $description:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl $crate::endpoints::Endpoint for $name {
            fn verb(&self) -> $crate::sender::Verb {
                $verb
            }

            fn path(&self) -> String {
                $path
            }

            fn description(&self) -> &'static str {
                $description
            }
        }
    };
}

pub(crate) use simple_endpoint;
