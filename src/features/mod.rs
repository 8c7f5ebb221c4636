//! Request-driven list queries.
//!
//! A [`QuerySpec`] carries the raw query-string parameters of a list request.
//! [`ApiFeatures`] narrows a `sea_orm::Select` with them in four stages
//! (filter, search, sort, paginate), resolving parameter names through the
//! entity's [`FieldCatalog`].

pub mod builder;
pub mod fields;
pub mod pagination;

use std::collections::HashMap;
use std::future::{Ready, ready};

use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, web};

pub use builder::ApiFeatures;
pub use fields::{Field, FieldCatalog, FieldKind};
pub use pagination::Pagination;

/// Parameters that drive paging, ordering and search. They are never treated
/// as filter fields, even when an entity declares a field with the same name.
pub const RESERVED_KEYS: [&str; 5] = ["page", "limit", "sort", "order", "q"];

pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Flat mapping of query-string parameter names to their values.
///
/// A repeated key (`?tag=a&tag=b`) keeps every value in arrival order.
#[derive(Debug, Clone, Default)]
pub struct QuerySpec {
    params: HashMap<String, Vec<String>>,
}

impl QuerySpec {
    /// Parse a raw query string. Malformed input degrades to an empty spec.
    pub fn parse(query_string: &str) -> Self {
        match web::Query::<Vec<(String, String)>>::from_query(query_string) {
            Ok(pairs) => pairs.into_inner().into_iter().collect(),
            Err(e) => {
                tracing::warn!("Ignoring malformed query string: {e}");
                Self::default()
            }
        }
    }

    /// All values supplied for `key`, empty when absent.
    pub fn values(&self, key: &str) -> &[String] {
        self.params.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first value supplied for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.values(key).first().map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        !self.values(key).is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for QuerySpec
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in iter {
            params.entry(key.into()).or_default().push(value.into());
        }
        Self { params }
    }
}

impl FromRequest for QuerySpec {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::parse(req.query_string())))
    }
}
