use sea_orm::sea_query::{Expr, ExprTrait, Func, LikeExpr};
use sea_orm::{Condition, Order, QueryFilter, QueryOrder, QuerySelect, Select};

use super::fields::{Field, FieldCatalog};
use super::pagination::Pagination;
use super::{QuerySpec, is_reserved};

/// Narrows a `Select<E>` with the parameters of a list request.
///
/// Every stage consumes the builder and hands it back, so stages chain in any
/// order and only ever add to the query. The builder never runs the query.
/// Callers that need a total build a second builder from the same spec,
/// apply only `filter` and `search`, and count it alongside the data query.
pub struct ApiFeatures<'a, E: FieldCatalog> {
    query: Select<E>,
    spec: &'a QuerySpec,
    pagination: Option<Pagination>,
}

impl<'a, E: FieldCatalog> ApiFeatures<'a, E> {
    pub fn new(query: Select<E>, spec: &'a QuerySpec) -> Self {
        Self {
            query,
            spec,
            pagination: None,
        }
    }

    /// Add an exact-match constraint for each allowed field present in the spec.
    pub fn filter(mut self, allowed: &[&str]) -> Self {
        for name in allowed.iter().copied().filter(|name| !is_reserved(name)) {
            let values = self.spec.values(name);
            if values.is_empty() {
                continue;
            }
            if let Some(field) = E::field(name) {
                self.query = self.query.filter(field.equals(values));
            }
        }
        self
    }

    /// Match `q` as a case-insensitive substring of any searchable field.
    ///
    /// No-op when `q` is absent or blank. The term is folded with Unicode
    /// lowercasing to match Postgres `LOWER`; SQLite's `LOWER` folds ASCII
    /// only, so non-ASCII case differences do not match there.
    pub fn search(mut self, searchable: &[&str]) -> Self {
        let Some(term) = self.spec.first("q").map(str::trim).filter(|t| !t.is_empty()) else {
            return self;
        };
        let pattern = format!("%{}%", escape_like(&term.to_lowercase()));

        let mut any = Condition::any();
        for field in searchable
            .iter()
            .filter_map(|name| E::field(name))
            .filter(|field| field.kind.is_searchable())
        {
            let lowered = Func::lower(Expr::col((E::default(), field.column)));
            any = any.add(Expr::expr(lowered).like(LikeExpr::new(pattern.clone()).escape('\\')));
        }

        if !any.is_empty() {
            self.query = self.query.filter(any);
        }
        self
    }

    /// Order by `sort` (ascending only for `order=asc`), or by `default_expression`.
    ///
    /// The default uses the `-field` convention for descending order. An
    /// unknown `sort` field falls back to the default.
    pub fn sort(mut self, default_expression: &str) -> Self {
        let requested = self.spec.first("sort").and_then(E::field).map(|field| {
            let order = if self.spec.first("order") == Some("asc") {
                Order::Asc
            } else {
                Order::Desc
            };
            (field, order)
        });

        if let Some((field, order)) = requested.or_else(|| parse_sort_expression::<E>(default_expression)) {
            self.query = self.query.order_by(field.column, order);
        }
        self
    }

    /// Apply skip/limit from `page` and `limit`, recording the resolved window.
    pub fn paginate(mut self, default_limit: u64, max_limit: u64) -> Self {
        let pagination = Pagination::resolve(
            self.spec.first("page"),
            self.spec.first("limit"),
            default_limit,
            max_limit,
        );

        self.query = self.query.offset(pagination.skip()).limit(pagination.limit);
        self.pagination = Some(pagination);
        self
    }

    /// The window resolved by [`paginate`](Self::paginate), if it has run.
    pub fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }

    pub fn query(&self) -> &Select<E> {
        &self.query
    }

    pub fn into_query(self) -> Select<E> {
        self.query
    }
}

fn parse_sort_expression<E: FieldCatalog>(
    expression: &str,
) -> Option<(&'static Field<E::Column>, Order)> {
    let expression = expression.trim();
    let (name, order) = match expression.strip_prefix('-') {
        Some(name) => (name, Order::Desc),
        None => (expression, Order::Asc),
    };
    E::field(name).map(|field| (field, order))
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
