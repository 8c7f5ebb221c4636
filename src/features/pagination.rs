/// Default page size for list endpoints.
pub const DEFAULT_LIMIT: u64 = 10;

/// Largest page size a client may request.
pub const MAX_LIMIT: u64 = 100;

/// Largest offset the database drivers can bind (they bind as `i64`).
const MAX_SKIP: u64 = i64::MAX as u64;

/// Resolved page window of a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Resolve raw `page`/`limit` values.
    ///
    /// Missing, non-numeric, zero or negative values fall back to page 1 and
    /// `default_limit`; the limit is then clamped to `1..=max_limit`.
    pub fn resolve(
        page: Option<&str>,
        limit: Option<&str>,
        default_limit: u64,
        max_limit: u64,
    ) -> Self {
        let page = parse_positive(page).unwrap_or(1);
        let limit = parse_positive(limit)
            .unwrap_or(default_limit)
            .clamp(1, max_limit.max(1));

        Self { page, limit }
    }

    /// Number of rows to skip before this page, capped at `i64::MAX`.
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit).min(MAX_SKIP)
    }

    /// Page count for `total` rows, never less than one.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit).max(1)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw?.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n > 0)
        .map(|n| n as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(page: Option<&str>, limit: Option<&str>) -> Pagination {
        Pagination::resolve(page, limit, DEFAULT_LIMIT, MAX_LIMIT)
    }

    #[test]
    fn defaults_when_absent() {
        assert_eq!(resolve(None, None), Pagination { page: 1, limit: 10 });
    }

    #[test]
    fn page_falls_back_to_first() {
        for raw in ["abc", "0", "-4", "", "2.5"] {
            assert_eq!(resolve(Some(raw), None).page, 1, "page={raw:?}");
        }
        assert_eq!(resolve(Some(" 7 "), None).page, 7);
    }

    #[test]
    fn limit_is_clamped_to_max() {
        assert_eq!(resolve(None, Some("500")).limit, MAX_LIMIT);
        assert_eq!(resolve(None, Some("100")).limit, 100);
        assert_eq!(resolve(None, Some("25")).limit, 25);
    }

    #[test]
    fn limit_falls_back_to_default() {
        for raw in ["0", "-1", "many"] {
            assert_eq!(resolve(None, Some(raw)).limit, DEFAULT_LIMIT, "limit={raw:?}");
        }
    }

    #[test]
    fn default_limit_is_clamped_too() {
        assert_eq!(Pagination::resolve(None, None, 250, 100).limit, 100);
        assert_eq!(Pagination::resolve(None, None, 0, 100).limit, 1);
    }

    #[test]
    fn skip_is_offset_of_page() {
        assert_eq!(Pagination { page: 1, limit: 10 }.skip(), 0);
        assert_eq!(Pagination { page: 3, limit: 10 }.skip(), 20);
        assert_eq!(
            Pagination {
                page: u64::MAX,
                limit: 100
            }
            .skip(),
            i64::MAX as u64
        );
    }

    #[test]
    fn huge_page_offset_fits_in_i64() {
        let window = resolve(Some("100000000000000000"), Some("100"));

        assert_eq!(window.page, 100_000_000_000_000_000);
        assert_eq!(window.skip(), i64::MAX as u64);
        assert!(i64::try_from(window.skip()).is_ok());
    }

    #[test]
    fn total_pages_rounds_up_and_floors_at_one() {
        let window = Pagination { page: 1, limit: 10 };

        assert_eq!(window.total_pages(0), 1);
        assert_eq!(window.total_pages(1), 1);
        assert_eq!(window.total_pages(10), 1);
        assert_eq!(window.total_pages(11), 2);
        assert_eq!(window.total_pages(25), 3);
    }
}
