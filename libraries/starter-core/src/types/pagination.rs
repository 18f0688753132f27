//! Pagination bounds for list queries

/// Limit and offset applied to list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum rows returned, always positive
    pub limit: i64,
    /// Rows skipped, never negative
    pub offset: i64,
}

impl Pagination {
    /// Page size used when the caller gives none or an invalid one
    pub const DEFAULT_LIMIT: i64 = 100;

    /// Offset used when the caller gives none or an invalid one
    pub const DEFAULT_OFFSET: i64 = 0;

    /// Build bounds from raw query-string values
    ///
    /// Values that do not parse, a non-positive limit, or a negative offset
    /// fall back to the defaults instead of failing.
    pub fn from_query(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(Self::DEFAULT_LIMIT);
        let offset = offset
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|offset| *offset >= 0)
            .unwrap_or(Self::DEFAULT_OFFSET);

        Self { limit, offset }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: Self::DEFAULT_OFFSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_use_defaults() {
        assert_eq!(Pagination::from_query(None, None), Pagination::default());
    }

    #[test]
    fn valid_values_are_kept() {
        let page = Pagination::from_query(Some("10"), Some("20"));
        assert_eq!(page, Pagination { limit: 10, offset: 20 });
    }

    #[test]
    fn out_of_range_values_fall_back() {
        let page = Pagination::from_query(Some("0"), Some("-5"));
        assert_eq!(page, Pagination::default());

        let page = Pagination::from_query(Some("-3"), Some("0"));
        assert_eq!(page, Pagination { limit: 100, offset: 0 });
    }

    #[test]
    fn unparseable_values_fall_back() {
        let page = Pagination::from_query(Some("ten"), Some("1.5"));
        assert_eq!(page, Pagination::default());
    }
}
