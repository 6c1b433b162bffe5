//! Search and paging arithmetic shared by the listing queries.

/// Rows per page of the invoices table.
pub const ITEMS_PER_PAGE: i64 = 5;

/// Wrap a free-text search term for `ILIKE`.
pub fn search_pattern(query: &str) -> String {
    format!("%{}%", query)
}

/// Row offset of a 1-based page; pages below 1 are treated as page 1.
/// Offsets past `i64::MAX` saturate and select no rows.
pub fn page_offset(page: i64) -> i64 {
    (page.max(1) - 1).saturating_mul(ITEMS_PER_PAGE)
}

/// Number of pages needed for `count` rows.
pub fn total_pages(count: i64) -> i64 {
    if count <= 0 {
        0
    } else {
        (count + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_pattern() {
        assert_eq!(search_pattern("lee"), "%lee%");
        assert_eq!(search_pattern(""), "%%");
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1), 0);
        assert_eq!(page_offset(3), 10);
        assert_eq!(page_offset(0), 0);
        assert_eq!(page_offset(-4), 0);
        assert_eq!(page_offset(i64::MIN), 0);
    }

    #[test]
    fn test_page_offset_saturates() {
        assert_eq!(page_offset(i64::MAX), i64::MAX);
        assert_eq!(page_offset(i64::MAX / ITEMS_PER_PAGE + 2), i64::MAX);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(5), 1);
        assert_eq!(total_pages(6), 2);
        assert_eq!(total_pages(15), 3);
    }
}
