// src/models/pagination.rs
// DOCUMENTATION: Page-number pagination shared by all list endpoints
// PURPOSE: Parse page/page_size query parameters and wrap paginated results

use serde::{Deserialize, Serialize};

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound a client may request via page_size
pub const MAX_PAGE_SIZE: i64 = 100;

/// Query string parameters for list endpoints
/// DOCUMENTATION: Both parameters are optional; out-of-range values are clamped
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Page number (1-based)
    pub page: Option<i64>,

    /// Results per page (max 100)
    pub page_size: Option<i64>,
}

impl PageQuery {
    /// Effective page number, never below 1
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Effective page size, clamped to [1, MAX_PAGE_SIZE]
    pub fn page_size(&self) -> i64 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    /// SQL OFFSET derived from page and page size
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.page_size()
    }
}

/// Paginated list response
/// DOCUMENTATION: DTO wrapping list results with pagination metadata
#[derive(Debug, Serialize)]
pub struct Page<T> {
    /// Items on this page
    pub data: Vec<T>,

    /// Total number of matches (regardless of pagination)
    pub total_count: i64,

    /// Current page number
    pub page: i64,

    /// Results per page
    pub page_size: i64,

    /// Whether more results exist on next page
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Build a page from query parameters and a (items, total) pair
    pub fn new(data: Vec<T>, total_count: i64, query: &PageQuery) -> Self {
        let page = query.page();
        let page_size = query.page_size();

        Page {
            data,
            total_count,
            page,
            page_size,
            has_more: total_count > page * page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_defaults_and_clamping() {
        let query = PageQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), DEFAULT_PAGE_SIZE);

        let query = PageQuery {
            page: Some(-3),
            page_size: Some(1000),
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), MAX_PAGE_SIZE);

        let query = PageQuery {
            page: Some(2),
            page_size: Some(0),
        };
        assert_eq!(query.page_size(), 1);
    }

    #[test]
    fn test_offset_calculation() {
        let query = PageQuery {
            page: Some(3),
            page_size: Some(25),
        };
        assert_eq!(query.offset(), 50);

        let query = PageQuery::default();
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_page_has_more() {
        let query = PageQuery {
            page: Some(1),
            page_size: Some(10),
        };

        let page = Page::new(vec![0; 10], 25, &query);
        assert!(page.has_more);

        let query = PageQuery {
            page: Some(3),
            page_size: Some(10),
        };
        let page = Page::new(vec![0; 5], 25, &query);
        assert!(!page.has_more);
    }
}
