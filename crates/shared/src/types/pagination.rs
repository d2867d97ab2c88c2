//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Maximum allowed page size.
pub const MAX_PER_PAGE: u32 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    25
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PageRequest {
    /// Checks the requested bounds before any storage query is issued.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when `per_page` is outside `[1, 100]`
    /// or `page` is less than 1.
    pub fn validate(&self) -> AppResult<()> {
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(AppError::Validation(format!(
                "per_page must be between 1 and {MAX_PER_PAGE}"
            )));
        }
        if self.page == 0 {
            return Err(AppError::Validation("page must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Calculates the offset for database queries.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }
}

/// Response wrapper for paginated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items in the current page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub pagination: PageMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    /// The requested page number, echoed verbatim even when out of range.
    pub current_page: u32,
    /// Total number of pages; 0 when there are no items.
    pub total_pages: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Items per page.
    pub per_page: u32,
}

impl<T> PageResponse<T> {
    /// Creates a new paginated response.
    #[must_use]
    pub fn new(data: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(u64::from(request.per_page));

        Self {
            data,
            pagination: PageMeta {
                current_page: request.page,
                total_pages,
                total_items,
                per_page: request.per_page,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let req = PageRequest::default();
        assert_eq!(req.page, 1);
        assert_eq!(req.per_page, 25);
        assert!(req.validate().is_ok());
    }

    #[rstest]
    #[case(1, 1)]
    #[case(1, 25)]
    #[case(999, 100)]
    fn test_valid_bounds(#[case] page: u32, #[case] per_page: u32) {
        let req = PageRequest { page, per_page };
        assert!(req.validate().is_ok());
    }

    #[rstest]
    #[case(1, 0)]
    #[case(1, 101)]
    #[case(0, 25)]
    fn test_invalid_bounds(#[case] page: u32, #[case] per_page: u32) {
        let req = PageRequest { page, per_page };
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_offset_math() {
        let req = PageRequest {
            page: 3,
            per_page: 10,
        };
        assert_eq!(req.offset(), 20);
        assert_eq!(req.limit(), 10);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let req = PageRequest {
            page: 1,
            per_page: 10,
        };
        let resp: PageResponse<u8> = PageResponse::new(vec![], req, 30);
        assert_eq!(resp.pagination.total_pages, 3);

        let resp: PageResponse<u8> = PageResponse::new(vec![], req, 31);
        assert_eq!(resp.pagination.total_pages, 4);
    }

    #[test]
    fn test_zero_items_yields_zero_pages() {
        let resp: PageResponse<u8> = PageResponse::new(vec![], PageRequest::default(), 0);
        assert_eq!(resp.pagination.total_pages, 0);
        assert_eq!(resp.pagination.total_items, 0);
        assert_eq!(resp.pagination.current_page, 1);
    }

    #[test]
    fn test_out_of_range_page_echoed_verbatim() {
        let req = PageRequest {
            page: 999,
            per_page: 25,
        };
        let resp: PageResponse<u8> = PageResponse::new(vec![], req, 5);
        assert_eq!(resp.pagination.current_page, 999);
        assert_eq!(resp.pagination.total_pages, 1);
        assert_eq!(resp.pagination.total_items, 5);
        assert_eq!(resp.pagination.per_page, 25);
    }
}
