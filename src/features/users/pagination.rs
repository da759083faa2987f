//! Pagination metadata for `GET /users`. The list endpoint reports its
//! position in response headers rather than in the body.

/// Header carrying the page the server actually returned.
pub const CURRENT_PAGE_HEADER: &str = "current-page";
/// Header carrying the number of pages available.
pub const TOTAL_PAGES_HEADER: &str = "total-pages";
/// Header carrying the total number of users, when the API sends it.
pub const TOTAL_USERS_HEADER: &str = "total-users";
/// Header carrying the page size the API applied, when it sends it.
pub const PER_PAGE_HEADER: &str = "per-page";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_users: Option<u64>,
    pub per_page: Option<u32>,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::first()
    }
}

impl PageInfo {
    /// Position before anything has been fetched.
    pub fn first() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_users: None,
            per_page: None,
        }
    }

    /// Builds page info from raw header values. Missing or malformed headers
    /// fall back to the requested page and a single page in total; the total
    /// never drops below the current page.
    pub fn from_headers(
        requested_page: u32,
        current_page: Option<&str>,
        total_pages: Option<&str>,
        total_users: Option<&str>,
        per_page: Option<&str>,
    ) -> Self {
        let current_page = parse_positive(current_page).unwrap_or(requested_page.max(1));
        let total_pages = parse_positive(total_pages).unwrap_or(1).max(current_page);
        if current_page != requested_page {
            tracing::debug!(requested_page, current_page, "server adjusted the page");
        }

        Self {
            current_page,
            total_pages,
            total_users: total_users.and_then(|value| value.trim().parse().ok()),
            per_page: parse_positive(per_page),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page to request for "Previous", clamped to the first page.
    pub fn previous(&self) -> u32 {
        self.current_page.saturating_sub(1).max(1)
    }

    /// Page to request for "Next", clamped to the last page.
    pub fn next(&self) -> u32 {
        self.current_page.saturating_add(1).min(self.total_pages).max(1)
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

fn parse_positive(value: Option<&str>) -> Option<u32> {
    value
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| *value > 0)
}

#[cfg(test)]
mod tests {
    use super::PageInfo;

    #[test]
    fn headers_are_parsed() {
        let info = PageInfo::from_headers(2, Some("2"), Some("5"), Some("48"), Some("10"));
        assert_eq!(
            info,
            PageInfo {
                current_page: 2,
                total_pages: 5,
                total_users: Some(48),
                per_page: Some(10),
            }
        );
        assert_eq!(info.label(), "Page 2 of 5");
    }

    #[test]
    fn missing_headers_fall_back_to_request() {
        let info = PageInfo::from_headers(3, None, None, None, None);
        assert_eq!(info.current_page, 3);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.total_users, None);
    }

    #[test]
    fn malformed_headers_are_ignored() {
        let info = PageInfo::from_headers(1, Some("first"), Some("-2"), Some("many"), Some("0"));
        assert_eq!(info, PageInfo::first());
    }

    #[test]
    fn previous_and_next_stay_in_range() {
        let first = PageInfo::from_headers(1, Some("1"), Some("3"), None, None);
        assert!(!first.has_previous());
        assert!(first.has_next());
        assert_eq!(first.previous(), 1);
        assert_eq!(first.next(), 2);

        let last = PageInfo::from_headers(3, Some("3"), Some("3"), None, None);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.previous(), 2);
        assert_eq!(last.next(), 3);
    }

    #[test]
    fn single_page_has_no_navigation() {
        let info = PageInfo::first();
        assert!(!info.has_previous());
        assert!(!info.has_next());
    }
}
