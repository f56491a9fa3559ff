use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Offset/limit window over a server-side list.
///
/// The backend does not report a total count, so "is there a next page" is
/// guessed from the size of the page just loaded: a full page means there may
/// be more. When the total is an exact multiple of `limit` the last "next"
/// leads to an empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub limit: usize,
    pub offset: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

impl PageWindow {
    pub fn first(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            offset: 0,
        }
    }

    pub fn next(self) -> Self {
        Self {
            offset: self.offset + self.limit,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            offset: self.offset.saturating_sub(self.limit),
            ..self
        }
    }

    pub fn has_prev(&self) -> bool {
        self.offset > 0
    }

    pub fn has_next(&self, loaded: usize) -> bool {
        loaded >= self.limit
    }

    /// 1-based page number for display.
    pub fn page_number(&self) -> usize {
        self.offset / self.limit.max(1) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_page_enables_next() {
        let window = PageWindow::first(10);
        assert!(window.has_next(10));
        assert!(!window.has_next(3));
        assert!(!window.has_next(0));
    }

    #[test]
    fn test_prev_saturates_at_zero() {
        let window = PageWindow { limit: 10, offset: 5 };
        assert_eq!(window.prev().offset, 0);
        assert!(!PageWindow::first(10).has_prev());
        assert!(PageWindow::first(10).next().has_prev());
    }

    #[test]
    fn test_page_number() {
        let window = PageWindow::first(10).next().next();
        assert_eq!(window.offset, 20);
        assert_eq!(window.page_number(), 3);
        assert_eq!(window.prev().page_number(), 2);
    }

    #[test]
    fn test_zero_limit_is_clamped() {
        assert_eq!(PageWindow::first(0).limit, 1);
    }

    #[test]
    fn test_page_number_with_zero_limit() {
        let window = PageWindow { limit: 0, offset: 4 };
        assert_eq!(window.page_number(), 5);
        assert_eq!(PageWindow { limit: 0, offset: 0 }.page_number(), 1);
    }
}
