//! Page → offset/limit window

use serde::Serialize;

/// Zero-indexed slice of a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

pub struct Paginator;

impl Paginator {
    /// Map a 1-indexed page and a page size to a window.
    ///
    /// Inputs are expected to be already clamped to >= 1 by
    /// [`crate::filter::FilterSpec`]; a zero page is treated as page 1.
    pub fn window(page: u32, page_size: u32) -> PageWindow {
        let page = u64::from(page.max(1));
        let limit = u64::from(page_size);

        PageWindow {
            offset: (page - 1) * limit,
            limit,
        }
    }
}
