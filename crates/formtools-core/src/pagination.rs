//! Page navigation arithmetic for result lists.
//!
//! Computes the numbers behind the `<< 1 2 3 >>` navigation; rendering the
//! links is left to the caller's templates.

use crate::config::GeneralConfig;
use serde::Serialize;

/// Numbers needed to render navigation for one page of a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageNav {
    /// Total number of results in the list
    pub num_results: u64,
    /// Results shown per page
    pub num_per_page: u64,
    /// Current page (1-based, clamped to at least 1)
    pub current_page: u64,
    /// 1-based index of the first result on the current page
    pub range_start: u64,
    /// 1-based index of the last result on the current page
    pub range_end: u64,
    /// Number of pages in the list
    pub total_pages: u64,
    /// First page number to link
    pub first_page: u64,
    /// Last page number to link
    pub last_page: u64,
    /// Whether a direct link to page 1 is needed
    pub include_first_page_direct_link: bool,
    /// Whether a direct link to the final page is needed
    pub include_last_page_direct_link: bool,
}

impl PageNav {
    /// Compute navigation for `current_page` of a list.
    ///
    /// `max_nav_pages` bounds how many page links surround the current page.
    /// A `num_per_page` of 0 is treated as 1.
    #[must_use]
    pub fn new(num_results: u64, num_per_page: u64, current_page: u64, max_nav_pages: u32) -> Self {
        let num_per_page = num_per_page.max(1);
        let current_page = current_page.max(1);

        let range_start = (current_page - 1)
            .saturating_mul(num_per_page)
            .saturating_add(1);
        let range_end = range_start
            .saturating_add(num_per_page - 1)
            .min(num_results);
        let total_pages = num_results.div_ceil(num_per_page);

        let half = u64::from(max_nav_pages / 2);
        let first_page = if current_page > half {
            current_page - half
        } else {
            1
        };
        let last_page = current_page.saturating_add(half).min(total_pages);

        Self {
            num_results,
            num_per_page,
            current_page,
            range_start,
            range_end,
            total_pages,
            first_page,
            last_page,
            include_first_page_direct_link: first_page != 1,
            include_last_page_direct_link: last_page != total_pages,
        }
    }

    /// [`PageNav::new`] with the window size from `general.max_nav_pages`.
    #[must_use]
    pub fn with_config(
        num_results: u64,
        num_per_page: u64,
        current_page: u64,
        config: &GeneralConfig,
    ) -> Self {
        Self::new(num_results, num_per_page, current_page, config.max_nav_pages)
    }

    /// Whether the list spans more than one page, i.e. a "viewing X-Y" range is shown.
    #[must_use]
    pub fn shows_range(&self) -> bool {
        self.num_results > self.num_per_page
    }
}

/// `(limit, offset)` for fetching one page of results.
///
/// Page numbers below 1 are treated as 1. An offset past `u64::MAX`
/// saturates, which simply selects no rows.
#[must_use]
pub fn limit_offset(page_num: u64, per_page: u64) -> (u64, u64) {
    let page_num = page_num.max(1);
    (per_page, (page_num - 1).saturating_mul(per_page))
}
