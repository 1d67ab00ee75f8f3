//! Pagination request and page types.

use serde::{Deserialize, Serialize};

/// Pagination parameters shared across all list endpoints.
///
/// - `page_size`: 1–100, default 10
/// - `page_number`: 1–[`MAX_PAGE_NUMBER`], default 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PageRequest {
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    #[serde(default = "default_page_number")]
    pub page_number: u64,
}

/// Highest page number honoured. Larger requests are treated as this page,
/// which is past the end of any real result set.
pub const MAX_PAGE_NUMBER: u64 = u32::MAX as u64;

fn default_page_size() -> u64 {
    10
}

fn default_page_number() -> u64 {
    1
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_number: default_page_number(),
        }
    }
}

impl PageRequest {
    /// Clamp `page_size` to 1–100 and `page_number` to 1–[`MAX_PAGE_NUMBER`].
    ///
    /// Call after deserializing from query params to enforce bounds.
    pub fn clamped(self) -> Self {
        Self {
            page_size: self.page_size.clamp(1, 100),
            page_number: self.page_number.clamp(1, MAX_PAGE_NUMBER),
        }
    }

    /// Number of items to skip before this page starts.
    pub fn offset(&self) -> u64 {
        (self.page_number.max(1) - 1).saturating_mul(self.page_size)
    }
}

/// One page of results plus the bookkeeping clients need to walk the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_size: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl<T> Page<T> {
    /// Build a page from items the database already sliced and counted.
    pub fn from_parts(items: Vec<T>, total_count: u64, request: PageRequest) -> Self {
        let PageRequest {
            page_size,
            page_number,
        } = request.clamped();
        let total_pages = total_count.div_ceil(page_size);
        Self {
            items,
            total_count,
            page_size,
            current_page: page_number,
            total_pages,
            has_next_page: page_number < total_pages,
            has_previous_page: page_number > 1,
        }
    }

    /// Slice an in-memory sequence. The total is taken before slicing.
    pub fn paginate(all: Vec<T>, request: PageRequest) -> Self {
        let request = request.clamped();
        let total_count = all.len() as u64;
        let items = all
            .into_iter()
            .skip(usize::try_from(request.offset()).unwrap_or(usize::MAX))
            .take(request.page_size as usize)
            .collect();
        Self::from_parts(items, total_count, request)
    }

    /// Every row on one page. Reports are small fixed result sets, so they
    /// are returned whole rather than sliced.
    pub fn single(all: Vec<T>) -> Self {
        let total_count = all.len() as u64;
        Self {
            items: all,
            total_count,
            page_size: total_count,
            current_page: 1,
            total_pages: 1,
            has_next_page: false,
            has_previous_page: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
            has_next_page: self.has_next_page,
            has_previous_page: self.has_previous_page,
        }
    }
}
