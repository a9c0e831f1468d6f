use std::num::NonZeroUsize;
use std::ops::Range;

use crate::modules::events::core::event::Event;

pub const DEFAULT_PAGE: NonZeroUsize = NonZeroUsize::MIN;
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// One-based page number and page size. Both are at least 1 by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: NonZeroUsize,
    pub size: NonZeroUsize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: NonZeroUsize, size: NonZeroUsize) -> Self {
        Self { page, size }
    }

    /// Half-open window over a collection of `len` items, clamped to `len`.
    pub fn window(&self, len: usize) -> Range<usize> {
        let size = self.size.get();
        let start = (self.page.get() - 1).saturating_mul(size).min(len);
        let end = start.saturating_add(size).min(len);
        start..end
    }
}

/// A window of events together with the size of the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPage {
    pub items: Vec<Event>,
    pub total: usize,
}
