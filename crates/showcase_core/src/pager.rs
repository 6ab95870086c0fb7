use std::ops::Range;

use crate::error::CarouselError;

/// Page cursor over a fixed number of items.
///
/// `current_page` is always in `0..page_count`; every move wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    item_count: usize,
    page_size: usize,
    page_count: usize,
    current_page: usize,
}

impl Pager {
    pub fn new(item_count: usize, page_size: usize) -> Result<Self, CarouselError> {
        if page_size == 0 {
            return Err(CarouselError::InvalidPageSize);
        }
        if item_count == 0 {
            return Err(CarouselError::EmptyRoster);
        }

        Ok(Self {
            item_count,
            page_size,
            page_count: item_count.div_ceil(page_size),
            current_page: 0,
        })
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn tick(&mut self) {
        self.next();
    }

    pub fn next(&mut self) {
        self.current_page = (self.current_page + 1) % self.page_count;
    }

    pub fn prev(&mut self) {
        self.current_page = (self.current_page + self.page_count - 1) % self.page_count;
    }

    /// Out-of-range pages are rejected and leave the cursor where it was.
    pub fn jump_to(&mut self, page: usize) -> Result<(), CarouselError> {
        if page >= self.page_count {
            return Err(CarouselError::PageOutOfRange {
                page,
                page_count: self.page_count,
            });
        }
        self.current_page = page;
        Ok(())
    }

    pub fn page_range(&self) -> Range<usize> {
        self.range_of(self.current_page)
    }

    /// Item range of `page`, clamped to the final partial page.
    pub fn range_of(&self, page: usize) -> Range<usize> {
        let start = (page * self.page_size).min(self.item_count);
        let end = (start + self.page_size).min(self.item_count);
        start..end
    }
}

#[cfg(test)]
#[path = "tests/pager_tests.rs"]
mod tests;
