//! Cursor over pre-rendered pages with saturating navigation.

use super::PaginationError;
use super::components::NavControls;
use super::event::NavControl;
use super::page::Page;

/// Result of a navigation request.
///
/// Hitting a boundary is a normal UI condition, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigated {
    Moved,
    AlreadyAtFirst,
    AlreadyAtLast,
}

/// Owns every page of a result set and the index currently shown.
///
/// Invariant: `pages` is non-empty and `cursor < pages.len()`.
#[derive(Debug, Clone)]
pub struct Pager<T> {
    pages: Vec<Page<T>>,
    cursor: usize,
}

impl<T> Pager<T> {
    /// Wrap pre-rendered pages, starting on the first one.
    pub fn new(pages: Vec<Page<T>>) -> Result<Self, PaginationError> {
        if pages.is_empty() {
            return Err(PaginationError::EmptyResultSet);
        }

        Ok(Self { pages, cursor: 0 })
    }

    pub fn current(&self) -> &Page<T> {
        &self.pages[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[Page<T>] {
        &self.pages
    }

    pub fn at_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn at_last(&self) -> bool {
        self.cursor + 1 == self.pages.len()
    }

    /// Whether there is anything to navigate between.
    pub fn has_multiple_pages(&self) -> bool {
        self.pages.len() > 1
    }

    /// Move one page forward, staying put on the last page.
    pub fn advance(&mut self) -> Navigated {
        if self.at_last() {
            return Navigated::AlreadyAtLast;
        }

        self.cursor += 1;
        Navigated::Moved
    }

    /// Move one page back, staying put on the first page.
    pub fn retreat(&mut self) -> Navigated {
        if self.at_first() {
            return Navigated::AlreadyAtFirst;
        }

        self.cursor -= 1;
        Navigated::Moved
    }

    pub fn navigate(&mut self, control: NavControl) -> Navigated {
        match control {
            NavControl::Previous => self.retreat(),
            NavControl::Next => self.advance(),
        }
    }

    /// Enabled state of the navigation buttons for the current page.
    pub fn controls(&self) -> NavControls {
        NavControls {
            previous_enabled: !self.at_first(),
            next_enabled: !self.at_last(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::pagination::page::{FormattedItem, paginate};

    fn pager_of(len: u32, per_page: usize) -> Pager<u32> {
        paginate((1..=len).collect(), per_page, "Test", |item, _| {
            FormattedItem::new(item.to_string(), "")
        })
        .expect("non-empty")
    }

    #[test]
    fn new_rejects_zero_pages() {
        let result = Pager::<u32>::new(Vec::new());
        assert!(matches!(result, Err(PaginationError::EmptyResultSet)));
    }

    #[test]
    fn single_page_is_both_first_and_last() {
        let mut pager = pager_of(3, 10);

        assert!(pager.at_first());
        assert!(pager.at_last());
        assert!(!pager.has_multiple_pages());
        assert_eq!(pager.advance(), Navigated::AlreadyAtLast);
        assert_eq!(pager.retreat(), Navigated::AlreadyAtFirst);
        assert_eq!(pager.cursor(), 0);
    }

    #[test]
    fn twenty_three_items_walk_forward_and_clamp() {
        let mut pager = pager_of(23, 10);
        assert_eq!(
            pager.controls(),
            NavControls {
                previous_enabled: false,
                next_enabled: true,
            }
        );

        assert_eq!(pager.advance(), Navigated::Moved);
        assert_eq!(pager.cursor(), 1);
        assert_eq!(pager.current().items().first(), Some(&11));
        assert_eq!(pager.current().items().last(), Some(&20));
        assert_eq!(
            pager.controls(),
            NavControls {
                previous_enabled: true,
                next_enabled: true,
            }
        );

        assert_eq!(pager.advance(), Navigated::Moved);
        assert_eq!(pager.cursor(), 2);
        assert_eq!(pager.current().items(), &[21, 22, 23]);
        assert!(!pager.controls().next_enabled);

        assert_eq!(pager.advance(), Navigated::AlreadyAtLast);
        assert_eq!(pager.cursor(), 2);
    }

    #[test]
    fn retreat_is_a_no_op_on_the_first_page() {
        let mut pager = pager_of(12, 5);
        assert_eq!(pager.retreat(), Navigated::AlreadyAtFirst);
        assert_eq!(pager.cursor(), 0);

        pager.navigate(NavControl::Next);
        pager.navigate(NavControl::Next);
        assert!(pager.at_last());
        assert_eq!(pager.navigate(NavControl::Previous), Navigated::Moved);
        assert_eq!(pager.cursor(), 1);
    }

    #[test]
    fn at_first_and_at_last_track_the_cursor() {
        let mut pager = pager_of(40, 10);
        for step in 0..pager.len() {
            assert_eq!(pager.at_first(), step == 0);
            assert_eq!(pager.at_last(), step == pager.len() - 1);
            pager.advance();
        }
    }
}
