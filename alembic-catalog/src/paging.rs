//! Fixed-size pagination over the filtered list.
//!
//! Pages are 1-based. The page count never drops below 1, so an empty list
//! still has a (blank) first page.

/// Items per page.
pub const PAGE_SIZE: usize = 10;

/// Number of page-jump buttons shown next to Previous/Next.
const BUTTON_WINDOW: usize = 3;

/// `ceil(count / size)`, at least 1.
pub fn total_pages(count: usize, size: usize) -> usize {
    count.div_ceil(size.max(1)).max(1)
}

/// The `[(page-1)*size, page*size)` window of `items`, clipped to its length.
///
/// Page 0 and pages past the end yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(size).min(items.len());
    let end = page.saturating_mul(size).min(items.len());
    &items[start..end]
}

/// One page-jump button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub page: usize,
    pub enabled: bool,
    pub current: bool,
}

/// The jump buttons for `current, current + 1, current + 2`.
///
/// Buttons outside `[1, total]` are disabled.
pub fn page_buttons(current: usize, total: usize) -> Vec<PageButton> {
    (current..current + BUTTON_WINDOW)
        .map(|page| PageButton {
            page,
            enabled: (1..=total).contains(&page),
            current: page == current,
        })
        .collect()
}

/// Current page cursor with clamped navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Moves back one page, stopping at 1. Returns whether the page changed.
    pub fn previous(&mut self) -> bool {
        let before = self.page;
        self.page = self.page.saturating_sub(1).max(1);
        self.page != before
    }

    /// Moves forward one page, stopping at `total`. Returns whether the page changed.
    pub fn next(&mut self, total: usize) -> bool {
        let before = self.page;
        self.page = (self.page + 1).min(total.max(1));
        self.page != before
    }

    /// Jumps to `page` if it lies in `[1, total]`; otherwise does nothing.
    pub fn jump(&mut self, page: usize, total: usize) -> bool {
        if !(1..=total).contains(&page) {
            return false;
        }
        let changed = self.page != page;
        self.page = page;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_has_floor_of_one() {
        assert_eq!(total_pages(0, PAGE_SIZE), 1);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(10, PAGE_SIZE), 1);
        assert_eq!(total_pages(11, PAGE_SIZE), 2);
        assert_eq!(total_pages(25, PAGE_SIZE), 3);
    }

    #[test]
    fn twenty_five_items_split_ten_ten_five() {
        let items: Vec<usize> = (0..25).collect();
        let sizes: Vec<usize> = (1..=total_pages(items.len(), PAGE_SIZE))
            .map(|p| page_slice(&items, p, PAGE_SIZE).len())
            .collect();
        assert_eq!(sizes, [10, 10, 5]);
        assert_eq!(page_slice(&items, 3, PAGE_SIZE), &items[20..]);
    }

    #[test]
    fn last_page_length() {
        for count in 1..=45 {
            let items: Vec<usize> = (0..count).collect();
            let last = total_pages(count, PAGE_SIZE);
            let expected = match count % PAGE_SIZE {
                0 => PAGE_SIZE,
                rem => rem,
            };
            assert_eq!(page_slice(&items, last, PAGE_SIZE).len(), expected);
            assert!(page_slice(&items, 1, PAGE_SIZE).len() <= PAGE_SIZE);
        }
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<usize> = (0..5).collect();
        assert!(page_slice(&items, 0, PAGE_SIZE).is_empty());
        assert!(page_slice(&items, 2, PAGE_SIZE).is_empty());
        assert!(page_slice::<usize>(&[], 1, PAGE_SIZE).is_empty());
    }

    #[test]
    fn previous_from_first_is_noop() {
        let mut pager = Pager::new();
        assert!(!pager.previous());
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn next_from_last_is_noop() {
        let mut pager = Pager::new();
        assert!(pager.next(3));
        assert!(pager.next(3));
        assert_eq!(pager.page(), 3);
        assert!(!pager.next(3));
        assert_eq!(pager.page(), 3);

        // An empty list still has one page
        let mut pager = Pager::new();
        assert!(!pager.next(0));
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn jump_is_bounded() {
        let mut pager = Pager::new();
        assert!(!pager.jump(0, 3));
        assert!(!pager.jump(4, 3));
        assert_eq!(pager.page(), 1);
        assert!(pager.jump(3, 3));
        assert_eq!(pager.page(), 3);
        assert!(pager.previous());
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn buttons_disable_past_last_page() {
        let buttons = page_buttons(2, 3);
        let pages: Vec<usize> = buttons.iter().map(|b| b.page).collect();
        assert_eq!(pages, [2, 3, 4]);
        assert!(buttons[0].enabled && buttons[0].current);
        assert!(buttons[1].enabled && !buttons[1].current);
        assert!(!buttons[2].enabled);
    }
}
