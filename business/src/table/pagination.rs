/// Page links shown at once.
pub const PAGE_WINDOW_SIZE: u32 = 5;

pub fn total_pages(total_count: u64, items_per_page: u32) -> u32 {
    if items_per_page == 0 {
        return 0;
    }
    let pages = total_count.div_ceil(u64::from(items_per_page));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Up to [`PAGE_WINDOW_SIZE`] page numbers centred on `current_page`.
///
/// Near either end the window shrinks toward that end rather than shifting past it, then is
/// re-anchored so it still holds five pages when there are enough of them.
pub fn page_window(current_page: u32, total_pages: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }

    let size = i64::from(PAGE_WINDOW_SIZE);
    let current = i64::from(current_page);
    let total = i64::from(total_pages);

    let mut start = (current - size / 2).max(1);
    let end = (start + size - 1).min(total);
    if end - start + 1 < size {
        start = (end - size + 1).max(1);
    }

    (start..=end)
        .filter_map(|page| u32::try_from(page).ok())
        .collect()
}

/// Navigation controls derived from the current page and the server's total count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub pages: Vec<u32>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl Pagination {
    pub fn new(current_page: u32, items_per_page: u32, total_count: u64) -> Self {
        let total_pages = total_pages(total_count, items_per_page);
        Self {
            current_page,
            total_pages,
            pages: page_window(current_page, total_pages),
            previous_enabled: current_page > 1,
            next_enabled: current_page < total_pages,
        }
    }

    /// The link strip is hidden when everything fits on one page.
    pub fn shows_page_links(&self) -> bool {
        self.total_pages > 1
    }

    pub fn previous_page(&self) -> Option<u32> {
        self.previous_enabled.then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.next_enabled.then(|| self.current_page + 1)
    }
}

/// `Showing <from> to <to> of <total> entries`
pub fn entries_summary(current_page: u32, items_per_page: u32, total_count: u64) -> String {
    let page = u64::from(current_page.max(1));
    let per_page = u64::from(items_per_page);
    let from = ((page - 1) * per_page + 1).min(total_count);
    let to = (page * per_page).min(total_count);
    format!("Showing {from} to {to} of {total_count} entries")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(95, 30), 4);
        assert_eq!(total_pages(90, 30), 3);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn window_clamped_to_few_pages() {
        assert_eq!(page_window(1, 4), vec![1, 2, 3, 4]);
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(1, 0), Vec::<u32>::new());
    }

    #[test]
    fn window_centred_in_the_middle() {
        assert_eq!(page_window(10, 20), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn window_near_edges() {
        assert_eq!(page_window(1, 20), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 20), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(20, 20), vec![16, 17, 18, 19, 20]);
        assert_eq!(page_window(19, 20), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn window_never_exceeds_size() {
        for total in 0..30 {
            for current in 1..=total.max(1) {
                let window = page_window(current, total);
                assert!(window.len() <= PAGE_WINDOW_SIZE as usize);
                assert!(window.iter().all(|page| (1..=total).contains(page)));
            }
        }
    }

    #[test]
    fn previous_and_next_flags() {
        let first = Pagination::new(1, 10, 95);
        assert!(!first.previous_enabled);
        assert!(first.next_enabled);
        assert_eq!(first.next_page(), Some(2));
        assert_eq!(first.previous_page(), None);

        let last = Pagination::new(10, 10, 95);
        assert!(last.previous_enabled);
        assert!(!last.next_enabled);
        assert_eq!(last.next_page(), None);
    }

    #[test]
    fn empty_result_disables_both() {
        let pagination = Pagination::new(1, 10, 0);
        assert!(!pagination.previous_enabled);
        assert!(!pagination.next_enabled);
        assert!(!pagination.shows_page_links());
    }

    #[test]
    fn example_thirty_per_page() {
        let pagination = Pagination::new(1, 30, 95);
        assert_eq!(pagination.total_pages, 4);
        assert_eq!(pagination.pages, vec![1, 2, 3, 4]);
        assert!(pagination.shows_page_links());
    }

    #[test]
    fn summary_line() {
        assert_eq!(entries_summary(1, 10, 95), "Showing 1 to 10 of 95 entries");
        assert_eq!(entries_summary(10, 10, 95), "Showing 91 to 95 of 95 entries");
        assert_eq!(entries_summary(1, 10, 0), "Showing 0 to 0 of 0 entries");
    }
}
