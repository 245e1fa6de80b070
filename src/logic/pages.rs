//! Condensed page-number strip for the pagination footer.

/// One entry in the page strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEntry {
    /// A concrete page number.
    Page(u32),
    /// A gap between non-adjacent page numbers.
    Ellipsis,
}

/// What: Build the window of page numbers shown around `current`.
///
/// Inputs:
/// - `current`: 1-based current page.
/// - `total`: Total number of pages (0 yields an empty strip).
///
/// Output:
/// - All pages when five or fewer exist; otherwise a head, middle, or tail
///   shape with ellipses marking the gaps.
#[must_use]
pub fn page_strip(current: u32, total: u32) -> Vec<PageEntry> {
    const MAX_VISIBLE: u32 = 5;
    let mut entries = Vec::new();
    if total <= MAX_VISIBLE {
        for p in 1..=total {
            entries.push(PageEntry::Page(p));
        }
    } else if current <= 3 {
        for p in 1..=4 {
            entries.push(PageEntry::Page(p));
        }
        entries.push(PageEntry::Ellipsis);
        entries.push(PageEntry::Page(total));
    } else if current >= total - 2 {
        entries.push(PageEntry::Page(1));
        entries.push(PageEntry::Ellipsis);
        for p in (total - 3)..=total {
            entries.push(PageEntry::Page(p));
        }
    } else {
        entries.push(PageEntry::Page(1));
        entries.push(PageEntry::Ellipsis);
        for p in (current - 1)..=(current + 1) {
            entries.push(PageEntry::Page(p));
        }
        entries.push(PageEntry::Ellipsis);
        entries.push(PageEntry::Page(total));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::{PageEntry::Ellipsis, PageEntry::Page, page_strip};

    #[test]
    /// What: Small page counts list every page without ellipses
    ///
    /// - Input: Totals of 0, 1, and 5
    /// - Output: Empty strip, then full enumerations
    fn small_totals_enumerate_all_pages() {
        assert!(page_strip(1, 0).is_empty());
        assert_eq!(page_strip(1, 1), vec![Page(1)]);
        assert_eq!(
            page_strip(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    /// What: Large totals collapse around the current page
    ///
    /// - Input: Current pages at the head, middle, and tail of 42 pages
    /// - Output: Head/middle/tail shapes with ellipses at the gaps
    fn large_totals_window_around_current() {
        assert_eq!(
            page_strip(2, 42),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(42)]
        );
        assert_eq!(
            page_strip(20, 42),
            vec![
                Page(1),
                Ellipsis,
                Page(19),
                Page(20),
                Page(21),
                Ellipsis,
                Page(42)
            ]
        );
        assert_eq!(
            page_strip(41, 42),
            vec![Page(1), Ellipsis, Page(39), Page(40), Page(41), Page(42)]
        );
    }
}
