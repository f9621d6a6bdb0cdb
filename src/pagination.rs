//! Pagination bar shown under list tables.

use serde::Serialize;

/// Page numbers to display, with `None` marking an elided gap.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One entry of the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// `None` renders as an ellipsis.
    pub number: Option<usize>,
    pub url: Option<String>,
    pub current: bool,
}

/// Pagination bar with previous/next links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pager {
    pub pages: Vec<PageLink>,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub page: usize,
    pub total_pages: usize,
}

impl Pager {
    /// Builds the bar; `link` produces the URL of a page number.
    pub fn new(current_page: usize, total_pages: usize, link: impl Fn(usize) -> String) -> Self {
        let current_page = current_page.max(1);

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2)
            .into_iter()
            .map(|number| PageLink {
                number,
                url: number
                    .filter(|page| *page != current_page)
                    .map(&link),
                current: number == Some(current_page),
            })
            .collect();

        let previous = (current_page > 1 && total_pages > 0).then(|| link(current_page - 1));
        let next = (current_page < total_pages).then(|| link(current_page + 1));

        Self {
            pages,
            previous,
            next,
            page: current_page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lists_show_every_page() {
        assert_eq!(
            get_pages(3, 1, 2, 2, 4, 2),
            vec![Some(1), Some(2), Some(3)]
        );
        assert!(get_pages(0, 1, 2, 2, 4, 2).is_empty());
    }

    #[test]
    fn long_lists_elide_gaps() {
        let pages = get_pages(30, 15, 2, 2, 4, 2);
        assert_eq!(pages.first(), Some(&Some(1)));
        assert_eq!(pages[2], None);
        assert!(pages.contains(&Some(15)));
        assert_eq!(pages.last(), Some(&Some(30)));
    }

    #[test]
    fn pager_links_every_page_but_the_current_one() {
        let pager = Pager::new(2, 3, |page| format!("/users?page={page}"));
        assert_eq!(pager.previous.as_deref(), Some("/users?page=1"));
        assert_eq!(pager.next.as_deref(), Some("/users?page=3"));
        let current = pager.pages.iter().find(|link| link.current).unwrap();
        assert_eq!(current.number, Some(2));
        assert!(current.url.is_none());
    }

    #[test]
    fn pager_on_last_page_has_no_next() {
        let pager = Pager::new(3, 3, |page| page.to_string());
        assert!(pager.next.is_none());
        let empty = Pager::new(1, 0, |page| page.to_string());
        assert!(empty.previous.is_none() && empty.next.is_none());
    }
}
