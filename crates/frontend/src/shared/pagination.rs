//! Page-window generation for the pager control.
//!
//! Pages are 1-indexed here, unlike the offset-based tables elsewhere in the app.

/// Pager element: a clickable page or an ellipsis standing for elided pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Gap,
}

/// Up to this many pages the window lists every page.
const FULL_WINDOW_LIMIT: usize = 10;
/// Pages shown on each side of the current one.
const SIBLINGS: usize = 2;

/// Compact window of page markers around `current_page`.
///
/// First and last page are always present; neighbours of the current page are kept and
/// every run of missing pages collapses into a single [`PageMarker::Gap`]. A
/// `current_page` outside `1..=total_pages` is clipped, not rejected.
pub fn build_window(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages <= FULL_WINDOW_LIMIT {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    let mut anchors = vec![1, total_pages];
    let low = current_page.saturating_sub(SIBLINGS);
    let high = current_page.saturating_add(SIBLINGS);
    anchors.extend((low..=high).filter(|&p| p > 1 && p < total_pages));
    anchors.sort_unstable();
    anchors.dedup();

    let mut markers = Vec::with_capacity(anchors.len() + 2);
    let mut previous: Option<usize> = None;
    for page in anchors {
        if let Some(prev) = previous {
            if page - prev > 1 {
                markers.push(PageMarker::Gap);
            }
        }
        markers.push(PageMarker::Page(page));
        previous = Some(page);
    }
    markers
}

/// "Previous" is inert on the first page.
pub fn can_go_previous(current_page: usize) -> bool {
    current_page > 1
}

/// "Next" is inert on the last page (and when there are no pages).
pub fn can_go_next(current_page: usize, total_pages: usize) -> bool {
    current_page < total_pages
}

/// Accepts a page-change request inside `1..=total_pages`; anything else is a silent no-op.
pub fn accept_page_request(requested: usize, total_pages: usize) -> Option<usize> {
    (requested >= 1 && requested <= total_pages).then_some(requested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Gap, Page};

    fn pages(numbers: &[usize]) -> Vec<PageMarker> {
        numbers.iter().copied().map(Page).collect()
    }

    #[test]
    fn test_small_totals_list_every_page() {
        assert_eq!(build_window(1, 5), pages(&[1, 2, 3, 4, 5]));
        assert_eq!(build_window(7, 10), pages(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
        assert_eq!(build_window(1, 1), pages(&[1]));
        assert!(build_window(1, 0).is_empty());
    }

    #[test]
    fn test_window_in_the_middle() {
        assert_eq!(
            build_window(5, 20),
            vec![Page(1), Gap, Page(3), Page(4), Page(5), Page(6), Page(7), Gap, Page(20)]
        );
    }

    #[test]
    fn test_window_at_edges() {
        assert_eq!(
            build_window(1, 20),
            vec![Page(1), Page(2), Page(3), Gap, Page(20)]
        );
        assert_eq!(
            build_window(20, 20),
            vec![Page(1), Gap, Page(18), Page(19), Page(20)]
        );
        assert_eq!(
            build_window(4, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Gap, Page(20)]
        );
    }

    #[test]
    fn test_out_of_range_current_page_is_clipped() {
        assert_eq!(build_window(0, 20), vec![Page(1), Page(2), Gap, Page(20)]);
        assert_eq!(build_window(50, 20), vec![Page(1), Gap, Page(20)]);
        assert_eq!(
            build_window(usize::MAX, 11),
            vec![Page(1), Gap, Page(11)]
        );
    }

    #[test]
    fn test_window_shape_holds_for_all_inputs() {
        for total in 0..=40 {
            for current in 0..=total + 3 {
                let window = build_window(current, total);
                let numbers: Vec<usize> = window
                    .iter()
                    .filter_map(|m| match m {
                        Page(p) => Some(*p),
                        Gap => None,
                    })
                    .collect();

                assert!(numbers.windows(2).all(|w| w[0] < w[1]), "{current}/{total}");
                assert!(
                    window.windows(2).all(|w| !(w[0] == Gap && w[1] == Gap)),
                    "{current}/{total}"
                );
                if total >= 1 {
                    assert_eq!(window.first(), Some(&Page(1)));
                    assert_eq!(window.last(), Some(&Page(total)));
                }
                if total <= 10 {
                    assert!(!window.contains(&Gap));
                }
            }
        }
    }

    #[test]
    fn test_navigation_guards() {
        assert!(!can_go_previous(1));
        assert!(can_go_previous(2));
        assert!(!can_go_next(5, 5));
        assert!(can_go_next(4, 5));
        assert!(!can_go_next(1, 0));

        assert_eq!(accept_page_request(0, 5), None);
        assert_eq!(accept_page_request(6, 5), None);
        assert_eq!(accept_page_request(3, 5), Some(3));
        assert_eq!(accept_page_request(1, 0), None);
    }
}
