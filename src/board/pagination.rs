/// Number of pages needed to show `len` items, `page_size` at a time.
///
/// A page size of zero is treated as one to keep the division defined.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Clamp a requested 1-based page into `[1, page_count]`.
///
/// With no pages at all the result is 1, the page a fresh search lands on.
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// The visible window `items[(page-1)*size .. page*size)`.
///
/// Pages past the end yield an empty slice rather than panicking.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// One entry of the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Step back one page; `None` when already on the first page.
    Previous(Option<usize>),
    Page { number: usize, selected: bool },
    Ellipsis,
    /// Step forward one page; `None` when already on the last page.
    Next(Option<usize>),
}

const BOUNDARY_COUNT: isize = 1;
const SIBLING_COUNT: isize = 1;

fn range(start: isize, end: isize) -> impl Iterator<Item = isize> {
    start..=end
}

/// Build the page selector: first and last pages, the current page with one
/// sibling on each side, and ellipses over the gaps.
///
/// Returns an empty list when there are no pages.
pub fn page_items(current: usize, page_count: usize) -> Vec<PageItem> {
    if page_count == 0 {
        return Vec::new();
    }

    let count = page_count as isize;
    let page = clamp_page(current, page_count) as isize;

    let start_pages: Vec<isize> = range(1, BOUNDARY_COUNT.min(count)).collect();
    let end_pages: Vec<isize> =
        range((count - BOUNDARY_COUNT + 1).max(BOUNDARY_COUNT + 1), count).collect();

    let siblings_start = (page - SIBLING_COUNT)
        .min(count - BOUNDARY_COUNT - SIBLING_COUNT * 2 - 1)
        .max(BOUNDARY_COUNT + 2);
    let siblings_end = (page + SIBLING_COUNT)
        .max(BOUNDARY_COUNT + SIBLING_COUNT * 2 + 2)
        .min(end_pages.first().map_or(count - 1, |first| first - 2));

    let mut numbers: Vec<Option<isize>> = start_pages.into_iter().map(Some).collect();

    if siblings_start > BOUNDARY_COUNT + 2 {
        numbers.push(None);
    } else if BOUNDARY_COUNT + 1 < count - BOUNDARY_COUNT {
        numbers.push(Some(BOUNDARY_COUNT + 1));
    }

    numbers.extend(range(siblings_start, siblings_end).map(Some));

    if siblings_end < count - BOUNDARY_COUNT - 1 {
        numbers.push(None);
    } else if count - BOUNDARY_COUNT > BOUNDARY_COUNT {
        numbers.push(Some(count - BOUNDARY_COUNT));
    }

    numbers.extend(end_pages.into_iter().map(Some));

    let current = page as usize;
    let mut items = Vec::with_capacity(numbers.len() + 2);
    items.push(PageItem::Previous((current > 1).then(|| current - 1)));
    items.extend(numbers.into_iter().map(|n| match n {
        Some(n) => PageItem::Page {
            number: n as usize,
            selected: n as usize == current,
        },
        None => PageItem::Ellipsis,
    }));
    items.push(PageItem::Next((current < page_count).then(|| current + 1)));
    items
}
