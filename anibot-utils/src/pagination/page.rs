//! Pure pagination math and page rendering.

use super::PaginationError;
use super::pager::Pager;

/// Label/text pair produced by a caller-supplied item formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedItem {
    pub label: String,
    pub text: String,
}

impl FormattedItem {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// One rendered entry of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageField {
    pub label: String,
    pub text: String,
    /// Whether the entry may share a row with its neighbours.
    pub inline: bool,
}

/// Everything needed to display a page, independent of the records behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub title: String,
    pub fields: Vec<PageField>,
    pub footer: String,
}

/// A rendered, immutable slice of a result set.
#[derive(Debug, Clone)]
pub struct Page<T> {
    index: usize,
    items: Vec<T>,
    content: PageContent,
}

impl<T> Page<T> {
    /// Zero-based position of this page.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn content(&self) -> &PageContent {
        &self.content
    }
}

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Zero-based page holding the record at `start_offset`.
pub fn page_index_for_offset(start_offset: usize, per_page: usize) -> usize {
    start_offset / per_page.max(1)
}

/// Footer shown under every page.
pub fn page_footer(page_index: usize, total_pages: usize) -> String {
    format!("Page {} of {}", page_index + 1, total_pages.max(1))
}

/// Render one chunk of a result set.
///
/// `items` is the chunk for `page_index`; the formatter receives each record
/// with its 1-based ordinal in the whole result set, so rankings stay
/// continuous across pages.
pub fn render_page<T, F>(
    items: Vec<T>,
    page_size: usize,
    page_index: usize,
    total_pages: usize,
    title: &str,
    format_item: F,
) -> Page<T>
where
    F: Fn(&T, usize) -> FormattedItem,
{
    let first_ordinal = page_index.saturating_mul(page_size.max(1)) + 1;

    let fields = items
        .iter()
        .enumerate()
        .map(|(offset, item)| {
            let FormattedItem { label, text } = format_item(item, first_ordinal + offset);
            PageField {
                label,
                text,
                inline: false,
            }
        })
        .collect();

    Page {
        index: page_index,
        items,
        content: PageContent {
            title: title.to_owned(),
            fields,
            footer: page_footer(page_index, total_pages),
        },
    }
}

/// Split a full result set into pre-rendered pages and wrap them in a pager.
///
/// Fails with [`PaginationError::EmptyResultSet`] when `records` is empty:
/// there is nothing to page through and the caller should reply with a plain
/// not-found message instead.
pub fn paginate<T, F>(
    records: Vec<T>,
    page_size: usize,
    title: &str,
    format_item: F,
) -> Result<Pager<T>, PaginationError>
where
    F: Fn(&T, usize) -> FormattedItem,
{
    let page_size = page_size.max(1);
    let total = total_pages(records.len(), page_size);
    let mut remaining = records.into_iter();

    let pages = (0..total)
        .map(|chunk_number| {
            let start_offset = chunk_number * page_size;
            let chunk = remaining.by_ref().take(page_size).collect::<Vec<_>>();
            let page_index = page_index_for_offset(start_offset, page_size);
            render_page(chunk, page_size, page_index, total, title, &format_item)
        })
        .collect();

    Pager::new(pages)
}
