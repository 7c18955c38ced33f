use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 10;

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "must be greater than or equal to 1"))]
    #[param(default = 1, minimum = 1)]
    pub page: u64,
    /// Items per page
    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, max = 20, message = "must be between 1 and 20"))]
    #[param(default = 10, minimum = 1, maximum = 20)]
    pub per_page: u64,
}

/// Slice of the ordered record set that backs one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
    pub total_pages: u64,
}

/// The requested page holds no records: the collection is empty or the
/// page lies past the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub page: u64,
    pub total_pages: u64,
}

pub fn total_pages(total_items: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Computes the window for `page` (1-based). `page_size` bounds are the
/// caller's concern.
pub fn paginate(total_items: u64, page: u64, page_size: u64) -> Result<PageWindow, OutOfRange> {
    let total_pages = total_pages(total_items, page_size);

    if total_items == 0 || page == 0 || page > total_pages {
        return Err(OutOfRange { page, total_pages });
    }

    Ok(PageWindow {
        offset: (page - 1) * page_size,
        limit: page_size,
        total_pages,
    })
}

pub fn page_link(base_path: &str, page: u64, per_page: u64) -> String {
    format!("{base_path}?page={page}&per_page={per_page}")
}

/// Links to the neighbouring pages, `None` at either edge.
pub fn neighbour_links(
    base_path: &str,
    page: u64,
    per_page: u64,
    total_pages: u64,
) -> (Option<String>, Option<String>) {
    let prev = (page > 1).then(|| page_link(base_path, page - 1, per_page));
    let next = (page < total_pages).then(|| page_link(base_path, page + 1, per_page));
    (prev, next)
}
