use crate::media::ContentItem;

pub const PAGE_SIZE: usize = 8;

/// Whole collection ordered by descending release year; ties preserve
/// collection order.
pub fn latest_sorted(items: &[ContentItem]) -> Vec<ContentItem> {
    let mut sorted: Vec<ContentItem> = items.to_vec();
    sorted.sort_by(|a, b| b.year.cmp(&a.year));
    sorted
}

/// Page count at `PAGE_SIZE` per page; 0 for an empty collection.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// Slice backing the 1-indexed `page`. Navigation is expected to keep the
/// page in range; a page outside `1..=page_count` degrades to an empty
/// slice rather than wrapping or clamping.
pub fn slice_page(items: &[ContentItem], page: usize) -> Vec<ContentItem> {
    if page == 0 {
        return Vec::new();
    }
    items
        .iter()
        .skip((page - 1).saturating_mul(PAGE_SIZE))
        .take(PAGE_SIZE)
        .cloned()
        .collect()
}
