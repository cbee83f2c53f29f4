use crate::media::ContentItem;

pub const HERO_COUNT: usize = 5;
pub const POPULAR_COUNT: usize = 8;

/// Top picks for the featured banner. Independent of any active filter.
pub fn hero_picks(items: &[ContentItem]) -> Vec<ContentItem> {
    top_rated(items, HERO_COUNT)
}

/// Top picks for the "Popular" row. Independent of any active filter.
pub fn popular_picks(items: &[ContentItem]) -> Vec<ContentItem> {
    top_rated(items, POPULAR_COUNT)
}

fn top_rated(items: &[ContentItem], limit: usize) -> Vec<ContentItem> {
    let mut ranked: Vec<ContentItem> = items.to_vec();
    ranked.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(limit);
    ranked
}
