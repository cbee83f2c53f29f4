use std::collections::HashMap;

use crate::media::ContentItem;

/// Sentinel entry leading the year dropdown; also the "no filter" value
/// routing collaborators send back for any facet.
pub const ALL_OPTION: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub name: String,
    pub count: usize,
}

/// Counts genre occurrences across the whole, unfiltered collection.
/// Sorted by descending count; ties keep first-encounter order.
pub fn genre_counts(items: &[ContentItem]) -> Vec<GenreCount> {
    let mut counts: Vec<GenreCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in items {
        for genre in &item.genres {
            match index.get(genre.as_str()).copied() {
                Some(slot) => counts[slot].count += 1,
                None => {
                    index.insert(genre.as_str(), counts.len());
                    counts.push(GenreCount {
                        name: genre.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Distinct release years, descending, prefixed with the "all" sentinel.
pub fn year_options(items: &[ContentItem]) -> Vec<String> {
    let mut years: Vec<u16> = items.iter().map(|item| item.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();

    let mut options = Vec::with_capacity(years.len() + 1);
    options.push(ALL_OPTION.to_string());
    options.extend(years.into_iter().map(|year| year.to_string()));
    options
}
