use crate::facets;
use crate::media::ContentItem;

pub const SECTION_MAX: usize = 10;
pub const SECTION_MIN_ITEMS: usize = 2;

#[derive(Debug, Clone)]
pub struct ContentSection {
    pub title: String,
    pub items: Vec<ContentItem>,
}

/// Genre rows for the default browse view: one row per genre in facet
/// order, skipping genres with fewer than `SECTION_MIN_ITEMS` entries,
/// capped at `SECTION_MAX` rows. Row items keep collection order.
pub fn build_sections(items: &[ContentItem]) -> Vec<ContentSection> {
    facets::genre_counts(items)
        .into_iter()
        .filter(|genre| genre.count >= SECTION_MIN_ITEMS)
        .take(SECTION_MAX)
        .map(|genre| {
            let row: Vec<ContentItem> = items
                .iter()
                .filter(|item| item.genres.contains(&genre.name))
                .cloned()
                .collect();
            ContentSection {
                title: genre.name,
                items: row,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    fn item(id: u64, genres: &[&str]) -> ContentItem {
        ContentItem {
            id,
            title: format!("Title {}", id),
            kind: MediaKind::Movie,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            year: 2020,
            rating: 5.0,
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
        }
    }

    #[test]
    fn rows_follow_facet_order() {
        let items = vec![
            item(1, &["Drama", "Action"]),
            item(2, &["Action"]),
            item(3, &["Action", "Drama"]),
        ];

        let sections = build_sections(&items);
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Action", "Drama"]);
    }

    #[test]
    fn rare_genres_are_skipped() {
        let items = vec![
            item(1, &["Action", "Noir"]),
            item(2, &["Action"]),
            item(3, &["Western"]),
        ];

        let sections = build_sections(&items);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Action");
    }

    #[test]
    fn rows_are_capped_at_section_max() {
        let mut items = Vec::new();
        let mut id = 0;
        for genre_index in 0..15 {
            let genre = format!("Genre {}", genre_index);
            for _ in 0..2 {
                id += 1;
                items.push(item(id, &[genre.as_str()]));
            }
        }

        assert_eq!(build_sections(&items).len(), SECTION_MAX);
    }

    #[test]
    fn row_items_keep_collection_order() {
        let items = vec![
            item(9, &["Action"]),
            item(4, &["Drama", "Action"]),
            item(7, &["Action"]),
        ];

        let sections = build_sections(&items);
        let ids: Vec<u64> = sections[0].items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![9, 4, 7]);
    }

    #[test]
    fn empty_collection_yields_no_sections() {
        assert!(build_sections(&[]).is_empty());
    }
}
