use crate::media::{ContentItem, MediaKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Movie,
    Anime,
    WebSeries,
}

impl KindFilter {
    /// Parses a routing parameter. Matching is case-insensitive; anything
    /// that is not a known kind slug (including "all") clears the filter.
    pub fn from_param(value: &str) -> KindFilter {
        match MediaKind::parse(value) {
            Some(kind) => kind.into(),
            None => KindFilter::All,
        }
    }

    pub fn matches(&self, kind: MediaKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Movie => matches!(kind, MediaKind::Movie),
            KindFilter::Anime => matches!(kind, MediaKind::Anime),
            KindFilter::WebSeries => matches!(kind, MediaKind::WebSeries),
        }
    }

    pub fn slug(&self) -> Option<&'static str> {
        match self {
            KindFilter::All => None,
            KindFilter::Movie => Some("movie"),
            KindFilter::Anime => Some("anime"),
            KindFilter::WebSeries => Some("web-series"),
        }
    }
}

impl From<MediaKind> for KindFilter {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Movie => KindFilter::Movie,
            MediaKind::Anime => KindFilter::Anime,
            MediaKind::WebSeries => KindFilter::WebSeries,
        }
    }
}

impl std::fmt::Display for KindFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KindFilter::All => write!(f, "All"),
            KindFilter::Movie => write!(f, "Movies"),
            KindFilter::Anime => write!(f, "Anime"),
            KindFilter::WebSeries => write!(f, "Web Series"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub kind: KindFilter,
    pub genre: Option<String>,
    pub year: Option<u16>,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        self.kind != KindFilter::All || self.genre.is_some() || self.year.is_some()
    }

    /// Keeps every item satisfying all three predicates, preserving the
    /// collection order. The filtered view is never resorted.
    pub fn apply(&self, items: &[ContentItem]) -> Vec<ContentItem> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }

    fn matches(&self, item: &ContentItem) -> bool {
        self.matches_kind(item) && self.matches_genre(item) && self.matches_year(item)
    }

    fn matches_kind(&self, item: &ContentItem) -> bool {
        self.kind.matches(item.kind)
    }

    fn matches_genre(&self, item: &ContentItem) -> bool {
        match &self.genre {
            None => true,
            Some(genre) => item.genres.iter().any(|g| g == genre),
        }
    }

    fn matches_year(&self, item: &ContentItem) -> bool {
        match self.year {
            None => true,
            Some(year) => item.year == year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, kind: MediaKind, genres: &[&str], year: u16) -> ContentItem {
        ContentItem {
            id,
            title: format!("Title {}", id),
            kind,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            year,
            rating: 7.0,
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
        }
    }

    fn sample_collection() -> Vec<ContentItem> {
        vec![
            item(1, MediaKind::Movie, &["Action", "Thriller"], 2019),
            item(2, MediaKind::Anime, &["Action", "Fantasy"], 2021),
            item(3, MediaKind::WebSeries, &["Drama"], 2021),
            item(4, MediaKind::Movie, &["Comedy"], 2005),
            item(5, MediaKind::Anime, &["Action"], 2019),
        ]
    }

    #[test]
    fn default_filter_returns_collection_unchanged() {
        let items = sample_collection();
        let filtered = FilterState::default().apply(&items);

        let ids: Vec<u64> = filtered.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn genre_filter_keeps_matching_items_in_order() {
        let items = sample_collection();
        let filter = FilterState {
            genre: Some("Action".to_string()),
            ..Default::default()
        };

        let ids: Vec<u64> = filter.apply(&items).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[test]
    fn genre_match_is_case_sensitive() {
        let items = sample_collection();
        let filter = FilterState {
            genre: Some("action".to_string()),
            ..Default::default()
        };

        assert!(filter.apply(&items).is_empty());
    }

    #[test]
    fn kind_filter_matches_only_that_kind() {
        let items = sample_collection();
        let filter = FilterState {
            kind: KindFilter::Anime,
            ..Default::default()
        };

        let ids: Vec<u64> = filter.apply(&items).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn year_filter_matches_exact_year() {
        let items = sample_collection();
        let filter = FilterState {
            year: Some(2021),
            ..Default::default()
        };

        let ids: Vec<u64> = filter.apply(&items).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn predicates_combine_with_and() {
        let items = sample_collection();
        let filter = FilterState {
            kind: KindFilter::Anime,
            genre: Some("Action".to_string()),
            year: Some(2019),
        };

        let ids: Vec<u64> = filter.apply(&items).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![5]);
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let items = sample_collection();
        let filter = FilterState {
            year: Some(1950),
            ..Default::default()
        };

        assert!(filter.apply(&items).is_empty());
        assert!(filter.apply(&[]).is_empty());
    }

    #[test]
    fn is_active_when_any_field_set() {
        assert!(!FilterState::default().is_active());

        let kind_only = FilterState {
            kind: KindFilter::Movie,
            ..Default::default()
        };
        assert!(kind_only.is_active());

        let year_only = FilterState {
            year: Some(2020),
            ..Default::default()
        };
        assert!(year_only.is_active());
    }

    #[test]
    fn from_param_is_case_insensitive_and_defaults_to_all() {
        assert_eq!(KindFilter::from_param("ANIME"), KindFilter::Anime);
        assert_eq!(KindFilter::from_param("web-series"), KindFilter::WebSeries);
        assert_eq!(KindFilter::from_param("all"), KindFilter::All);
        assert_eq!(KindFilter::from_param("nonsense"), KindFilter::All);
    }

    #[test]
    fn labels_render_for_the_kind_dropdown() {
        assert_eq!(KindFilter::All.to_string(), "All");
        assert_eq!(KindFilter::Movie.to_string(), "Movies");
        assert_eq!(KindFilter::WebSeries.to_string(), "Web Series");
    }
}
