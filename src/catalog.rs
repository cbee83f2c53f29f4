use crate::facets::{self, GenreCount};
use crate::filters::FilterState;
use crate::media::{ContentItem, LoadingState};
use crate::pagination;
use crate::ranking;
use crate::sections::{self, ContentSection};

/// Browse-page state: the loaded collection, the filter/pagination/search
/// inputs, and every derived view the shell reads. Derived fields are
/// recomputed in full on each state change; while the one-shot load is
/// pending they stay empty and the shell renders placeholders.
pub struct CatalogPage {
    pub items: Vec<ContentItem>,
    pub loading: LoadingState,
    pub filters: FilterState,
    pub current_page: usize,
    pub search_input: String,

    pub genre_facets: Vec<GenreCount>,
    pub year_choices: Vec<String>,
    pub filtered: Vec<ContentItem>,
    pub hero: Vec<ContentItem>,
    pub popular: Vec<ContentItem>,
    pub sections: Vec<ContentSection>,
    pub latest: Vec<ContentItem>,
    pub total_pages: usize,
}

impl Default for CatalogPage {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: LoadingState::Loading,
            filters: FilterState::default(),
            current_page: 1,
            search_input: String::new(),
            genre_facets: Vec::new(),
            year_choices: Vec::new(),
            filtered: Vec::new(),
            hero: Vec::new(),
            popular: Vec::new(),
            sections: Vec::new(),
            latest: Vec::new(),
            total_pages: 0,
        }
    }
}

impl CatalogPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once any of the three facet fields leaves its "all" default.
    /// The shell swaps the ranked/paginated views for the filtered grid
    /// while this holds.
    pub fn filter_active(&self) -> bool {
        self.filters.is_active()
    }

    pub(crate) fn refresh(&mut self) {
        if self.loading.is_loading() {
            return;
        }

        self.genre_facets = facets::genre_counts(&self.items);
        self.year_choices = facets::year_options(&self.items);
        self.filtered = self.filters.apply(&self.items);
        self.hero = ranking::hero_picks(&self.items);
        self.popular = ranking::popular_picks(&self.items);
        self.sections = sections::build_sections(&self.items);

        let ordered = pagination::latest_sorted(&self.items);
        self.total_pages = pagination::page_count(ordered.len());
        self.latest = pagination::slice_page(&ordered, self.current_page);
    }
}
