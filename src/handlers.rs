use log::debug;

use crate::catalog::CatalogPage;
use crate::facets::ALL_OPTION;
use crate::filters::{FilterState, KindFilter};
use crate::media::{ContentItem, LoadingState};
use crate::routes;

/// Everything the outside world can tell the catalog.
#[derive(Debug, Clone)]
pub enum Message {
    CatalogLoaded(Vec<ContentItem>),
    KindSelected(KindFilter),
    GenreSelected(Option<String>),
    YearSelected(Option<u16>),
    FiltersReset,
    RouteSynced {
        kind: Option<String>,
        genre: Option<String>,
    },
    SearchInputChanged(String),
    SearchSubmitted,
    NextPage,
    PrevPage,
    PageSelected(usize),
}

/// Request the catalog hands back to its host instead of performing itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Navigate(String),
}

pub fn handle_message(page: &mut CatalogPage, message: Message) -> Option<Effect> {
    match message {
        Message::CatalogLoaded(items) => handle_catalog_loaded(page, items),
        Message::KindSelected(kind) => handle_kind_selected(page, kind),
        Message::GenreSelected(genre) => handle_genre_selected(page, genre),
        Message::YearSelected(year) => handle_year_selected(page, year),
        Message::FiltersReset => handle_filters_reset(page),
        Message::RouteSynced { kind, genre } => handle_route_synced(page, kind, genre),
        Message::SearchInputChanged(input) => handle_search_input_changed(page, input),
        Message::SearchSubmitted => handle_search_submitted(page),
        Message::NextPage => handle_next_page(page),
        Message::PrevPage => handle_prev_page(page),
        Message::PageSelected(requested) => handle_page_selected(page, requested),
    }
}

fn handle_catalog_loaded(page: &mut CatalogPage, items: Vec<ContentItem>) -> Option<Effect> {
    debug!("catalog loaded with {} items", items.len());
    page.items = items;
    page.loading = LoadingState::Ready;
    page.refresh();
    None
}

fn handle_kind_selected(page: &mut CatalogPage, kind: KindFilter) -> Option<Effect> {
    page.filters.kind = kind;
    page.current_page = 1;
    page.refresh();
    Some(Effect::Navigate(routes::browse_url(&page.filters)))
}

fn handle_genre_selected(page: &mut CatalogPage, genre: Option<String>) -> Option<Effect> {
    page.filters.genre = genre;
    page.current_page = 1;
    page.refresh();
    Some(Effect::Navigate(routes::browse_url(&page.filters)))
}

// The year filter stays local, so no navigation comes back out.
fn handle_year_selected(page: &mut CatalogPage, year: Option<u16>) -> Option<Effect> {
    page.filters.year = year;
    page.current_page = 1;
    page.refresh();
    None
}

fn handle_filters_reset(page: &mut CatalogPage) -> Option<Effect> {
    page.filters = FilterState::default();
    page.current_page = 1;
    page.refresh();
    Some(Effect::Navigate(routes::browse_url(&page.filters)))
}

/// Adopts filters pushed in by the host's router. Emits no effect of its
/// own, otherwise every sync would echo a navigation straight back.
fn handle_route_synced(
    page: &mut CatalogPage,
    kind: Option<String>,
    genre: Option<String>,
) -> Option<Effect> {
    debug!("route sync: type={:?} genre={:?}", kind, genre);
    page.filters.kind = kind
        .as_deref()
        .map(KindFilter::from_param)
        .unwrap_or_default();
    page.filters.genre = genre.filter(|g| !g.is_empty() && g.as_str() != ALL_OPTION);
    page.filters.year = None;
    page.current_page = 1;
    page.refresh();
    None
}

fn handle_search_input_changed(page: &mut CatalogPage, input: String) -> Option<Effect> {
    page.search_input = input;
    None
}

fn handle_search_submitted(page: &mut CatalogPage) -> Option<Effect> {
    routes::search_url(&page.search_input).map(Effect::Navigate)
}

fn handle_next_page(page: &mut CatalogPage) -> Option<Effect> {
    if page.current_page < page.total_pages {
        page.current_page += 1;
        page.refresh();
    }
    None
}

fn handle_prev_page(page: &mut CatalogPage) -> Option<Effect> {
    if page.current_page > 1 {
        page.current_page -= 1;
        page.refresh();
    }
    None
}

fn handle_page_selected(page: &mut CatalogPage, requested: usize) -> Option<Effect> {
    if (1..=page.total_pages).contains(&requested) {
        page.current_page = requested;
        page.refresh();
    }
    None
}
