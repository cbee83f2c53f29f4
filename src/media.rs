use serde::Deserialize;

pub type MediaId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaKind {
    Movie,
    Anime,
    WebSeries,
}

impl MediaKind {
    pub fn all() -> &'static [MediaKind] {
        &[MediaKind::Movie, MediaKind::Anime, MediaKind::WebSeries]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Anime => "anime",
            MediaKind::WebSeries => "web-series",
        }
    }

    pub fn parse(value: &str) -> Option<MediaKind> {
        let normalized = value.trim().to_ascii_lowercase();
        MediaKind::all()
            .iter()
            .copied()
            .find(|kind| kind.slug() == normalized)
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "Movie"),
            MediaKind::Anime => write!(f, "Anime"),
            MediaKind::WebSeries => write!(f, "Web Series"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingState {
    Loading,
    Ready,
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    pub id: MediaId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default)]
    pub genres: Vec<String>,
    pub year: u16,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}
