//! Headless engine for a streaming-style media catalog page.
//!
//! The catalog is loaded once, then every view (facets, filtered grid,
//! hero and popular rails, genre sections, paginated latest list) is
//! derived from it in memory. Hosts feed [`Message`]s in and perform the
//! [`Effect`]s that come back out.

pub mod catalog;
pub mod facets;
pub mod filters;
pub mod handlers;
pub mod media;
pub mod pagination;
pub mod ranking;
pub mod routes;
pub mod sections;
pub mod settings;
pub mod source;

// Intentionally curated re-exports for downstream consumers.
pub use catalog::CatalogPage;
pub use facets::GenreCount;
pub use filters::{FilterState, KindFilter};
pub use handlers::{handle_message, Effect, Message};
pub use media::{ContentItem, LoadingState, MediaId, MediaKind};
pub use sections::ContentSection;
pub use settings::AppSettings;
pub use source::{load_catalog, ContentSource, HttpSource, LocalSource, SourceError};
