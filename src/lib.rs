//! Tunescout library crate (used by the server binary and integration tests).
//!
//! Tunescout turns free-form user input (a song name or a vague request)
//! into a recommendation list by chaining two text-oracle calls around a
//! concurrent catalog fan-out:
//!
//! 1. [`SuggestionGenerator`] asks the oracle for candidate song titles.
//! 2. [`CatalogSearchAggregator`] resolves every title against the catalog
//!    search service concurrently and thresholds by popularity.
//! 3. [`RelevanceFilter`] asks the oracle to judge each candidate against
//!    the original input, yielding a positionally-aligned
//!    [`RelevanceVector`].
//! 4. [`pipeline::assemble()`] applies the flags to produce the final list.
//!
//! Both collaborators, the oracle and the catalog, are untrusted, latent,
//! fallible black boxes behind the [`TextOracle`] and [`CatalogSearch`]
//! seams. Mock implementations are available behind
//! `#[cfg(any(test, feature = "mock"))]`.

pub mod catalog;
pub mod config;
pub mod gateway;
pub mod model;
pub mod oracle;
pub mod pipeline;

pub use catalog::{CatalogError, CatalogSearch, DEFAULT_SEARCH_TIMEOUT, HttpCatalogClient};
#[cfg(any(test, feature = "mock"))]
pub use catalog::MockCatalog;

pub use config::{Config, ConfigError};
pub use gateway::{API_KEY_HEADER, AppState, GatewayError, create_router_with_state};
pub use model::{
    CandidateSong, PLACEHOLDER_IMAGE_URL, RelevanceVector, SongQuery, UNKNOWN_ARTIST,
};

pub use oracle::{GenaiOracle, OracleError, TextOracle};
#[cfg(any(test, feature = "mock"))]
pub use oracle::MockOracle;

pub use pipeline::{
    CatalogSearchAggregator, FilteredSong, MIN_PLAY_COUNT, PipelineError, RelevanceFilter,
    SUGGESTION_COUNT, SmartSearchPipeline, SongFilter, SuggestionGenerator,
};
