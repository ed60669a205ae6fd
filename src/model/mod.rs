//! Domain entities shared across the pipeline stages.
//!
//! Everything here lives for the duration of one request. Each pipeline
//! stage owns the collection it produces and hands a new one downstream;
//! nothing is mutated in place once a stage has finished with it.


use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Artwork URL substituted when the catalog record carries no usable image.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/500x500.png?text=No+Artwork";

/// Fallback title for records without one.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Fallback artist for records without one.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Fallback album for records without one.
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Fallback language for records without one.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Raw user input to the smart-search pipeline: either one free-form
/// request ("something like Bohemian Rhapsody") or a list of song
/// identifiers. Immutable for the lifetime of the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SongQuery {
    One(String),
    Many(Vec<String>),
}

impl SongQuery {
    /// Renders the query the way it is embedded into oracle prompts.
    pub fn as_prompt_text(&self) -> String {
        match self {
            SongQuery::One(text) => text.trim().to_string(),
            SongQuery::Many(items) => items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// True when the query carries no usable text at all.
    pub fn is_empty(&self) -> bool {
        self.as_prompt_text().is_empty()
    }
}

/// One catalog-resolved track considered for recommendation.
///
/// Several candidates may share the generated title that produced them
/// (the catalog returns multiple matches per query), and the same track
/// may appear under different generated titles. Neither case is collapsed
/// here; deduplication is the relevance stage's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSong {
    pub title: String,
    pub id: String,
    pub artist: String,
    pub album: String,
    pub language: String,
    pub year: String,
    pub play_count: u64,
    pub image_url: String,
    pub download_urls: Vec<String>,
}

impl CandidateSong {
    /// Maps one raw catalog record to a candidate.
    ///
    /// The catalog's response shape is not contractually field-complete,
    /// so this is the single defaulting boundary: every field falls back
    /// to a documented default, and the known shape variants (`name` vs
    /// `title`, flat artist string vs nested primary-artist list, plain
    /// URLs vs quality-tagged URL arrays, numbers vs numeric strings) are
    /// all accepted. Total: a record can be arbitrarily malformed and
    /// still produce a well-formed candidate.
    pub fn from_record(record: &Value) -> Self {
        Self {
            title: text_field(record, &["name", "title"])
                .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            id: text_field(record, &["id"]).unwrap_or_default(),
            artist: artist_field(record).unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            album: album_field(record).unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
            language: text_field(record, &["language"])
                .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
            year: text_field(record, &["year"]).unwrap_or_default(),
            play_count: count_field(record, "playCount").unwrap_or(0),
            image_url: image_field(record).unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            download_urls: download_urls_field(record),
        }
    }
}

/// Ordered 0/1 relevance flags, exactly one per judged candidate.
///
/// Constructed only after the alignment invariant has been checked, so a
/// value of this type always lines up with the candidate sequence it was
/// derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceVector(Vec<u8>);

impl RelevanceVector {
    pub(crate) fn from_validated(flags: Vec<u8>) -> Self {
        Self(flags)
    }

    pub fn flags(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of candidates the oracle marked relevant.
    pub fn relevant_count(&self) -> usize {
        self.0.iter().filter(|&&flag| flag == 1).count()
    }
}

fn text_field(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match record.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn count_field(record: &Value, key: &str) -> Option<u64> {
    match record.get(key)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn artist_field(record: &Value) -> Option<String> {
    if let Some(flat) = text_field(record, &["primaryArtists", "artist"]) {
        return Some(flat);
    }

    let primary = record.get("artists")?.get("primary")?.as_array()?;
    let names: Vec<String> = primary
        .iter()
        .filter_map(|entry| text_field(entry, &["name"]))
        .collect();
    (!names.is_empty()).then(|| names.join(", "))
}

fn album_field(record: &Value) -> Option<String> {
    match record.get("album")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        nested @ Value::Object(_) => text_field(nested, &["name"]),
        _ => None,
    }
}

fn url_of(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        nested @ Value::Object(_) => text_field(nested, &["url", "link"]),
        _ => None,
    }
}

fn image_field(record: &Value) -> Option<String> {
    match record.get("image")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        // The catalog orders thumbnails low to high quality.
        Value::Array(entries) => entries.iter().rev().find_map(url_of),
        _ => None,
    }
}

fn download_urls_field(record: &Value) -> Vec<String> {
    record
        .get("downloadUrl")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(url_of).collect())
        .unwrap_or_default()
}
