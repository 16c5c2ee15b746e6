// src/record.rs
//! Canonical mapping entry: one MAL id paired with one Trakt id.
//!
//! The JSON shape is flat (`"type"` plus an optional `"season"`), but in memory
//! the season lives inside [`Kind::Show`], so a movie cannot carry one and a
//! show cannot lack one. Deserialization goes through [`RawRecord`] and rejects
//! anything that breaks that rule.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::sanitize::slugify;
use crate::error::ShapeError;

/// Which of the two datasets a record belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Movies,
    Shows,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Movies, Category::Shows];

    /// Value of the `"type"` field, also the source page segment.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Movies => "movies",
            Category::Shows => "shows",
        }
    }

    /// Stem used for local files: `movies.json`, `tv.json`, `ignore_tv.json`...
    pub fn file_stem(self) -> &'static str {
        match self {
            Category::Movies => "movies",
            Category::Shows => "tv",
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movies" | "movie" => Some(Category::Movies),
            "shows" | "show" | "tv" => Some(Category::Shows),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant payload keyed on the record type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Movie,
    Show { season: u32 },
}

impl Kind {
    pub fn category(self) -> Category {
        match self {
            Kind::Movie => Category::Movies,
            Kind::Show { .. } => Category::Shows,
        }
    }

    pub fn season(self) -> Option<u32> {
        match self {
            Kind::Movie => None,
            Kind::Show { season } => Some(season),
        }
    }
}

/// Built through [`Record::movie`], [`Record::show`] or deserialization, so
/// ids are always `None` or positive and the title is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord", into = "RawRecord")]
pub struct Record {
    pub(crate) title: String,
    pub(crate) mal_id: Option<u32>,
    pub(crate) trakt_id: Option<u32>,
    pub(crate) guessed_slug: Option<String>,
    pub(crate) kind: Kind,
}

impl Record {
    pub fn movie(title: impl Into<String>, mal_id: Option<u32>, trakt_id: Option<u32>) -> Self {
        Self::new(title.into(), mal_id, trakt_id, Kind::Movie)
    }

    pub fn show(
        title: impl Into<String>,
        mal_id: Option<u32>,
        trakt_id: Option<u32>,
        season: u32,
    ) -> Self {
        Self::new(title.into(), mal_id, trakt_id, Kind::Show { season })
    }

    /// Slug is guessed from the title; use [`Record::with_slug`] to set it explicitly.
    fn new(title: String, mal_id: Option<u32>, trakt_id: Option<u32>, kind: Kind) -> Self {
        let guessed_slug = slugify(&title);
        Self { title, mal_id: mal_id.filter(|v| *v > 0), trakt_id: trakt_id.filter(|v| *v > 0), guessed_slug, kind }
    }

    pub fn with_slug(mut self, slug: Option<String>) -> Self {
        self.guessed_slug = slug;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn mal_id(&self) -> Option<u32> {
        self.mal_id
    }

    pub fn trakt_id(&self) -> Option<u32> {
        self.trakt_id
    }

    pub fn guessed_slug(&self) -> Option<&str> {
        self.guessed_slug.as_deref()
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn season(&self) -> Option<u32> {
        self.kind.season()
    }

    /// Both ids present and positive. The slug does not take part.
    pub fn is_valid(&self) -> bool {
        matches!((self.mal_id, self.trakt_id), (Some(m), Some(t)) if m > 0 && t > 0)
    }

    /// Identity used to pair overrides with scraped records.
    pub fn key(&self) -> RecordKey {
        RecordKey { mal_id: self.mal_id, trakt_id: self.trakt_id, kind: self.kind }
    }

    /// Short human label for log lines.
    pub fn label(&self) -> String {
        let mal = self.mal_id.map_or(s!("-"), |v| v.to_string());
        let trakt = self.trakt_id.map_or(s!("-"), |v| v.to_string());
        match self.kind {
            Kind::Movie => format!("'{}' (MAL: {mal}, Trakt: {trakt})", self.title),
            Kind::Show { season } => format!("'{}' S{season} (MAL: {mal}, Trakt: {trakt})", self.title),
        }
    }
}

/// `(mal_id, trakt_id, type, season)`; the season only exists for shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub mal_id: Option<u32>,
    pub trakt_id: Option<u32>,
    pub kind: Kind,
}

/* ---------------- wire format ---------------- */

/// Flat JSON shape, exactly as stored on disk. Unknown keys are rejected.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawRecord {
    pub title: String,
    #[serde(default)]
    pub mal_id: Option<i64>,
    #[serde(default)]
    pub trakt_id: Option<i64>,
    /// Outer `None`: key absent. `Some(None)`: explicit `null`.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub guessed_slug: Option<Option<String>>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<i64>,
}

fn present<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Some)
}

/// Non-positive or out-of-range ids count as missing.
fn normalize_id(v: Option<i64>) -> Option<u32> {
    v.filter(|v| *v > 0).and_then(|v| u32::try_from(v).ok())
}

impl TryFrom<RawRecord> for Record {
    type Error = ShapeError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let title = raw.title.trim().to_string();
        if title.is_empty() {
            return Err(ShapeError::EmptyTitle);
        }
        let category = Category::parse(&raw.kind)
            .filter(|c| c.as_str() == raw.kind)
            .ok_or_else(|| ShapeError::UnknownType(raw.kind.clone()))?;

        let kind = match (category, raw.season) {
            (Category::Movies, None) => Kind::Movie,
            (Category::Movies, Some(season)) => {
                return Err(ShapeError::MovieWithSeason { title, season });
            }
            (Category::Shows, None) => return Err(ShapeError::ShowWithoutSeason { title }),
            (Category::Shows, Some(season)) => match u32::try_from(season) {
                Ok(s) if s > 0 => Kind::Show { season: s },
                _ => return Err(ShapeError::InvalidSeason { title, season }),
            },
        };

        let guessed_slug = match raw.guessed_slug {
            Some(explicit) => explicit,
            None => slugify(&title),
        };

        Ok(Record {
            title,
            mal_id: normalize_id(raw.mal_id),
            trakt_id: normalize_id(raw.trakt_id),
            guessed_slug,
            kind,
        })
    }
}

impl From<Record> for RawRecord {
    fn from(r: Record) -> Self {
        RawRecord {
            title: r.title,
            mal_id: r.mal_id.map(i64::from),
            trakt_id: r.trakt_id.map(i64::from),
            guessed_slug: Some(r.guessed_slug),
            kind: s!(r.kind.category().as_str()),
            season: r.kind.season().map(i64::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validity_needs_both_ids() {
        assert!(Record::movie("A", Some(1), Some(2)).is_valid());
        assert!(!Record::movie("A", None, Some(2)).is_valid());
        assert!(!Record::movie("A", Some(1), None).is_valid());
        // zero is normalized away on construction
        assert!(!Record::movie("A", Some(0), Some(2)).is_valid());
    }

    #[test]
    fn slug_absent_is_computed_but_null_is_kept() {
        let computed: Record = serde_json::from_value(json!({
            "title": "Kimi no Na wa.", "mal_id": 32281, "trakt_id": 264, "type": "movies"
        }))
        .unwrap();
        assert_eq!(computed.guessed_slug.as_deref(), Some("kimi-no-na-wa"));

        let explicit: Record = serde_json::from_value(json!({
            "title": "Kimi no Na wa.", "mal_id": 32281, "trakt_id": 264,
            "guessed_slug": null, "type": "movies"
        }))
        .unwrap();
        assert_eq!(explicit.guessed_slug, None);
    }

    #[test]
    fn negative_ids_become_missing() {
        let r: Record = serde_json::from_value(json!({
            "title": "X", "mal_id": -4, "trakt_id": null, "guessed_slug": "x", "type": "movies"
        }))
        .unwrap();
        assert_eq!(r.mal_id, None);
        assert_eq!(r.trakt_id, None);
    }

    #[test]
    fn show_round_trips_with_season_and_movie_without() {
        let show = Record::show("Mob Psycho 100", Some(32182), Some(104017), 1);
        let v = serde_json::to_value(&show).unwrap();
        assert_eq!(v["type"], "shows");
        assert_eq!(v["season"], 1);

        let movie = Record::movie("Akira", Some(47), Some(1412));
        let v = serde_json::to_value(&movie).unwrap();
        assert_eq!(v["type"], "movies");
        assert!(v.get("season").is_none());
        assert!(v.get("guessed_slug").is_some());
    }

    #[test]
    fn misspelled_keys_are_rejected() {
        for bad in [
            json!({"title": "X", "mal": 1, "trakt_id": 1, "type": "movies"}),
            json!({"title": "X", "mal_id": 1, "trakt_id": 1, "type": "shows", "seasons": 2}),
        ] {
            assert!(serde_json::from_value::<Record>(bad).is_err());
        }
    }

    #[test]
    fn type_must_be_exact() {
        let err = serde_json::from_value::<Record>(json!({
            "title": "X", "mal_id": 1, "trakt_id": 1, "type": "tv", "season": 1
        }));
        assert!(err.is_err());
    }
}
