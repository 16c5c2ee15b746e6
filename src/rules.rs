// src/rules.rs
//! Ignore rules and the matcher that evaluates them.
//!
//! A rule file is a JSON array:
//! ```json
//! [{ "source": "all", "type": "ANY", "description": "invalid ids",
//!    "conditions": [{ "mal_id": null }, { "trakt_id": null }] }]
//! ```
//! Each condition object is an AND over its keys; the rule `type` combines the
//! conditions (`ALL`/`AND` or `ANY`/`OR`).

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::record::{Kind, Record};

/// Which partition a rule is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Freshly scraped records, before overrides are merged in.
    Remote,
    /// Override records only.
    Local,
    /// Scraped records that survived the merge.
    All,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Source::Remote => "remote",
            Source::Local => "local",
            Source::All => "all",
        })
    }
}

/// How a rule combines its conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum Combine {
    #[serde(rename = "ALL", alias = "AND")]
    All,
    #[serde(rename = "ANY", alias = "OR")]
    Any,
}

/// Every key is required and no others are allowed: a misspelled
/// `conditions` would otherwise read as an empty `ALL` and match everything.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    pub source: Source,
    #[serde(rename = "type")]
    pub combine: Combine,
    pub conditions: Vec<Condition>,
    pub description: String,
}

/// Record attributes a condition can test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    MalId,
    TraktId,
    GuessedSlug,
    Type,
    Season,
}

impl Field {
    pub fn from_name(name: &str) -> Option<Field> {
        Some(match name {
            "title" => Field::Title,
            "mal_id" => Field::MalId,
            "trakt_id" => Field::TraktId,
            "guessed_slug" => Field::GuessedSlug,
            "type" => Field::Type,
            "season" => Field::Season,
            _ => return None,
        })
    }

    /// One predicate per field; a field absent on the record only matches `Missing`.
    pub fn check(self, record: &Record, expected: &Expected) -> bool {
        match self {
            Field::Title => text_eq(Some(&record.title), expected),
            Field::MalId => int_eq(record.mal_id, expected),
            Field::TraktId => int_eq(record.trakt_id, expected),
            Field::GuessedSlug => text_eq(record.guessed_slug.as_deref(), expected),
            Field::Type => text_eq(Some(record.category().as_str()), expected),
            Field::Season => match record.kind {
                Kind::Movie => expected.is_missing(),
                Kind::Show { season } => int_eq(Some(season), expected),
            },
        }
    }
}

/// Expected value of one field. `null` in JSON is [`Expected::Missing`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expected {
    Missing,
    Text(String),
    Int(i64),
}

impl Expected {
    pub fn is_missing(&self) -> bool {
        matches!(self, Expected::Missing)
    }
}

fn text_eq(actual: Option<&str>, expected: &Expected) -> bool {
    match (actual, expected) {
        (None, Expected::Missing) => true,
        (Some(a), Expected::Text(e)) => a == e,
        _ => false,
    }
}

fn int_eq(actual: Option<u32>, expected: &Expected) -> bool {
    match (actual, expected) {
        (None, Expected::Missing) => true,
        (Some(a), Expected::Int(e)) => i64::from(a) == *e,
        _ => false,
    }
}

/// Field/value pairs joined by AND.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Condition {
    pub checks: Vec<(Field, Expected)>,
}

impl Condition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, expected: Expected) -> Self {
        self.checks.push((field, expected));
        self
    }

    pub fn is_satisfied_by(&self, record: &Record) -> bool {
        self.checks.iter().all(|(field, expected)| field.check(record, expected))
    }
}

impl TryFrom<Map<String, Value>> for Condition {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut checks = Vec::with_capacity(map.len());
        for (name, value) in map {
            let field = Field::from_name(&name)
                .ok_or_else(|| format!("unknown condition field {name:?}"))?;
            let expected = match value {
                Value::Null => Expected::Missing,
                Value::String(s) => Expected::Text(s),
                Value::Number(n) => Expected::Int(
                    n.as_i64().ok_or_else(|| format!("{name}: expected an integer, got {n}"))?,
                ),
                other => return Err(format!("{name}: unsupported value {other}")),
            };
            checks.push((field, expected));
        }
        Ok(Self { checks })
    }
}

impl Rule {
    /// `ALL` with no conditions is vacuously true; `ANY` with none is false.
    pub fn matches(&self, record: &Record) -> bool {
        match self.combine {
            Combine::All => self.conditions.iter().all(|c| c.is_satisfied_by(record)),
            Combine::Any => self.conditions.iter().any(|c| c.is_satisfied_by(record)),
        }
    }
}

/// Free-function form of [`Rule::matches`].
pub fn matches(record: &Record, rule: &Rule) -> bool {
    rule.matches(record)
}
