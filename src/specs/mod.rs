// src/specs/mod.rs
//! # Scraping "specs"
//!
//! One module per source page. Each knows where the ground truth lives in the
//! HTML and how to turn a table row into [`Record`]s; nothing here touches
//! the network, the cache or the rules.
//!
//! Both pages share a layout: the first `<tbody>` holds one `<tr>` per Trakt
//! entry, the first cell links to Trakt and the second to MyAnimeList.
//!
//! ## Conventions
//! - Case-insensitive tag scanning via `core::html`; no full-document regexes.
//! - A malformed row is reported through the [`Progress`] warning channel and
//!   skipped. Only a page without a table body is an error.
//! - Ids that do not parse become missing ids; ignore rules decide what to do
//!   with them.

pub mod movies;
pub mod shows;

use crate::core::html::{attr_value, inner_after_open_tag, next_tag_block_ci, slice_between_ci, tag_blocks_ci, text_of};
use crate::error::ParseError;
use crate::progress::Progress;
use crate::record::{Category, Record};

/// Parse a whole page into records, in table order.
pub fn parse(category: Category, doc: &str, progress: &mut dyn Progress) -> Result<Vec<Record>, ParseError> {
    let tbody = slice_between_ci(doc, "<tbody", "</tbody>").ok_or(ParseError::MissingTable(category))?;

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for (i, tr) in tag_blocks_ci(tbody, "<tr", "</tr>").into_iter().enumerate() {
        let parsed = match category {
            Category::Movies => movies::parse_row(tr).map(|r| vec![r]),
            Category::Shows => shows::parse_row(tr, progress),
        };
        match parsed {
            Ok(records) => out.extend(records),
            Err(e) => {
                skipped += 1;
                progress.warn(&format!("Error parsing {category} row {}: {e}", i + 1));
            }
        }
    }

    progress.log(&format!("Parsed {} {category} records ({skipped} rows skipped)", out.len()));
    Ok(out)
}

/// First `<a href=...>` of a fragment.
pub(crate) struct Anchor<'a> {
    pub href: &'a str,
    pub text: String,
}

pub(crate) fn first_anchor(fragment: &str) -> Option<Anchor<'_>> {
    let (b, e) = next_tag_block_ci(fragment, "<a", "</a>", 0)?;
    let block = &fragment[b..e];
    Some(Anchor { href: attr_value(block, "href")?, text: text_of(inner_after_open_tag(block)) })
}

/// Trailing numeric path segment: `https://myanimelist.net/anime/5114/` → 5114.
pub(crate) fn id_from_href(href: &str) -> Option<u32> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    let last = path.trim_end_matches('/').rsplit('/').next()?;
    last.trim().parse::<u32>().ok().filter(|v| *v > 0)
}

/// The `<td>` cells of a row.
pub(crate) fn cells(tr: &str) -> Vec<&str> {
    tag_blocks_ci(tr, "<td", "</td>").into_iter().map(inner_after_open_tag).collect()
}

/// MAL title wins; the Trakt text is the fallback.
pub(crate) fn pick_title(mal_text: &str, trakt_text: &str) -> Result<String, ParseError> {
    let title = if mal_text.is_empty() { trakt_text } else { mal_text };
    if title.is_empty() {
        return Err(ParseError::Row(s!("row has no title")));
    }
    Ok(s!(title))
}
