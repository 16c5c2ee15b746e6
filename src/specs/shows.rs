// src/specs/shows.rs
//! Shows page: one row per Trakt show, one record per listed season.
//!
//! ```text
//! <tr><td><a href="https://trakt.tv/shows/{trakt_id}">Trakt title</a></td>
//!     <td>S1 <a href=".../anime/{mal_id}">MAL title</a><br/>
//!         S2 <a href=".../anime/{mal_id}">MAL title 2</a></td></tr>
//! ```

use super::{cells, first_anchor, id_from_href, pick_title};
use crate::core::html::{split_br, text_of};
use crate::core::sanitize::slugify;
use crate::error::ParseError;
use crate::progress::Progress;
use crate::record::Record;

/// Fragments without a MAL link are ignored; a fragment with a bad season
/// marker is skipped with a warning and the rest of the row is kept.
pub fn parse_row(tr: &str, progress: &mut dyn Progress) -> Result<Vec<Record>, ParseError> {
    let cells = cells(tr);
    if cells.len() < 2 {
        return Err(ParseError::Row(s!("invalid show row structure")));
    }
    let trakt = first_anchor(cells[0]).ok_or_else(|| ParseError::Row(s!("missing Trakt link in show row")))?;
    let trakt_id = id_from_href(trakt.href);
    let slug = slugify(&trakt.text);

    let mut out = Vec::new();
    for fragment in split_br(cells[1]) {
        let Some(mal) = first_anchor(fragment) else { continue };

        let season = match season_marker(&text_of(fragment)) {
            Some(s) => s,
            None => {
                progress.warn(&format!("No season marker for '{}' in {:?}", trakt.text, text_of(fragment)));
                continue;
            }
        };
        let title = pick_title(&mal.text, &trakt.text)?;
        out.push(Record::show(title, id_from_href(mal.href), trakt_id, season).with_slug(slug.clone()));
    }
    Ok(out)
}

/// `"S2 Title"` → 2. The marker is the first word of the fragment.
fn season_marker(text: &str) -> Option<u32> {
    let word = text.split_whitespace().next()?;
    let digits: String = word.strip_prefix(['S', 's'])?.chars().take_while(char::is_ascii_digit).collect();
    digits.parse::<u32>().ok().filter(|s| *s > 0)
}
