// src/specs/movies.rs
//! Movies page: one row per film.
//!
//! ```text
//! <tr><td><a href="https://trakt.tv/movies/{trakt_id}">Trakt title</a></td>
//!     <td><a href="https://myanimelist.net/anime/{mal_id}">MAL title</a></td></tr>
//! ```

use super::{cells, first_anchor, id_from_href, pick_title};
use crate::core::sanitize::slugify;
use crate::error::ParseError;
use crate::record::Record;

pub fn parse_row(tr: &str) -> Result<Record, ParseError> {
    let cells = cells(tr);
    if cells.len() < 2 {
        return Err(ParseError::Row(s!("invalid movie row structure")));
    }

    let (Some(trakt), Some(mal)) = (first_anchor(cells[0]), first_anchor(cells[1])) else {
        return Err(ParseError::Row(s!("missing required links in movie row")));
    };

    let title = pick_title(&mal.text, &trakt.text)?;
    Ok(Record::movie(title, id_from_href(mal.href), id_from_href(trakt.href)).with_slug(slugify(&trakt.text)))
}
