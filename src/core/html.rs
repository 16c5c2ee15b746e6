// src/core/html.rs
// Tolerant, case-insensitive scanning over raw HTML. No DOM; byte offsets
// into the original string stay valid because only ASCII is lowercased.

/// ASCII-only lowercase; byte offsets match the input.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Inner HTML between the first `open_pat...>` and the following `close_pat`.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Next `<tag ...>...</tag>` block at or after `from`, as `(start, end)` byte
/// offsets covering both tags. The opener must be followed by `>` or whitespace
/// so `<a` does not match `<abbr`.
pub fn next_tag_block_ci(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(open);
    let cl = to_lower(close);

    let mut at = from;
    let start = loop {
        let cand = lc.get(at..)?.find(&ol)? + at;
        match lc.as_bytes().get(cand + ol.len()) {
            Some(b'>' | b' ' | b'\t' | b'\r' | b'\n' | b'/') => break cand,
            _ => at = cand + ol.len(),
        }
    };
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    Some((start, open_end + end_rel + close.len()))
}

/// All blocks of one tag, in document order.
pub fn tag_blocks_ci<'a>(s: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((b, e)) = next_tag_block_ci(s, open, close, pos) {
        out.push(&s[b..e]);
        pos = e;
    }
    out
}

/// `<td class=x>inner</td>` → `inner`
pub fn inner_after_open_tag(block: &str) -> &str {
    if let (Some(oe), Some(cs)) = (block.find('>'), block.rfind('<')) {
        if cs > oe {
            return &block[oe + 1..cs];
        }
    }
    ""
}

/// Value of `attr` in the opening tag of `block` (quoted or bare).
pub fn attr_value<'a>(block: &'a str, attr: &str) -> Option<&'a str> {
    let opener = &block[..block.find('>')?];
    let lc = to_lower(opener);
    let needle = join!(to_lower(attr), "=");

    // attribute names must start after whitespace
    let mut at = 0usize;
    let pos = loop {
        let cand = lc.get(at..)?.find(&needle)? + at;
        if cand > 0 && opener.as_bytes()[cand - 1].is_ascii_whitespace() {
            break cand;
        }
        at = cand + needle.len();
    };

    let val = opener[pos + needle.len()..].trim_start();
    match val.as_bytes().first()? {
        q @ (b'"' | b'\'') => {
            let q = *q as char;
            let end = val[1..].find(q)? + 1;
            Some(&val[1..end])
        }
        _ => {
            let end = val.find(|c: char| c.is_ascii_whitespace()).unwrap_or(val.len());
            Some(&val[..end])
        }
    }
}

/// Drop every `<...>` and collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Visible text of a fragment: entities decoded, tags stripped.
pub fn text_of(fragment: &str) -> String {
    strip_tags(super::sanitize::normalize_entities(fragment))
}

/// Split on `<br>`, `<br/>`, `<br />` in any case.
pub fn split_br(s: &str) -> Vec<&str> {
    let lc = to_lower(s);
    let mut out = Vec::new();
    let mut last = 0usize;
    let mut at = 0usize;
    while let Some(rel) = lc[at..].find("<br") {
        let b = at + rel;
        let after = lc.as_bytes().get(b + 3).copied();
        if !matches!(after, Some(b'>' | b'/' | b' ')) {
            at = b + 3;
            continue;
        }
        let Some(gt) = s[b..].find('>') else { break };
        out.push(&s[last..b]);
        last = b + gt + 1;
        at = last;
    }
    out.push(&s[last..]);
    out
}
