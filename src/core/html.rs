// src/core/html.rs
//
// Structural HTML slicing, std-only. Class lookups are token-based so
// `class="fw-bold ms-1"` matches both "fw-bold" and "ms-1".

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// First `<o>…</c>` block at or after `from`. Not nesting-aware; fine for
/// tags that don't nest (span, title).
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

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
    normalize_ws(&out)
}

/// Clean visible text of a tag block.
pub fn text_of(block: &str) -> String {
    strip_tags(normalize_entities(&inner_after_open_tag(block)))
}

/// Does the block's opening tag carry `token` in its class list?
/// Tolerates single quotes, double quotes, and unquoted values.
pub fn has_class(block: &str, token: &str) -> bool {
    let end = block.find('>').unwrap_or(block.len());
    let opener = to_lower(&block[..end]);
    let token = to_lower(token);
    match class_attr(&opener) {
        Some(attr) => attr.split_whitespace().any(|t| t == token),
        None => false,
    }
}

fn class_attr(opener_lc: &str) -> Option<&str> {
    let i = opener_lc.find("class=")?;
    let rest = &opener_lc[i + "class=".len()..];
    match rest.as_bytes().first() {
        Some(b'"') => rest[1..].find('"').map(|e| &rest[1..1 + e]),
        Some(b'\'') => rest[1..].find('\'').map(|e| &rest[1..1 + e]),
        _ => {
            let e = rest
                .find(|c: char| c.is_ascii_whitespace() || c == '>')
                .unwrap_or(rest.len());
            Some(&rest[..e])
        }
    }
}

// A real opener like "<div " or "<div>", not a prefix of a longer tag name.
fn is_tag_start(lc: &str, at: usize, open: &str) -> bool {
    matches!(
        lc.as_bytes().get(at + open.len()),
        Some(b' ' | b'\t' | b'\n' | b'\r' | b'>' | b'/')
    )
}

/// All `<tag class~=class>…</tag>` blocks in document order, tracking
/// nesting of the same tag so inner divs don't truncate the block.
pub fn find_class_blocks<'a>(doc: &'a str, tag: &str, class: &str) -> Vec<&'a str> {
    let lc = to_lower(doc);
    let open = join!("<", &to_lower(tag));
    let close = join!("</", &to_lower(tag), ">");

    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some(rel) = lc[pos..].find(&open) {
        let start = pos + rel;
        pos = start + open.len();

        if !is_tag_start(&lc, start, &open) {
            continue;
        }
        let Some(oe) = doc[start..].find('>') else { break };
        if !has_class(&doc[start..=start + oe], class) {
            continue;
        }

        let mut depth = 1usize;
        let mut cur = start + oe + 1;
        let end = loop {
            let next_open = lc[cur..].find(&open).map(|i| cur + i);
            let next_close = lc[cur..].find(&close).map(|i| cur + i);
            match (next_open, next_close) {
                (_, None) => break None, // unterminated; drop the block
                (Some(o2), Some(c2)) if o2 < c2 => {
                    if is_tag_start(&lc, o2, &open) {
                        depth += 1;
                    }
                    cur = o2 + open.len();
                }
                (_, Some(c2)) => {
                    depth -= 1;
                    cur = c2 + close.len();
                    if depth == 0 {
                        break Some(cur);
                    }
                }
            }
        };

        if let Some(end) = end {
            out.push(&doc[start..end]);
            pos = end;
        }
    }

    out
}

/// First matching block, if any.
pub fn first_class_block<'a>(doc: &'a str, tag: &str, class: &str) -> Option<&'a str> {
    find_class_blocks(doc, tag, class).into_iter().next()
}
