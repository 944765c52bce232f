use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, EmphasisKind, MarkdownLink, WikiLink},
    types::InlineNode,
};

/// Layer index of code spans; emphasis layers come before it.
const CODE_LAYER: usize = Emphasis::LAYERS.len();
const LINK_LAYER: usize = CODE_LAYER + 1;

/// Parses inline content into a tree of [`InlineNode`]s.
///
/// # Precedence
/// Constructs are split out in layers, outermost first: `**`, `__`, `*`,
/// `_`, code spans, then links. Each layer only sees the text its outer
/// layers left over, so `**bold *and* nested**` is a `Strong` node holding
/// an `Emphasis` node.
///
/// Code spans and links are raw zones: emphasis delimiters inside them do
/// not pair, so `` `a*b*c` `` stays a single code span. Unmatched delimiters
/// degrade to literal text. Adjacent text is always merged into one node.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut out = vec![];
    parse_layer(s, 0, &mut out);
    out
}

fn parse_layer(s: &str, layer: usize, out: &mut Vec<InlineNode>) {
    if s.is_empty() {
        return;
    }
    match layer {
        l if l < CODE_LAYER => parse_emphasis(s, Emphasis::LAYERS[l], l, out),
        CODE_LAYER => parse_code_spans(s, out),
        LINK_LAYER => parse_links(s, out),
        _ => push_text(out, s),
    }
}

/// Appends text, merging with a preceding text node.
fn push_text(out: &mut Vec<InlineNode>, s: &str) {
    if s.is_empty() {
        return;
    }
    if let Some(InlineNode::Text(prev)) = out.last_mut() {
        prev.push_str(s);
    } else {
        out.push(InlineNode::Text(s.to_string()));
    }
}

fn parse_emphasis(s: &str, delim: Emphasis, layer: usize, out: &mut Vec<InlineNode>) {
    let mut rest = s;
    while let Some((open, close)) = find_pair(rest, delim) {
        parse_layer(&rest[..open], layer + 1, out);

        let mut children = vec![];
        parse_layer(&rest[open + delim.delim.len()..close], layer + 1, &mut children);
        out.push(match delim.kind {
            EmphasisKind::Strong => InlineNode::Strong(children),
            EmphasisKind::Emphasis => InlineNode::Emphasis(children),
        });

        rest = &rest[close + delim.delim.len()..];
    }
    parse_layer(rest, layer + 1, out);
}

/// Finds the first opener with a matching closer, skipping raw zones.
/// Content between the two must be non-empty.
fn find_pair(s: &str, delim: Emphasis) -> Option<(usize, usize)> {
    let zones = raw_zones(s);
    let in_zone = |i: usize| zones.iter().any(|&(a, b)| a <= i && i < b);
    let candidates: Vec<usize> = s
        .match_indices(delim.delim)
        .map(|(i, _)| i)
        .filter(|&i| !in_zone(i))
        .collect();

    for (k, &open) in candidates.iter().enumerate() {
        if !delim.can_open(s, open) {
            continue;
        }
        let inner_start = open + delim.delim.len();
        if let Some(&close) = candidates[k + 1..]
            .iter()
            .find(|&&c| c > inner_start && delim.can_close(s, c))
        {
            return Some((open, close));
        }
    }
    None
}

/// Byte ranges covered by code spans and links.
fn raw_zones(s: &str) -> Vec<(usize, usize)> {
    let mut zones = vec![];
    let mut cur = Cursor::new(s);
    while !cur.eof() {
        let start = cur.i;
        if try_parse_code_span(&mut cur).is_some()
            || try_parse_wikilink(&mut cur).is_some()
            || try_parse_markdown_link(&mut cur).is_some()
        {
            zones.push((start, cur.i));
            continue;
        }
        cur.bump();
    }
    zones
}

fn parse_code_spans(s: &str, out: &mut Vec<InlineNode>) {
    let mut cur = Cursor::new(s);
    let mut text_start = 0;
    while !cur.eof() {
        let start = cur.i;
        if let Some(node) = try_parse_code_span(&mut cur) {
            parse_layer(&s[text_start..start], LINK_LAYER, out);
            out.push(node);
            text_start = cur.i;
            continue;
        }
        cur.bump();
    }
    parse_layer(&s[text_start..], LINK_LAYER, out);
}

fn parse_links(s: &str, out: &mut Vec<InlineNode>) {
    let mut cur = Cursor::new(s);
    let mut text_start = 0;
    while !cur.eof() {
        let start = cur.i;
        if let Some(node) = try_parse_wikilink(&mut cur).or_else(|| try_parse_markdown_link(&mut cur))
        {
            push_text(out, &s[text_start..start]);
            out.push(node);
            text_start = cur.i;
            continue;
        }
        cur.bump();
    }
    push_text(out, &s[text_start..]);
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick or if the code span isn't closed.
/// On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }
    let saved = cur.clone();
    cur.bump_n(1);
    match cur.take_until(&[CodeSpan::TICK]) {
        Some(inner) if !inner.is_empty() => {
            cur.bump_n(1);
            Some(InlineNode::Code(inner.to_string()))
        }
        _ => {
            *cur = saved;
            None
        }
    }
}

/// Attempts to parse `[[target]]` or `[[target|alias]]`.
///
/// The alias, when present, is the link text; the target is the URL.
fn try_parse_wikilink(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(WikiLink::OPEN) {
        return None;
    }
    let saved = cur.clone();
    cur.bump_n(WikiLink::OPEN.len());
    let Some(inner) = cur.take_until(WikiLink::CLOSE).filter(|t| !t.is_empty()) else {
        *cur = saved;
        return None;
    };
    cur.bump_n(WikiLink::CLOSE.len());

    let (target, alias) = match inner.split_once(WikiLink::ALIAS as char) {
        Some((target, alias)) => (target, alias),
        None => (inner, inner),
    };
    Some(InlineNode::Link {
        text: alias.to_string(),
        url: target.to_string(),
    })
}

/// Attempts to parse `[text](url)`. Both parts must be non-empty.
fn try_parse_markdown_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(MarkdownLink::TEXT_OPEN) {
        return None;
    }
    let saved = cur.clone();
    cur.bump_n(MarkdownLink::TEXT_OPEN.len());

    let parsed = (|| {
        let text = cur.take_until(b"]").filter(|t| !t.is_empty())?;
        if !cur.starts_with(MarkdownLink::TEXT_CLOSE) {
            return None;
        }
        cur.bump_n(MarkdownLink::TEXT_CLOSE.len());
        let url = cur
            .take_until(MarkdownLink::URL_CLOSE)
            .filter(|u| !u.is_empty())?;
        cur.bump_n(MarkdownLink::URL_CLOSE.len());
        Some(InlineNode::Link {
            text: text.to_string(),
            url: url.trim().to_string(),
        })
    })();

    if parsed.is_none() {
        *cur = saved;
    }
    parsed
}
