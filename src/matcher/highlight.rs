/// A run of text that either matched the query or did not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn new(text: &str, matched: bool) -> Self {
        Self {
            text: text.to_string(),
            matched,
        }
    }
}

/// Split `text` into segments, marking every case-insensitive occurrence of
/// `query`. Concatenating the segments always yields `text`.
pub fn highlight_match(text: &str, query: &str) -> Vec<Segment> {
    if query.trim().is_empty() || text.is_empty() {
        return vec![Segment::new(text, false)];
    }

    let query_lower: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        if let Some(len) = match_len_at(&text[pos..], &query_lower) {
            if plain_start < pos {
                segments.push(Segment::new(&text[plain_start..pos], false));
            }
            segments.push(Segment::new(&text[pos..pos + len], true));
            pos += len;
            plain_start = pos;
        } else {
            // Advance one char, staying on a UTF-8 boundary
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::new(&text[plain_start..], false));
    }

    segments
}

/// Byte length of the prefix of `text` whose lowercase form equals `query_lower`
fn match_len_at(text: &str, query_lower: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (idx, ch) in text.char_indices() {
        for lower in ch.to_lowercase() {
            if query_lower.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == query_lower.len() {
            return Some(idx + ch.len_utf8());
        }
    }
    None
}
