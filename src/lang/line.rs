use super::lex::{is_ident_char, is_sigil};

/// ## A line of direct input
///
/// Keeps the text as typed next to the normalized text the parser reads.
/// Normalization upper-cases every ASCII letter except the name that
/// directly follows a `$`, so `ini $count 1` becomes `INI $count 1`.
/// Only ASCII case changes, so byte offsets are identical in both strings.

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    raw: String,
    text: String,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let raw = s.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string();
        let mut text = String::with_capacity(raw.len());
        let mut in_name = false;
        for ch in raw.chars() {
            if is_sigil(ch) {
                in_name = true;
                text.push(ch);
            } else if in_name && is_ident_char(ch) {
                text.push(ch);
            } else {
                in_name = false;
                text.push(ch.to_ascii_uppercase());
            }
        }
        Line { raw, text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The raw text matching `rest`, a suffix of the normalized text.
    pub fn raw_tail(&self, rest: &str) -> &str {
        debug_assert!(self.text.ends_with(rest));
        &self.raw[self.raw.len() - rest.len()..]
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
