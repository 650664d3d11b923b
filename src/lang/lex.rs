use super::token::*;

/// Tokenize a whole line, stopping before `Token::End`.
pub fn lex(s: &str) -> Vec<Token> {
    MclLexer { rest: s }.collect()
}

/// Scan one token off the front of `s`.
///
/// Leading whitespace is skipped. The remaining text is returned so callers
/// can switch to their own scanning after the keyword.
pub fn next_token(s: &str) -> (Token, &str) {
    let s = skip_whitespace(s);
    let ch = match s.chars().next() {
        Some(ch) => ch,
        None => return (Token::End, s),
    };
    if is_sigil(ch) {
        return (Token::Sigil, &s[1..]);
    }
    if ch == ',' {
        return (Token::Comma, &s[1..]);
    }
    if is_mcl_digit(ch) {
        let (digits, rest) = split_while(s, is_mcl_digit);
        return (Token::Number(decimal(digits)), rest);
    }
    if is_mcl_alphabetic(ch) {
        let (word, rest) = split_while(s, |c| is_ident_char(c) || is_sigil(c));
        return (Token::Ident(word.to_string()), rest);
    }
    (Token::Unknown(ch), &s[ch.len_utf8()..])
}

pub fn is_mcl_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

pub fn is_mcl_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_mcl_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn is_sigil(c: char) -> bool {
    c == '$'
}

pub fn skip_whitespace(s: &str) -> &str {
    s.trim_start_matches(is_mcl_whitespace)
}

/// Split `s` after the longest prefix whose characters all satisfy `pred`.
pub fn split_while<P: Fn(char) -> bool>(s: &str, pred: P) -> (&str, &str) {
    let end = s.find(|c: char| !pred(c)).unwrap_or_else(|| s.len());
    s.split_at(end)
}

/// Decimal value of an all-digit string. Wraps instead of checking overflow.
pub fn decimal(digits: &str) -> i32 {
    digits
        .bytes()
        .filter(|b| b.is_ascii_digit())
        .fold(0i32, |acc, b| {
            acc.wrapping_mul(10).wrapping_add(i32::from(b - b'0'))
        })
}

struct MclLexer<'a> {
    rest: &'a str,
}

impl<'a> Iterator for MclLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let (token, rest) = next_token(self.rest);
        self.rest = rest;
        if token.is_end() {
            None
        } else {
            Some(token)
        }
    }
}
