use std::sync::LazyLock;

use regex::Regex;

use super::token::Token;

// A tag literal followed by whatever text runs up to the next `<`.
const TAG_PATTERN: &str = r"(<[^>]*>)([^<]*)";

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TAG_PATTERN).expect("tag pattern is a valid regex"));

/// Splits markup into a flat stream of tag and text tokens.
///
/// Anything before the first tag is dropped, as is a stray `<` that never
/// finds its `>`.
pub struct Scanner<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Scanner<'a> {
        Scanner { input, position: 0 }
    }

    fn eof(&self) -> bool {
        self.position >= self.input.len()
    }

    pub fn scan(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while !self.eof() {
            let Some(captures) = TAG_RE.captures_at(self.input, self.position) else {
                break;
            };

            tokens.push(Token::Tag(captures[1].to_owned()));

            let text = &captures[2];
            if !text.is_empty() {
                tokens.push(Token::Text(text.to_owned()));
            }

            self.position = captures.get(0).map_or(self.input.len(), |m| m.end());
        }

        tracing::trace!(tokens = tokens.len(), bytes = self.input.len(), "scanned markup");

        tokens
    }
}

pub fn scan(markup: &str) -> Vec<Token> {
    Scanner::new(markup).scan()
}
