const CLOSING_MARKER: &str = "</";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Raw `<...>` literal, brackets included.
    Tag(String),
    Text(String),
}

impl Token {
    pub fn is_closing(&self) -> bool {
        match self {
            Token::Tag(tag) => tag.starts_with(CLOSING_MARKER),
            Token::Text(_) => false,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Token::Tag(literal) | Token::Text(literal) => literal,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Token::Tag(literal) | Token::Text(literal) => literal,
        }
    }
}
