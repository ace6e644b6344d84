use serde::Serialize;

use super::PatternError;
use super::parameter::Parameter;

/// Shape of a whitespace-delimited word in a usage string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Plain word that must appear verbatim (e.g. "remind", "at")
    Literal,
    /// Angle-bracket placeholder (e.g. "<who>", "<time:integer>")
    DefinedParameter,
    /// Parenthesized alternatives (e.g. "(on|off)")
    DefinedOptions,
    /// Angle-bracket placeholder ending in `?` (e.g. "<name:?>", "<n:integer?>")
    OptionalParameter,
}

/// One word of a usage string. For placeholder shapes `word` holds the
/// inner text with the delimiters stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    word: String,
    kind: TokenKind,
    position: usize,
}

impl Token {
    pub fn new(word: impl Into<String>, kind: TokenKind, position: usize) -> Self {
        Self {
            word: word.into(),
            kind,
            position,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Zero-based index among all words of the pattern.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_parameter(&self) -> bool {
        self.kind != TokenKind::Literal
    }

    /// The word as it was written in the usage string, delimiters included.
    pub fn source(&self) -> String {
        match self.kind {
            TokenKind::Literal => self.word.clone(),
            TokenKind::DefinedParameter | TokenKind::OptionalParameter => {
                format!("<{}>", self.word)
            }
            TokenKind::DefinedOptions => format!("({})", self.word),
        }
    }

    /// Build the parameter this token declares. `ordinal` is the token's
    /// index among the parameter tokens of its pattern.
    pub fn parameter(&self, ordinal: usize) -> Result<Parameter, PatternError> {
        Parameter::parse(self, ordinal)
    }
}

/// Split a usage string into classified tokens. Never fails: every word
/// falls into exactly one [`TokenKind`].
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, word)| classify_word(word, position))
        .collect()
}

/// Collapse whitespace runs to a single space and trim both ends.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn classify_word(word: &str, position: usize) -> Token {
    if let Some(inner) = strip_delimiters(word, '<', '>') {
        let kind = if inner.ends_with('?') {
            TokenKind::OptionalParameter
        } else {
            TokenKind::DefinedParameter
        };
        Token::new(inner, kind, position)
    } else if let Some(inner) = strip_delimiters(word, '(', ')') {
        Token::new(inner, TokenKind::DefinedOptions, position)
    } else {
        Token::new(word, TokenKind::Literal, position)
    }
}

fn strip_delimiters(word: &str, open: char, close: char) -> Option<&str> {
    word.strip_prefix(open)?.strip_suffix(close)
}
