//! Typed placeholders and the datatype → capture-expression table.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use super::PatternError;
use super::pattern_lexer::{Token, TokenKind};

/// Value type a placeholder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Datatype {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "string?")]
    OptionalString,
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "integer?")]
    OptionalInteger,
    #[serde(rename = "remaining_string")]
    RemainingString,
}

impl Datatype {
    pub const ALL: [Datatype; 5] = [
        Datatype::String,
        Datatype::OptionalString,
        Datatype::Integer,
        Datatype::OptionalInteger,
        Datatype::RemainingString,
    ];

    /// Spelling used after the `:` in a placeholder.
    pub fn as_str(self) -> &'static str {
        match self {
            Datatype::String => "string",
            Datatype::OptionalString => "string?",
            Datatype::Integer => "integer",
            Datatype::OptionalInteger => "integer?",
            Datatype::RemainingString => "remaining_string",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == name)
    }

    /// Regex fragment substituted for a placeholder of this type. Each
    /// fragment contains exactly one capturing group.
    pub fn capture_expression(self) -> &'static str {
        match self {
            Datatype::String => r"([^\s]+)",
            Datatype::OptionalString => r"(\s?[^\s]+)?",
            Datatype::Integer => r"([0-9]+)",
            Datatype::OptionalInteger => r"(\s?[0-9]+)?",
            Datatype::RemainingString => r"([\s\S]*)",
        }
    }

    pub fn is_optional(self) -> bool {
        matches!(self, Datatype::OptionalString | Datatype::OptionalInteger)
    }

    /// Whether a lookup for `query` may be answered by a parameter declared
    /// with `self`. The query spelling only has to occur inside the declared
    /// one, so "string" is answered by "string?" and "remaining_string".
    pub fn accepts(self, query: Datatype) -> bool {
        self.as_str().contains(query.as_str())
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, typed placeholder of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    datatype: Datatype,
    /// Alternatives of a `(a|b)` token; `None` for angle-bracket placeholders.
    options: Option<Vec<String>>,
}

impl Parameter {
    /// Build a lookup parameter, as used by the `Match` accessors.
    pub fn new(name: impl Into<String>, datatype: Datatype) -> Self {
        Self {
            name: name.into(),
            datatype,
            options: None,
        }
    }

    /// Derive the parameter declared by a placeholder token.
    ///
    /// `ordinal` is the token's index among parameter tokens; options
    /// tokens are named `option<ordinal>`.
    pub fn parse(token: &Token, ordinal: usize) -> Result<Self, PatternError> {
        match token.kind() {
            TokenKind::Literal => Err(PatternError::NotAParameter(token.word().to_string())),
            TokenKind::DefinedParameter | TokenKind::OptionalParameter => parse_placeholder(token),
            TokenKind::DefinedOptions => parse_options(token, ordinal),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn datatype(&self) -> Datatype {
        self.datatype
    }

    pub fn options(&self) -> Option<&[String]> {
        self.options.as_deref()
    }

    pub fn is_optional(&self) -> bool {
        self.datatype.is_optional()
    }

    /// Regex fragment capturing this parameter's value.
    pub fn expression(&self) -> Cow<'static, str> {
        match &self.options {
            Some(alternatives) => {
                let escaped: Vec<String> = alternatives.iter().map(|a| regex::escape(a)).collect();
                Cow::Owned(format!("({})", escaped.join("|")))
            }
            None => Cow::Borrowed(self.datatype.capture_expression()),
        }
    }

    /// Lookup equality: same name, and the declared datatype accepts the
    /// queried one (see [`Datatype::accepts`]).
    pub fn accepts(&self, query: &Parameter) -> bool {
        self.name == query.name && self.datatype.accepts(query.datatype)
    }
}

fn parse_placeholder(token: &Token) -> Result<Parameter, PatternError> {
    let inner = token.word();
    let (name, datatype) = match inner.split_once(':') {
        None => match inner.strip_suffix('?') {
            Some(name) => (name, Datatype::OptionalString),
            None => (inner, Datatype::String),
        },
        Some((name, "?")) => (name, Datatype::OptionalString),
        Some((name, spelled)) => {
            let datatype =
                Datatype::from_name(spelled).ok_or_else(|| PatternError::UnrecognizedType {
                    name: name.to_string(),
                    datatype: spelled.to_string(),
                })?;
            (name, datatype)
        }
    };
    validate_name(name, token)?;
    Ok(Parameter::new(name, datatype))
}

fn parse_options(token: &Token, ordinal: usize) -> Result<Parameter, PatternError> {
    let alternatives: Vec<String> = token.word().split('|').map(String::from).collect();
    if alternatives.iter().any(|a| a.is_empty()) {
        return Err(PatternError::EmptyOption(token.source()));
    }

    let numeric = alternatives
        .iter()
        .all(|a| a.chars().all(|c| c.is_ascii_digit()));
    let datatype = if numeric {
        Datatype::Integer
    } else {
        Datatype::String
    };

    Ok(Parameter {
        name: format!("option{ordinal}"),
        datatype,
        options: Some(alternatives),
    })
}

fn validate_name(name: &str, token: &Token) -> Result<(), PatternError> {
    if name.is_empty() {
        return Err(PatternError::EmptyParameterName(token.source()));
    }
    if name
        .chars()
        .any(|c| matches!(c, '<' | '>' | '(' | ')' | ':' | '?' | '|'))
    {
        return Err(PatternError::InvalidParameterName(name.to_string()));
    }
    Ok(())
}
