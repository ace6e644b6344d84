//! Compiles a usage string into an anchored line matcher.
//!
//! Each token becomes one regex fragment: literals are escaped, placeholders
//! are replaced by their parameter's capture expression. Fragments are
//! joined by a single space, except that optional placeholders absorb their
//! own leading whitespace (`\s?`) and a `remaining_string` takes its separator
//! into an optional group so that it may be empty. A word that follows only
//! empty-capable placeholders may also start the line. Input lines are
//! whitespace-normalized before matching, so the single-space separator
//! covers any run of whitespace in the input.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use super::PatternError;
use super::parameter::{Datatype, Parameter};
use super::pattern_lexer::{Token, TokenKind, normalize, tokenize};
use super::pattern_match::Match;

/// A compiled usage string. Immutable once built; cheap to share between
/// threads by reference.
#[derive(Debug, Clone)]
pub struct Pattern {
    text: String,
    tokens: Vec<Token>,
    parameters: Vec<Parameter>,
    expression: Regex,
}

/// Compile `text` into a [`Pattern`].
pub fn compile(text: &str) -> Result<Pattern, PatternError> {
    Pattern::new(text)
}

impl Pattern {
    pub fn new(text: impl Into<String>) -> Result<Self, PatternError> {
        let text = text.into();
        let tokens = tokenize(&text);
        if tokens.is_empty() {
            return Err(PatternError::EmptyPattern);
        }

        let (parameters, source) = compile_tokens(&tokens)?;
        let expression = Regex::new(&source)?;
        debug_assert_eq!(expression.captures_len(), parameters.len() + 1);

        tracing::debug!(pattern = %text, expression = %source, "compiled pattern");

        Ok(Self {
            text,
            tokens,
            parameters,
            expression,
        })
    }

    /// The usage string exactly as given.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Declared parameters in order of first appearance. Parameter `i`
    /// corresponds to capture group `i + 1` of [`Pattern::expression`].
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn expression(&self) -> &Regex {
        &self.expression
    }

    /// Index of the first declared parameter that answers `query`.
    pub fn position(&self, query: &Parameter) -> Option<usize> {
        self.parameters.iter().position(|p| p.accepts(query))
    }

    pub fn has(&self, query: &Parameter) -> bool {
        self.position(query).is_some()
    }

    /// Whether the whole of `line` (after whitespace normalization)
    /// satisfies this pattern.
    pub fn matches(&self, line: &str) -> bool {
        self.expression.is_match(&normalize(line))
    }

    /// Match `line` and capture parameter values. `None` means the line
    /// does not satisfy the pattern.
    pub fn match_line(&self, line: &str) -> Option<Match<'_>> {
        let line = normalize(line);
        let spans = {
            let captures = self.expression.captures(&line)?;
            captures
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.range()))
                .collect()
        };
        Some(Match::new(self, line, spans))
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Derive the parameter list and the anchored expression source in one
/// pass, so that parameter order and capture-group order cannot diverge.
fn compile_tokens(tokens: &[Token]) -> Result<(Vec<Parameter>, String), PatternError> {
    let mut parameters: Vec<Parameter> = Vec::new();
    let mut source = String::from("^");
    // True while every token so far may match nothing at all.
    let mut prefix_may_be_empty = true;

    for (index, token) in tokens.iter().enumerate() {
        if token.kind() == TokenKind::Literal {
            check_balanced(token)?;
            if index > 0 {
                source.push_str(separator(prefix_may_be_empty));
            }
            source.push_str(&regex::escape(token.word()));
            prefix_may_be_empty = false;
            continue;
        }

        let parameter = token.parameter(parameters.len())?;
        if parameters.iter().any(|p| p.name() == parameter.name()) {
            return Err(PatternError::DuplicateParameter(parameter.name().to_string()));
        }

        let expression = parameter.expression();
        match parameter.datatype() {
            _ if index == 0 || parameter.is_optional() => source.push_str(&expression),
            // The separator goes away together with an empty remainder.
            Datatype::RemainingString => {
                source.push_str("(?:");
                source.push_str(separator(prefix_may_be_empty));
                source.push_str(&expression);
                source.push_str(")?");
            }
            _ => {
                source.push_str(separator(prefix_may_be_empty));
                source.push_str(&expression);
            }
        }
        prefix_may_be_empty &=
            parameter.is_optional() || parameter.datatype() == Datatype::RemainingString;
        parameters.push(parameter);
    }

    source.push('$');
    Ok((parameters, source))
}

/// Separator in front of a word that must be present. After a prefix that
/// matched nothing the word starts the line instead.
fn separator(prefix_may_be_empty: bool) -> &'static str {
    if prefix_may_be_empty { "(?:^| )" } else { " " }
}

/// Literal words must not open or close a placeholder on their own.
fn check_balanced(token: &Token) -> Result<(), PatternError> {
    let word = token.word();
    if word.starts_with(['<', '(']) || word.ends_with(['>', ')']) {
        return Err(PatternError::UnbalancedDelimiter(word.to_string()));
    }
    Ok(())
}
