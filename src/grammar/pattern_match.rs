use std::ops::Range;

use super::MatchError;
use super::parameter::{Datatype, Parameter};
use super::pattern::Pattern;

/// A line that satisfied a [`Pattern`], with its captured parameter values.
///
/// Captured text is returned trimmed; optional parameters that were not
/// supplied read as an empty string.
#[derive(Debug, Clone)]
pub struct Match<'p> {
    pattern: &'p Pattern,
    line: String,
    /// Byte range of each parameter's capture group in `line`.
    spans: Vec<Option<Range<usize>>>,
}

impl<'p> Match<'p> {
    pub(super) fn new(pattern: &'p Pattern, line: String, spans: Vec<Option<Range<usize>>>) -> Self {
        Self {
            pattern,
            line,
            spans,
        }
    }

    pub fn pattern(&self) -> &'p Pattern {
        self.pattern
    }

    /// The whitespace-normalized input line.
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn string(&self, name: &str) -> Result<&str, MatchError> {
        self.parameter(&Parameter::new(name, Datatype::String))
    }

    pub fn remaining_string(&self, name: &str) -> Result<&str, MatchError> {
        self.parameter(&Parameter::new(name, Datatype::RemainingString))
    }

    /// Value of an integer parameter. An optional integer that was not
    /// supplied is an error, not zero.
    pub fn integer(&self, name: &str) -> Result<i64, MatchError> {
        let value = self.parameter(&Parameter::new(name, Datatype::Integer))?;
        value.parse().map_err(|_| MatchError::InvalidInteger {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    /// Value of the declared parameter that answers `query`.
    pub fn parameter(&self, query: &Parameter) -> Result<&str, MatchError> {
        let position = self
            .pattern
            .position(query)
            .ok_or_else(|| MatchError::UnknownParameter(query.name().to_string()))?;
        Ok(self.captured(position))
    }

    /// Value at a zero-based position of the parameter list, regardless of
    /// name or type.
    pub fn at(&self, position: usize) -> Result<&str, MatchError> {
        if position >= self.spans.len() {
            return Err(MatchError::PositionOutOfRange {
                position,
                count: self.spans.len(),
            });
        }
        Ok(self.captured(position))
    }

    /// `(name, value)` for every declared parameter, in declaration order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pattern
            .parameters()
            .iter()
            .enumerate()
            .map(|(position, p)| (p.name(), self.captured(position)))
    }

    fn captured(&self, position: usize) -> &str {
        self.spans
            .get(position)
            .cloned()
            .flatten()
            .map_or("", |range| self.line[range].trim())
    }
}
