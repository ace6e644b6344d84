//! Ordered registry of compiled usage strings, as consulted by a dispatcher.

use super::PatternError;
use super::pattern::Pattern;
use super::pattern_match::Match;

/// Patterns paired with caller-defined payloads (handlers, descriptions…),
/// tried in registration order.
#[derive(Debug, Clone)]
pub struct CommandSet<T> {
    commands: Vec<(Pattern, T)>,
}

/// The winning entry of [`CommandSet::dispatch`].
#[derive(Debug)]
pub struct Dispatch<'a, T> {
    definition: &'a T,
    matched: Match<'a>,
}

impl<'a, T> Dispatch<'a, T> {
    pub fn definition(&self) -> &'a T {
        self.definition
    }

    pub fn matched(&self) -> &Match<'a> {
        &self.matched
    }

    pub fn pattern(&self) -> &'a Pattern {
        self.matched.pattern()
    }
}

impl<T> Default for CommandSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CommandSet<T> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Compile `usage` and append it, returning the compiled pattern. A
    /// usage that fails to compile is rejected and the set is left unchanged.
    pub fn register(&mut self, usage: &str, definition: T) -> Result<&Pattern, PatternError> {
        let pattern = Pattern::new(usage)?;
        tracing::debug!(usage, "registered command");
        let index = self.commands.len();
        self.commands.push((pattern, definition));
        Ok(&self.commands[index].0)
    }

    /// First registered pattern that matches `line`, if any.
    pub fn dispatch(&self, line: &str) -> Option<Dispatch<'_, T>> {
        self.commands.iter().find_map(|(pattern, definition)| {
            let matched = pattern.match_line(line);
            tracing::trace!(
                usage = pattern.text(),
                matched = matched.is_some(),
                "dispatch attempt"
            );
            matched.map(|matched| Dispatch {
                definition,
                matched,
            })
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pattern, &T)> + '_ {
        self.commands.iter().map(|(pattern, definition)| (pattern, definition))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
