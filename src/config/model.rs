use serde::Deserialize;

use crate::grammar::{CommandSet, Pattern};

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    pub commands: Option<Vec<CommandEntry>>,
}

/// One registered command: its usage string plus help metadata.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CommandEntry {
    pub usage: String,
    pub description: Option<String>,
    /// A sample line that must satisfy `usage`.
    pub example: Option<String>,
}

impl Config {
    /// Validate the config structure.
    ///
    /// Collects all validation errors and returns them at once so that users
    /// can fix every issue in a single pass.
    ///
    /// Checks:
    /// - Each usage compiles
    /// - Each example matches its own usage
    pub fn validate(&self) -> Result<(), crate::config::ConfigError> {
        let commands = match &self.commands {
            Some(commands) => commands,
            None => return Ok(()),
        };

        let mut errors = Vec::new();

        for (i, entry) in commands.iter().enumerate() {
            let pattern = match Pattern::new(entry.usage.as_str()) {
                Ok(pattern) => pattern,
                Err(e) => {
                    errors.push(format!("commands[{i}]: usage '{}': {e}", entry.usage));
                    continue;
                }
            };

            if let Some(example) = &entry.example
                && !pattern.matches(example)
            {
                errors.push(format!(
                    "commands[{i}]: example '{example}' does not match usage '{}'",
                    entry.usage
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(crate::config::ConfigError::Validation(errors))
        }
    }

    /// Build the dispatch table, in file order.
    pub fn command_set(&self) -> Result<CommandSet<CommandEntry>, crate::config::ConfigError> {
        let mut set = CommandSet::new();
        for entry in self.commands.iter().flatten() {
            set.register(&entry.usage, entry.clone())?;
        }
        Ok(set)
    }

    /// Merge two configs. Commands from `other` are appended after `self`'s,
    /// so earlier (global) entries win ties at dispatch time.
    pub fn merge(self, other: Config) -> Config {
        Config {
            commands: Self::merge_vecs(self.commands, other.commands),
        }
    }

    fn merge_vecs<T>(base: Option<Vec<T>>, over: Option<Vec<T>>) -> Option<Vec<T>> {
        match (base, over) {
            (Some(mut b), Some(o)) => {
                b.extend(o);
                Some(b)
            }
            (b, o) => b.or(o),
        }
    }
}

/// Parse a YAML string into a `Config`.
pub fn parse_config(yaml: &str) -> Result<Config, crate::config::ConfigError> {
    let config: Config = serde_saphyr::from_str(yaml)?;
    Ok(config)
}
