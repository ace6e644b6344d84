use std::path::{Path, PathBuf};

use super::{Config, ConfigError, parse_config};

const PROJECT_CATALOG_NAMES: [&str; 2] = ["cmdpat.yml", "cmdpat.yaml"];

/// Source of the command catalog a dispatcher runs against.
pub trait ConfigLoader {
    /// Catalog in effect for `cwd`: the user-wide entries followed by the
    /// entries of the project catalog found in `cwd`, validated as a whole.
    fn load(&self, cwd: &Path) -> Result<Config, ConfigError>;
}

/// Reads `$HOME/.config/cmdpat/cmdpat.yml` and `./cmdpat.yml` (or
/// `./cmdpat.yaml`), either of which may be absent.
pub struct DefaultConfigLoader {
    user_catalog: Option<PathBuf>,
}

impl Default for DefaultConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultConfigLoader {
    pub fn new() -> Self {
        let user_catalog = std::env::var("HOME")
            .ok()
            .filter(|h| !h.is_empty())
            .map(|h| {
                PathBuf::from(h)
                    .join(".config")
                    .join("cmdpat")
                    .join("cmdpat.yml")
            });
        Self { user_catalog }
    }

    /// Use `path` as the user-wide catalog instead of the one under `$HOME`.
    /// A missing file contributes no commands.
    pub fn with_user_catalog(path: PathBuf) -> Self {
        Self {
            user_catalog: Some(path),
        }
    }

    /// Project catalog in `cwd`. `cmdpat.yml` wins over `cmdpat.yaml`.
    fn project_catalog(cwd: &Path) -> Option<PathBuf> {
        PROJECT_CATALOG_NAMES
            .iter()
            .map(|name| cwd.join(name))
            .find(|path| path.exists())
    }

    fn read_catalog(path: &Path) -> Result<Config, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        parse_config(&yaml)
    }
}

impl ConfigLoader for DefaultConfigLoader {
    fn load(&self, cwd: &Path) -> Result<Config, ConfigError> {
        let user = self
            .user_catalog
            .as_ref()
            .filter(|p| p.exists())
            .map(|p| Self::read_catalog(p))
            .transpose()?;

        let project = Self::project_catalog(cwd)
            .map(|p| Self::read_catalog(&p))
            .transpose()?;

        let config = user.unwrap_or_default().merge(project.unwrap_or_default());

        config.validate()?;
        tracing::debug!(
            commands = config.commands.as_ref().map_or(0, Vec::len),
            "loaded command catalog"
        );
        Ok(config)
    }
}

/// Load one catalog file, as named by `cmdpat dispatch --config`. The
/// user-wide and project catalogs are not consulted.
pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
    let config = DefaultConfigLoader::read_catalog(path)?;
    config.validate()?;
    Ok(config)
}
