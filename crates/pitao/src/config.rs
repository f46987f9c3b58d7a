//! Configuration system for pitao.
//!
//! Loads config from:
//! 1. Global: ~/.config/pitao/config.toml
//! 2. Per-project: .pitao/config.toml (overrides global)
//!
//! Example config.toml:
//! ```toml
//! [build]
//! prefix = "gen_"
//! follow_imports = true
//!
//! [aliases]
//! turtle = "tartaruga_compat"
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Build configuration.
///
/// Fields are optional so a project file only overrides what it sets.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BuildConfig {
    /// Prefix for output file names.
    pub prefix: Option<String>,
    /// Whether `build` also translates imported Pitão modules.
    pub follow_imports: Option<bool>,
}

impl BuildConfig {
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or("")
    }

    pub fn follow_imports(&self) -> bool {
        self.follow_imports.unwrap_or(true)
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PitaoConfig {
    pub build: BuildConfig,
    /// Imported module -> replacement module, applied after translation.
    pub aliases: BTreeMap<String, String>,
}

impl PitaoConfig {
    /// Load configuration for a project.
    ///
    /// Loads global config from ~/.config/pitao/config.toml,
    /// then merges with per-project config from .pitao/config.toml.
    pub fn load(root: &Path) -> Self {
        Self::load_with_global(Self::global_config_path().as_deref(), root)
    }

    /// Load with an explicit global config path (`None` skips it).
    pub fn load_with_global(global_path: Option<&Path>, root: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global) = global_path.and_then(Self::load_file) {
            config = config.merge(global);
        }

        let project_path = root.join(".pitao").join("config.toml");
        if let Some(project) = Self::load_file(&project_path) {
            config = config.merge(project);
        }

        config
    }

    /// Get the global config path.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("pitao").join("config.toml"))
    }

    /// Load config from a file path.
    ///
    /// A missing file is silent; a malformed one is logged and ignored.
    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                None
            }
        }
    }

    /// Merge another config into this one. Values set in `other` win;
    /// aliases are combined with `other` overriding per module.
    fn merge(self, other: Self) -> Self {
        let mut aliases = self.aliases;
        aliases.extend(other.aliases);
        Self {
            build: BuildConfig {
                prefix: other.build.prefix.or(self.build.prefix),
                follow_imports: other.build.follow_imports.or(self.build.follow_imports),
            },
            aliases,
        }
    }
}
