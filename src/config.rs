//! Meihua configuration.
//!
//! Loaded from `~/.meihua/config.toml`. The file is optional and every key
//! has a default:
//!
//! ```toml
//! lunar = false          # time casts use the lunar date
//! history-limit = 50     # readings kept in history
//! system-prompt = "..."  # persona for narrated readings
//! ```
//!
//! The narration persona is resolved through a chain:
//!
//! 1. `--system-prompt <text>`, an explicit per-command override
//! 2. the `MEIHUA_SYSTEM_PROMPT` env var
//! 3. `system-prompt` in the config file
//! 4. the built-in persona

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use meihua::prompt::DEFAULT_SYSTEM_PROMPT;
use meihua::storage::DEFAULT_HISTORY_LIMIT;

const SYSTEM_PROMPT_VAR: &str = "MEIHUA_SYSTEM_PROMPT";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Default calendar for time casts.
    pub lunar: bool,

    /// Maximum number of saved readings.
    pub history_limit: u32,

    pub system_prompt: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lunar: false,
            history_limit: DEFAULT_HISTORY_LIMIT,
            system_prompt: None,
        }
    }
}

impl Config {
    /// Load config from `~/.meihua/config.toml`, or defaults if there is none.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;

        if config.history_limit == 0 {
            return Err(format!(
                "history-limit must be at least 1 in {}",
                path.display()
            ));
        }

        Ok(config)
    }

    /// The config file path: `~/.meihua/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".meihua").join("config.toml"))
    }

    /// The narration persona, resolved through the chain above.
    pub fn system_prompt(&self, explicit: Option<&str>) -> String {
        resolve_system_prompt(
            explicit,
            env::var(SYSTEM_PROMPT_VAR).ok().as_deref(),
            self.system_prompt.as_deref(),
        )
    }
}

fn resolve_system_prompt(
    explicit: Option<&str>,
    from_env: Option<&str>,
    configured: Option<&str>,
) -> String {
    [explicit, from_env, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SYSTEM_PROMPT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.history_limit, 50);
    }

    #[test]
    fn keys_are_kebab_case() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "lunar = true\nhistory-limit = 10\nsystem-prompt = \"你是易学老师\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.lunar);
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.system_prompt.as_deref(), Some("你是易学老师"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "lunar = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.lunar);
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn zero_history_limit_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "history-limit = 0\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "history_limit = 3\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.contains("invalid config"));
    }

    #[test]
    fn explicit_prompt_wins() {
        let prompt = resolve_system_prompt(Some("flag"), Some("env"), Some("file"));
        assert_eq!(prompt, "flag");
    }

    #[test]
    fn env_beats_config() {
        let prompt = resolve_system_prompt(None, Some("env"), Some("file"));
        assert_eq!(prompt, "env");
    }

    #[test]
    fn blank_sources_fall_through_to_the_default() {
        let prompt = resolve_system_prompt(Some("  "), Some(""), None);
        assert_eq!(prompt, DEFAULT_SYSTEM_PROMPT);

        let prompt = resolve_system_prompt(None, None, Some("file"));
        assert_eq!(prompt, "file");
    }
}
