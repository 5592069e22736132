use crate::error::{GitToolsError, Result};
use crate::tags::LINT_WINDOW;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the repository and the user config directory
pub const CONFIG_FILE_NAME: &str = "gittools.toml";

/// Represents the complete configuration for git-tools.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub lint: LintConfig,

    #[serde(default)]
    pub hooks: HooksConfig,
}

/// Tag naming behaviour
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct TagsConfig {
    /// Use a `v` prefix for the first tag when no semver tag exists yet
    #[serde(default)]
    pub initial_v_prefix: bool,
}

fn default_lint_window() -> usize {
    LINT_WINDOW
}

/// Lint behaviour
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LintConfig {
    #[serde(default = "default_lint_window")]
    pub window: usize,
}

impl LintConfig {
    /// Number of tags to inspect, clamped to `1..=LINT_WINDOW`
    pub fn effective_window(&self) -> usize {
        self.window.clamp(1, LINT_WINDOW)
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        LintConfig {
            window: default_lint_window(),
        }
    }
}

/// Per-hook settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct HooksConfig {
    #[serde(default)]
    pub commit_msg: CommitMsgConfig,
}

fn default_commit_msg_template() -> String {
    "{branch} {message}".to_string()
}

/// Rewrite rule for the commit-msg hook.
///
/// `{branch}` and `{message}` are substituted.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CommitMsgConfig {
    #[serde(default = "default_commit_msg_template")]
    pub template: String,
}

impl Default for CommitMsgConfig {
    fn default() -> Self {
        CommitMsgConfig {
            template: default_commit_msg_template(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gittools.toml` in the repository working directory
/// 3. `gittools.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `repo_dir` - Working directory of the repository, if known
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, repo_dir: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(repo_dir),
    };

    let Some(path) = path else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        GitToolsError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    parse_config(&config_str)
        .map_err(|e| GitToolsError::config(format!("{}: {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(text: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(text)
}

fn find_config_file(repo_dir: Option<&Path>) -> Option<PathBuf> {
    let local = repo_dir.map(|dir| dir.join(CONFIG_FILE_NAME));
    let user = dirs::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME));

    local.into_iter().chain(user).find(|path| path.is_file())
}
