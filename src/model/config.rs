use serde::Deserialize;
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ids: IdConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub messages: Messages,
    #[serde(default)]
    pub log: LogConfig,
}

/// How new task ids are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Milliseconds since the epoch, bumped when the clock stands still
    Clock,
    /// 1, 2, 3, ...
    Sequential,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdConfig {
    /// Unset: the TUI uses clock ids and scripts use sequential ids
    #[serde(default)]
    pub strategy: Option<IdStrategy>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

/// User-facing texts for the duplicate notice and the remove prompt
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub duplicate_title: String,
    pub duplicate_body: String,
    pub remove_title: String,
    pub remove_body: String,
}

impl Default for Messages {
    fn default() -> Self {
        Messages {
            duplicate_title: "Task already exists".into(),
            duplicate_body: "You can't add a task with the same name".into(),
            remove_title: "Remove item".into(),
            remove_body: "Are you sure you want to remove this item?".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log directory. Logging stays off when unset.
    #[serde(default)]
    pub dir: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
            dir: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".into()
}
