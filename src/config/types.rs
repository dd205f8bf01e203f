// Configuration type definitions

use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPORARY_NORMAL_KEY: char = 'o';
pub const DEFAULT_COUNT_LIMIT: usize = 10_000;

/// Colours for one state of the mode indicator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IndicatorStyle {
    pub background: String,
    pub foreground: String,
}

impl IndicatorStyle {
    pub fn new(background: &str, foreground: &str) -> Self {
        IndicatorStyle {
            background: background.to_string(),
            foreground: foreground.to_string(),
        }
    }
}

fn default_normal_style() -> IndicatorStyle {
    IndicatorStyle::new("#1a73e8", "white")
}

fn default_insert_style() -> IndicatorStyle {
    IndicatorStyle::new("#34a853", "white")
}

fn default_visual_style() -> IndicatorStyle {
    IndicatorStyle::new("#fbbc04", "black")
}

fn default_search_style() -> IndicatorStyle {
    IndicatorStyle::new("#9c27b0", "white")
}

fn default_pending_style() -> IndicatorStyle {
    IndicatorStyle::new("#ea4335", "white")
}

/// Indicator configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndicatorConfig {
    #[serde(default = "default_normal_style")]
    pub normal: IndicatorStyle,
    #[serde(default = "default_insert_style")]
    pub insert: IndicatorStyle,
    /// Shared by Visual and VisualLine
    #[serde(default = "default_visual_style")]
    pub visual: IndicatorStyle,
    #[serde(default = "default_search_style")]
    pub search: IndicatorStyle,
    /// Operator and text-object waits
    #[serde(default = "default_pending_style")]
    pub pending: IndicatorStyle,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        IndicatorConfig {
            normal: default_normal_style(),
            insert: default_insert_style(),
            visual: default_visual_style(),
            search: default_search_style(),
            pending: default_pending_style(),
        }
    }
}

fn default_temporary_normal() -> char {
    DEFAULT_TEMPORARY_NORMAL_KEY
}

fn default_count_limit() -> usize {
    DEFAULT_COUNT_LIMIT
}

/// Key behaviour configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeysConfig {
    /// Pressed with control in Insert mode to run a single Normal-mode command
    #[serde(default = "default_temporary_normal")]
    pub temporary_normal: char,
    /// Repeat counts above this are clamped
    #[serde(default = "default_count_limit")]
    pub count_limit: usize,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            temporary_normal: DEFAULT_TEMPORARY_NORMAL_KEY,
            count_limit: DEFAULT_COUNT_LIMIT,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub indicator: IndicatorConfig,
    #[serde(default)]
    pub keys: KeysConfig,
}
