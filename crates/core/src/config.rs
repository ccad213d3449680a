//! Board configuration
//!
//! Settings are read from the environment with the same boolean flag
//! conventions used elsewhere: `1/true/yes/on` and `0/false/no/off`.

use serde::{Deserialize, Serialize};

pub const SEED_CATEGORIES_ENV: &str = "TASKBOARD_SEED_CATEGORIES";
pub const STRICT_CATEGORIES_ENV: &str = "TASKBOARD_STRICT_CATEGORIES";

/// Options applied when a board is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardConfig {
    /// Start a fresh board with the default category set
    pub seed_default_categories: bool,
    /// Store `None` instead of an unknown category name on task creation
    pub strict_category_refs: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed_default_categories: true,
            strict_category_refs: false,
        }
    }
}

impl BoardConfig {
    /// Build a config from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            seed_default_categories: parse_flag(
                lookup(SEED_CATEGORIES_ENV).as_deref(),
                defaults.seed_default_categories,
            ),
            strict_category_refs: parse_flag(
                lookup(STRICT_CATEGORIES_ENV).as_deref(),
                defaults.strict_category_refs,
            ),
        }
    }

    /// An empty board with no seeded categories
    pub fn empty() -> Self {
        Self {
            seed_default_categories: false,
            ..Self::default()
        }
    }

    pub fn with_strict_category_refs(mut self, strict: bool) -> Self {
        self.strict_category_refs = strict;
        self
    }
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        None => default,
    }
}
