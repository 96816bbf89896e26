//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PickError, PickResult};

use super::types::{OutputFormat, PickerConfig};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl PickerConfig {
    /// Load config from a TOML file, ignoring unknown keys
    pub fn load(path: &Path) -> PickResult<Self> {
        load_with_warnings(path).map(|(config, _)| config)
    }

    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PickResult<(PickerConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: PickerConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PickError::ConfigFile {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Apply environment variable overrides (TREEPICK_* prefix)
pub fn with_env_overrides(config: PickerConfig) -> PickResult<PickerConfig> {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Same as [`with_env_overrides`], reading variables through `get_env`
pub fn with_env_overrides_from(
    mut config: PickerConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> PickResult<PickerConfig> {
    // TREEPICK_INDICATOR
    if let Some(indicator) = get_env("TREEPICK_INDICATOR") {
        if !indicator.is_empty() {
            config.indicator = indicator;
        }
    }

    // TREEPICK_OUTPUT_FORMAT
    if let Some(format) = get_env("TREEPICK_OUTPUT_FORMAT") {
        config.output_format = format.parse::<OutputFormat>()?;
    }

    // TREEPICK_MULTISELECT
    if let Some(val) = get_env("TREEPICK_MULTISELECT") {
        config.multiselect = val.to_lowercase() != "false" && val != "0";
    }

    Ok(config)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "title",
        "root_name",
        "multiselect",
        "singleselect_output_include_children",
        "output_leaves_only",
        "output_format",
        "indicator",
        "indicator_parentheses",
        "indicator_parentheses_design",
        "default_index",
        "min_selection_count",
        "foreground",
        "background",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
