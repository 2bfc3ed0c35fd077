// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Run options for the reflection loop.
//!
//! Options are built fluently or loaded from YAML/JSON. Missing fields take
//! their defaults and unknown style or mode names degrade instead of failing.
//!
//! # Examples
//!
//! ```
//! use reflekt::options::GenerationOptions;
//! use reflekt::synthesize::Style;
//!
//! let opts = GenerationOptions::from_yaml_str("style: creative\nmax_iterations: 5\n").unwrap();
//! assert_eq!(opts.style, Style::Creative);
//! assert_eq!(opts.max_iterations, 5);
//! ```

use crate::critique::CritiqueMode;
use crate::error::{Error, Result};
use crate::synthesize::Style;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: u32 = 3;

/// Options for a single reflection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Generation style for the seed response.
    pub style: Style,
    /// Upper bound on critique/refine rounds.
    pub max_iterations: u32,
    /// Critique mode used every round.
    pub critique_mode: CritiqueMode,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            style: Style::Balanced,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            critique_mode: CritiqueMode::Constructive,
        }
    }
}

impl GenerationOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generation style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the iteration budget.
    pub fn max_iter(mut self, n: u32) -> Self {
        self.max_iterations = n;
        self
    }

    /// Set the critique mode.
    pub fn mode(mut self, mode: CritiqueMode) -> Self {
        self.critique_mode = mode;
        self
    }

    /// Parse options from a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Parse options from a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load options from a file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?),
            _ => Err(Error::unsupported_format(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.style, Style::Balanced);
        assert_eq!(opts.max_iterations, 3);
        assert_eq!(opts.critique_mode, CritiqueMode::Constructive);
    }

    #[test]
    fn test_fluent_setters() {
        let opts = GenerationOptions::new()
            .style(Style::Systematic)
            .max_iter(0)
            .mode(CritiqueMode::Critical);
        assert_eq!(opts.style, Style::Systematic);
        assert_eq!(opts.max_iterations, 0);
        assert_eq!(opts.critique_mode, CritiqueMode::Critical);
    }

    #[test]
    fn test_json_partial_and_unknown_names() {
        let opts = GenerationOptions::from_json_str(
            r#"{"style": "poetic", "critique_mode": "harsh"}"#,
        )
        .unwrap();
        assert_eq!(opts.style, Style::Balanced);
        assert_eq!(opts.critique_mode, CritiqueMode::Comprehensive);
        assert_eq!(opts.max_iterations, DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_yaml_full() {
        let opts = GenerationOptions::from_yaml_str(
            "style: technical\nmax_iterations: 1\ncritique_mode: critical\n",
        )
        .unwrap();
        assert_eq!(opts, GenerationOptions::new().style(Style::Technical).max_iter(1).mode(CritiqueMode::Critical));
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            GenerationOptions::from_json_str("{"),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            GenerationOptions::from_yaml_str("max_iterations: many"),
            Err(Error::Yaml(_))
        ));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let err = GenerationOptions::load("options.toml").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_load_missing_file_is_io() {
        let err = GenerationOptions::load("/nonexistent/reflekt/options.yaml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = std::env::temp_dir().join(format!("reflekt-options-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("opts.json");
        std::fs::write(&path, r#"{"max_iterations": 7}"#).unwrap();

        let opts = GenerationOptions::load(&path).unwrap();
        assert_eq!(opts.max_iterations, 7);
        assert_eq!(opts.style, Style::Balanced);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
