//! Top-level mentor configuration with layered resolution.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, ProgressConfig, RecommendConfig};
use crate::errors::ConfigError;

/// Project config file name looked up in the root passed to [`MentorConfig::load`].
pub const PROJECT_CONFIG_FILE: &str = "mentor.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (`ConfigOverrides`)
/// 2. Environment variables (`MENTOR_*`)
/// 3. Project config (`mentor.toml` in the given root)
/// 4. Compiled defaults from [`crate::constants`]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MentorConfig {
    pub analysis: AnalysisConfig,
    pub recommend: RecommendConfig,
    pub progress: ProgressConfig,
}

/// Overrides supplied by the embedding service layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub long_function_lines: Option<u32>,
    pub max_conditional_nesting: Option<u32>,
    pub max_recommendations: Option<usize>,
    pub trend_slope_threshold: Option<f64>,
}

impl MentorConfig {
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1: programmatic overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Unknown keys are ignored.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: MentorConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    pub fn validate(config: &MentorConfig) -> Result<(), ConfigError> {
        if config.analysis.long_function_lines == Some(0) {
            return Err(failed("analysis.long_function_lines", "must be at least 1"));
        }
        if config.analysis.max_conditional_nesting == Some(0) {
            return Err(failed("analysis.max_conditional_nesting", "must be at least 1"));
        }
        if config.recommend.max_recommendations == Some(0) {
            return Err(failed("recommend.max_recommendations", "must be at least 1"));
        }
        if config.recommend.default_base_minutes == Some(0) {
            return Err(failed("recommend.default_base_minutes", "must be at least 1"));
        }
        if config.recommend.recent_history_window == Some(0) {
            return Err(failed("recommend.recent_history_window", "must be at least 1"));
        }
        if let Some(threshold) = config.progress.trend_slope_threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(failed(
                    "progress.trend_slope_threshold",
                    "must be a finite, non-negative number",
                ));
            }
        }
        if config.progress.current_average_window == Some(0) {
            return Err(failed("progress.current_average_window", "must be at least 1"));
        }
        if matches!(config.progress.min_trend_samples, Some(n) if n < 2) {
            return Err(failed("progress.min_trend_samples", "must be at least 2"));
        }
        if matches!(config.progress.min_velocity_samples, Some(n) if n < 2) {
            return Err(failed("progress.min_velocity_samples", "must be at least 2"));
        }
        let fast = config.progress.effective_velocity_fast();
        let moderate = config.progress.effective_velocity_moderate();
        let slow = config.progress.effective_velocity_slow();
        if !(fast > moderate && moderate > slow) {
            return Err(failed(
                "progress.velocity_*",
                "thresholds must satisfy fast > moderate > slow",
            ));
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    fn merge_toml_file(config: &mut MentorConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MentorConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// `other` wins wherever it has a `Some` value.
    fn merge(base: &mut MentorConfig, other: &MentorConfig) {
        base.analysis.merge(&other.analysis);
        base.recommend.merge(&other.recommend);
        base.progress.merge(&other.progress);
    }

    /// Pattern: `MENTOR_<SECTION>_<FIELD>`. Unparsable values are ignored.
    fn apply_env_overrides(config: &mut MentorConfig) {
        if let Some(v) = env_value("MENTOR_ANALYSIS_LONG_FUNCTION_LINES") {
            config.analysis.long_function_lines = Some(v);
        }
        if let Some(v) = env_value("MENTOR_ANALYSIS_MAX_CONDITIONAL_NESTING") {
            config.analysis.max_conditional_nesting = Some(v);
        }
        if let Some(v) = env_value("MENTOR_RECOMMEND_MAX_RECOMMENDATIONS") {
            config.recommend.max_recommendations = Some(v);
        }
        if let Some(v) = env_value("MENTOR_RECOMMEND_RECENT_HISTORY_WINDOW") {
            config.recommend.recent_history_window = Some(v);
        }
        if let Some(v) = env_value("MENTOR_PROGRESS_TREND_SLOPE_THRESHOLD") {
            config.progress.trend_slope_threshold = Some(v);
        }
        if let Some(v) = env_value("MENTOR_PROGRESS_MIN_VELOCITY_SAMPLES") {
            config.progress.min_velocity_samples = Some(v);
        }
    }

    fn apply_overrides(config: &mut MentorConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.long_function_lines {
            config.analysis.long_function_lines = Some(v);
        }
        if let Some(v) = overrides.max_conditional_nesting {
            config.analysis.max_conditional_nesting = Some(v);
        }
        if let Some(v) = overrides.max_recommendations {
            config.recommend.max_recommendations = Some(v);
        }
        if let Some(v) = overrides.trend_slope_threshold {
            config.progress.trend_slope_threshold = Some(v);
        }
    }
}

fn env_value<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|val| val.trim().parse().ok())
}

fn failed(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
