//! Tests for the mentor configuration system.

use std::sync::Mutex;

use mentor_core::config::{ConfigOverrides, MentorConfig};
use mentor_core::constants;
use mentor_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_mentor_env_vars() {
    for key in [
        "MENTOR_ANALYSIS_LONG_FUNCTION_LINES",
        "MENTOR_ANALYSIS_MAX_CONDITIONAL_NESTING",
        "MENTOR_RECOMMEND_MAX_RECOMMENDATIONS",
        "MENTOR_RECOMMEND_RECENT_HISTORY_WINDOW",
        "MENTOR_PROGRESS_TREND_SLOPE_THRESHOLD",
        "MENTOR_PROGRESS_MIN_VELOCITY_SAMPLES",
    ] {
        std::env::remove_var(key);
    }
}

/// Overrides beat env, env beats the project file, the file beats defaults.
#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_mentor_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("mentor.toml"),
        r#"
[analysis]
long_function_lines = 40
max_conditional_nesting = 3

[recommend]
max_recommendations = 7
"#,
    )
    .unwrap();

    std::env::set_var("MENTOR_ANALYSIS_LONG_FUNCTION_LINES", "60");
    std::env::set_var("MENTOR_RECOMMEND_MAX_RECOMMENDATIONS", "4");

    let overrides = ConfigOverrides {
        max_recommendations: Some(3),
        ..Default::default()
    };
    let config = MentorConfig::load(dir.path(), Some(&overrides)).unwrap();

    assert_eq!(config.recommend.effective_max_recommendations(), 3);
    assert_eq!(config.analysis.effective_long_function_lines(), 60);
    assert_eq!(config.analysis.effective_max_conditional_nesting(), 3);
    assert_eq!(
        config.progress.effective_trend_slope_threshold(),
        constants::TREND_SLOPE_THRESHOLD
    );

    clear_mentor_env_vars();
}

/// A root without mentor.toml yields compiled defaults.
#[test]
fn test_load_without_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_mentor_env_vars();

    let dir = tempdir();
    let config = MentorConfig::load(dir.path(), None).unwrap();

    assert_eq!(config, MentorConfig::default());
    assert_eq!(config.analysis.effective_long_function_lines(), 50);
    assert_eq!(config.analysis.effective_max_conditional_nesting(), 4);
    assert_eq!(config.recommend.effective_max_recommendations(), 5);
    assert_eq!(config.recommend.effective_max_resources_per_concept(), 2);
    assert_eq!(config.recommend.effective_default_base_minutes(), 120);
    assert_eq!(config.progress.effective_current_average_window(), 5);
    assert_eq!(config.progress.effective_min_velocity_samples(), 5);
}

/// Invalid TOML surfaces a ParseError naming the file.
#[test]
fn test_invalid_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_mentor_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("mentor.toml"), "[analysis\nlong = ").unwrap();

    let err = MentorConfig::load(dir.path(), None).unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("mentor.toml")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

/// Unparsable env values are ignored rather than failing the load.
#[test]
fn test_unparsable_env_value_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_mentor_env_vars();

    std::env::set_var("MENTOR_PROGRESS_TREND_SLOPE_THRESHOLD", "steep");
    let dir = tempdir();
    let config = MentorConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.progress.trend_slope_threshold, None);

    clear_mentor_env_vars();
}

/// Out-of-range values are rejected by validate().
#[test]
fn test_validation_rejects_bad_values() {
    for toml in [
        "[analysis]\nlong_function_lines = 0",
        "[recommend]\nmax_recommendations = 0",
        "[progress]\ntrend_slope_threshold = -0.5",
        "[progress]\nmin_trend_samples = 1",
        "[progress]\nvelocity_fast = 0.1",
    ] {
        let err = MentorConfig::from_toml(toml).unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationFailed { .. }),
            "{toml} should fail validation, got {err:?}"
        );
    }
}

/// Unknown keys are ignored for forward compatibility.
#[test]
fn test_unknown_keys_ignored() {
    let config = MentorConfig::from_toml(
        r#"
[analysis]
long_function_lines = 80
future_option = true

[telemetry]
enabled = false
"#,
    )
    .unwrap();
    assert_eq!(config.analysis.long_function_lines, Some(80));
}

/// A config survives serialization back to TOML.
#[test]
fn test_to_toml_reloads() {
    let config = MentorConfig::from_toml("[progress]\nvelocity_fast = 3.0").unwrap();
    let text = config.to_toml().unwrap();
    let reloaded = MentorConfig::from_toml(&text).unwrap();
    assert_eq!(reloaded, config);
}
