//! Configuration for the mentor engines.
//! TOML-based, 4-layer resolution: overrides > env > project > defaults.

pub mod analysis_config;
pub mod mentor_config;
pub mod progress_config;
pub mod recommend_config;

pub use analysis_config::AnalysisConfig;
pub use mentor_config::{ConfigOverrides, MentorConfig};
pub use progress_config::ProgressConfig;
pub use recommend_config::RecommendConfig;
