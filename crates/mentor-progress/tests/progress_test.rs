//! Integration tests for progress trend analytics.

use chrono::{DateTime, Duration, Utc};
use mentor_analysis::analyze;
use mentor_core::config::ProgressConfig;
use mentor_core::constants::{METRIC_CODE_QUALITY, METRIC_LEARNING_SESSION};
use mentor_core::types::ConceptSet;
use mentor_core::ConceptId;
use mentor_progress::advice::{KEEP_PRACTICING, REVIEW_FUNDAMENTALS};
use mentor_progress::{
    concept_mastery, concept_metric, concept_of, samples_from_analysis, ConceptTrend,
    InMemoryMetricHistoryStore, MasteryLevel, MetricHistoryStore, MetricKind, MilestoneKey,
    ProgressAnalyzer, ProgressMetricSample, SessionFrequency, SessionFrequencyCategory,
    Trajectory, TrendDirection, VelocityCategory,
};

fn t0() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn quality_series(scores: &[f64]) -> Vec<ProgressMetricSample> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            ProgressMetricSample::new(
                "learner",
                METRIC_CODE_QUALITY,
                v,
                MetricKind::Score,
                t0() + Duration::days(i as i64),
            )
            .unwrap()
        })
        .collect()
}

/// Small wobble around a level is stable.
#[test]
fn test_flat_scores_are_stable() {
    let summary = ProgressAnalyzer::default().trend(&quality_series(&[40.0, 42.0, 41.0]));
    assert_eq!(summary.trend, TrendDirection::Stable);
    assert!(summary.slope.unwrap().abs() <= 0.1);
    assert!((summary.current_average.unwrap() - 41.0).abs() < 1e-9);
}

/// A steady climb is improving.
#[test]
fn test_rising_scores_are_improving() {
    let summary = ProgressAnalyzer::default().trend(&quality_series(&[40.0, 55.0, 70.0]));
    assert_eq!(summary.trend, TrendDirection::Improving);
    assert!(summary.slope.unwrap() > 0.1);
}

/// Fewer than two samples report insufficient data with no numbers.
#[test]
fn test_single_sample_is_insufficient() {
    let analyzer = ProgressAnalyzer::default();
    for series in [quality_series(&[]), quality_series(&[73.0])] {
        let summary = analyzer.trend(&series);
        assert_eq!(summary.trend, TrendDirection::InsufficientData);
        assert!(summary.slope.is_none());
        assert!(summary.current_average.is_none());

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["trend"], "insufficient_data");
        assert!(json.get("slope").is_none());
    }
}

/// A configured threshold changes classification.
#[test]
fn test_threshold_from_config() {
    let config = ProgressConfig {
        trend_slope_threshold: Some(0.5),
        ..ProgressConfig::default()
    };
    let summary = ProgressAnalyzer::new(&config).trend(&quality_series(&[40.0, 55.0, 70.0]));
    assert_eq!(summary.trend, TrendDirection::Stable);
}

/// Velocity, consistency and milestones over a longer climb.
#[test]
fn test_velocity_and_consistency_over_history() {
    let analyzer = ProgressAnalyzer::default();
    let scores: Vec<f64> = (0..12).map(|i| 40.0 + 5.0 * i as f64).collect();
    let series = quality_series(&scores);

    let velocity = analyzer.velocity(&series);
    assert_eq!(velocity.category, VelocityCategory::Fast);
    assert_eq!(velocity.window_size, 5);

    let consistency = analyzer.consistency(&series);
    assert!(consistency > 0.0 && consistency < 100.0);
    assert_eq!(analyzer.consistency(&series[..1]), 0.0);

    let short = analyzer.velocity(&series[..4]);
    assert_eq!(short.category, VelocityCategory::InsufficientData);
}

/// A report assembled from analyzed submissions stored over three weeks.
#[test]
fn test_report_from_store() {
    let store = InMemoryMetricHistoryStore::new();
    let sources = [
        "def f(items):\n    for a in items:\n        for b in items:\n            print(a, b)\n",
        "def f(items):\n    seen = set()\n    for a in items:\n        seen.add(a)\n    return seen\n",
        "def f(items):\n    return sorted(items)\n",
    ];
    for day in 0..21 {
        let analysis = analyze(sources[day % sources.len()], "python");
        let at = t0() + Duration::days(day as i64);
        store
            .extend(samples_from_analysis("learner", &analysis, at).unwrap())
            .unwrap();
    }

    let report = ProgressAnalyzer::default().report(&store, "learner");
    assert_eq!(report.learner_id, "learner");
    assert_eq!(report.submission_count, 21);
    assert!(!report.quality_trend.is_insufficient());
    assert_ne!(report.trajectory, Trajectory::InsufficientData);
    assert!(report
        .milestones
        .iter()
        .any(|m| m.key == MilestoneKey::SubmissionCount(10)));
    match report.session_frequency {
        SessionFrequency::Measured {
            sessions_per_week,
            category,
            ..
        } => {
            // 21 sessions over 20 days.
            assert!((sessions_per_week - 21.0 / (20.0 / 7.0)).abs() < 1e-9);
            assert_eq!(category, SessionFrequencyCategory::High);
        }
        other => panic!("expected measured frequency, got {other:?}"),
    }
}

/// An unknown learner yields an all-insufficient report.
#[test]
fn test_report_for_unknown_learner() {
    let store = InMemoryMetricHistoryStore::new();
    let report = ProgressAnalyzer::default().report(&store, "nobody");
    assert_eq!(report.submission_count, 0);
    assert_eq!(report.trajectory, Trajectory::InsufficientData);
    assert_eq!(report.session_frequency, SessionFrequency::InsufficientData);
    assert!(report.milestones.is_empty());
    assert!(report.mastery.concepts.is_empty());
    assert_eq!(report.mastery.overall_mastery, 0.0);
    assert_eq!(report.advice, vec![KEEP_PRACTICING]);
}

/// Standard samples carry the analysis scores and one session; each detected concept
/// adds a quality sample under its own metric.
#[test]
fn test_samples_from_analysis() {
    let analysis = analyze(
        "def f(items):\n    seen = set()\n    for a in items:\n        seen.add(a)\n    return seen\n",
        "python",
    );
    let samples = samples_from_analysis("learner", &analysis, t0()).unwrap();
    assert_eq!(samples.len(), 3 + analysis.detected_concepts().len());
    assert_eq!(samples[0].value(), analysis.quality_score);
    assert_eq!(samples[2].metric_name(), METRIC_LEARNING_SESSION);
    assert_eq!(samples[2].metric_kind(), MetricKind::Count);

    let concepts: ConceptSet = samples[3..]
        .iter()
        .map(|s| {
            assert_eq!(s.value(), analysis.quality_score);
            assert_eq!(s.metric_kind(), MetricKind::Score);
            ConceptId::from(concept_of(s.metric_name()).unwrap())
        })
        .collect();
    assert_eq!(concepts, analysis.detected_concepts());
    assert!(samples_from_analysis("", &analysis, t0()).is_err());
}

fn concept_sample(concept: &str, score: f64, day: i64) -> ProgressMetricSample {
    ProgressMetricSample::new(
        "learner",
        concept_metric(concept),
        score,
        MetricKind::Score,
        t0() + Duration::days(day),
    )
    .unwrap()
}

/// Levels, trends and the overall score from per-concept history in the store.
#[test]
fn test_concept_mastery_from_store() {
    let store = InMemoryMetricHistoryStore::new();
    let mut samples = Vec::new();
    for (day, score) in [70.0, 75.0, 90.0, 90.0, 90.0].into_iter().enumerate() {
        samples.push(concept_sample("array", score, day as i64));
    }
    for (day, score) in [65.0, 62.0].into_iter().enumerate() {
        samples.push(concept_sample("hash_table", score, day as i64));
    }
    samples.push(concept_sample("recursion", 20.0, 3));
    samples.extend(quality_series(&[70.0, 75.0, 90.0, 90.0, 90.0]));
    store.extend(samples).unwrap();

    let mastery = concept_mastery(&store.learner_history("learner"));
    let ids: Vec<&str> = mastery.concepts.iter().map(|c| c.concept.as_str()).collect();
    assert_eq!(ids, vec!["array", "hash_table", "recursion"]);

    let array = mastery.get("array").unwrap();
    assert_eq!(array.level, MasteryLevel::Mastered);
    assert_eq!(array.attempts, 5);
    assert_eq!(array.average_score, 83.0);
    assert_eq!(array.trend, ConceptTrend::Improving);

    let hash_table = mastery.get("hash_table").unwrap();
    assert_eq!(hash_table.level, MasteryLevel::Proficient);
    assert_eq!(hash_table.average_score, 63.5);
    assert_eq!(hash_table.trend, ConceptTrend::NewConcept);

    let recursion = mastery.get("recursion").unwrap();
    assert_eq!(recursion.level, MasteryLevel::Struggling);
    assert_eq!(recursion.trend, ConceptTrend::InsufficientData);

    assert_eq!(mastery.mastered_concepts, ConceptSet::from(["array".into()]));
    assert_eq!(mastery.struggling_concepts, ConceptSet::from(["recursion".into()]));
    // (1.0 + 0.7 + 0.1) / 3 * 100
    assert_eq!(mastery.overall_mastery, 60.0);
}

/// The report carries mastery and advice computed from the same snapshot.
#[test]
fn test_report_exposes_mastery_and_advice() {
    let store = InMemoryMetricHistoryStore::new();
    let scores = [30.0, 35.0, 40.0, 45.0, 40.0, 35.0];
    let mut samples = quality_series(&scores);
    for (day, &score) in scores.iter().enumerate() {
        samples.push(concept_sample("linked_list", score, day as i64));
    }
    store.extend(samples).unwrap();

    let report = ProgressAnalyzer::default().report(&store, "learner");
    let linked_list = report.mastery.get("linked_list").unwrap();
    assert_eq!(linked_list.attempts, 6);
    assert_eq!(linked_list.level, MasteryLevel::Struggling);
    assert_eq!(report.mastery.overall_mastery, 10.0);
    assert_eq!(report.advice.first().map(String::as_str), Some(REVIEW_FUNDAMENTALS));
    assert_eq!(report.advice.len(), 2);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["mastery"]["concepts"][0]["level"], "struggling");
    assert_eq!(json["mastery"]["concepts"][0]["trend"], "stable");
}

/// The store trait is object safe and shareable across threads.
#[test]
fn test_store_is_shareable() {
    let store: std::sync::Arc<dyn MetricHistoryStore> =
        std::sync::Arc::new(InMemoryMetricHistoryStore::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let store = std::sync::Arc::clone(&store);
            std::thread::spawn(move || {
                let learner = format!("learner-{i}");
                for day in 0..5 {
                    let sample = ProgressMetricSample::new(
                        learner.as_str(),
                        METRIC_CODE_QUALITY,
                        50.0,
                        MetricKind::Score,
                        t0() + Duration::days(day),
                    )
                    .unwrap();
                    store.append(sample).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(store.learners().len(), 4);
    assert_eq!(store.history("learner-2", METRIC_CODE_QUALITY).len(), 5);
}
