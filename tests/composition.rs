// Composition tests: verifying that the pieces chain together correctly.
//
// These tests exercise the data flow between modules:
//   JSON export -> TopicModelExport -> TopTermExtractor -> JSON / labels
// without touching the filesystem except for a temp export file.

use std::path::PathBuf;

use topterms::config::Config;
use topterms::output::summaries_to_json;
use topterms::output::terminal::render_bar;
use topterms::topics::export::TopicModelExport;
use topterms::topics::extract::TopTermExtractor;
use topterms::topics::summary::TopicSummary;
use topterms::topics::traits::TermWeightSource;

const SPORTS_POLITICS_EXPORT: &str = r#"{
    "vocabulary": ["goal", "match", "league", "vote", "senate", "ballot"],
    "weights": [
        [4.0, 3.0, 2.0, 0.5, 0.0, 0.5],
        [0.0, 0.5, 0.0, 3.0, 2.5, 4.0]
    ]
}"#;

// ============================================================
// Chain: export -> extractor -> summaries
// ============================================================

#[test]
fn export_to_labels() {
    let export = TopicModelExport::from_json_str(SPORTS_POLITICS_EXPORT).unwrap();
    let extractor = TopTermExtractor {
        top_n: 3,
        ..TopTermExtractor::default()
    };
    let summaries = extractor.extract_from(&export).unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].label(), "goal / match / league");
    assert_eq!(summaries[1].label(), "ballot / vote / senate");

    // 4.0 out of a row total of 10.0
    assert!((summaries[0].max_weight() - 0.4).abs() < 1e-12);
}

#[test]
fn config_drives_extraction() {
    let config = Config::from_lookup(|key| match key {
        "TOPTERMS_TOP_N" => Some("2".to_string()),
        "TOPTERMS_NORMALIZE" => Some("false".to_string()),
        _ => None,
    })
    .unwrap();

    let export = TopicModelExport::from_json_str(SPORTS_POLITICS_EXPORT).unwrap();
    let summaries = config.extractor().extract_from(&export).unwrap();

    assert_eq!(summaries[1].pairs(), vec![("ballot", 4.0), ("vote", 3.0)]);
}

#[test]
fn summaries_round_trip_through_json() {
    let export = TopicModelExport::from_json_str(SPORTS_POLITICS_EXPORT).unwrap();
    // Default top_n (10) exceeds the six-term vocabulary
    let err = TopTermExtractor::default().extract_from(&export).unwrap_err();
    assert!(err.to_string().contains("between 1 and 6"));

    let summaries = TopTermExtractor {
        top_n: 2,
        ..TopTermExtractor::default()
    }
    .extract_from(&export)
    .unwrap();

    let json = summaries_to_json(&summaries).unwrap();
    let parsed: Vec<TopicSummary> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, summaries);
}

#[test]
fn bars_scale_to_strongest_term() {
    let export = TopicModelExport::from_json_str(SPORTS_POLITICS_EXPORT).unwrap();
    let summaries = TopTermExtractor {
        top_n: 1,
        normalize: false,
        ..TopTermExtractor::default()
    }
    .extract_from(&export)
    .unwrap();

    let scale = summaries.iter().map(TopicSummary::max_weight).fold(0.0, f64::max);
    assert_eq!(render_bar(summaries[0].max_weight(), scale, 8), "[========]");
}

// ============================================================
// Export file loading
// ============================================================

fn temp_export(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("topterms-{}-{name}.json", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn load_from_file() {
    let path = temp_export("load", SPORTS_POLITICS_EXPORT);
    let export = TopicModelExport::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(export.num_topics(), 2);
    assert_eq!(export.vocabulary().len(), 6);
}

#[test]
fn load_missing_file_mentions_path() {
    let path = std::env::temp_dir().join("topterms-does-not-exist.json");
    let err = TopicModelExport::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("topterms-does-not-exist.json"));
}

#[test]
fn load_rejects_mismatched_vocabulary() {
    let path = temp_export(
        "mismatch",
        r#"{"vocabulary": ["a", "b"], "weights": [[1.0, 2.0, 3.0]]}"#,
    );
    let err = TopicModelExport::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(format!("{err:#}").contains("2 terms but the weight matrix has 3 columns"));
}
