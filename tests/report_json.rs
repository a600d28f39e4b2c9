//! JSON round-trip tests for saved reports.

use abstract_analyzer::{
    AnalysisReport, JsonReport, KeywordScore, ReadabilityReport, SaveConfig, SaveFormat,
    save_report,
};
use serial_test::serial;

fn sample_report() -> AnalysisReport {
    AnalysisReport {
        discipline: "Computer Science".to_string(),
        name: "JANE DOE".to_string(),
        research_topic: "A STUDY OF GRAPH ALGORITHMS AT SCALE".to_string(),
        readability: ReadabilityReport {
            word_count: 132,
            character_count: 911,
            score: 38.42,
            feedback: "The abstract effectively outlines the key points of the research."
                .to_string(),
        },
        keywords: vec![
            KeywordScore {
                term: "algorithm".to_string(),
                weight: 0.53,
            },
            KeywordScore {
                term: "graph".to_string(),
                weight: 0.31,
            },
            KeywordScore {
                term: "scale".to_string(),
                weight: 0.12,
            },
        ],
    }
}

/// Runs `save_report` with the working directory's output folder swapped for
/// a temp one by saving from inside the temp directory.
fn save_in_tempdir(config: &SaveConfig, report: &AnalysisReport) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir(dir.path().join("Abstract_Analyzer_files")).expect("output dir");

    let original = std::env::current_dir().expect("cwd");
    std::env::set_current_dir(dir.path()).expect("enter tempdir");
    let result = save_report(config, report);
    std::env::set_current_dir(original).expect("restore cwd");

    let path = dir.path().join(result.expect("save should succeed"));
    let contents = std::fs::read_to_string(path).expect("read saved file");
    (dir, contents)
}

#[test]
#[serial]
fn test_json_round_trip_has_exactly_the_documented_keys() {
    let report = sample_report();
    let config = SaveConfig {
        file_name: "roundtrip".to_string(),
        format: SaveFormat::Json,
    };
    let (_dir, contents) = save_in_tempdir(&config, &report);

    let value: serde_json::Value = serde_json::from_str(&contents).expect("valid JSON");
    let object = value.as_object().expect("top-level object");
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "name",
            "research topic",
            "total words",
            "total characters",
            "readability scores",
            "feedback",
            "keywords"
        ]
    );

    let parsed: JsonReport = serde_json::from_str(&contents).expect("deserialize");
    assert_eq!(parsed, JsonReport::from(&report));
    assert_eq!(
        parsed.keywords,
        vec!["algorithm:0.53%", "graph:0.31%", "scale:0.12%"]
    );
}

#[test]
#[serial]
fn test_json_output_is_four_space_indented() {
    let config = SaveConfig {
        file_name: "indent".to_string(),
        format: SaveFormat::Json,
    };
    let (_dir, contents) = save_in_tempdir(&config, &sample_report());
    assert!(contents.contains("\n    \"name\""));
}

#[test]
#[serial]
fn test_text_output_is_the_rendered_report_verbatim() {
    let report = sample_report();
    let config = SaveConfig {
        file_name: "verbatim".to_string(),
        format: SaveFormat::Text,
    };
    let (_dir, contents) = save_in_tempdir(&config, &report);
    assert_eq!(contents, report.render());
}

#[test]
#[serial]
fn test_missing_output_directory_is_a_caught_error_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    // No Abstract_Analyzer_files subdirectory created on purpose.
    let original = std::env::current_dir().expect("cwd");
    std::env::set_current_dir(dir.path()).expect("enter tempdir");
    let result = save_report(
        &SaveConfig {
            file_name: "nowhere".to_string(),
            format: SaveFormat::Text,
        },
        &sample_report(),
    );
    std::env::set_current_dir(original).expect("restore cwd");

    let err = result.expect_err("save must fail without the output directory");
    assert!(err.to_string().contains("Abstract_Analyzer_files"));
}
