//! Integration tests for the confirmation flow of the input collector.
//!
//! Sessions are scripted through in-memory buffers; each line answers one
//! prompt in order.

use std::io::Cursor;

use abstract_analyzer::InputCollector;

fn run_session(script: &str) -> (abstract_analyzer::Submission, String) {
    let mut collector = InputCollector::new(Cursor::new(script.to_string()), Vec::new());
    let submission = collector
        .collect_submission()
        .expect("scripted session should complete");
    let console = String::from_utf8(collector.console_mut().clone()).expect("utf8 console output");
    (submission, console)
}

fn valid_abstract() -> String {
    vec!["token"; 100].join(" ")
}

#[test]
fn test_confirm_yes_goes_straight_to_abstract() {
    let script = format!(
        "Jane Doe\nA study of distributed graph algorithms\nyes\n{}\n",
        valid_abstract()
    );
    let (submission, console) = run_session(&script);

    assert_eq!(submission.name, "JANE DOE");
    assert_eq!(
        submission.research_topic,
        "A STUDY OF DISTRIBUTED GRAPH ALGORITHMS"
    );
    assert_eq!(submission.abstract_text, valid_abstract());
    assert!(console.contains("CHECK THE INFORMATION WELL"));
    assert!(console.contains("Information can't be re-edited again"));
}

#[test]
fn test_confirm_no_allows_exactly_one_edit_pass() {
    // After "no", name/topic/abstract are re-collected once with no second
    // confirmation question.
    let script = format!(
        "Jane Doe\nA study of distributed graph algorithms\nno\nMary Ann\nA different topic that is long enough here\n{}\n",
        valid_abstract()
    );
    let (submission, console) = run_session(&script);

    assert_eq!(submission.name, "MARY ANN");
    assert_eq!(
        submission.research_topic,
        "A DIFFERENT TOPIC THAT IS LONG ENOUGH HERE"
    );
    assert!(console.contains("kindly input your right information well"));
    // The confirmation question is asked exactly once.
    assert_eq!(
        console
            .matches("are they correct before going ahead")
            .count(),
        1
    );
}

#[test]
fn test_confirm_garbage_reprompts_question_only() {
    let script = format!(
        "Jane Doe\nA study of distributed graph algorithms\nmaybe\nYES\n{}\n",
        valid_abstract()
    );
    let (submission, console) = run_session(&script);

    // Name and topic were not re-collected; the yes/no question looped.
    assert_eq!(submission.name, "JANE DOE");
    assert!(console.contains("Wrong Input[Kindly input 'yes/no']"));
    assert_eq!(
        console
            .matches("are they correct before going ahead")
            .count(),
        2
    );
}

#[test]
fn test_invalid_fields_retry_before_confirmation() {
    let script = format!(
        "Jane123\nJane Doe\ntoo short\nA study of distributed graph algorithms\nyes\nshort abstract\n{}\n",
        valid_abstract()
    );
    let (submission, console) = run_session(&script);

    assert_eq!(submission.name, "JANE DOE");
    assert!(console.contains("INVALID NAME"));
    assert!(console.contains("INVALID RESEARCH TOPIC"));
    assert!(console.contains("INVALID ABSTRACT FROM RESEARCH"));
}
