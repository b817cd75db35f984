use std::fs;

use quadsolve::core::batch::{self, BatchError};
use quadsolve::RootCount;

const SAMPLE: &str = include_str!("../data/input.txt");

#[test]
fn sample_file_passes() {
    let report = batch::run(SAMPLE).unwrap();
    assert_eq!(report.outcomes.len(), 10);
    assert!(report.all_passed(), "{}", report.render());
    insta::assert_snapshot!(report.render(), @r"
    YES
    YES
    YES
    YES
    YES
    YES
    YES
    YES
    YES
    YES
    ALL TESTS ARE DONE
    ");
}

#[test]
fn mixed_results_report() {
    let src = "\
1 -3 2 2 1 2
# wrong count
1 2 1 2 -1 -1
0 0 0 -1 0 0
# wrong root
0 2 -1 1 0.25 0
";
    let report = batch::run(src).unwrap();
    assert_eq!(report.failed(), 2);
    assert_eq!(report.outcomes[1].case.line, 3);
    assert_eq!(report.outcomes[1].actual.count(), RootCount::OneRoot);
    insta::assert_snapshot!(report.render(), @r"
    YES
    TEST 2 FAILED
    YES
    TEST 4 FAILED
    TESTS FAILED: 2
    ");
}

#[test]
fn printed_solutions_follow_presentation_rules() {
    let report = batch::run(SAMPLE).unwrap();
    let lines: Vec<String> = report.outcomes.iter().map(|o| o.actual.to_string()).collect();
    assert_eq!(lines[0], "one root: -0.25");
    assert_eq!(lines[1], "infinitely many roots");
    assert_eq!(lines[3], "no roots");
    assert_eq!(lines[5], "two roots: -1, -0.5");
    assert_eq!(lines[9], "one root: 0");
}

#[test]
fn malformed_row_names_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "1 -3 2 2 1 2\n1 -3 two 2 1 2\n").unwrap();
    let src = fs::read_to_string(&path).unwrap();
    match batch::run(&src) {
        Err(BatchError::Parse { line, message }) => {
            assert_eq!(line, 2);
            assert_eq!(message, "invalid number `two`");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn empty_file_has_nothing_to_fail() {
    let report = batch::run("# nothing\n\n").unwrap();
    assert!(report.outcomes.is_empty());
    assert_eq!(report.render(), "ALL TESTS ARE DONE\n");
}
