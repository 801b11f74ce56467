//! Report artifact lock tests: byte stability, digest binding, JSON
//! surface, and filesystem round-trip.

use sha2::{Digest, Sha256};

use drover_harness::report::{
    report_bytes, report_digest, write_report, SolutionReportV1, REPORT_SCHEMA_VERSION,
};
use drover_harness::runner::{run_sheep_pen, ScenarioRun};
use lock_tests::{pen_state, stock_settings};

fn basic_run() -> ScenarioRun {
    let settings = stock_settings(9, 15);
    let start = pen_state(0, 0, &settings);
    let goal = pen_state(0, 12, &settings);
    run_sheep_pen("basic", settings, start, goal).unwrap()
}

#[test]
fn digest_binds_to_independent_sha256() {
    let bytes = report_bytes(&SolutionReportV1::from_run(&basic_run())).unwrap();
    let expected = format!("sha256:{}", hex::encode(Sha256::digest(&bytes)));
    assert_eq!(report_digest(&bytes), expected);
}

#[test]
fn artifact_json_surface_is_locked() {
    let bytes = report_bytes(&SolutionReportV1::from_run(&basic_run())).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(parsed["schema_version"], REPORT_SCHEMA_VERSION);
    assert_eq!(parsed["world_id"], "sheep_pen");
    assert_eq!(parsed["scenario"], "basic");
    assert_eq!(parsed["solved"], true);
    assert_eq!(parsed["total_cost"], 2430);
    assert_eq!(parsed["step_count"], 7);
    assert_eq!(parsed["start_state"], "Pen A: 0 | Pen B: 0");
    assert_eq!(parsed["steps"].as_array().unwrap().len(), 7);
}

#[test]
fn artifact_bytes_and_digest_stable_across_runs() {
    let first_bytes = report_bytes(&SolutionReportV1::from_run(&basic_run())).unwrap();
    let first_digest = report_digest(&first_bytes);

    for _ in 1..10 {
        let other_bytes = report_bytes(&SolutionReportV1::from_run(&basic_run())).unwrap();
        assert_eq!(first_bytes, other_bytes, "artifact bytes differ across runs");
        assert_eq!(report_digest(&other_bytes), first_digest);
    }
}

#[test]
fn written_artifact_matches_in_memory_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let report = SolutionReportV1::from_run(&basic_run());

    let path = write_report(dir.path(), &report).unwrap();
    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(on_disk, report_bytes(&report).unwrap());
    assert_eq!(
        report_digest(&on_disk),
        report_digest(&report_bytes(&report).unwrap())
    );
}
