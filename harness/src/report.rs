//! Solution reports: text rendering, JSON artifact bytes, and digests.
//!
//! The JSON artifact is the authoritative record of a run; the text
//! rendering is a derived human-readable view. Artifact bytes are
//! deterministic (fixed struct field order, integer costs only), so a
//! `"sha256:<hex>"` digest over them identifies a run result exactly.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::runner::ScenarioRun;

/// Schema identifier embedded in every report artifact.
pub const REPORT_SCHEMA_VERSION: &str = "solution_report.v1";

/// One rendered step of a solution path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportStepV1 {
    /// Rendered action, e.g. `"Moving sheep from the field to Pen B. Cost: 900"`.
    pub action: String,
    /// Rendered state reached by the action.
    pub state: String,
    /// The action's cost.
    pub cost: i64,
}

/// Serializable record of one scenario run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionReportV1 {
    /// Always [`REPORT_SCHEMA_VERSION`].
    pub schema_version: String,
    /// World identifier.
    pub world_id: String,
    /// Scenario label.
    pub scenario: String,
    /// Whether a path was found.
    pub solved: bool,
    /// Total path cost; `None` when unsolved.
    pub total_cost: Option<i64>,
    /// Number of steps in the path; zero when unsolved or start == goal.
    pub step_count: u64,
    /// Accepted frontier pops during the run.
    pub nodes_visited: u64,
    /// Rendered start state.
    pub start_state: String,
    /// Rendered steps, first action from the start state first.
    pub steps: Vec<ReportStepV1>,
}

impl SolutionReportV1 {
    /// Build a report from a completed run.
    #[must_use]
    pub fn from_run(run: &ScenarioRun) -> Self {
        use drover_search::contract::SearchAction;

        let steps: Vec<ReportStepV1> = run.solution.as_ref().map_or_else(Vec::new, |path| {
            path.steps
                .iter()
                .map(|step| ReportStepV1 {
                    action: step.action.to_string(),
                    state: step.state.to_string(),
                    cost: step.action.cost(),
                })
                .collect()
        });

        Self {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            world_id: run.world_id.to_string(),
            scenario: run.scenario.clone(),
            solved: run.solution.is_some(),
            total_cost: run.solution.as_ref().map(|path| path.total_cost),
            step_count: steps.len() as u64,
            nodes_visited: run.stats.nodes_visited,
            start_state: run.start.to_string(),
            steps,
        }
    }
}

/// Serialize a report to its artifact bytes.
///
/// Field order is fixed by the struct definition and all numbers are
/// integers, so the bytes are identical across runs and platforms.
///
/// # Errors
///
/// Propagates `serde_json` serialization failures.
pub fn report_bytes(report: &SolutionReportV1) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(report)
}

/// Digest artifact bytes as `"sha256:<hex>"`.
#[must_use]
pub fn report_digest(bytes: &[u8]) -> String {
    format!("sha256:{}", hex::encode(Sha256::digest(bytes)))
}

/// Render the human-readable view of a report.
#[must_use]
pub fn render_text(report: &SolutionReportV1) -> String {
    let mut out = String::new();
    out.push_str(&format!("--- {} ---\n", report.scenario));
    match report.total_cost {
        None => out.push_str("No solution found.\n"),
        Some(total_cost) => {
            out.push_str(&format!(
                "Nodes explored: {} | Total Cost: {}\n",
                report.nodes_visited, total_cost
            ));
            out.push_str(&format!("{}\n", report.start_state));
            for step in &report.steps {
                out.push_str(&format!("{}\n{}\n", step.action, step.state));
            }
        }
    }
    out
}

/// Write the JSON artifact into `dir` as `<world_id>-<scenario>.json`.
///
/// # Errors
///
/// Propagates filesystem errors; serialization failures surface as
/// [`io::ErrorKind::InvalidData`].
pub fn write_report(dir: &Path, report: &SolutionReportV1) -> io::Result<PathBuf> {
    let bytes = report_bytes(report)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    let path = dir.join(format!("{}-{}.json", report.world_id, report.scenario));
    std::fs::write(&path, bytes)?;
    Ok(path)
}
