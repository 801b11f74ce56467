//! Runs the stock sheep-pen scenarios and prints their reports.

use drover_harness::report::{render_text, report_bytes, report_digest, SolutionReportV1};
use drover_harness::runner::stock_scenarios;

fn main() {
    let runs = match stock_scenarios() {
        Ok(runs) => runs,
        Err(err) => {
            eprintln!("scenario construction failed: {err}");
            std::process::exit(1);
        }
    };

    for run in &runs {
        let report = SolutionReportV1::from_run(run);
        print!("{}", render_text(&report));
        match report_bytes(&report) {
            Ok(bytes) => println!("report digest: {}\n", report_digest(&bytes)),
            Err(err) => {
                eprintln!("report serialization failed: {err}");
                std::process::exit(1);
            }
        }
    }
}
