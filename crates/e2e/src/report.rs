//! Reporting of suite results on standard output

use clap::ValueEnum;

use crate::error::E2eResult;
use crate::runner::{Outcome, Phase, SuiteResult};

const HEAVY_RULE: &str = "======================================================================";
const LIGHT_RULE: &str = "----------------------------------------------------------------------";

/// Report format
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum ReportFormat {
    /// Progress line, failure details and totals
    #[default]
    Text,
    /// Full results as JSON
    Json,
}

/// Render results in the requested format.
pub fn render(results: &SuiteResult, format: ReportFormat) -> E2eResult<String> {
    match format {
        ReportFormat::Text => Ok(render_text(results)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(results)?),
    }
}

/// Plain-text report: one character per test, then a section per problem.
pub fn render_text(results: &SuiteResult) -> String {
    let mut out = String::new();

    for result in &results.results {
        out.push(match result.outcome {
            Outcome::Passed => '.',
            Outcome::Failed => 'F',
            Outcome::Errored => 'E',
        });
    }
    out.push('\n');

    for result in results.results.iter().filter(|r| !r.success()) {
        let label = match result.outcome {
            Outcome::Failed => "FAIL",
            _ => "ERROR",
        };
        out.push_str(HEAVY_RULE);
        out.push('\n');
        match result.phase {
            Some(phase) if phase != Phase::Test => {
                out.push_str(&format!("{}: {} ({})\n", label, result.name, phase_name(phase)));
            }
            _ => out.push_str(&format!("{}: {}\n", label, result.name)),
        }
        out.push_str(LIGHT_RULE);
        out.push('\n');
        out.push_str(result.error.as_deref().unwrap_or("unknown error"));
        out.push('\n');
        out.push('\n');
    }

    out.push_str(LIGHT_RULE);
    out.push('\n');
    out.push_str(&format!(
        "Ran {} test{} in {:.3}s\n",
        results.total,
        if results.total == 1 { "" } else { "s" },
        results.duration_ms as f64 / 1000.0
    ));
    out.push('\n');

    if results.was_successful() {
        out.push_str("OK\n");
    } else {
        let mut counts = Vec::new();
        if results.failed > 0 {
            counts.push(format!("failures={}", results.failed));
        }
        if results.errors > 0 {
            counts.push(format!("errors={}", results.errors));
        }
        out.push_str(&format!("FAILED ({})\n", counts.join(", ")));
    }

    out
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::SetUp => "set-up",
        Phase::Test => "test",
        Phase::TearDown => "tear-down",
    }
}
