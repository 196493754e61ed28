use crate::manifest::PROJECT_ROOT;
use crate::verify::{verify, DriftKind};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Run the verify command rooted at `parent`.
///
/// With `json`, prints the full report as pretty JSON. Otherwise prints
/// one line per divergent path plus a summary. Either way, drift makes
/// the command return an error so a nonzero exit can gate CI.
pub fn verify_command(parent: &Path, json: bool) -> Result<()> {
    let report = verify(parent)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return match report.drift_error() {
            None => Ok(()),
            Some(err) => Err(err.into()),
        };
    }

    println!("🔍 Verifying {} scaffold...", PROJECT_ROOT);

    for drift in &report.drift {
        let label = match drift.kind {
            DriftKind::Missing => "missing",
            DriftKind::Modified => "modified",
        };
        println!("  {} {} ({})", "✗".red(), drift.path, label);
    }

    for path in &report.extra {
        println!("  {} {} (not in manifest)", "+".yellow(), path);
    }

    match report.drift_error() {
        None => {
            let summary = format!("✅ Scaffold intact ({} entries verified)", report.matched);
            println!("{}", summary.green());
            Ok(())
        }
        Some(err) => {
            let summary = format!(
                "❌ Scaffold drifted: {} missing, {} modified",
                report.missing(),
                report.modified()
            );
            println!("{}", summary.red());
            Err(err.into())
        }
    }
}
