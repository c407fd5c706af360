//! Console output for the CLI: banners, preview tree and summary.

use std::path::Path;

use crossterm::style::Stylize;
use kebabify_core::Stats;

pub fn scanning(path: &Path) -> String {
    format!(
        "\n{} {}",
        "🔍 Scanning directory:".blue().bold(),
        path.display().to_string().cyan()
    )
}

pub fn dry_run_header() -> String {
    format!(
        "\n{}\n\n{}\n",
        "📋 DRY RUN - No changes will be made".yellow().bold(),
        "Proposed file structure:".green().bold()
    )
}

/// The three summary lines. Identical in dry-run and normal mode.
pub fn summary(stats: &Stats) -> String {
    let rows = [
        ("Files to rename:      ", stats.files_renamed),
        ("Directories to rename:", stats.directories_renamed),
        ("Total operations:     ", stats.total_operations),
    ];

    let mut out = format!("\n{}\n", "📊 Summary:".green().bold());
    for (label, count) in rows {
        out.push_str(&format!("  {} {}\n", label.white(), count.to_string().cyan()));
    }
    out
}

/// Closing line, depending on mode and whether anything was planned.
pub fn outcome(stats: &Stats, dry_run: bool) -> String {
    let line = if dry_run {
        "💡 Run without --dry-run to apply these changes.".blue().bold()
    } else if stats.total_operations > 0 {
        "✅ Rename completed successfully!".green().bold()
    } else {
        "⚠️  No files need renaming.".yellow().bold()
    };
    format!("\n{line}\n")
}

pub fn error(err: &anyhow::Error) -> String {
    format!("\n{} {err:#}", "❌ Error:".red().bold())
}
