use crate::models::RenameConfig;
use crate::operations::{self, RenamePlan, RunReport};
use crate::utils::file_utils::relative_display;
use anyhow::Result;

pub fn run_plan(config: &RenameConfig) -> Result<()> {
    let Some(plan) = discover_and_print(config, true)? else {
        return Ok(());
    };

    let report = operations::execute(&plan, true);
    print_report(&report, config);
    Ok(())
}

/// Prints the discovered files and the mapping. Returns `None` when there is
/// nothing to rename, after printing the (empty) summary.
pub(super) fn discover_and_print(
    config: &RenameConfig,
    dry_run: bool,
) -> Result<Option<RenamePlan>> {
    println!("📂 Source directory: {}", config.root.display());
    println!(
        "📋 Converting {} -> {}",
        config.old_extension, config.new_extension
    );

    let plan = operations::prepare(config)?;

    if plan.is_empty() {
        println!("No {} files found!", config.old_extension);
        operations::execute(&plan, dry_run).display(&config.root);
        return Ok(None);
    }

    println!(
        "🔍 Found {} {} files",
        plan.discovery.old_files.len(),
        config.old_extension
    );
    println!();
    println!("Files to rename:");
    for planned in plan.mapping.moves() {
        println!(
            "  {} -> {}",
            relative_display(&planned.from, &config.root),
            relative_display(&planned.to, &config.root)
        );
    }

    Ok(Some(plan))
}

pub(super) fn print_report(report: &RunReport, config: &RenameConfig) {
    let (updated, renamed) = if report.dry_run {
        ("Would update", "Would rename")
    } else {
        ("Updated", "Renamed")
    };

    println!();
    println!("✏️  Include statements:");
    for path in &report.rewritten_files {
        println!("  {updated}: {}", relative_display(path, &config.root));
    }
    println!(
        "  {updated} {} file(s) with new includes",
        report.rewritten_files.len()
    );

    println!();
    println!("📦 Files:");
    for planned in &report.renamed_files {
        println!(
            "  {renamed}: {} -> {}",
            relative_display(&planned.from, &config.root),
            relative_display(&planned.to, &config.root)
        );
    }
    println!("  {renamed} {} file(s)", report.renamed_files.len());

    report.display(&config.root);
}
