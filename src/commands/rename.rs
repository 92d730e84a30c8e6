use super::plan::{discover_and_print, print_report};
use crate::models::RenameConfig;
use crate::operations;
use crate::utils::prompt_utils::prompt_confirm_rename;
use anyhow::Result;

pub fn run_rename(config: &RenameConfig, assume_yes: bool) -> Result<()> {
    let Some(plan) = discover_and_print(config, false)? else {
        return Ok(());
    };

    println!();
    if !assume_yes && !prompt_confirm_rename(plan.mapping.len(), &config.root)? {
        println!("Rename cancelled.");
        return Ok(());
    }

    let report = operations::execute(&plan, false);
    print_report(&report, config);

    println!();
    if report.has_failures() {
        println!("⚠️  Finished with errors. Review the failures above.");
    } else {
        println!("✅ Done!");
    }
    println!("💡 Verify the changes and update build files (e.g. CMakeLists.txt) that list renamed headers.");

    Ok(())
}
