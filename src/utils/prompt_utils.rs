use anyhow::Result;
use cliclack::confirm;
use std::path::Path;

/// Asks before touching the tree. Defaults to "no".
pub fn prompt_confirm_rename(file_count: usize, root: &Path) -> Result<bool> {
    let prompt = format!(
        "Rename {file_count} file(s) and rewrite includes under {}?",
        root.display()
    );
    let answer = confirm(prompt).initial_value(false).interact()?;
    Ok(answer)
}
