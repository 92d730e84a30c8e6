use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "header-rename",
    about = format!("Header Rename Tool - {}", super::SUMMARY),
    version
)]
pub struct Cli {
    #[arg(long, short, global = true, help = "Print debug logs to stderr")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rename headers and rewrite the include directives that reference them
    Rename(RenameArgs),
    /// Show what `rename` would change without touching any file
    Plan(PlanArgs),
}

#[derive(Args, Default, Clone)]
pub struct TargetArgs {
    #[arg(
        value_name = "ROOT",
        help = "Directory to process (default: ./source)"
    )]
    pub root: Option<PathBuf>,
    #[arg(long, value_name = "EXT", help = "Extension to rename from (default: .hpp)")]
    pub from: Option<String>,
    #[arg(long, value_name = "EXT", help = "Extension to rename to (default: .h)")]
    pub to: Option<String>,
    #[arg(
        long,
        value_delimiter = ',',
        value_name = "EXT,...",
        help = "Comma-separated extensions of files scanned for include directives"
    )]
    pub extensions: Option<Vec<String>>,
    #[arg(long, help = "Skip files matched by .gitignore and .ignore files")]
    pub respect_gitignore: bool,
    #[arg(
        long,
        conflicts_with = "respect_gitignore",
        help = "Visit every file, even when the config file sets respect_gitignore"
    )]
    pub no_respect_gitignore: bool,
}

#[derive(Args, Default, Clone)]
#[command(after_help = "Examples:
  header-rename rename                          # Rename ./source/**/*.hpp to .h
  header-rename rename include --from hxx --to hh
  header-rename rename --yes                    # Skip the confirmation prompt

Configuration Precedence (highest to lowest):
  1. CLI options (ROOT, --from, --to, --extensions, --[no-]respect-gitignore)
  2. Config file: .header-rename.yaml
  3. Default values (./source, .hpp -> .h, common C/C++ extensions)

💡 Tip: Run 'header-rename plan' first to preview the changes
💡 Build files (e.g. CMakeLists.txt) are not updated")]
pub struct RenameArgs {
    #[command(flatten)]
    pub target: TargetArgs,
    #[arg(long, short, help = "Skip confirmation prompt and assume yes")]
    pub yes: bool,
}

#[derive(Args, Default, Clone)]
#[command(after_help = "Examples:
  header-rename plan                            # Preview ./source/**/*.hpp -> .h
  header-rename plan include --from hxx --to hh")]
pub struct PlanArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}
