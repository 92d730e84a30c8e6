pub mod discovery;
pub mod mapping;
pub mod pipeline;
pub mod renamer;
pub mod report;
pub mod rewrite;

pub use mapping::{PlannedMove, RenameMapping};
pub use pipeline::{execute, prepare, RenamePlan};
pub use report::RunReport;
