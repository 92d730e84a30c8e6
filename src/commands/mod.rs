mod plan;
mod rename;

pub use plan::run_plan;
pub use rename::run_rename;
