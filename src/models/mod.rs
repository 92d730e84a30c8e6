pub mod file_record;
pub mod rename_config;

pub use file_record::FileRecord;
pub use rename_config::RenameConfig;
