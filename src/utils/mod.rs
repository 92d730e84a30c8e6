pub mod file_utils;
pub mod prompt_utils;
