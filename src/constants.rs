pub const DEFAULT_SOURCE_DIR: &str = "source";
pub const DEFAULT_OLD_EXTENSION: &str = ".hpp";
pub const DEFAULT_NEW_EXTENSION: &str = ".h";
pub const CONFIG_FILENAME: &str = ".header-rename.yaml";

/// Suffixes of files that may contain include directives. The configured old
/// and new extensions are always added on top of these.
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &[
    ".cpp", ".h", ".hpp", ".c", ".cc", ".cxx", ".hh", ".hxx", ".inl", ".ipp",
];

pub const DIRECTIVE_KEYWORDS: &[&str] = &["include", "import"];
