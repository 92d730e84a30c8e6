use crate::constants::DIRECTIVE_KEYWORDS;
use crate::error::{RenameError, Result};
use crate::operations::RenameMapping;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Quote,
    Angle,
}

impl Delimiter {
    fn from_opening(byte: u8) -> Option<Self> {
        match byte {
            b'"' => Some(Delimiter::Quote),
            b'<' => Some(Delimiter::Angle),
            _ => None,
        }
    }

    fn closing(self) -> char {
        match self {
            Delimiter::Quote => '"',
            Delimiter::Angle => '>',
        }
    }
}

/// One `#include "dir/name.hpp"` style directive found in a file.
///
/// `basename_start..basename_end` is the byte range of `basename` in the text
/// the reference was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveReference<'a> {
    pub delimiter: Delimiter,
    pub prefix: &'a str,
    pub basename: &'a str,
    pub basename_start: usize,
    pub basename_end: usize,
}

/// Finds every include/import directive in `content`.
///
/// A directive is `#`, optional spaces or tabs, a keyword, optional spaces or
/// tabs, then a quoted or angle-bracketed path closed on the same line.
pub fn scan_directives(content: &str) -> Vec<DirectiveReference<'_>> {
    let mut references = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = content[cursor..].find('#') {
        let hash = cursor + offset;
        match parse_directive(content, hash + 1) {
            Some(reference) => {
                // skip past the closing delimiter
                cursor = reference.basename_end + 1;
                references.push(reference);
            }
            None => cursor = hash + 1,
        }
    }

    references
}

fn parse_directive(content: &str, start: usize) -> Option<DirectiveReference<'_>> {
    let keyword_start = skip_inline_whitespace(content, start);
    let keyword = DIRECTIVE_KEYWORDS
        .iter()
        .find(|keyword| content[keyword_start..].starts_with(**keyword))?;

    let open = skip_inline_whitespace(content, keyword_start + keyword.len());
    let delimiter = Delimiter::from_opening(*content.as_bytes().get(open)?)?;

    let path_start = open + 1;
    let line = content[path_start..]
        .split('\n')
        .next()
        .unwrap_or_default();
    let path_len = line.find(delimiter.closing())?;
    let path = &line[..path_len];

    let split = path
        .rfind(|c: char| c == '/' || c == '\\')
        .map_or(0, |separator| separator + 1);

    Some(DirectiveReference {
        delimiter,
        prefix: &path[..split],
        basename: &path[split..],
        basename_start: path_start + split,
        basename_end: path_start + path_len,
    })
}

fn skip_inline_whitespace(content: &str, mut position: usize) -> usize {
    let bytes = content.as_bytes();
    while matches!(bytes.get(position), Some(b' ' | b'\t')) {
        position += 1;
    }
    position
}

/// Result of rewriting one text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenText {
    pub content: String,
    pub replacements: usize,
}

impl RewrittenText {
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Replaces the basename of every directive whose basename is a mapping key.
/// Prefixes and delimiters are kept byte for byte.
pub fn rewrite_references(content: &str, mapping: &RenameMapping) -> RewrittenText {
    let mut output = String::with_capacity(content.len());
    let mut copied_up_to = 0;
    let mut replacements = 0;

    for reference in scan_directives(content) {
        let Some(new_basename) = mapping.new_basename(reference.basename) else {
            continue;
        };
        tracing::trace!(
            prefix = reference.prefix,
            delimiter = ?reference.delimiter,
            "{} -> {new_basename}",
            reference.basename
        );
        output.push_str(&content[copied_up_to..reference.basename_start]);
        output.push_str(new_basename);
        copied_up_to = reference.basename_end;
        replacements += 1;
    }
    output.push_str(&content[copied_up_to..]);

    RewrittenText {
        content: output,
        replacements,
    }
}

/// Rewrites the directives in `path`. The file is written only when its
/// content changed; with `dry_run` it is never written.
///
/// Returns the number of directives that were (or would be) rewritten.
pub fn rewrite_file(path: &Path, mapping: &RenameMapping, dry_run: bool) -> Result<usize> {
    let content = fs::read_to_string(path).map_err(|source| RenameError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let rewritten = rewrite_references(&content, mapping);
    if !rewritten.changed() || rewritten.content == content {
        return Ok(0);
    }

    if !dry_run {
        fs::write(path, &rewritten.content).map_err(|source| RenameError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }

    tracing::debug!(
        replacements = rewritten.replacements,
        dry_run,
        "rewrote {}",
        path.display()
    );
    Ok(rewritten.replacements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::helpers::*;
    use tempfile::TempDir;

    fn hpp_mapping() -> RenameMapping {
        RenameMapping::from_basenames([
            ("foo.hpp", "foo.h"),
            ("bar.hpp", "bar.h"),
            ("a.h", "a.hh"),
        ])
    }

    #[test]
    fn test_scan_directives_extracts_prefix_and_basename() {
        let content = "#include \"Engine/Vec2.hpp\"\n#include <CS200/RGBA.h>\n";
        let references = scan_directives(content);

        assert_eq!(references.len(), 2);
        assert_eq!(references[0].delimiter, Delimiter::Quote);
        assert_eq!(references[0].prefix, "Engine/");
        assert_eq!(references[0].basename, "Vec2.hpp");
        assert_eq!(
            &content[references[0].basename_start..references[0].basename_end],
            "Vec2.hpp"
        );
        assert_eq!(references[1].delimiter, Delimiter::Angle);
        assert_eq!(references[1].prefix, "CS200/");
        assert_eq!(references[1].basename, "RGBA.h");
    }

    #[test]
    fn test_scan_directives_accepts_spacing_variants_and_import() {
        let content = "#  include\t\"a.h\"\n#include<b.h>\n#import \"c.h\"\n   #include \"d.h\"";
        let basenames: Vec<&str> = scan_directives(content)
            .into_iter()
            .map(|r| r.basename)
            .collect();
        assert_eq!(basenames, vec!["a.h", "b.h", "c.h", "d.h"]);
    }

    #[test]
    fn test_scan_directives_ignores_unterminated_and_non_directives() {
        let content = "#define X \"foo.hpp\"\n#include \"foo.hpp\n\"\n#includes \"bar.hpp\"\n#pragma once\n";
        assert!(scan_directives(content).is_empty());
    }

    #[test]
    fn test_scan_directives_handles_backslash_prefix() {
        let content = "#include \"..\\\\Engine\\\\Vec2.hpp\"";
        let references = scan_directives(content);
        assert_eq!(references.len(), 1);
        assert_eq!(references[0].prefix, "..\\\\Engine\\\\");
        assert_eq!(references[0].basename, "Vec2.hpp");
    }

    #[test]
    fn test_rewrite_references_preserves_prefix_and_delimiters() {
        let content = "#include \"../Engine/foo.hpp\"\n#include <lib/bar.hpp>\nint x = 0;\n";
        let rewritten = rewrite_references(content, &hpp_mapping());

        assert_eq!(
            rewritten.content,
            "#include \"../Engine/foo.h\"\n#include <lib/bar.h>\nint x = 0;\n"
        );
        assert_eq!(rewritten.replacements, 2);
    }

    #[test]
    fn test_rewrite_references_requires_exact_basename() {
        let content = "#include \"ba.h\"\n#include \"dir/ba.h\"\n#include \"a.h\"\n#include <x/a.h>\n#include \"a.hpp\"\n";
        let rewritten = rewrite_references(content, &hpp_mapping());

        assert_eq!(
            rewritten.content,
            "#include \"ba.h\"\n#include \"dir/ba.h\"\n#include \"a.hh\"\n#include <x/a.hh>\n#include \"a.hpp\"\n"
        );
        assert_eq!(rewritten.replacements, 2);
    }

    #[test]
    fn test_rewrite_references_leaves_plain_text_alone() {
        let content = "// see foo.hpp for details\nconst char* name = \"foo.hpp\";\n";
        let rewritten = rewrite_references(content, &hpp_mapping());
        assert_eq!(rewritten.content, content);
        assert!(!rewritten.changed());
    }

    #[test]
    fn test_rewrite_references_is_idempotent() {
        let content = "#include \"foo.hpp\"\n#include <bar.hpp>\n#include \"other.hpp\"\n";
        let mapping = hpp_mapping();

        let once = rewrite_references(content, &mapping);
        let twice = rewrite_references(&once.content, &mapping);

        assert_eq!(twice.content, once.content);
        assert_eq!(twice.replacements, 0);
    }

    #[test]
    fn test_rewrite_references_round_trip_restores_original() {
        let content = "#pragma once\n#include \"Engine/foo.hpp\"\r\n#  include <bar.hpp> // trailing\n#include \"unrelated.hpp\"\n";
        let mapping = RenameMapping::from_basenames([("foo.hpp", "foo.h"), ("bar.hpp", "bar.h")]);

        let forward = rewrite_references(content, &mapping);
        assert_ne!(forward.content, content);

        let back = rewrite_references(&forward.content, &mapping.inverse());
        assert_eq!(back.content, content);
    }

    #[test]
    fn test_rewrite_references_handles_multibyte_text() {
        let content = "// 헤더 파일 ✅\n#include \"foo.hpp\" // 설명\n";
        let rewritten = rewrite_references(content, &hpp_mapping());
        assert_eq!(rewritten.content, "// 헤더 파일 ✅\n#include \"foo.h\" // 설명\n");
    }

    #[test]
    fn test_rewrite_file_writes_only_when_changed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_file(root, "main.cpp", "#include \"foo.hpp\"\n");
        create_file(root, "other.cpp", "#include \"baz.hpp\"\n");

        let mapping = hpp_mapping();
        assert_eq!(rewrite_file(&root.join("main.cpp"), &mapping, false).unwrap(), 1);
        assert_eq!(rewrite_file(&root.join("other.cpp"), &mapping, false).unwrap(), 0);

        assert_file_content(root, "main.cpp", "#include \"foo.h\"\n");
        assert_file_content(root, "other.cpp", "#include \"baz.hpp\"\n");
    }

    #[test]
    fn test_rewrite_file_dry_run_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_file(root, "main.cpp", "#include <bar.hpp>\n");

        assert_eq!(rewrite_file(&root.join("main.cpp"), &hpp_mapping(), true).unwrap(), 1);
        assert_file_content(root, "main.cpp", "#include <bar.hpp>\n");
    }

    #[test]
    fn test_rewrite_file_reports_read_failure_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.cpp");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        match rewrite_file(&path, &hpp_mapping(), false) {
            Err(RenameError::FileRead { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected FileRead, got {other:?}"),
        }
    }
}
