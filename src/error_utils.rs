//! Shared error utilities

use miette::{NamedSource, SourceSpan};
use std::path::Path;

/// Create a NamedSource with proper formatting for error display
pub fn create_named_source(path: &Path, content: String) -> NamedSource<String> {
    NamedSource::new(path.display().to_string(), content)
}

/// Byte offset of a 1-based line/column position, clamped to the source length
pub fn line_column_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();

    (line_start + column.saturating_sub(1)).min(source.len())
}

/// Single-character span at a 1-based line/column position
pub fn span_at(source: &str, line: usize, column: usize) -> SourceSpan {
    let offset = line_column_to_offset(source, line, column);
    let len = usize::from(offset < source.len());
    SourceSpan::new(offset.into(), len)
}
