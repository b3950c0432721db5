//! File input labels.

use std::path::Path;

/// Label text when no file is selected.
pub const PLACEHOLDER: &str = "Choose file";

/// Text for a file input's label given the selected files.
///
/// Desktop file engines report full paths, so only the final component is
/// shown.
pub fn label_text<S: AsRef<str>>(files: &[S]) -> String {
    files
        .first()
        .map(|f| f.as_ref())
        .filter(|f| !f.is_empty())
        .map(|f| {
            Path::new(f)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(f)
                .to_string()
        })
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}
