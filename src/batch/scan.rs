//! Directory scan with an extension allowlist.

use crate::Result;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Extensions accepted for upload, grouped by document family.
pub const SUPPORTED_FILE_TYPES: &[(&str, &[&str])] = &[
    ("word", &["doc", "docx"]),
    ("pdf", &["pdf"]),
    ("excel", &["xls", "xlsx"]),
    ("markdown", &["md"]),
    ("txt", &["txt"]),
];

/// Case-insensitive extension check against [`SUPPORTED_FILE_TYPES`].
pub fn is_supported(path: &Path) -> bool {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_lowercase(),
        None => return false,
    };
    SUPPORTED_FILE_TYPES
        .iter()
        .any(|(_, exts)| exts.contains(&ext.as_str()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Supported files, sorted by path.
    pub selected: Vec<PathBuf>,
    /// Regular files with an unsupported extension, sorted by path.
    pub skipped: Vec<PathBuf>,
}

/// List regular files directly under `dir` (no recursion).
pub async fn scan_directory(dir: &Path) -> Result<ScanResult> {
    let meta = match tokio::fs::metadata(dir).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Document directory does not exist: {}", dir.display()),
            )
            .into());
        }
        Err(e) => return Err(e.into()),
    };
    if !meta.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Path is not a directory: {}", dir.display()),
        )
        .into());
    }

    let mut result = ScanResult::default();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        // Follows symlinks, like the metadata check above.
        if !tokio::fs::metadata(&path).await?.is_file() {
            continue;
        }
        if is_supported(&path) {
            result.selected.push(path);
        } else {
            warn!(file = %path.display(), "skipping unsupported file type");
            result.skipped.push(path);
        }
    }
    result.selected.sort();
    result.skipped.sort();
    Ok(result)
}
