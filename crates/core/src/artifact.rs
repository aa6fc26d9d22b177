//! Output artifact naming and verification.
//!
//! The artifact path is unique per request (`ai-<uuid>.tsv`), so two
//! concurrent generations can never observe or deliver each other's
//! output. Existence after invocation is the sole success signal; the
//! file's content is not validated here (the downstream import step owns
//! schema validation).

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::CoreError;

/// Verified metadata about a produced artifact.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Full path inside the cache directory.
    pub path: PathBuf,
    /// File name component, passed to the import step.
    pub basename: String,
    /// Exact size in bytes, used as the download `Content-Length`.
    pub size: u64,
}

/// Build a request-unique artifact path under the cache directory.
pub fn unique_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join(format!("ai-{}.tsv", Uuid::new_v4()))
}

/// Check that the generator wrote the expected artifact.
///
/// Existence-only: a present-but-malformed file passes. A missing file is
/// the fatal "generation failed" outcome.
pub async fn verify(path: &Path) -> Result<Artifact, CoreError> {
    let meta = match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => meta,
        _ => {
            return Err(CoreError::GenerationFailed(format!(
                "Generator did not produce expected output file {}",
                path.display()
            )));
        }
    };

    let basename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            CoreError::GenerationFailed(format!("Artifact path {} has no file name", path.display()))
        })?;

    Ok(Artifact {
        path: path.to_path_buf(),
        basename,
        size: meta.len(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
