use std::path::PathBuf;

use tracing::info;

use crate::error::{InjectError, Result};
use crate::pipeline::FileResult;
use crate::scanner::compute_hash;

/// Write every planned rewrite to disk, in order
///
/// Each file is re-read first and only overwritten if it still hashes to
/// the content the plan was computed from.
///
/// # Errors
/// Stops at the first file that changed on disk (`ContentChanged`) or
/// cannot be read or written (`Write`). Files written before the failure
/// stay written and are listed in the error.
pub async fn apply(results: &[FileResult]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(results.len());

    for result in results {
        let current = match tokio::fs::read(&result.file).await {
            Ok(bytes) => bytes,
            Err(source) => {
                return Err(InjectError::Write {
                    path: result.file.clone(),
                    source,
                    written,
                });
            }
        };
        if compute_hash(&current) != result.original_hash {
            return Err(InjectError::ContentChanged {
                path: result.file.clone(),
                written,
            });
        }

        if let Err(source) = tokio::fs::write(&result.file, &result.new_content).await {
            return Err(InjectError::Write {
                path: result.file.clone(),
                source,
                written,
            });
        }
        info!(
            "Added {} documentation blocks to {}",
            result.documentation.len(),
            result.file.display()
        );
        written.push(result.file.clone());
    }

    Ok(written)
}
