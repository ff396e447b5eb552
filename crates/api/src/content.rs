//! Startup loading of the content table.

use std::path::Path;

use folio_core::content::ContentRepository;
use folio_core::error::CoreError;

/// Load and validate the content table.
///
/// Reads `path` when given, otherwise uses the table compiled into
/// `folio-core`. Any read or validation failure is returned; the binary
/// treats it as fatal.
pub fn load_repository(path: Option<&Path>) -> Result<ContentRepository, CoreError> {
    let repo = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|e| {
                CoreError::Internal(format!(
                    "Failed to read content table {}: {e}",
                    path.display()
                ))
            })?;
            ContentRepository::from_json(&json)?
        }
        None => ContentRepository::embedded()?,
    };

    tracing::info!(
        source = %path.map_or_else(|| "embedded".to_string(), |p| p.display().to_string()),
        projects = repo.len(),
        categories = repo.categories().len(),
        "Content table loaded"
    );
    Ok(repo)
}
