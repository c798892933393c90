use std::path::{Path, PathBuf};

use cargo_metadata::MetadataCommand;

use crate::error::AppError;

/// Resolve the workspace root with `cargo metadata`, from the given manifest
/// or the workspace enclosing the current directory
pub fn get_workspace_root(manifest_path: Option<&Path>) -> Result<PathBuf, AppError> {
    let mut cmd = MetadataCommand::new();
    if let Some(manifest_path) = manifest_path {
        cmd.manifest_path(manifest_path);
    }

    let metadata = cmd.no_deps().exec().map_err(|e| AppError::MetadataFailed {
        reason: e.to_string(),
    })?;

    Ok(metadata.workspace_root.into_std_path_buf())
}
