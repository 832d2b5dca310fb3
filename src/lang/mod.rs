pub mod java;
pub mod maven;
pub mod readme;

use std::fs;
use std::path::Path;

use crate::error::EmitError;

// --- Shared file helpers ---

pub fn create_dir(path: &Path) -> Result<(), EmitError> {
    fs::create_dir_all(path).map_err(|source| EmitError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_file(path: &Path, content: &str) -> Result<(), EmitError> {
    fs::write(path, content).map_err(|source| EmitError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a script and mark it executable (0755 on unix).
pub fn write_script(path: &Path, content: &str) -> Result<(), EmitError> {
    write_file(path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions_err = |source| EmitError::Permissions {
            path: path.to_path_buf(),
            source,
        };
        let mut perms = fs::metadata(path).map_err(permissions_err)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).map_err(permissions_err)?;
    }

    Ok(())
}
