//! Post-write placement of generated files into role subdirectories.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::OutputError;

pub const CONTROLLER_DIR: &str = "controller";
pub const SERVICE_DIR: &str = "service";

/// Which artifact family a generated file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileRole {
    /// A per-group API file whose kind is only known from its name
    /// (`...Controller` or `...Service`).
    Api,
    Controller,
    Service,
    Model,
    Other,
}

impl FileRole {
    /// Subdirectory a file with this role is moved into, if any.
    pub fn subdirectory(&self, path: &Path) -> Option<&'static str> {
        match self {
            FileRole::Controller => Some(CONTROLLER_DIR),
            FileRole::Service => Some(SERVICE_DIR),
            FileRole::Api => sniff_api_kind(path),
            FileRole::Model | FileRole::Other => None,
        }
    }
}

/// Match the file stem, case-insensitively, against the controller/service suffixes.
fn sniff_api_kind(path: &Path) -> Option<&'static str> {
    let stem = path.file_stem()?.to_string_lossy().to_lowercase();
    if stem.ends_with(CONTROLLER_DIR) {
        Some(CONTROLLER_DIR)
    } else if stem.ends_with(SERVICE_DIR) {
        Some(SERVICE_DIR)
    } else {
        None
    }
}

/// Move a written file into the sibling subdirectory its role calls for.
///
/// Returns the new path, or `None` when the file stays where it is. Any
/// failure is returned as an error; the run must not continue as if the file
/// was placed.
pub fn route_file(path: &Path, role: FileRole) -> Result<Option<PathBuf>, OutputError> {
    let Some(subdir) = role.subdirectory(path) else {
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| OutputError::MissingFileName(path.to_path_buf()))?;
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let target = parent.join(subdir).join(file_name);

    move_file(path, &target)?;
    log::debug!("moved {} to {}", path.display(), target.display());
    Ok(Some(target))
}

/// Create the destination directory, then move. Falls back to copy + remove
/// when a rename crosses filesystems.
fn move_file(from: &Path, to: &Path) -> Result<(), OutputError> {
    if let Some(dir) = to.parent() {
        fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let move_error = |source: std::io::Error| OutputError::Move {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            fs::copy(from, to).map_err(move_error)?;
            fs::remove_file(from).map_err(|source| OutputError::PartialMove {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source,
            })
        }
        Err(e) => Err(move_error(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_roles() {
        let p = Path::new("api/Orders.java");
        assert_eq!(FileRole::Controller.subdirectory(p), Some("controller"));
        assert_eq!(FileRole::Service.subdirectory(p), Some("service"));
        assert_eq!(FileRole::Model.subdirectory(p), None);
        assert_eq!(FileRole::Other.subdirectory(p), None);
    }

    #[test]
    fn test_api_role_sniffs_suffix() {
        assert_eq!(
            FileRole::Api.subdirectory(Path::new("OrderController.java")),
            Some("controller")
        );
        assert_eq!(
            FileRole::Api.subdirectory(Path::new("ORDERSERVICE.java")),
            Some("service")
        );
        assert_eq!(FileRole::Api.subdirectory(Path::new("OrderApi.java")), None);
        // Only the stem counts, not the extension
        assert_eq!(FileRole::Api.subdirectory(Path::new("Order.controller")), None);
    }

    #[test]
    fn test_route_api_controller() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("OrderController.java");
        fs::write(&file, "class OrderController {}").unwrap();

        let moved = route_file(&file, FileRole::Api).unwrap();
        let expected = dir.path().join("controller").join("OrderController.java");
        assert_eq!(moved.as_deref(), Some(expected.as_path()));
        assert!(!file.exists());
        assert_eq!(
            fs::read_to_string(&expected).unwrap(),
            "class OrderController {}"
        );
    }

    #[test]
    fn test_route_model_stays() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("OrderModel.java");
        fs::write(&file, "class OrderModel {}").unwrap();

        assert_eq!(route_file(&file, FileRole::Model).unwrap(), None);
        assert!(file.exists());
    }

    #[test]
    fn test_route_overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("service").join("OrderService.java");
        fs::create_dir_all(existing.parent().unwrap()).unwrap();
        fs::write(&existing, "old").unwrap();
        let file = dir.path().join("OrderService.java");
        fs::write(&file, "new").unwrap();

        route_file(&file, FileRole::Service).unwrap();
        assert_eq!(fs::read_to_string(&existing).unwrap(), "new");
        assert!(!file.exists());
    }

    #[test]
    fn test_route_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("GhostController.java");

        let err = route_file(&file, FileRole::Controller).unwrap_err();
        assert!(matches!(err, OutputError::Move { .. }));
        assert!(err.to_string().contains("GhostController.java"));
    }

    #[test]
    fn test_partial_move_names_both_paths() {
        let err = OutputError::PartialMove {
            from: PathBuf::from("api/OrderController.java"),
            to: PathBuf::from("api/controller/OrderController.java"),
            source: std::io::Error::from(ErrorKind::PermissionDenied),
        };
        let message = err.to_string();
        assert!(message.contains("api/OrderController.java"));
        assert!(message.contains("api/controller/OrderController.java"));
        assert!(message.contains("could not remove the original"));
    }

    #[test]
    fn test_route_uncreatable_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the subdirectory should go
        fs::write(dir.path().join("controller"), "").unwrap();
        let file = dir.path().join("OrderController.java");
        fs::write(&file, "x").unwrap();

        let err = route_file(&file, FileRole::Controller).unwrap_err();
        assert!(matches!(err, OutputError::CreateDir { .. }));
        assert!(file.exists());
    }
}
