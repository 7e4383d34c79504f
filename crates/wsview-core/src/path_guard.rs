//! Path-boundary check guarding destructive actions.
//!
//! A workspace may only be deleted when its path is a strict descendant of
//! the base directory reported by the external tool. The check works on
//! path components, so `/workspace2` is not inside `/ws`.

use std::path::{Component, Path};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathRejection {
    #[error("base directory is empty")]
    EmptyBase,

    #[error("base directory {0:?} is not absolute")]
    RelativeBase(String),

    #[error("workspace path {0:?} is not absolute")]
    RelativePath(String),

    #[error("workspace path {0:?} contains `.` or `..` components")]
    NonNormalPath(String),

    #[error("workspace path {path:?} is the base directory itself")]
    IsBase { path: String },

    #[error("workspace path {path:?} is outside base directory {base:?}")]
    OutsideBase { path: String, base: String },
}

/// Verify that `path` lies strictly under `base`.
pub fn ensure_within_base(path: &str, base: &str) -> Result<(), PathRejection> {
    let base_trimmed = base.trim();
    if base_trimmed.is_empty() {
        return Err(PathRejection::EmptyBase);
    }

    let base_path = Path::new(base_trimmed);
    if !base_path.is_absolute() {
        return Err(PathRejection::RelativeBase(base_trimmed.to_string()));
    }

    let candidate = Path::new(path);
    if !candidate.is_absolute() {
        return Err(PathRejection::RelativePath(path.to_string()));
    }
    if has_dot_components(candidate) {
        return Err(PathRejection::NonNormalPath(path.to_string()));
    }

    // Dots in the base would make the component comparison meaningless too.
    if has_dot_components(base_path) {
        return Err(PathRejection::OutsideBase {
            path: path.to_string(),
            base: base_trimmed.to_string(),
        });
    }

    match candidate.strip_prefix(base_path) {
        Ok(rest) if rest.as_os_str().is_empty() => Err(PathRejection::IsBase {
            path: path.to_string(),
        }),
        Ok(_) => Ok(()),
        Err(_) => Err(PathRejection::OutsideBase {
            path: path.to_string(),
            base: base_trimmed.to_string(),
        }),
    }
}

fn has_dot_components(path: &Path) -> bool {
    // `Path::components` already drops interior `.`; look at the raw text too.
    path.components()
        .any(|c| matches!(c, Component::ParentDir | Component::CurDir))
        || path
            .to_string_lossy()
            .split('/')
            .any(|segment| segment == "." || segment == "..")
}
