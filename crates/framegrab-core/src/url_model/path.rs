//! Local save paths for image references.

use std::path::{Component, Path, PathBuf};

/// A reference that would resolve outside the destination directory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("reference {0:?} does not name a file inside the destination")]
pub struct UnsafePath(pub String);

/// Joins `reference` onto `destination`.
///
/// Only plain relative paths are accepted: absolute paths, `..`, and
/// root/prefix components are rejected so a hostile listing cannot write
/// outside the destination directory.
pub fn local_save_path(destination: &Path, reference: &str) -> Result<PathBuf, UnsafePath> {
    let rel = Path::new(reference);
    let mut any_normal = false;
    for component in rel.components() {
        match component {
            Component::Normal(_) => any_normal = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(UnsafePath(reference.to_string()));
            }
        }
    }
    if !any_normal {
        return Err(UnsafePath(reference.to_string()));
    }
    Ok(destination.join(rel))
}
