//! Texture resolution and copying
//!
//! Registered textures carry a raw `file_path` value that may be prefixed
//! with option tokens from the host tool's attribute format. The real path is
//! assumed to be the last whitespace-delimited token; a path containing
//! spaces cannot be told apart from an option token under this convention.

use std::fs;
use std::path::{Path, PathBuf};

use scenepack_core::error::ResultExt;
use scenepack_core::{paths, Error, RegistrationMap, Result};

/// Extract the actual file path from a texture's raw `file_path` value,
/// which may contain preceding options. The path is the last
/// whitespace-delimited token and must not contain spaces itself.
pub fn extract_texture_file_path(raw: &str) -> Result<&str> {
    raw.split_whitespace()
        .last()
        .ok_or_else(|| Error::invalid_data("texture file_path is empty"))
}

/// Copy the registered textures into the destination directory, creating it
/// (and any missing parents) first.
///
/// Each registration's path is resolved against `src` and normalized before
/// copying. Fail-fast: the first failing copy aborts the remaining ones.
pub fn copy_registered_textures(dest: &Path, src: &Path, registrations: &RegistrationMap) -> Result<()> {
    tracing::debug!(
        dest = %dest.display(),
        src = %src.display(),
        count = registrations.len(),
        "Copying registered textures"
    );

    fs::create_dir_all(dest)?;

    for (id, registration) in registrations {
        copy_one(dest, src, id, registration)?;
    }

    Ok(())
}

/// Variant of [`copy_registered_textures`] that keeps going after a failed
/// copy and reports a per-texture outcome instead, for callers that need
/// partial-success semantics.
///
/// Returns an error only if the destination directory itself cannot be
/// created.
pub fn copy_registered_textures_report(
    dest: &Path,
    src: &Path,
    registrations: &RegistrationMap,
) -> Result<Vec<(String, Result<()>)>> {
    fs::create_dir_all(dest)?;

    let mut report = Vec::with_capacity(registrations.len());
    for (id, registration) in registrations {
        let outcome = copy_one(dest, src, id, registration);
        report.push((id.clone(), outcome));
    }

    Ok(report)
}

fn copy_one(
    dest: &Path,
    src: &Path,
    id: &str,
    registration: &scenepack_core::TextureRegistration,
) -> Result<()> {
    let actual_file_path = extract_texture_file_path(&registration.file_path)
        .with_context(|| format!("texture {}", id))?;
    let full_file_path = paths::normalize(&src.join(actual_file_path));
    copy(&full_file_path, dest).with_context(|| format!("texture {}", id))
}

/// Copy a file to a destination file or directory
///
/// If `dst` names an existing directory, the destination file name is derived
/// from `src`'s base name. Copying a file onto itself is a no-op; an existing
/// destination file of the same name is overwritten.
pub fn copy(src: &Path, dst: &Path) -> Result<()> {
    let dst: PathBuf = if dst.is_dir() {
        match src.file_name() {
            Some(file_name) => dst.join(file_name),
            None => {
                return Err(Error::invalid_data(format!(
                    "source path has no file name: {}",
                    src.display()
                )))
            }
        }
    } else {
        dst.to_path_buf()
    };

    if src == dst {
        return Ok(());
    }

    tracing::debug!(src = %src.display(), dst = %dst.display(), "Copying file");
    fs::copy(src, &dst)?;
    Ok(())
}
