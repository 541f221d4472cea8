//! Path normalization

use std::io;
use std::path::{Component, Path, PathBuf};

/// Resolve `path` against the current directory and fold `.` and `..`.
///
/// Purely lexical: nothing is looked up on disk, so symlinks are kept and
/// the path need not exist. An empty path resolves to the current directory.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(clean_path(path));
    }
    let cwd = std::env::current_dir()?;
    Ok(clean_path(&cwd.join(path)))
}

pub fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
            Component::RootDir => out.push(Component::RootDir.as_os_str()),
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
        }
    }
    out
}
