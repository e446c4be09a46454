//! Path helpers for image references.

use std::path::{self, Component, Path, PathBuf};

use normalize_path::NormalizePath;

/// Express `path` relative to the directory `base`.
///
/// Relative inputs are resolved against the current directory, then both
/// paths are normalized lexically (`.` and `..` resolved without touching the
/// filesystem). Paths on different drives are returned absolute.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path = absolute(path);
    let base = absolute(base);

    let path_components: Vec<Component> = path.components().collect();
    let base_components: Vec<Component> = base.components().collect();
    let common = path_components
        .iter()
        .zip(&base_components)
        .take_while(|(a, b)| a == b)
        .count();

    if common == 0 {
        return path;
    }

    let mut relative = PathBuf::new();
    for _ in common..base_components.len() {
        relative.push("..");
    }
    for component in &path_components[common..] {
        relative.push(component.as_os_str());
    }
    relative
}

fn absolute(input: &Path) -> PathBuf {
    path::absolute(input)
        .unwrap_or_else(|_| input.to_path_buf())
        .normalize()
}

/// Render a path with forward slashes, as stored in JSON files.
pub fn to_slash_string(path: &Path) -> String {
    let mut text = String::new();
    for component in path.components() {
        if component == Component::RootDir {
            text.push('/');
            continue;
        }
        if !text.is_empty() && !text.ends_with('/') {
            text.push('/');
        }
        text.push_str(&component.as_os_str().to_string_lossy());
    }
    text
}
