use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns true if the path has a supported image extension (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Collects image files under `dir` in a deterministic walk order.
///
/// With `recursive` set, nested subdirectories are included; otherwise only
/// direct children are considered. Unreadable entries and missing directories
/// are skipped, never reported as failures.
pub fn scan_folder(dir: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(dir).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_supported_image(path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(is_supported_image(Path::new("/a/photo.JPG")));
        assert!(is_supported_image(Path::new("/a/photo.webp")));
        assert!(!is_supported_image(Path::new("/a/notes.txt")));
        assert!(!is_supported_image(Path::new("/a/no_extension")));
    }

    #[test]
    fn flat_scan_skips_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("b.png"));
        touch(&dir.path().join("a.jpg"));
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested").join("c.gif"));

        let found = scan_folder(dir.path(), false);
        assert_eq!(
            found,
            vec![dir.path().join("a.jpg"), dir.path().join("b.png")]
        );
    }

    #[test]
    fn recursive_scan_includes_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.jpg"));
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested").join("c.gif"));
        touch(&dir.path().join("z.txt"));

        let found = scan_folder(dir.path(), true);
        assert_eq!(
            found,
            vec![
                dir.path().join("a.jpg"),
                dir.path().join("nested").join("c.gif"),
            ]
        );
    }

    #[test]
    fn missing_directory_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("does-not-exist");
        assert!(scan_folder(&gone, true).is_empty());
    }
}
