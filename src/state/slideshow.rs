//! Combined slideshow state: source folders plus the derived image catalog.

use crate::state::catalog::{ImageCatalog, PlayOrder};
use crate::state::folders::FolderSet;
use log::warn;
use std::path::PathBuf;

/// The folder set and catalog mutated together behind one lock.
///
/// Every folder or scan-flag change triggers a catalog rescan here, so callers
/// can never observe the pair out of sync.
#[derive(Debug, Default)]
pub struct SlideshowState {
    folders: FolderSet,
    catalog: ImageCatalog,
    include_subfolders: bool,
}

impl SlideshowState {
    pub fn new() -> Self {
        Self {
            folders: FolderSet::new(),
            catalog: ImageCatalog::new(),
            include_subfolders: true,
        }
    }

    /// Adds a folder and rescans. Returns false (without rescanning) on a
    /// duplicate.
    pub fn add_folder(&mut self, path: PathBuf) -> bool {
        if !self.folders.add(path) {
            return false;
        }
        self.catalog.rescan(&self.folders, self.include_subfolders);
        true
    }

    /// Removes the listed folders (absent ones are ignored) and rescans.
    pub fn remove_folders(&mut self, paths: &[PathBuf]) {
        self.folders.remove(paths);
        self.catalog.rescan(&self.folders, self.include_subfolders);
    }

    pub fn folders(&self) -> &[PathBuf] {
        self.folders.list()
    }

    pub fn include_subfolders(&self) -> bool {
        self.include_subfolders
    }

    /// Toggles recursive scanning and rescans when the value changed.
    pub fn set_include_subfolders(&mut self, include: bool) {
        if self.include_subfolders == include {
            return;
        }
        self.include_subfolders = include;
        self.catalog.rescan(&self.folders, self.include_subfolders);
    }

    pub fn order(&self) -> PlayOrder {
        self.catalog.order()
    }

    pub fn set_order(&mut self, order: PlayOrder) {
        self.catalog.set_order(order);
    }

    pub fn image_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn current(&self) -> Option<PathBuf> {
        self.catalog.current()
    }

    pub fn advance(&mut self) -> Option<PathBuf> {
        self.catalog.advance()
    }

    pub fn retreat(&mut self) -> Option<PathBuf> {
        self.catalog.retreat()
    }

    /// Seeds state from persisted settings and performs the initial scan.
    ///
    /// Folders that no longer exist on disk are dropped silently.
    pub fn restore(&mut self, folders: Vec<PathBuf>, order: PlayOrder, include_subfolders: bool) {
        self.include_subfolders = include_subfolders;
        self.catalog.set_order(order);
        for folder in folders {
            if !folder.is_dir() {
                warn!("Dropping missing folder from settings: {}", folder.display());
                continue;
            }
            self.folders.add(folder);
        }
        if !self.folders.is_empty() {
            self.catalog.rescan(&self.folders, self.include_subfolders);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn catalog_follows_folder_order_then_walk_order() {
        let root = tempfile::tempdir().unwrap();
        let a = root.path().join("a");
        let b = root.path().join("b");
        fs::create_dir(&a).unwrap();
        fs::create_dir(&b).unwrap();
        touch(&a.join("x.jpg"));
        touch(&b.join("y.png"));
        touch(&b.join("z.txt"));

        let mut state = SlideshowState::new();
        assert!(state.add_folder(a.clone()));
        assert!(state.add_folder(b.clone()));

        assert_eq!(state.image_count(), 2);
        assert_eq!(state.current(), Some(a.join("x.jpg")));
        assert_eq!(state.advance(), Some(b.join("y.png")));
    }

    #[test]
    fn duplicate_folder_is_a_no_op() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("x.jpg"));

        let mut state = SlideshowState::new();
        assert!(state.add_folder(root.path().to_path_buf()));
        assert!(!state.add_folder(root.path().to_path_buf()));
        assert_eq!(state.image_count(), 1);
    }

    #[test]
    fn removing_the_only_folder_clears_the_catalog() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("x.jpg"));

        let mut state = SlideshowState::new();
        state.add_folder(root.path().to_path_buf());
        assert!(state.current().is_some());

        state.remove_folders(&[root.path().to_path_buf()]);
        assert_eq!(state.image_count(), 0);
        assert_eq!(state.current(), None);
        assert_eq!(state.advance(), None);
    }

    #[test]
    fn disabling_subfolders_never_grows_the_catalog() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("top.jpg"));
        let nested = root.path().join("nested");
        fs::create_dir(&nested).unwrap();
        touch(&nested.join("deep.png"));

        let mut state = SlideshowState::new();
        state.add_folder(root.path().to_path_buf());
        let recursive_count = state.image_count();
        assert_eq!(recursive_count, 2);

        state.set_include_subfolders(false);
        assert!(state.image_count() <= recursive_count);
        assert_eq!(state.image_count(), 1);

        state.set_include_subfolders(true);
        assert_eq!(state.image_count(), recursive_count);
    }

    #[test]
    fn restore_drops_missing_folders_but_keeps_live_ones() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("x.jpg"));
        let gone = root.path().join("vanished");

        let mut state = SlideshowState::new();
        state.restore(
            vec![root.path().to_path_buf(), gone],
            PlayOrder::Reverse,
            false,
        );

        assert_eq!(state.folders(), [root.path().to_path_buf()]);
        assert_eq!(state.order(), PlayOrder::Reverse);
        assert!(!state.include_subfolders());
        assert_eq!(state.image_count(), 1);
    }
}
