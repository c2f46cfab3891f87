//! Derived catalog of image files and the playback position within it.

use crate::file_utils;
use crate::state::folders::FolderSet;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Direction of a playback step.
#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

/// How the playback index moves on each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayOrder {
    #[default]
    Sequential,
    Random,
    Reverse,
}

impl PlayOrder {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sequential => "Sequential",
            Self::Random => "Random",
            Self::Reverse => "Reverse",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Sequential" => Some(Self::Sequential),
            "Random" => Some(Self::Random),
            "Reverse" => Some(Self::Reverse),
            _ => None,
        }
    }
}

/// Ordered list of discovered image paths plus the current playback index.
///
/// The catalog is derived entirely from a [`FolderSet`] and the recursive-scan
/// flag; it is recomputed on every folder or flag change and never persisted.
/// The index stays in `[0, len)` whenever the catalog is non-empty.
#[derive(Debug, Default)]
pub struct ImageCatalog {
    images: Vec<PathBuf>,
    index: usize,
    order: PlayOrder,
}

impl ImageCatalog {
    /// Creates a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the image list by walking every folder in `folders` order.
    ///
    /// Resets the playback index to the first image. Inaccessible folders
    /// contribute nothing rather than failing the whole scan.
    pub fn rescan(&mut self, folders: &FolderSet, recursive: bool) {
        self.images.clear();
        for folder in folders.list() {
            self.images
                .extend(file_utils::scan_folder(folder, recursive));
        }
        self.index = 0;
        debug!(
            "Catalog rescan: {} image(s) across {} folder(s)",
            self.images.len(),
            folders.len()
        );
    }

    /// The image at the current playback position, or `None` when empty.
    pub fn current(&self) -> Option<PathBuf> {
        self.images.get(self.index).cloned()
    }

    pub fn set_order(&mut self, order: PlayOrder) {
        self.order = order;
    }

    pub fn order(&self) -> PlayOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Moves one step forward under the current play order.
    pub fn advance(&mut self) -> Option<PathBuf> {
        self.step(Direction::Forward)
    }

    /// Moves one step in the opposite direction of [`advance`](Self::advance).
    ///
    /// Under `Random` this is a fresh uniform draw, not a history walk, so
    /// "previous" may repeat or skip images.
    pub fn retreat(&mut self) -> Option<PathBuf> {
        self.step(Direction::Backward)
    }

    fn step(&mut self, direction: Direction) -> Option<PathBuf> {
        if self.images.is_empty() {
            return None;
        }

        let len = self.images.len();
        self.index = match (self.order, direction) {
            (PlayOrder::Random, _) => rand::thread_rng().gen_range(0..len),
            (PlayOrder::Sequential, Direction::Forward)
            | (PlayOrder::Reverse, Direction::Backward) => (self.index + 1) % len,
            (PlayOrder::Sequential, Direction::Backward)
            | (PlayOrder::Reverse, Direction::Forward) => (self.index + len - 1) % len,
        };

        self.images.get(self.index).cloned()
    }

    #[cfg(test)]
    fn with_images(images: Vec<PathBuf>) -> Self {
        Self {
            images,
            index: 0,
            order: PlayOrder::Sequential,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: usize) -> ImageCatalog {
        ImageCatalog::with_images(
            (0..n)
                .map(|i| PathBuf::from(format!("/images/{i:03}.jpg")))
                .collect(),
        )
    }

    #[test]
    fn empty_catalog_has_no_current_image() {
        let mut empty = ImageCatalog::new();
        assert_eq!(empty.current(), None);
        assert_eq!(empty.advance(), None);
        assert_eq!(empty.retreat(), None);
    }

    #[test]
    fn sequential_advance_cycles_back_to_start() {
        let mut catalog = catalog(5);
        let first = catalog.current();
        for _ in 0..5 {
            catalog.advance();
        }
        assert_eq!(catalog.current(), first);
    }

    #[test]
    fn sequential_retreat_wraps_to_last() {
        let mut catalog = catalog(3);
        assert_eq!(catalog.retreat(), Some(PathBuf::from("/images/002.jpg")));
    }

    #[test]
    fn reverse_advance_mirrors_sequential_retreat() {
        let mut reverse = catalog(7);
        reverse.set_order(PlayOrder::Reverse);
        let mut sequential = catalog(7);

        for _ in 0..10 {
            assert_eq!(reverse.advance(), sequential.retreat());
        }
        for _ in 0..10 {
            assert_eq!(reverse.retreat(), sequential.advance());
        }
    }

    #[test]
    fn random_draws_visit_other_indices() {
        let mut catalog = catalog(5);
        catalog.set_order(PlayOrder::Random);
        let start = catalog.current();

        let moved = (0..200).any(|_| catalog.advance() != start);
        assert!(moved, "200 uniform draws never left the starting image");
    }

    #[test]
    fn any_step_sequence_stays_within_the_scanned_set() {
        let paths: Vec<PathBuf> = (0..4)
            .map(|i| PathBuf::from(format!("/images/{i:03}.jpg")))
            .collect();
        let mut catalog = ImageCatalog::with_images(paths.clone());

        for (i, order) in [PlayOrder::Sequential, PlayOrder::Random, PlayOrder::Reverse]
            .into_iter()
            .cycle()
            .take(60)
            .enumerate()
        {
            catalog.set_order(order);
            let path = if i % 3 == 0 {
                catalog.retreat()
            } else {
                catalog.advance()
            };
            assert!(paths.contains(&path.expect("non-empty catalog")));
            assert!(paths.contains(&catalog.current().expect("non-empty catalog")));
        }
    }
}
