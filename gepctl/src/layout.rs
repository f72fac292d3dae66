//! Per-board build and output directory layout.
//!
//! Intermediates and final artifacts live in sibling directories next
//! to the sketch, named after the board so that Nano and Mega builds
//! never clobber each other: `build-<board>` holds the compiler cache
//! and object files, `output-<board>` holds the final `.hex`.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::board::Board;
use crate::error::Result;

/// Deterministic directory layout for one board variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLayout {
    /// Compile cache and intermediate objects (`build-<board>`).
    pub build_dir: PathBuf,
    /// Final artifacts, including the uploadable `.hex` (`output-<board>`).
    pub output_dir: PathBuf,
}

impl PathLayout {
    /// Layout for the given board, relative to the sketch directory.
    #[must_use]
    pub fn for_board(board: Board) -> Self {
        Self {
            build_dir: PathBuf::from(format!("build-{board}")),
            output_dir: PathBuf::from(format!("output-{board}")),
        }
    }

    /// Remove both directories under `root`, ignoring ones that do not exist.
    pub fn clean_in(&self, root: &Path) -> Result<()> {
        for dir in [&self.build_dir, &self.output_dir] {
            let path = root.join(dir);
            if path.exists() {
                debug!("removing {}", path.display());
                fs::remove_dir_all(&path)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_a_function_of_board() {
        let nano = PathLayout::for_board(Board::Nano);
        assert_eq!(nano.build_dir, PathBuf::from("build-nano"));
        assert_eq!(nano.output_dir, PathBuf::from("output-nano"));

        let mega = PathLayout::for_board(Board::Mega);
        assert_eq!(mega.build_dir, PathBuf::from("build-mega"));
        assert_eq!(mega.output_dir, PathBuf::from("output-mega"));
    }

    #[test]
    fn test_clean_removes_existing_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = PathLayout::for_board(Board::Mega);

        let build = tmp.path().join(&layout.build_dir);
        let output = tmp.path().join(&layout.output_dir);
        fs::create_dir_all(build.join("sketch")).unwrap();
        fs::create_dir(&output).unwrap();
        fs::write(output.join("gep.ino.hex"), b":00000001FF\n").unwrap();

        layout.clean_in(tmp.path()).unwrap();

        assert!(!build.exists());
        assert!(!output.exists());
    }

    #[test]
    fn test_clean_ignores_missing_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = PathLayout::for_board(Board::Nano);
        layout.clean_in(tmp.path()).unwrap();
    }

    #[test]
    fn test_clean_leaves_other_board_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let other = tmp.path().join("build-nano");
        fs::create_dir(&other).unwrap();

        PathLayout::for_board(Board::Mega).clean_in(tmp.path()).unwrap();
        assert!(other.exists());
    }
}
