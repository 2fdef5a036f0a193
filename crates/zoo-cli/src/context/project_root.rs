//! Locating the zoo a command should act on.
//!
//! A zoo lives wherever a `.zoo/` directory sits; commands run from any
//! subdirectory below it act on that zoo, the nearest one winning.

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use zoo_config::PROJECT_DIR;

/// The nearest directory at or above `start` that holds a zoo.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| holds_zoo(dir))
        .map(Path::to_path_buf)
}

/// Like [`find_project_root`], but explains how to create a zoo when none is
/// found.
pub fn locate_zoo(start: &Path) -> anyhow::Result<PathBuf> {
    find_project_root(start).ok_or_else(|| {
        anyhow!(
            "no zoo found at or above {} (looked for a {PROJECT_DIR}/ directory); run `zoo init` to create one",
            start.display()
        )
    })
}

fn holds_zoo(dir: &Path) -> bool {
    dir.join(PROJECT_DIR).is_dir()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::{find_project_root, locate_zoo};

    fn zoo() -> TempDir {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir(temp.path().join(".zoo")).expect(".zoo should create");
        temp
    }

    #[test]
    fn commands_in_an_enclosure_folder_find_the_zoo_above() {
        let temp = zoo();
        let nested = temp.path().join("reptile-house/terrariums");
        std::fs::create_dir_all(&nested).expect("nested dirs should create");

        assert_eq!(find_project_root(&nested).as_deref(), Some(temp.path()));
        assert_eq!(find_project_root(temp.path()).as_deref(), Some(temp.path()));
    }

    #[test]
    fn nearest_zoo_wins() {
        let outer = zoo();
        let inner = outer.path().join("petting-zoo");
        std::fs::create_dir_all(inner.join(".zoo")).expect("inner .zoo should create");

        assert_eq!(find_project_root(&inner).as_deref(), Some(inner.as_path()));
    }

    #[test]
    fn a_dot_zoo_file_is_not_a_zoo() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::write(temp.path().join(".zoo"), "").expect("file should write");

        assert_ne!(find_project_root(temp.path()).as_deref(), Some(temp.path()));
    }

    #[test]
    fn missing_zoo_points_at_init() {
        let temp = TempDir::new().expect("tempdir should create");
        if find_project_root(temp.path()).is_none() {
            let message = locate_zoo(temp.path()).expect_err("no zoo").to_string();
            assert!(message.contains("run `zoo init`"));
        }
    }
}
