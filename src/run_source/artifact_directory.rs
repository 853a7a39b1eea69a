use crate::run_source::{ArtifactEntry, ArtifactLister};
use reqwest::Url;
use std::io;
use std::path::{Path, PathBuf};

/// Artifact root kept on the local filesystem, e.g. a Jenkins `builds/<n>/archive`.
#[derive(Debug, Clone)]
pub struct ArtifactDirectory {
    root: PathBuf,
}

impl ArtifactDirectory {
    pub fn new(root: &Path) -> io::Result<Self> {
        Ok(Self {
            root: std::path::absolute(root)?,
        })
    }
}

fn to_file_uri(path: &Path, is_directory: bool) -> io::Result<String> {
    let url = if is_directory {
        Url::from_directory_path(path)
    } else {
        Url::from_file_path(path)
    };

    url.map(|u| u.to_string()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("cannot express {} as a file uri", path.display()),
        )
    })
}

impl ArtifactLister for ArtifactDirectory {
    fn list(&self, relative_dir: &str) -> io::Result<Vec<ArtifactEntry>> {
        let dir = if relative_dir.is_empty() {
            self.root.clone()
        } else {
            self.root.join(relative_dir)
        };

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            // follows links, a dangling one counts as a file
            let is_directory = entry.path().is_dir();
            let relative_path = if relative_dir.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", relative_dir, name)
            };

            entries.push(ArtifactEntry {
                uri: to_file_uri(&entry.path(), is_directory)?,
                name,
                is_directory,
                relative_path,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_root_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();
        std::fs::create_dir(dir.path().join("a")).unwrap();
        std::fs::write(dir.path().join("a").join("inner.log"), "i").unwrap();

        let artifacts = ArtifactDirectory::new(dir.path()).unwrap();
        let root = artifacts.list("").unwrap();

        assert_eq!(root.len(), 2);
        assert_eq!(root[0].name, "a");
        assert!(root[0].is_directory);
        assert!(root[0].uri.starts_with("file://"));
        assert!(root[0].uri.ends_with("/a/"));
        assert_eq!(root[1].name, "b.txt");
        assert!(!root[1].is_directory);
        assert!(root[1].uri.ends_with("/b.txt"));

        let children = artifacts.list(&root[0].relative_path).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "inner.log");
        assert_eq!(children[0].relative_path, "a/inner.log");
    }

    #[cfg(unix)]
    #[test]
    fn test_linked_directory_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real");
        std::fs::create_dir(&real).unwrap();
        std::fs::write(real.join("b.txt"), "b").unwrap();
        let archive = dir.path().join("archive");
        std::fs::create_dir(&archive).unwrap();
        std::os::unix::fs::symlink(&real, archive.join("d")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), archive.join("dangling")).unwrap();

        let artifacts = ArtifactDirectory::new(&archive).unwrap();
        let root = artifacts.list("").unwrap();

        assert_eq!(root.len(), 2);
        assert_eq!(root[0].name, "d");
        assert!(root[0].is_directory);
        assert_eq!(root[1].name, "dangling");
        assert!(!root[1].is_directory);

        let children = artifacts.list("d").unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "b.txt");
        assert!(children[0].uri.ends_with("/archive/d/b.txt"));
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = ArtifactDirectory::new(&dir.path().join("absent")).unwrap();

        assert!(artifacts.list("").is_err());
    }
}
