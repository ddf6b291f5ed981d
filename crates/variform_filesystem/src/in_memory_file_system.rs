use std::collections::HashMap;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::FileSystem;

/// In memory implementation of a file-system entry
#[derive(Debug)]
enum InMemoryFileSystemEntry {
  File { contents: String },
  Directory,
}

/// In memory implementation of the `FileSystem` trait.
///
/// Doubles as the virtual volume a module sandbox resolves against, so paths
/// are treated as rooted at `/`; relative paths resolve from that root.
#[derive(Debug, Default)]
pub struct InMemoryFileSystem {
  files: RwLock<HashMap<PathBuf, InMemoryFileSystemEntry>>,
}

impl InMemoryFileSystem {
  /// Create a directory at path.
  pub fn create_directory(&self, path: &Path) {
    let mut files = self.files.write().unwrap();
    files.insert(path.into(), InMemoryFileSystemEntry::Directory);
  }

  /// Write a file at path.
  pub fn write_file(&self, path: &Path, contents: String) {
    let mut files = self.files.write().unwrap();
    files.insert(path.into(), InMemoryFileSystemEntry::File { contents });
  }
}

impl FileSystem for InMemoryFileSystem {
  fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
    let mut result = vec![Component::RootDir];

    for component in path.components() {
      match component {
        Component::Prefix(prefix) => {
          result = vec![Component::Prefix(prefix)];
        }
        Component::RootDir => {
          result = vec![Component::RootDir];
        }
        Component::CurDir => {}
        Component::ParentDir => {
          // The root has no parent.
          if result.len() > 1 {
            result.pop();
          }
        }
        Component::Normal(part) => {
          result.push(Component::Normal(part));
        }
      }
    }

    Ok(PathBuf::from_iter(result))
  }

  fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
    let files = self.files.read().unwrap();
    files.get(path).map_or_else(
      || {
        Err(std::io::Error::new(
          std::io::ErrorKind::NotFound,
          "File not found",
        ))
      },
      |entry| match entry {
        InMemoryFileSystemEntry::File { contents } => Ok(contents.clone()),
        InMemoryFileSystemEntry::Directory => Err(std::io::Error::new(
          std::io::ErrorKind::InvalidInput,
          "Path is a directory",
        )),
      },
    )
  }

  fn is_file(&self, path: &Path) -> bool {
    let files = self.files.read().unwrap();
    matches!(files.get(path), Some(InMemoryFileSystemEntry::File { .. }))
  }

  fn is_dir(&self, path: &Path) -> bool {
    let files = self.files.read().unwrap();
    matches!(files.get(path), Some(InMemoryFileSystemEntry::Directory))
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_canonicalize_noop() {
    let fs = InMemoryFileSystem::default();
    let path = Path::new("/foo/bar");
    let result = fs.canonicalize(path).unwrap();
    assert_eq!(result, path);
  }

  #[test]
  fn test_remove_relative_dots() {
    let fs = InMemoryFileSystem::default();
    let result = fs.canonicalize(Path::new("/foo/./bar")).unwrap();
    assert_eq!(result, PathBuf::from("/foo/bar"));
  }

  #[test]
  fn test_remove_relative_parent_dots() {
    let fs = InMemoryFileSystem::default();
    let result = fs.canonicalize(Path::new("/foo/./bar/../baz/")).unwrap();
    assert_eq!(result, PathBuf::from("/foo/baz"));
  }

  #[test]
  fn test_relative_paths_resolve_from_the_root() {
    let fs = InMemoryFileSystem::default();
    let result = fs.canonicalize(Path::new("./foo/bar")).unwrap();
    assert_eq!(result, PathBuf::from("/foo/bar"));
  }

  #[test]
  fn test_parent_dots_do_not_escape_the_root() {
    let fs = InMemoryFileSystem::default();
    let result = fs.canonicalize(Path::new("/../../foo")).unwrap();
    assert_eq!(result, PathBuf::from("/foo"));
  }

  #[test]
  fn test_read_file() {
    let fs = InMemoryFileSystem::default();
    fs.write_file(&PathBuf::from("/foo/bar"), "contents".to_string());
    let result = fs.read_to_string(Path::new("/foo/bar")).unwrap();
    assert_eq!(result, "contents");
  }

  #[test]
  fn test_read_file_not_found() {
    let fs = InMemoryFileSystem::default();
    let result = fs.read_to_string(Path::new("/foo/bar"));
    assert!(result.is_err());
  }

  #[test]
  fn test_read_directory_is_an_error() {
    let fs = InMemoryFileSystem::default();
    fs.create_directory(Path::new("/foo"));
    let result = fs.read_to_string(Path::new("/foo"));
    assert!(result.is_err());
  }

  #[test]
  fn test_is_file() {
    let fs = InMemoryFileSystem::default();
    fs.write_file(&PathBuf::from("/foo/bar"), "contents".to_string());
    assert!(fs.is_file(Path::new("/foo/bar")));
    assert!(!fs.is_file(Path::new("/foo")));
  }

  #[test]
  fn test_is_dir() {
    let fs = InMemoryFileSystem::default();
    fs.create_directory(&PathBuf::from("/foo"));
    assert!(fs.is_dir(Path::new("/foo")));
    assert!(!fs.is_dir(Path::new("/foo/bar")));
  }
}
