use std::io::Result;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

/// In-memory file-system, also used as the virtual volume behind module sandboxes
pub mod in_memory_file_system;

/// File-system implementation using std::fs
pub mod os_file_system;

pub use in_memory_file_system::InMemoryFileSystem;
pub use os_file_system::OsFileSystem;

/// Shared handle to a file-system implementation
pub type FileSystemRef = Arc<dyn FileSystem + Send + Sync>;

/// Trait abstracting file-system operations
pub trait FileSystem {
  /// Normalize `.` and `..` components of a path.
  ///
  /// The in-memory implementation never consults the underlying store, so
  /// paths that do not exist can still be normalized.
  fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
  fn read_to_string(&self, path: &Path) -> Result<String>;
  fn is_file(&self, path: &Path) -> bool;
  fn is_dir(&self, path: &Path) -> bool;
}
