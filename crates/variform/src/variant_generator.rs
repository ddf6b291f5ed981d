use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use variform_filesystem::FileSystemRef;
use variform_filesystem::OsFileSystem;
use variform_sandbox::LoadedModule;
use variform_sandbox::ModuleLoadError;
use variform_transformer_js::TransformerError;

use crate::variant_config::VariantConfig;
use crate::variant_config::VARIANT_CONFIGS;

#[derive(Debug, Error)]
pub enum GenerateError {
  #[error("Failed to read module {path}")]
  FileAccess {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error(transparent)]
  Transformation(#[from] TransformerError),
  #[error(transparent)]
  ModuleLoad(#[from] ModuleLoadError),
}

/// One generated variant: the sandbox-loaded module alongside the
/// configuration that produced it.
#[derive(Debug)]
pub struct Variant {
  pub module: LoadedModule,
  pub config: VariantConfig,
}

/// Produces the transformed, sandbox-loaded variants of one module file.
///
/// The generator holds the file system to read from and the fixed
/// dependency-modules root all generated files live under. Tests substitute
/// an in-memory file system via [`VariantGenerator::with_file_system`].
pub struct VariantGenerator {
  file_system: FileSystemRef,
  modules_root: PathBuf,
}

impl VariantGenerator {
  pub fn new(modules_root: impl Into<PathBuf>) -> Self {
    Self::with_file_system(Arc::new(OsFileSystem), modules_root)
  }

  pub fn with_file_system(file_system: FileSystemRef, modules_root: impl Into<PathBuf>) -> Self {
    Self {
      file_system,
      modules_root: modules_root.into(),
    }
  }

  /// Read the module at `modules_root/directory/file_name` once and run its
  /// source through every entry of [`VARIANT_CONFIGS`], loading each result
  /// in a fresh sandbox.
  ///
  /// Every configuration transforms the source text as read, never another
  /// configuration's output. The first transformation or load failure aborts
  /// the remaining configurations; on success the result holds exactly one
  /// variant per table entry, in table order.
  pub fn generate(&self, directory: &str, file_name: &str) -> Result<Vec<Variant>, GenerateError> {
    let path = self.module_path(directory, file_name);
    let code = self
      .file_system
      .read_to_string(&path)
      .map_err(|source| GenerateError::FileAccess { path, source })?;

    let mut variants = Vec::with_capacity(VARIANT_CONFIGS.len());
    for config in &VARIANT_CONFIGS {
      tracing::debug!("generating {:?} variant of {}", config.kind(), file_name);

      let transformed = match config {
        VariantConfig::Minify(options) => {
          variform_transformer_js::minify(file_name, &code, options)?
        }
        VariantConfig::Transform(options) => {
          variform_transformer_js::transform(file_name, &code, options)?
        }
      };

      let module = variform_sandbox::load(&transformed)?;
      variants.push(Variant {
        module,
        config: *config,
      });
    }

    Ok(variants)
  }

  fn module_path(&self, directory: &str, file_name: &str) -> PathBuf {
    // Tolerate a leading separator on file_name; Path::join would otherwise
    // let it replace the whole path.
    self
      .modules_root
      .join(directory)
      .join(file_name.trim_start_matches('/'))
  }
}
