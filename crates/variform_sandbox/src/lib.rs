//! Isolated, in-memory module loading.
//!
//! Every load builds a brand-new engine context and a brand-new virtual
//! volume, evaluates one entry file as an ES module, and hands back the
//! evaluated module. Nothing is pooled or cached across loads, so two loaded
//! modules can never observe each other's state, and nothing ever touches the
//! real file system.

use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

use boa_engine::builtins::promise::PromiseState;
use boa_engine::Context;
use boa_engine::JsError;
use boa_engine::JsValue;
use boa_engine::Module;
use boa_engine::Source;
use thiserror::Error;

use variform_filesystem::FileSystemRef;
use variform_filesystem::InMemoryFileSystem;

mod loaded_module;
mod volume_module_loader;

pub use loaded_module::LoadedModule;

use volume_module_loader::VolumeModuleLoader;

/// Synthetic path the sole file of a single-file sandbox is written to.
pub const ENTRY_PATH: &str = "/index.js";

#[derive(Debug, Error)]
pub enum ModuleLoadError {
  #[error("Failed to read module source: {0}")]
  Volume(#[from] std::io::Error),
  #[error("Failed to parse module: {0}")]
  Parse(String),
  #[error("Failed to evaluate module: {0}")]
  Evaluation(String),
  #[error("Export `{0}` is not callable")]
  NotCallable(String),
}

/// Evaluate `code` as the sole module of a fresh sandbox.
pub fn load(code: &str) -> Result<LoadedModule, ModuleLoadError> {
  let volume = InMemoryFileSystem::default();
  volume.write_file(Path::new(ENTRY_PATH), code.to_string());

  load_volume(Arc::new(volume), Path::new(ENTRY_PATH))
}

/// Evaluate an entry file from a caller-assembled volume.
///
/// Specifiers imported by the entry resolve against the volume only, relative
/// to the importing file's directory.
pub fn load_volume(volume: FileSystemRef, entry: &Path) -> Result<LoadedModule, ModuleLoadError> {
  let loader = Rc::new(VolumeModuleLoader::new(volume.clone()));
  let mut context = Context::builder()
    .module_loader(loader)
    .build()
    .map_err(|err| ModuleLoadError::Evaluation(err.to_string()))?;

  let code = volume.read_to_string(entry)?;
  let source = Source::from_reader(code.as_bytes(), Some(entry));
  let module = Module::parse(source, None, &mut context)
    .map_err(|err| ModuleLoadError::Parse(err.to_string()))?;

  let promise = module.load_link_evaluate(&mut context);
  context.run_jobs();

  match promise.state() {
    PromiseState::Fulfilled(_) => Ok(LoadedModule::new(context, module)),
    PromiseState::Rejected(reason) => Err(evaluation_error(reason, &mut context)),
    PromiseState::Pending => Err(ModuleLoadError::Evaluation(String::from(
      "module evaluation never completed",
    ))),
  }
}

fn evaluation_error(reason: JsValue, context: &mut Context) -> ModuleLoadError {
  let error = JsError::from_opaque(reason);
  let message = error
    .try_native(context)
    .map(|native| native.to_string())
    .unwrap_or_else(|_| error.to_string());

  ModuleLoadError::Evaluation(message)
}
