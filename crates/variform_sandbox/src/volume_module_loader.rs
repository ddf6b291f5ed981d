use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

use boa_engine::module::ModuleLoader;
use boa_engine::module::Referrer;
use boa_engine::Context;
use boa_engine::JsNativeError;
use boa_engine::JsResult;
use boa_engine::JsString;
use boa_engine::Module;
use boa_engine::Source;

use variform_filesystem::FileSystemRef;

/// Module loader that resolves every specifier against one virtual volume.
///
/// The registry keeps one module instance per resolved path so that a file
/// imported from two places inside the volume evaluates once, the way a real
/// module graph would.
pub struct VolumeModuleLoader {
  volume: FileSystemRef,
  registry: RefCell<HashMap<PathBuf, Module>>,
}

impl VolumeModuleLoader {
  pub fn new(volume: FileSystemRef) -> Self {
    Self {
      volume,
      registry: RefCell::new(HashMap::new()),
    }
  }

  fn resolve(&self, referrer: &Referrer, specifier: &str) -> std::io::Result<PathBuf> {
    let base = referrer
      .path()
      .and_then(Path::parent)
      .unwrap_or_else(|| Path::new("/"));

    self.volume.canonicalize(&base.join(specifier))
  }

  fn load_module(
    &self,
    referrer: &Referrer,
    specifier: &str,
    context: &mut Context,
  ) -> JsResult<Module> {
    let path = self.resolve(referrer, specifier).map_err(|err| {
      JsNativeError::typ().with_message(format!(
        "could not resolve module specifier `{specifier}`: {err}"
      ))
    })?;

    if let Some(module) = self.registry.borrow().get(&path) {
      return Ok(module.clone());
    }

    let code = self.volume.read_to_string(&path).map_err(|err| {
      JsNativeError::typ().with_message(format!(
        "could not read module `{}`: {err}",
        path.display()
      ))
    })?;

    let source = Source::from_reader(code.as_bytes(), Some(&path));
    let module = Module::parse(source, None, context)?;
    self
      .registry
      .borrow_mut()
      .insert(path, module.clone());

    Ok(module)
  }
}

impl ModuleLoader for VolumeModuleLoader {
  fn load_imported_module(
    &self,
    referrer: Referrer,
    specifier: JsString,
    finish_load: Box<dyn FnOnce(JsResult<Module>, &mut Context)>,
    context: &mut Context,
  ) {
    let specifier = specifier.to_std_string_escaped();
    let result = self.load_module(&referrer, &specifier, context);

    finish_load(result, context);
  }
}
