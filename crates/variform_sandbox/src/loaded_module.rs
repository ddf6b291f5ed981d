use std::fmt;

use boa_engine::Context;
use boa_engine::JsString;
use boa_engine::JsValue;
use boa_engine::Module;

use crate::ModuleLoadError;

/// An evaluated module together with the context it was evaluated in.
///
/// Owning the context keeps the module's realm (and its module registry)
/// alive and private to this load; dropping the value releases both.
pub struct LoadedModule {
  context: Context,
  module: Module,
}

impl LoadedModule {
  pub(crate) fn new(context: Context, module: Module) -> Self {
    Self { context, module }
  }

  /// Read a named export off the module namespace.
  ///
  /// Exports that do not exist read as `undefined`, mirroring namespace
  /// object semantics.
  pub fn export(&mut self, name: &str) -> Result<JsValue, ModuleLoadError> {
    let namespace = self.module.namespace(&mut self.context);

    namespace
      .get(JsString::from(name), &mut self.context)
      .map_err(|err| ModuleLoadError::Evaluation(err.to_string()))
  }

  pub fn default_export(&mut self) -> Result<JsValue, ModuleLoadError> {
    self.export("default")
  }

  /// Invoke a function-valued named export with `undefined` as `this`.
  pub fn call_export(&mut self, name: &str, args: &[JsValue]) -> Result<JsValue, ModuleLoadError> {
    let value = self.export(name)?;
    let function = value
      .as_callable()
      .cloned()
      .ok_or_else(|| ModuleLoadError::NotCallable(name.to_string()))?;

    function
      .call(&JsValue::undefined(), args, &mut self.context)
      .map_err(|err| ModuleLoadError::Evaluation(err.to_string()))
  }

  pub fn call_default(&mut self, args: &[JsValue]) -> Result<JsValue, ModuleLoadError> {
    self.call_export("default", args)
  }

  /// The context the module lives in, for follow-up value conversions.
  pub fn context_mut(&mut self) -> &mut Context {
    &mut self.context
  }
}

impl fmt::Debug for LoadedModule {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LoadedModule").finish_non_exhaustive()
  }
}
