use swc_core::base::config::BoolOrDataConfig;
use swc_core::base::config::Config;
use swc_core::base::config::IsModule;
use swc_core::base::config::JsMinifyFormatOptions;
use swc_core::base::config::JsMinifyOptions;
use swc_core::base::config::JscConfig;
use swc_core::base::config::Options;
use swc_core::base::try_with_handler;
use swc_core::base::Compiler;
use swc_core::base::JsMinifyExtras;
use swc_core::base::TransformOutput;
use swc_core::common::errors::Handler;
use swc_core::common::sync::Lrc;
use swc_core::common::FileName;
use swc_core::common::Globals;
use swc_core::common::SourceFile;
use swc_core::common::SourceMap;
use swc_core::common::GLOBALS;
use swc_core::ecma::parser::EsSyntax;
use swc_core::ecma::parser::Syntax;
use thiserror::Error;

use crate::options::MinifyOptions;
use crate::options::TargetLevel;
use crate::options::TransformOptions;

#[derive(Debug, Error)]
pub enum TransformerError {
  #[error("Failed to minify {file_name}")]
  Minify {
    file_name: String,
    #[source]
    source: anyhow::Error,
  },
  #[error("Failed to transform {file_name} to {target}")]
  Transform {
    file_name: String,
    target: TargetLevel,
    #[source]
    source: anyhow::Error,
  },
}

/// Minify source text to a semantically equivalent, shorter form.
///
/// The input is always treated as an ES module so that `import`/`export`
/// statements survive compression.
pub fn minify(
  file_name: &str,
  code: &str,
  options: &MinifyOptions,
) -> Result<String, TransformerError> {
  let minify_options = JsMinifyOptions {
    compress: BoolOrDataConfig::from_bool(options.compress),
    mangle: BoolOrDataConfig::from_bool(options.mangle),
    format: JsMinifyFormatOptions {
      beautify: !options.whitespace,
      ..Default::default()
    },
    module: IsModule::Bool(true),
    ..Default::default()
  };

  run_compiler(file_name, code, |compiler, source_file, handler| {
    compiler.minify(
      source_file,
      handler,
      &minify_options,
      JsMinifyExtras::default(),
    )
  })
  .map_err(|source| TransformerError::Minify {
    file_name: file_name.to_string(),
    source,
  })
}

/// Rewrite source text so that it only uses syntax valid at the requested
/// edition, injecting any helpers inline.
pub fn transform(
  file_name: &str,
  code: &str,
  options: &TransformOptions,
) -> Result<String, TransformerError> {
  let transform_options = Options {
    config: Config {
      jsc: JscConfig {
        syntax: Some(Syntax::Es(EsSyntax::default())),
        target: Some(options.target.es_version()),
        ..Default::default()
      },
      ..Default::default()
    },
    ..Default::default()
  };

  run_compiler(file_name, code, |compiler, source_file, handler| {
    compiler.process_js_file(source_file, handler, &transform_options)
  })
  .map_err(|source| TransformerError::Transform {
    file_name: file_name.to_string(),
    target: options.target,
    source,
  })
}

/// Run one compiler operation against a fresh source map holding `code` as
/// its only file, surfacing emitted diagnostics as the returned error.
fn run_compiler<F>(file_name: &str, code: &str, op: F) -> Result<String, anyhow::Error>
where
  F: FnOnce(&Compiler, Lrc<SourceFile>, &Handler) -> Result<TransformOutput, anyhow::Error>,
{
  let source_map: Lrc<SourceMap> = Default::default();
  let compiler = Compiler::new(source_map.clone());

  GLOBALS.set(&Globals::new(), || {
    try_with_handler(source_map.clone(), Default::default(), |handler| {
      let source_file = source_map.new_source_file(
        FileName::Custom(file_name.to_string()).into(),
        code.to_string(),
      );

      op(&compiler, source_file, handler)
    })
  })
  .map(|output| output.code)
}

#[cfg(test)]
mod tests {
  use super::*;

  const GREETER: &str = r#"
    // The greeting is stable across every variant.
    const GREETING = "hello";

    export default () => GREETING;
  "#;

  fn compact_minify() -> MinifyOptions {
    MinifyOptions {
      compress: true,
      mangle: true,
      whitespace: true,
    }
  }

  #[test]
  fn minify_compacts_the_source() {
    let code = minify("greeter.js", GREETER, &compact_minify()).unwrap();

    assert!(code.len() < GREETER.len());
    assert!(code.contains("hello"));
    // Comments never survive minification.
    assert!(!code.contains("stable across"));
  }

  #[test]
  fn minify_keeps_the_export_surface() {
    let code = minify("greeter.js", GREETER, &compact_minify()).unwrap();

    assert!(code.contains("export default"));
  }

  #[test]
  fn minify_rejects_invalid_syntax() {
    let result = minify("broken.js", "export default function (", &compact_minify());

    assert!(matches!(result, Err(TransformerError::Minify { .. })));
  }

  #[test]
  fn transform_to_es2015_rewrites_arrow_functions() {
    let options = TransformOptions {
      target: TargetLevel::Es2015,
    };
    let code = transform("greeter.js", "export default () => 1;", &options).unwrap();

    assert!(!code.contains("=>"));
    assert!(code.contains("function"));
  }

  #[test]
  fn transform_to_esnext_keeps_arrow_functions() {
    let options = TransformOptions {
      target: TargetLevel::EsNext,
    };
    let code = transform("greeter.js", "export default () => 1;", &options).unwrap();

    assert!(code.contains("=>"));
  }

  #[test]
  fn transform_to_es2020_downlevels_logical_assignment() {
    // `??=` arrived with es2021, so an es2020 target must rewrite it.
    let options = TransformOptions {
      target: TargetLevel::Es2020,
    };
    let code = transform("assign.js", "export let a; a ??= 1;", &options).unwrap();

    assert!(!code.contains("??="));
  }

  #[test]
  fn transform_rejects_invalid_syntax() {
    let options = TransformOptions {
      target: TargetLevel::Es2015,
    };
    let result = transform("broken.js", "export default function (", &options);

    assert!(
      matches!(result, Err(TransformerError::Transform { target, .. }) if target == TargetLevel::Es2015)
    );
  }
}
