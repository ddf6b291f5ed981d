use serde::Deserialize;
use serde::Serialize;

use variform_transformer_js::MinifyOptions;
use variform_transformer_js::TargetLevel;
use variform_transformer_js::TransformOptions;

/// The two closed kinds of variant-producing transformation
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
  Minify,
  Transform,
}

/// One entry of the fixed configuration table: a kind tag plus the options
/// handed to that kind's transformation, serialized in the
/// `{ "type": ..., ...options }` wire shape.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VariantConfig {
  Minify(MinifyOptions),
  Transform(TransformOptions),
}

impl VariantConfig {
  pub fn kind(&self) -> VariantKind {
    match self {
      VariantConfig::Minify(_) => VariantKind::Minify,
      VariantConfig::Transform(_) => VariantKind::Transform,
    }
  }
}

/// The fixed, ordered configuration table: two minification entries followed
/// by one downleveling entry per supported syntax target, newest first.
/// Generated variants always come back in this order.
pub const VARIANT_CONFIGS: [VariantConfig; 13] = [
  VariantConfig::Minify(MinifyOptions {
    compress: true,
    mangle: true,
    whitespace: true,
  }),
  VariantConfig::Minify(MinifyOptions {
    compress: true,
    mangle: true,
    whitespace: false,
  }),
  VariantConfig::Transform(TransformOptions {
    target: TargetLevel::EsNext,
  }),
  VariantConfig::Transform(TransformOptions {
    target: TargetLevel::Es2024,
  }),
  VariantConfig::Transform(TransformOptions {
    target: TargetLevel::Es2023,
  }),
  VariantConfig::Transform(TransformOptions {
    target: TargetLevel::Es2022,
  }),
  VariantConfig::Transform(TransformOptions {
    target: TargetLevel::Es2021,
  }),
  VariantConfig::Transform(TransformOptions {
    target: TargetLevel::Es2020,
  }),
  VariantConfig::Transform(TransformOptions {
    target: TargetLevel::Es2019,
  }),
  VariantConfig::Transform(TransformOptions {
    target: TargetLevel::Es2018,
  }),
  VariantConfig::Transform(TransformOptions {
    target: TargetLevel::Es2017,
  }),
  VariantConfig::Transform(TransformOptions {
    target: TargetLevel::Es2016,
  }),
  VariantConfig::Transform(TransformOptions {
    target: TargetLevel::Es2015,
  }),
];
