//! Test-support for exercising a module under production code
//! transformations.
//!
//! Given a module file under a dependency-modules root, [`VariantGenerator`]
//! produces one minified or syntax-downleveled variant of the module's source
//! per entry of the fixed [`VARIANT_CONFIGS`] table and evaluates each variant
//! in its own isolated in-memory sandbox, so an end-to-end suite can assert
//! the module still behaves the same after every transformation.

/// The fixed variant-configuration table
pub mod variant_config;

/// Reads a module file and produces its transformed, sandbox-loaded variants
pub mod variant_generator;

pub use variant_config::VariantConfig;
pub use variant_config::VariantKind;
pub use variant_config::VARIANT_CONFIGS;
pub use variant_generator::GenerateError;
pub use variant_generator::Variant;
pub use variant_generator::VariantGenerator;
