use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use swc_core::ecma::ast::EsVersion;

/// Options for a whole-file minification pass
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MinifyOptions {
  pub compress: bool,
  pub mangle: bool,
  /// Emit compact output when set; beautified output otherwise.
  pub whitespace: bool,
}

/// Options for a syntax-downleveling pass
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TransformOptions {
  pub target: TargetLevel,
}

/// Syntax edition a downleveling pass lowers to
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLevel {
  EsNext,
  Es2024,
  Es2023,
  Es2022,
  Es2021,
  Es2020,
  Es2019,
  Es2018,
  Es2017,
  Es2016,
  Es2015,
}

impl TargetLevel {
  pub fn es_version(self) -> EsVersion {
    match self {
      TargetLevel::EsNext => EsVersion::EsNext,
      TargetLevel::Es2024 => EsVersion::Es2024,
      TargetLevel::Es2023 => EsVersion::Es2023,
      TargetLevel::Es2022 => EsVersion::Es2022,
      TargetLevel::Es2021 => EsVersion::Es2021,
      TargetLevel::Es2020 => EsVersion::Es2020,
      TargetLevel::Es2019 => EsVersion::Es2019,
      TargetLevel::Es2018 => EsVersion::Es2018,
      TargetLevel::Es2017 => EsVersion::Es2017,
      TargetLevel::Es2016 => EsVersion::Es2016,
      TargetLevel::Es2015 => EsVersion::Es2015,
    }
  }

  fn as_str(self) -> &'static str {
    match self {
      TargetLevel::EsNext => "esnext",
      TargetLevel::Es2024 => "es2024",
      TargetLevel::Es2023 => "es2023",
      TargetLevel::Es2022 => "es2022",
      TargetLevel::Es2021 => "es2021",
      TargetLevel::Es2020 => "es2020",
      TargetLevel::Es2019 => "es2019",
      TargetLevel::Es2018 => "es2018",
      TargetLevel::Es2017 => "es2017",
      TargetLevel::Es2016 => "es2016",
      TargetLevel::Es2015 => "es2015",
    }
  }
}

impl std::fmt::Display for TargetLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for TargetLevel {
  type Err = String;

  fn from_str(str: &str) -> Result<Self, Self::Err> {
    match str {
      "esnext" => Ok(TargetLevel::EsNext),
      "es2024" => Ok(TargetLevel::Es2024),
      "es2023" => Ok(TargetLevel::Es2023),
      "es2022" => Ok(TargetLevel::Es2022),
      "es2021" => Ok(TargetLevel::Es2021),
      "es2020" => Ok(TargetLevel::Es2020),
      "es2019" => Ok(TargetLevel::Es2019),
      "es2018" => Ok(TargetLevel::Es2018),
      "es2017" => Ok(TargetLevel::Es2017),
      "es2016" => Ok(TargetLevel::Es2016),
      "es2015" => Ok(TargetLevel::Es2015),
      _ => Err(format!("Invalid syntax target: {}", str)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const ALL_TARGETS: [TargetLevel; 11] = [
    TargetLevel::EsNext,
    TargetLevel::Es2024,
    TargetLevel::Es2023,
    TargetLevel::Es2022,
    TargetLevel::Es2021,
    TargetLevel::Es2020,
    TargetLevel::Es2019,
    TargetLevel::Es2018,
    TargetLevel::Es2017,
    TargetLevel::Es2016,
    TargetLevel::Es2015,
  ];

  #[test]
  fn from_str_round_trips_display() {
    for target in ALL_TARGETS {
      assert_eq!(TargetLevel::from_str(&target.to_string()), Ok(target));
    }
  }

  #[test]
  fn from_str_rejects_unknown_targets() {
    assert_eq!(
      TargetLevel::from_str("es5"),
      Err(String::from("Invalid syntax target: es5"))
    );
  }

  #[test]
  fn serializes_as_the_lowercase_edition_name() {
    assert_eq!(
      serde_json::to_string(&TargetLevel::EsNext).unwrap(),
      "\"esnext\""
    );
    assert_eq!(
      serde_json::to_string(&TargetLevel::Es2015).unwrap(),
      "\"es2015\""
    );
  }

  #[test]
  fn deserializes_from_the_lowercase_edition_name() {
    assert_eq!(
      serde_json::from_str::<TargetLevel>("\"es2020\"").unwrap(),
      TargetLevel::Es2020
    );
  }

  #[test]
  fn minify_options_serialize_as_flat_flags() {
    let options = MinifyOptions {
      compress: true,
      mangle: true,
      whitespace: true,
    };

    assert_eq!(
      serde_json::to_string(&options).unwrap(),
      "{\"compress\":true,\"mangle\":true,\"whitespace\":true}"
    );
  }
}
