use std::fmt;

use serde::{
  Deserialize,
  Serialize
};

/// Reading direction of the host
/// layout.
///
/// Direction is advisory layout
/// metadata: anything that is not
/// `rtl` resolves to `Ltr`.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(
  rename_all = "lowercase",
  from = "String"
)]
pub enum Direction {
  #[default]
  Ltr,
  Rtl
}

impl Direction {
  pub fn parse(raw: &str) -> Self {
    match raw
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "rtl" => Self::Rtl,
      | "ltr" | "" => Self::Ltr,
      | other => {
        tracing::debug!(
          dir = other,
          "unrecognized direction; \
           treating as ltr"
        );
        Self::Ltr
      }
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Ltr => "ltr",
      | Self::Rtl => "rtl"
    }
  }
}

impl From<String> for Direction {
  fn from(value: String) -> Self {
    Self::parse(&value)
  }
}

impl From<&str> for Direction {
  fn from(value: &str) -> Self {
    Self::parse(value)
  }
}

impl fmt::Display for Direction {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
