use crate::error::ResolveError;
use regex::Regex;
use std::{fmt, str::FromStr, sync::OnceLock};
use uuid::Uuid;

/// A player identifier in canonical hyphenated lowercase form.
///
/// Mojang APIs hand out uuids in two shapes: 32 hex chars with no
/// separators, or the hyphenated 8-4-4-4-12 form, either case. Both denote
/// the same player; everything downstream works on the canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(Uuid);

fn shape_regex() -> &'static Regex {
  static SHAPE: OnceLock<Regex> = OnceLock::new();
  SHAPE.get_or_init(|| {
    Regex::new(
      r"^(?:[0-9a-fA-F]{32}|[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12})$",
    )
    .unwrap()
  })
}

impl PlayerId {
  /// File name of this player's statistics record inside the stats dir.
  pub fn record_file_name(&self) -> String {
    format!("{}.json", self.0.as_hyphenated())
  }
}

impl FromStr for PlayerId {
  type Err = ResolveError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    // The shape gate is stricter than Uuid::parse_str, which would also
    // accept braced and urn forms.
    if !shape_regex().is_match(s) {
      return Err(ResolveError::InvalidIdentifier);
    }
    let uuid = Uuid::parse_str(s).map_err(|_| ResolveError::InvalidIdentifier)?;
    Ok(Self(uuid))
  }
}

impl fmt::Display for PlayerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.as_hyphenated().fmt(f)
  }
}
