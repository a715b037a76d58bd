//! City identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An opaque city identifier: a name plus a region code.
///
/// Equality and hashing are by value, so the same city built twice is the
/// same graph key. The display form is `"<name> <REGION>"`, and [`FromStr`]
/// parses it back by splitting at the last space.
///
/// # Examples
///
/// ```
/// use roadtrip_routing::models::CityId;
///
/// let ny = CityId::new("New York", "NY");
/// assert_eq!(ny.to_string(), "New York NY");
///
/// let parsed: CityId = "New York NY".parse().unwrap();
/// assert_eq!(parsed, ny);
/// assert_eq!(parsed.name(), "New York");
/// assert_eq!(parsed.region(), "NY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityId {
    name: String,
    region: String,
}

impl CityId {
    /// Creates a city identifier.
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
        }
    }

    /// City name, e.g. `"San Antonio"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Region code, e.g. `"TX"`.
    pub fn region(&self) -> &str {
        &self.region
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.region)
    }
}

/// Error returned when a string has no `"<name> <REGION>"` shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected \"<name> <REGION>\", got {0:?}")]
pub struct ParseCityError(String);

impl FromStr for CityId {
    type Err = ParseCityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.rsplit_once(' ') {
            Some((name, region)) if !name.trim().is_empty() && !region.is_empty() => {
                Ok(Self::new(name.trim(), region))
            }
            _ => Err(ParseCityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_by_value() {
        let a = CityId::new("Austin", "TX");
        let b = CityId::new(String::from("Austin"), String::from("TX"));
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_same_name_different_region() {
        assert_ne!(CityId::new("Portland", "OR"), CityId::new("Portland", "ME"));
    }

    #[test]
    fn test_parse_multi_word_name() {
        let c: CityId = "Salt Lake City UT".parse().expect("valid");
        assert_eq!(c.name(), "Salt Lake City");
        assert_eq!(c.region(), "UT");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let c: CityId = "  Chicago IL ".parse().expect("valid");
        assert_eq!(c, CityId::new("Chicago", "IL"));
    }

    #[test]
    fn test_parse_rejects_missing_region() {
        assert!("Chicago".parse::<CityId>().is_err());
        assert!("".parse::<CityId>().is_err());
        assert!(" IL".parse::<CityId>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let c = CityId::new("San Jose", "CA");
        let back: CityId = c.to_string().parse().expect("valid");
        assert_eq!(back, c);
    }
}
