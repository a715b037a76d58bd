//! Attraction → city lookup.

use std::collections::HashMap;

use super::CityId;

/// Maps attraction names to the city that hosts them.
///
/// # Examples
///
/// ```
/// use roadtrip_routing::models::{AttractionIndex, CityId};
///
/// let mut index = AttractionIndex::new();
/// index.insert("Liberty Bell", CityId::new("Philadelphia", "PA"));
///
/// assert_eq!(
///     index.resolve("Liberty Bell"),
///     Some(&CityId::new("Philadelphia", "PA"))
/// );
/// assert!(index.resolve("Atlantis").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttractionIndex {
    by_name: HashMap<String, CityId>,
}

impl AttractionIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an attraction. A repeated name replaces the earlier city.
    pub fn insert(&mut self, name: impl Into<String>, city: CityId) {
        self.by_name.insert(name.into(), city);
    }

    /// City hosting the named attraction.
    pub fn resolve(&self, name: &str) -> Option<&CityId> {
        self.by_name.get(name)
    }

    /// Returns `true` if the attraction is known.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of registered attractions.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns `true` if no attraction is registered.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, CityId)> for AttractionIndex {
    fn from_iter<I: IntoIterator<Item = (S, CityId)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (name, city) in iter {
            index.insert(name, city);
        }
        index
    }
}
