//! Flags-style habitat set.
//!
//! An enclosure can offer several habitats at once (a savanna with a pond is
//! `{savanna, aquatic}`). The set is ordered so serialization is stable.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::enums::HabitatType;

/// A set of [`HabitatType`] values, serialized as a sorted list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct HabitatSet(BTreeSet<HabitatType>);

impl HabitatSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// A set holding exactly one habitat.
    #[must_use]
    pub fn single(habitat: HabitatType) -> Self {
        Self(BTreeSet::from([habitat]))
    }

    /// Add a habitat. Returns `false` if it was already present.
    pub fn insert(&mut self, habitat: HabitatType) -> bool {
        self.0.insert(habitat)
    }

    /// Remove a habitat. Returns `false` if it was not present.
    pub fn remove(&mut self, habitat: HabitatType) -> bool {
        self.0.remove(&habitat)
    }

    #[must_use]
    pub fn contains(&self, habitat: HabitatType) -> bool {
        self.0.contains(&habitat)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = HabitatType> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<HabitatType> for HabitatSet {
    fn from_iter<I: IntoIterator<Item = HabitatType>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for HabitatSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }
        let names = self.iter().map(HabitatType::as_str).collect::<Vec<_>>();
        f.write_str(&names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn holds_several_habitats_at_once() {
        let set: HabitatSet = [HabitatType::Aquatic, HabitatType::Savanna]
            .into_iter()
            .collect();
        assert!(set.contains(HabitatType::Savanna));
        assert!(set.contains(HabitatType::Aquatic));
        assert!(!set.contains(HabitatType::Desert));
        assert_eq!(set.to_string(), "savanna, aquatic");
    }

    #[test]
    fn serializes_as_sorted_list() {
        let set: HabitatSet = [HabitatType::Aquatic, HabitatType::Grassland]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["grassland","aquatic"]"#);
    }

    #[test]
    fn insert_and_remove_report_membership_changes() {
        let mut set = HabitatSet::new();
        assert!(set.insert(HabitatType::Forest));
        assert!(!set.insert(HabitatType::Forest));
        assert!(set.remove(HabitatType::Forest));
        assert!(set.is_empty());
        assert_eq!(set.to_string(), "none");
    }
}
