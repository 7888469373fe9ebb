use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// WGS84 coordinates of a known stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Read-only stop-name to coordinate lookup.
///
/// The directory is an external static resource as far as normalization is
/// concerned: the parser never mutates it and works unchanged (emitting null
/// coordinates) when it is empty.
#[derive(Debug, Clone, Default)]
pub struct StopDirectory {
    map: HashMap<String, Coordinates>,
}

impl StopDirectory {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Coordinates)>,
        S: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(name, coords)| (name.into(), coords))
            .collect();
        Self { map }
    }

    /// The stops bundled with the parser: the Sydney CBD stations the
    /// original statement exports name most often.
    pub fn builtin() -> Self {
        Self::new([
            ("Central", Coordinates { lat: -33.87, lng: 151.21 }),
            ("Town Hall", Coordinates { lat: -33.88, lng: 151.22 }),
            ("Wynyard", Coordinates { lat: -33.86, lng: 151.2 }),
        ])
    }

    pub fn coordinates(&self, stop: &str) -> Option<Coordinates> {
        self.map.get(stop).copied()
    }

    pub fn contains(&self, stop: &str) -> bool {
        self.map.contains_key(stop)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate entries in name order (useful for stable listings).
    pub fn iter_sorted(&self) -> impl Iterator<Item = (&str, Coordinates)> {
        let mut entries: Vec<_> = self
            .map
            .iter()
            .map(|(name, coords)| (name.as_str(), *coords))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_hits_and_misses() {
        let stops = StopDirectory::builtin();
        let central = stops.coordinates("Central").expect("known stop");
        assert_eq!(central.lat, -33.87);
        assert!(stops.coordinates("Nowhere").is_none());
        assert!(!stops.contains("central")); // lookup is exact-key
    }

    #[test]
    fn empty_directory_is_usable() {
        let stops = StopDirectory::default();
        assert!(stops.is_empty());
        assert!(stops.coordinates("Central").is_none());
    }

    #[test]
    fn iter_sorted_is_name_ordered() {
        let stops = StopDirectory::builtin();
        let names: Vec<_> = stops.iter_sorted().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Central", "Town Hall", "Wynyard"]);
    }
}
