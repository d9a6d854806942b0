use std::collections::HashMap;

use crate::sphere::Coords;

/// A canonical stop entity, produced once during ingest and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    pub coords: Coords,
    /// Canonical road distance to each neighbor that has one, in meters.
    pub distances: HashMap<String, u32>,
    /// Buses that traverse this stop, sorted and de-duplicated.
    pub buses: Vec<String>,
}

impl Stop {
    pub fn new(name: impl Into<String>, coords: Coords) -> Self {
        Stop {
            name: name.into(),
            coords,
            distances: HashMap::new(),
            buses: Vec::new(),
        }
    }

    /// Road distance to `to` if one was measured (directly or via
    /// symmetric fill-in), `None` otherwise.
    pub fn distance_to(&self, to: &str) -> Option<u32> {
        self.distances.get(to).copied()
    }
}
