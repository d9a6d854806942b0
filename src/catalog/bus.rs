use std::collections::HashSet;

/// A canonical bus route entity.
///
/// `stops` always starts and ends at the same stop: round-trip routes are
/// stored verbatim, linear routes have had their reverse mirrored on (minus
/// the duplicated last element) during ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
    /// Terminal stops used by the (out-of-scope) renderer: a single stop
    /// for a true round trip, the two original termini for a mirrored
    /// linear route.
    pub endpoints: HashSet<String>,
    pub unique_stop_count: usize,
    pub road_length: f64,
    pub geo_length: f64,
    pub curvature: f64,
}

impl Bus {
    /// Normalizes `stops` per the route-kind rules and computes the
    /// endpoint set; the distance-derived fields are filled in afterwards
    /// by the catalog once every stop is known.
    pub fn new(name: impl Into<String>, stops: Vec<String>, is_roundtrip: bool) -> Self {
        let endpoints = if is_roundtrip {
            let mut e = HashSet::new();
            if let Some(first) = stops.first() {
                e.insert(first.clone());
            }
            e
        } else {
            let mut e = HashSet::new();
            if let Some(first) = stops.first() {
                e.insert(first.clone());
            }
            if let Some(last) = stops.last() {
                e.insert(last.clone());
            }
            e
        };

        let normalized = if is_roundtrip || stops.len() < 2 {
            stops
        } else {
            let mut full = stops.clone();
            for stop in stops[..stops.len() - 1].iter().rev() {
                full.push(stop.clone());
            }
            full
        };

        Bus {
            name: name.into(),
            stops: normalized,
            is_roundtrip,
            endpoints,
            unique_stop_count: 0,
            road_length: 0.0,
            geo_length: 0.0,
            curvature: 0.0,
        }
    }
}
