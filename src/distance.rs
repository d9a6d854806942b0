//! Pure functions over stop-name sequences: the "distance engine".

use std::collections::HashMap;

use crate::catalog::stop::Stop;
use crate::sphere::haversine;

/// Road distance between two adjacent stops, falling back to the
/// great-circle distance when no measured distance was recorded.
pub fn road_leg(from: &Stop, to: &Stop) -> f64 {
    match from.distance_to(&to.name) {
        Some(d) => d as f64,
        None => haversine(from.coords, to.coords),
    }
}

/// Sum of great-circle distances between consecutive stops in `seq`.
pub fn geo_distance(seq: &[String], stops: &HashMap<String, Stop>) -> f64 {
    seq.windows(2)
        .map(|pair| haversine(stops[&pair[0]].coords, stops[&pair[1]].coords))
        .sum()
}

/// Sum of road distances (with fallback) between consecutive stops in `seq`.
pub fn road_distance(seq: &[String], stops: &HashMap<String, Stop>) -> f64 {
    seq.windows(2)
        .map(|pair| road_leg(&stops[&pair[0]], &stops[&pair[1]]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::Coords;

    fn stop_table() -> HashMap<String, Stop> {
        let mut a = Stop::new("A", Coords::new(0.0, 0.0));
        let mut b = Stop::new("B", Coords::new(0.0, 0.001));
        let c = Stop::new("C", Coords::new(0.0, 0.002));
        a.distances.insert("B".into(), 150);
        b.distances.insert("A".into(), 150);
        [a, b, c]
            .into_iter()
            .map(|s| (s.name.clone(), s))
            .collect()
    }

    #[test]
    fn road_leg_uses_measured_distance_when_present() {
        let stops = stop_table();
        assert_eq!(road_leg(&stops["A"], &stops["B"]), 150.0);
    }

    #[test]
    fn road_leg_falls_back_to_haversine_when_absent() {
        let stops = stop_table();
        let expected = haversine(stops["B"].coords, stops["C"].coords);
        assert_eq!(road_leg(&stops["B"], &stops["C"]), expected);
    }

    #[test]
    fn road_distance_sums_legs_with_fallback() {
        let stops = stop_table();
        let seq = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let expected = 150.0 + haversine(stops["B"].coords, stops["C"].coords);
        assert_eq!(road_distance(&seq, &stops), expected);
    }

    #[test]
    fn forward_and_reverse_symmetric_distance_match() {
        let stops = stop_table();
        let forward = vec!["A".to_string(), "B".to_string()];
        let reverse = vec!["B".to_string(), "A".to_string()];
        assert_eq!(road_distance(&forward, &stops), road_distance(&reverse, &stops));
    }
}
