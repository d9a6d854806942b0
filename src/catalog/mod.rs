//! The catalog: ingestion, validation and derived-metric computation.

pub mod bus;
pub mod request;
pub mod stop;

use std::collections::{HashMap, HashSet};

pub use bus::Bus;
pub use request::{PostBusRequest, PostRequest, PostStopRequest};
pub use stop::Stop;

use crate::distance::{geo_distance, road_distance};
use crate::error::CatalogError;

/// The immutable, fully-validated catalog. Built once via `create` (or
/// `from_canonical` when reconstructing from already-derived parts) and
/// read-only ever after; safe to share across threads without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportCatalog {
    stops: HashMap<String, Stop>,
    buses: HashMap<String, Bus>,
}

impl TransportCatalog {
    /// Builds a catalog from an unordered batch of ingest requests.
    ///
    /// Either every validation rule holds and a fully-derived catalog comes
    /// back, or construction fails atomically and nothing is exposed.
    pub fn create(requests: Vec<PostRequest>) -> Result<TransportCatalog, CatalogError> {
        let mut stop_requests: Vec<&PostStopRequest> = Vec::new();
        let mut bus_requests: Vec<&PostBusRequest> = Vec::new();
        for request in &requests {
            match request {
                PostRequest::Stop(s) => stop_requests.push(s),
                PostRequest::Bus(b) => bus_requests.push(b),
            }
        }

        let mut declared_stops: HashSet<&str> = HashSet::new();
        for s in &stop_requests {
            if !s.coords.in_bounds() {
                log::warn!(
                    "rejecting catalog: stop {} has out-of-range coords ({}, {})",
                    s.stop,
                    s.coords.latitude,
                    s.coords.longitude
                );
                return Err(CatalogError::CoordOutOfRange {
                    lat: s.coords.latitude,
                    lon: s.coords.longitude,
                });
            }
            if !declared_stops.insert(s.stop.as_str()) {
                log::warn!("rejecting catalog: duplicate stop {}", s.stop);
                return Err(CatalogError::DuplicateStop(s.stop.clone()));
            }
        }

        let mut declared_buses: HashSet<&str> = HashSet::new();
        for b in &bus_requests {
            if !declared_buses.insert(b.bus.as_str()) {
                log::warn!("rejecting catalog: duplicate bus {}", b.bus);
                return Err(CatalogError::DuplicateBus(b.bus.clone()));
            }
            for stop in &b.stops {
                if !declared_stops.contains(stop.as_str()) {
                    log::warn!(
                        "rejecting catalog: bus {} references undeclared stop {}",
                        b.bus,
                        stop
                    );
                    return Err(CatalogError::UnknownRouteStop {
                        bus: b.bus.clone(),
                        stop: stop.clone(),
                    });
                }
            }
        }

        for s in &stop_requests {
            for to in s.distances.keys() {
                if !declared_stops.contains(to.as_str()) {
                    log::warn!(
                        "rejecting catalog: stop {} has a measured distance to undeclared stop {}",
                        s.stop,
                        to
                    );
                    return Err(CatalogError::UnknownDistanceStop {
                        stop: s.stop.clone(),
                        to: to.clone(),
                    });
                }
            }
        }

        // Collect every explicit distance assignment first, then fill in
        // the symmetric counterpart for any direction not already
        // explicit. This makes the canonical table independent of
        // request-processing order.
        let mut explicit: HashMap<(String, String), u32> = HashMap::new();
        for s in &stop_requests {
            for (to, dist) in &s.distances {
                explicit.insert((s.stop.clone(), to.clone()), *dist);
            }
        }
        let mut canonical = explicit.clone();
        for (from, to) in explicit.keys() {
            let dist = explicit[&(from.clone(), to.clone())];
            canonical.entry((to.clone(), from.clone())).or_insert(dist);
        }

        let mut stops: HashMap<String, Stop> = stop_requests
            .iter()
            .map(|s| (s.stop.clone(), Stop::new(s.stop.clone(), s.coords)))
            .collect();
        for ((from, to), dist) in &canonical {
            stops.get_mut(from).unwrap().distances.insert(to.clone(), *dist);
        }

        let mut buses: HashMap<String, Bus> = HashMap::new();
        for b in &bus_requests {
            let bus = Bus::new(b.bus.clone(), b.stops.clone(), b.is_roundtrip);
            for stop in &bus.stops {
                stops.get_mut(stop).unwrap().buses.push(bus.name.clone());
            }
            buses.insert(b.bus.clone(), bus);
        }

        for bus in buses.values_mut() {
            let geo_length = geo_distance(&bus.stops, &stops);
            bus.road_length = road_distance(&bus.stops, &stops);
            bus.geo_length = geo_length;
            bus.curvature = bus.road_length / geo_length;
            bus.unique_stop_count = bus.stops.iter().collect::<HashSet<_>>().len();
        }

        for stop in stops.values_mut() {
            stop.buses.sort();
            stop.buses.dedup();
        }

        log::debug!(
            "catalog built: {} stops, {} buses",
            stops.len(),
            buses.len()
        );

        Ok(TransportCatalog { stops, buses })
    }

    /// Builds a catalog directly from already-canonical stop/bus entities
    /// (the path a deserializer would use), enforcing the additional
    /// sanity rules that apply only to reconstructed data.
    pub fn from_canonical(
        stops: HashMap<String, Stop>,
        buses: HashMap<String, Bus>,
    ) -> Result<TransportCatalog, CatalogError> {
        for bus in buses.values() {
            for stop in &bus.stops {
                if !stops.contains_key(stop) {
                    log::warn!(
                        "rejecting reconstructed catalog: bus {} references undeclared stop {}",
                        bus.name,
                        stop
                    );
                    return Err(CatalogError::UnknownRouteStop {
                        bus: bus.name.clone(),
                        stop: stop.clone(),
                    });
                }
            }
            if bus.stops.len() < 3 {
                log::warn!(
                    "rejecting reconstructed catalog: bus {} route has fewer than 3 stops",
                    bus.name
                );
                return Err(CatalogError::RouteTooShort(bus.name.clone()));
            }
            if bus.stops.first() != bus.stops.last() {
                log::warn!(
                    "rejecting reconstructed catalog: bus {} route is not a round trip",
                    bus.name
                );
                return Err(CatalogError::NotRoundTrip(bus.name.clone()));
            }
            let route_stops: HashSet<&String> = bus.stops.iter().collect();
            for endpoint in &bus.endpoints {
                if !route_stops.contains(endpoint) {
                    log::warn!(
                        "rejecting reconstructed catalog: bus {} declares endpoint {} not on its route",
                        bus.name,
                        endpoint
                    );
                    return Err(CatalogError::EndpointNotOnRoute {
                        bus: bus.name.clone(),
                        stop: endpoint.clone(),
                    });
                }
            }
            if bus.curvature < 1.0 {
                log::warn!(
                    "rejecting reconstructed catalog: bus {} has curvature {} below 1.0",
                    bus.name,
                    bus.curvature
                );
                return Err(CatalogError::CurvatureBelowOne(bus.name.clone()));
            }
        }
        Ok(TransportCatalog { stops, buses })
    }

    pub fn stops(&self) -> &HashMap<String, Stop> {
        &self.stops
    }

    pub fn buses(&self) -> &HashMap<String, Bus> {
        &self.buses
    }

    pub fn get_stop(&self, name: &str) -> Option<&Stop> {
        self.stops.get(name)
    }

    pub fn get_bus(&self, name: &str) -> Option<&Bus> {
        self.buses.get(name)
    }
}
