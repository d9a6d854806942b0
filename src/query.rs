//! Query façade: maps user queries onto catalog/router lookups.

use crate::catalog::TransportCatalog;
use crate::routing::{RouteBase, RouteInfo};

/// The tagged union of read-only queries the façade answers.
#[derive(Debug, Clone, PartialEq)]
pub enum GetRequest {
    Bus { id: i64, bus: String },
    Stop { id: i64, stop: String },
    Route { id: i64, from: String, to: String },
    Map { id: i64 },
}

/// Bus statistics, as returned by a `GetRequest::Bus` query.
#[derive(Debug, Clone, PartialEq)]
pub struct BusStats {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub length: f64,
    pub curvature: f64,
}

/// Stop statistics, as returned by a `GetRequest::Stop` query.
#[derive(Debug, Clone, PartialEq)]
pub struct StopStats {
    pub buses: Vec<String>,
}

/// A façade answer, still tagged with the caller-supplied `id` for
/// batch-mode result correlation.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResponse {
    Bus { id: i64, result: Option<BusStats> },
    Stop { id: i64, result: Option<StopStats> },
    Route { id: i64, result: Option<RouteInfo> },
    Map { id: i64, rendered: String },
}

/// Seam to the out-of-scope map rendering subsystem. The core only needs
/// to invoke it and forward whatever it produces.
pub trait MapRenderer {
    fn render(&self, catalog: &TransportCatalog) -> String;
}

/// Answers a single query against a built catalog and router.
pub fn answer(
    request: &GetRequest,
    catalog: &TransportCatalog,
    router: &RouteBase,
    renderer: &dyn MapRenderer,
) -> QueryResponse {
    match request {
        GetRequest::Bus { id, bus } => QueryResponse::Bus {
            id: *id,
            result: catalog.get_bus(bus).map(|b| BusStats {
                stop_count: b.stops.len(),
                unique_stop_count: b.unique_stop_count,
                length: b.road_length,
                curvature: b.curvature,
            }),
        },
        GetRequest::Stop { id, stop } => QueryResponse::Stop {
            id: *id,
            result: catalog.get_stop(stop).map(|s| StopStats {
                buses: s.buses.clone(),
            }),
        },
        GetRequest::Route { id, from, to } => QueryResponse::Route {
            id: *id,
            result: router.find_route(from, to),
        },
        GetRequest::Map { id } => QueryResponse::Map {
            id: *id,
            rendered: renderer.render(catalog),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::catalog::{PostBusRequest, PostRequest, PostStopRequest};
    use crate::routing::RoutingSettings;
    use crate::sphere::Coords;

    struct NoopRenderer;
    impl MapRenderer for NoopRenderer {
        fn render(&self, _catalog: &TransportCatalog) -> String {
            String::new()
        }
    }

    fn s1_catalog_and_router() -> (TransportCatalog, RouteBase) {
        let mut stop1_dists = HashMap::new();
        stop1_dists.insert("stop2".to_string(), 3000);
        let requests = vec![
            PostRequest::Stop(PostStopRequest::new(
                "stop1",
                Coords::new(55.611087, 37.20829),
                stop1_dists,
            )),
            PostRequest::Stop(PostStopRequest::new(
                "stop2",
                Coords::new(55.595884, 37.209755),
                HashMap::new(),
            )),
            PostRequest::Stop(PostStopRequest::new(
                "stop3",
                Coords::new(55.632761, 37.333324),
                HashMap::new(),
            )),
            PostRequest::Bus(PostBusRequest::new(
                "Bus1",
                vec!["stop1".into(), "stop2".into(), "stop3".into()],
                false,
            )),
        ];
        let catalog = TransportCatalog::create(requests).unwrap();
        let settings = RoutingSettings {
            bus_wait_time: 6,
            bus_velocity: 40.0,
        };
        let router = RouteBase::build(&catalog, &settings);
        (catalog, router)
    }

    #[test]
    fn get_bus_reports_derived_stats() {
        let (catalog, router) = s1_catalog_and_router();
        let response = answer(
            &GetRequest::Bus {
                id: 1,
                bus: "Bus1".to_string(),
            },
            &catalog,
            &router,
            &NoopRenderer,
        );
        match response {
            QueryResponse::Bus { id, result } => {
                assert_eq!(id, 1);
                let stats = result.unwrap();
                assert_eq!(stats.stop_count, 5);
                assert_eq!(stats.unique_stop_count, 3);
            }
            _ => panic!("expected Bus response"),
        }
    }

    #[test]
    fn get_stop_on_empty_catalog_is_not_found() {
        let catalog = TransportCatalog::create(Vec::new()).unwrap();
        let settings = RoutingSettings {
            bus_wait_time: 1,
            bus_velocity: 1.0,
        };
        let router = RouteBase::build(&catalog, &settings);
        let response = answer(
            &GetRequest::Stop {
                id: 2,
                stop: "s".to_string(),
            },
            &catalog,
            &router,
            &NoopRenderer,
        );
        assert_eq!(
            response,
            QueryResponse::Stop { id: 2, result: None }
        );
    }

    #[test]
    fn get_route_to_self_is_zero_time_empty_items() {
        let (catalog, router) = s1_catalog_and_router();
        let response = answer(
            &GetRequest::Route {
                id: 3,
                from: "stop1".to_string(),
                to: "stop1".to_string(),
            },
            &catalog,
            &router,
            &NoopRenderer,
        );
        match response {
            QueryResponse::Route { id, result } => {
                assert_eq!(id, 3);
                let info = result.unwrap();
                assert_eq!(info.time, 0.0);
                assert!(info.items.is_empty());
            }
            _ => panic!("expected Route response"),
        }
    }
}
