//! Time-expanded routing graph builder.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::catalog::TransportCatalog;
use crate::distance::road_leg;
use crate::routing::RoutingSettings;

/// A graph vertex: either the "arrive at stop" or "depart from stop" side
/// of a stop's time-expanded pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub stop: String,
}

/// What a graph edge represents, indexed in lockstep with the edge's
/// `petgraph::graph::EdgeIndex` (edges are only ever appended, never
/// removed, so index-by-insertion-order is stable).
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeTag {
    /// The mandatory boarding wait at a stop: `arrive(stop) -> depart(stop)`.
    Wait { stop: String },
    /// Riding `bus` without changing for `span_count` consecutive stops.
    Road { bus: String, span_count: usize },
}

/// The time-expanded graph plus the bookkeeping needed to map edges back
/// onto the domain concepts they represent.
pub struct RouteGraph {
    pub(crate) graph: DiGraph<Vertex, f64>,
    pub(crate) edge_tags: Vec<EdgeTag>,
    pub(crate) stop_vertices: HashMap<String, (NodeIndex, NodeIndex)>,
}

impl RouteGraph {
    /// Builds two vertices and a wait edge per stop, plus one edge per
    /// (bus, starting index, ending index) triple.
    pub fn build(catalog: &TransportCatalog, settings: &RoutingSettings) -> RouteGraph {
        let mut graph = DiGraph::new();
        let mut edge_tags = Vec::new();
        let mut stop_vertices = HashMap::new();

        // Iterate in a fixed, deterministic order so vertex/edge numbering
        // (and therefore tie-broken route reconstruction) is reproducible.
        let mut stop_names: Vec<&String> = catalog.stops().keys().collect();
        stop_names.sort();

        for name in &stop_names {
            let arrive = graph.add_node(Vertex {
                stop: (*name).clone(),
            });
            let depart = graph.add_node(Vertex {
                stop: (*name).clone(),
            });
            let edge = graph.add_edge(arrive, depart, settings.bus_wait_time as f64);
            debug_assert_eq!(edge.index(), edge_tags.len());
            edge_tags.push(EdgeTag::Wait {
                stop: (*name).clone(),
            });
            stop_vertices.insert((*name).clone(), (arrive, depart));
        }

        let mut bus_names: Vec<&String> = catalog.buses().keys().collect();
        bus_names.sort();
        let meters_per_minute = settings.bus_velocity * 1000.0 / 60.0;

        for bus_name in bus_names {
            let stops = &catalog.buses()[bus_name].stops;
            for i in 0..stops.len() {
                let depart_i = stop_vertices[&stops[i]].1;
                let mut distance = 0.0;
                for j in (i + 1)..stops.len() {
                    distance += road_leg(&catalog.stops()[&stops[j - 1]], &catalog.stops()[&stops[j]]);
                    let arrive_j = stop_vertices[&stops[j]].0;
                    let weight = distance / meters_per_minute;
                    let edge = graph.add_edge(depart_i, arrive_j, weight);
                    debug_assert_eq!(edge.index(), edge_tags.len());
                    edge_tags.push(EdgeTag::Road {
                        bus: bus_name.clone(),
                        span_count: j - i,
                    });
                }
            }
        }

        log::debug!(
            "routing graph built: {} vertices, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        RouteGraph {
            graph,
            edge_tags,
            stop_vertices,
        }
    }
}
