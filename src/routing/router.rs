//! All-pairs shortest path engine over the time-expanded graph.

use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::catalog::TransportCatalog;
use crate::routing::graph::{EdgeTag, RouteGraph};
use crate::routing::{RouteInfo, RouteItem, RoutingSettings};

/// The routing graph plus its precomputed Floyd-Warshall table.
///
/// Built once after ingest; all subsequent `find_route` calls are read-only
/// table lookups and path walks.
pub struct RouteBase {
    graph: RouteGraph,
    dist: Vec<Vec<f64>>,
    // first_edge[u][v] is an edge leaving u on a minimum-weight u->v path.
    first_edge: Vec<Vec<Option<petgraph::graph::EdgeIndex>>>,
}

impl RouteBase {
    pub fn build(catalog: &TransportCatalog, settings: &RoutingSettings) -> RouteBase {
        let graph = RouteGraph::build(catalog, settings);
        let n = graph.graph.node_count();

        let mut dist = vec![vec![f64::INFINITY; n]; n];
        let mut first_edge = vec![vec![None; n]; n];
        for v in dist.iter_mut().enumerate() {
            v.1[v.0] = 0.0;
        }

        for edge in graph.graph.edge_references() {
            let u = edge.source().index();
            let w = edge.target().index();
            let weight = *edge.weight();
            if weight < dist[u][w] {
                dist[u][w] = weight;
                first_edge[u][w] = Some(edge.id());
            }
        }

        // Ascending k, then u, then v: the fixed relaxation order the
        // specification requires for reproducible tie-breaking.
        for k in 0..n {
            for u in 0..n {
                if dist[u][k].is_infinite() {
                    continue;
                }
                for w in 0..n {
                    let candidate = dist[u][k] + dist[k][w];
                    if candidate < dist[u][w] {
                        dist[u][w] = candidate;
                        first_edge[u][w] = first_edge[u][k];
                    }
                }
            }
        }

        log::info!(
            "router built over {} vertices ({} bytes of table)",
            n,
            n * n * std::mem::size_of::<f64>()
        );

        RouteBase {
            graph,
            dist,
            first_edge,
        }
    }

    /// Finds the least-weight itinerary from `from` to `to`.
    ///
    /// `None` is returned both when either stop name is unknown and when
    /// the stops are known but no path connects them; the two cases are
    /// indistinguishable to the caller by design.
    pub fn find_route(&self, from: &str, to: &str) -> Option<RouteInfo> {
        let (from_arrive, _) = *self.graph.stop_vertices.get(from)?;
        let (to_arrive, _) = *self.graph.stop_vertices.get(to)?;

        let u = from_arrive.index();
        let target = to_arrive.index();
        if self.dist[u][target].is_infinite() {
            return None;
        }

        let mut items = Vec::new();
        let mut current = u;
        while current != target {
            let edge_id = self.first_edge[current][target]?;
            let (src, dst) = self.graph.graph.edge_endpoints(edge_id).unwrap();
            debug_assert_eq!(src.index(), current);
            let weight = self.graph.graph[edge_id];
            match &self.graph.edge_tags[edge_id.index()] {
                EdgeTag::Wait { stop } => items.push(RouteItem::Wait {
                    stop: stop.clone(),
                    time: weight.trunc() as u32,
                }),
                EdgeTag::Road { bus, span_count } => items.push(RouteItem::Road {
                    bus: bus.clone(),
                    time: weight,
                    span_count: *span_count,
                }),
            }
            current = dst.index();
        }

        Some(RouteInfo {
            time: self.dist[u][target],
            items,
        })
    }
}
