//! Routing graph construction and the shortest-path query engine.

mod graph;
mod router;

pub use router::RouteBase;

/// Uniform routing parameters applied across the whole network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingSettings {
    /// Minutes spent waiting to board at every boarding/transfer.
    pub bus_wait_time: u32,
    /// Uniform bus speed, in km/h.
    pub bus_velocity: f64,
}

/// One leg of a passenger itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteItem {
    /// Waiting at `stop` for `time` minutes before boarding.
    Wait { stop: String, time: u32 },
    /// Riding `bus` without changing for `span_count` consecutive stops,
    /// spending `time` minutes.
    Road {
        bus: String,
        time: f64,
        span_count: usize,
    },
}

/// A complete fastest-itinerary answer: total time plus the ordered legs
/// that make it up. Always starts with a `RouteItem::Wait` whenever it
/// contains any `RouteItem::Road`.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub time: f64,
    pub items: Vec<RouteItem>,
}
