use thiserror::Error;

/// Failure modes of catalog construction (see `TransportCatalog::create`).
///
/// Query-time misses are never represented here; they surface as `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("duplicate stop name: {0}")]
    DuplicateStop(String),
    #[error("duplicate bus name: {0}")]
    DuplicateBus(String),
    #[error("bus {bus} references undeclared stop {stop}")]
    UnknownRouteStop { bus: String, stop: String },
    #[error("stop {stop} has a measured distance to undeclared stop {to}")]
    UnknownDistanceStop { stop: String, to: String },
    #[error("coordinate out of range: lat={lat}, lon={lon}")]
    CoordOutOfRange { lat: f64, lon: f64 },
    #[error("bus {0} route is not a round trip after normalization")]
    NotRoundTrip(String),
    #[error("bus {0} route has fewer than 3 stops after normalization")]
    RouteTooShort(String),
    #[error("bus {bus} declares endpoint {stop} which is not on its route")]
    EndpointNotOnRoute { bus: String, stop: String },
    #[error("bus {0} has curvature below 1.0 in a reconstructed catalog")]
    CurvatureBelowOne(String),
}
