//! A transport catalog and routing engine: ingest a declarative description
//! of bus routes, stops and measured road distances, then answer bus
//! statistics, stop statistics, and fastest-itinerary queries against it.
//!
//! The crate is split along the same seams the system is designed around:
//! [`sphere`] (great-circle distance), [`catalog`] (ingestion and
//! validation), [`distance`] (leg/route distance with fallback),
//! [`routing`] (the time-expanded graph and its shortest-path engine), and
//! [`query`] (the façade tying the rest together). Parsing request text,
//! rendering maps, and serializing the catalog to disk are all collaborator
//! concerns this crate does not implement.

pub mod catalog;
pub mod distance;
pub mod error;
pub mod query;
pub mod routing;
pub mod sphere;

pub use catalog::TransportCatalog;
pub use error::CatalogError;
pub use query::{answer, BusStats, GetRequest, MapRenderer, QueryResponse, StopStats};
pub use routing::{RouteBase, RouteInfo, RouteItem, RoutingSettings};
pub use sphere::Coords;
