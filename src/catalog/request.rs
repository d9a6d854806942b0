use std::collections::HashMap;

use crate::sphere::Coords;

/// A declared stop, as handed to the catalog builder by the (out-of-scope)
/// request parser.
///
/// `distances` carries only the measured road distances this stop's own
/// request explicitly specified; the catalog fills in the symmetric
/// counterpart during ingest (see `TransportCatalog::create`).
#[derive(Debug, Clone, PartialEq)]
pub struct PostStopRequest {
    pub stop: String,
    pub coords: Coords,
    pub distances: HashMap<String, u32>,
}

impl PostStopRequest {
    pub fn new(stop: impl Into<String>, coords: Coords, distances: HashMap<String, u32>) -> Self {
        PostStopRequest {
            stop: stop.into(),
            coords,
            distances,
        }
    }
}

/// A declared bus route. `stops` is the sequence as given by the caller,
/// already reflecting whether it is a round trip; the catalog performs the
/// linear-route mirroring normalization described in the data model.
#[derive(Debug, Clone, PartialEq)]
pub struct PostBusRequest {
    pub bus: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

impl PostBusRequest {
    pub fn new(bus: impl Into<String>, stops: Vec<String>, is_roundtrip: bool) -> Self {
        PostBusRequest {
            bus: bus.into(),
            stops,
            is_roundtrip,
        }
    }
}

/// The tagged union of ingest requests the catalog builder consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum PostRequest {
    Stop(PostStopRequest),
    Bus(PostBusRequest),
}

impl From<PostStopRequest> for PostRequest {
    fn from(r: PostStopRequest) -> Self {
        PostRequest::Stop(r)
    }
}

impl From<PostBusRequest> for PostRequest {
    fn from(r: PostBusRequest) -> Self {
        PostRequest::Bus(r)
    }
}
