use std::collections::HashMap;

use clap::Parser;

use transit_catalog::catalog::{PostBusRequest, PostRequest, PostStopRequest};
use transit_catalog::query::{answer, GetRequest, MapRenderer, QueryResponse};
use transit_catalog::routing::RouteBase;
use transit_catalog::sphere::Coords;
use transit_catalog::{RoutingSettings, TransportCatalog};

/// Build a small hardcoded catalog and run a couple of illustrative queries.
///
/// This is a demonstration of the library, not the request parser or
/// response envelope described by the wider system -- both remain the
/// caller's responsibility.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Minutes spent waiting to board at every boarding/transfer.
    #[arg(long, default_value_t = 6)]
    bus_wait_time: u32,

    /// Uniform bus speed, in km/h.
    #[arg(long, default_value_t = 40.0)]
    bus_velocity: f64,
}

struct NoopRenderer;
impl MapRenderer for NoopRenderer {
    fn render(&self, catalog: &TransportCatalog) -> String {
        format!(
            "<map placeholder: {} stops, {} buses>",
            catalog.stops().len(),
            catalog.buses().len()
        )
    }
}

fn sample_requests() -> Vec<PostRequest> {
    let mut stop1_dists = HashMap::new();
    stop1_dists.insert("stop2".to_string(), 3000);

    vec![
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
    ]
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    log::info!("ingesting sample catalog");
    let catalog = TransportCatalog::create(sample_requests()).expect("sample catalog is valid");

    let settings = RoutingSettings {
        bus_wait_time: args.bus_wait_time,
        bus_velocity: args.bus_velocity,
    };
    let router = RouteBase::build(&catalog, &settings);

    let renderer = NoopRenderer;

    match answer(
        &GetRequest::Bus {
            id: 1,
            bus: "Bus1".to_string(),
        },
        &catalog,
        &router,
        &renderer,
    ) {
        QueryResponse::Bus { id, result } => println!("[{id}] Bus1 -> {result:?}"),
        _ => unreachable!(),
    }

    match answer(
        &GetRequest::Route {
            id: 2,
            from: "stop1".to_string(),
            to: "stop3".to_string(),
        },
        &catalog,
        &router,
        &renderer,
    ) {
        QueryResponse::Route { id, result } => println!("[{id}] stop1 -> stop3: {result:?}"),
        _ => unreachable!(),
    }
}
