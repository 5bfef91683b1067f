use std::sync::Arc;
use std::thread;

use serde_json::json;

use u_route_nn::config::ServiceConfig;
use u_route_nn::service::{RouteRecord, RouteService};
use u_route_nn::store::{MemoryRouteStore, RouteId, RouteStore};
use u_route_nn::Error;

const UPLOAD: &str = "lat,lng\n0,0\n5,5\n1,1\n";

#[test]
fn upload_get_delete_lifecycle() {
    let service = RouteService::with_defaults(MemoryRouteStore::new());

    let uploaded = service.upload_csv(UPLOAD).expect("upload");
    let fetched = service.get(uploaded.id).expect("get");
    assert_eq!(fetched, uploaded);

    service.delete(uploaded.id).expect("delete");
    assert!(matches!(service.get(uploaded.id), Err(Error::RouteNotFound(_))));
    assert!(service.store().is_empty().expect("is_empty"));
}

#[test]
fn record_serializes_to_upload_response_shape() {
    let service = RouteService::with_defaults(MemoryRouteStore::new());
    let record = service.upload_csv(UPLOAD).expect("upload");

    let value = serde_json::to_value(&record).expect("serialize");
    assert_eq!(
        value,
        json!({
            "id": 1,
            "points": [
                {"lat": 0.0, "lng": 0.0},
                {"lat": 1.0, "lng": 1.0},
                {"lat": 5.0, "lng": 5.0},
            ]
        })
    );

    let back: RouteRecord = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, record);
}

#[test]
fn ids_increase_across_uploads() {
    let service = RouteService::with_defaults(MemoryRouteStore::new());
    let ids: Vec<RouteId> = (0..3)
        .map(|_| service.upload_csv(UPLOAD).expect("upload").id)
        .collect();
    assert_eq!(ids, vec![RouteId::new(1), RouteId::new(2), RouteId::new(3)]);
}

#[test]
fn config_from_json() {
    let config: ServiceConfig =
        serde_json::from_value(json!({"max_points": 2})).expect("deserialize");
    assert_eq!(config.columns.lat, "lat");

    let service = RouteService::new(MemoryRouteStore::new(), config);
    assert!(matches!(
        service.upload_csv(UPLOAD),
        Err(Error::TooManyPoints { count: 3, limit: 2 })
    ));
}

#[test]
fn shared_service_across_threads() {
    let service = Arc::new(RouteService::with_defaults(MemoryRouteStore::new()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || service.upload_csv(UPLOAD).expect("upload"))
        })
        .collect();

    for handle in handles {
        let record = handle.join().expect("join");
        assert_eq!(record.route.len(), 3);
    }
    assert_eq!(service.store().len().expect("len"), 4);
}
