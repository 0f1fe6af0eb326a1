use httpmock::prelude::*;
use route_carbon::adapters::remote::{DistanceUnit, RemoteDistanceProvider, RemoteOptions};
use route_carbon::{CalcError, DistanceProvider, FallbackDistanceProvider, StaticRouteTable};

fn provider(server: &MockServer) -> RemoteDistanceProvider {
    RemoteDistanceProvider::new(RemoteOptions::new(server.url("/distance"))).unwrap()
}

#[tokio::test]
async fn test_remote_distance_found() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/distance")
            .query_param("origin", "Campinas")
            .query_param("destination", "Santos");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"distance_km": 171.4}));
    });

    let distance = provider(&server)
        .find_distance(" Campinas ", "Santos")
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(distance, Some(171.4));
}

#[tokio::test]
async fn test_remote_sends_api_key_and_converts_meters() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/distance")
            .query_param("key", "secret-123");
        then.status(200).json_body(serde_json::json!({
            "rows": [{"elements": [{"distance": {"text": "72 km", "value": 72150}}]}]
        }));
    });

    let mut options = RemoteOptions::new(server.url("/distance"));
    options.api_key = Some("secret-123".to_string());
    options.distance_pointer = "/rows/0/elements/0/distance/value".to_string();
    options.unit = DistanceUnit::Meters;
    let provider = RemoteDistanceProvider::new(options).unwrap();

    let distance = provider.find_distance("Santos", "Guarujá").await.unwrap();

    api_mock.assert();
    assert_eq!(distance, Some(72.15));
}

#[tokio::test]
async fn test_remote_not_found_status() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/distance");
        then.status(404);
    });

    let distance = provider(&server).find_distance("Nowhere", "Elsewhere").await.unwrap();

    api_mock.assert();
    assert_eq!(distance, None);
}

#[tokio::test]
async fn test_remote_missing_distance_field() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/distance");
        then.status(200)
            .json_body(serde_json::json!({"status": "ZERO_RESULTS"}));
    });

    let distance = provider(&server).find_distance("Campinas", "Santos").await.unwrap();

    api_mock.assert();
    assert_eq!(distance, None);
}

#[tokio::test]
async fn test_remote_server_error() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/distance");
        then.status(500);
    });

    let err = provider(&server)
        .find_distance("Campinas", "Santos")
        .await
        .unwrap_err();

    api_mock.assert();
    assert!(matches!(err, CalcError::ProviderError { .. }));
}

#[tokio::test]
async fn test_remote_blank_names_skip_request() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/distance");
        then.status(200).json_body(serde_json::json!({"distance_km": 1}));
    });

    let distance = provider(&server).find_distance("  ", "Santos").await.unwrap();

    api_mock.assert_hits(0);
    assert_eq!(distance, None);
}

#[tokio::test]
async fn test_remote_failure_falls_back_to_static_table() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/distance");
        then.status(503);
    });

    let fallback = FallbackDistanceProvider::new(provider(&server), StaticRouteTable::builtin());
    let distance = fallback
        .find_distance("Natal, RN", "Mossoró, RN")
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(distance, Some(281.0));
}
