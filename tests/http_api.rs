//! End-to-end checks of the HTTP client and controller against a local stub server.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

use order_viewer::api::{ApiError, HttpOrderApi, OrderApi};
use order_viewer::config::{ApiConfig, TimeZoneChoice};
use order_viewer::controller::driver::drive;
use order_viewer::controller::{RegionId, SearchController, SearchState};
use order_viewer::model::OrderId;
use order_viewer::render::RenderOptions;

/// Minimal HTTP/1.1 server: answers each path with a canned status and body
/// and records every request path it sees.
struct Stub {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

async fn spawn_stub(routes: &[(&str, u16, &str)]) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let routes: Arc<HashMap<String, (u16, String)>> = Arc::new(
        routes
            .iter()
            .map(|(path, status, body)| (path.to_string(), (*status, body.to_string())))
            .collect(),
    );

    let seen = requests.clone();
    tokio::spawn(async move {
        loop {
            let (stream, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => return,
            };
            let seen = seen.clone();
            let routes = routes.clone();
            tokio::spawn(async move {
                let (reader, mut writer) = stream.into_split();
                let mut reader = BufReader::new(reader);

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).await.unwrap_or(0) == 0 {
                    return;
                }
                loop {
                    let mut header = String::new();
                    match reader.read_line(&mut header).await {
                        Ok(0) => break,
                        Ok(_) if header == "\r\n" => break,
                        Ok(_) => continue,
                        Err(_) => return,
                    }
                }

                let path = request_line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or_default()
                    .to_string();
                seen.lock().unwrap().push(path.clone());

                let (status, body) = routes
                    .get(&path)
                    .cloned()
                    .unwrap_or((404, "no route".to_string()));
                let response = format!(
                    "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = writer.write_all(response.as_bytes()).await;
                let _ = writer.shutdown().await;
            });
        }
    });

    Stub { addr, requests }
}

impl Stub {
    fn api(&self) -> HttpOrderApi {
        HttpOrderApi::new(&ApiConfig {
            base_url: format!("http://{}", self.addr),
            timeout_secs: Some(5),
        })
        .unwrap()
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn controller() -> SearchController {
    SearchController::new(RenderOptions {
        timezone: TimeZoneChoice::Utc,
        ..RenderOptions::default()
    })
}

const SPARSE_ORDER: &str =
    r#"{"order_uid":"ABC123","track_number":"T1","items":[{"name":"Widget","sale":10}]}"#;

#[tokio::test]
async fn one_search_one_request_with_escaped_uid() {
    let stub = spawn_stub(&[("/api/order/a%20b%2Fc", 200, SPARSE_ORDER)]).await;
    let api = stub.api();
    let mut ctrl = controller();

    ctrl.input_changed("  a b/c ".into());
    let effects = ctrl.submit();
    drive(&mut ctrl, &api, effects).await;

    assert_eq!(stub.requests(), vec!["/api/order/a%20b%2Fc".to_string()]);
    assert!(matches!(ctrl.state(), SearchState::Success(_)));
}

#[tokio::test]
async fn blank_search_sends_nothing() {
    let stub = spawn_stub(&[]).await;
    let api = stub.api();
    let mut ctrl = controller();

    let effects = ctrl.search("   ");
    drive(&mut ctrl, &api, effects).await;

    assert!(stub.requests().is_empty());
    assert_eq!(ctrl.state(), &SearchState::Idle);
}

#[tokio::test]
async fn sparse_order_renders_with_placeholders() {
    let stub = spawn_stub(&[("/api/order/ABC123", 200, SPARSE_ORDER)]).await;
    let api = stub.api();
    let mut ctrl = controller();

    ctrl.input_changed("ABC123".into());
    let effects = ctrl.submit();
    drive(&mut ctrl, &api, effects).await;

    let area = ctrl.region(RegionId::ResultArea);
    assert!(area.is_visible());
    let tree = area.tree();
    assert_eq!(tree.len(), 4);
    assert_eq!(
        tree[0].fields(),
        vec![
            ("Order UID", "ABC123"),
            ("Track number", "T1"),
            ("Customer ID", "N/A"),
            ("Created", "N/A"),
            ("Delivery service", "N/A"),
            ("Entry", "N/A"),
        ]
    );
    let card = &tree[3].children()[0];
    assert_eq!(card.value_of("Name"), Some("Widget"));
    assert_eq!(card.value_of("Discount"), Some("10%"));
    assert_eq!(card.value_of("Price"), Some("N/A"));
}

#[tokio::test]
async fn not_found_surfaces_status_and_body() {
    let stub = spawn_stub(&[("/api/order/ABC123", 404, "not found")]).await;
    let api = stub.api();
    let mut ctrl = controller();

    ctrl.input_changed("ABC123".into());
    let effects = ctrl.submit();
    drive(&mut ctrl, &api, effects).await;

    let banner = ctrl.region(RegionId::ErrorBanner);
    assert!(banner.is_visible());
    let message = banner.text().unwrap();
    assert!(message.contains("404"), "{message}");
    assert!(message.contains("not found"), "{message}");
    assert!(!ctrl.region(RegionId::ResultArea).is_visible());
    assert!(ctrl.region(RegionId::Trigger).is_enabled());
}

#[tokio::test]
async fn malformed_body_is_an_error() {
    let stub = spawn_stub(&[("/api/order/ABC123", 200, "<html>oops</html>")]).await;
    let api = stub.api();

    let err = api
        .fetch_order(&OrderId::parse("ABC123").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let api = HttpOrderApi::new(&ApiConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: Some(5),
    })
    .unwrap();
    let mut ctrl = controller();

    let effects = ctrl.search("ABC123");
    drive(&mut ctrl, &api, effects).await;

    let message = ctrl.region(RegionId::ErrorBanner).text().unwrap();
    assert!(message.starts_with("Request failed: "), "{message}");
    assert!(!ctrl.region(RegionId::Loader).is_visible());
}

#[tokio::test]
async fn empty_recent_list_keeps_section_hidden() {
    for body in ["[]", "null"] {
        let stub = spawn_stub(&[("/api/orders/recent", 200, body)]).await;
        let api = stub.api();
        let mut ctrl = controller();

        let effects = ctrl.load_recent();
        drive(&mut ctrl, &api, effects).await;

        assert_eq!(stub.requests(), vec!["/api/orders/recent".to_string()]);
        assert!(!ctrl.region(RegionId::RecentList).is_visible(), "{body}");
        assert!(!ctrl.region(RegionId::RecentHeading).is_visible(), "{body}");
    }
}

#[tokio::test]
async fn failing_recent_list_is_silent() {
    let stub = spawn_stub(&[("/api/orders/recent", 500, "db down")]).await;
    let api = stub.api();
    let mut ctrl = controller();

    let effects = ctrl.load_recent();
    drive(&mut ctrl, &api, effects).await;

    assert!(!ctrl.region(RegionId::RecentList).is_visible());
    assert!(!ctrl.region(RegionId::ErrorBanner).is_visible());
}

#[tokio::test]
async fn recent_entry_click_looks_up_that_order() {
    let stub = spawn_stub(&[
        (
            "/api/orders/recent",
            200,
            r#"[{"order_uid":"ABC123","customer_id":"test","date_created":"2021-11-26T06:22:19Z"}]"#,
        ),
        ("/api/order/ABC123", 200, SPARSE_ORDER),
    ])
    .await;
    let api = stub.api();
    let mut ctrl = controller();

    let effects = ctrl.load_recent();
    drive(&mut ctrl, &api, effects).await;
    assert!(ctrl.region(RegionId::RecentList).is_visible());
    assert!(ctrl.region(RegionId::RecentHeading).is_visible());

    let action = match &ctrl.region(RegionId::RecentList).tree()[0] {
        order_viewer::render::Node::Activate { action, .. } => action.clone(),
        other => panic!("expected an activatable entry, got {other:?}"),
    };
    let effects = ctrl.activate(&action);
    drive(&mut ctrl, &api, effects).await;

    assert_eq!(ctrl.input(), "ABC123");
    assert_eq!(
        stub.requests(),
        vec!["/api/orders/recent".to_string(), "/api/order/ABC123".to_string()]
    );
    assert!(matches!(ctrl.state(), SearchState::Success(_)));
}

#[tokio::test]
async fn error_body_keeps_everything_but_the_trailing_newline() {
    let stub = spawn_stub(&[("/api/order/ABC123", 404, "  order ABC123 not found\n")]).await;
    let api = stub.api();

    let err = api
        .fetch_order(&OrderId::parse("ABC123").unwrap())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 404,
            body: "  order ABC123 not found".to_string(),
        }
    );
}
