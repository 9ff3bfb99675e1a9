mod common;

use std::sync::Arc;

use common::{MockResolver, MockSocks, MockTls};
use http::Uri;
use socks_agent_client::{ConnectorConfig, ProxyDescriptor, SocksConnector};
use tower_service::Service;

fn connector(
    socks: &Arc<MockSocks>,
    tls: &Arc<MockTls>,
) -> SocksConnector<Arc<MockSocks>, Arc<MockResolver>, Arc<MockTls>> {
    let descriptor: ProxyDescriptor = "socks5h://proxy.local".parse().expect("valid proxy url");
    SocksConnector::with_parts(
        descriptor,
        Arc::clone(socks),
        Arc::new(MockResolver::failing()),
        Arc::clone(tls),
        ConnectorConfig::default(),
    )
}

#[tokio::test]
async fn test_https_uri_is_upgraded() {
    let socks = Arc::new(MockSocks::default());
    let tls = Arc::new(MockTls::default());
    let mut connector = connector(&socks, &tls);

    let uri: Uri = "https://example.com/v1/models".parse().expect("valid uri");
    let conn = connector.call(uri).await.expect("connect succeeds");

    assert!(conn.is_tls());
    assert_eq!(socks.last_spec().target.port, 443);
    assert_eq!(tls.last_call().server_name, "example.com");
}

#[tokio::test]
async fn test_http_uri_keeps_explicit_port() {
    let socks = Arc::new(MockSocks::default());
    let tls = Arc::new(MockTls::default());
    let mut connector = connector(&socks, &tls);

    let uri: Uri = "http://example.com:8080/".parse().expect("valid uri");
    let conn = connector.call(uri).await.expect("connect succeeds");

    assert!(!conn.is_tls());
    let spec = socks.last_spec();
    assert_eq!(spec.target.host, "example.com");
    assert_eq!(spec.target.port, 8080);
    assert_eq!(tls.calls(), 0);
}

#[tokio::test]
async fn test_uri_without_host_is_config_error() {
    let socks = Arc::new(MockSocks::default());
    let tls = Arc::new(MockTls::default());
    let mut connector = connector(&socks, &tls);

    let uri: Uri = "/relative/only".parse().expect("valid uri");
    let err = connector.call(uri).await.expect_err("no host");
    assert!(err.is_config());
    assert_eq!(socks.calls(), 0);
}
