//! Integration tests for the live provider clients against a mock HTTP
//! upstream.

use std::time::Duration;

use domainscope_core::{RecordType, ResearchError};
use domainscope_providers::{
    AbuseProvider, DnsResolver, DohResolver, LiveAbuseProvider, LiveSecurityProvider,
    LiveWhoisProvider, SecurityProvider, WhoisProvider,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn whois_lookup_maps_provider_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/whoisserver/WhoisService"))
        .and(query_param("domainName", "example.com"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "WhoisRecord": {
                "registrarName": "ICANN Test Registrar",
                "createdDate": "1995-08-14T04:00:00Z",
                "expiresDate": "2026-08-13T04:00:00Z",
                "nameServers": {"hostNames": ["a.iana-servers.net", "b.iana-servers.net"]},
                "registrant": {"organization": "IANA", "country": "US"}
            }
        })))
        .mount(&server)
        .await;

    let provider = LiveWhoisProvider::builder("test-key")
        .base_url(server.uri())
        .build();

    let record = provider.lookup("example.com").await.unwrap();
    assert_eq!(record.registrar.as_deref(), Some("ICANN Test Registrar"));
    assert_eq!(
        record.name_servers,
        vec!["a.iana-servers.net", "b.iana-servers.net"]
    );
    assert_eq!(record.registrant_org.as_deref(), Some("IANA"));
}

#[tokio::test]
async fn whois_unauthorized_maps_to_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let provider = LiveWhoisProvider::builder("bad-key")
        .base_url(server.uri())
        .build();

    let err = provider.lookup("example.com").await.unwrap_err();
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn security_lookup_maps_analysis_stats() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/domains/evil.example"))
        .and(header("x-apikey", "vt-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"attributes": {
                "last_analysis_stats": {"malicious": 4, "suspicious": 1, "harmless": 60, "undetected": 8},
                "last_analysis_date": 1_700_000_000
            }}
        })))
        .mount(&server)
        .await;

    let provider = LiveSecurityProvider::builder("vt-key")
        .base_url(server.uri())
        .build();

    let record = provider.lookup("evil.example").await.unwrap();
    assert!(record.malicious);
    assert_eq!(record.threats_detected, 5);
    assert_eq!(record.reputation, "malicious");
}

#[tokio::test]
async fn security_server_error_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": {"message": "backend down"}})),
        )
        .mount(&server)
        .await;

    let provider = LiveSecurityProvider::builder("vt-key")
        .base_url(server.uri())
        .build();

    let err = provider.lookup("example.com").await.unwrap_err();
    match err {
        ResearchError::Api { code, message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "backend down");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn doh_resolver_filters_and_cleans_answers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("name", "example.com"))
        .and(query_param("type", "NS"))
        .and(header("Accept", "application/dns-json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Status": 0,
            "Answer": [
                {"name": "example.com", "type": 2, "TTL": 3600, "data": "a.iana-servers.net."},
                {"name": "example.com", "type": 2, "TTL": 3600, "data": "b.iana-servers.net."}
            ]
        })))
        .mount(&server)
        .await;

    let resolver = DohResolver::builder().base_url(server.uri()).build();

    let records = resolver.resolve("example.com", RecordType::Ns).await.unwrap();
    assert_eq!(records, vec!["a.iana-servers.net", "b.iana-servers.net"]);
}

#[tokio::test]
async fn doh_resolver_empty_answer_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Status": 0})))
        .mount(&server)
        .await;

    let resolver = DohResolver::builder().base_url(server.uri()).build();

    let records = resolver.resolve("example.com", RecordType::Mx).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn doh_resolver_times_out_on_slow_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"Status": 0}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let resolver = DohResolver::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(100))
        .build();

    let err = resolver.resolve("example.com", RecordType::A).await.unwrap_err();
    assert!(err.is_transient(), "expected timeout, got {err:?}");
}

#[tokio::test]
async fn abuse_check_maps_provider_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/check"))
        .and(query_param("ipAddress", "203.0.113.9"))
        .and(header("Key", "abuse-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "abuseConfidenceScore": 88,
                "countryCode": "NL",
                "isp": "Bulletproof BV",
                "usageType": "Data Center/Web Hosting/Transit",
                "totalReports": 77,
                "isWhitelisted": false
            }
        })))
        .mount(&server)
        .await;

    let provider = LiveAbuseProvider::builder("abuse-key")
        .base_url(server.uri())
        .build();

    let record = provider.check("203.0.113.9".parse().unwrap()).await.unwrap();
    assert!(record.is_abusive);
    assert_eq!(record.country.as_deref(), Some("NL"));
    assert_eq!(record.total_reports, 77);
}
