//! Integration tests using a mock HTTP server
//!
//! Exercises the full end-to-end flow: filter validation, request
//! shaping, pagination following and quota reporting through the public
//! client surface.

use postcode_nl::{
    blocking, AddressFilter, CallOptions, ClientConfig, PostcodeClient, PostcodeFilter, Quota,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn client_for(server: &MockServer) -> PostcodeClient {
    PostcodeClient::with_config(
        ClientConfig::builder("abcdefghijklmnopQRSTUVWXYZ123")
            .base_url(server.uri())
            .build(),
    )
}

fn address_page(ids: &[&str], self_href: &str, next_href: Option<&str>) -> serde_json::Value {
    let entries: Vec<_> = ids.iter().map(|id| json!({ "id": id })).collect();
    let mut links = json!({ "self": { "href": self_href } });
    if let Some(next) = next_href {
        links["next"] = json!({ "href": next });
    }
    json!({ "_embedded": { "addresses": entries }, "_links": links })
}

#[tokio::test]
async fn paginated_address_listing_end_to_end() {
    init_tracing();
    let server = MockServer::start().await;
    let uri = server.uri();

    let page1 = address_page(
        &["a1", "a2"],
        &format!("{uri}/addresses?postcode=1234AB"),
        Some(&format!("{uri}/addresses-page2")),
    );
    let page2 = address_page(
        &["a3"],
        &format!("{uri}/addresses-page2"),
        Some(&format!("{uri}/addresses-page3")),
    );
    let page3 = address_page(&["a4", "a5"], &format!("{uri}/addresses-page3"), None);

    Mock::given(method("GET"))
        .and(path("/addresses"))
        .and(header("X-Api-Key", "abcdefghijklmnopQRSTUVWXYZ123"))
        .and(query_param("postcode", "1234AB"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-ratelimit-limit", "5000")
                .insert_header("x-ratelimit-remaining", "4999")
                .set_body_json(&page1),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/addresses-page2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-ratelimit-limit", "5000")
                .insert_header("x-ratelimit-remaining", "4998")
                .set_body_json(&page2),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/addresses-page3"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-ratelimit-limit", "5000")
                .insert_header("x-ratelimit-remaining", "4997")
                .set_body_json(&page3),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filter = AddressFilter::new().postcode("1234AB");
    let options = CallOptions::new().follow_next(true).return_quota(true);

    let lookup = client.get_addresses(&filter, &options).await.unwrap();
    let result = lookup.result.unwrap();

    let ids: Vec<_> = result["_embedded"]["addresses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["a1", "a2", "a3", "a4", "a5"]);
    assert_eq!(
        result["_links"]["self"]["href"],
        format!("{uri}/addresses?postcode=1234AB")
    );
    assert_eq!(
        lookup.quota,
        Some(Quota {
            limit: 5000,
            remaining: 4997
        })
    );
}

#[tokio::test]
async fn postcode_listing_without_pagination() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/postcodes"))
        .and(query_param("postcodeArea", "1234"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_embedded": { "postcodes": [{ "postcode": "1234AB" }] },
            "_links": {
                "self": { "href": "https://api.example.com/postcodes?postcodeArea=1234" },
                "next": { "href": "https://api.example.com/postcodes?page=2" }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filter = PostcodeFilter::new().postcode_area("1234");

    // Without follow_next the next link is left unfollowed
    let lookup = client
        .get_postcodes(&filter, &CallOptions::new())
        .await
        .unwrap();
    let result = lookup.result.unwrap();
    assert_eq!(result["_embedded"]["postcodes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn validation_failures_issue_no_requests() {
    init_tracing();
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .get_addresses(
            &AddressFilter::new().postcode("1234 AB"),
            &CallOptions::new(),
        )
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = client
        .get_single_postcode("12AB34", &CallOptions::new())
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = client
        .get_postcode_area("123", &CallOptions::new())
        .await
        .unwrap_err();
    assert!(err.is_validation());

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn api_errors_carry_the_remote_message() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/postcodes/1234AB"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": "Access denied to API"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get_single_postcode("1234AB", &CallOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "Access denied to API");
}

#[test]
fn blocking_adapter_end_to_end() {
    init_tracing();
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/postcodes/1234AB"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "postcode": "1234AB",
                "city": "Ons Dorp"
            })))
            .expect(1)
            .mount(&server)
            .await;
        server
    });

    let client = blocking::PostcodeClient::with_config(
        ClientConfig::builder("abcdefghijklmnopQRSTUVWXYZ123")
            .base_url(server.uri())
            .build(),
    )
    .unwrap();

    let lookup = client
        .get_single_postcode("1234AB", &CallOptions::new())
        .unwrap();
    assert_eq!(lookup.result.unwrap()["city"], "Ons Dorp");
}
