/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use px500::v1::{ApiClient, Client, Creds};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub(crate) const CONSUMER_KEY: &str = "test-consumer-key";

#[allow(dead_code)]
pub(crate) fn get_full_auth_tokens() -> anyhow::Result<Creds> {
    let consumer_key = std::env::var("PX500_CONSUMER_KEY")?;
    let consumer_secret = std::env::var("PX500_CONSUMER_SECRET")?;
    let access_token = std::env::var("PX500_ACCESS_TOKEN")?;
    let access_secret = std::env::var("PX500_ACCESS_SECRET")?;

    Ok(Creds::from_tokens(
        &consumer_key,
        Some(&consumer_secret),
        Some(&access_token),
        Some(&access_secret),
    ))
}

#[allow(dead_code)]
pub(crate) fn get_read_only_auth_tokens() -> anyhow::Result<Creds> {
    let consumer_key = std::env::var("PX500_CONSUMER_KEY")?;

    Ok(Creds::from_tokens(&consumer_key, None, None, None))
}

/// Client pointed at the mock server, using a bare consumer key
#[allow(dead_code)]
pub(crate) fn mock_client(server: &MockServer) -> Client {
    mock_client_with_creds(server, Creds::from_tokens(CONSUMER_KEY, None, None, None))
}

#[allow(dead_code)]
pub(crate) fn mock_client_with_creds(server: &MockServer, creds: Creds) -> Client {
    let api_client = ApiClient::with_base_url(creds, &format!("{}/v1", server.uri())).unwrap();
    Client::from_api_client(api_client)
}

/// Photo page body holding `count` photos
#[allow(dead_code)]
pub(crate) fn photo_page_body(page: u64, count: u64) -> Value {
    let photos: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": page * 100 + i,
                "user_id": 1,
                "name": format!("Photo {}-{}", page, i),
                "category": 8,
                "created_at": "2012-02-09T02:27:16-05:00",
                "user": {"id": 1, "username": "tester"}
            })
        })
        .collect();
    json!({
        "feature": "popular",
        "filters": {"category": false, "exclude": false},
        "current_page": page,
        "total_pages": 3,
        "total_items": 30,
        "photos": photos
    })
}

/// Comments page body holding `count` comments
#[allow(dead_code)]
pub(crate) fn comments_page_body(page: u64, count: u64) -> Value {
    let comments: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": page * 100 + i,
                "user_id": 2,
                "to_whom_user_id": 1,
                "body": format!("Comment {}-{}", page, i),
                "created_at": "2013-02-18T09:13:19-05:00",
                "parent_id": null,
                "user": {"id": 2, "username": "commenter"}
            })
        })
        .collect();
    json!({
        "media_type": "photo",
        "current_page": page,
        "total_pages": 3,
        "total_items": 30,
        "comments": comments
    })
}

/// Answers `GET <endpoint>?page=<page>` with the given body
#[allow(dead_code)]
pub(crate) async fn mount_page(server: &MockServer, endpoint: &str, page: u64, body: Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Page numbers asked for on an endpoint, in the order they were requested
#[allow(dead_code)]
pub(crate) async fn requested_pages(server: &MockServer, endpoint: &str) -> Vec<u64> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == endpoint)
        .filter_map(|r| query_value(r, "page"))
        .filter_map(|p| p.parse().ok())
        .collect()
}

#[allow(dead_code)]
pub(crate) fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
