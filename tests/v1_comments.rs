/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers;
    use futures::StreamExt;
    use px500::v1::{CommentsRequest, PxError};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const COMMENTS: &str = "/v1/photos/4910421/comments";

    #[tokio::test]
    async fn comments_stop_without_empty_page() {
        let server = MockServer::start().await;
        helpers::mount_page(&server, COMMENTS, 1, helpers::comments_page_body(1, 20)).await;
        helpers::mount_page(&server, COMMENTS, 2, helpers::comments_page_body(2, 7)).await;
        helpers::mount_page(&server, COMMENTS, 3, helpers::comments_page_body(3, 0)).await;

        let client = helpers::mock_client(&server);
        let (pages, _cancel) = client
            .comments_for_photo(&CommentsRequest::for_photo("4910421"))
            .unwrap();
        let pages: Vec<_> = pages.collect().await;

        let page_numbers: Vec<u64> = pages.iter().map(|p| p.as_ref().unwrap().page_number).collect();
        assert_eq!(page_numbers, vec![1, 2]);
        assert_eq!(pages[1].as_ref().unwrap().comments.len(), 7);
        // The empty page was still fetched, just not handed over
        assert_eq!(helpers::requested_pages(&server, COMMENTS).await, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn comments_stop_silently_on_null_comments() {
        let server = MockServer::start().await;
        helpers::mount_page(&server, COMMENTS, 1, helpers::comments_page_body(1, 4)).await;
        helpers::mount_page(&server, COMMENTS, 2, json!({"current_page": 2, "comments": null})).await;

        let client = helpers::mock_client(&server);
        let (pages, _cancel) = client
            .comments_for_photo(&CommentsRequest::for_photo("4910421"))
            .unwrap();
        let pages: Vec<_> = pages.collect().await;

        let page_numbers: Vec<u64> = pages.iter().map(|p| p.as_ref().unwrap().page_number).collect();
        assert_eq!(page_numbers, vec![1]);
        assert_eq!(helpers::requested_pages(&server, COMMENTS).await, vec![1, 2]);
    }

    #[tokio::test]
    async fn comments_send_nested_flag() {
        let server = MockServer::start().await;
        helpers::mount_page(&server, COMMENTS, 1, helpers::comments_page_body(1, 1)).await;
        helpers::mount_page(&server, COMMENTS, 2, helpers::comments_page_body(2, 0)).await;

        let client = helpers::mock_client(&server);
        let request = CommentsRequest {
            nested: true,
            ..CommentsRequest::for_photo("4910421")
        };
        let (pages, _cancel) = client.comments_for_photo(&request).unwrap();
        let comments: Vec<String> = pages.items().map(|c| c.unwrap().body).collect().await;

        assert_eq!(comments, vec!["Comment 1-0".to_string()]);
        let requests = server.received_requests().await.unwrap();
        assert_eq!(helpers::query_value(&requests[0], "nested").as_deref(), Some("true"));
        assert_eq!(
            helpers::query_value(&requests[0], "consumer_key").as_deref(),
            Some(helpers::CONSUMER_KEY)
        );
    }

    #[tokio::test]
    async fn comments_stop_at_max_page() {
        let server = MockServer::start().await;
        for page in 1..=4 {
            helpers::mount_page(&server, COMMENTS, page, helpers::comments_page_body(page, 3)).await;
        }

        let client = helpers::mock_client(&server);
        let request = CommentsRequest {
            page_number: 2,
            max_page_number: 3,
            ..CommentsRequest::for_photo("4910421")
        };
        let (pages, _cancel) = client.comments_for_photo(&request).unwrap();
        let pages: Vec<_> = pages.collect().await;

        let page_numbers: Vec<u64> = pages.iter().map(|p| p.as_ref().unwrap().page_number).collect();
        assert_eq!(page_numbers, vec![2, 3]);
        assert_eq!(helpers::requested_pages(&server, COMMENTS).await, vec![2, 3]);
    }

    #[tokio::test]
    async fn comments_error_is_delivered() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(COMMENTS))
            .respond_with(ResponseTemplate::new(403).set_body_string("{\"error\":\"Forbidden\"}"))
            .mount(&server)
            .await;

        let client = helpers::mock_client(&server);
        let (pages, _cancel) = client
            .comments_for_photo(&CommentsRequest::for_photo("4910421"))
            .unwrap();
        let pages: Vec<_> = pages.collect().await;

        assert_eq!(pages.len(), 1);
        assert!(matches!(&pages[0], Err(PxError::ApiResponse(403, msg)) if msg.contains("Forbidden")));
    }

    #[test]
    fn comments_without_photo_id_are_rejected() {
        let client = px500::v1::Client::new(px500::v1::Creds::from_tokens(
            helpers::CONSUMER_KEY,
            None,
            None,
            None,
        ))
        .unwrap();
        assert!(matches!(
            client.comments_for_photo(&CommentsRequest::default()),
            Err(PxError::EmptyPhotoId())
        ));
        assert!(matches!(
            client.comments_for_photo(&CommentsRequest::for_photo("   ")),
            Err(PxError::EmptyPhotoId())
        ));
    }
}
