/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

// These talk to the real service and need PX500_* credentials in the environment
#[cfg(test)]
mod test {
    use crate::helpers;
    use dotenvy::dotenv;
    use futures::StreamExt;
    use px500::v1::{Client, CommentsRequest, Feature, ListRequest, SearchRequest};

    #[ignore]
    #[tokio::test]
    async fn list_popular() {
        dotenv().ok();
        let _ = env_logger::builder().is_test(true).try_init();
        let creds = helpers::get_read_only_auth_tokens().unwrap();
        let client = Client::new(creds).unwrap();
        let request = ListRequest {
            items_per_page: 5,
            max_page_number: 2,
            ..ListRequest::new(Feature::Popular)
        };

        let (pages, _cancel) = client.list_photos(&request).unwrap();
        let pages: Vec<_> = pages.collect().await;
        assert_eq!(pages.len(), 2);
        for page in pages {
            let page = page.unwrap();
            println!("Page {}: {} photos", page.page_number, page.photos.len());
        }
    }

    #[ignore]
    #[tokio::test]
    async fn search_and_comments() {
        dotenv().ok();
        let _ = env_logger::builder().is_test(true).try_init();
        let creds = helpers::get_read_only_auth_tokens().unwrap();
        let client = Client::new(creds).unwrap();
        let request = SearchRequest {
            items_per_page: 3,
            max_page_number: 1,
            ..SearchRequest::for_term("lighthouse")
        };

        let (mut pages, _cancel) = client.search_photos(&request).unwrap();
        let page = pages.next().await.unwrap().unwrap();
        let photo = page.photos.first().unwrap();
        println!("Photo info: {:?}", photo);

        let (comments, cancel) = client
            .comments_for_photo(&CommentsRequest::for_photo(&photo.id.to_string()))
            .unwrap();
        let comments: Vec<_> = comments.items().take(5).collect().await;
        cancel.cancel();
        for comment in comments {
            println!("Comment: {:?}", comment.unwrap());
        }
    }

    #[ignore]
    #[tokio::test]
    async fn signed_photo_by_id() {
        dotenv().ok();
        let creds = helpers::get_full_auth_tokens().unwrap();
        let client = Client::new(creds).unwrap();
        let photo = client.photo_by_id("4910421").await.unwrap();
        println!("Photo info: {:?}", photo);
    }
}
