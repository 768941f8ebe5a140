/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate px500;

use anyhow::Result;
use dotenvy::dotenv;
use futures::{StreamExt, pin_mut};
use px500::v1::{Client, CommentsRequest, Creds, Feature, ListRequest, Photo};

// Prints the comments of a photo, at most `max_comments` of them
async fn print_comments(client: &Client, photo: &Photo, max_comments: usize) -> Result<()> {
    let request = CommentsRequest {
        nested: true,
        ..CommentsRequest::for_photo(&photo.id.to_string())
    };
    let (pages, cancel) = client.comments_for_photo(&request)?;

    let comments = pages.items();
    pin_mut!(comments);
    let mut seen = 0;
    while let Some(comment) = comments.next().await {
        let comment = comment?;
        let author = comment
            .author
            .as_ref()
            .map(|a| a.username.as_str())
            .unwrap_or("unknown");
        println!("    {}: {} ({} replies)", author, comment.body, comment.replies.len());

        seen += 1;
        if seen >= max_comments {
            // No need for more pages
            cancel.cancel();
            break;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // Read only access only needs the consumer key
    let consumer_key = std::env::var("PX500_CONSUMER_KEY")?;
    let client = Client::new(Creds::from_tokens(&consumer_key, None, None, None))?;

    let request = ListRequest {
        items_per_page: 10,
        max_page_number: 2,
        ..ListRequest::new(Feature::Popular)
    };
    let (mut pages, _cancel) = client.list_photos(&request)?;

    let mut first_photo = None;
    while let Some(page) = pages.next().await {
        let page = page?;
        println!(
            "Page {} of {} ({} photos)",
            page.page_number,
            page.total_pages,
            page.photos.len()
        );
        for photo in page.photos {
            println!("  {}", photo);
            first_photo.get_or_insert(photo);
        }
    }

    if let Some(photo) = first_photo {
        println!("Comments for {}", photo);
        print_comments(&client, &photo, 10).await?;
    }

    Ok(())
}
