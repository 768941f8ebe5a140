/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # 500px
//!
//! This library was created for working with the 500px APIv1 interface.
//!
//! For further details on the Rest API refer to the [500px API Docs](https://github.com/500px/legacy-api-documentation)
//!
//! ## Features
//!
//! - Photo streams (popular, upcoming, editors, ...) paged as a stream
//! - Photo search paged as a stream
//! - Photo comments paged as a stream
//! - Photo lookup by id
//! - Photo upload
//! - Lower level interface for handling the raw communication
//!
//! Paged results are fetched by a background task, one page at a time, with a
//! short pause between pages to stay within the API rate limits. The next page is
//! only fetched once the previous one has been taken from the stream. Every
//! stream comes with a [`v1::Canceler`] to stop it early.
//!
//! *With a full set of OAuth1 tokens requests are signed. Getting the Access
//! Token/Secret is left up to the consumer of this library. A consumer key on
//! its own gives read-only access.*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! px500 = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire a consumer key from 500px prior to using the API**
//!
//! ```rust,no_run
//! use px500::v1::{Client, Creds, Feature, ListRequest, PxError};
//! use futures::StreamExt;
//!
//! async fn print_popular(consumer_key: &str) -> Result<(), PxError> {
//!     let client = Client::new(Creds::from_tokens(consumer_key, None, None, None))?;
//!
//!     let request = ListRequest {
//!         items_per_page: 10,
//!         max_page_number: 2,
//!         ..ListRequest::new(Feature::Popular)
//!     };
//!     let (mut pages, cancel) = client.list_photos(&request)?;
//!
//!     while let Some(page) = pages.next().await {
//!         let page = page?;
//!         for photo in &page.photos {
//!             println!("page {}: {}", page.page_number, photo);
//!         }
//!         if page.photos.iter().any(|p| p.nsfw) {
//!             // Seen enough
//!             cancel.cancel();
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod v1;
