/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::PxError;
use crate::v1::pagination::normalize_page_number;
use crate::v1::parsers::{from_empty_str_to_none, from_null_to_default};
use crate::v1::streamer::{EmptyPageMode, Page, PageStream, StreamOptions};
use crate::v1::{Canceler, Client, User};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;

// Delay between comment page fetches
const COMMENTS_THROTTLE: Duration = Duration::from_millis(200);

/// A comment left on a photo
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "from_null_to_default")]
    pub id: u64,

    #[serde(deserialize_with = "from_null_to_default")]
    pub body: String,

    #[serde(rename = "user")]
    pub author: Option<User>,

    #[serde(rename = "user_id", deserialize_with = "from_null_to_default")]
    pub author_id: u64,

    #[serde(deserialize_with = "from_null_to_default")]
    pub to_whom_user_id: u64,

    pub created_at: Option<DateTime<Utc>>,

    pub parent_id: Option<u64>,

    #[serde(deserialize_with = "from_null_to_default")]
    pub flagged: bool,

    #[serde(deserialize_with = "from_null_to_default")]
    pub rating: u64,

    #[serde(deserialize_with = "from_null_to_default")]
    pub voted: bool,

    /// Only filled in when nested comments were asked for
    #[serde(deserialize_with = "from_null_to_default")]
    pub replies: Vec<Comment>,
}

/// One page of comments for a photo
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct CommentsPage {
    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub media_type: Option<String>,

    #[serde(deserialize_with = "from_null_to_default")]
    pub current_page: u64,

    #[serde(deserialize_with = "from_null_to_default")]
    pub total_pages: u64,

    #[serde(deserialize_with = "from_null_to_default")]
    pub total_items: u64,

    #[serde(deserialize_with = "from_null_to_default")]
    pub comments: Vec<Comment>,

    /// Page number this page was requested as
    #[serde(skip)]
    pub page_number: u64,
}

impl Page for CommentsPage {
    type Item = Comment;

    fn item_count(&self) -> usize {
        self.comments.len()
    }

    fn page_number(&self) -> u64 {
        self.page_number
    }

    fn set_page_number(&mut self, page_number: u64) {
        self.page_number = page_number;
    }

    fn into_items(self) -> Vec<Comment> {
        self.comments
    }
}

/// Parameters for retrieving the comments on a photo
#[derive(Debug, Clone, Default)]
pub struct CommentsRequest {
    pub photo_id: String,

    /// Include replies nested under the comment they answer
    pub nested: bool,

    /// 1-based page to start at
    pub page_number: i64,
    /// Last page to fetch, 0 for no limit
    pub max_page_number: u64,
}

impl CommentsRequest {
    pub fn for_photo(photo_id: &str) -> Self {
        Self {
            photo_id: photo_id.into(),
            ..Default::default()
        }
    }

    fn stream_options(&self) -> StreamOptions {
        StreamOptions {
            start_page: normalize_page_number(self.page_number),
            max_page_number: self.max_page_number,
            throttle: COMMENTS_THROTTLE,
            on_empty: EmptyPageMode::StopSilently,
        }
    }
}

impl Client {
    /// Pages through the comments on a photo.
    ///
    /// Unlike the photo streams, the first empty page is not delivered: the
    /// stream just ends.
    pub fn comments_for_photo(
        &self,
        request: &CommentsRequest,
    ) -> Result<(PageStream<CommentsPage>, Canceler), PxError> {
        let photo_id = request.photo_id.trim();
        if photo_id.is_empty() {
            return Err(PxError::EmptyPhotoId());
        }

        let endpoint = self
            .api_client
            .endpoint(&format!("photos/{}/comments", urlencoding::encode(photo_id)))?;
        let params = vec![("nested", request.nested.to_string())];

        self.stream_pages(request.stream_options(), endpoint, params)
    }
}
