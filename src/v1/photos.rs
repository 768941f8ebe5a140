/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::PxError;
use crate::v1::pagination::{Pagination, join_list, paged_url};
use crate::v1::parsers::{
    from_category, from_empty_str_to_none, from_null_to_default, from_numeric_bool,
};
use crate::v1::streamer::{self, EmptyPageMode, Page, PageStream, StreamOptions};
use crate::v1::{
    Canceler, Category, Client, Comment, Feature, ImageSize, LicenseType, SortOrder, Store, User,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;

// Delay between photo page fetches
const PHOTOS_THROTTLE: Duration = Duration::from_millis(150);

/// Holds information returned for a photo.
///
/// See [500px API Docs](https://github.com/500px/legacy-api-documentation/blob/master/endpoints/photo/GET_photos_id.md)
/// for more details on the individual fields.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Photo {
    #[serde(deserialize_with = "from_null_to_default")]
    pub id: u64,

    #[serde(deserialize_with = "from_null_to_default")]
    pub user_id: u64,

    #[serde(rename = "name", deserialize_with = "from_empty_str_to_none")]
    pub title: Option<String>,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub description: Option<String>,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub camera: Option<String>,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub lens: Option<String>,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub focal_length: Option<String>,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub iso: Option<String>,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub shutter_speed: Option<String>,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub aperture: Option<String>,

    #[serde(rename = "times_viewed", deserialize_with = "from_null_to_default")]
    pub view_count: u64,

    #[serde(deserialize_with = "from_null_to_default")]
    pub rating: f32,

    #[serde(deserialize_with = "from_null_to_default")]
    pub status: i32,

    pub created_at: Option<DateTime<Utc>>,

    #[serde(deserialize_with = "from_category")]
    pub category: Category,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub location: Option<String>,

    #[serde(rename = "privacy", deserialize_with = "from_null_to_default")]
    pub is_private: bool,

    pub latitude: Option<f64>,

    pub longitude: Option<f64>,

    pub taken_at: Option<DateTime<Utc>>,

    #[serde(deserialize_with = "from_null_to_default")]
    pub for_sale: bool,

    #[serde(deserialize_with = "from_null_to_default")]
    pub width: u32,

    #[serde(deserialize_with = "from_null_to_default")]
    pub height: u32,

    #[serde(rename = "votes_count", deserialize_with = "from_null_to_default")]
    pub vote_count: u64,

    #[serde(rename = "favorites_count", deserialize_with = "from_null_to_default")]
    pub favorite_count: u64,

    #[serde(rename = "comments_count", deserialize_with = "from_null_to_default")]
    pub comment_count: u64,

    #[serde(deserialize_with = "from_null_to_default")]
    pub nsfw: bool,

    #[serde(deserialize_with = "from_null_to_default")]
    pub sales_count: u64,

    #[serde(deserialize_with = "from_null_to_default")]
    pub highest_rating: f32,

    pub highest_rating_date: Option<DateTime<Utc>>,

    #[serde(deserialize_with = "from_numeric_bool")]
    pub converted: bool,

    #[serde(deserialize_with = "from_null_to_default")]
    pub images: Vec<PhotoImage>,

    #[serde(rename = "user")]
    pub author: Option<User>,

    #[serde(rename = "galleries_count", deserialize_with = "from_null_to_default")]
    pub gallery_count: u64,

    pub feature: Option<String>,

    #[serde(rename = "store_print", deserialize_with = "from_null_to_default")]
    pub canvas_print: bool,

    #[serde(rename = "store_download", deserialize_with = "from_null_to_default")]
    pub in_download: bool,

    /// Whether the authenticated user has voted on this photo
    #[serde(deserialize_with = "from_null_to_default")]
    pub voted: bool,

    /// Whether the authenticated user has purchased this photo
    #[serde(deserialize_with = "from_null_to_default")]
    pub purchased: bool,

    #[serde(deserialize_with = "from_null_to_default")]
    pub comments: Vec<Comment>,

    #[serde(rename = "editors_choice", deserialize_with = "from_null_to_default")]
    pub featured_in_editors_choice: bool,

    #[serde(deserialize_with = "from_null_to_default")]
    pub tags: Vec<String>,
}

impl std::fmt::Display for Photo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "title: {}, id: {}",
            self.title.as_deref().unwrap_or_default(),
            self.id
        )
    }
}

/// One rendition of a photo
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PhotoImage {
    #[serde(deserialize_with = "from_null_to_default")]
    pub size: u32,
    #[serde(deserialize_with = "from_null_to_default")]
    pub url: String,
    pub https_url: Option<String>,
    pub format: Option<String>,
}

/// One page of a photo listing or search
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct PhotoPage {
    pub feature: Option<String>,

    /// Filters as echoed back by the service
    pub filters: Option<serde_json::Value>,

    #[serde(deserialize_with = "from_null_to_default")]
    pub current_page: u64,

    #[serde(alias = "total_page", deserialize_with = "from_null_to_default")]
    pub total_pages: u64,

    #[serde(deserialize_with = "from_null_to_default")]
    pub total_items: u64,

    #[serde(deserialize_with = "from_null_to_default")]
    pub photos: Vec<Photo>,

    /// Page number this page was requested as
    #[serde(skip)]
    pub page_number: u64,
}

impl Page for PhotoPage {
    type Item = Photo;

    fn item_count(&self) -> usize {
        self.photos.len()
    }

    fn page_number(&self) -> u64 {
        self.page_number
    }

    fn set_page_number(&mut self, page_number: u64) {
        self.page_number = page_number;
    }

    fn into_items(self) -> Vec<Photo> {
        self.photos
    }
}

/// Parameters for listing one of the photo streams.
///
/// `feature` is required. Requests are copied when a stream starts so later
/// changes do not affect a stream already running.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub feature: Option<Feature>,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub only: Option<Category>,
    pub exclude: Option<Category>,
    pub sort: Option<SortOrder>,
    pub image_sizes: Vec<ImageSize>,
    pub include_store: Option<Store>,
    pub tags: Vec<String>,

    /// 1-based page to start at
    pub page_number: i64,
    /// Clamped to 1..=100, defaults to 20
    pub items_per_page: i64,
    /// Last page to fetch, 0 for no limit
    pub max_page_number: u64,
}

impl ListRequest {
    pub fn new(feature: Feature) -> Self {
        Self {
            feature: Some(feature),
            ..Default::default()
        }
    }

    fn query_params(&self, feature: Feature, pagination: &Pagination) -> Vec<(&'static str, String)> {
        let mut params: Vec<(&'static str, String)> = vec![("feature", feature.to_string())];
        if let Some(user_id) = self.user_id.as_ref().filter(|v| !v.is_empty()) {
            params.push(("user_id", user_id.clone()));
        }
        if let Some(username) = self.username.as_ref().filter(|v| !v.is_empty()) {
            params.push(("username", username.clone()));
        }
        if let Some(only) = self.only {
            params.push(("only", only.to_string()));
        }
        if let Some(exclude) = self.exclude {
            params.push(("exclude", exclude.to_string()));
        }
        if let Some(sort) = self.sort {
            params.push(("sort", sort.to_string()));
        }
        if !self.image_sizes.is_empty() {
            params.push(("image_size", join_list(&self.image_sizes)));
        }
        if let Some(store) = self.include_store {
            params.push(("include_store", store.to_string()));
        }
        if !self.tags.is_empty() {
            params.push(("tags", join_list(&self.tags)));
        }
        params.push(("rpp", pagination.items_per_page.to_string()));
        params
    }
}

/// Parameters for searching photos.
///
/// At least one of `term`, `tag` or `tags` must be set.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub term: Option<String>,
    pub tag: Option<String>,
    pub only: Option<Category>,
    pub exclude: Option<Category>,
    pub exclude_nude: bool,
    pub tags: Vec<String>,
    pub user_id: Option<String>,
    pub image_sizes: Vec<ImageSize>,
    pub license_types: Vec<LicenseType>,
    pub sort: Option<SortOrder>,

    /// 1-based page to start at
    pub page_number: i64,
    /// Clamped to 1..=100, defaults to 20
    pub items_per_page: i64,
    /// Last page to fetch, 0 for no limit
    pub max_page_number: u64,
}

impl SearchRequest {
    pub fn for_term(term: &str) -> Self {
        Self {
            term: Some(term.into()),
            ..Default::default()
        }
    }

    pub fn for_tag(tag: &str) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Default::default()
        }
    }

    fn validate(&self) -> Result<(), PxError> {
        let has_term = self.term.as_ref().is_some_and(|v| !v.trim().is_empty());
        let has_tag = self.tag.as_ref().is_some_and(|v| !v.trim().is_empty());
        if has_term || has_tag || !self.tags.is_empty() {
            Ok(())
        } else {
            Err(PxError::EmptySearchFilter())
        }
    }

    fn query_params(&self, pagination: &Pagination) -> Vec<(&'static str, String)> {
        let mut params: Vec<(&'static str, String)> = Vec::new();
        if let Some(term) = self.term.as_ref().filter(|v| !v.is_empty()) {
            params.push(("term", term.clone()));
        }
        if let Some(tag) = self.tag.as_ref().filter(|v| !v.is_empty()) {
            params.push(("tag", tag.clone()));
        }
        if let Some(only) = self.only {
            params.push(("only", only.to_string()));
        }
        if let Some(exclude) = self.exclude {
            params.push(("exclude", exclude.to_string()));
        }
        if self.exclude_nude {
            params.push(("exclude_nude", "true".to_string()));
        }
        if !self.tags.is_empty() {
            params.push(("tags", join_list(&self.tags)));
        }
        if let Some(user_id) = self.user_id.as_ref().filter(|v| !v.is_empty()) {
            params.push(("user_id", user_id.clone()));
        }
        if !self.image_sizes.is_empty() {
            params.push(("image_size", join_list(&self.image_sizes)));
        }
        if !self.license_types.is_empty() {
            params.push(("license_type", join_list(&self.license_types)));
        }
        if let Some(sort) = self.sort {
            params.push(("sort", sort.to_string()));
        }
        params.push(("rpp", pagination.items_per_page.to_string()));
        params
    }
}

/// A photo to upload along with its details
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    /// A random name is used when left blank
    pub filename: String,
    /// Guessed from the filename extension when not set
    pub content_type: Option<String>,
    pub data: Bytes,

    pub name: String,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub tags: Vec<String>,
    pub is_private: bool,
}

impl UploadRequest {
    fn non_blank_filename(&self) -> String {
        let filename = self.filename.trim();
        if filename.is_empty() {
            format!("{:016x}", rand::random::<u64>())
        } else {
            filename.to_string()
        }
    }

    fn content_type_or_guess(&self) -> String {
        if let Some(content_type) = self.content_type.as_ref().filter(|v| !v.trim().is_empty()) {
            return content_type.trim().to_string();
        }
        let extension = self
            .filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            "tif" | "tiff" => "image/tiff",
            "webp" => "image/webp",
            _ => "application/octet-stream",
        }
        .to_string()
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params: Vec<(&'static str, String)> = vec![("name", self.name.clone())];
        if let Some(description) = self.description.as_ref().filter(|v| !v.is_empty()) {
            params.push(("description", description.clone()));
        }
        if let Some(category) = self.category {
            params.push(("category", u8::from(category).to_string()));
        }
        if !self.tags.is_empty() {
            params.push(("tags", join_list(&self.tags)));
        }
        if self.is_private {
            params.push(("privacy", "1".to_string()));
        }
        params
    }
}

// Listing and search share the same paging rules
fn photo_stream_options(pagination: &Pagination, max_page_number: u64) -> StreamOptions {
    StreamOptions {
        start_page: pagination.page_number,
        max_page_number,
        throttle: PHOTOS_THROTTLE,
        on_empty: EmptyPageMode::EmitThenStop,
    }
}

// Expected response for a single photo
#[derive(Deserialize, Debug)]
struct PhotoResponse {
    photo: Option<Photo>,
}

impl Client {
    /// Pages through one of the photo streams.
    ///
    /// Pages arrive in order and the stream ends after the first empty page
    /// (which is still delivered), after `max_page_number`, or on the first error.
    pub fn list_photos(
        &self,
        request: &ListRequest,
    ) -> Result<(PageStream<PhotoPage>, Canceler), PxError> {
        let feature = request.feature.ok_or(PxError::EmptyFeature())?;
        let pagination = Pagination::normalize(request.page_number, request.items_per_page);
        let params = request.query_params(feature, &pagination);
        let endpoint = self.api_client.endpoint("photos")?;

        self.stream_pages(
            photo_stream_options(&pagination, request.max_page_number),
            endpoint,
            params,
        )
    }

    /// Pages through photo search results.
    ///
    /// Same termination rules as [`Client::list_photos`].
    pub fn search_photos(
        &self,
        request: &SearchRequest,
    ) -> Result<(PageStream<PhotoPage>, Canceler), PxError> {
        request.validate()?;
        let pagination = Pagination::normalize(request.page_number, request.items_per_page);
        let params = request.query_params(&pagination);
        let endpoint = self.api_client.endpoint("photos/search")?;

        self.stream_pages(
            photo_stream_options(&pagination, request.max_page_number),
            endpoint,
            params,
        )
    }

    /// Returns information for the specified photo id
    pub async fn photo_by_id(&self, id: &str) -> Result<Photo, PxError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(PxError::EmptyPhotoId());
        }
        let req_url = self
            .api_client
            .endpoint(&format!("photos/{}", urlencoding::encode(id)))?;
        self.api_client
            .get::<PhotoResponse>(req_url)
            .await?
            .photo
            .ok_or(PxError::ResponseMissing())
    }

    /// Uploads a photo and returns the created photo information
    pub async fn upload_photo(&self, request: UploadRequest) -> Result<Photo, PxError> {
        if request.data.is_empty() {
            return Err(PxError::EmptyUploadBody());
        }

        let mut req_url = self.api_client.endpoint("photos/upload")?;
        req_url
            .query_pairs_mut()
            .extend_pairs(request.query_params().iter().map(|(k, v)| (*k, v.as_str())));

        let content_type = request.content_type_or_guess();
        let file = Part::bytes(request.data.to_vec())
            .file_name(request.non_blank_filename())
            .mime_str(&content_type)?;
        let form = Form::new()
            .part("file", file)
            .text("Content-Type", content_type);

        self.api_client
            .post_form::<PhotoResponse>(req_url, form)
            .await?
            .photo
            .ok_or(PxError::ResponseMissing())
    }

    // Binds the page streamer to one endpoint
    pub(crate) fn stream_pages<P: Page>(
        &self,
        options: StreamOptions,
        endpoint: url::Url,
        params: Vec<(&'static str, String)>,
    ) -> Result<(PageStream<P>, Canceler), PxError> {
        let api_client = self.api_client.clone();
        streamer::start(options, move |page_number| {
            let api_client = api_client.clone();
            let req_url = paged_url(&endpoint, &params, page_number);
            async move {
                api_client
                    .send(reqwest::Method::GET, req_url, None)
                    .await
                    .map(|(body, _)| body)
            }
        })
    }
}
