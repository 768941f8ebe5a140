/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum PxError {
    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Authorization error. {0}")]
    Auth(String),

    #[error("Expecting a non-empty feature")]
    EmptyFeature(),

    #[error("Expecting a non-empty photo id")]
    EmptyPhotoId(),

    #[error("Expecting at least one of term, tag or tags to search by")]
    EmptySearchFilter(),

    #[error("Expecting a non-empty upload body")]
    EmptyUploadBody(),

    #[error("Page streams must be started from within a Tokio runtime")]
    NoRuntime(),

    #[error("Expected response missing")]
    ResponseMissing(),

    #[error("API Response was error: {0}, msg: {1}")]
    ApiResponse(u16, String),

    #[error("API Response is a too many requests error. Retry after {0} seconds")]
    ApiResponseTooManyRequests(u64),

    #[error("API Response is malformed: {0:?}")]
    ApiResponseMalformed(serde_json::Error),
}
