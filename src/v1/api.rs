/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::PxError;
use crate::v1::oauth1::{self, SigningKeys};
use bytes::Bytes;
use log::{debug, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, RETRY_AFTER};
use reqwest::multipart::Form;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

// Root 500px API
pub const API_ORIGIN: &str = "https://api.500px.com/v1/";

/// Directly communicates with the API.
#[derive(Clone)]
pub struct ApiClient {
    creds: Creds,
    base_url: Url,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new client talking to the public 500px API
    pub fn new(creds: Creds) -> Result<Self, PxError> {
        Self::with_base_url(creds, API_ORIGIN)
    }

    /// Creates a new client rooted at a different API location (e.g. a mock server)
    pub fn with_base_url(creds: Creds, base_url: &str) -> Result<Self, PxError> {
        // Url::join drops the last path segment unless it ends with a slash
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };
        Ok(Self {
            creds,
            base_url,
            https_client: reqwest::Client::new(),
        })
    }

    /// Replaces the underlying HTTP client
    pub fn with_https_client(mut self, https_client: reqwest::Client) -> Self {
        self.https_client = https_client;
        self
    }

    /// Resolves an API path (e.g. `photos/search`) against the base url
    pub fn endpoint(&self, path: &str) -> Result<Url, PxError> {
        Ok(self.base_url.join(path)?)
    }

    /// Sends a request with the credentials attached and returns the raw body.
    ///
    /// Any non-success status is turned into an error. The message is taken from
    /// the body when there is one, otherwise from the status line.
    pub async fn send(
        &self,
        method: Method,
        url: Url,
        form: Option<Form>,
    ) -> Result<(Bytes, HeaderMap), PxError> {
        let mut url = url;
        let authorization = match self.creds.signing_keys() {
            Some(keys) => Some(oauth1::authorization_header(&keys, &method, &url)?),
            None => {
                url.query_pairs_mut()
                    .append_pair("consumer_key", &self.creds.consumer_key);
                None
            }
        };

        debug!("{} {}", method, url.path());
        let mut req = self
            .https_client
            .request(method, url)
            .header(ACCEPT, "application/json");
        if let Some(authorization) = authorization {
            req = req.header(AUTHORIZATION, authorization);
        }
        if let Some(form) = form {
            req = req.multipart(form);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;

        if !status.is_success() {
            warn!("Api response status: {}", status);
            if status == StatusCode::TOO_MANY_REQUESTS {
                if let Some(secs) = retry_after_secs(&headers) {
                    return Err(PxError::ApiResponseTooManyRequests(secs));
                }
            }
            let msg = if body.is_empty() {
                status.to_string()
            } else {
                String::from_utf8_lossy(&body).into_owned()
            };
            return Err(PxError::ApiResponse(status.as_u16(), msg));
        }

        Ok((body, headers))
    }

    /// Performs a get request and decodes the JSON body
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, PxError> {
        let (body, _) = self.send(Method::GET, url, None).await?;
        decode(&body)
    }

    /// Performs a multipart post request and decodes the JSON body
    pub async fn post_form<T: DeserializeOwned>(&self, url: Url, form: Form) -> Result<T, PxError> {
        let (body, _) = self.send(Method::POST, url, Some(form)).await?;
        decode(&body)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, PxError> {
    serde_json::from_slice::<T>(body).map_err(PxError::ApiResponseMalformed)
}

fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
}

/// Credentials used to access the API.
///
/// A consumer key alone gives read-only access. Adding the consumer secret and
/// an access token/secret pair lets requests be signed on behalf of that user.
#[derive(Default, Clone)]
pub struct Creds {
    consumer_key: String,
    consumer_secret: Option<String>,
    access_token: Option<String>,
    token_secret: Option<String>,
}

impl Creds {
    pub fn from_tokens(
        consumer_key: &str,
        consumer_secret: Option<&str>,
        access_token: Option<&str>,
        token_secret: Option<&str>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.map(Into::into),
            access_token: access_token.map(Into::into),
            token_secret: token_secret.map(Into::into),
        }
    }

    /// True if requests will be OAuth1 signed
    pub fn can_sign(&self) -> bool {
        self.signing_keys().is_some()
    }

    fn signing_keys(&self) -> Option<SigningKeys<'_>> {
        Some(SigningKeys {
            consumer_key: &self.consumer_key,
            consumer_secret: self.consumer_secret.as_deref()?,
            access_token: self.access_token.as_deref()?,
            token_secret: self.token_secret.as_deref()?,
        })
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("consumer_key", &"xxx")
            .field("consumer_secret", &"xxx")
            .field("access_token", &"xxx")
            .field("token_secret", &"xxx")
            .finish()
    }
}
