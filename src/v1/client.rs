/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::PxError;
use crate::v1::{ApiClient, Creds};
use std::sync::Arc;

/// Entry point for talking to the 500px API.
///
/// Cheap to clone. Every page stream started from a client shares its
/// underlying [`ApiClient`], which is fixed once the client is built.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) api_client: Arc<ApiClient>,
}

impl Client {
    /// Creates a client for the public API
    pub fn new(creds: Creds) -> Result<Self, PxError> {
        Ok(Self::from_api_client(ApiClient::new(creds)?))
    }

    /// Creates a client around an already configured [`ApiClient`]
    pub fn from_api_client(api_client: ApiClient) -> Self {
        Self {
            api_client: Arc::new(api_client),
        }
    }

    /// Lower level access for requests this library doesn't wrap
    pub fn api_client(&self) -> &ApiClient {
        &self.api_client
    }
}
