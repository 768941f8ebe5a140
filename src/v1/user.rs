/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::parsers::{from_empty_str_to_none, from_null_to_default};
use serde::Deserialize;

/// Short form of a user as embedded in photos and comments.
///
/// See [500px API Docs](https://github.com/500px/legacy-api-documentation/blob/master/basics/formats_and_terms.md#short-format-1)
/// for more details on the individual fields.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "from_null_to_default")]
    pub id: u64,

    #[serde(deserialize_with = "from_null_to_default")]
    pub username: String,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub firstname: Option<String>,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub lastname: Option<String>,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub city: Option<String>,

    #[serde(deserialize_with = "from_empty_str_to_none")]
    pub country: Option<String>,

    #[serde(rename = "userpic_url", deserialize_with = "from_empty_str_to_none")]
    pub profile_picture_url: Option<String>,

    #[serde(deserialize_with = "from_null_to_default")]
    pub upgrade_status: i32,

    #[serde(rename = "followers_count", deserialize_with = "from_null_to_default")]
    pub follower_count: u64,

    #[serde(deserialize_with = "from_null_to_default")]
    pub affection: u64,
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "username: {}, id: {}", self.username, self.id)
    }
}
