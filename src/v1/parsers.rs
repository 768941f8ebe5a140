/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::Category;
use serde::Deserialize;

// Parses category ids, unknown or missing ones become Uncategorized
pub fn from_category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let id: Option<u64> = Deserialize::deserialize(deserializer)?;
    Ok(id
        .and_then(|id| u8::try_from(id).ok())
        .and_then(|id| Category::try_from(id).ok())
        .unwrap_or(Category::Uncategorized))
}

// Parses strings that may be null or "" and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

// Some flags come back as 0/1 instead of true/false
pub fn from_numeric_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumericBool {
        Bool(bool),
        Number(i64),
    }

    let v: Option<NumericBool> = Deserialize::deserialize(deserializer)?;
    Ok(match v {
        Some(NumericBool::Bool(b)) => b,
        Some(NumericBool::Number(n)) => n != 0,
        None => false,
    })
}

// Treats null like a missing field and falls back to the default
pub fn from_null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let v: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(v.unwrap_or_default())
}
