/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use url::Url;

/// Number of items per page used when none (or a non-positive count) is asked for
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 20;

/// Most items per page the service will hand back
pub const MAX_ITEMS_PER_PAGE: u32 = 100;

/// Paging values after they have been brought into range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page to start at
    pub page_number: u64,
    pub items_per_page: u32,
}

impl Pagination {
    pub fn normalize(page_number: i64, items_per_page: i64) -> Self {
        Self {
            page_number: normalize_page_number(page_number),
            items_per_page: normalize_items_per_page(items_per_page),
        }
    }
}

/// Page numbers are 1-based, anything lower starts at the first page
pub fn normalize_page_number(page_number: i64) -> u64 {
    page_number.max(1) as u64
}

pub fn normalize_items_per_page(items_per_page: i64) -> u32 {
    if items_per_page <= 0 {
        DEFAULT_ITEMS_PER_PAGE
    } else if items_per_page >= MAX_ITEMS_PER_PAGE as i64 {
        MAX_ITEMS_PER_PAGE
    } else {
        items_per_page as u32
    }
}

/// Builds the url for one page of an endpoint from its filter parameters
pub(crate) fn paged_url(endpoint: &Url, params: &[(&'static str, String)], page_number: u64) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
        .append_pair("page", &page_number.to_string());
    url
}

/// Joins list filters the way the service expects them
pub(crate) fn join_list<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
