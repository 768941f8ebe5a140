/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::PxError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use reqwest::Method;
use sha1::Sha1;
use url::Url;

type HmacSha1 = Hmac<Sha1>;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// Keys needed to sign a request on behalf of a user
#[derive(Clone)]
pub(crate) struct SigningKeys<'a> {
    pub(crate) consumer_key: &'a str,
    pub(crate) consumer_secret: &'a str,
    pub(crate) access_token: &'a str,
    pub(crate) token_secret: &'a str,
}

/// Builds the `Authorization` header value for the request.
pub(crate) fn authorization_header(
    keys: &SigningKeys<'_>,
    method: &Method,
    url: &Url,
) -> Result<String, PxError> {
    let nonce = format!("{:016x}{:016x}", rand::random::<u64>(), rand::random::<u64>());
    let timestamp = chrono::Utc::now().timestamp().to_string();
    authorization_header_with(keys, method, url, &nonce, &timestamp)
}

fn authorization_header_with(
    keys: &SigningKeys<'_>,
    method: &Method,
    url: &Url,
    nonce: &str,
    timestamp: &str,
) -> Result<String, PxError> {
    let mut oauth_params = vec![
        ("oauth_consumer_key", keys.consumer_key.to_string()),
        ("oauth_nonce", nonce.to_string()),
        ("oauth_signature_method", SIGNATURE_METHOD.to_string()),
        ("oauth_timestamp", timestamp.to_string()),
        ("oauth_token", keys.access_token.to_string()),
        ("oauth_version", OAUTH_VERSION.to_string()),
    ];

    let signature = sign(keys, method, url, &oauth_params)?;
    oauth_params.push(("oauth_signature", signature));

    let fields = oauth_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("OAuth {fields}"))
}

fn sign(
    keys: &SigningKeys<'_>,
    method: &Method,
    url: &Url,
    oauth_params: &[(&str, String)],
) -> Result<String, PxError> {
    // Query parameters take part in the signature alongside the oauth ones
    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (urlencoding::encode(&k).into_owned(), urlencoding::encode(&v).into_owned()))
        .chain(
            oauth_params
                .iter()
                .map(|(k, v)| (urlencoding::encode(k).into_owned(), urlencoding::encode(v).into_owned())),
        )
        .collect();
    params.sort();

    let param_string = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut base_url = url.clone();
    base_url.set_query(None);
    base_url.set_fragment(None);

    let base_string = format!(
        "{}&{}&{}",
        method.as_str().to_uppercase(),
        urlencoding::encode(base_url.as_str()),
        urlencoding::encode(&param_string)
    );
    let signing_key = format!(
        "{}&{}",
        urlencoding::encode(keys.consumer_secret),
        urlencoding::encode(keys.token_secret)
    );

    let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
        .map_err(|e| PxError::Auth(e.to_string()))?;
    mac.update(base_string.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod test {
    use super::*;

    // Reference request from the OAuth1 "creating a signature" walkthrough
    fn reference_keys() -> SigningKeys<'static> {
        SigningKeys {
            consumer_key: "xvz1evFS4wEEPTGEFPHBog",
            consumer_secret: "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
            access_token: "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
            token_secret: "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
        }
    }

    fn reference_url() -> Url {
        Url::parse(
            "https://api.twitter.com/1.1/statuses/update.json?include_entities=true&status=Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21",
        )
        .unwrap()
    }

    #[test]
    fn signs_reference_request() {
        let header = authorization_header_with(
            &reference_keys(),
            &Method::POST,
            &reference_url(),
            "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
            "1318622958",
        )
        .unwrap();

        assert!(header.starts_with("OAuth "));
        assert!(header.contains("oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\""));
        assert!(header.contains("oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\""));
    }

    #[test]
    fn fresh_nonce_per_request() {
        let url = reference_url();
        let a = authorization_header(&reference_keys(), &Method::GET, &url).unwrap();
        let b = authorization_header(&reference_keys(), &Method::GET, &url).unwrap();
        assert_ne!(a, b);
    }
}
