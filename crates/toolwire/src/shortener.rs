//! Simulated URL shortener.

use md5::{Digest, Md5};

use crate::types::ShortUrl;

pub const SHORT_URL_BASE: &str = "https://short.ly";
const SHORT_CODE_LEN: usize = 8;

/// Derive a stable short code for `url`: the first hex digits of its MD5 digest.
pub fn shorten_url(url: &str) -> ShortUrl {
    let mut short_code = hex::encode(Md5::digest(url.as_bytes()));
    short_code.truncate(SHORT_CODE_LEN);

    ShortUrl {
        original_url: url.to_string(),
        short_url: format!("{SHORT_URL_BASE}/{short_code}"),
        short_code,
    }
}
