//! YouTube link conversion
//!
//! YouTube URLs come in more shapes than the other platforms: live / embed /
//! shorts paths, a music subdomain, mobile and bare domains, and the youtu.be
//! short link with no query string of its own. Everything is first funneled
//! into the canonical `watch?v=` form on the proxy domain, then the `v` and
//! `list` identifiers are encoded in place.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::config::EncodingConfig;
use crate::errors::{ManybahtError, Result};
use crate::services::encoder;

/// live / embed / shorts variants carry the video id as the trailing path
/// segment instead of a `v` parameter
static VARIANT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https://www\.youtube\.com/(?:live|embed|shorts)/([a-zA-Z0-9_-]+)")
        .expect("invalid YouTube variant regex")
});

/// Domain rewrites, most specific first. The youtu.be short link needs the
/// `watch?v=` prefix injected since it has no query string natively.
const DOMAIN_REWRITES: &[(&str, &str)] = &[
    ("music.youtube.com/", "play.laibaht.ovh/"),
    ("www.youtube.com/", "play.laibaht.ovh/"),
    ("m.youtube.com/", "play.laibaht.ovh/"),
    ("youtube.com/", "play.laibaht.ovh/"),
    ("youtu.be/", "play.laibaht.ovh/watch?v="),
];

pub(super) fn convert(input: &str, config: &EncodingConfig) -> Result<String> {
    let cleaned = clean_url(input);

    let mut url = Url::parse(&cleaned)
        .map_err(|_| ManybahtError::malformed_platform_url("Invalid YouTube URL format"))?;

    // Drop tracking / timestamp parameters, encode the id parameters
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "si" && k != "t")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    for (key, value) in pairs.iter_mut() {
        if (key == "v" || key == "list") && !value.is_empty() {
            *value = encoder::encode(value.as_bytes(), config);
        }
    }

    // Canonical query serialization: sorted key order
    pairs.sort();
    if pairs.is_empty() {
        url.set_query(None);
    } else {
        let mut serializer = url.query_pairs_mut();
        serializer.clear();
        serializer.extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        drop(serializer);
    }

    Ok(url.to_string())
}

/// Normalize the many YouTube URL shapes into `play.laibaht.ovh/watch?v=...`.
///
/// The `?si=` / `?t=` / `?list=` substitutions repair the first query
/// separator that the youtu.be rewrite consumes. They are deliberately this
/// narrow; canonical parsing downstream depends on exactly these repairs.
fn clean_url(input: &str) -> String {
    let mut result = input.trim().to_string();

    // live/embed/shorts -> standard watch form (rest of the URL discarded)
    if let Some(captures) = VARIANT_REGEX.captures(&result) {
        result = format!("https://www.youtube.com/watch?v={}", &captures[1]);
    }

    for (old, new) in DOMAIN_REWRITES {
        result = result.replacen(old, new, 1);
    }

    result = result.replacen("?si=", "&si=", 1);
    result = result.replacen("?t=", "&t=", 1);
    if !result.contains("playlist?list=") {
        result = result.replacen("?list=", "&list=", 1);
    }

    result
}
