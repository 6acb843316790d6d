//! Spotify link conversion
//!
//! Spotify URLs follow a flat `open.spotify.com/<type>/<id>` shape, so the
//! output is assembled from a fixed base-URL table rather than rewritten in
//! place. The `wrapped` type carries a secondary share id which takes
//! precedence over the primary id.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::EncodingConfig;
use crate::errors::{ManybahtError, Result};
use crate::services::encoder;

/// The type segment is captured lexically; whether it is actually supported
/// is decided against the base-URL table afterwards.
static SPOTIFY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https://open\.spotify\.com/([a-zA-Z]+)(?:/([a-zA-Z0-9-]+))?(?:/([a-zA-Z0-9-]+))?")
        .expect("invalid Spotify regex")
});

/// Proxy base URLs per supported type
fn base_url(url_type: &str) -> Option<&'static str> {
    match url_type {
        "track" => Some("https://sp.laibaht.ovh/track/"),
        "album" => Some("https://sp.laibaht.ovh/album/"),
        "artist" => Some("https://sp.laibaht.ovh/artist/"),
        "playlist" => Some("https://sp.laibaht.ovh/playlist/"),
        "wrapped" => Some("https://sp.laibaht.ovh/wrapped/"),
        _ => None,
    }
}

pub(super) fn convert(input: &str, config: &EncodingConfig) -> Result<String> {
    let captures = SPOTIFY_REGEX
        .captures(input)
        .ok_or_else(|| ManybahtError::malformed_platform_url("Invalid Spotify URL format"))?;

    let url_type = captures.get(1).map(|m| m.as_str()).unwrap_or("");
    let primary_id = captures.get(2).map(|m| m.as_str()).unwrap_or("");
    let secondary_id = captures.get(3).map(|m| m.as_str()).unwrap_or("");

    if url_type.is_empty() || primary_id.is_empty() {
        return Err(ManybahtError::malformed_platform_url(
            "Missing required Spotify URL components",
        ));
    }

    let base = base_url(url_type).ok_or_else(|| {
        ManybahtError::unsupported_variant(format!("Unsupported Spotify URL type: {}", url_type))
    })?;

    // wrapped 链接优先使用次级 id，去掉 share- 前缀
    let id_to_encode = if !secondary_id.is_empty() {
        secondary_id.strip_prefix("share-").unwrap_or(secondary_id)
    } else {
        primary_id
    };

    Ok(format!(
        "{}{}",
        base,
        encoder::encode(id_to_encode.as_bytes(), config)
    ))
}
