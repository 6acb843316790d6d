//! Apple Music link conversion
//!
//! Album URLs that carry a `?i=<songID>` disambiguation parameter are really
//! song links, so they are rewritten to the canonical song form first: the
//! `album` path segment becomes `song`, the parameter is stripped, and the
//! trailing album id is replaced by the song id. Extraction then always
//! reads the primary identifier from the last path segment.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::EncodingConfig;
use crate::errors::{ManybahtError, Result};
use crate::services::encoder;

static APPLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"https://music\.apple\.com/(?P<region>[a-z]{2})/(?P<type>song|album|playlist|artist)/(?P<name>[^/]+)/(?P<id>[a-zA-Z0-9.]+)",
    )
    .expect("invalid Apple Music regex")
});

static SONG_PARAM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\?i=(\d+)").expect("invalid song parameter regex"));

static TRAILING_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\d+$").expect("invalid trailing id regex"));

pub(super) fn convert(input: &str, config: &EncodingConfig) -> Result<String> {
    let processed = normalize_song_url(input);

    let captures = APPLE_REGEX
        .captures(&processed)
        .ok_or_else(|| ManybahtError::malformed_platform_url("Invalid Apple Music URL format"))?;

    let region = &captures["region"];
    let url_type = &captures["type"];
    // name 段仅用于匹配，不参与编码
    let id = &captures["id"];

    Ok(format!(
        "https://ap.laibaht.ovh/{}/{}/{}",
        region,
        url_type,
        encoder::encode(id.as_bytes(), config)
    ))
}

/// Rewrite an `album/...?i=<songID>` URL into its canonical song form
fn normalize_song_url(input: &str) -> String {
    if !input.contains("?i=") {
        return input.to_string();
    }

    let mut result = input.replacen("/album/", "/song/", 1);
    if let Some(captures) = SONG_PARAM_REGEX.captures(&result) {
        let song_id = captures[1].to_string();
        result = SONG_PARAM_REGEX.replace_all(&result, "").into_owned();
        // 末尾的专辑 id 换成歌曲 id
        result = TRAILING_ID_REGEX
            .replace(&result, format!("/{}", song_id).as_str())
            .into_owned();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EncodingConfig {
        EncodingConfig::new("159020092212146830289645291", "65537").unwrap()
    }

    #[test]
    fn test_normalize_album_with_song_parameter() {
        assert_eq!(
            normalize_song_url("https://music.apple.com/us/album/some-album/12345?i=67890"),
            "https://music.apple.com/us/song/some-album/67890"
        );
    }

    #[test]
    fn test_normalize_leaves_plain_album_alone() {
        let input = "https://music.apple.com/us/album/some-album/12345";
        assert_eq!(normalize_song_url(input), input);
    }

    #[test]
    fn test_convert_song_disambiguation() {
        let converted = convert(
            "https://music.apple.com/us/album/some-album/12345?i=67890",
            &config(),
        )
        .unwrap();
        let expected = encoder::encode(b"67890", &config());
        assert_eq!(
            converted,
            format!("https://ap.laibaht.ovh/us/song/{}", expected)
        );
    }

    #[test]
    fn test_convert_playlist() {
        let converted = convert(
            "https://music.apple.com/de/playlist/my-mix/pl.abc123",
            &config(),
        )
        .unwrap();
        let expected = encoder::encode(b"pl.abc123", &config());
        assert_eq!(
            converted,
            format!("https://ap.laibaht.ovh/de/playlist/{}", expected)
        );
    }

    #[test]
    fn test_convert_rejects_unknown_shape() {
        let err = convert("https://music.apple.com/us/radio/show", &config()).unwrap_err();
        assert_eq!(err.message(), "Invalid Apple Music URL format");
    }
}
