//! Link conversion
//!
//! Classifies an input string by platform, extracts the platform-specific
//! identifiers via pattern matching, encodes them, and rewrites the URL into
//! its proxy form. Every conversion is a pure function of the input string
//! and the shared encoding parameters.

mod apple_music;
mod spotify;
mod youtube;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::debug;

use crate::config::EncodingConfig;
use crate::errors::ManybahtError;

/// Coarse lexical URL shape check: "http(s)://" followed by non-whitespace.
/// Intentionally does not validate the URL semantically.
static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+$").expect("invalid URL regex"));

/// Supported platforms, in detection priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Youtube,
    Spotify,
    AppleMusic,
    Unsupported,
}

/// Outcome of a single conversion attempt
///
/// Exactly one of `converted_url` / `error` is populated; the constructors
/// are the only way to build a value, which keeps that invariant honest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionResult {
    fn ok(platform: Platform, converted_url: String) -> Self {
        Self {
            success: true,
            converted_url: Some(converted_url),
            platform: Some(platform),
            error: None,
        }
    }

    fn fail(platform: Option<Platform>, error: &ManybahtError) -> Self {
        Self {
            success: false,
            converted_url: None,
            platform,
            error: Some(error.message().to_string()),
        }
    }
}

/// Stateless link converter over a read-only parameter set
#[derive(Debug, Clone)]
pub struct LinkConverter {
    config: EncodingConfig,
}

impl LinkConverter {
    pub fn new(config: EncodingConfig) -> Self {
        Self { config }
    }

    /// Lexical URL check (whole trimmed string)
    pub fn is_url(&self, input: &str) -> bool {
        URL_REGEX.is_match(input.trim())
    }

    /// Best-effort platform detection by domain fragment.
    ///
    /// Priority order is significant and must stay youtube -> spotify ->
    /// apple music: an input could contain more than one fragment and the
    /// first match wins.
    pub fn detect_platform(&self, input: &str) -> Platform {
        let input = input.trim().to_lowercase();

        if input.contains("youtube") || input.contains("youtu.be") {
            return Platform::Youtube;
        }
        if input.contains("spotify.com") {
            return Platform::Spotify;
        }
        if input.contains("music.apple.com") {
            return Platform::AppleMusic;
        }

        Platform::Unsupported
    }

    /// Convert a single link, returning errors as data
    pub fn convert_link(&self, input: &str) -> ConversionResult {
        if !self.is_url(input) {
            return ConversionResult::fail(
                None,
                &ManybahtError::invalid_input_format("Invalid URL format"),
            );
        }

        let platform = self.detect_platform(input);
        debug!("converting {} link: {}", platform, input);

        let converted = match platform {
            Platform::Youtube => youtube::convert(input, &self.config),
            Platform::Spotify => spotify::convert(input, &self.config),
            Platform::AppleMusic => apple_music::convert(input, &self.config),
            Platform::Unsupported => {
                Err(ManybahtError::unsupported_platform("Unsupported platform"))
            }
        };

        match converted {
            Ok(url) => ConversionResult::ok(platform, url),
            Err(e) => ConversionResult::fail(Some(platform), &e),
        }
    }
}
