//! Manybaht - a media link obfuscation engine
//!
//! This library takes an arbitrary input string, decides whether it is a URL,
//! identifies which supported media platform it belongs to, extracts the
//! platform-specific identifier(s), runs them through a deterministic chunked
//! modular-exponentiation encoding, and rewrites the URL into the matching
//! proxy form.
//!
//! # Architecture
//! - `services::encoder`: identifier encoding (chunked modpow + URL-safe base64)
//! - `services::converter`: platform detection and per-platform URL rewriting
//! - `services::batch`: multi-link report aggregation
//! - `config`: encoding parameters and logging configuration
//! - `errors`: crate-wide error taxonomy
//! - `cli`: command-line interface consumed by the binary
//!
//! The engine is purely synchronous and stateless: every operation is a pure
//! function over its input and the read-only [`config::EncodingConfig`], so
//! conversions may run concurrently without coordination.

pub mod cli;
pub mod config;
pub mod errors;
pub mod services;
pub mod system;
