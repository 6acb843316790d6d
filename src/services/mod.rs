//! Service layer for the conversion engine
//!
//! This module provides the identifier encoder, the per-platform link
//! converters, and the batch report aggregation shared by every caller
//! surface (CLI today, chat handlers upstream).

pub mod batch;
pub mod converter;
pub mod encoder;

pub use batch::convert_all;
pub use converter::{ConversionResult, LinkConverter, Platform};
pub use encoder::encode;
